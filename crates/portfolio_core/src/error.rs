use thiserror::Error;

/// Failure of one delivery attempt. The submission machine collapses every
/// variant into the same user-facing `Error` state; the variants exist for
/// logs and tests.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("contact request never reached the mail service: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("mail service rejected the contact request (status {status}): {body}")]
    Rejected { status: u16, body: String },
}
