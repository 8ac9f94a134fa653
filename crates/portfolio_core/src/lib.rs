//! Behavioral core of the portfolio app.
//!
//! Two independent machines live here: [`reveal::RevealController`], which
//! flips page sections visible exactly once as they scroll into view, and
//! [`contact::ContactFormSubmitter`], which drives one contact-form attempt
//! from idle through delivery to a success or error outcome. The actual mail
//! dispatch is behind the [`contact::MailDelivery`] seam; production wires in
//! [`emailjs::EmailJsDelivery`].

pub mod contact;
pub mod emailjs;
pub mod error;
pub mod reveal;

pub use contact::{
    ContactForm, ContactFormSubmitter, ContactPayload, DeliveryRoute, MailDelivery,
    SubmissionState,
};
pub use emailjs::{EmailJsDelivery, EMAILJS_SEND_ENDPOINT};
pub use error::DeliveryError;
pub use reveal::{
    IntersectionEvent, IntersectionSource, RevealController, RevealTargetId,
    REVEAL_VISIBILITY_THRESHOLD,
};
