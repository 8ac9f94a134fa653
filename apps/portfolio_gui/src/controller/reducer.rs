//! View-side state for the contact section, wrapping the core submission
//! machine. The UI renders from this and the event pump writes into it; the
//! lifecycle rules themselves live in `portfolio_core`.

use portfolio_core::{ContactForm, ContactFormSubmitter, ContactPayload, SubmissionState};

pub struct ContactViewState {
    pub form: ContactForm,
    pub open: bool,
    submitter: ContactFormSubmitter,
}

impl ContactViewState {
    pub fn new() -> Self {
        Self {
            form: ContactForm::default(),
            open: false,
            submitter: ContactFormSubmitter::new(),
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.submitter.state()
    }

    pub fn toggle_open(&mut self) {
        self.open = !self.open;
    }

    /// The send control stays disabled while an attempt is in flight and
    /// until every required field has content. This is the UI guard the
    /// core relies on to avoid overlapping submissions.
    pub fn can_send(&self) -> bool {
        self.submitter.state() != SubmissionState::Sending && self.form.is_complete()
    }

    /// Flips to `Sending` and hands back the payload to queue on the
    /// worker. The mounted form always exists here; the `None` guard is the
    /// core's concern.
    pub fn begin_submit(&mut self) -> Option<ContactPayload> {
        self.submitter.begin(Some(&self.form))
    }

    pub fn apply_outcome(&mut self, outcome: Result<(), String>) {
        self.submitter.settle(&mut self.form, outcome);
    }
}

impl Default for ContactViewState {
    fn default() -> Self {
        Self::new()
    }
}
