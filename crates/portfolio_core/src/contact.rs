//! Contact-form submission lifecycle.
//!
//! One machine per mounted form. A submission moves Idle -> Sending ->
//! Success | Error, and a later submission from either terminal state starts
//! a fresh attempt. The network leg is behind [`MailDelivery`]; callers that
//! run it on another thread use the [`begin`](ContactFormSubmitter::begin) /
//! [`settle`](ContactFormSubmitter::settle) split, everyone else awaits
//! [`submit`](ContactFormSubmitter::submit).

use std::fmt::Display;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::DeliveryError;

/// Lifecycle status of the current (or most recent) submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

/// What actually gets handed to the mail service. All three fields are
/// required by the view layer; the core sends whatever it is given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// The mutable field store behind the rendered form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn payload(&self) -> ContactPayload {
        ContactPayload {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        }
    }

    /// True once every required field has content. The view uses this to
    /// gate the send control; the submitter itself never validates.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.message.trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}

/// The three opaque identifiers the mail-dispatch service needs: which
/// service, which template, and the public client key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryRoute {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

/// External mail-dispatch collaborator. Implementations transmit the payload
/// and report the outcome as an explicit result; the submitter never
/// inspects responses beyond success or failure.
#[async_trait]
pub trait MailDelivery: Send + Sync {
    async fn send(&self, route: &DeliveryRoute, payload: &ContactPayload)
        -> Result<(), DeliveryError>;
}

/// Drives one contact form through its submission lifecycle.
///
/// The machine does not serialize overlapping attempts; the view is expected
/// to disable its send control while `Sending`. If that guard is bypassed,
/// whichever attempt settles last wins, which is the inherited behavior and
/// deliberately left as-is rather than guessed into a stricter policy.
#[derive(Debug, Default)]
pub struct ContactFormSubmitter {
    state: SubmissionState,
}

impl ContactFormSubmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Starts an attempt: flips to `Sending` synchronously and returns the
    /// gathered payload for dispatch. With no form attached this is a no-op
    /// guard, not an error: nothing is sent and the state is untouched.
    pub fn begin(&mut self, form: Option<&ContactForm>) -> Option<ContactPayload> {
        let form = form?;
        self.state = SubmissionState::Sending;
        Some(form.payload())
    }

    /// Applies the delivery outcome for the attempt in flight. Success
    /// clears the form so a fresh message starts empty; failure leaves every
    /// field intact so the user can retry without retyping.
    pub fn settle<E: Display>(&mut self, form: &mut ContactForm, outcome: Result<(), E>) {
        if self.state != SubmissionState::Sending {
            tracing::warn!(state = ?self.state, "dropping settlement with no attempt in flight");
            return;
        }
        match outcome {
            Ok(()) => {
                self.state = SubmissionState::Success;
                form.clear();
            }
            Err(err) => {
                tracing::warn!(error = %err, "contact delivery failed");
                self.state = SubmissionState::Error;
            }
        }
    }

    /// Whole lifecycle in one await, for callers without a UI/worker split.
    pub async fn submit<D>(
        &mut self,
        form: Option<&mut ContactForm>,
        delivery: &D,
        route: &DeliveryRoute,
    ) where
        D: MailDelivery + ?Sized,
    {
        let Some(form) = form else {
            return;
        };
        let Some(payload) = self.begin(Some(&*form)) else {
            return;
        };
        let outcome = delivery.send(route, &payload).await;
        self.settle(form, outcome);
    }
}

#[cfg(test)]
#[path = "tests/contact_tests.rs"]
mod tests;
