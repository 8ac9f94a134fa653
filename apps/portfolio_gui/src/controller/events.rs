//! Events flowing from the backend worker to the UI thread.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    WorkerStartup,
    Assets,
    General,
}

#[derive(Debug, Clone)]
pub struct UiError {
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn new(context: UiErrorContext, message: impl Into<String>) -> Self {
        Self {
            context,
            message: message.into(),
        }
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Short status-bar text. Full detail goes to the log only.
    pub fn user_message(&self) -> String {
        match self.context {
            UiErrorContext::WorkerStartup => {
                "Background worker failed to start; contact form is unavailable".to_string()
            }
            UiErrorContext::Assets => "Some project images could not be loaded".to_string(),
            UiErrorContext::General => self.message.clone(),
        }
    }
}

pub enum UiEvent {
    WorkerReady,
    /// Outcome of the submission attempt in flight. Failure causes are
    /// already collapsed to a message; the form only renders one generic
    /// retry invitation.
    ContactSettled {
        outcome: Result<(), String>,
    },
    ProjectImageLoaded {
        slug: String,
        width: usize,
        height: usize,
        rgba: Vec<u8>,
    },
    ProjectImageFailed {
        slug: String,
        reason: String,
    },
    Error(UiError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worker_startup_errors_render_a_stable_banner() {
        let err = UiError::new(UiErrorContext::WorkerStartup, "no threads");
        assert_eq!(err.context(), UiErrorContext::WorkerStartup);
        assert_eq!(err.message(), "no threads");
        assert!(err.user_message().contains("contact form is unavailable"));
    }

    #[test]
    fn general_errors_surface_their_own_message() {
        let err = UiError::new(UiErrorContext::General, "command queue unavailable");
        assert_eq!(err.user_message(), "command queue unavailable");
    }
}
