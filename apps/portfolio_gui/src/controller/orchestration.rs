//! Command orchestration helpers from UI actions to the backend queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

/// Queues a command without blocking the frame. Returns whether the command
/// was accepted; on failure the status line explains what happened and the
/// caller decides how to unwind its own state.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) -> bool {
    let cmd_name = match &cmd {
        BackendCommand::SubmitContact { .. } => "submit_contact",
        BackendCommand::LoadProjectImage { .. } => "load_project_image",
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            true
        }
        Err(TrySendError::Full(_)) => {
            *status = "Still working on the previous request; please retry".to_string();
            false
        }
        Err(TrySendError::Disconnected(_)) => {
            *status = "Background worker is not running; restart the app".to_string();
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;
    use portfolio_core::ContactPayload;

    fn payload() -> ContactPayload {
        ContactPayload {
            name: "A".to_string(),
            email: "a@b.com".to_string(),
            message: "hi".to_string(),
        }
    }

    #[test]
    fn accepted_commands_report_queued() {
        let (tx, rx) = bounded(1);
        let mut status = String::new();

        assert!(dispatch_backend_command(
            &tx,
            BackendCommand::SubmitContact { payload: payload() },
            &mut status,
        ));
        assert!(status.is_empty());
        assert!(rx.try_recv().is_ok());
    }

    #[test]
    fn full_queue_sets_a_retry_status() {
        let (tx, _rx) = bounded(1);
        let mut status = String::new();
        tx.try_send(BackendCommand::SubmitContact { payload: payload() })
            .expect("first fits");

        assert!(!dispatch_backend_command(
            &tx,
            BackendCommand::SubmitContact { payload: payload() },
            &mut status,
        ));
        assert!(status.contains("retry"));
    }

    #[test]
    fn disconnected_worker_sets_a_restart_status() {
        let (tx, rx) = bounded(1);
        drop(rx);
        let mut status = String::new();

        assert!(!dispatch_backend_command(
            &tx,
            BackendCommand::SubmitContact { payload: payload() },
            &mut status,
        ));
        assert!(status.contains("worker"));
    }
}
