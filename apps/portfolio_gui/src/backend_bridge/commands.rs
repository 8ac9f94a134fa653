//! Commands queued from the UI thread to the backend worker.

use std::path::PathBuf;

use portfolio_core::ContactPayload;

pub enum BackendCommand {
    SubmitContact {
        payload: ContactPayload,
    },
    LoadProjectImage {
        slug: String,
        path: PathBuf,
    },
}
