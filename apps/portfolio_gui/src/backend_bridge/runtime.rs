//! Worker thread owning the async runtime. The UI never blocks on the mail
//! service or on image decoding; it queues commands here and consumes the
//! resulting events on its next frame.

use std::path::Path;
use std::thread;

use anyhow::Context as _;
use crossbeam_channel::{Receiver, Sender};
use portfolio_core::{DeliveryRoute, EmailJsDelivery, MailDelivery};
use url::Url;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

pub fn launch(
    route: DeliveryRoute,
    endpoint: Option<Url>,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::new(
                    UiErrorContext::WorkerStartup,
                    format!("failed to build worker runtime: {err}"),
                )));
                tracing::error!("failed to build worker runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let delivery = match endpoint {
                Some(endpoint) => EmailJsDelivery::with_endpoint(endpoint),
                None => EmailJsDelivery::new(),
            };
            tracing::info!(endpoint = %delivery.endpoint(), "delivery worker ready");
            let _ = ui_tx.try_send(UiEvent::WorkerReady);

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::SubmitContact { payload } => {
                        let outcome = delivery
                            .send(&route, &payload)
                            .await
                            .map_err(|err| err.to_string());
                        let _ = ui_tx.try_send(UiEvent::ContactSettled { outcome });
                    }
                    BackendCommand::LoadProjectImage { slug, path } => {
                        match load_project_image(&path).await {
                            Ok((width, height, rgba)) => {
                                let _ = ui_tx.try_send(UiEvent::ProjectImageLoaded {
                                    slug,
                                    width,
                                    height,
                                    rgba,
                                });
                            }
                            Err(err) => {
                                let _ = ui_tx.try_send(UiEvent::ProjectImageFailed {
                                    slug,
                                    reason: format!("{err:#}"),
                                });
                            }
                        }
                    }
                }
            }
            tracing::debug!("ui command queue closed; delivery worker exiting");
        });
    });
}

async fn load_project_image(path: &Path) -> anyhow::Result<(usize, usize, Vec<u8>)> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read project image '{}'", path.display()))?;
    // Decode off the async executor; JPEGs from a camera can be large.
    let decoded = tokio::task::spawn_blocking(move || image::load_from_memory(&bytes))
        .await
        .context("image decode task aborted")?
        .with_context(|| format!("failed to decode project image '{}'", path.display()))?;
    let rgba = decoded.to_rgba8();
    let (width, height) = (rgba.width() as usize, rgba.height() as usize);
    Ok((width, height, rgba.into_raw()))
}
