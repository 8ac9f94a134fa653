//! Native shell for the single-page portfolio. The UI thread renders; a
//! worker thread owns the async runtime and talks to the mail service.

mod backend_bridge;
mod config;
mod controller;
mod ui;

use std::path::PathBuf;

use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;
use site_content::{default_catalog, Catalog};
use url::Url;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::PortfolioApp;

#[derive(Parser, Debug)]
#[command(name = "portfolio_gui", about = "Single-page personal portfolio, rendered natively")]
struct Cli {
    /// Settings file (defaults to ./portfolio.toml, then the user config dir)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Content catalog override (TOML); built-in content is used otherwise
    #[arg(long)]
    content: Option<PathBuf>,

    /// Directory holding the portrait and project card images
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Show every section immediately instead of revealing on scroll
    #[arg(long)]
    no_animations: bool,
}

fn resolve_catalog(content_path: Option<&PathBuf>) -> Catalog {
    match content_path {
        Some(path) => match Catalog::load(path) {
            Ok(catalog) => {
                tracing::info!(path = %path.display(), "loaded content catalog");
                catalog
            }
            Err(err) => {
                tracing::warn!("falling back to built-in content: {err}");
                default_catalog()
            }
        },
        None => default_catalog(),
    }
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let cli = Cli::parse();
    let mut settings = config::load_settings(cli.config.as_deref());
    if let Some(content) = cli.content {
        settings.content_path = Some(content);
    }
    if let Some(assets) = cli.assets {
        settings.assets_dir = assets;
    }
    if cli.no_animations {
        settings.reduce_motion = true;
    }

    let catalog = resolve_catalog(settings.content_path.as_ref());

    let endpoint = settings.emailjs_endpoint.as_deref().and_then(|raw| {
        match Url::parse(raw) {
            Ok(url) => Some(url),
            Err(err) => {
                tracing::warn!(raw, "ignoring invalid delivery endpoint override: {err}");
                None
            }
        }
    });

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    backend_bridge::launch(settings.delivery_route(), endpoint, cmd_rx, ui_tx);

    let window_title = format!("{} | Portfolio", catalog.profile.name);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(&window_title)
            .with_inner_size([1200.0, 840.0])
            .with_min_inner_size([900.0, 640.0]),
        ..Default::default()
    };
    eframe::run_native(
        "portfolio_gui",
        options,
        Box::new(move |cc| {
            Ok(Box::new(PortfolioApp::new(
                cc, catalog, settings, cmd_tx, ui_rx,
            )))
        }),
    )
}
