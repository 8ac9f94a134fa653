//! Application settings: compiled defaults, then `portfolio.toml`, then
//! `PORTFOLIO_*` environment variables. Every layer is optional; the app
//! always starts with something usable.

use std::path::{Path, PathBuf};

use portfolio_core::DeliveryRoute;
use serde::Deserialize;

#[derive(Debug, Clone)]
pub struct Settings {
    pub emailjs_service_id: String,
    pub emailjs_template_id: String,
    pub emailjs_public_key: String,
    /// Override for the send endpoint (tests, self-hosted relay). `None`
    /// means the service's public endpoint.
    pub emailjs_endpoint: Option<String>,
    pub assets_dir: PathBuf,
    pub content_path: Option<PathBuf>,
    pub reduce_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            // The route identifiers are public client-side values by the
            // mail service's design, same as on the published site.
            emailjs_service_id: "service_kpvj5ad".into(),
            emailjs_template_id: "template_9ejoaek".into(),
            emailjs_public_key: "caPVS_0yACWtXDH9Y".into(),
            emailjs_endpoint: None,
            assets_dir: PathBuf::from("assets"),
            content_path: None,
            reduce_motion: false,
        }
    }
}

impl Settings {
    pub fn delivery_route(&self) -> DeliveryRoute {
        DeliveryRoute {
            service_id: self.emailjs_service_id.clone(),
            template_id: self.emailjs_template_id.clone(),
            public_key: self.emailjs_public_key.clone(),
        }
    }

    fn apply_file(&mut self, file: FileSettings) {
        if let Some(v) = file.emailjs_service_id {
            self.emailjs_service_id = v;
        }
        if let Some(v) = file.emailjs_template_id {
            self.emailjs_template_id = v;
        }
        if let Some(v) = file.emailjs_public_key {
            self.emailjs_public_key = v;
        }
        if let Some(v) = file.emailjs_endpoint {
            self.emailjs_endpoint = Some(v);
        }
        if let Some(v) = file.assets_dir {
            self.assets_dir = v;
        }
        if let Some(v) = file.content_path {
            self.content_path = Some(v);
        }
        if let Some(v) = file.reduce_motion {
            self.reduce_motion = v;
        }
    }

    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(v) = lookup("PORTFOLIO_EMAILJS_SERVICE_ID") {
            self.emailjs_service_id = v;
        }
        if let Some(v) = lookup("PORTFOLIO_EMAILJS_TEMPLATE_ID") {
            self.emailjs_template_id = v;
        }
        if let Some(v) = lookup("PORTFOLIO_EMAILJS_PUBLIC_KEY") {
            self.emailjs_public_key = v;
        }
        if let Some(v) = lookup("PORTFOLIO_EMAILJS_ENDPOINT") {
            self.emailjs_endpoint = Some(v);
        }
        if let Some(v) = lookup("PORTFOLIO_ASSETS_DIR") {
            self.assets_dir = PathBuf::from(v);
        }
        if let Some(v) = lookup("PORTFOLIO_CONTENT_PATH") {
            self.content_path = Some(PathBuf::from(v));
        }
        if let Some(v) = lookup("PORTFOLIO_REDUCE_MOTION") {
            self.reduce_motion = matches!(v.trim(), "1" | "true" | "yes");
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    emailjs_service_id: Option<String>,
    emailjs_template_id: Option<String>,
    emailjs_public_key: Option<String>,
    emailjs_endpoint: Option<String>,
    assets_dir: Option<PathBuf>,
    content_path: Option<PathBuf>,
    reduce_motion: Option<bool>,
}

/// Config file resolution: explicit path, then `./portfolio.toml`, then the
/// per-user config dir.
fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    let local = PathBuf::from("portfolio.toml");
    if local.is_file() {
        return Some(local);
    }
    dirs::config_dir()
        .map(|base| base.join("portfolio_gui").join("portfolio.toml"))
        .filter(|path| path.is_file())
}

pub fn load_settings(explicit_config: Option<&Path>) -> Settings {
    let mut settings = Settings::default();

    if let Some(path) = resolve_config_path(explicit_config) {
        match std::fs::read_to_string(&path) {
            Ok(raw) => match toml::from_str::<FileSettings>(&raw) {
                Ok(file) => {
                    tracing::info!(path = %path.display(), "loaded settings file");
                    settings.apply_file(file);
                }
                Err(err) => {
                    tracing::warn!(
                        path = %path.display(),
                        "ignoring unparsable settings file: {err}"
                    );
                }
            },
            Err(err) => {
                tracing::warn!(path = %path.display(), "failed to read settings file: {err}");
            }
        }
    }

    settings.apply_env(|name| std::env::var(name).ok());
    settings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_values_override_defaults_field_by_field() {
        let mut settings = Settings::default();
        let file: FileSettings = toml::from_str(
            r#"
            emailjs_service_id = "service_other"
            reduce_motion = true
            assets_dir = "media"
            "#,
        )
        .expect("parse");

        settings.apply_file(file);

        assert_eq!(settings.emailjs_service_id, "service_other");
        assert!(settings.reduce_motion);
        assert_eq!(settings.assets_dir, PathBuf::from("media"));
        // Untouched fields keep their defaults.
        assert_eq!(settings.emailjs_template_id, "template_9ejoaek");
        assert!(settings.content_path.is_none());
    }

    #[test]
    fn env_wins_over_file_values() {
        let mut settings = Settings::default();
        settings.apply_file(FileSettings {
            emailjs_public_key: Some("from-file".to_string()),
            ..FileSettings::default()
        });

        settings.apply_env(|name| {
            (name == "PORTFOLIO_EMAILJS_PUBLIC_KEY").then(|| "from-env".to_string())
        });

        assert_eq!(settings.emailjs_public_key, "from-env");
    }

    #[test]
    fn reduce_motion_env_accepts_common_truthy_spellings() {
        for raw in ["1", "true", "yes"] {
            let mut settings = Settings::default();
            settings.apply_env(|name| {
                (name == "PORTFOLIO_REDUCE_MOTION").then(|| raw.to_string())
            });
            assert!(settings.reduce_motion, "spelling {raw}");
        }

        let mut settings = Settings::default();
        settings.apply_env(|name| {
            (name == "PORTFOLIO_REDUCE_MOTION").then(|| "0".to_string())
        });
        assert!(!settings.reduce_motion);
    }

    #[test]
    fn delivery_route_carries_the_three_identifiers() {
        let route = Settings::default().delivery_route();
        assert_eq!(route.service_id, "service_kpvj5ad");
        assert_eq!(route.template_id, "template_9ejoaek");
        assert_eq!(route.public_key, "caPVS_0yACWtXDH9Y");
    }
}
