use directories::BaseDirs;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-05-20";

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub api_key: String,
    pub model: String,
    pub endpoint: String,
    /// Ask the model to ground its draft with web search.
    pub search_grounding: bool,
    /// Separator between recipients in the `sms:` URI. Platforms disagree
    /// (`;` on most Android builds, `,` on iOS).
    pub recipient_delimiter: String,
    pub settle_delay_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            search_grounding: true,
            recipient_delimiter: ";".to_string(),
            settle_delay_ms: 2000,
        }
    }
}

impl AppConfig {
    // Settings are read from the user config dir only. The dashboard never writes them back.
    fn toml_path() -> Option<PathBuf> {
        let base = BaseDirs::new()?;
        Some(base.config_dir().join("vendor-dashboard.toml"))
    }

    pub fn load() -> Self {
        let Some(path) = Self::toml_path() else {
            log::warn!("No config directory, using default settings");
            return Self::default();
        };
        match fs::read_to_string(&path) {
            Ok(text) => match Self::from_toml_str(&text) {
                Ok(cfg) => {
                    log::info!("Loaded settings from {}", path.display());
                    cfg
                }
                Err(e) => {
                    log::warn!("Ignoring {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::debug!("No settings at {} ({}), using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        let mut cfg = toml::from_str::<AppConfig>(text)?;
        cfg.endpoint = crate::utils::normalize_url(&cfg.endpoint);
        if cfg.recipient_delimiter.is_empty() {
            cfg.recipient_delimiter = Self::default().recipient_delimiter;
        }
        Ok(cfg)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}

#[cfg(feature = "gui")]
pub fn build_ui(app: &adw::Application) {
    let config = AppConfig::load();
    if config.api_key.is_empty() {
        log::warn!("No api_key configured; message suggestions will fail");
    }
    crate::ui::main_window::show_main_window(app, config);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let cfg = AppConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.settle_delay(), Duration::from_secs(2));
    }

    #[test]
    fn partial_file_overrides_only_given_keys() {
        let cfg = AppConfig::from_toml_str(
            r#"
            api_key = "secret"
            recipient_delimiter = ","
            search_grounding = false
            endpoint = "proxy.internal/models/"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.api_key, "secret");
        assert_eq!(cfg.recipient_delimiter, ",");
        assert!(!cfg.search_grounding);
        assert_eq!(cfg.endpoint, "https://proxy.internal/models");
        assert_eq!(cfg.model, DEFAULT_MODEL);
        assert_eq!(cfg.settle_delay_ms, 2000);
    }

    #[test]
    fn blank_delimiter_falls_back() {
        let cfg = AppConfig::from_toml_str(r#"recipient_delimiter = """#).unwrap();
        assert_eq!(cfg.recipient_delimiter, ";");
    }

    #[test]
    fn bad_toml_is_an_error() {
        assert!(AppConfig::from_toml_str("settle_delay_ms = \"soon\"").is_err());
    }
}
