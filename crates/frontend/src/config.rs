//! Client configuration
//!
//! Defaults are embedded as TOML. The page query string may override the API
//! base and the log level, e.g. `?api_base=http://127.0.0.1:5000&log_level=info`.

use contracts::api::chat::CHAT_PATH;
use contracts::api::upload::UPLOAD_PATH;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api: ApiConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Empty means "same origin as the page".
    #[serde(default)]
    pub base: String,
    #[serde(default = "default_upload_path")]
    pub upload_path: String,
    #[serde(default = "default_chat_path")]
    pub chat_path: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid client config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Query-string overrides
#[derive(Debug, Deserialize, Default)]
struct ConfigOverrides {
    api_base: Option<String>,
    log_level: Option<String>,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base = ""
upload_path = "/upload"
chat_path = "/chat"

[logging]
level = "debug"
"#;

fn default_upload_path() -> String {
    UPLOAD_PATH.to_string()
}

fn default_chat_path() -> String {
    CHAT_PATH.to_string()
}

impl ClientConfig {
    /// Parse the embedded defaults and apply overrides from the current page URL.
    ///
    /// Also returns a rejected `log_level` override; logging is not set up
    /// yet, so the caller reports it.
    pub fn load() -> Result<(Self, Option<String>), ConfigError> {
        let mut config = Self::from_toml(DEFAULT_CONFIG)?;
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let rejected = config.apply_query(&search);
        Ok((config, rejected))
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Apply `api_base` / `log_level` from a URL query string (leading `?` optional).
    /// Malformed query strings are ignored. An unknown level is left out and
    /// handed back.
    pub fn apply_query(&mut self, query: &str) -> Option<String> {
        let overrides: ConfigOverrides =
            serde_qs::from_str(query.trim_start_matches('?')).unwrap_or_default();

        if let Some(base) = overrides.api_base {
            self.api.base = base.trim().to_string();
        }
        match overrides.log_level {
            Some(level) if parse_level(&level).is_some() => {
                self.logging.level = level;
                None
            }
            rejected => rejected,
        }
    }

    pub fn log_level(&self) -> log::Level {
        parse_level(&self.logging.level).unwrap_or(log::Level::Debug)
    }
}

fn parse_level(level: &str) -> Option<log::Level> {
    level.trim().parse().ok()
}
