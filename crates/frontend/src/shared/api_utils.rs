//! API utilities for page-server communication
//!
//! Resolves the endpoint URLs the flows post to.

use crate::config::ClientConfig;

/// Fully resolved endpoint URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub upload: String,
    pub chat: String,
}

impl Endpoints {
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::with_base(&api_base(config), config)
    }

    pub fn with_base(base: &str, config: &ClientConfig) -> Self {
        Self {
            upload: join_url(base, &config.api.upload_path),
            chat: join_url(base, &config.api.chat_path),
        }
    }
}

/// Get the base URL for API requests
///
/// The configured base wins; otherwise the page's own origin is used, so a
/// server that also serves the page needs no configuration.
///
/// # Returns
/// - e.g. "http://localhost:5000"
/// - Empty string if window is not available (relative URLs)
pub fn api_base(config: &ClientConfig) -> String {
    if !config.api.base.is_empty() {
        return config.api.base.clone();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Join a base URL and a path with exactly one slash between them.
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{}/{}", base, path)
}
