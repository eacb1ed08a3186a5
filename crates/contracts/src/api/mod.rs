//! Wire contracts between the DocChat page and its server.
//!
//! Both endpoints use the HTTP status as the acknowledgement flag: a 2xx reply
//! carries the success body, anything else carries [`ApiError`].

pub mod chat;
pub mod upload;

use serde::{Deserialize, Serialize};

/// Body of every non-acknowledged reply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiError {
    pub const UNKNOWN: &'static str = "Unknown server error";

    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
        }
    }

    /// Server explanation, or a placeholder when the body carried none.
    pub fn message(&self) -> &str {
        match self.error.as_deref() {
            Some(e) if !e.trim().is_empty() => e,
            _ => Self::UNKNOWN,
        }
    }
}
