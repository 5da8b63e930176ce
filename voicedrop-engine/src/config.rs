use serde::{Deserialize, Serialize};

/// Used when no override is present; matches the transcription service's
/// local development address.
pub const DEFAULT_API_BASE: &str = "http://localhost:5002";

/// Environment override for the API base URL.
pub const API_BASE_ENV: &str = "VOICEDROP_API_BASE";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub api_base: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.into(),
        }
    }
}

impl ServiceConfig {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
        }
    }

    /// Resolves the API base from the environment, falling back to
    /// [`DEFAULT_API_BASE`] when the variable is unset, empty, or not a
    /// parseable URL.
    pub fn from_env() -> Self {
        match std::env::var(API_BASE_ENV) {
            Ok(raw) if !raw.trim().is_empty() => Self::from_override(raw.trim()),
            _ => Self::default(),
        }
    }

    fn from_override(raw: &str) -> Self {
        match url::Url::parse(raw) {
            Ok(_) => Self::new(raw),
            Err(e) => {
                log::warn!("ignoring invalid {API_BASE_ENV} {raw:?} ({e}); using {DEFAULT_API_BASE}");
                Self::default()
            }
        }
    }
}
