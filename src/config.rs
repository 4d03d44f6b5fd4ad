//! Application configuration.
//!
//! Reads from env vars, on top of the client's own:
//!   DAIKOKU_GUARD_STALE_UPDATES  drop out-of-order team updates (default: false)
//!   DAIKOKU_LANGUAGE             language assumed at login (default: En)

use backoffice_client::config::env_bool;
use backoffice_client::{ClientConfig, ConfigError};
use url::Url;

use crate::context::{ContextStore, DEFAULT_LANGUAGE};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub client: ClientConfig,
    pub guard_stale_updates: bool,
    pub default_language: String,
}

impl AppConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            client: ClientConfig::new(base_url),
            guard_stale_updates: false,
            default_language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with_base(None)
    }

    /// Everything from the environment except the base URL, when one is given.
    pub fn from_env_with_base(base_url: Option<Url>) -> Result<Self, ConfigError> {
        let client = ClientConfig::from_env_with_base(base_url)?;
        let default_language = std::env::var("DAIKOKU_LANGUAGE")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

        Ok(Self {
            client,
            guard_stale_updates: env_bool("DAIKOKU_GUARD_STALE_UPDATES", false),
            default_language,
        })
    }

    /// Empty store configured for this application.
    pub fn store(&self) -> ContextStore {
        ContextStore::new().guard_stale_updates(self.guard_stale_updates)
    }
}
