//! Client configuration.
//!
//! Reads from env vars:
//!   DAIKOKU_BASE_URL        back-office origin (required)
//!   DAIKOKU_SESSION_COOKIE  `name=value` session cookie to seed the jar
//!   DAIKOKU_TIMEOUT_SECS    request timeout (default: none)

use std::time::Duration;

use url::Url;

use crate::error::ConfigError;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: Url,
    pub session_cookie: Option<String>,
    /// No timeout unless set.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            session_cookie: None,
            timeout: None,
        }
    }

    pub fn with_session_cookie(mut self, cookie: impl Into<String>) -> Self {
        self.session_cookie = Some(cookie.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with_base(None)
    }

    /// Like [`ClientConfig::from_env`], with `base_url` taking precedence
    /// over DAIKOKU_BASE_URL when given.
    pub fn from_env_with_base(base_url: Option<Url>) -> Result<Self, ConfigError> {
        let base_url = match base_url {
            Some(url) => url,
            None => {
                let raw = std::env::var("DAIKOKU_BASE_URL")
                    .map_err(|_| ConfigError::Missing("DAIKOKU_BASE_URL"))?;
                Url::parse(&raw).map_err(|e| ConfigError::Invalid {
                    var: "DAIKOKU_BASE_URL",
                    reason: e.to_string(),
                })?
            }
        };

        let session_cookie = std::env::var("DAIKOKU_SESSION_COOKIE")
            .ok()
            .filter(|v| !v.trim().is_empty());

        let timeout = match std::env::var("DAIKOKU_TIMEOUT_SECS") {
            Ok(v) => {
                let secs: u64 = v.trim().parse().map_err(|_| ConfigError::Invalid {
                    var: "DAIKOKU_TIMEOUT_SECS",
                    reason: format!("expected seconds, got {:?}", v),
                })?;
                Some(Duration::from_secs(secs))
            }
            Err(_) => None,
        };

        Ok(Self {
            base_url,
            session_cookie,
            timeout,
        })
    }
}

/// Boolean env var: `1`, `true`, `yes`, `on` (any case) are true.
pub fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|v| parse_bool(&v).unwrap_or(default))
        .unwrap_or(default)
}

fn parse_bool(v: &str) -> Option<bool> {
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
