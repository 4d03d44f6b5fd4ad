use thiserror::Error;

/// Failure to obtain a parsed body from the back-office.
///
/// A request that reached the server and came back with `done: false` is not
/// an error at this level; see `backoffice_types::ActionResponse`.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request to {path} failed: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to parse response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
}

impl ClientError {
    /// Path of the request that failed, when known.
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Transport { path, .. } | Self::Decode { path, .. } => Some(path),
            Self::Url(_) | Self::Build(_) => None,
        }
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("invalid {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}
