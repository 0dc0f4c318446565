use thiserror::Error;

/// Errors produced while talking to the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("API returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("failed to parse {what}: {source}")]
    Decode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize request body: {0}")]
    Encode(#[source] serde_json::Error),
}

impl ApiError {
    pub fn transport(url: impl Into<String>, message: impl ToString) -> Self {
        Self::Transport {
            url: url.into(),
            message: message.to_string(),
        }
    }

    /// Returns the HTTP status when the backend answered with a non-success code.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// A typed API result.
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration from environment: {0}")]
    Env(#[from] serde_env::Error),

    #[error("page size {0} is not one of 2, 10, 20, 50")]
    PageSize(u64),

    #[error("{0} must be greater than zero")]
    Zero(&'static str),
}
