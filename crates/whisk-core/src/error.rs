use thiserror::Error;

/// Top-level error type for whisk.
#[derive(Debug, Error)]
pub enum WhiskError {
    /// Required configuration is missing or unreadable. Raised before any network call.
    #[error("config error: {0}")]
    Config(String),

    /// The control plane could not be reached.
    #[error("transport error: {0}")]
    Transport(String),

    /// The response body did not have the expected shape.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// The backend answered with an error payload. `message` is already sanitized.
    #[error("remote error: {message}")]
    Remote {
        message: String,
        payload: Option<serde_json::Value>,
    },

    /// Namespace name not present in the live namespace list.
    #[error("namespace not found: {0}")]
    NotFound(String),

    /// Memory/storage error.
    #[error("memory error: {0}")]
    Memory(String),

    /// Error from a messaging channel.
    #[error("channel error: {0}")]
    Channel(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl WhiskError {
    /// Build a `Remote` error without a backend payload.
    pub fn remote(message: impl Into<String>) -> Self {
        Self::Remote {
            message: message.into(),
            payload: None,
        }
    }
}
