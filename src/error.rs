use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid image: {0}")]
    InvalidImage(String),

    #[error("Prediction error: {0}")]
    Prediction(#[from] PredictionError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn invalid_image(msg: impl Into<String>) -> Self {
        Self::InvalidImage(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

/// Classified failure of a call to the inference service.
///
/// Every variant is recoverable: the caller decides whether to retry. The
/// `Display` output is meant to be shown to the user as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PredictionError {
    /// The service answered with a non-success status.
    #[error("Server error: {0}")]
    ServerRejected(String),

    /// The request went out but no response came back.
    #[error("Cannot connect to server. Check the network and that the backend is running.")]
    Unreachable,

    /// No complete response within the request deadline.
    #[error("Request timeout. The server took too long to respond, please try again.")]
    Timeout,

    /// Local failure while building the request or reading the response.
    #[error("Error: {0}")]
    Malformed(String),
}

impl PredictionError {
    pub fn server_rejected(detail: impl Into<String>) -> Self {
        Self::ServerRejected(detail.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }

    /// Whether retrying the same action can reasonably succeed.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, Self::Malformed(_))
    }
}
