use thiserror::Error;

/// A single file part of a multipart upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    pub field: String,
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Whatever came back over the wire, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub status_text: String,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, status_text: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportFailure {
    /// Sent, but the peer never produced a complete response.
    #[error("no response received: {0}")]
    NoResponse(String),

    /// The request deadline elapsed first.
    #[error("request deadline elapsed")]
    TimedOut,

    /// The request could not be built locally.
    #[error("invalid request: {0}")]
    Request(String),
}
