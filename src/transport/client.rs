use super::types::{RawResponse, TransportFailure, Upload};
use async_trait::async_trait;
use reqwest::{
    RequestBuilder,
    multipart::{Form, Part},
};
use std::{
    sync::{Arc, PoisonError, RwLock},
    time::Duration,
};
use tokio::time::timeout;
use tracing::{debug, info};

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// One attempt per call, no retries. Failures are classified, never retried.
#[async_trait]
pub trait Transport: Send + Sync {
    /// POSTs `upload` as a multipart body to `path` under the base URL.
    async fn send(&self, path: &str, upload: Upload) -> Result<RawResponse, TransportFailure>;

    /// Plain GET against `path` under the base URL.
    async fn get(&self, path: &str) -> Result<RawResponse, TransportFailure>;

    fn base_url(&self) -> String;

    fn set_base_url(&self, base_url: &str);
}

/// reqwest-backed transport.
///
/// Clones share the same base URL, so re-pointing one handle re-points every
/// component holding a clone.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Arc<RwLock<String>>,
    timeout: Duration,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, REQUEST_TIMEOUT)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let base_url = base_url.into();
        debug!("Creating HTTP transport for: {}", base_url);

        Self {
            client: reqwest::Client::new(),
            base_url: Arc::new(RwLock::new(base_url)),
            timeout,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url(), path)
    }

    /// Runs the whole exchange, body included, under the hard deadline.
    async fn execute(&self, request: RequestBuilder) -> Result<RawResponse, TransportFailure> {
        match timeout(self.timeout, exchange(request)).await {
            Ok(result) => result,
            Err(_) => {
                debug!("Request exceeded deadline of {:?}", self.timeout);
                Err(TransportFailure::TimedOut)
            }
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, path: &str, upload: Upload) -> Result<RawResponse, TransportFailure> {
        let url = self.url(path);
        debug!(
            "Uploading '{}' ({} bytes, {}) to {}",
            upload.file_name,
            upload.bytes.len(),
            upload.content_type,
            url
        );

        let part = Part::bytes(upload.bytes)
            .file_name(upload.file_name)
            .mime_str(&upload.content_type)
            .map_err(|e| {
                TransportFailure::Request(format!(
                    "invalid content type '{}': {}",
                    upload.content_type, e
                ))
            })?;
        let form = Form::new().part(upload.field, part);

        self.execute(self.client.post(url).multipart(form)).await
    }

    async fn get(&self, path: &str) -> Result<RawResponse, TransportFailure> {
        let url = self.url(path);
        debug!("GET {}", url);

        self.execute(self.client.get(url)).await
    }

    fn base_url(&self) -> String {
        self.base_url
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set_base_url(&self, base_url: &str) {
        info!("Re-pointing transport to: {}", base_url);
        *self
            .base_url
            .write()
            .unwrap_or_else(PoisonError::into_inner) = base_url.to_string();
    }
}

async fn exchange(request: RequestBuilder) -> Result<RawResponse, TransportFailure> {
    let response = request.send().await.map_err(classify)?;
    let status = response.status();
    let body = response.bytes().await.map_err(classify)?;

    debug!("Received HTTP {} ({} bytes)", status.as_u16(), body.len());

    Ok(RawResponse {
        status: status.as_u16(),
        status_text: status.canonical_reason().unwrap_or_default().to_string(),
        body: body.to_vec(),
    })
}

// Deadlines are enforced by `execute`, so a reqwest error is either a local
// build failure or a request that got no usable answer.
fn classify(e: reqwest::Error) -> TransportFailure {
    if e.is_builder() {
        TransportFailure::Request(e.to_string())
    } else {
        TransportFailure::NoResponse(e.to_string())
    }
}

fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
