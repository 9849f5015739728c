use super::types::{ErrorResponse, HealthStatus, PredictResponse, PredictionResult};
use crate::{
    config::ApiConfig,
    error::PredictionError,
    image::ImageSource,
    transport::{HttpTransport, RawResponse, Transport, TransportFailure, Upload},
};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

pub const PREDICT_PATH: &str = "/predict";
pub const HEALTH_PATH: &str = "/health";
pub const FILE_FIELD: &str = "file";

/// Sends leaf images to the inference service and classifies every outcome
/// into a [`PredictionResult`] or a [`PredictionError`].
///
/// The service does not serialize calls; callers are expected to keep at most
/// one prediction in flight per user action.
pub struct PredictionService {
    transport: Box<dyn Transport>,
}

impl PredictionService {
    pub fn new(transport: Box<dyn Transport>) -> Self {
        Self { transport }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(Box::new(HttpTransport::new(config.base_url.clone())))
    }

    pub fn base_url(&self) -> String {
        self.transport.base_url()
    }

    /// Switches backends for every later call. Not meant to race in-flight requests.
    pub fn set_base_url(&self, base_url: &str) {
        info!("Switching prediction backend to: {}", base_url);
        self.transport.set_base_url(base_url);
    }

    pub async fn predict(&self, image: ImageSource) -> Result<PredictionResult, PredictionError> {
        if !image.is_image() {
            warn!("Refusing to upload non-image content: {}", image.content_type());
            return Err(PredictionError::malformed(format!(
                "file must be an image, got '{}'",
                image.content_type()
            )));
        }

        let file_name = image.file_name();
        let (bytes, content_type) = image.into_parts();
        let upload = Upload {
            field: FILE_FIELD.to_string(),
            file_name,
            content_type,
            bytes,
        };

        debug!(
            "Submitting '{}' ({} bytes) for prediction",
            upload.file_name,
            upload.bytes.len()
        );

        let raw = self
            .transport
            .send(PREDICT_PATH, upload)
            .await
            .map_err(map_failure)?;
        let response: PredictResponse = decode(&raw)?;
        let result = PredictionResult::from_response(response).inspect_err(|e| {
            warn!("Rejected prediction payload: {}", e);
        })?;

        info!(
            "Prediction received: {} ({:.4})",
            result.class_label(),
            result.confidence()
        );

        Ok(result)
    }

    /// Readiness probe; not used on the prediction path.
    pub async fn health_check(&self) -> Result<HealthStatus, PredictionError> {
        let raw = self
            .transport
            .get(HEALTH_PATH)
            .await
            .map_err(map_failure)?;
        let health: HealthStatus = decode(&raw)?;

        debug!("Health check status: {}", health.status);
        Ok(health)
    }
}

fn map_failure(failure: TransportFailure) -> PredictionError {
    warn!("Transport failure: {}", failure);
    match failure {
        TransportFailure::NoResponse(_) => PredictionError::Unreachable,
        TransportFailure::TimedOut => PredictionError::Timeout,
        TransportFailure::Request(message) => PredictionError::Malformed(message),
    }
}

fn decode<T: DeserializeOwned>(raw: &RawResponse) -> Result<T, PredictionError> {
    if !raw.is_success() {
        let err = rejection(raw);
        warn!("Server rejected request with HTTP {}: {}", raw.status, err);
        return Err(err);
    }

    serde_json::from_slice(&raw.body).map_err(|e| {
        warn!("Unreadable response body: {}", e);
        PredictionError::malformed(format!("invalid response body: {}", e))
    })
}

/// `detail` when the body carries one, else the reason phrase.
fn rejection(raw: &RawResponse) -> PredictionError {
    let detail = serde_json::from_slice::<ErrorResponse>(&raw.body)
        .ok()
        .and_then(|body| body.detail)
        .and_then(|detail| match detail {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) => Some(s),
            other => Some(other.to_string()),
        })
        .filter(|detail| !detail.trim().is_empty());

    let message = detail.unwrap_or_else(|| {
        if raw.status_text.is_empty() {
            format!("HTTP {}", raw.status)
        } else {
            raw.status_text.clone()
        }
    });

    PredictionError::ServerRejected(message)
}
