use crate::error::PredictionError;
use base64::{Engine, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};

pub const HEATMAP_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Success body of `POST /predict`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct PredictResponse {
    pub class_name: String,
    pub confidence: f64,
    pub heatmap: String,
    #[serde(default)]
    pub model_trained: Option<bool>,
    #[serde(default)]
    pub warning: Option<String>,
}

/// Failure body; FastAPI puts either a string or a list of validation
/// errors under `detail`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorResponse {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

/// Outcome of one successful prediction. `confidence` is always in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionResult {
    class_label: String,
    confidence: f64,
    heatmap: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    model_trained: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    warning: Option<String>,
}

impl PredictionResult {
    pub fn new(
        class_label: impl Into<String>,
        confidence: f64,
        heatmap: impl Into<String>,
    ) -> Result<Self, PredictionError> {
        if !confidence.is_finite() || !(0.0..=1.0).contains(&confidence) {
            return Err(PredictionError::malformed(format!(
                "confidence {} is outside [0, 1]",
                confidence
            )));
        }

        Ok(Self {
            class_label: class_label.into(),
            confidence,
            heatmap: heatmap.into(),
            model_trained: None,
            warning: None,
        })
    }

    pub(crate) fn from_response(response: PredictResponse) -> Result<Self, PredictionError> {
        let mut result = Self::new(response.class_name, response.confidence, response.heatmap)?;
        result.model_trained = response.model_trained;
        result.warning = response.warning.filter(|w| !w.trim().is_empty());
        Ok(result)
    }

    pub fn class_label(&self) -> &str {
        &self.class_label
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    /// Base64 PNG, without a data-URI prefix.
    pub fn heatmap(&self) -> &str {
        &self.heatmap
    }

    /// `None` when the service did not say.
    pub fn model_trained(&self) -> Option<bool> {
        self.model_trained
    }

    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    pub fn heatmap_data_uri(&self) -> String {
        format!("{}{}", HEATMAP_DATA_URI_PREFIX, self.heatmap)
    }

    pub fn heatmap_png(&self) -> Result<Vec<u8>, PredictionError> {
        STANDARD
            .decode(self.heatmap.trim())
            .map_err(|e| PredictionError::malformed(format!("heatmap is not valid base64: {}", e)))
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_status: Option<String>,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
