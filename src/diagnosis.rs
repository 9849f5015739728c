use crate::{
    classifier::{ConfidenceCategory, confidence_category, format_confidence},
    prediction::PredictionResult,
    reference::{DiseaseRecord, resolve_by_class_label},
};
use serde::Serialize;

/// Everything a result screen needs, derived from one prediction.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnosis {
    #[serde(skip)]
    prediction: PredictionResult,
    pub class_label: String,
    pub confidence: f64,
    pub confidence_percent: String,
    pub confidence_category: ConfidenceCategory,
    pub confidence_color: &'static str,
    pub low_confidence_warning: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_warning: Option<String>,
    /// `None` when no reference material exists for the label.
    pub reference: Option<&'static DiseaseRecord>,
}

impl Diagnosis {
    pub fn from_prediction(prediction: PredictionResult) -> Self {
        let category = confidence_category(prediction.confidence());

        Self {
            class_label: prediction.class_label().to_string(),
            confidence: prediction.confidence(),
            confidence_percent: format_confidence(prediction.confidence(), 2),
            confidence_category: category,
            confidence_color: category.color(),
            low_confidence_warning: category.warrants_retake(),
            model_warning: prediction.warning().map(str::to_string),
            reference: resolve_by_class_label(prediction.class_label()),
            prediction,
        }
    }

    pub fn prediction(&self) -> &PredictionResult {
        &self.prediction
    }
}
