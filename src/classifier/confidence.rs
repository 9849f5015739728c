use serde::Serialize;

pub const HIGH_CONFIDENCE_THRESHOLD: f64 = 0.8;
pub const MEDIUM_CONFIDENCE_THRESHOLD: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceCategory {
    High,
    Medium,
    Low,
}

impl ConfidenceCategory {
    pub fn color(self) -> &'static str {
        match self {
            Self::High => "#4caf50",
            Self::Medium => "#ff9800",
            Self::Low => "#f44336",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    /// Low confidence asks the user to retake the photo.
    pub fn warrants_retake(self) -> bool {
        self == Self::Low
    }
}

impl std::fmt::Display for ConfidenceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// `c >= 0.8` is High, `0.6 <= c < 0.8` is Medium, anything else (NaN
/// included) is Low.
pub fn confidence_category(confidence: f64) -> ConfidenceCategory {
    if confidence >= HIGH_CONFIDENCE_THRESHOLD {
        ConfidenceCategory::High
    } else if confidence >= MEDIUM_CONFIDENCE_THRESHOLD {
        ConfidenceCategory::Medium
    } else {
        ConfidenceCategory::Low
    }
}

pub fn is_low_confidence(confidence: f64) -> bool {
    confidence_category(confidence).warrants_retake()
}

/// `0.875` with two decimals renders as `"87.50%"`.
pub fn format_confidence(confidence: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, confidence * 100.0)
}
