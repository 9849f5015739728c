//! Pure mappings from scores and severities to display categories.

mod confidence;
mod severity;

pub use confidence::{
    ConfidenceCategory, HIGH_CONFIDENCE_THRESHOLD, MEDIUM_CONFIDENCE_THRESHOLD,
    confidence_category, format_confidence, is_low_confidence,
};
pub use severity::{Severity, SeverityDisplay, UNKNOWN_SEVERITY, severity_category};
