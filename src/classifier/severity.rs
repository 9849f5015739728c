use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// Badge color plus the label in Nepali and English.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeverityDisplay {
    pub color: &'static str,
    pub label_local: &'static str,
    pub label_reference: &'static str,
}

pub const UNKNOWN_SEVERITY: SeverityDisplay = SeverityDisplay {
    color: "#9e9e9e",
    label_local: "अज्ञात",
    label_reference: "Unknown",
};

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Low, Severity::Medium, Severity::High];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Case-insensitive; surrounding whitespace is ignored.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|severity| severity.as_str().eq_ignore_ascii_case(raw))
    }

    pub fn display(self) -> SeverityDisplay {
        match self {
            Self::Low => SeverityDisplay {
                color: "#4caf50",
                label_local: "कम गम्भीर",
                label_reference: "Low severity",
            },
            Self::Medium => SeverityDisplay {
                color: "#ff9800",
                label_local: "मध्यम गम्भीर",
                label_reference: "Moderate severity",
            },
            Self::High => SeverityDisplay {
                color: "#f44336",
                label_local: "अत्यन्त गम्भीर",
                label_reference: "High severity",
            },
        }
    }
}

/// Unrecognized values map to [`UNKNOWN_SEVERITY`].
pub fn severity_category(raw: &str) -> SeverityDisplay {
    Severity::parse(raw)
        .map(Severity::display)
        .unwrap_or(UNKNOWN_SEVERITY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defined_severities() {
        assert_eq!(severity_category("low").color, "#4caf50");
        assert_eq!(severity_category("low").label_local, "कम गम्भीर");
        assert_eq!(severity_category("medium").color, "#ff9800");
        assert_eq!(severity_category("medium").label_local, "मध्यम गम्भीर");
        assert_eq!(severity_category("high").color, "#f44336");
        assert_eq!(severity_category("high").label_local, "अत्यन्त गम्भीर");
    }

    #[test]
    fn test_unknown_severity_falls_back() {
        assert_eq!(severity_category("critical"), UNKNOWN_SEVERITY);
        assert_eq!(severity_category(""), UNKNOWN_SEVERITY);
        assert_eq!(UNKNOWN_SEVERITY.label_local, "अज्ञात");
    }

    #[test]
    fn test_parse_is_lenient_about_case_and_whitespace() {
        assert_eq!(Severity::parse(" HIGH "), Some(Severity::High));
        assert_eq!(Severity::parse("Medium"), Some(Severity::Medium));
        assert_eq!(Severity::parse("mild"), None);
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&Severity::Medium).unwrap(), "\"medium\"");
        let parsed: Severity = serde_json::from_str("\"high\"").unwrap();
        assert_eq!(parsed, Severity::High);
    }
}
