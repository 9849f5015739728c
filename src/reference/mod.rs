//! Static disease reference content.
//!
//! The table is compiled into the binary and never mutated, so lookups need
//! no synchronization. A miss is a normal `None`, never a default record.

mod table;
mod types;

pub use types::{ClassLabel, DiseaseId, DiseaseRecord};

use tracing::warn;

pub fn record(id: DiseaseId) -> &'static DiseaseRecord {
    table::record(id)
}

pub fn resolve_by_id(id: &str) -> Option<&'static DiseaseRecord> {
    let found = DiseaseId::parse(id).map(record);
    if found.is_none() {
        warn!("No disease record for id: {}", id);
    }
    found
}

/// Maps a raw `class_name` from the inference service to its record.
pub fn resolve_by_class_label(label: &str) -> Option<&'static DiseaseRecord> {
    match ClassLabel::parse(label) {
        Some(class_label) => resolve_by_id(class_label.disease_id().as_str()),
        None => {
            warn!("Unmapped class label from inference service: {}", label);
            None
        }
    }
}

/// Records in catalogue order.
pub fn all_records() -> [&'static DiseaseRecord; 3] {
    DiseaseId::ALL.map(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::Severity;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_every_class_label_resolves() {
        for label in ClassLabel::ALL {
            let record = resolve_by_class_label(label.as_str())
                .unwrap_or_else(|| panic!("no record for {}", label.as_str()));
            assert_eq!(record.id, label.disease_id());
        }
    }

    #[test]
    fn test_every_id_resolves_to_its_own_record() {
        for id in DiseaseId::ALL {
            assert_eq!(resolve_by_id(id.as_str()).map(|r| r.id), Some(id));
        }
    }

    #[test]
    fn test_unknown_inputs_miss() {
        assert!(resolve_by_id("anthracnose").is_none());
        assert!(resolve_by_id("").is_none());
        assert!(resolve_by_class_label("Leaf Rust").is_none());
        assert!(resolve_by_class_label("healthy").is_none());
    }

    #[test]
    fn test_lookups_are_stable() {
        let first = resolve_by_class_label("Phyllosticta Leaf Spot").unwrap();
        let second = resolve_by_class_label("Phyllosticta Leaf Spot").unwrap();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_records_are_complete() {
        for record in all_records() {
            assert!(!record.name_local.is_empty());
            assert!(!record.description.is_empty());
            assert!(!record.symptoms.is_empty());
            assert!(!record.treatments.is_empty());
            assert!(!record.preventions.is_empty());
            assert!(!record.when_to_act.is_empty());
        }
    }

    #[test]
    fn test_severities() {
        assert_eq!(record(DiseaseId::ColletotrichumBlight).severity, Severity::High);
        assert_eq!(record(DiseaseId::PhyllostictaLeafSpot).severity, Severity::Medium);
        assert_eq!(record(DiseaseId::Healthy).severity, Severity::Low);
    }
}
