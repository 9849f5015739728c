use cardamom_client::{
    classifier::{Severity, UNKNOWN_SEVERITY, severity_category},
    reference::{self, ClassLabel, DiseaseId},
};
use pretty_assertions::assert_eq;
use std::collections::HashSet;

mod common;
use common::SERVICE_CLASS_NAMES;

#[test]
fn test_every_service_class_name_has_reference_material() {
    for class_name in SERVICE_CLASS_NAMES {
        let record = reference::resolve_by_class_label(class_name)
            .unwrap_or_else(|| panic!("missing reference for '{}'", class_name));
        assert_eq!(record.name_reference, class_name);
    }
}

#[test]
fn test_class_label_enumeration_matches_service_labels() {
    let known: HashSet<&str> = ClassLabel::ALL.iter().map(|label| label.as_str()).collect();
    let emitted: HashSet<&str> = SERVICE_CLASS_NAMES.into_iter().collect();
    assert_eq!(known, emitted);
}

#[test]
fn test_class_labels_map_to_distinct_diseases() {
    let ids: HashSet<DiseaseId> = ClassLabel::ALL.iter().map(|l| l.disease_id()).collect();
    assert_eq!(ids.len(), ClassLabel::ALL.len());
}

#[test]
fn test_lookup_miss_is_none() {
    assert!(reference::resolve_by_class_label("Cardamom Mosaic Virus").is_none());
    assert!(reference::resolve_by_class_label(" Healthy").is_none());
    assert!(reference::resolve_by_id("Healthy").is_none());
}

#[test]
fn test_resolve_by_id_uses_snake_case_ids() {
    let record = reference::resolve_by_id("phyllosticta_leaf_spot").unwrap();
    assert_eq!(record.name_local, "फाइलोस्टिक्टा पात दाग");
    assert_eq!(record.severity, Severity::Medium);
}

#[test]
fn test_all_records_in_catalogue_order() {
    let ids: Vec<DiseaseId> = reference::all_records().iter().map(|r| r.id).collect();
    assert_eq!(ids, DiseaseId::ALL.to_vec());
}

#[test]
fn test_record_severity_renders_known_badge() {
    for record in reference::all_records() {
        let badge = severity_category(record.severity.as_str());
        assert_ne!(badge, UNKNOWN_SEVERITY);
        assert_eq!(badge, record.severity.display());
    }
}

#[test]
fn test_record_serializes_with_ids_and_ordered_lists() {
    let record = reference::record(DiseaseId::ColletotrichumBlight);
    let json = serde_json::to_value(record).unwrap();

    assert_eq!(json["id"], "colletotrichum_blight");
    assert_eq!(json["severity"], "high");
    assert_eq!(json["symptoms"].as_array().unwrap().len(), record.symptoms.len());
    assert_eq!(json["treatments"][0], record.treatments[0]);
}
