use crate::classifier::Severity;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiseaseId {
    ColletotrichumBlight,
    PhyllostictaLeafSpot,
    Healthy,
}

impl DiseaseId {
    pub const ALL: [DiseaseId; 3] = [
        DiseaseId::ColletotrichumBlight,
        DiseaseId::PhyllostictaLeafSpot,
        DiseaseId::Healthy,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ColletotrichumBlight => "colletotrichum_blight",
            Self::PhyllostictaLeafSpot => "phyllosticta_leaf_spot",
            Self::Healthy => "healthy",
        }
    }

    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|known| known.as_str() == id)
    }
}

impl std::fmt::Display for DiseaseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every class name the inference service can emit.
///
/// Adding a class here does not compile until [`ClassLabel::disease_id`]
/// maps it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ClassLabel {
    ColletotrichumBlight,
    PhyllostictaLeafSpot,
    Healthy,
}

impl ClassLabel {
    pub const ALL: [ClassLabel; 3] = [
        ClassLabel::ColletotrichumBlight,
        ClassLabel::PhyllostictaLeafSpot,
        ClassLabel::Healthy,
    ];

    /// The exact string sent as `class_name`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ColletotrichumBlight => "Colletotrichum Blight",
            Self::PhyllostictaLeafSpot => "Phyllosticta Leaf Spot",
            Self::Healthy => "Healthy",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|known| known.as_str() == label)
    }

    pub fn disease_id(self) -> DiseaseId {
        match self {
            Self::ColletotrichumBlight => DiseaseId::ColletotrichumBlight,
            Self::PhyllostictaLeafSpot => DiseaseId::PhyllostictaLeafSpot,
            Self::Healthy => DiseaseId::Healthy,
        }
    }
}

/// Static reference content for one disease (or the healthy state).
///
/// The `name_local` and narrative fields are in Nepali; `name_reference` is
/// the English name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiseaseRecord {
    pub id: DiseaseId,
    pub name_local: &'static str,
    pub name_reference: &'static str,
    pub description: &'static str,
    pub symptoms: &'static [&'static str],
    pub causes: &'static str,
    pub treatments: &'static [&'static str],
    pub preventions: &'static [&'static str],
    pub when_to_act: &'static str,
    pub severity: Severity,
}
