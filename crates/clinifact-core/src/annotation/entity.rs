use serde::{Deserialize, Serialize};

use crate::confidence::Confidence;

/// The closed set of entity types the annotator emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Disease,
    Medication,
    Chemical,
    Procedure,
    LabValue,
    Anatomy,
    Organism,
    Modifier,
    Quantity,
    Other,
}

impl EntityType {
    /// Types that stand alone as independent facts. Two entities of an
    /// independent type in one sentence force a split recommendation.
    pub fn is_independent(self) -> bool {
        matches!(self, Self::Disease | Self::Procedure)
    }

    /// Types whose omission from a draft statement matters clinically.
    pub fn is_critical(self) -> bool {
        matches!(
            self,
            Self::Disease | Self::Medication | Self::LabValue | Self::Procedure
        )
    }

    /// Types the unit/threshold accuracy check cares about.
    pub fn is_quantitative(self) -> bool {
        matches!(self, Self::Quantity | Self::LabValue)
    }

    /// Lowercase plural label for human-readable summaries.
    pub fn plural_label(self) -> &'static str {
        match self {
            Self::Disease => "diseases",
            Self::Medication => "medications",
            Self::Chemical => "chemicals",
            Self::Procedure => "procedures",
            Self::LabValue => "lab values",
            Self::Anatomy => "anatomical terms",
            Self::Organism => "organisms",
            Self::Modifier => "modifiers",
            Self::Quantity => "quantities",
            Self::Other => "other entities",
        }
    }

    /// Lowercase singular label, for counts of one.
    pub fn singular_label(self) -> &'static str {
        match self {
            Self::Disease => "disease",
            Self::Medication => "medication",
            Self::Chemical => "chemical",
            Self::Procedure => "procedure",
            Self::LabValue => "lab value",
            Self::Anatomy => "anatomical term",
            Self::Organism => "organism",
            Self::Modifier => "modifier",
            Self::Quantity => "quantity",
            Self::Other => "other entity",
        }
    }
}

/// One typed entity mention in the source text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotatedEntity {
    pub text: String,
    pub entity_type: EntityType,
    /// Character offsets into the source text. `start < end <= len`.
    pub start: usize,
    pub end: usize,
    /// Index of the sentence that owns this entity.
    pub sentence_index: usize,
    /// Whether the source explicitly negates this entity.
    pub negated: bool,
    /// The trigger phrase that negates it, e.g. "no evidence of".
    pub negation_trigger: Option<String>,
    /// Modifier strings attached to the mention, in source order.
    pub modifiers: Vec<String>,
    pub confidence: Confidence,
}

impl AnnotatedEntity {
    /// Whether two entities are clinically related by the fixed
    /// type-pair table. Order-insensitive.
    pub fn is_related_to(&self, other: &AnnotatedEntity) -> bool {
        related_types(self.entity_type, other.entity_type)
    }
}

/// The fixed table of clinically related type pairs. A sentence holding
/// one of these pairs is a good multi-cloze fact rather than a split.
pub fn related_types(a: EntityType, b: EntityType) -> bool {
    use EntityType::*;
    matches!(
        (a, b),
        (Medication, Disease)
            | (Disease, Medication)
            | (Medication, Chemical)
            | (Chemical, Medication)
            | (LabValue, Quantity)
            | (Quantity, LabValue)
            | (Disease, LabValue)
            | (LabValue, Disease)
            | (Medication, Quantity)
            | (Quantity, Medication)
    )
}
