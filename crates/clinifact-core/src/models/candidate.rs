use serde::{Deserialize, Serialize};

use crate::annotation::{AnnotatedEntity, Annotations};
use crate::confidence::Confidence;
use crate::models::atomicity::{AtomicityRecommendation, SplitRecommendation};

/// One sentence prepared for drafting: its entities, atomicity decision,
/// and confidence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactCandidate {
    /// The source sentence text.
    pub sentence: String,
    /// Character span of the sentence in the source text.
    pub start: usize,
    pub end: usize,
    /// Index of the sentence in the annotation set.
    pub sentence_index: usize,
    /// Entities the sentence owns, copied out of the annotation set.
    pub entities: Vec<AnnotatedEntity>,
    pub atomicity: AtomicityRecommendation,
    /// Present only when `atomicity` is `ShouldSplit`.
    pub split_recommendation: Option<SplitRecommendation>,
    /// Targeted hint for `ComplexNeedsContext` sentences.
    pub context_suggestion: Option<String>,
    pub confidence: Confidence,
}

/// Everything the drafting engine needs for one source text: the full
/// annotation set, the per-sentence candidates, and prompt-ready
/// summaries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichedContext {
    pub source_text: String,
    /// Which field of the source record the text came from
    /// (e.g. "critique", "explanation").
    pub source_field: String,
    pub annotations: Annotations,
    pub candidates: Vec<FactCandidate>,
    /// "Found 3 diseases, 2 medications…"
    pub entity_summary: String,
    /// "'fever' (no)" per negated entity; empty if none.
    pub negation_summary: String,
    /// Counts per atomicity recommendation, zero counts omitted.
    pub atomicity_summary: String,
}

impl EnrichedContext {
    /// Negated entities across the whole annotation set.
    pub fn negated_entities(&self) -> Vec<&AnnotatedEntity> {
        self.annotations.negated_entities()
    }
}
