use serde::{Deserialize, Serialize};

use crate::confidence::Confidence;

/// How a source sentence should be decomposed before drafting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AtomicityRecommendation {
    /// At most one entity: already a single testable fact.
    AtomicSingle,
    /// Multiple independent facts: draft one statement per group.
    ShouldSplit,
    /// Related entities: one statement with multiple cloze candidates.
    MultiClozeOk,
    /// Complex sentence: keep together but add clinical context.
    ComplexNeedsContext,
}

impl AtomicityRecommendation {
    /// Short label used in atomicity summaries.
    pub fn label(self) -> &'static str {
        match self {
            Self::AtomicSingle => "atomic",
            Self::ShouldSplit => "should split",
            Self::MultiClozeOk => "multi-cloze ok",
            Self::ComplexNeedsContext => "needs context",
        }
    }
}

/// A proposal to split one sentence into several draft statements.
/// Split texts are placeholders; the drafting engine writes the prose.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitRecommendation {
    /// Index of the sentence this recommendation applies to.
    pub sentence_index: usize,
    /// Why the split is recommended.
    pub reason: String,
    /// One placeholder per proposed statement.
    pub split_texts: Vec<String>,
    /// Entity groupings, as indices into the annotation entity sequence.
    /// One group per proposed statement, aligned with `split_texts`.
    pub entity_groups: Vec<Vec<usize>>,
    pub confidence: Confidence,
}
