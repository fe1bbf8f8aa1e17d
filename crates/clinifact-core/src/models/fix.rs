use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::confidence::Confidence;

/// The kind of automatic correction that was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixType {
    /// A dropped negation was reinstated from the source trigger.
    NegationInserted,
    /// A missing critical entity was added to the statement.
    EntityAdded,
    /// A drifted unit was replaced with the source unit.
    UnitReplaced,
    /// A dropped comparator was inserted before a value.
    ComparatorAdded,
}

/// One append-only audit entry for an applied fix.
///
/// Created only by the auto-fixer and never mutated afterwards. Every
/// record must cite the literal source evidence that justified the fix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixRecord {
    pub fix_type: FixType,
    /// Index of the statement that was corrected.
    pub statement_index: usize,
    /// Statement text before the fix.
    pub original_text: String,
    /// Statement text after the fix.
    pub fixed_text: String,
    /// The literal source text that justified the fix.
    pub source_evidence: String,
    /// Where in the source the evidence sits, e.g. "sentence[1]".
    pub source_location: String,
    pub confidence: Confidence,
    /// Human-readable description of the issue that was resolved.
    pub description: String,
    pub timestamp: DateTime<Utc>,
}

impl FixRecord {
    /// Render the canonical source location for sentence `index`.
    pub fn sentence_location(index: usize) -> String {
        format!("sentence[{index}]")
    }
}
