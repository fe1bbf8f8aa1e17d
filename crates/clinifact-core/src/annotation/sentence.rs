use serde::{Deserialize, Serialize};

/// One sentence of the source text, with the linguistic signals the
/// atomicity analyzer needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentenceSpan {
    pub text: String,
    /// Character offsets into the source text.
    pub start: usize,
    pub end: usize,
    /// 0-based position, strictly increasing across the annotation set.
    pub index: usize,
    /// Whether any negation trigger falls inside this sentence.
    pub has_negation: bool,
    /// Number of finite verbs the annotator counted.
    pub verb_count: usize,
    /// Whether the annotator flagged the sentence as syntactically complex
    /// (subordinate clauses, long coordination chains).
    pub is_complex: bool,
    /// Indices into the annotation set's entity sequence.
    pub entity_indices: Vec<usize>,
}

impl SentenceSpan {
    pub fn entity_count(&self) -> usize {
        self.entity_indices.len()
    }
}
