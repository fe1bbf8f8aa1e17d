//! Structured output of the linguistic annotator: sentences, typed
//! entities with negation flags, and negation-trigger spans.
//!
//! Annotations are produced once per source text and are immutable from
//! then on; every downstream component reads them by reference.

mod entity;
mod sentence;

pub use entity::{AnnotatedEntity, EntityType};
pub use sentence::SentenceSpan;

use serde::{Deserialize, Serialize};

use crate::errors::{ClinifactError, ClinifactResult};

/// A span of text that triggers negation, e.g. "no evidence of".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NegationSpan {
    pub text: String,
    pub start: usize,
    pub end: usize,
    /// Index of the sentence containing the trigger.
    pub sentence_index: usize,
}

/// The full annotation set for one source text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Annotations {
    pub source_text: String,
    pub sentences: Vec<SentenceSpan>,
    pub entities: Vec<AnnotatedEntity>,
    pub negation_spans: Vec<NegationSpan>,
}

impl Annotations {
    /// An empty annotation set, as returned by a disabled annotator.
    pub fn empty(source_text: impl Into<String>) -> Self {
        Self {
            source_text: source_text.into(),
            ..Default::default()
        }
    }

    /// Whether the annotator produced anything usable. Cross-validation
    /// is skipped for empty annotation sets.
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty() && self.entities.is_empty()
    }

    /// Entities owned by the sentence at `sentence_index`.
    pub fn entities_for_sentence(&self, sentence_index: usize) -> Vec<&AnnotatedEntity> {
        self.entities
            .iter()
            .filter(|e| e.sentence_index == sentence_index)
            .collect()
    }

    /// All negated entities, in annotation order.
    pub fn negated_entities(&self) -> Vec<&AnnotatedEntity> {
        self.entities.iter().filter(|e| e.negated).collect()
    }

    /// Entities whose type makes them critical for coverage checking.
    pub fn critical_entities(&self) -> Vec<&AnnotatedEntity> {
        self.entities
            .iter()
            .filter(|e| e.entity_type.is_critical())
            .collect()
    }

    /// Check the span invariants of every sentence and entity:
    /// `0 <= start < end <= len(source_text)`, sentence indices strictly
    /// increasing from 0, and entity ownership agreeing with sentence
    /// indices. Annotator adapters are untrusted; call this on ingest.
    pub fn validate_offsets(&self) -> ClinifactResult<()> {
        let len = self.source_text.len();
        for (i, s) in self.sentences.iter().enumerate() {
            if s.index != i {
                return Err(ClinifactError::InvalidSpan {
                    details: format!("sentence {} carries index {}", i, s.index),
                });
            }
            if s.start >= s.end || s.end > len {
                return Err(ClinifactError::InvalidSpan {
                    details: format!("sentence {} span {}..{} out of range", i, s.start, s.end),
                });
            }
            for &ei in &s.entity_indices {
                match self.entities.get(ei) {
                    Some(e) if e.sentence_index == i => {}
                    Some(e) => {
                        return Err(ClinifactError::InvalidSpan {
                            details: format!(
                                "entity {} owned by sentence {} but annotated with sentence {}",
                                ei, i, e.sentence_index
                            ),
                        })
                    }
                    None => {
                        return Err(ClinifactError::InvalidSpan {
                            details: format!("sentence {} references missing entity {}", i, ei),
                        })
                    }
                }
            }
        }
        for (i, e) in self.entities.iter().enumerate() {
            if e.start >= e.end || e.end > len {
                return Err(ClinifactError::InvalidSpan {
                    details: format!("entity {} span {}..{} out of range", i, e.start, e.end),
                });
            }
        }
        Ok(())
    }
}
