use serde::{Deserialize, Serialize};

use super::defaults;

/// Tunable thresholds for the validators and the auto-fixer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Entity coverage below this fraction raises a completeness warning.
    pub entity_coverage_threshold: f64,
    /// Token fraction for the fuzzy entity-mention fallback.
    pub fuzzy_token_ratio: f64,
    /// Content-term overlap below this flags possible hallucination.
    pub fidelity_threshold: f64,
    /// Maximum statement length in characters.
    pub max_statement_length: usize,
    /// Acceptable cloze candidate count range, inclusive.
    pub min_cloze_candidates: usize,
    pub max_cloze_candidates: usize,
    /// "and" occurrences before a compound-structure warning.
    pub and_count_threshold: usize,
    /// Delimited items needed to flag an enumeration.
    pub enumeration_min_items: usize,
    /// Sequential cloze candidates before an enumeration warning.
    pub sequential_candidate_threshold: usize,
    /// Numbered-step markers before an enumeration warning.
    pub numbered_step_threshold: usize,
    /// Minimum confidence for an automatic fix to be applied.
    pub fix_confidence_threshold: f64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            entity_coverage_threshold: defaults::DEFAULT_ENTITY_COVERAGE_THRESHOLD,
            fuzzy_token_ratio: defaults::DEFAULT_FUZZY_TOKEN_RATIO,
            fidelity_threshold: defaults::DEFAULT_FIDELITY_THRESHOLD,
            max_statement_length: defaults::DEFAULT_MAX_STATEMENT_LENGTH,
            min_cloze_candidates: defaults::DEFAULT_MIN_CLOZE_CANDIDATES,
            max_cloze_candidates: defaults::DEFAULT_MAX_CLOZE_CANDIDATES,
            and_count_threshold: defaults::DEFAULT_AND_COUNT_THRESHOLD,
            enumeration_min_items: defaults::DEFAULT_ENUMERATION_MIN_ITEMS,
            sequential_candidate_threshold: defaults::DEFAULT_SEQUENTIAL_CANDIDATE_THRESHOLD,
            numbered_step_threshold: defaults::DEFAULT_NUMBERED_STEP_THRESHOLD,
            fix_confidence_threshold: defaults::DEFAULT_FIX_CONFIDENCE_THRESHOLD,
        }
    }
}
