//! Default threshold values for [`super::ValidationConfig`].

/// Entity coverage below this fraction raises a completeness warning.
pub const DEFAULT_ENTITY_COVERAGE_THRESHOLD: f64 = 0.5;

/// Fraction of an entity's tokens that must appear in a statement for the
/// fuzzy fallback match to count it as mentioned.
pub const DEFAULT_FUZZY_TOKEN_RATIO: f64 = 0.8;

/// Fraction of a statement's content terms that must appear in the source
/// text; below this the statement is flagged as a possible hallucination.
pub const DEFAULT_FIDELITY_THRESHOLD: f64 = 0.3;

/// Statements longer than this many characters get a quality warning.
pub const DEFAULT_MAX_STATEMENT_LENGTH: usize = 200;

/// Cloze candidate count range.
pub const DEFAULT_MIN_CLOZE_CANDIDATES: usize = 2;
pub const DEFAULT_MAX_CLOZE_CANDIDATES: usize = 5;

/// Occurrences of "and" in one statement before it is flagged compound.
pub const DEFAULT_AND_COUNT_THRESHOLD: usize = 3;

/// Delimited items needed alongside a list indicator to flag enumeration.
pub const DEFAULT_ENUMERATION_MIN_ITEMS: usize = 3;

/// Cloze candidates appearing in direct sequence before flagging.
pub const DEFAULT_SEQUENTIAL_CANDIDATE_THRESHOLD: usize = 4;

/// Numbered-step markers needed to flag a procedure listing.
pub const DEFAULT_NUMBERED_STEP_THRESHOLD: usize = 2;

/// Minimum confidence at which the auto-fixer applies a correction.
pub const DEFAULT_FIX_CONFIDENCE_THRESHOLD: f64 = 0.8;
