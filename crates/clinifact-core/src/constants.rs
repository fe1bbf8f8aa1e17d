//! Fixed numeric constants shared across the workspace.
//!
//! Tunable values live in [`crate::config`]; these are structural limits
//! that the algorithms assume.

/// Penalty multiplier applied to a candidate's confidence when its
/// sentence is flagged complex.
pub const COMPLEXITY_PENALTY: f64 = 0.9;

/// Penalty multiplier applied when a sentence has more than 2 verbs.
pub const VERB_PENALTY: f64 = 0.85;

/// Verb count above which the verb penalty applies.
pub const VERB_PENALTY_THRESHOLD: usize = 2;

/// Entity count above which a complex sentence gets a testability-triage
/// context hint.
pub const CONTEXT_HINT_ENTITY_LIMIT: usize = 3;

/// How many missing entities to list per type before eliding.
pub const MISSING_ENTITY_EXAMPLES: usize = 3;

/// How many missing content terms a source-fidelity warning names.
pub const FIDELITY_EXAMPLE_TERMS: usize = 5;

/// Character window used when matching a quantity in a statement back to
/// its source mention.
pub const QUANTITY_CONTEXT_WINDOW: usize = 40;
