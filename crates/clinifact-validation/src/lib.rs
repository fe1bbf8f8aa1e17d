//! # clinifact-validation
//!
//! Reconciles drafted statements against the source annotation set.
//!
//! ## Checks
//! - **Cross-validation** (needs annotations): negation consistency,
//!   entity completeness, unit/threshold accuracy.
//! - **Heuristic validators** (draft text only): structure, quality,
//!   cloze correctness, ambiguity, enumeration, source fidelity.
//!
//! All checks accumulate [`ValidationIssue`]s and never abort a batch for
//! one bad statement. Output ordering is deterministic, so validating the
//! same input twice yields identical issue lists.
//!
//! [`ValidationIssue`]: clinifact_core::ValidationIssue

pub mod crossval;
pub mod engine;
pub mod heuristics;
pub mod matchers;
pub mod textmatch;

pub use engine::{ValidationEngine, ValidationItem};
