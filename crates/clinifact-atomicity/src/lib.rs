//! # clinifact-atomicity
//!
//! Decides how source sentences should be decomposed before drafting and
//! assembles the enriched context handed to the drafting engine.
//!
//! ## Pipeline position
//! Annotations → [`analyzer`] (per-sentence decision) → [`candidates`]
//! (confidence-scored fact candidates + summaries) → [`prompt`]
//! (deterministic prompt block).

pub mod analyzer;
pub mod candidates;
pub mod context_hint;
pub mod prompt;
pub mod split;

pub use candidates::CandidateGenerator;
