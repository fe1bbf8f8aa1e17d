//! # clinifact-core
//!
//! Foundation crate for the clinifact cross-validation engine.
//! Defines all shared types, traits, errors, config, and lexicons.
//! Every other crate in the workspace depends on this.

pub mod annotation;
pub mod confidence;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use annotation::{AnnotatedEntity, Annotations, EntityType, NegationSpan, SentenceSpan};
pub use confidence::Confidence;
pub use config::{ClinifactConfig, LexiconConfig, ValidationConfig};
pub use errors::{ClinifactError, ClinifactResult};
pub use models::{
    AtomicityRecommendation, EnrichedContext, FactCandidate, FixRecord, FixType,
    GeneratedStatement, IssueCategory, Severity, SplitRecommendation, ValidationIssue,
};
pub use traits::{Annotator, DisabledAnnotator};
