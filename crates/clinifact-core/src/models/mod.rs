//! Shared data models: fact candidates, generated statements, validation
//! issues, and fix records.

mod atomicity;
mod candidate;
mod fix;
mod issue;
mod statement;

pub use atomicity::{AtomicityRecommendation, SplitRecommendation};
pub use candidate::{EnrichedContext, FactCandidate};
pub use fix::{FixRecord, FixType};
pub use issue::{IssueCategory, Severity, ValidationIssue};
pub use statement::GeneratedStatement;
