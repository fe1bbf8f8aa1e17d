//! Cross-validation of drafted statements against source annotations.
//!
//! Three independent checks, each emitting issues located at
//! `statement[i]`. All of them require a usable annotation set; the
//! engine skips this module entirely when the annotator was disabled.

pub mod completeness;
pub mod negation;
pub mod units;

use clinifact_core::{Annotations, GeneratedStatement, ValidationIssue};

use crate::matchers::LexiconMatchers;

/// Run all three cross-validation checks over a draft set.
pub fn check_all(
    statements: &[GeneratedStatement],
    annotations: &Annotations,
    matchers: &LexiconMatchers,
    entity_coverage_threshold: f64,
    fuzzy_token_ratio: f64,
) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    issues.extend(negation::check(statements, annotations, matchers));
    issues.extend(completeness::check(
        statements,
        annotations,
        entity_coverage_threshold,
        fuzzy_token_ratio,
    ));
    issues.extend(units::check(statements, annotations, matchers));
    issues
}
