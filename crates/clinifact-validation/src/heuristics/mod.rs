//! Heuristic statement validators.
//!
//! Independent, stateless rule modules operating on draft text alone.
//! Each returns a list of issues and treats malformed or missing fields
//! as "no issue" rather than failing; nothing here aborts a batch.

pub mod ambiguity;
pub mod cloze;
pub mod enumeration;
pub mod fidelity;
pub mod quality;
pub mod structure;

use clinifact_core::{Annotations, GeneratedStatement, ValidationConfig, ValidationIssue};

use crate::matchers::LexiconMatchers;

/// Run every heuristic validator over a draft set.
///
/// `annotations` is optional: ambiguity detection prefers annotated
/// entity types when available and falls back to lexicons without them.
/// `source_text` feeds the source-fidelity check and is usable even when
/// the annotator was disabled.
pub fn run_all(
    statements: &[GeneratedStatement],
    source_text: &str,
    annotations: Option<&Annotations>,
    config: &ValidationConfig,
    matchers: &LexiconMatchers,
) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for (i, stmt) in statements.iter().enumerate() {
        issues.extend(structure::check(i, stmt));
        issues.extend(quality::check(i, stmt, config, matchers));
        issues.extend(cloze::check(i, stmt, config, matchers));
        issues.extend(ambiguity::check(i, stmt, annotations, matchers));
        issues.extend(enumeration::check(i, stmt, config, matchers));
        issues.extend(fidelity::check(i, stmt, source_text, config, matchers));
    }

    issues
}
