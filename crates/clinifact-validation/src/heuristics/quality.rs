//! Quality checks: compound structure, hedging, patient-specific and
//! source-referential wording, trivia, and length.

use std::sync::LazyLock;

use clinifact_core::{GeneratedStatement, IssueCategory, ValidationConfig, ValidationIssue};
use regex::Regex;

use crate::matchers::LexiconMatchers;
use crate::textmatch::count_word;

/// "if … then … and/or … if" multi-clause chains.
static IF_THEN_CHAIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)\bif\b.+\bthen\b.+\b(?:and|or)\b.+\bif\b").unwrap()
});

/// "and"/"or" followed by a finite verb, a sign of a second clause.
static COMPOUND_CLAUSE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:and|or)\s+(?:is|are|was|were|has|have|causes|leads|results|shows|increases|decreases|requires)\b",
    )
    .unwrap()
});

pub fn check(
    index: usize,
    stmt: &GeneratedStatement,
    config: &ValidationConfig,
    matchers: &LexiconMatchers,
) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let text = &stmt.statement;

    // Compound-structure checks short-circuit: report the strongest
    // signal only, so one overloaded sentence yields one finding.
    if let Some(issue) = compound_structure(text, config) {
        issues.push(issue.at_statement(index));
    }

    let vague: Vec<&str> = matchers
        .vague_qualifiers
        .find_iter(text)
        .map(|m| m.as_str())
        .collect();
    if !vague.is_empty() {
        issues.push(
            ValidationIssue::info(
                IssueCategory::Quality,
                format!("Vague qualifiers weaken testability: {}", vague.join(", ")),
            )
            .at_statement(index),
        );
    }

    if matchers.patient_phrases.is_match(text) {
        issues.push(
            ValidationIssue::info(
                IssueCategory::Quality,
                "Statement is tied to a specific patient; generalize it",
            )
            .at_statement(index),
        );
    }

    if matchers.source_references.is_match(text) {
        issues.push(
            ValidationIssue::info(
                IssueCategory::Quality,
                "Statement refers back to the source material",
            )
            .at_statement(index),
        );
    }

    if matchers.trivia_patterns.is_match(text) && !matchers.clinical_terms.is_match(text) {
        issues.push(
            ValidationIssue::warning(
                IssueCategory::Quality,
                "Looks like non-clinical trivia; add clinical relevance or drop it",
            )
            .at_statement(index),
        );
    }

    if text.chars().count() > config.max_statement_length {
        issues.push(
            ValidationIssue::warning(
                IssueCategory::Quality,
                format!(
                    "Statement is {} characters (limit {}); split or shorten it",
                    text.chars().count(),
                    config.max_statement_length
                ),
            )
            .at_statement(index),
        );
    }

    issues
}

/// The strongest compound-structure signal, if any.
fn compound_structure(text: &str, config: &ValidationConfig) -> Option<ValidationIssue> {
    if text.contains(';') {
        return Some(ValidationIssue::warning(
            IssueCategory::Quality,
            "Semicolon suggests two statements fused into one",
        ));
    }

    if count_word(text, "and") >= config.and_count_threshold {
        return Some(ValidationIssue::warning(
            IssueCategory::Quality,
            format!(
                "{} occurrences of 'and'; likely compound statement",
                count_word(text, "and")
            ),
        ));
    }

    if IF_THEN_CHAIN_RE.is_match(text) {
        return Some(ValidationIssue::warning(
            IssueCategory::Quality,
            "Multi-clause if/then chain; split into separate conditionals",
        ));
    }

    if COMPOUND_CLAUSE_RE.is_match(text) || count_word(text, "also") > 0 {
        return Some(ValidationIssue::warning(
            IssueCategory::Quality,
            "Compound structure; consider splitting",
        ));
    }

    None
}
