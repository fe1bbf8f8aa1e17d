//! Source fidelity: a statement whose content words barely appear in the
//! source text is probably drafted from the model's priors, not the
//! source.

use std::collections::HashSet;

use clinifact_core::constants::FIDELITY_EXAMPLE_TERMS;
use clinifact_core::{GeneratedStatement, IssueCategory, ValidationConfig, ValidationIssue};
use tracing::debug;

use crate::matchers::LexiconMatchers;
use crate::textmatch::{matches_with_morphology, tokens};

pub fn check(
    index: usize,
    stmt: &GeneratedStatement,
    source_text: &str,
    config: &ValidationConfig,
    matchers: &LexiconMatchers,
) -> Vec<ValidationIssue> {
    if source_text.trim().is_empty() {
        return Vec::new();
    }

    let terms = content_terms(&stmt.statement, matchers);
    if terms.is_empty() {
        return Vec::new();
    }

    let source_tokens: HashSet<String> = tokens(source_text).into_iter().collect();
    let source_lower = source_text.to_lowercase();

    let missing: Vec<&String> = terms
        .iter()
        .filter(|term| {
            !matches_with_morphology(term, &source_tokens) && !source_lower.contains(*term)
        })
        .collect();

    let overlap = (terms.len() - missing.len()) as f64 / terms.len() as f64;
    if overlap >= config.fidelity_threshold {
        return Vec::new();
    }

    debug!(statement = index, overlap, "low source overlap");

    let examples = missing
        .iter()
        .take(FIDELITY_EXAMPLE_TERMS)
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    vec![ValidationIssue::warning(
        IssueCategory::Hallucination,
        format!(
            "Only {:.0}% of content terms appear in the source; unsupported terms: {examples}",
            overlap * 100.0
        ),
    )
    .at_statement(index)]
}

/// Content terms of a statement: ordinary tokens of three or more
/// characters minus stopwords, plus short all-caps abbreviations,
/// hyphenated compounds, and tokens carrying a medical suffix.
fn content_terms(statement: &str, matchers: &LexiconMatchers) -> Vec<String> {
    let lex = &matchers.lexicons;
    let mut terms: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for raw in statement.split_whitespace() {
        let trimmed = raw.trim_matches(|c: char| !c.is_alphanumeric() && c != '-');

        // Abbreviations keep their case signal before lowercasing.
        let is_abbreviation = trimmed.len() >= 2
            && trimmed.len() <= 5
            && trimmed.chars().all(|c| c.is_ascii_uppercase());

        let lower = trimmed.trim_matches('-').to_lowercase();
        if lower.is_empty() || !seen.insert(lower.clone()) {
            continue;
        }

        let is_hyphenated = lower.contains('-');
        let has_medical_suffix = lex.medical_suffixes.iter().any(|s| lower.ends_with(s.as_str()));

        if is_abbreviation || is_hyphenated || has_medical_suffix {
            terms.push(lower);
            continue;
        }

        if lower.chars().count() >= 3 && !lex.is_stopword(&lower) && !lower.chars().all(|c| c.is_ascii_digit()) {
            terms.push(lower);
        }
    }

    terms
}
