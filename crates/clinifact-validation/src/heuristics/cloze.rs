//! Cloze-candidate checks: count range, verbatim presence, duplicates,
//! and trivial candidates.

use std::collections::HashSet;

use clinifact_core::{GeneratedStatement, IssueCategory, ValidationConfig, ValidationIssue};

use crate::matchers::LexiconMatchers;
use crate::textmatch::normalize_cloze;

pub fn check(
    index: usize,
    stmt: &GeneratedStatement,
    config: &ValidationConfig,
    matchers: &LexiconMatchers,
) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let candidates = &stmt.cloze_candidates;
    if candidates.is_empty() {
        // The structure validator already reports the empty sequence.
        return issues;
    }

    if candidates.len() < config.min_cloze_candidates {
        issues.push(
            ValidationIssue::warning(
                IssueCategory::Cloze,
                format!(
                    "Only {} cloze candidate(s); at least {} make a statement testable",
                    candidates.len(),
                    config.min_cloze_candidates
                ),
            )
            .at_statement(index),
        );
    } else if candidates.len() > config.max_cloze_candidates {
        issues.push(
            ValidationIssue::info(
                IssueCategory::Cloze,
                format!(
                    "{} cloze candidates; more than {} dilutes recall value",
                    candidates.len(),
                    config.max_cloze_candidates
                ),
            )
            .at_statement(index),
        );
    }

    let comparators = &matchers.lexicons.comparator_phrases;
    let normalized_statement = normalize_cloze(&stmt.statement, comparators);
    for candidate in candidates {
        let normalized = normalize_cloze(candidate, comparators);
        if normalized.is_empty() || !normalized_statement.contains(&normalized) {
            issues.push(
                ValidationIssue::error(
                    IssueCategory::Cloze,
                    format!("Cloze candidate '{candidate}' not found in statement"),
                )
                .at_statement(index),
            );
        }
    }

    issues.extend(duplicates(index, candidates));

    for candidate in candidates {
        if let Some(issue) = trivial(candidate, matchers) {
            issues.push(issue.at_statement(index));
        }
    }

    issues
}

/// Exact duplicates are a warning; candidates differing only in case are
/// informational.
fn duplicates(index: usize, candidates: &[String]) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let mut seen_exact: HashSet<&str> = HashSet::new();
    let mut seen_ci: HashSet<String> = HashSet::new();

    for candidate in candidates {
        let lower = candidate.to_lowercase();
        if !seen_exact.insert(candidate.as_str()) {
            issues.push(
                ValidationIssue::warning(
                    IssueCategory::Cloze,
                    format!("Duplicate cloze candidate '{candidate}'"),
                )
                .at_statement(index),
            );
        } else if !seen_ci.insert(lower) {
            issues.push(
                ValidationIssue::info(
                    IssueCategory::Cloze,
                    format!("Cloze candidates differ only in case: '{candidate}'"),
                )
                .at_statement(index),
            );
        }
    }

    issues
}

/// Stopwords and bare letters make useless blanks; short abbreviations
/// and bare numbers are merely suspect.
fn trivial(candidate: &str, matchers: &LexiconMatchers) -> Option<ValidationIssue> {
    let lex = &matchers.lexicons;
    let trimmed = candidate.trim();
    let lower = trimmed.to_lowercase();

    if lex.is_stopword(&lower) {
        return Some(ValidationIssue::warning(
            IssueCategory::Cloze,
            format!("Trivial cloze candidate (stopword): '{candidate}'"),
        ));
    }

    let char_count = trimmed.chars().count();
    if char_count == 1 && trimmed.chars().all(|c| c.is_alphabetic()) {
        if lex.unit_letter_whitelist.iter().any(|u| *u == lower) {
            return None;
        }
        return Some(ValidationIssue::warning(
            IssueCategory::Cloze,
            format!("Single-letter cloze candidate: '{candidate}'"),
        ));
    }

    if char_count == 2
        && trimmed.chars().all(|c| c.is_alphabetic())
        && !lex.medical_abbreviations.iter().any(|a| *a == lower)
    {
        return Some(ValidationIssue::info(
            IssueCategory::Cloze,
            format!("Two-letter cloze candidate '{candidate}' is not a known abbreviation"),
        ));
    }

    if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return Some(ValidationIssue::info(
            IssueCategory::Cloze,
            format!("Pure-numeric cloze candidate '{candidate}'; blank the unit or context too"),
        ));
    }

    None
}
