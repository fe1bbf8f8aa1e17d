//! Enumeration checks: statements that smuggle a whole list into one
//! card make poor recall material.

use std::sync::LazyLock;

use clinifact_core::{GeneratedStatement, IssueCategory, ValidationConfig, ValidationIssue};
use regex::Regex;

use crate::matchers::LexiconMatchers;

/// "(1)", "2. ", "step 3" style markers.
static NUMBERED_STEP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\(\d+\)|\b\d+\.\s|\bstep\s+\d+\b").unwrap());

/// Gap text allowed between two candidates that are "in sequence":
/// commas, semicolons, and bare conjunctions.
static SEQUENCE_GAP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[\s,;]*(?:and|or)?[\s,;]*$").unwrap());

pub fn check(
    index: usize,
    stmt: &GeneratedStatement,
    config: &ValidationConfig,
    matchers: &LexiconMatchers,
) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let text = &stmt.statement;

    let delimited_items = text.matches([',', ';']).count() + 1;
    if matchers.list_indicators.is_match(text) && delimited_items >= config.enumeration_min_items {
        issues.push(
            ValidationIssue::warning(
                IssueCategory::Enumeration,
                format!(
                    "List indicator with {delimited_items} delimited items; enumerations make poor single cards"
                ),
            )
            .at_statement(index),
        );
    }

    let run = longest_candidate_run(text, &stmt.cloze_candidates);
    if run >= config.sequential_candidate_threshold {
        issues.push(
            ValidationIssue::warning(
                IssueCategory::Enumeration,
                format!("{run} cloze candidates appear back-to-back as a list"),
            )
            .at_statement(index),
        );
    }

    let steps = NUMBERED_STEP_RE.find_iter(text).count();
    if steps >= config.numbered_step_threshold {
        issues.push(
            ValidationIssue::warning(
                IssueCategory::Enumeration,
                format!("{steps} numbered step markers; split the procedure into steps"),
            )
            .at_statement(index),
        );
    }

    if matchers.coverage_phrases.is_match(text) {
        issues.push(
            ValidationIssue::warning(
                IssueCategory::Enumeration,
                "Claims comprehensive coverage; card should test one fact, not a complete list",
            )
            .at_statement(index),
        );
    }

    issues
}

/// Length of the longest run of cloze candidates appearing consecutively
/// in the statement, separated only by commas and conjunctions.
fn longest_candidate_run(text: &str, candidates: &[String]) -> usize {
    let lower = text.to_lowercase();

    let mut spans: Vec<(usize, usize)> = candidates
        .iter()
        .filter_map(|c| {
            let cl = c.to_lowercase();
            (!cl.is_empty())
                .then(|| lower.find(&cl).map(|start| (start, start + cl.len())))
                .flatten()
        })
        .collect();
    spans.sort_unstable();

    let mut best = 0usize;
    let mut run = 0usize;
    let mut prev_end: Option<usize> = None;

    for (start, end) in spans {
        let continues = match prev_end {
            Some(pe) if start >= pe => SEQUENCE_GAP_RE.is_match(&lower[pe..start]),
            _ => false,
        };
        run = if continues { run + 1 } else { 1 };
        best = best.max(run);
        prev_end = Some(end);
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinifact_core::LexiconConfig;

    fn run(statement: &str, candidates: &[&str]) -> Vec<ValidationIssue> {
        let matchers = LexiconMatchers::compile(&LexiconConfig::default()).unwrap();
        let stmt = GeneratedStatement::new(statement).with_candidates(candidates.to_vec());
        check(0, &stmt, &ValidationConfig::default(), &matchers)
    }

    #[test]
    fn list_indicator_with_three_items_warns_once() {
        let issues = run(
            "Adverse effects include anaphylaxis, headache, and nausea.",
            &[],
        );
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("List indicator"));
    }

    #[test]
    fn list_indicator_with_two_items_passes() {
        let issues = run("Adverse effects include anaphylaxis and nausea.", &[]);
        assert!(issues.is_empty());
    }

    #[test]
    fn four_sequential_candidates_warn() {
        let issues = run(
            "Fever, rash, arthralgia, and lymphadenopathy occur in serum sickness.",
            &["Fever", "rash", "arthralgia", "lymphadenopathy"],
        );
        assert!(issues.iter().any(|i| i.message.contains("back-to-back")));
    }

    #[test]
    fn scattered_candidates_are_fine() {
        let issues = run(
            "Fever with rash suggests one thing, while arthralgia after lymphadenopathy suggests another.",
            &["Fever", "rash", "arthralgia", "lymphadenopathy"],
        );
        assert!(!issues.iter().any(|i| i.message.contains("back-to-back")));
    }

    #[test]
    fn numbered_steps_warn() {
        let issues = run(
            "Management: (1) secure the airway, (2) obtain access.",
            &[],
        );
        assert!(issues.iter().any(|i| i.message.contains("step markers")));
    }

    #[test]
    fn decimal_values_are_not_step_markers() {
        let issues = run("A creatinine of 2.5 is abnormal, and 1.1 is not.", &[]);
        assert!(!issues.iter().any(|i| i.message.contains("step markers")));
    }

    #[test]
    fn coverage_claim_warns() {
        let issues = run("This covers every cause of pancreatitis.", &[]);
        assert!(issues.iter().any(|i| i.message.contains("comprehensive")));
    }
}
