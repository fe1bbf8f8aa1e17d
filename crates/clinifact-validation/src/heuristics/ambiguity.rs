//! Ambiguity checks: drug mentions without disambiguating context,
//! overlapping cloze candidates, and organism or procedure mentions with
//! no clinical anchor.

use std::sync::LazyLock;

use clinifact_core::annotation::EntityType;
use clinifact_core::{Annotations, GeneratedStatement, IssueCategory, ValidationIssue};
use regex::Regex;

use crate::matchers::LexiconMatchers;
use crate::textmatch::contains_ci;

/// Genus-species shape: a capitalized word followed by a lowercase word.
static ORGANISM_PATTERN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([A-Z][a-z]{2,})\s([a-z]{4,})\b").unwrap());

/// Verbs that commonly follow a capitalized subject; a "Genus species"
/// match whose second word is one of these is a sentence, not a binomial.
const NON_SPECIES_WORDS: &[&str] = &[
    "causes", "treats", "inhibits", "presents", "occurs", "results", "requires", "increases",
    "decreases", "affects", "remains", "develops", "shows", "reveals", "produces", "induces",
    "leads", "binds", "blocks", "improves", "reduces", "raises", "lowers",
];

/// Capitalized token, for the drug-name fallback.
static CAPITALIZED_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z][a-z]{3,}\b").unwrap());

pub fn check(
    index: usize,
    stmt: &GeneratedStatement,
    annotations: Option<&Annotations>,
    matchers: &LexiconMatchers,
) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let text = &stmt.statement;

    for drug in detect_medications(text, annotations, matchers) {
        if matchers.drug_clarity.is_match(text) {
            continue;
        }
        let message = format!(
            "Drug '{drug}' mentioned without mechanism, class, or indication context"
        );
        // A shared adverse effect next to an unqualified drug is the
        // classic ambiguous card; otherwise it is merely under-specified.
        let issue = if matchers.shared_adverse.is_match(text) {
            ValidationIssue::warning(IssueCategory::Ambiguity, message)
        } else {
            ValidationIssue::info(IssueCategory::Ambiguity, message)
        };
        issues.push(issue.at_statement(index));
    }

    for (a, b) in find_overlapping_pairs(&stmt.cloze_candidates) {
        issues.push(
            ValidationIssue::warning(
                IssueCategory::Ambiguity,
                format!("Overlapping cloze candidates: '{a}' and '{b}'"),
            )
            .at_statement(index),
        );
    }

    for organism in detect_organisms(text, annotations, matchers) {
        if !matchers.organism_context.is_match(text) {
            issues.push(
                ValidationIssue::warning(
                    IssueCategory::Ambiguity,
                    format!(
                        "Organism '{organism}' mentioned without clinical context (association, typicality, epidemiology)"
                    ),
                )
                .at_statement(index),
            );
        }
    }

    for procedure in detect_procedures(text, annotations, matchers) {
        if !matchers.procedure_context.is_match(text) {
            issues.push(
                ValidationIssue::warning(
                    IssueCategory::Ambiguity,
                    format!(
                        "Procedure '{procedure}' mentioned without indication or timing context"
                    ),
                )
                .at_statement(index),
            );
        }
    }

    issues
}

/// Candidate pairs where one is a case-insensitive proper substring of
/// the other. Symmetric: the order of the input list does not change
/// which pairs are found.
pub fn find_overlapping_pairs(candidates: &[String]) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for (i, a) in candidates.iter().enumerate() {
        for b in &candidates[i + 1..] {
            let al = a.to_lowercase();
            let bl = b.to_lowercase();
            if al != bl && (al.contains(&bl) || bl.contains(&al)) {
                pairs.push((a.clone(), b.clone()));
            }
        }
    }
    pairs
}

/// Drug mentions: annotated medication entities when available, otherwise
/// suffix and capitalization heuristics.
fn detect_medications(
    text: &str,
    annotations: Option<&Annotations>,
    matchers: &LexiconMatchers,
) -> Vec<String> {
    if let Some(ann) = annotations.filter(|a| !a.is_empty()) {
        return ann
            .entities
            .iter()
            .filter(|e| e.entity_type == EntityType::Medication && contains_ci(text, &e.text))
            .map(|e| e.text.clone())
            .collect();
    }

    let lex = &matchers.lexicons;
    let mut found = Vec::new();

    for token in text.split(|c: char| !c.is_alphanumeric()) {
        let lower = token.to_lowercase();
        if lower.len() > 5
            && lex
                .medication_suffixes
                .iter()
                .any(|s| lower.ends_with(s.as_str()))
            && !found.iter().any(|f: &String| f.eq_ignore_ascii_case(token))
        {
            found.push(token.to_string());
        }
    }

    // Capitalized word near drug-context wording, skipping sentence-initial
    // tokens which are capitalized anyway.
    if found.is_empty() && matchers.drug_context.is_match(text) {
        for m in CAPITALIZED_WORD_RE.find_iter(text) {
            if m.start() == 0 {
                continue;
            }
            found.push(m.as_str().to_string());
            break;
        }
    }

    found
}

/// Organism mentions: annotated entities first, else the genus-species
/// pattern minus the configured denylist.
fn detect_organisms(
    text: &str,
    annotations: Option<&Annotations>,
    matchers: &LexiconMatchers,
) -> Vec<String> {
    if let Some(ann) = annotations.filter(|a| !a.is_empty()) {
        return ann
            .entities
            .iter()
            .filter(|e| e.entity_type == EntityType::Organism && contains_ci(text, &e.text))
            .map(|e| e.text.clone())
            .collect();
    }

    ORGANISM_PATTERN_RE
        .captures_iter(text)
        .filter(|caps| {
            let species = caps.get(2).map_or("", |m| m.as_str());
            !NON_SPECIES_WORDS.contains(&species)
                && !matchers.lexicons.stopwords.iter().any(|w| w == species)
        })
        .map(|caps| caps.get(0).map_or("", |m| m.as_str()).to_string())
        .filter(|candidate| {
            !matchers
                .lexicons
                .organism_denylist
                .iter()
                .any(|d| d.eq_ignore_ascii_case(candidate))
        })
        .collect()
}

/// Procedure mentions: annotated entities first, else the procedure-name
/// lexicon.
fn detect_procedures(
    text: &str,
    annotations: Option<&Annotations>,
    matchers: &LexiconMatchers,
) -> Vec<String> {
    if let Some(ann) = annotations.filter(|a| !a.is_empty()) {
        return ann
            .entities
            .iter()
            .filter(|e| e.entity_type == EntityType::Procedure && contains_ci(text, &e.text))
            .map(|e| e.text.clone())
            .collect();
    }

    matchers
        .procedure_terms
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinifact_core::{LexiconConfig, Severity};

    fn run(statement: &str, candidates: &[&str]) -> Vec<ValidationIssue> {
        let matchers = LexiconMatchers::compile(&LexiconConfig::default()).unwrap();
        let stmt = GeneratedStatement::new(statement).with_candidates(candidates.to_vec());
        check(0, &stmt, None, &matchers)
    }

    #[test]
    fn overlap_detection_is_symmetric() {
        let forward = find_overlapping_pairs(&["asthma".into(), "severe asthma".into()]);
        let backward = find_overlapping_pairs(&["severe asthma".into(), "asthma".into()]);
        assert_eq!(forward.len(), 1);
        assert_eq!(backward.len(), 1);
    }

    #[test]
    fn identical_candidates_do_not_overlap() {
        assert!(find_overlapping_pairs(&["asthma".into(), "Asthma".into()]).is_empty());
    }

    #[test]
    fn unqualified_drug_with_shared_adverse_effect_warns() {
        let issues = run("Erythromycin causes qt prolongation.", &[]);
        let drug = issues.iter().find(|i| i.message.contains("Drug")).unwrap();
        assert_eq!(drug.severity, Severity::Warning);
    }

    #[test]
    fn unqualified_drug_alone_is_informational() {
        let issues = run("Atorvastatin is taken at night.", &[]);
        let drug = issues.iter().find(|i| i.message.contains("Drug")).unwrap();
        assert_eq!(drug.severity, Severity::Info);
    }

    #[test]
    fn drug_with_class_context_passes() {
        let issues = run(
            "Lisinopril, an ACE inhibitor, is first-line for hypertension.",
            &[],
        );
        assert!(!issues.iter().any(|i| i.message.contains("Drug")));
    }

    #[test]
    fn organism_without_context_warns() {
        let issues = run("Staphylococcus aureus grows in clusters.", &[]);
        assert!(issues
            .iter()
            .any(|i| i.message.contains("Organism 'Staphylococcus aureus'")));
    }

    #[test]
    fn organism_with_context_passes() {
        let issues = run(
            "Staphylococcus aureus is the most common cause of osteomyelitis.",
            &[],
        );
        assert!(!issues.iter().any(|i| i.message.contains("Organism")));
    }

    #[test]
    fn denylisted_two_word_patterns_are_skipped() {
        let issues = run("Crohn disease affects the terminal ileum.", &[]);
        assert!(!issues.iter().any(|i| i.message.contains("Organism")));
    }

    #[test]
    fn procedure_without_indication_warns() {
        let issues = run("A colonoscopy was performed.", &[]);
        assert!(issues
            .iter()
            .any(|i| i.message.contains("Procedure 'colonoscopy'")));
    }

    #[test]
    fn procedure_with_indication_passes() {
        let issues = run(
            "Colonoscopy is indicated for screening at age 45.",
            &[],
        );
        assert!(!issues.iter().any(|i| i.message.contains("Procedure")));
    }
}
