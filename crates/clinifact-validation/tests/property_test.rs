//! Property tests for the matching laws the validators rely on.

use clinifact_core::{GeneratedStatement, LexiconConfig, ValidationConfig};
use clinifact_validation::heuristics::{ambiguity, cloze};
use clinifact_validation::matchers::LexiconMatchers;
use clinifact_validation::textmatch::normalize_cloze;
use proptest::prelude::*;

fn matchers() -> LexiconMatchers {
    LexiconMatchers::compile(&LexiconConfig::default()).unwrap()
}

proptest! {
    /// Cloze verbatim law: whenever normalize(candidate) is a substring
    /// of normalize(statement), the validator never reports the candidate
    /// as "not found".
    #[test]
    fn normalized_substrings_are_always_found(
        statement in "[a-z0-9 <>=\u{2013}-]{1,60}",
        start in 0usize..40,
        len in 1usize..20,
    ) {
        let chars: Vec<char> = statement.chars().collect();
        prop_assume!(start < chars.len());
        let end = (start + len).min(chars.len());
        let candidate: String = chars[start..end].iter().collect();

        let m = matchers();
        let comparators = &m.lexicons.comparator_phrases;
        let normalized_statement = normalize_cloze(&statement, comparators);
        let normalized_candidate = normalize_cloze(&candidate, comparators);

        let stmt = GeneratedStatement::new(&statement)
            .with_candidates([candidate.clone(), statement.clone()]);
        let issues = cloze::check(0, &stmt, &ValidationConfig::default(), &m);
        let reported_missing = issues
            .iter()
            .any(|i| i.message.contains("not found") && i.message.contains(&candidate));

        if !normalized_candidate.is_empty()
            && normalized_statement.contains(&normalized_candidate)
        {
            prop_assert!(
                !reported_missing,
                "candidate {:?} reported missing from {:?}",
                candidate,
                statement
            );
        }
    }

    /// Overlap detection is symmetric in the candidate order.
    #[test]
    fn overlap_pairs_ignore_candidate_order(
        a in "[a-z ]{1,15}",
        b in "[a-z ]{1,15}",
    ) {
        let forward = ambiguity::find_overlapping_pairs(&[a.clone(), b.clone()]);
        let backward = ambiguity::find_overlapping_pairs(&[b, a]);
        prop_assert_eq!(forward.len(), backward.len());
    }

    /// Validation output is a pure function of its input.
    #[test]
    fn heuristic_validation_is_idempotent(
        statement in "[A-Za-z0-9 .,;]{0,120}",
        candidate in "[a-z]{0,12}",
    ) {
        let stmt = GeneratedStatement::new(&statement).with_candidates([candidate]);
        let config = ValidationConfig::default();
        let m = matchers();
        let first = cloze::check(0, &stmt, &config, &m);
        let second = cloze::check(0, &stmt, &config, &m);
        prop_assert_eq!(first, second);
    }
}

#[test]
fn overlap_symmetry_for_the_canonical_pair() {
    let forward =
        ambiguity::find_overlapping_pairs(&["asthma".into(), "severe asthma".into()]);
    let backward =
        ambiguity::find_overlapping_pairs(&["severe asthma".into(), "asthma".into()]);
    assert_eq!(forward.len(), 1);
    assert_eq!(backward.len(), 1);
}
