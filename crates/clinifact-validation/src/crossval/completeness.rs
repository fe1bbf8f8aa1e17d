//! Entity completeness: are the clinically critical source entities
//! represented in the draft statement?

use std::collections::BTreeMap;

use clinifact_core::annotation::AnnotatedEntity;
use clinifact_core::constants::MISSING_ENTITY_EXAMPLES;
use clinifact_core::{Annotations, GeneratedStatement, IssueCategory, ValidationIssue};

use crate::textmatch::{contains_ci, fuzzy_token_coverage};

/// Per statement: coverage of critical entities (disease, medication,
/// lab value, procedure). Below the threshold, one warning lists what is
/// missing, grouped by type with up to three examples per type.
pub fn check(
    statements: &[GeneratedStatement],
    annotations: &Annotations,
    coverage_threshold: f64,
    fuzzy_token_ratio: f64,
) -> Vec<ValidationIssue> {
    let critical = annotations.critical_entities();
    if critical.is_empty() {
        return Vec::new();
    }

    let mut issues = Vec::new();

    for (i, stmt) in statements.iter().enumerate() {
        let missing: Vec<&AnnotatedEntity> = critical
            .iter()
            .filter(|e| !entity_mentioned(e, &stmt.statement, fuzzy_token_ratio))
            .copied()
            .collect();

        let coverage = (critical.len() - missing.len()) as f64 / critical.len() as f64;
        if coverage >= coverage_threshold {
            continue;
        }

        issues.push(
            ValidationIssue::warning(
                IssueCategory::EntityCompleteness,
                format!(
                    "Low entity coverage ({:.0}%): missing {}",
                    coverage * 100.0,
                    describe_missing(&missing)
                ),
            )
            .at_statement(i),
        );
    }

    issues
}

/// Exact case-insensitive containment, falling back to fuzzy token
/// coverage for multi-word mentions the draft may have reordered.
pub fn entity_mentioned(entity: &AnnotatedEntity, statement: &str, fuzzy_token_ratio: f64) -> bool {
    contains_ci(statement, &entity.text)
        || fuzzy_token_coverage(&entity.text, statement) >= fuzzy_token_ratio
}

/// "diseases: a, b, c (+2 more); medications: x" — grouped by type.
fn describe_missing(missing: &[&AnnotatedEntity]) -> String {
    let mut by_type: BTreeMap<&'static str, Vec<&str>> = BTreeMap::new();
    for e in missing {
        by_type
            .entry(e.entity_type.plural_label())
            .or_default()
            .push(e.text.as_str());
    }

    by_type
        .iter()
        .map(|(label, names)| {
            let shown = names
                .iter()
                .take(MISSING_ENTITY_EXAMPLES)
                .copied()
                .collect::<Vec<_>>()
                .join(", ");
            if names.len() > MISSING_ENTITY_EXAMPLES {
                format!("{label}: {shown} (+{} more)", names.len() - MISSING_ENTITY_EXAMPLES)
            } else {
                format!("{label}: {shown}")
            }
        })
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinifact_core::annotation::{EntityType, SentenceSpan};
    use clinifact_core::Severity;

    fn annotations(entities: Vec<(&str, EntityType)>) -> Annotations {
        let text = "source text";
        Annotations {
            source_text: text.into(),
            sentences: vec![SentenceSpan {
                text: text.into(),
                start: 0,
                end: text.len(),
                index: 0,
                has_negation: false,
                verb_count: 1,
                is_complex: false,
                entity_indices: (0..entities.len()).collect(),
            }],
            entities: entities
                .into_iter()
                .map(|(t, ty)| AnnotatedEntity {
                    text: t.into(),
                    entity_type: ty,
                    start: 0,
                    end: 1,
                    sentence_index: 0,
                    negated: false,
                    negation_trigger: None,
                    modifiers: vec![],
                    confidence: 0.9.into(),
                })
                .collect(),
            negation_spans: vec![],
        }
    }

    #[test]
    fn low_coverage_warns_with_grouped_missing_list() {
        let ann = annotations(vec![
            ("heart failure", EntityType::Disease),
            ("furosemide", EntityType::Medication),
            ("lisinopril", EntityType::Medication),
            ("bnp", EntityType::LabValue),
        ]);
        let stmts = vec![GeneratedStatement::new("Heart failure causes dyspnea.")];
        let issues = check(&stmts, &ann, 0.5, 0.8);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert_eq!(issues[0].category, IssueCategory::EntityCompleteness);
        assert!(issues[0].message.contains("medications: furosemide, lisinopril"));
        assert!(issues[0].message.contains("lab values: bnp"));
    }

    #[test]
    fn adequate_coverage_is_clean() {
        let ann = annotations(vec![
            ("heart failure", EntityType::Disease),
            ("furosemide", EntityType::Medication),
        ]);
        let stmts = vec![GeneratedStatement::new(
            "Furosemide relieves congestion in heart failure.",
        )];
        assert!(check(&stmts, &ann, 0.5, 0.8).is_empty());
    }

    #[test]
    fn fuzzy_match_counts_reordered_mentions() {
        let ann = annotations(vec![("severe aortic stenosis", EntityType::Disease)]);
        let e = &ann.entities[0];
        assert!(entity_mentioned(e, "stenosis that is aortic and severe", 0.8));
        assert!(!entity_mentioned(e, "mitral regurgitation", 0.8));
    }

    #[test]
    fn non_critical_entities_are_ignored() {
        let ann = annotations(vec![
            ("liver", EntityType::Anatomy),
            ("edge", EntityType::Other),
        ]);
        let stmts = vec![GeneratedStatement::new("Unrelated statement.")];
        assert!(check(&stmts, &ann, 0.5, 0.8).is_empty());
    }

    #[test]
    fn inserting_missing_entity_never_increases_missing_count() {
        let ann = annotations(vec![
            ("heart failure", EntityType::Disease),
            ("furosemide", EntityType::Medication),
            ("lisinopril", EntityType::Medication),
            ("bnp", EntityType::LabValue),
        ]);
        let before = vec![GeneratedStatement::new("Heart failure causes dyspnea.")];
        let after = vec![GeneratedStatement::new(
            "Heart failure causes dyspnea; furosemide helps.",
        )];
        let count = |stmts: &[GeneratedStatement]| {
            check(stmts, &ann, 1.1, 0.8)
                .first()
                .map(|i| i.message.matches(',').count())
                .unwrap_or(0)
        };
        assert!(count(&after) <= count(&before));
    }
}
