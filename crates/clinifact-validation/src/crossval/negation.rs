//! Negation consistency: does each statement preserve the source's
//! explicit negations?

use clinifact_core::{Annotations, GeneratedStatement, IssueCategory, ValidationIssue};
use tracing::debug;

use crate::matchers::LexiconMatchers;
use crate::textmatch::contains_ci;

/// For every negated source entity mentioned in a statement, verify the
/// statement still negates it. Entities a statement never mentions are
/// skipped; other statements may legitimately cover them.
pub fn check(
    statements: &[GeneratedStatement],
    annotations: &Annotations,
    matchers: &LexiconMatchers,
) -> Vec<ValidationIssue> {
    let negated = annotations.negated_entities();
    if negated.is_empty() {
        return Vec::new();
    }

    let mut issues = Vec::new();

    for (i, stmt) in statements.iter().enumerate() {
        for entity in &negated {
            if !contains_ci(&stmt.statement, &entity.text) {
                continue;
            }

            let affirms = matchers.affirmative.is_match(&stmt.statement);
            let negates = matchers.negation.is_match(&stmt.statement);

            if negates {
                continue;
            }

            if affirms {
                debug!(statement = i, entity = %entity.text, "negation inversion");
                issues.push(
                    ValidationIssue::error(
                        IssueCategory::Negation,
                        format!(
                            "Negation inversion detected: source negates '{}' ({}) but the statement asserts it",
                            entity.text,
                            entity.negation_trigger.as_deref().unwrap_or("negated"),
                        ),
                    )
                    .at_statement(i),
                );
            } else {
                issues.push(
                    ValidationIssue::warning(
                        IssueCategory::Negation,
                        format!(
                            "Possible negation loss: source negates '{}' but the statement neither affirms nor negates it clearly",
                            entity.text,
                        ),
                    )
                    .at_statement(i),
                );
            }
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinifact_core::annotation::{AnnotatedEntity, EntityType, SentenceSpan};
    use clinifact_core::{LexiconConfig, Severity};

    fn annotations_with_negated(entity_text: &str, trigger: &str) -> Annotations {
        let text = format!("Patient has {trigger} {entity_text}.");
        let start = text.find(entity_text).unwrap();
        Annotations {
            source_text: text.clone(),
            sentences: vec![SentenceSpan {
                text: text.clone(),
                start: 0,
                end: text.len(),
                index: 0,
                has_negation: true,
                verb_count: 1,
                is_complex: false,
                entity_indices: vec![0],
            }],
            entities: vec![AnnotatedEntity {
                text: entity_text.into(),
                entity_type: EntityType::Disease,
                start,
                end: start + entity_text.len(),
                sentence_index: 0,
                negated: true,
                negation_trigger: Some(trigger.into()),
                modifiers: vec![],
                confidence: 0.9.into(),
            }],
            negation_spans: vec![],
        }
    }

    fn matchers() -> LexiconMatchers {
        LexiconMatchers::compile(&LexiconConfig::default()).unwrap()
    }

    #[test]
    fn inversion_is_an_error() {
        let ann = annotations_with_negated("diabetes", "no evidence of");
        let stmts = vec![GeneratedStatement::new("Patient has diabetes.")];
        let issues = check(&stmts, &ann, &matchers());
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Error);
        assert_eq!(issues[0].category, IssueCategory::Negation);
        assert!(issues[0].message.contains("inversion"));
        assert_eq!(issues[0].statement_index(), Some(0));
    }

    #[test]
    fn preserved_negation_is_clean() {
        let ann = annotations_with_negated("diabetes", "no evidence of");
        let stmts = vec![GeneratedStatement::new(
            "There is no evidence of diabetes in the patient.",
        )];
        assert!(check(&stmts, &ann, &matchers()).is_empty());
    }

    #[test]
    fn unclear_polarity_is_a_warning() {
        let ann = annotations_with_negated("diabetes", "no evidence of");
        let stmts = vec![GeneratedStatement::new("Diabetes: a metabolic disorder.")];
        let issues = check(&stmts, &ann, &matchers());
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert!(issues[0].message.contains("negation loss"));
    }

    #[test]
    fn unmentioned_entities_are_skipped() {
        let ann = annotations_with_negated("diabetes", "no evidence of");
        let stmts = vec![GeneratedStatement::new("Metformin lowers hepatic glucose output.")];
        assert!(check(&stmts, &ann, &matchers()).is_empty());
    }
}
