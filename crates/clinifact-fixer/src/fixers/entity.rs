//! Surface missing critical entities with a trailing parenthetical.
//!
//! The fixer never rewrites the claim itself; it appends
//! `(related: a, b)` so the drafted statement at least names what the
//! source considered critical.

use chrono::Utc;
use clinifact_core::annotation::AnnotatedEntity;
use clinifact_core::{
    Confidence, EnrichedContext, FixRecord, FixType, GeneratedStatement, ValidationConfig,
    ValidationIssue,
};
use clinifact_validation::crossval::completeness::entity_mentioned;

/// At most this many entities are named in the parenthetical.
const RELATED_ENTITY_LIMIT: usize = 2;

pub fn apply(
    statement: &mut GeneratedStatement,
    index: usize,
    context: &EnrichedContext,
    _issue: &ValidationIssue,
    config: &ValidationConfig,
) -> Option<FixRecord> {
    // Recompute what is missing rather than trusting the issue message.
    let missing: Vec<&AnnotatedEntity> = context
        .annotations
        .critical_entities()
        .into_iter()
        .filter(|e| !entity_mentioned(e, &statement.statement, config.fuzzy_token_ratio))
        .collect();
    if missing.is_empty() {
        return None;
    }

    let named = &missing[..missing.len().min(RELATED_ENTITY_LIMIT)];
    let mean = named.iter().map(|e| e.confidence.value()).sum::<f64>() / named.len() as f64;
    let confidence = Confidence::new(mean * 0.9);
    if confidence.value() < config.fix_confidence_threshold {
        return None;
    }

    let names = named
        .iter()
        .map(|e| e.text.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let parenthetical = format!(" (related: {names})");

    let original = statement.statement.clone();
    let fixed = match original.strip_suffix('.') {
        Some(body) => format!("{body}{parenthetical}."),
        None => format!("{original}{parenthetical}"),
    };

    let anchor = named[0];
    let source_sentence = context
        .annotations
        .sentences
        .get(anchor.sentence_index)
        .map(|s| s.text.clone())
        .unwrap_or_else(|| anchor.text.clone());

    statement.statement = fixed.clone();
    Some(FixRecord {
        fix_type: FixType::EntityAdded,
        statement_index: index,
        original_text: original,
        fixed_text: fixed,
        source_evidence: source_sentence,
        source_location: FixRecord::sentence_location(anchor.sentence_index),
        confidence,
        description: format!("Named missing critical entities: {names}"),
        timestamp: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinifact_atomicity::CandidateGenerator;
    use clinifact_core::annotation::{Annotations, EntityType, SentenceSpan};
    use clinifact_core::IssueCategory;

    fn context(entities: Vec<(&str, EntityType, f64)>) -> EnrichedContext {
        let text = "Furosemide and lisinopril treat heart failure.";
        let count = entities.len();
        let ann = Annotations {
            source_text: text.into(),
            sentences: vec![SentenceSpan {
                text: text.into(),
                start: 0,
                end: text.len(),
                index: 0,
                has_negation: false,
                verb_count: 1,
                is_complex: false,
                entity_indices: (0..count).collect(),
            }],
            entities: entities
                .into_iter()
                .map(|(t, ty, c)| AnnotatedEntity {
                    text: t.into(),
                    entity_type: ty,
                    start: 0,
                    end: t.len(),
                    sentence_index: 0,
                    negated: false,
                    negation_trigger: None,
                    modifiers: vec![],
                    confidence: c.into(),
                })
                .collect(),
            negation_spans: vec![],
        };
        CandidateGenerator::new().generate(&ann, "critique")
    }

    fn coverage_issue() -> ValidationIssue {
        ValidationIssue::warning(IssueCategory::EntityCompleteness, "Low entity coverage")
            .at_statement(0)
    }

    #[test]
    fn appends_parenthetical_before_the_period() {
        let ctx = context(vec![
            ("heart failure", EntityType::Disease, 0.95),
            ("furosemide", EntityType::Medication, 0.95),
        ]);
        let mut stmt = GeneratedStatement::new("Heart failure causes dyspnea.");
        let record = apply(
            &mut stmt,
            0,
            &ctx,
            &coverage_issue(),
            &ValidationConfig::default(),
        )
        .unwrap();

        assert_eq!(
            stmt.statement,
            "Heart failure causes dyspnea (related: furosemide)."
        );
        assert_eq!(record.fix_type, FixType::EntityAdded);
        assert_eq!(record.source_location, "sentence[0]");
        assert_eq!(
            record.source_evidence,
            "Furosemide and lisinopril treat heart failure."
        );
    }

    #[test]
    fn names_at_most_two_entities() {
        let ctx = context(vec![
            ("furosemide", EntityType::Medication, 0.95),
            ("lisinopril", EntityType::Medication, 0.95),
            ("spironolactone", EntityType::Medication, 0.95),
        ]);
        let mut stmt = GeneratedStatement::new("Heart failure causes dyspnea.");
        let record = apply(
            &mut stmt,
            0,
            &ctx,
            &coverage_issue(),
            &ValidationConfig::default(),
        )
        .unwrap();
        assert!(stmt
            .statement
            .ends_with("(related: furosemide, lisinopril)."));
        assert!(!record.fixed_text.contains("spironolactone"));
    }

    #[test]
    fn low_annotation_confidence_blocks_the_fix() {
        // 0.8 * 0.9 = 0.72 < 0.8.
        let ctx = context(vec![("furosemide", EntityType::Medication, 0.8)]);
        let mut stmt = GeneratedStatement::new("Heart failure causes dyspnea.");
        assert!(apply(
            &mut stmt,
            0,
            &ctx,
            &coverage_issue(),
            &ValidationConfig::default()
        )
        .is_none());
        assert_eq!(stmt.statement, "Heart failure causes dyspnea.");
    }

    #[test]
    fn nothing_missing_means_no_fix() {
        let ctx = context(vec![("heart failure", EntityType::Disease, 0.95)]);
        let mut stmt = GeneratedStatement::new("Heart failure causes dyspnea.");
        assert!(apply(
            &mut stmt,
            0,
            &ctx,
            &coverage_issue(),
            &ValidationConfig::default()
        )
        .is_none());
    }
}
