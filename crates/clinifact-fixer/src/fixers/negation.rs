//! Reinstate a negation the draft dropped, using the source trigger text.

use chrono::Utc;
use clinifact_core::{
    EnrichedContext, FixRecord, FixType, GeneratedStatement, ValidationConfig, ValidationIssue,
};
use clinifact_validation::matchers::LexiconMatchers;
use clinifact_validation::textmatch::find_ci;

/// Insert the source's negation trigger in front of the negated entity's
/// mention. "Patient has diabetes." with source trigger "no evidence of"
/// becomes "Patient has no evidence of diabetes.".
pub fn apply(
    statement: &mut GeneratedStatement,
    index: usize,
    context: &EnrichedContext,
    _issue: &ValidationIssue,
    config: &ValidationConfig,
    matchers: &LexiconMatchers,
) -> Option<FixRecord> {
    // The negation check raises one issue per negated entity, so several
    // issues can point at the same statement. Once the statement negates,
    // a second trigger would corrupt it; this mirrors the check's own
    // skip rule, so the fixed text revalidates clean.
    if matchers.negation.is_match(&statement.statement) {
        return None;
    }

    for entity in context.negated_entities() {
        let Some((start, end)) = find_ci(&statement.statement, &entity.text) else {
            continue;
        };

        // A trigger copied from the source is strong evidence; a generic
        // "no" is weaker and usually fails the gate.
        let (trigger, confidence) = match &entity.negation_trigger {
            Some(t) => (t.as_str(), entity.confidence),
            None => ("no", entity.confidence * 0.85),
        };
        if confidence.value() < config.fix_confidence_threshold {
            continue;
        }

        let source_sentence = context
            .annotations
            .sentences
            .get(entity.sentence_index)
            .map(|s| s.text.clone())
            .unwrap_or_else(|| entity.text.clone());

        let original = statement.statement.clone();
        let fixed = format!(
            "{}{} {}{}",
            &original[..start],
            trigger,
            &original[start..end],
            &original[end..]
        );

        statement.statement = fixed.clone();
        return Some(FixRecord {
            fix_type: FixType::NegationInserted,
            statement_index: index,
            original_text: original,
            fixed_text: fixed,
            source_evidence: source_sentence,
            source_location: FixRecord::sentence_location(entity.sentence_index),
            confidence,
            description: format!(
                "Restored the source negation of '{}' using trigger '{}'",
                entity.text, trigger
            ),
            timestamp: Utc::now(),
        });
    }

    None
}
