//! Per-sentence atomicity decision.
//!
//! Rules are evaluated in a fixed order and the first match wins, so the
//! decision is deterministic for a given annotation set.

use clinifact_core::annotation::{AnnotatedEntity, SentenceSpan};
use clinifact_core::models::AtomicityRecommendation;

/// Decide how `sentence` should be decomposed, given the entities it owns.
///
/// Rules, in order:
/// 1. At most one entity → `AtomicSingle`.
/// 2. Two or more entities of an independent type (disease, procedure)
///    → `ShouldSplit`.
/// 3. Any clinically related type pair present → `MultiClozeOk`.
/// 4. More than one verb and at least two entities → `ShouldSplit`.
/// 5. Complex sentence with at least two entities → `ComplexNeedsContext`.
/// 6. Otherwise → `MultiClozeOk`.
pub fn analyze(sentence: &SentenceSpan, entities: &[&AnnotatedEntity]) -> AtomicityRecommendation {
    if entities.len() <= 1 {
        return AtomicityRecommendation::AtomicSingle;
    }

    if has_independent_type_pair(entities) {
        return AtomicityRecommendation::ShouldSplit;
    }

    if has_related_pair(entities) {
        return AtomicityRecommendation::MultiClozeOk;
    }

    if sentence.verb_count > 1 && entities.len() >= 2 {
        return AtomicityRecommendation::ShouldSplit;
    }

    if sentence.is_complex && entities.len() >= 2 {
        return AtomicityRecommendation::ComplexNeedsContext;
    }

    AtomicityRecommendation::MultiClozeOk
}

/// Two or more entities sharing an independent type (each would stand as
/// its own fact).
fn has_independent_type_pair(entities: &[&AnnotatedEntity]) -> bool {
    use clinifact_core::annotation::EntityType;
    let count_of = |t: EntityType| entities.iter().filter(|e| e.entity_type == t).count();
    count_of(EntityType::Disease) >= 2 || count_of(EntityType::Procedure) >= 2
}

/// Any pair of entities related by the fixed clinical type-pair table.
fn has_related_pair(entities: &[&AnnotatedEntity]) -> bool {
    for (i, a) in entities.iter().enumerate() {
        for b in &entities[i + 1..] {
            if a.is_related_to(b) {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinifact_core::annotation::EntityType;

    fn sentence(verb_count: usize, is_complex: bool) -> SentenceSpan {
        SentenceSpan {
            text: "test sentence".into(),
            start: 0,
            end: 13,
            index: 0,
            has_negation: false,
            verb_count,
            is_complex,
            entity_indices: vec![],
        }
    }

    fn entity(text: &str, entity_type: EntityType) -> AnnotatedEntity {
        AnnotatedEntity {
            text: text.into(),
            entity_type,
            start: 0,
            end: text.len(),
            sentence_index: 0,
            negated: false,
            negation_trigger: None,
            modifiers: vec![],
            confidence: 0.9.into(),
        }
    }

    #[test]
    fn zero_or_one_entity_is_atomic() {
        let s = sentence(1, false);
        assert_eq!(analyze(&s, &[]), AtomicityRecommendation::AtomicSingle);
        let e = entity("asthma", EntityType::Disease);
        assert_eq!(analyze(&s, &[&e]), AtomicityRecommendation::AtomicSingle);
    }

    #[test]
    fn two_diseases_force_split() {
        let s = sentence(1, false);
        let a = entity("asthma", EntityType::Disease);
        let b = entity("copd", EntityType::Disease);
        assert_eq!(analyze(&s, &[&a, &b]), AtomicityRecommendation::ShouldSplit);
    }

    #[test]
    fn medication_disease_pair_is_multi_cloze() {
        let s = sentence(1, false);
        let a = entity("metformin", EntityType::Medication);
        let b = entity("type 2 diabetes", EntityType::Disease);
        assert_eq!(analyze(&s, &[&a, &b]), AtomicityRecommendation::MultiClozeOk);
    }

    #[test]
    fn related_pair_takes_precedence_over_verb_count() {
        let s = sentence(3, false);
        let a = entity("metformin", EntityType::Medication);
        let b = entity("type 2 diabetes", EntityType::Disease);
        assert_eq!(analyze(&s, &[&a, &b]), AtomicityRecommendation::MultiClozeOk);
    }

    #[test]
    fn multiple_verbs_with_unrelated_entities_split() {
        let s = sentence(2, false);
        let a = entity("liver", EntityType::Anatomy);
        let b = entity("spleen", EntityType::Anatomy);
        assert_eq!(analyze(&s, &[&a, &b]), AtomicityRecommendation::ShouldSplit);
    }

    #[test]
    fn complex_sentence_needs_context() {
        let s = sentence(1, true);
        let a = entity("liver", EntityType::Anatomy);
        let b = entity("spleen", EntityType::Anatomy);
        assert_eq!(
            analyze(&s, &[&a, &b]),
            AtomicityRecommendation::ComplexNeedsContext
        );
    }

    #[test]
    fn fallthrough_is_multi_cloze() {
        let s = sentence(1, false);
        let a = entity("liver", EntityType::Anatomy);
        let b = entity("spleen", EntityType::Anatomy);
        assert_eq!(analyze(&s, &[&a, &b]), AtomicityRecommendation::MultiClozeOk);
    }

    #[test]
    fn disease_plus_procedure_does_not_count_as_independent_pair() {
        // Independent types must repeat; one of each is not a split signal.
        let s = sentence(1, false);
        let a = entity("appendicitis", EntityType::Disease);
        let b = entity("appendectomy", EntityType::Procedure);
        assert_eq!(analyze(&s, &[&a, &b]), AtomicityRecommendation::MultiClozeOk);
    }
}
