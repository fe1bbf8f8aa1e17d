//! Split recommendation for sentences carrying multiple independent facts.

use clinifact_core::annotation::{AnnotatedEntity, EntityType, SentenceSpan};
use clinifact_core::models::SplitRecommendation;
use clinifact_core::Confidence;
use tracing::debug;

/// Build a split recommendation for a `ShouldSplit` sentence.
///
/// `entities` carries `(annotation_index, entity)` pairs so the groupings
/// reference the annotation set's entity sequence.
pub fn recommend(
    sentence: &SentenceSpan,
    entities: &[(usize, &AnnotatedEntity)],
) -> SplitRecommendation {
    let reason = split_reason(sentence, entities);
    let entity_groups = group_related(entities);

    // One placeholder statement per group; the drafting engine writes
    // the actual prose.
    let split_texts = entity_groups
        .iter()
        .map(|group| {
            let names: Vec<&str> = group
                .iter()
                .filter_map(|&i| entities.iter().find(|(ei, _)| *ei == i))
                .map(|(_, e)| e.text.as_str())
                .collect();
            format!("Statement about: {}", names.join(", "))
        })
        .collect();

    debug!(
        sentence_index = sentence.index,
        groups = entity_groups.len(),
        %reason,
        "split recommended"
    );

    SplitRecommendation {
        sentence_index: sentence.index,
        reason,
        split_texts,
        entity_groups,
        confidence: Confidence::new(Confidence::SPLIT),
    }
}

/// Pick the reason string from entity-type counts.
fn split_reason(sentence: &SentenceSpan, entities: &[(usize, &AnnotatedEntity)]) -> String {
    let count_of = |t: EntityType| entities.iter().filter(|(_, e)| e.entity_type == t).count();

    if count_of(EntityType::Disease) >= 2 {
        "multiple independent diseases in one sentence".into()
    } else if count_of(EntityType::Procedure) >= 2 {
        "multiple independent procedures in one sentence".into()
    } else if count_of(EntityType::Medication) >= 2 {
        "multiple medications; consider splitting unless the sentence compares them".into()
    } else if sentence.verb_count > 1 {
        "multiple verbs with different subjects".into()
    } else {
        "multiple unrelated facts in one sentence".into()
    }
}

/// Greedy grouping: each ungrouped entity starts a new group and absorbs
/// every other ungrouped entity related to it by the clinical type-pair
/// table. Groups hold annotation-set entity indices.
fn group_related(entities: &[(usize, &AnnotatedEntity)]) -> Vec<Vec<usize>> {
    let mut grouped = vec![false; entities.len()];
    let mut groups = Vec::new();

    for i in 0..entities.len() {
        if grouped[i] {
            continue;
        }
        grouped[i] = true;
        let mut group = vec![entities[i].0];
        for j in (i + 1)..entities.len() {
            if grouped[j] {
                continue;
            }
            if entities[i].1.is_related_to(entities[j].1) {
                grouped[j] = true;
                group.push(entities[j].0);
            }
        }
        groups.push(group);
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence(verb_count: usize) -> SentenceSpan {
        SentenceSpan {
            text: "test".into(),
            start: 0,
            end: 4,
            index: 2,
            has_negation: false,
            verb_count,
            is_complex: false,
            entity_indices: vec![],
        }
    }

    fn entity(text: &str, entity_type: EntityType) -> AnnotatedEntity {
        AnnotatedEntity {
            text: text.into(),
            entity_type,
            start: 0,
            end: text.len(),
            sentence_index: 2,
            negated: false,
            negation_trigger: None,
            modifiers: vec![],
            confidence: 0.9.into(),
        }
    }

    #[test]
    fn two_diseases_yield_two_groups_and_disease_reason() {
        let a = entity("asthma", EntityType::Disease);
        let b = entity("copd", EntityType::Disease);
        let rec = recommend(&sentence(1), &[(0, &a), (1, &b)]);
        assert!(rec.reason.contains("diseases"));
        assert_eq!(rec.entity_groups, vec![vec![0], vec![1]]);
        assert_eq!(rec.split_texts.len(), 2);
        assert_eq!(rec.confidence.value(), 0.7);
    }

    #[test]
    fn related_entities_share_a_group() {
        let a = entity("asthma", EntityType::Disease);
        let b = entity("albuterol", EntityType::Medication);
        let c = entity("copd", EntityType::Disease);
        let rec = recommend(&sentence(2), &[(0, &a), (1, &b), (2, &c)]);
        // Albuterol is absorbed into the first disease's group.
        assert_eq!(rec.entity_groups, vec![vec![0, 1], vec![2]]);
    }

    #[test]
    fn verb_reason_when_no_type_dominates() {
        let a = entity("liver", EntityType::Anatomy);
        let b = entity("spleen", EntityType::Anatomy);
        let rec = recommend(&sentence(2), &[(0, &a), (1, &b)]);
        assert!(rec.reason.contains("verbs"));
    }

    #[test]
    fn sentence_index_is_carried() {
        let a = entity("asthma", EntityType::Disease);
        let b = entity("copd", EntityType::Disease);
        let rec = recommend(&sentence(1), &[(0, &a), (1, &b)]);
        assert_eq!(rec.sentence_index, 2);
    }
}
