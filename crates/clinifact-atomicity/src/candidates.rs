//! Fact candidate generation: one confidence-scored candidate per source
//! sentence, plus the human-readable summaries injected into prompts.

use std::collections::BTreeMap;

use clinifact_core::annotation::{AnnotatedEntity, Annotations, EntityType};
use clinifact_core::constants::{COMPLEXITY_PENALTY, VERB_PENALTY, VERB_PENALTY_THRESHOLD};
use clinifact_core::models::{AtomicityRecommendation, EnrichedContext, FactCandidate};
use clinifact_core::Confidence;
use tracing::debug;

use crate::{analyzer, context_hint, split};

/// Turns an annotation set into an [`EnrichedContext`] for the drafting
/// engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct CandidateGenerator;

impl CandidateGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Build the enriched context for one source text.
    ///
    /// `source_field` names the field of the source record the text came
    /// from (e.g. "critique") and is carried through for reporting.
    pub fn generate(&self, annotations: &Annotations, source_field: &str) -> EnrichedContext {
        let mut candidates = Vec::with_capacity(annotations.sentences.len());

        for sentence in &annotations.sentences {
            let indexed: Vec<(usize, &AnnotatedEntity)> = sentence
                .entity_indices
                .iter()
                .filter_map(|&i| annotations.entities.get(i).map(|e| (i, e)))
                .collect();
            let entities: Vec<&AnnotatedEntity> = indexed.iter().map(|(_, e)| *e).collect();

            let atomicity = analyzer::analyze(sentence, &entities);

            let split_recommendation = match atomicity {
                AtomicityRecommendation::ShouldSplit => Some(split::recommend(sentence, &indexed)),
                _ => None,
            };

            let context_suggestion = match atomicity {
                AtomicityRecommendation::ComplexNeedsContext => context_hint::suggest(&entities),
                _ => None,
            };

            let confidence = candidate_confidence(sentence.is_complex, sentence.verb_count, &entities);

            debug!(
                sentence_index = sentence.index,
                ?atomicity,
                confidence = confidence.value(),
                "fact candidate"
            );

            candidates.push(FactCandidate {
                sentence: sentence.text.clone(),
                start: sentence.start,
                end: sentence.end,
                sentence_index: sentence.index,
                entities: entities.iter().map(|e| (*e).clone()).collect(),
                atomicity,
                split_recommendation,
                context_suggestion,
                confidence,
            });
        }

        EnrichedContext {
            source_text: annotations.source_text.clone(),
            source_field: source_field.to_string(),
            entity_summary: entity_summary(annotations),
            negation_summary: negation_summary(annotations),
            atomicity_summary: atomicity_summary(&candidates),
            annotations: annotations.clone(),
            candidates,
        }
    }
}

/// Average entity confidence, penalized for complexity and verb count.
/// Sentences with no entities score a flat 0.5.
fn candidate_confidence(
    is_complex: bool,
    verb_count: usize,
    entities: &[&AnnotatedEntity],
) -> Confidence {
    if entities.is_empty() {
        return Confidence::new(Confidence::NO_ENTITY);
    }

    let mut score = entities.iter().map(|e| e.confidence.value()).sum::<f64>() / entities.len() as f64;
    if is_complex {
        score *= COMPLEXITY_PENALTY;
    }
    if verb_count > VERB_PENALTY_THRESHOLD {
        score *= VERB_PENALTY;
    }
    Confidence::new(score)
}

/// "Found 3 diseases, 1 medication" — counts per type, annotation order
/// of first appearance is not significant, so types are sorted by label.
fn entity_summary(annotations: &Annotations) -> String {
    if annotations.entities.is_empty() {
        return String::new();
    }

    let mut counts: BTreeMap<(&'static str, &'static str), usize> = BTreeMap::new();
    for e in &annotations.entities {
        let labels = (
            e.entity_type.plural_label(),
            e.entity_type.singular_label(),
        );
        *counts.entry(labels).or_insert(0) += 1;
    }

    let parts: Vec<String> = counts
        .iter()
        .map(|((plural, singular), n)| {
            let label = if *n == 1 { singular } else { plural };
            format!("{n} {label}")
        })
        .collect();
    format!("Found {}", parts.join(", "))
}

/// "'fever' (no), 'murmur' (no evidence of)" — one entry per negated
/// entity with its trigger. Empty when nothing is negated.
fn negation_summary(annotations: &Annotations) -> String {
    let negated = annotations.negated_entities();
    if negated.is_empty() {
        return String::new();
    }

    let parts: Vec<String> = negated
        .iter()
        .map(|e| {
            let trigger = e.negation_trigger.as_deref().unwrap_or("negated");
            format!("'{}' ({})", e.text, trigger)
        })
        .collect();
    format!("Negated findings: {}", parts.join(", "))
}

/// Counts per atomicity recommendation, omitting zero counts. Empty when
/// there are no candidates.
fn atomicity_summary(candidates: &[FactCandidate]) -> String {
    if candidates.is_empty() {
        return String::new();
    }

    let kinds = [
        AtomicityRecommendation::AtomicSingle,
        AtomicityRecommendation::ShouldSplit,
        AtomicityRecommendation::MultiClozeOk,
        AtomicityRecommendation::ComplexNeedsContext,
    ];

    let parts: Vec<String> = kinds
        .iter()
        .filter_map(|kind| {
            let n = candidates.iter().filter(|c| c.atomicity == *kind).count();
            (n > 0).then(|| format!("{n} {}", kind.label()))
        })
        .collect();
    format!("Sentence atomicity: {}", parts.join(", "))
}
