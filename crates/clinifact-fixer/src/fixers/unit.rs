//! Repair unit drift and dropped comparators against a source quantity.
//!
//! Value drift is never auto-fixed: a wrong number needs a redraft, not
//! a splice.

use std::sync::LazyLock;

use chrono::Utc;
use clinifact_core::annotation::AnnotatedEntity;
use clinifact_core::{
    EnrichedContext, FixRecord, FixType, GeneratedStatement, LexiconConfig, ValidationConfig,
    ValidationIssue,
};
use clinifact_validation::crossval::units::{looks_like_unit, parse_quantity};
use clinifact_validation::textmatch::{find_ci, normalize_cloze};
use regex::Regex;

static RAW_QUANTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        "(<=|>=|<|>)?\\s*(\\d+(?:\\.\\d+)?)\\s*(%|[A-Za-z\u{b5}][A-Za-z0-9\u{b5}%]*(?:/[A-Za-z0-9\u{b5}%]+|\\s+per\\s+[A-Za-z]+)?)?",
    )
    .unwrap()
});

pub fn apply(
    statement: &mut GeneratedStatement,
    index: usize,
    context: &EnrichedContext,
    _issue: &ValidationIssue,
    config: &ValidationConfig,
    lexicons: &LexiconConfig,
) -> Option<FixRecord> {
    let comparators = &lexicons.comparator_phrases;
    let original = statement.statement.clone();

    for entity in context
        .annotations
        .entities
        .iter()
        .filter(|e| e.entity_type.is_quantitative())
    {
        let Some(source_q) = parse_quantity(&entity.text, lexicons) else {
            continue;
        };

        for caps in RAW_QUANTITY_RE.captures_iter(&original) {
            let Some(value_m) = caps.get(2) else {
                continue;
            };
            let Ok(value) = value_m.as_str().parse::<f64>() else {
                continue;
            };
            if value != source_q.value {
                continue;
            }

            // Unit drift next to the right value.
            if let (Some(unit_m), Some(src_unit)) = (caps.get(3), source_q.unit.as_deref()) {
                let stmt_unit = unit_m.as_str().to_lowercase();
                if looks_like_unit(&stmt_unit, lexicons)
                    && !lexicons.units_equivalent(&stmt_unit, src_unit)
                {
                    let confidence = entity.confidence * 0.95;
                    if confidence.value() < config.fix_confidence_threshold {
                        continue;
                    }
                    let replacement = source_unit_spelling(&entity.text, src_unit);
                    let fixed = format!(
                        "{}{}{}",
                        &original[..unit_m.start()],
                        replacement,
                        &original[unit_m.end()..]
                    );
                    statement.statement = fixed.clone();
                    return Some(record(
                        FixType::UnitReplaced,
                        index,
                        original.clone(),
                        fixed,
                        entity,
                        context,
                        confidence.value(),
                        format!(
                            "Replaced unit '{}' with source unit '{replacement}' for '{}'",
                            unit_m.as_str(),
                            entity.text
                        ),
                    ));
                }
            }

            // Comparator the source states but the draft dropped.
            if let Some(src_cmp) = source_q.comparator.as_deref() {
                let normalized = normalize_cloze(&original, comparators);
                let already_compared = ["<=", ">=", "<", ">", "="]
                    .iter()
                    .any(|sym| normalized.contains(&format!("{sym}{}", value_m.as_str())));
                if !already_compared {
                    let confidence = entity.confidence * 0.95;
                    if confidence.value() < config.fix_confidence_threshold {
                        continue;
                    }
                    let fixed = format!(
                        "{}{src_cmp} {}",
                        &original[..value_m.start()],
                        &original[value_m.start()..]
                    );
                    statement.statement = fixed.clone();
                    return Some(record(
                        FixType::ComparatorAdded,
                        index,
                        original.clone(),
                        fixed,
                        entity,
                        context,
                        confidence.value(),
                        format!("Inserted comparator '{src_cmp}' from '{}'", entity.text),
                    ));
                }
            }
        }
    }

    None
}

/// Recover the source's original unit casing from the entity text.
/// `find_ci` keeps the offsets valid against the original bytes.
fn source_unit_spelling(entity_text: &str, unit: &str) -> String {
    match find_ci(entity_text, unit) {
        Some((start, end)) => entity_text[start..end].to_string(),
        None => unit.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn record(
    fix_type: FixType,
    index: usize,
    original: String,
    fixed: String,
    entity: &AnnotatedEntity,
    context: &EnrichedContext,
    confidence: f64,
    description: String,
) -> FixRecord {
    let source_sentence = context
        .annotations
        .sentences
        .get(entity.sentence_index)
        .map(|s| s.text.clone())
        .unwrap_or_else(|| entity.text.clone());
    FixRecord {
        fix_type,
        statement_index: index,
        original_text: original,
        fixed_text: fixed,
        source_evidence: source_sentence,
        source_location: FixRecord::sentence_location(entity.sentence_index),
        confidence: confidence.into(),
        description,
        timestamp: Utc::now(),
    }
}
