//! Deterministic rendering of an [`EnrichedContext`] for prompt injection.

use std::fmt::Write;

use clinifact_core::models::{AtomicityRecommendation, EnrichedContext};

/// Render the annotation context block handed to the drafting engine.
///
/// The output is deterministic for a given context: same sentences, same
/// order, same wording. Downstream caching keys on this text.
pub fn format_for_prompt(ctx: &EnrichedContext) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "=== SOURCE ANNOTATION CONTEXT ({}) ===", ctx.source_field);

    if !ctx.entity_summary.is_empty() {
        let _ = writeln!(out, "{}", ctx.entity_summary);
    }
    if !ctx.negation_summary.is_empty() {
        let _ = writeln!(out, "{}", ctx.negation_summary);
    }
    if !ctx.atomicity_summary.is_empty() {
        let _ = writeln!(out, "{}", ctx.atomicity_summary);
    }

    for candidate in &ctx.candidates {
        let _ = writeln!(out, "\nSentence {}: {}", candidate.sentence_index, candidate.sentence);

        if !candidate.entities.is_empty() {
            let names: Vec<String> = candidate
                .entities
                .iter()
                .map(|e| format!("{} [{}]", e.text, e.entity_type.plural_label()))
                .collect();
            let _ = writeln!(out, "  Entities: {}", names.join(", "));
        }

        let _ = writeln!(out, "  Atomicity: {}", candidate.atomicity.label());

        match candidate.atomicity {
            AtomicityRecommendation::AtomicSingle => {
                let _ = writeln!(out, "  Recommendation: draft one statement from this sentence");
            }
            AtomicityRecommendation::ShouldSplit => {
                if let Some(split) = &candidate.split_recommendation {
                    let _ = writeln!(
                        out,
                        "  Recommendation: split into {} statements ({})",
                        split.split_texts.len(),
                        split.reason
                    );
                }
            }
            AtomicityRecommendation::MultiClozeOk => {
                let _ = writeln!(
                    out,
                    "  Recommendation: one statement with multiple cloze candidates is acceptable"
                );
            }
            AtomicityRecommendation::ComplexNeedsContext => {
                let hint = candidate
                    .context_suggestion
                    .as_deref()
                    .unwrap_or("add clarifying clinical context");
                let _ = writeln!(out, "  Recommendation: {hint}");
            }
        }

        let negated: Vec<_> = candidate.entities.iter().filter(|e| e.negated).collect();
        if !negated.is_empty() {
            let names: Vec<&str> = negated.iter().map(|e| e.text.as_str()).collect();
            let _ = writeln!(out, "  WARNING: negated in source: {}", names.join(", "));
        }
    }

    let negated = ctx.negated_entities();
    if !negated.is_empty() {
        let _ = writeln!(out, "\n=== NEGATED FINDINGS (MANDATORY) ===");
        for e in negated {
            let trigger = e.negation_trigger.as_deref().unwrap_or("negated");
            let _ = writeln!(
                out,
                "- '{}' is negated in the source ({trigger}); any statement mentioning it MUST preserve this negation",
                e.text
            );
        }
    }

    out
}
