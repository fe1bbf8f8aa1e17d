//! Unit/threshold accuracy: numeric values and units in the draft must
//! match the source quantities they restate.

use std::collections::HashSet;
use std::sync::LazyLock;

use clinifact_core::annotation::AnnotatedEntity;
use clinifact_core::constants::QUANTITY_CONTEXT_WINDOW;
use clinifact_core::{Annotations, GeneratedStatement, IssueCategory, LexiconConfig, ValidationIssue};
use regex::Regex;
use tracing::debug;

use crate::matchers::LexiconMatchers;
use crate::textmatch::{normalize_cloze, tokens};

/// `(comparator?, value, unit?)` — the shape both sides are parsed into.
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity {
    pub comparator: Option<String>,
    pub value: f64,
    pub unit: Option<String>,
}

/// A quantity found in a statement, with the words around it for
/// relatedness checks.
#[derive(Debug, Clone)]
struct LocatedQuantity {
    quantity: Quantity,
    context: String,
}

static QUANTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(<=|>=|<|>|=)?\s*(\d+(?:\.\d+)?)\s*(%|[a-z\u{b5}][a-z0-9\u{b5}%]*(?:/[a-z0-9\u{b5}%]+|\s+per\s+[a-z]+)?)?",
    )
    .unwrap()
});

/// Parse the first quantity in `text` after comparator normalization.
pub fn parse_quantity(text: &str, lexicons: &LexiconConfig) -> Option<Quantity> {
    let normalized = normalize_cloze(text, &lexicons.comparator_phrases);
    let caps = QUANTITY_RE.captures(&normalized)?;
    let value: f64 = caps.get(2)?.as_str().parse().ok()?;
    Some(Quantity {
        comparator: caps.get(1).map(|m| m.as_str().to_string()),
        value,
        unit: caps
            .get(3)
            .map(|m| m.as_str().to_string())
            .filter(|u| looks_like_unit(u, lexicons)),
    })
}

/// Whether a captured token plausibly names a unit rather than ordinary
/// prose. The quantity pattern's unit group is greedy and will swallow
/// whatever word follows a bare number ("126 is diagnostic"); such
/// captures must count as no unit at all.
pub fn looks_like_unit(token: &str, lexicons: &LexiconConfig) -> bool {
    if lexicons.is_stopword(token) {
        return false;
    }
    token.contains('/')
        || token.contains('%')
        || token.contains('\u{b5}')
        || token.contains(" per ")
        || token.chars().any(|c| c.is_ascii_digit())
        || token.len() <= 4
}

/// All quantities in a statement, each with a surrounding word window.
fn find_quantities(statement: &str, lexicons: &LexiconConfig) -> Vec<LocatedQuantity> {
    let normalized = normalize_cloze(statement, &lexicons.comparator_phrases);
    QUANTITY_RE
        .captures_iter(&normalized)
        .filter_map(|caps| {
            let m = caps.get(2)?;
            let value: f64 = m.as_str().parse().ok()?;
            Some(LocatedQuantity {
                quantity: Quantity {
                    comparator: caps.get(1).map(|c| c.as_str().to_string()),
                    value,
                    unit: caps
                        .get(3)
                        .map(|u| u.as_str().to_string())
                        .filter(|u| looks_like_unit(u, lexicons)),
                },
                context: window(&normalized, m.start(), m.end()).to_string(),
            })
        })
        .collect()
}

/// Char-boundary-safe context window around a byte span.
fn window(text: &str, start: usize, end: usize) -> &str {
    let mut s = start.saturating_sub(QUANTITY_CONTEXT_WINDOW);
    while s > 0 && !text.is_char_boundary(s) {
        s -= 1;
    }
    let mut e = (end + QUANTITY_CONTEXT_WINDOW).min(text.len());
    while e < text.len() && !text.is_char_boundary(e) {
        e += 1;
    }
    &text[s..e]
}

/// Two word windows are related when they share a content word.
fn contexts_related(a: &str, b: &str) -> bool {
    let content = |s: &str| -> HashSet<String> {
        tokens(s)
            .into_iter()
            .filter(|t| t.len() > 2 && t.parse::<f64>().is_err())
            .collect()
    };
    !content(a).is_disjoint(&content(b))
}

/// Check every quantitative source entity against each statement.
pub fn check(
    statements: &[GeneratedStatement],
    annotations: &Annotations,
    matchers: &LexiconMatchers,
) -> Vec<ValidationIssue> {
    let lexicons = &matchers.lexicons;
    let quantitative: Vec<&AnnotatedEntity> = annotations
        .entities
        .iter()
        .filter(|e| e.entity_type.is_quantitative())
        .collect();
    if quantitative.is_empty() {
        return Vec::new();
    }

    let mut issues = Vec::new();

    for (i, stmt) in statements.iter().enumerate() {
        let stmt_quantities = find_quantities(&stmt.statement, lexicons);
        if stmt_quantities.is_empty() {
            continue;
        }

        for entity in &quantitative {
            let Some(source_q) = parse_quantity(&entity.text, lexicons) else {
                // ParseFailure: skip this entity, keep checking the rest.
                debug!(entity = %entity.text, "quantity parse failed, skipping unit check");
                continue;
            };
            let source_context = window(&annotations.source_text, entity.start, entity.end);

            // A statement quantity is related when its word window shares
            // content words with the source mention; a lone quantity in a
            // short draft is assumed related.
            let related: Vec<&LocatedQuantity> = stmt_quantities
                .iter()
                .filter(|q| {
                    stmt_quantities.len() == 1 || contexts_related(&q.context, source_context)
                })
                .collect();
            if related.is_empty() {
                continue;
            }

            let consistent = related.iter().any(|q| {
                q.quantity.value == source_q.value
                    && match (&q.quantity.unit, &source_q.unit) {
                        (Some(a), Some(b)) => matchers.lexicons.units_equivalent(a, b),
                        _ => true,
                    }
            });
            if consistent {
                continue;
            }

            if let Some(same_value) = related
                .iter()
                .find(|q| q.quantity.value == source_q.value)
            {
                let stmt_unit = same_value.quantity.unit.as_deref().unwrap_or("?");
                let src_unit = source_q.unit.as_deref().unwrap_or("?");
                issues.push(
                    ValidationIssue::error(
                        IssueCategory::UnitAccuracy,
                        format!(
                            "Unit mismatch for '{}': source uses {src_unit}, statement uses {stmt_unit}",
                            entity.text,
                        ),
                    )
                    .at_statement(i),
                );
            } else {
                issues.push(
                    ValidationIssue::error(
                        IssueCategory::UnitAccuracy,
                        format!(
                            "Value mismatch for '{}': source has {}, statement has {}",
                            entity.text, source_q.value, related[0].quantity.value,
                        ),
                    )
                    .at_statement(i),
                );
            }
        }
    }

    issues
}
