//! Targeted context hints for complex sentences.

use clinifact_core::annotation::{AnnotatedEntity, EntityType};
use clinifact_core::constants::CONTEXT_HINT_ENTITY_LIMIT;

/// Suggest what context would make a `ComplexNeedsContext` sentence
/// testable. Returns `None` when no targeted hint applies.
pub fn suggest(entities: &[&AnnotatedEntity]) -> Option<String> {
    let has = |t: EntityType| entities.iter().any(|e| e.entity_type == t);

    if has(EntityType::Medication) && !has(EntityType::Disease) {
        return Some(
            "Medication mentioned without its disease; add the indication or mechanism of action"
                .into(),
        );
    }

    if has(EntityType::Disease) && !has(EntityType::Medication) {
        return Some("Disease mentioned without treatment; consider adding diagnostic criteria".into());
    }

    if entities.len() > CONTEXT_HINT_ENTITY_LIMIT {
        return Some(
            "Many entities in one sentence; keep only the most testable ones per statement".into(),
        );
    }

    None
}
