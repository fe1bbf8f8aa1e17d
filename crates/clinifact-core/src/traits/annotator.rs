use crate::annotation::Annotations;
use crate::errors::ClinifactResult;

/// The linguistic annotator boundary.
///
/// Implementations wrap whatever NLP backend produces sentences, typed
/// entities, and negation spans. Construct one handle at process start,
/// share it read-only across worker tasks, and drop it at process exit;
/// the core never caches annotator state itself.
pub trait Annotator: Send + Sync {
    /// Annotate one source text. Implementations should be stateless per
    /// call; the core may invoke this from many workers concurrently.
    fn annotate(&self, text: &str) -> ClinifactResult<Annotations>;

    /// Whether annotation is available at all. When false, callers skip
    /// cross-validation and run heuristic validators only.
    fn is_enabled(&self) -> bool {
        true
    }
}

/// Annotator stand-in for deployments without an NLP backend.
/// Returns an empty annotation set for every text.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledAnnotator;

impl Annotator for DisabledAnnotator {
    fn annotate(&self, text: &str) -> ClinifactResult<Annotations> {
        Ok(Annotations::empty(text))
    }

    fn is_enabled(&self) -> bool {
        false
    }
}
