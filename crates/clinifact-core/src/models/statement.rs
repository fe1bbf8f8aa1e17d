use serde::{Deserialize, Serialize};

/// A draft statement produced by the external drafting engine.
///
/// Mutable only by the drafting engine itself and the auto-fixer; the
/// validators treat it as read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedStatement {
    /// The statement text itself.
    pub statement: String,
    /// Optional supporting context shown alongside the statement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Terms within the statement intended to be blanked for recall.
    #[serde(default)]
    pub cloze_candidates: Vec<String>,
}

impl GeneratedStatement {
    pub fn new(statement: impl Into<String>) -> Self {
        Self {
            statement: statement.into(),
            context: None,
            cloze_candidates: Vec::new(),
        }
    }

    pub fn with_candidates<I, S>(mut self, candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cloze_candidates = candidates.into_iter().map(Into::into).collect();
        self
    }
}
