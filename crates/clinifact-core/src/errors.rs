//! Error taxonomy for the clinifact core.
//!
//! Only conditions that make further processing of a record impossible are
//! errors. Recoverable conditions (a skipped check, an unapplied fix, a
//! quantity that fails to parse) are represented as data in the validation
//! and correction reports, never as control-flow errors.

/// Convenience alias used across the workspace.
pub type ClinifactResult<T> = Result<T, ClinifactError>;

#[derive(Debug, thiserror::Error)]
pub enum ClinifactError {
    /// A draft record is so malformed it cannot be modeled at all.
    #[error("structural error in draft record: {reason}")]
    Structural { reason: String },

    /// The linguistic annotator is disabled or failed for this item.
    /// Callers skip cross-validation and run heuristic validators only.
    #[error("annotation unavailable: {reason}")]
    AnnotationUnavailable { reason: String },

    /// Annotation offsets violate the span invariants.
    #[error("invalid annotation span: {details}")]
    InvalidSpan { details: String },

    /// Configuration could not be read or parsed.
    #[error("config error: {message}")]
    Config { message: String },

    /// A lexicon entry produced an unusable pattern.
    #[error("lexicon pattern error for {lexicon}: {message}")]
    LexiconPattern { lexicon: String, message: String },
}

impl From<toml::de::Error> for ClinifactError {
    fn from(e: toml::de::Error) -> Self {
        Self::Config {
            message: e.to_string(),
        }
    }
}

impl From<std::io::Error> for ClinifactError {
    fn from(e: std::io::Error) -> Self {
        Self::Config {
            message: e.to_string(),
        }
    }
}
