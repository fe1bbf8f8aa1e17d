//! Configuration for the validation engine and its lexicons.
//!
//! Everything tunable lives here with complete built-in defaults. The
//! lexicons are deliberately data, not constants: the shipped lists are
//! heuristic and callers may extend them from a TOML file without
//! rebuilding.

pub mod defaults;
mod lexicon_config;
mod validation_config;

pub use lexicon_config::{ComparatorPhrase, LexiconConfig};
pub use validation_config::ValidationConfig;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::ClinifactResult;

/// Top-level configuration: thresholds plus lexicons.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClinifactConfig {
    pub validation: ValidationConfig,
    pub lexicons: LexiconConfig,
}

impl ClinifactConfig {
    /// Parse a TOML string. Missing fields fall back to the defaults.
    pub fn from_toml_str(s: &str) -> ClinifactResult<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Load from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> ClinifactResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let cfg = ClinifactConfig::from_toml_str("").unwrap();
        assert_eq!(
            cfg.validation.entity_coverage_threshold,
            defaults::DEFAULT_ENTITY_COVERAGE_THRESHOLD
        );
        assert!(!cfg.lexicons.negation_patterns.is_empty());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let cfg = ClinifactConfig::from_toml_str(
            "[validation]\nmax_statement_length = 150\n",
        )
        .unwrap();
        assert_eq!(cfg.validation.max_statement_length, 150);
        assert_eq!(cfg.validation.min_cloze_candidates, 2);
    }

    #[test]
    fn lexicon_override_replaces_list() {
        let cfg = ClinifactConfig::from_toml_str(
            "[lexicons]\nmedication_suffixes = [\"mab\", \"nib\"]\n",
        )
        .unwrap();
        assert_eq!(cfg.lexicons.medication_suffixes, vec!["mab", "nib"]);
    }
}
