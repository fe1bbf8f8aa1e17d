//! ValidationEngine — compiles the lexicons once, runs cross-validation
//! and the heuristic validators, and offers a parallel batch entry point.

use clinifact_core::{
    Annotations, ClinifactConfig, ClinifactResult, GeneratedStatement, ValidationConfig,
    ValidationIssue,
};
use rayon::prelude::*;
use tracing::debug;

use crate::matchers::LexiconMatchers;
use crate::{crossval, heuristics};

/// One source item's drafts, ready for validation.
///
/// `annotations` is `None` when the annotator is disabled or failed for
/// this item; cross-validation is then skipped and only the heuristic
/// validators run.
pub struct ValidationItem<'a> {
    pub statements: &'a [GeneratedStatement],
    pub source_text: &'a str,
    pub annotations: Option<&'a Annotations>,
}

/// Validates draft statements against source annotations.
///
/// Stateless after construction: the same item always yields the same
/// issue list, so re-validation is safe and cheap.
pub struct ValidationEngine {
    config: ValidationConfig,
    matchers: LexiconMatchers,
}

impl ValidationEngine {
    /// Build an engine from a full configuration. Fails only if a
    /// configured lexicon cannot be compiled.
    pub fn new(config: &ClinifactConfig) -> ClinifactResult<Self> {
        Ok(Self {
            config: config.validation.clone(),
            matchers: LexiconMatchers::compile(&config.lexicons)?,
        })
    }

    pub fn with_defaults() -> ClinifactResult<Self> {
        Self::new(&ClinifactConfig::default())
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    pub fn matchers(&self) -> &LexiconMatchers {
        &self.matchers
    }

    /// Validate one item's draft statements.
    ///
    /// Issue order is deterministic: cross-validation findings first,
    /// then heuristics, each walking statements in order.
    pub fn validate_item(&self, item: &ValidationItem<'_>) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        match item.annotations.filter(|a| !a.is_empty()) {
            Some(annotations) => {
                issues.extend(crossval::check_all(
                    item.statements,
                    annotations,
                    &self.matchers,
                    self.config.entity_coverage_threshold,
                    self.config.fuzzy_token_ratio,
                ));
            }
            None => {
                debug!("annotations unavailable; skipping cross-validation");
            }
        }

        issues.extend(heuristics::run_all(
            item.statements,
            item.source_text,
            item.annotations,
            &self.config,
            &self.matchers,
        ));

        debug!(
            statements = item.statements.len(),
            issues = issues.len(),
            "item validated"
        );
        issues
    }

    /// Validate many items in parallel. Items are independent, so this
    /// is a straight data-parallel map; result order matches input order.
    pub fn validate_batch(&self, items: &[ValidationItem<'_>]) -> Vec<Vec<ValidationIssue>> {
        items.par_iter().map(|item| self.validate_item(item)).collect()
    }
}
