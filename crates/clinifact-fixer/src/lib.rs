//! # clinifact-fixer
//!
//! Narrow, provenance-logged automatic corrections.
//!
//! The fixer only touches a statement when a dedicated strategy can cite
//! literal source evidence at high confidence; everything else is left
//! for the drafting engine or a human. Each applied fix appends an
//! immutable [`FixRecord`] to the audit log.
//!
//! [`FixRecord`]: clinifact_core::FixRecord

pub mod fixers;

use clinifact_core::{
    ClinifactConfig, ClinifactResult, EnrichedContext, FixRecord, GeneratedStatement,
    IssueCategory, ValidationConfig, ValidationIssue,
};
use clinifact_validation::matchers::LexiconMatchers;
use tracing::debug;

/// Applies bounded corrections to a copied draft set.
///
/// Carries the same compiled lexicon matchers as the validation engine,
/// so a fix that satisfies a check here also satisfies it on
/// re-validation.
pub struct AutoFixer {
    config: ValidationConfig,
    matchers: LexiconMatchers,
}

impl AutoFixer {
    pub fn new(config: &ClinifactConfig) -> ClinifactResult<Self> {
        Ok(Self {
            config: config.validation.clone(),
            matchers: LexiconMatchers::compile(&config.lexicons)?,
        })
    }

    pub fn with_defaults() -> ClinifactResult<Self> {
        Self::new(&ClinifactConfig::default())
    }

    /// Attempt to fix `statements` against the issues raised for them.
    ///
    /// Operates on a deep copy; the input statements are never mutated.
    /// Issues whose category has no fixer, whose location does not parse,
    /// or whose fix falls below the confidence gate are silently left
    /// unresolved.
    pub fn auto_fix(
        &self,
        statements: &[GeneratedStatement],
        context: &EnrichedContext,
        issues: &[ValidationIssue],
    ) -> (Vec<GeneratedStatement>, Vec<FixRecord>) {
        let mut fixed = statements.to_vec();
        let mut log: Vec<FixRecord> = Vec::new();

        for issue in issues {
            let Some(index) = issue.statement_index() else {
                continue;
            };
            let Some(statement) = fixed.get_mut(index) else {
                continue;
            };

            let outcome = match issue.category {
                IssueCategory::Negation => fixers::negation::apply(
                    statement,
                    index,
                    context,
                    issue,
                    &self.config,
                    &self.matchers,
                ),
                IssueCategory::EntityCompleteness => {
                    fixers::entity::apply(statement, index, context, issue, &self.config)
                }
                IssueCategory::UnitAccuracy => fixers::unit::apply(
                    statement,
                    index,
                    context,
                    issue,
                    &self.config,
                    &self.matchers.lexicons,
                ),
                // Everything else needs a human or a redraft.
                _ => None,
            };

            match outcome {
                Some(record) => {
                    debug!(
                        statement = index,
                        fix = ?record.fix_type,
                        confidence = record.confidence.value(),
                        "fix applied"
                    );
                    log.push(record);
                }
                None => {
                    debug!(statement = index, category = %issue.category, "fix not applicable");
                }
            }
        }

        (fixed, log)
    }
}
