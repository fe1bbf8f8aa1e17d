//! Structural checks on the draft record itself.

use clinifact_core::{GeneratedStatement, IssueCategory, ValidationIssue};

/// Required-field checks. An empty statement is an error; an empty cloze
/// sequence is a warning (the statement is untestable as drafted); an
/// empty-but-present context field is informational noise.
pub fn check(index: usize, stmt: &GeneratedStatement) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if stmt.statement.trim().is_empty() {
        issues.push(
            ValidationIssue::error(IssueCategory::Structure, "Statement text is empty")
                .at_statement(index),
        );
    }

    if let Some(ctx) = &stmt.context {
        if ctx.trim().is_empty() {
            issues.push(
                ValidationIssue::info(
                    IssueCategory::Structure,
                    "Context field is present but empty",
                )
                .at_statement(index),
            );
        }
    }

    if stmt.cloze_candidates.is_empty() {
        issues.push(
            ValidationIssue::warning(
                IssueCategory::Structure,
                "No cloze candidates provided",
            )
            .at_statement(index),
        );
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinifact_core::Severity;

    #[test]
    fn well_formed_statement_is_clean() {
        let stmt = GeneratedStatement::new("Metformin treats type 2 diabetes.")
            .with_candidates(["Metformin", "type 2 diabetes"]);
        assert!(check(0, &stmt).is_empty());
    }

    #[test]
    fn empty_statement_is_an_error() {
        let stmt = GeneratedStatement::new("   ");
        let issues = check(0, &stmt);
        assert!(issues
            .iter()
            .any(|i| i.severity == Severity::Error && i.message.contains("empty")));
    }

    #[test]
    fn missing_candidates_are_a_warning() {
        let stmt = GeneratedStatement::new("Metformin treats type 2 diabetes.");
        let issues = check(3, &stmt);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert_eq!(issues[0].statement_index(), Some(3));
    }

    #[test]
    fn empty_context_is_informational() {
        let mut stmt = GeneratedStatement::new("Metformin treats type 2 diabetes.")
            .with_candidates(["Metformin"]);
        stmt.context = Some(String::new());
        let issues = check(0, &stmt);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Info);
    }
}
