use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a validation finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// Which check raised the issue. The auto-fixer routes on this tag, so
/// every validator must set it honestly rather than relying on message
/// wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCategory {
    Negation,
    EntityCompleteness,
    UnitAccuracy,
    Structure,
    Quality,
    Cloze,
    Ambiguity,
    Enumeration,
    Hallucination,
}

impl fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Self::Negation => "negation",
            Self::EntityCompleteness => "entity_completeness",
            Self::UnitAccuracy => "unit_accuracy",
            Self::Structure => "structure",
            Self::Quality => "quality",
            Self::Cloze => "cloze",
            Self::Ambiguity => "ambiguity",
            Self::Enumeration => "enumeration",
            Self::Hallucination => "hallucination",
        };
        f.write_str(tag)
    }
}

/// One finding from a validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub severity: Severity,
    pub category: IssueCategory,
    pub message: String,
    /// Which statement the issue concerns, e.g. "statement[2]".
    /// None for findings about the draft set as a whole.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl ValidationIssue {
    pub fn error(category: IssueCategory, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            category,
            message: message.into(),
            location: None,
        }
    }

    pub fn warning(category: IssueCategory, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            category,
            message: message.into(),
            location: None,
        }
    }

    pub fn info(category: IssueCategory, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            category,
            message: message.into(),
            location: None,
        }
    }

    /// Attach a `statement[i]` location.
    pub fn at_statement(mut self, index: usize) -> Self {
        self.location = Some(statement_location(index));
        self
    }

    /// The statement index this issue concerns, if its location parses.
    pub fn statement_index(&self) -> Option<usize> {
        parse_statement_index(self.location.as_deref()?)
    }
}

/// Render the canonical location string for statement `index`.
pub fn statement_location(index: usize) -> String {
    format!("statement[{index}]")
}

/// Parse a canonical `statement[i]` location back to an index.
pub fn parse_statement_index(location: &str) -> Option<usize> {
    let rest = location.strip_prefix("statement[")?;
    let digits = rest.strip_suffix(']')?;
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_round_trips() {
        for i in [0usize, 3, 17, 120] {
            assert_eq!(parse_statement_index(&statement_location(i)), Some(i));
        }
        assert_eq!(parse_statement_index("statement[]"), None);
        assert_eq!(parse_statement_index("statement[x]"), None);
        assert_eq!(parse_statement_index("card[2]"), None);
    }

    #[test]
    fn serde_severity_tags() {
        assert_eq!(
            serde_json::to_string(&Severity::Warning).unwrap(),
            "\"warning\""
        );
        assert_eq!(
            serde_json::to_string(&IssueCategory::EntityCompleteness).unwrap(),
            "\"entity_completeness\""
        );
    }
}
