//! Lexicon patterns compiled once per engine.
//!
//! The lexicons live in [`LexiconConfig`] as plain word lists; this module
//! turns each list into a single case-insensitive, word-bounded regex so
//! the validators can scan statements in one pass per lexicon.

use clinifact_core::{ClinifactError, ClinifactResult, LexiconConfig};
use regex::Regex;

/// Compiled form of every phrase lexicon the validators scan with.
#[derive(Debug)]
pub struct LexiconMatchers {
    pub affirmative: Regex,
    pub negation: Regex,
    pub vague_qualifiers: Regex,
    pub patient_phrases: Regex,
    pub source_references: Regex,
    pub trivia_patterns: Regex,
    pub clinical_terms: Regex,
    pub drug_context: Regex,
    pub drug_clarity: Regex,
    pub shared_adverse: Regex,
    pub organism_context: Regex,
    pub procedure_terms: Regex,
    pub procedure_context: Regex,
    pub list_indicators: Regex,
    pub coverage_phrases: Regex,
    /// The raw lexicon lists, for checks that are not phrase scans
    /// (suffixes, unit synonyms, stopwords, whitelists).
    pub lexicons: LexiconConfig,
}

impl LexiconMatchers {
    /// Compile all lexicons. Fails only if a configured phrase produces an
    /// unusable pattern, which the default lexicons never do.
    pub fn compile(lexicons: &LexiconConfig) -> ClinifactResult<Self> {
        Ok(Self {
            affirmative: phrase_set("affirmative_patterns", &lexicons.affirmative_patterns)?,
            negation: phrase_set("negation_patterns", &lexicons.negation_patterns)?,
            vague_qualifiers: phrase_set("vague_qualifiers", &lexicons.vague_qualifiers)?,
            patient_phrases: phrase_set("patient_phrases", &lexicons.patient_phrases)?,
            source_references: phrase_set(
                "source_reference_phrases",
                &lexicons.source_reference_phrases,
            )?,
            trivia_patterns: phrase_set("trivia_patterns", &lexicons.trivia_patterns)?,
            clinical_terms: phrase_set("clinical_terms", &lexicons.clinical_terms)?,
            drug_context: phrase_set("drug_context_words", &lexicons.drug_context_words)?,
            drug_clarity: phrase_set("drug_clarity_phrases", &lexicons.drug_clarity_phrases)?,
            shared_adverse: phrase_set("shared_adverse_terms", &lexicons.shared_adverse_terms)?,
            organism_context: phrase_set(
                "organism_context_phrases",
                &lexicons.organism_context_phrases,
            )?,
            procedure_terms: phrase_set("procedure_terms", &lexicons.procedure_terms)?,
            procedure_context: phrase_set(
                "procedure_context_phrases",
                &lexicons.procedure_context_phrases,
            )?,
            list_indicators: phrase_set("list_indicators", &lexicons.list_indicators)?,
            coverage_phrases: phrase_set("coverage_phrases", &lexicons.coverage_phrases)?,
            lexicons: lexicons.clone(),
        })
    }
}

/// Build `(?i)\b(?:p1|p2|…)\b` from a phrase list, longest phrase first so
/// multi-word entries win over their prefixes.
fn phrase_set(name: &str, phrases: &[String]) -> ClinifactResult<Regex> {
    if phrases.is_empty() {
        return Err(ClinifactError::LexiconPattern {
            lexicon: name.to_string(),
            message: "empty lexicon".to_string(),
        });
    }

    let mut sorted: Vec<&String> = phrases.iter().collect();
    sorted.sort_by_key(|p| std::cmp::Reverse(p.len()));

    let alternation = sorted
        .iter()
        .map(|p| regex::escape(p))
        .collect::<Vec<_>>()
        .join("|");

    Regex::new(&format!(r"(?i)\b(?:{alternation})\b")).map_err(|e| {
        ClinifactError::LexiconPattern {
            lexicon: name.to_string(),
            message: e.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_lexicons_compile() {
        let m = LexiconMatchers::compile(&LexiconConfig::default()).unwrap();
        assert!(m.negation.is_match("there is NO evidence of disease"));
        assert!(m.affirmative.is_match("the patient has diabetes"));
        assert!(!m.negation.is_match("normal findings throughout"));
    }

    #[test]
    fn multi_word_phrases_match_as_units() {
        let m = LexiconMatchers::compile(&LexiconConfig::default()).unwrap();
        assert!(m.negation.is_match("finding was ruled out on imaging"));
        assert!(m.list_indicators.is_match("complications consist of bleeding"));
    }

    #[test]
    fn word_boundaries_prevent_partial_hits() {
        let m = LexiconMatchers::compile(&LexiconConfig::default()).unwrap();
        // "notable" must not hit the "no"/"not" patterns.
        assert!(!m.negation.is_match("notable improvement"));
    }

    #[test]
    fn empty_lexicon_is_rejected() {
        let mut lex = LexiconConfig::default();
        lex.trivia_patterns.clear();
        assert!(LexiconMatchers::compile(&lex).is_err());
    }
}
