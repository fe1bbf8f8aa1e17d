use serde::{Deserialize, Serialize};

/// A spelled-out comparator phrase and the symbol it normalizes to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparatorPhrase {
    pub phrase: String,
    pub symbol: String,
}

/// Every word list the validators match against.
///
/// The shipped defaults are heuristic, not exhaustive; treat them as a
/// starting point and extend from TOML where the product demands it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    /// Phrases that assert a finding positively.
    pub affirmative_patterns: Vec<String>,
    /// Phrases that negate a finding.
    pub negation_patterns: Vec<String>,
    /// Hedging qualifiers that weaken a testable statement.
    pub vague_qualifiers: Vec<String>,
    /// Phrases tying a statement to one particular patient.
    pub patient_phrases: Vec<String>,
    /// Phrases referring back to the source material.
    pub source_reference_phrases: Vec<String>,
    /// Patterns typical of non-clinical trivia.
    pub trivia_patterns: Vec<String>,
    /// Clinical terms whose presence rescues a trivia-looking statement.
    pub clinical_terms: Vec<String>,
    /// Generic drug-name suffixes for the medication fallback detector.
    pub medication_suffixes: Vec<String>,
    /// Words that, near a capitalized token, suggest a drug mention.
    pub drug_context_words: Vec<String>,
    /// Mechanism / class / indication phrases that disambiguate a drug.
    pub drug_clarity_phrases: Vec<String>,
    /// Adverse effects shared by many drugs; an unqualified drug mention
    /// next to one of these is ambiguous.
    pub shared_adverse_terms: Vec<String>,
    /// Phrases that anchor an organism mention clinically.
    pub organism_context_phrases: Vec<String>,
    /// Capitalized two-word strings that are not organisms.
    pub organism_denylist: Vec<String>,
    /// Procedure names for the fallback detector.
    pub procedure_terms: Vec<String>,
    /// Indication / timing phrases that anchor a procedure mention.
    pub procedure_context_phrases: Vec<String>,
    /// Phrases that introduce a list.
    pub list_indicators: Vec<String>,
    /// Phrases claiming comprehensive coverage.
    pub coverage_phrases: Vec<String>,
    /// Stopwords excluded from content-term extraction and flagged as
    /// trivial cloze candidates.
    pub stopwords: Vec<String>,
    /// Single letters acceptable as cloze candidates (units).
    pub unit_letter_whitelist: Vec<String>,
    /// Two-letter medical abbreviations acceptable as cloze candidates.
    pub medical_abbreviations: Vec<String>,
    /// Groups of mutually equivalent unit spellings.
    pub unit_synonym_groups: Vec<Vec<String>>,
    /// Suffixes marking a token as a medical content term.
    pub medical_suffixes: Vec<String>,
    /// Comparator phrases normalized during cloze matching, checked in
    /// order; keep longer phrases first.
    pub comparator_phrases: Vec<ComparatorPhrase>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            affirmative_patterns: strings(&[
                "has",
                "have",
                "shows",
                "demonstrates",
                "presents with",
                "positive for",
                "positive",
                "confirmed",
                "exhibits",
                "reveals",
                "indicates",
                "is present",
            ]),
            negation_patterns: strings(&[
                "no",
                "not",
                "without",
                "never",
                "cannot",
                "denies",
                "absent",
                "absence of",
                "negative",
                "negative for",
                "doesn't",
                "does not",
                "lacks",
                "lack of",
                "free of",
                "ruled out",
                "excluded",
            ]),
            vague_qualifiers: strings(&[
                "often",
                "usually",
                "may",
                "might",
                "sometimes",
                "generally",
                "typically",
                "frequently",
                "occasionally",
                "possibly",
                "in some cases",
            ]),
            patient_phrases: strings(&[
                "this patient",
                "the patient",
                "she",
                "he",
                "her",
                "his",
                "this case",
                "the case described",
                "this man",
                "this woman",
            ]),
            source_reference_phrases: strings(&[
                "this critique",
                "the critique",
                "this question",
                "the question",
                "the vignette",
                "this vignette",
                "based on this question",
                "as mentioned above",
                "the passage",
                "as described",
            ]),
            trivia_patterns: strings(&[
                "is located in",
                "is also known as",
                "was discovered",
                "is named after",
                "is derived from",
                "was first described",
            ]),
            clinical_terms: strings(&[
                "treatment",
                "diagnosis",
                "symptom",
                "therapy",
                "dose",
                "risk",
                "prognosis",
                "management",
                "infection",
                "disease",
                "syndrome",
                "deficiency",
                "toxicity",
            ]),
            medication_suffixes: strings(&[
                "mab", "nib", "pril", "sartan", "olol", "statin", "mycin", "cillin", "azole",
                "prazole", "dipine", "floxacin", "tidine", "gliptin", "vir",
            ]),
            drug_context_words: strings(&[
                "dose",
                "dosing",
                "therapy",
                "treatment",
                "administered",
                "prescribed",
                "drug",
                "agent",
                "medication",
                "regimen",
            ]),
            drug_clarity_phrases: strings(&[
                "inhibitor",
                "agonist",
                "antagonist",
                "blocker",
                "mechanism",
                "class",
                "used for",
                "used to treat",
                "indicated for",
                "treats",
                "first-line",
                "receptor",
            ]),
            shared_adverse_terms: strings(&[
                "qt prolongation",
                "hepatotoxicity",
                "nephrotoxicity",
                "ototoxicity",
                "agranulocytosis",
                "rash",
                "nausea",
                "headache",
                "dizziness",
                "hyperkalemia",
                "bleeding",
                "myopathy",
            ]),
            organism_context_phrases: strings(&[
                "most common",
                "typical",
                "endemic",
                "associated with",
                "caused by",
                "causative",
                "transmitted by",
                "reservoir",
                "gram-positive",
                "gram-negative",
            ]),
            organism_denylist: strings(&[
                "Barrett esophagus",
                "Crohn disease",
                "Down syndrome",
                "Alzheimer disease",
                "Parkinson disease",
                "Hodgkin lymphoma",
                "Graves disease",
                "Cushing syndrome",
                "Gram stain",
                "Lyme disease",
            ]),
            procedure_terms: strings(&[
                "endoscopy",
                "colonoscopy",
                "biopsy",
                "ct scan",
                "mri",
                "ultrasound",
                "radiograph",
                "x-ray",
                "echocardiogram",
                "catheterization",
                "intubation",
                "dialysis",
                "lumbar puncture",
                "paracentesis",
                "thoracentesis",
                "appendectomy",
                "cholecystectomy",
            ]),
            procedure_context_phrases: strings(&[
                "indicated for",
                "indicated when",
                "within",
                "first-line for",
                "performed to",
                "used to evaluate",
                "gold standard",
                "contraindicated",
                "prior to",
                "confirmatory",
            ]),
            list_indicators: strings(&[
                "include",
                "includes",
                "including",
                "consist of",
                "consists of",
                "such as",
                "are as follows",
                "comprise",
            ]),
            coverage_phrases: strings(&[
                "all of the",
                "every",
                "complete list",
                "comprehensive",
                "all causes",
                "all types",
            ]),
            stopwords: strings(&[
                "the", "a", "an", "and", "or", "but", "of", "in", "on", "at", "to", "for", "with",
                "by", "from", "as", "is", "are", "was", "were", "be", "been", "being", "that",
                "this", "these", "those", "it", "its", "which", "who", "whom", "what", "when",
                "where", "than", "then", "can", "will", "not", "no", "has", "have", "had", "into",
                "about", "between", "after", "before", "during", "most", "more", "other", "such",
                "also", "may", "should", "would", "could",
            ]),
            unit_letter_whitelist: strings(&["g", "l", "u"]),
            medical_abbreviations: strings(&[
                "bp", "hr", "rr", "ct", "mi", "hf", "dm", "tb", "ms", "ra", "pe", "uc", "gi",
                "iv", "im", "po",
            ]),
            unit_synonym_groups: vec![
                strings(&["mg/dl", "mg per deciliter", "mg/deciliter", "mg/100 ml"]),
                strings(&["meq/l", "meq per liter", "meq/liter"]),
                strings(&["mmol/l", "mmol per liter"]),
                strings(&["mcg", "\u{b5}g", "ug", "microgram", "micrograms"]),
                strings(&["mg", "milligram", "milligrams"]),
                strings(&["ml", "milliliter", "milliliters", "cc"]),
                strings(&["mmhg", "mm hg"]),
                strings(&["bpm", "beats per minute", "beats/min"]),
                strings(&["cells/mm3", "cells per cubic millimeter", "/mm3"]),
            ],
            medical_suffixes: strings(&[
                "itis", "osis", "emia", "oma", "pathy", "ectomy", "otomy", "plasty", "scopy",
                "lysis", "trophy", "plegia", "algia", "penia",
            ]),
            comparator_phrases: vec![
                ComparatorPhrase {
                    phrase: "greater than or equal to".into(),
                    symbol: ">=".into(),
                },
                ComparatorPhrase {
                    phrase: "less than or equal to".into(),
                    symbol: "<=".into(),
                },
                ComparatorPhrase {
                    phrase: "greater than".into(),
                    symbol: ">".into(),
                },
                ComparatorPhrase {
                    phrase: "less than".into(),
                    symbol: "<".into(),
                },
                ComparatorPhrase {
                    phrase: "at least".into(),
                    symbol: ">=".into(),
                },
                ComparatorPhrase {
                    phrase: "at most".into(),
                    symbol: "<=".into(),
                },
                ComparatorPhrase {
                    phrase: "equal to".into(),
                    symbol: "=".into(),
                },
            ],
        }
    }
}

impl LexiconConfig {
    /// Whether two unit spellings are equivalent under the synonym groups.
    /// Comparison is case-insensitive; identical spellings always match.
    pub fn units_equivalent(&self, a: &str, b: &str) -> bool {
        let a = a.trim().to_lowercase();
        let b = b.trim().to_lowercase();
        if a == b {
            return true;
        }
        self.unit_synonym_groups.iter().any(|group| {
            let has_a = group.iter().any(|u| u.to_lowercase() == a);
            let has_b = group.iter().any(|u| u.to_lowercase() == b);
            has_a && has_b
        })
    }

    pub fn is_stopword(&self, token: &str) -> bool {
        let token = token.to_lowercase();
        self.stopwords.iter().any(|w| *w == token)
    }
}
