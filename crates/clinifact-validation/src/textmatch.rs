//! Pure text-matching helpers shared by the validators and the fixer.
//!
//! These are deliberate low-precision fallbacks, not language modeling:
//! each is a small, independently testable function with no state.

use std::collections::HashSet;

use clinifact_core::config::ComparatorPhrase;

/// Case-insensitive substring containment.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Byte range of the first case-insensitive occurrence of `needle` in
/// `haystack`, against the ORIGINAL string. Offsets from a lowercased
/// copy are unusable for slicing: some characters change byte length
/// when lowercased ('İ' is two bytes, its lowercase form three).
pub fn find_ci(haystack: &str, needle: &str) -> Option<(usize, usize)> {
    if needle.is_empty() {
        return None;
    }
    let wanted: Vec<char> = needle.chars().flat_map(char::to_lowercase).collect();

    for (start, _) in haystack.char_indices() {
        let mut matched = 0;
        let mut end = start;
        for c in haystack[start..].chars() {
            let mut diverged = false;
            for lc in c.to_lowercase() {
                if matched >= wanted.len() || wanted[matched] != lc {
                    diverged = true;
                    break;
                }
                matched += 1;
            }
            if diverged {
                break;
            }
            end += c.len_utf8();
            if matched == wanted.len() {
                return Some((start, end));
            }
        }
    }
    None
}

/// Lowercased tokens with surrounding punctuation trimmed.
pub fn tokens(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|t| {
            t.trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
        .filter(|t| !t.is_empty())
        .collect()
}

/// Fraction of `needle`'s whitespace tokens present anywhere in
/// `haystack`. Returns 0.0 for an empty needle.
pub fn fuzzy_token_coverage(needle: &str, haystack: &str) -> f64 {
    let needle_tokens = tokens(needle);
    if needle_tokens.is_empty() {
        return 0.0;
    }
    let haystack_tokens: HashSet<String> = tokens(haystack).into_iter().collect();
    let found = needle_tokens
        .iter()
        .filter(|t| haystack_tokens.contains(*t))
        .count();
    found as f64 / needle_tokens.len() as f64
}

/// Normalize text for cloze-candidate matching: lowercase, unify unicode
/// dashes, rewrite spelled-out comparators to symbols, drop whitespace
/// around comparator symbols, and collapse runs of whitespace.
pub fn normalize_cloze(text: &str, comparator_phrases: &[ComparatorPhrase]) -> String {
    let mut s = text.to_lowercase();

    for dash in ['\u{2010}', '\u{2011}', '\u{2012}', '\u{2013}', '\u{2014}', '\u{2212}'] {
        s = s.replace(dash, "-");
    }

    for cp in comparator_phrases {
        s = s.replace(&cp.phrase.to_lowercase(), &cp.symbol);
    }

    // "≤"/"≥" spell the same thresholds as their ASCII forms.
    s = s.replace('\u{2264}', "<=").replace('\u{2265}', ">=");

    let mut out = String::with_capacity(s.len());
    let mut pending_space = false;
    for part in s.split_whitespace() {
        let starts_cmp = part.starts_with(['<', '>', '=']);
        if pending_space && !starts_cmp {
            out.push(' ');
        }
        out.push_str(part);
        pending_space = !part.ends_with(['<', '>', '=']);
    }
    out
}

/// Simple morphological variants of a lowercased term: plural and basic
/// tense/participle forms plus their reversals.
pub fn morphological_variants(term: &str) -> Vec<String> {
    let mut variants = vec![term.to_string()];
    let push = |variants: &mut Vec<String>, v: String| {
        if v.len() >= 3 && !variants.contains(&v) {
            variants.push(v);
        }
    };

    // Inflect.
    push(&mut variants, format!("{term}s"));
    push(&mut variants, format!("{term}es"));
    push(&mut variants, format!("{term}ed"));
    push(&mut variants, format!("{term}ing"));
    if let Some(stem) = term.strip_suffix('y') {
        push(&mut variants, format!("{stem}ies"));
    }
    if let Some(stem) = term.strip_suffix('e') {
        push(&mut variants, format!("{stem}ing"));
        push(&mut variants, format!("{stem}ed"));
    }

    // Strip.
    for suffix in ["ies", "ing", "es", "ed", "s"] {
        if let Some(stem) = term.strip_suffix(suffix) {
            push(&mut variants, stem.to_string());
            if suffix == "ies" {
                push(&mut variants, format!("{stem}y"));
            }
            if suffix == "ing" || suffix == "ed" {
                push(&mut variants, format!("{stem}e"));
            }
        }
    }

    variants
}

/// Whether `term` or one of its morphological variants appears in the
/// token set.
pub fn matches_with_morphology(term: &str, token_set: &HashSet<String>) -> bool {
    morphological_variants(term)
        .iter()
        .any(|v| token_set.contains(v))
}

/// Count word-bounded, case-insensitive occurrences of `word` in `text`.
pub fn count_word(text: &str, word: &str) -> usize {
    let word = word.to_lowercase();
    tokens(text).iter().filter(|t| **t == word).count()
}
