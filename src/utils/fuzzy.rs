//! Fuzzy matching utilities for search
//!
//! Accent-insensitive name normalization and the one-edit matcher used
//! to decide whether a search query refers to a roll number or a name.

use strsim::normalized_levenshtein;
use unicode_normalization::UnicodeNormalization;

/// Result of a fuzzy match with the matched value and score
#[derive(Debug, Clone, PartialEq)]
pub struct FuzzyMatch {
    pub value: String,
    pub score: f64,
}

/// Combining Diacritical Marks block (U+0300..=U+036F)
fn is_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

/// Normalize a name for comparison
///
/// Decomposes to NFD, drops combining diacritics and lowercases the rest,
/// so `"José"` and `"JOSE"` both become `"jose"`.
pub fn normalize_name(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_diacritic(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Check whether two strings are equal up to a single edit
///
/// Both sides are normalized first. After the length gate, a single
/// left-to-right scan walks both strings; the cursor that skips on a
/// mismatch is chosen once from the overall lengths (longer side skips,
/// equal lengths substitute) and never re-evaluated.
pub fn is_fuzzy_match(a: &str, b: &str) -> bool {
    let a: Vec<char> = normalize_name(a).chars().collect();
    let b: Vec<char> = normalize_name(b).chars().collect();

    if a == b {
        return true;
    }

    if a.len().abs_diff(b.len()) > 1 {
        return false;
    }

    let (mut i, mut j, mut edits) = (0usize, 0usize, 0u32);
    while i < a.len() && j < b.len() {
        if a[i] == b[j] {
            i += 1;
            j += 1;
            continue;
        }

        edits += 1;
        if edits > 1 {
            return false;
        }

        if a.len() > b.len() {
            i += 1;
        } else if a.len() < b.len() {
            j += 1;
        } else {
            i += 1;
            j += 1;
        }
    }

    true
}

/// Calculate similarity score between two strings after normalization
pub fn similarity(a: &str, b: &str) -> f64 {
    normalized_levenshtein(&normalize_name(a), &normalize_name(b))
}

/// Find the best candidate for a search term
///
/// Returns None if no candidate scores at least `cutoff`. On equal scores
/// the earlier candidate wins.
pub fn find_best_match<S: AsRef<str>>(
    search_term: &str,
    candidates: &[S],
    cutoff: f64,
) -> Option<FuzzyMatch> {
    candidates
        .iter()
        .map(|candidate| FuzzyMatch {
            value: candidate.as_ref().to_string(),
            score: similarity(search_term, candidate.as_ref()),
        })
        .filter(|m| m.score >= cutoff)
        .fold(None, |best: Option<FuzzyMatch>, m| match best {
            Some(b) if b.score >= m.score => Some(b),
            _ => Some(m),
        })
}
