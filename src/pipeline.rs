//! Text preparation: sanitize, then tokenize.
//!
//! Both functions are pure and total, and both run identically at index
//! time and at query time — matching is only meaningful because the two
//! sides agree on how text becomes tokens.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Default sanitizer: case-fold to lower case.
///
/// Case-insensitive matching is the baseline guarantee. No trimming, no
/// whitespace handling — the tokenizer owns segmentation.
pub fn default_sanitize(text: &str) -> String {
    text.to_lowercase()
}

/// Default tokenizer: split on runs of non-alphanumeric characters,
/// discarding empty segments.
///
/// "Alphanumeric" means the Unicode letter and number classes, so scripts
/// without ASCII word boundaries (CJK among them) tokenize as contiguous
/// runs of ideographs rather than being dropped.
pub fn default_tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|segment| !segment.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Normalize a string for search: lowercase, strip diacritics, and collapse
/// whitespace.
///
/// Not the default sanitizer — the baseline guarantee is case
/// insensitivity only — but a drop-in replacement for callers who want
/// ASCII queries to match accented text:
/// - "café" → "cafe"
/// - "naïve" → "naive"
///
/// # Algorithm (with unicode-normalization feature)
///
/// 1. NFD normalize (decompose characters into base + combining marks)
/// 2. Filter out combining marks (category Mn = Mark, Nonspacing)
/// 3. Lowercase
/// 4. Collapse whitespace
///
/// # Algorithm (without unicode-normalization)
///
/// 1. Lowercase only (assumes input is pre-normalized or ASCII)
/// 2. Collapse whitespace
#[cfg(feature = "unicode-normalization")]
pub fn normalize(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lightweight normalization fallback (no unicode-normalization dependency).
/// Just lowercases and collapses whitespace.
#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Check if a character is a combining mark (diacritic).
///
/// Combining marks have Unicode category "Mn" (Mark, Nonspacing).
/// Examples: ́ (acute), ̄ (macron), ̣ (dot below)
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    // Unicode category Mn (Mark, Nonspacing) range
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{0C00}'..='\u{0C7F}' |  // Telugu (some combining marks)
        '\u{0900}'..='\u{097F}' |  // Devanagari (some combining marks)
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}
