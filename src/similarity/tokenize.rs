use std::collections::HashMap;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Split text into comparison tokens.
///
/// Text is NFC-normalized, split on Unicode whitespace, and each piece is
/// stripped of surrounding punctuation. `+` and `#` survive so that titles
/// like "C++" or "F#" keep their identity. Scripts written without spaces
/// (Chinese, Japanese) stay whole: "塞尔达传说" is a single token.
///
/// # Example
/// ```
/// use game_matcher::similarity::tokenize;
///
/// assert_eq!(tokenize("Super Mario Bros."), vec!["Super", "Mario", "Bros"]);
/// assert_eq!(tokenize("  "), Vec::<String>::new());
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized: String = text.nfc().collect();

    normalized
        .split_whitespace()
        .map(|piece| piece.trim_matches(|c: char| !is_token_char(c)))
        .filter(|piece| !piece.is_empty())
        .map(str::to_owned)
        .collect()
}

#[inline]
fn is_token_char(c: char) -> bool {
    c.is_alphanumeric() || is_combining_mark(c) || matches!(c, '+' | '#')
}

/// Count occurrences of each token.
pub(crate) fn term_frequencies(tokens: &[String]) -> HashMap<&str, usize> {
    let mut counts = HashMap::with_capacity(tokens.len());
    for token in tokens {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }
    counts
}
