use rapidfuzz::distance::levenshtein;

/// Number of single-character insertions, deletions and substitutions
/// needed to turn `a` into `b`. Counted over chars, not bytes.
///
/// # Example
/// ```
/// use game_matcher::similarity::levenshtein_distance;
///
/// assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
/// ```
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    levenshtein::distance(a.chars(), b.chars())
}

/// Normalized edit similarity: `1 - distance / max(len(a), len(b))`.
///
/// Equal strings (both empty included) score 1.0. An empty string against
/// a non-empty one scores 0.0.
///
/// # Example
/// ```
/// use game_matcher::similarity::levenshtein_similarity;
///
/// assert_eq!(levenshtein_similarity("tetris", "tetris"), 1.0);
/// assert_eq!(levenshtein_similarity("", "tetris"), 0.0);
/// ```
pub fn levenshtein_similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }

    let len_a = a.chars().count();
    let len_b = b.chars().count();
    if len_a == 0 || len_b == 0 {
        return 0.0;
    }

    let max_len = len_a.max(len_b);
    let distance = levenshtein_distance(a, b);

    (1.0 - distance as f64 / max_len as f64).clamp(0.0, 1.0)
}
