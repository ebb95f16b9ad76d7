use super::tokenize::{term_frequencies, tokenize};

/// Cosine of the term-frequency vectors of `a` and `b`.
///
/// Token order does not matter, repeated tokens do. Either side empty
/// scores 0.0; no shared tokens score 0.0.
///
/// # Example
/// ```
/// use game_matcher::similarity::cosine_similarity;
///
/// assert_eq!(cosine_similarity("hello world", "world hello"), 1.0);
/// assert_eq!(cosine_similarity("", "x"), 0.0);
/// ```
pub fn cosine_similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }

    let tokens_a = tokenize(a);
    let tokens_b = tokenize(b);
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }

    let tf_a = term_frequencies(&tokens_a);
    let tf_b = term_frequencies(&tokens_b);

    let dot: usize = tf_a
        .iter()
        .filter_map(|(token, count_a)| tf_b.get(token).map(|count_b| count_a * count_b))
        .sum();
    if dot == 0 {
        return 0.0;
    }

    let norm_sq_a: usize = tf_a.values().map(|c| c * c).sum();
    let norm_sq_b: usize = tf_b.values().map(|c| c * c).sum();

    // sqrt of the product keeps identical multisets at exactly 1.0
    let denominator = (norm_sq_a as f64 * norm_sq_b as f64).sqrt();

    (dot as f64 / denominator).clamp(0.0, 1.0)
}
