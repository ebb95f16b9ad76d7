use std::collections::HashSet;

use super::tokenize::tokenize;

/// Jaccard index of the token sets of `a` and `b`: `|A ∩ B| / |A ∪ B|`.
///
/// Duplicates are ignored. Two empty token sets are identical (1.0), so
/// `""` against `"   "` or `"!!!"` scores 1.0; one empty set against a
/// non-empty one scores 0.0.
///
/// # Example
/// ```
/// use game_matcher::similarity::jaccard_similarity;
///
/// assert_eq!(jaccard_similarity("", ""), 1.0);
/// assert_eq!(jaccard_similarity("super mario", "mario super"), 1.0);
/// ```
pub fn jaccard_similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }

    let tokens_a = tokenize(a);
    let tokens_b = tokenize(b);
    let set_a: HashSet<&str> = tokens_a.iter().map(String::as_str).collect();
    let set_b: HashSet<&str> = tokens_b.iter().map(String::as_str).collect();

    match (set_a.is_empty(), set_b.is_empty()) {
        (true, true) => return 1.0,
        (true, false) | (false, true) => return 0.0,
        (false, false) => {}
    }

    let intersection = set_a.intersection(&set_b).count();
    let union = set_a.len() + set_b.len() - intersection;

    intersection as f64 / union as f64
}
