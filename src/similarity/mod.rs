//! String similarity metrics.
//!
//! Every metric returns a score in `[0.0, 1.0]` and accepts empty input.
//! None of them case-fold: callers decide whether `"Mario"` and `"mario"`
//! are the same string.
//!
//! - [`levenshtein_similarity`]: character edits, good for typos
//! - [`cosine_similarity`]: term-frequency vectors, order independent
//! - [`jaccard_similarity`]: token-set overlap

pub mod cosine;
pub mod jaccard;
pub mod levenshtein;
pub mod tokenize;

pub use cosine::cosine_similarity;
pub use jaccard::jaccard_similarity;
pub use levenshtein::{levenshtein_distance, levenshtein_similarity};
pub use tokenize::tokenize;
