//! # Game Matcher
//!
//! Fuzzy matching of free-text queries against game records:
//! - Three similarity metrics (Levenshtein, term-frequency cosine, token Jaccard)
//! - Per-algorithm and per-field weighting, renormalized over present fields
//! - Threshold filtering, stable ranking, result caps
//! - Batched multi-query matching, parallel with rayon
//!
//! The engine is pure: it never mutates candidates and keeps no state
//! between calls.
//!
//! ## Example Usage
//!
//! ```rust
//! use game_matcher::{match_games, Candidate, ConfigOverride};
//!
//! fn main() -> game_matcher::Result<()> {
//!     let games = vec![
//!         Candidate::new("1", "Super Mario Bros").with_tags(["platformer"]),
//!         Candidate::new("2", "Super Mario World"),
//!         Candidate::new("3", "Tetris"),
//!     ];
//!
//!     let config = ConfigOverride::new().with_max_results(5);
//!     let matches = match_games("mario", &games, Some(&config))?;
//!
//!     for m in &matches {
//!         println!("{} - {:.0}%", m.game.title, m.similarity * 100.0);
//!     }
//!     assert_eq!(matches.len(), 2);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod ranking;
pub mod similarity;

// Re-export primary types
pub use config::{
    get_default_config, validate_config, AlgorithmWeights, ConfigOverride, FieldWeights,
    MatchingConfig,
};
pub use crate::core::{
    AlgorithmScores, BatchMatches, Candidate, Field, MatchResult, MatchedFields, QueryMatches,
};
pub use engine::{batch_match_games, match_games, MatchingEngine};
pub use error::{ConfigError, MatchError, Result};
pub use similarity::{cosine_similarity, jaccard_similarity, levenshtein_similarity};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
