pub mod batch;
pub mod candidate;
pub mod match_result;

pub use batch::{BatchMatches, QueryMatches};
pub use candidate::Candidate;
pub use match_result::{AlgorithmScores, Field, MatchResult, MatchedFields};
