use crate::config::{AlgorithmWeights, MatchingConfig};
use crate::core::{AlgorithmScores, Candidate, Field};
use crate::ranking::{fold_case, Ranker};
use crate::similarity::{cosine_similarity, jaccard_similarity, levenshtein_similarity};

/// Weighted blend of Levenshtein, cosine and Jaccard similarity
pub struct FuzzyRanker {
    algorithm_weights: AlgorithmWeights,
    case_sensitive: bool,
}

impl FuzzyRanker {
    pub fn new(algorithm_weights: AlgorithmWeights, case_sensitive: bool) -> Self {
        Self {
            algorithm_weights,
            case_sensitive,
        }
    }

    pub fn from_config(config: &MatchingConfig) -> Self {
        Self::new(config.algorithm_weights, config.case_sensitive)
    }

    /// All three metrics plus their blend, on text that is already folded
    pub fn score_text(&self, query: &str, text: &str) -> AlgorithmScores {
        let levenshtein = levenshtein_similarity(query, text);
        let cosine = cosine_similarity(query, text);
        let jaccard = jaccard_similarity(query, text);

        AlgorithmScores {
            levenshtein,
            cosine,
            jaccard,
            normalized: self
                .algorithm_weights
                .blend(levenshtein, cosine, jaccard)
                .clamp(0.0, 1.0),
        }
    }
}

impl Default for FuzzyRanker {
    fn default() -> Self {
        Self::from_config(&MatchingConfig::default())
    }
}

impl Ranker for FuzzyRanker {
    fn prepare_query(&self, query: &str) -> String {
        fold_case(query.trim().into(), self.case_sensitive).into_owned()
    }

    fn score_field(
        &self,
        query: &str,
        candidate: &Candidate,
        field: Field,
    ) -> Option<AlgorithmScores> {
        let text = fold_case(candidate.field_text(field)?, self.case_sensitive);
        Some(self.score_text(query, &text))
    }

    fn name(&self) -> &str {
        "fuzzy"
    }
}
