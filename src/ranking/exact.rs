use crate::config::MatchingConfig;
use crate::core::{AlgorithmScores, Candidate, Field};
use crate::ranking::{fold_case, Ranker};

/// Exact-match ranker, used when fuzzy matching is turned off.
///
/// A field scores 1.0 when its text equals the query after case folding
/// (unless case sensitive) and whitespace collapsing, otherwise 0.0. Tags
/// are compared one by one: any single equal tag is a hit. Every algorithm
/// score of a field carries that same 0/1 value.
pub struct ExactRanker {
    case_sensitive: bool,
}

impl ExactRanker {
    pub fn new(case_sensitive: bool) -> Self {
        Self { case_sensitive }
    }

    pub fn from_config(config: &MatchingConfig) -> Self {
        Self::new(config.case_sensitive)
    }

    fn normalize(&self, text: &str) -> String {
        let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
        fold_case(collapsed.into(), self.case_sensitive).into_owned()
    }

    fn is_hit(&self, query: &str, candidate: &Candidate, field: Field) -> Option<bool> {
        match field {
            Field::Tags => {
                candidate.tags_text()?;
                Some(candidate.tags.iter().any(|tag| self.normalize(tag) == query))
            }
            _ => candidate
                .field_text(field)
                .map(|text| self.normalize(&text) == query),
        }
    }
}

impl Ranker for ExactRanker {
    fn prepare_query(&self, query: &str) -> String {
        self.normalize(query)
    }

    fn score_field(
        &self,
        query: &str,
        candidate: &Candidate,
        field: Field,
    ) -> Option<AlgorithmScores> {
        let score = if self.is_hit(query, candidate, field)? {
            1.0
        } else {
            0.0
        };

        Some(AlgorithmScores {
            levenshtein: score,
            cosine: score,
            jaccard: score,
            normalized: score,
        })
    }

    fn name(&self) -> &str {
        "exact"
    }
}
