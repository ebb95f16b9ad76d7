pub mod exact;
pub mod fuzzy;

use rayon::prelude::*;
use std::borrow::Cow;

use crate::config::FieldWeights;
use crate::core::{AlgorithmScores, Candidate, Field, MatchResult, MatchedFields};

pub use exact::ExactRanker;
pub use fuzzy::FuzzyRanker;

/// Candidate count from which scoring is spread across the rayon pool
pub const PARALLEL_CANDIDATE_MIN: usize = 256;

/// Trait for per-field scoring implementations
pub trait Ranker: Send + Sync {
    /// Turn a raw (already trimmed) query into the form `score_field` expects
    fn prepare_query(&self, query: &str) -> String;

    /// Score one field of a candidate against a prepared query.
    /// Returns `None` when the candidate has no content for `field`.
    fn score_field(&self, query: &str, candidate: &Candidate, field: Field)
        -> Option<AlgorithmScores>;

    /// Get ranker name for logging
    fn name(&self) -> &str;
}

/// Candidate position with its aggregate score
#[derive(Debug, Clone, PartialEq)]
pub struct RankedCandidate {
    /// Position in the candidate slice that was ranked
    pub index: usize,
    pub similarity: f64,
    pub scores: AlgorithmScores,
    pub matched_fields: MatchedFields,
    pub best_field: Field,
}

impl RankedCandidate {
    /// Attach a copy of the candidate this score belongs to
    pub fn into_match(self, candidates: &[Candidate]) -> MatchResult {
        MatchResult {
            game: candidates[self.index].clone(),
            similarity: self.similarity,
            scores: self.scores,
            matched_fields: self.matched_fields,
            best_field: self.best_field,
        }
    }
}

/// Lower-case `text` unless matching is case sensitive
pub(crate) fn fold_case(text: Cow<'_, str>, case_sensitive: bool) -> Cow<'_, str> {
    if case_sensitive {
        text
    } else {
        Cow::Owned(text.to_lowercase())
    }
}

/// Aggregate one candidate's field scores.
///
/// Field weights are renormalized over the fields the candidate actually
/// has, so a game without tags is not dragged down by an implicit zero.
/// A candidate with no scorable field at all scores 0.0.
pub fn score_candidate(
    ranker: &dyn Ranker,
    weights: &FieldWeights,
    query: &str,
    index: usize,
    candidate: &Candidate,
) -> RankedCandidate {
    let mut matched_fields = MatchedFields::default();
    let mut weighted_sum = 0.0;
    let mut weight_total = 0.0;
    let mut best: Option<(Field, AlgorithmScores)> = None;

    for field in Field::ALL {
        let Some(scores) = ranker.score_field(query, candidate, field) else {
            continue;
        };

        let weight = weights.get(field);
        weighted_sum += weight * scores.normalized;
        weight_total += weight;

        match field {
            Field::Title => matched_fields.title = scores.normalized,
            Field::Description => matched_fields.description = Some(scores.normalized),
            Field::Tags => matched_fields.tags = Some(scores.normalized),
        }

        // Strictly greater: ties stay with the earlier field
        if best.map_or(true, |(_, current)| scores.normalized > current.normalized) {
            best = Some((field, scores));
        }
    }

    let similarity = if weight_total > 0.0 {
        (weighted_sum / weight_total).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let (best_field, scores) = best.unwrap_or((Field::Title, AlgorithmScores::default()));

    tracing::trace!(
        "{} -> {:.4} (best field: {})",
        candidate.display_name(),
        similarity,
        best_field
    );

    RankedCandidate {
        index,
        similarity,
        scores,
        matched_fields,
        best_field,
    }
}

/// Score every candidate and sort by similarity, highest first.
/// Equal scores keep their input order.
pub fn rank(
    ranker: &dyn Ranker,
    weights: &FieldWeights,
    query: &str,
    candidates: &[Candidate],
) -> Vec<RankedCandidate> {
    let mut ranked: Vec<RankedCandidate> = if candidates.len() >= PARALLEL_CANDIDATE_MIN {
        candidates
            .par_iter()
            .enumerate()
            .map(|(index, candidate)| score_candidate(ranker, weights, query, index, candidate))
            .collect()
    } else {
        candidates
            .iter()
            .enumerate()
            .map(|(index, candidate)| score_candidate(ranker, weights, query, index, candidate))
            .collect()
    };

    // sort_by is stable
    ranked.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));

    ranked
}
