use rayon::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

use crate::config::{get_default_config, ConfigOverride, MatchingConfig};
use crate::core::{BatchMatches, Candidate, MatchResult, QueryMatches};
use crate::error::Result;
use crate::ranking::{self, ExactRanker, FuzzyRanker, Ranker};

/// Stateless matching service bound to one validated configuration.
///
/// Holds no mutable state: share it freely across threads.
pub struct MatchingEngine {
    config: MatchingConfig,
    ranker: Arc<dyn Ranker>,
}

impl MatchingEngine {
    /// Create an engine, rejecting configurations that fail validation
    pub fn new(config: MatchingConfig) -> Result<Self> {
        if let Err(e) = config.validate() {
            tracing::warn!("Rejected matching config ({}): {}", config, e);
            return Err(e.into());
        }

        Ok(Self::build(config))
    }

    /// Create an engine from the defaults with `config_override` applied
    pub fn with_override(config_override: &ConfigOverride) -> Result<Self> {
        Self::new(config_override.apply_to(&get_default_config()))
    }

    fn build(config: MatchingConfig) -> Self {
        let ranker: Arc<dyn Ranker> = if config.fuzzy_match {
            Arc::new(FuzzyRanker::from_config(&config))
        } else {
            Arc::new(ExactRanker::from_config(&config))
        };

        Self { config, ranker }
    }

    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    /// Name of the ranker in use (fuzzy, exact)
    pub fn ranker_name(&self) -> &str {
        self.ranker.name()
    }

    /// Rank `candidates` against `query`.
    ///
    /// Returns matches at or above the threshold, best first, at most
    /// `max_results` of them. A blank query or an empty candidate list
    /// yields no matches.
    pub fn match_games(&self, query: &str, candidates: &[Candidate]) -> Vec<MatchResult> {
        let trimmed = query.trim();
        if trimmed.is_empty() || candidates.is_empty() {
            return Vec::new();
        }

        let start = Instant::now();
        let prepared = self.ranker.prepare_query(trimmed);
        let ranked = ranking::rank(
            self.ranker.as_ref(),
            &self.config.weights,
            &prepared,
            candidates,
        );

        // Ranked is sorted, so everything after the first miss is a miss too
        let matches: Vec<MatchResult> = ranked
            .into_iter()
            .take_while(|r| r.similarity >= self.config.threshold)
            .take(self.config.max_results)
            .map(|r| r.into_match(candidates))
            .collect();

        tracing::debug!(
            "'{}': {} of {} candidates matched via {} in {:.2}ms",
            trimmed,
            matches.len(),
            candidates.len(),
            self.ranker.name(),
            start.elapsed().as_secs_f64() * 1000.0
        );

        matches
    }

    /// Run [`match_games`](Self::match_games) for every query.
    ///
    /// Each query sees the full candidate list. The result holds one entry
    /// per distinct query, in first-seen order, even when it matched
    /// nothing.
    pub fn batch_match_games<S>(&self, queries: &[S], candidates: &[Candidate]) -> BatchMatches
    where
        S: AsRef<str> + Sync,
    {
        let mut seen = HashSet::with_capacity(queries.len());
        let distinct: Vec<&str> = queries
            .iter()
            .map(AsRef::as_ref)
            .filter(|query| seen.insert(*query))
            .collect();

        let entries: Vec<QueryMatches> = distinct
            .par_iter()
            .map(|query| QueryMatches {
                query: query.to_string(),
                matches: self.match_games(query, candidates),
            })
            .collect();

        tracing::debug!(
            "Batch of {} queries ({} distinct) against {} candidates",
            queries.len(),
            entries.len(),
            candidates.len()
        );

        BatchMatches::from_entries(entries)
    }
}

impl Default for MatchingEngine {
    fn default() -> Self {
        Self::build(MatchingConfig::default())
    }
}

/// Rank `candidates` against `query` using the defaults merged with
/// `config_override`.
///
/// A blank query or an empty candidate list returns `Ok` with no matches
/// before the configuration is looked at. Otherwise an invalid merged
/// configuration is an error.
///
/// # Example
/// ```
/// use game_matcher::{match_games, Candidate};
///
/// let games = vec![
///     Candidate::new("1", "Super Mario Bros"),
///     Candidate::new("2", "Tetris"),
/// ];
///
/// let matches = match_games("super mario bros", &games, None).unwrap();
/// assert_eq!(matches.len(), 1);
/// assert_eq!(matches[0].game.id, "1");
/// ```
pub fn match_games(
    query: &str,
    candidates: &[Candidate],
    config_override: Option<&ConfigOverride>,
) -> Result<Vec<MatchResult>> {
    if query.trim().is_empty() || candidates.is_empty() {
        return Ok(Vec::new());
    }

    let engine = engine_for(config_override)?;
    Ok(engine.match_games(query, candidates))
}

/// Rank `candidates` against each of `queries` (see [`match_games`]).
///
/// An empty query list returns an empty mapping.
pub fn batch_match_games<S>(
    queries: &[S],
    candidates: &[Candidate],
    config_override: Option<&ConfigOverride>,
) -> Result<BatchMatches>
where
    S: AsRef<str> + Sync,
{
    if queries.is_empty() {
        return Ok(BatchMatches::new());
    }

    let engine = engine_for(config_override)?;
    Ok(engine.batch_match_games(queries, candidates))
}

fn engine_for(config_override: Option<&ConfigOverride>) -> Result<MatchingEngine> {
    match config_override {
        Some(config_override) => MatchingEngine::with_override(config_override),
        None => Ok(MatchingEngine::default()),
    }
}
