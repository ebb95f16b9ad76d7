//! Matching configuration: defaults, partial overrides and validation.
//!
//! Two weight groups shape every score:
//! - [`AlgorithmWeights`] blend Levenshtein, cosine and Jaccard into one
//!   composite score per field
//! - [`FieldWeights`] blend the composite scores of title, description and
//!   tags into the aggregate similarity
//!
//! Each group must be non-negative and sum to 1.0 (within
//! [`WEIGHT_SUM_TOLERANCE`]). Out-of-range values are rejected, never
//! clamped.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::Field;
use crate::error::{ConfigError, Result};

/// Allowed drift of a weight group's sum from 1.0
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-3;

/// Upper bound for `max_results`
pub const MAX_RESULTS_LIMIT: usize = 100;

/// Per-field contribution to the aggregate similarity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldWeights {
    pub title: f64,
    pub description: f64,
    pub tags: f64,
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self {
            title: 0.6,
            description: 0.25,
            tags: 0.15,
        }
    }
}

impl FieldWeights {
    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::Title => self.title,
            Field::Description => self.description,
            Field::Tags => self.tags,
        }
    }

    pub fn sum(&self) -> f64 {
        self.title + self.description + self.tags
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        check_weight_group(
            "field",
            [
                ("title", self.title),
                ("description", self.description),
                ("tags", self.tags),
            ],
        )
    }
}

/// Per-algorithm contribution to a field's composite score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmWeights {
    pub levenshtein: f64,
    pub cosine: f64,
    pub jaccard: f64,
}

impl Default for AlgorithmWeights {
    fn default() -> Self {
        Self {
            levenshtein: 0.4,
            cosine: 0.3,
            jaccard: 0.3,
        }
    }
}

impl AlgorithmWeights {
    pub fn sum(&self) -> f64 {
        self.levenshtein + self.cosine + self.jaccard
    }

    /// Weighted blend of the three metric scores
    #[inline]
    pub fn blend(&self, levenshtein: f64, cosine: f64, jaccard: f64) -> f64 {
        self.levenshtein * levenshtein + self.cosine * cosine + self.jaccard * jaccard
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        check_weight_group(
            "algorithm",
            [
                ("levenshtein", self.levenshtein),
                ("cosine", self.cosine),
                ("jaccard", self.jaccard),
            ],
        )
    }
}

fn check_weight_group(
    group: &'static str,
    entries: [(&'static str, f64); 3],
) -> std::result::Result<(), ConfigError> {
    for (key, value) in entries {
        if !(value.is_finite() && value >= 0.0) {
            return Err(ConfigError::NegativeWeight { group, key, value });
        }
    }

    let sum: f64 = entries.iter().map(|(_, value)| value).sum();
    if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        return Err(ConfigError::WeightSum { group, sum });
    }

    Ok(())
}

fn check_threshold(threshold: f64) -> std::result::Result<(), ConfigError> {
    if (0.0..=1.0).contains(&threshold) {
        Ok(())
    } else {
        Err(ConfigError::ThresholdOutOfRange(threshold))
    }
}

fn check_max_results(max_results: usize) -> std::result::Result<(), ConfigError> {
    if (1..=MAX_RESULTS_LIMIT).contains(&max_results) {
        Ok(())
    } else {
        Err(ConfigError::MaxResultsOutOfRange(max_results))
    }
}

/// Full matching configuration.
///
/// # Examples
///
/// ```
/// use game_matcher::MatchingConfig;
///
/// let config = MatchingConfig::default();
/// assert!(config.validate().is_ok());
/// assert!((config.weights.sum() - 1.0).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchingConfig {
    /// Minimum aggregate similarity for a candidate to be returned
    pub threshold: f64,

    /// Maximum number of matches returned per query
    pub max_results: usize,

    /// Per-field weights
    pub weights: FieldWeights,

    /// Per-algorithm weights
    pub algorithm_weights: AlgorithmWeights,

    /// Compare text as-is instead of lower-casing both sides
    pub case_sensitive: bool,

    /// Approximate matching. When off, a field only scores when its text
    /// equals the query exactly (after optional case folding).
    pub fuzzy_match: bool,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            threshold: 0.3,
            max_results: 10,
            weights: FieldWeights::default(),
            algorithm_weights: AlgorithmWeights::default(),
            case_sensitive: false,
            fuzzy_match: true,
        }
    }
}

impl MatchingConfig {
    /// Check every bound; reports the first violation found
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        check_threshold(self.threshold)?;
        check_max_results(self.max_results)?;
        self.weights.validate()?;
        self.algorithm_weights.validate()?;
        Ok(())
    }

    /// Copy of `self` with every key set in `config_override` replaced
    pub fn merged(&self, config_override: &ConfigOverride) -> Self {
        Self {
            threshold: config_override.threshold.unwrap_or(self.threshold),
            max_results: config_override.max_results.unwrap_or(self.max_results),
            weights: config_override.weights.unwrap_or(self.weights),
            algorithm_weights: config_override
                .algorithm_weights
                .unwrap_or(self.algorithm_weights),
            case_sensitive: config_override.case_sensitive.unwrap_or(self.case_sensitive),
            fuzzy_match: config_override.fuzzy_match.unwrap_or(self.fuzzy_match),
        }
    }

    /// Parse and validate a full config; missing keys take default values
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

impl fmt::Display for MatchingConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "threshold={}, max_results={}, fields=[title={}, description={}, tags={}], \
             algorithms=[levenshtein={}, cosine={}, jaccard={}], case_sensitive={}, fuzzy={}",
            self.threshold,
            self.max_results,
            self.weights.title,
            self.weights.description,
            self.weights.tags,
            self.algorithm_weights.levenshtein,
            self.algorithm_weights.cosine,
            self.algorithm_weights.jaccard,
            self.case_sensitive,
            self.fuzzy_match
        )
    }
}

/// Partial configuration merged onto the defaults for one call.
///
/// Weight groups are replaced whole, never key by key.
///
/// ```
/// use game_matcher::ConfigOverride;
///
/// let partial = ConfigOverride::from_json(r#"{"threshold": 0.5, "maxResults": 3}"#).unwrap();
/// assert_eq!(partial.threshold, Some(0.5));
/// assert_eq!(partial.max_results, Some(3));
/// assert!(partial.weights.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ConfigOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub weights: Option<FieldWeights>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm_weights: Option<AlgorithmWeights>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_sensitive: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuzzy_match: Option<bool>,
}

impl ConfigOverride {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = Some(max_results);
        self
    }

    pub fn with_weights(mut self, weights: FieldWeights) -> Self {
        self.weights = Some(weights);
        self
    }

    pub fn with_algorithm_weights(mut self, algorithm_weights: AlgorithmWeights) -> Self {
        self.algorithm_weights = Some(algorithm_weights);
        self
    }

    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = Some(case_sensitive);
        self
    }

    pub fn with_fuzzy_match(mut self, fuzzy_match: bool) -> Self {
        self.fuzzy_match = Some(fuzzy_match);
        self
    }

    /// Validate only the keys that are set
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if let Some(threshold) = self.threshold {
            check_threshold(threshold)?;
        }
        if let Some(max_results) = self.max_results {
            check_max_results(max_results)?;
        }
        if let Some(weights) = &self.weights {
            weights.validate()?;
        }
        if let Some(algorithm_weights) = &self.algorithm_weights {
            algorithm_weights.validate()?;
        }
        Ok(())
    }

    /// Merge onto `base` (see [`MatchingConfig::merged`])
    pub fn apply_to(&self, base: &MatchingConfig) -> MatchingConfig {
        base.merged(self)
    }

    /// Parse a partial config. Unknown keys are rejected.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<MatchingConfig> for ConfigOverride {
    fn from(config: MatchingConfig) -> Self {
        Self {
            threshold: Some(config.threshold),
            max_results: Some(config.max_results),
            weights: Some(config.weights),
            algorithm_weights: Some(config.algorithm_weights),
            case_sensitive: Some(config.case_sensitive),
            fuzzy_match: Some(config.fuzzy_match),
        }
    }
}

/// Baseline configuration every call starts from
pub fn get_default_config() -> MatchingConfig {
    MatchingConfig::default()
}

/// Whether the keys set in `partial` are all within bounds. Never panics.
pub fn validate_config(partial: &ConfigOverride) -> bool {
    partial.validate().is_ok()
}
