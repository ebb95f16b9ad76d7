use thiserror::Error;

/// Why a matching configuration was rejected
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Threshold outside [0, 1]
    #[error("threshold must be within [0, 1], got {0}")]
    ThresholdOutOfRange(f64),

    /// Result cap outside [1, 100]
    #[error("max_results must be within [1, 100], got {0}")]
    MaxResultsOutOfRange(usize),

    /// A weight below zero (or not a number)
    #[error("{group} weight '{key}' must be a non-negative number, got {value}")]
    NegativeWeight {
        group: &'static str,
        key: &'static str,
        value: f64,
    },

    /// A weight group that does not add up to 1.0
    #[error("{group} weights must sum to 1.0, got {sum}")]
    WeightSum { group: &'static str, sum: f64 },
}

/// Main error type for the matcher
#[derive(Error, Debug)]
pub enum MatchError {
    /// Merged configuration failed validation
    #[error("Invalid configuration: {0}")]
    Configuration(#[from] ConfigError),

    /// JSON (de)serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, MatchError>;
