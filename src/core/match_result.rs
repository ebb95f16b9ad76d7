use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::Candidate;

/// A scored field of a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Title,
    Description,
    Tags,
}

impl Field {
    /// All fields, in tie-break order
    pub const ALL: [Field; 3] = [Field::Title, Field::Description, Field::Tags];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Description => "description",
            Field::Tags => "tags",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Per-algorithm detail for one field
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmScores {
    pub levenshtein: f64,
    pub cosine: f64,
    pub jaccard: f64,
    /// Algorithm-weighted blend of the three
    pub normalized: f64,
}

/// Composite score per field. Fields without content on the candidate are
/// `None`, which is different from "present but dissimilar" (`Some(0.0)`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchedFields {
    pub title: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<f64>,
}

impl MatchedFields {
    pub fn get(&self, field: Field) -> Option<f64> {
        match field {
            Field::Title => Some(self.title),
            Field::Description => self.description,
            Field::Tags => self.tags,
        }
    }

    /// Present fields with their scores, in field order
    pub fn iter(&self) -> impl Iterator<Item = (Field, f64)> + '_ {
        Field::ALL
            .into_iter()
            .filter_map(move |field| self.get(field).map(|score| (field, score)))
    }
}

/// One ranked match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    /// The matched candidate, unmodified
    pub game: Candidate,

    /// Aggregate similarity (0.0 - 1.0)
    pub similarity: f64,

    /// Algorithm breakdown of the best-scoring field
    pub scores: AlgorithmScores,

    /// Composite score of each present field
    pub matched_fields: MatchedFields,

    /// Field the `scores` breakdown belongs to
    pub best_field: Field,
}

impl MatchResult {
    /// Whether the candidate matched perfectly
    pub fn is_exact(&self) -> bool {
        self.similarity >= 1.0 - 1e-9
    }

    /// Get display string for logging
    pub fn display(&self) -> String {
        format!(
            "{} - {:.1}% (best: {} {:.2})",
            self.game.display_name(),
            self.similarity * 100.0,
            self.best_field,
            self.scores.normalized
        )
    }
}
