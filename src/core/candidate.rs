use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::core::Field;

/// Deserialize an id given either as a string or a number
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IdValue {
        Int(i64),
        Float(f64),
        String(String),
    }

    Ok(match IdValue::deserialize(deserializer)? {
        IdValue::Int(i) => i.to_string(),
        IdValue::Float(f) => f.to_string(),
        IdValue::String(s) => s,
    })
}

/// A game record scored against a query.
///
/// Owned by the caller; matching never modifies it. `title` is expected to
/// be non-empty, while `description` and `tags` are optional. Every field,
/// title included, is scored only when it carries text: a record with a
/// blank title and nothing else scores 0.0.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Candidate {
    /// Unique, opaque identifier
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,

    /// Game title
    pub title: String,

    /// Free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Ordered tags/keywords
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Candidate {
    /// Create a candidate with only the required fields
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            tags: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Description text, if there is any beyond whitespace
    pub fn description_text(&self) -> Option<&str> {
        self.description
            .as_deref()
            .filter(|text| !text.trim().is_empty())
    }

    /// Non-blank tags joined with single spaces, if any
    pub fn tags_text(&self) -> Option<String> {
        let joined = self
            .tags
            .iter()
            .map(|tag| tag.trim())
            .filter(|tag| !tag.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        if joined.is_empty() {
            None
        } else {
            Some(joined)
        }
    }

    /// Text of `field` as the matcher sees it, `None` when blank
    pub fn field_text(&self, field: Field) -> Option<Cow<'_, str>> {
        match field {
            Field::Title => Some(self.title.as_str())
                .filter(|text| !text.trim().is_empty())
                .map(Cow::Borrowed),
            Field::Description => self.description_text().map(Cow::Borrowed),
            Field::Tags => self.tags_text().map(Cow::Owned),
        }
    }

    /// Get display name (for logging/UI)
    pub fn display_name(&self) -> String {
        format!("{} [{}]", self.title, self.id)
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Deserialize from JSON string
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Deserialize a JSON array of candidates
    pub fn list_from_json(json: &str) -> serde_json::Result<Vec<Self>> {
        serde_json::from_str(json)
    }
}
