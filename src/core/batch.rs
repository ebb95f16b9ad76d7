use serde::ser::{Serialize, Serializer};

use crate::core::MatchResult;

/// Ranked matches for one query of a batch
#[derive(Debug, Clone, PartialEq)]
pub struct QueryMatches {
    pub query: String,
    pub matches: Vec<MatchResult>,
}

/// Query-to-matches mapping that keeps queries in input order.
///
/// Serializes as a JSON object keyed by query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchMatches {
    entries: Vec<QueryMatches>,
}

impl BatchMatches {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_entries(entries: Vec<QueryMatches>) -> Self {
        Self { entries }
    }

    /// Matches for `query`, if it was part of the batch
    pub fn get(&self, query: &str) -> Option<&[MatchResult]> {
        self.entries
            .iter()
            .find(|entry| entry.query == query)
            .map(|entry| entry.matches.as_slice())
    }

    pub fn contains_query(&self, query: &str) -> bool {
        self.get(query).is_some()
    }

    /// Number of queries (not matches)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Queries in input order
    pub fn queries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.query.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, QueryMatches> {
        self.entries.iter()
    }

    /// Total matches across all queries
    pub fn total_matches(&self) -> usize {
        self.entries.iter().map(|entry| entry.matches.len()).sum()
    }
}

impl IntoIterator for BatchMatches {
    type Item = QueryMatches;
    type IntoIter = std::vec::IntoIter<QueryMatches>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a BatchMatches {
    type Item = &'a QueryMatches;
    type IntoIter = std::slice::Iter<'a, QueryMatches>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Serialize for BatchMatches {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(
            self.entries
                .iter()
                .map(|entry| (&entry.query, &entry.matches)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch() -> BatchMatches {
        BatchMatches::from_entries(vec![
            QueryMatches {
                query: "tetris".to_string(),
                matches: Vec::new(),
            },
            QueryMatches {
                query: "mario".to_string(),
                matches: Vec::new(),
            },
        ])
    }

    #[test]
    fn test_lookup_and_order() {
        let batch = batch();
        assert_eq!(batch.len(), 2);
        assert!(batch.contains_query("mario"));
        assert!(!batch.contains_query("zelda"));
        assert_eq!(batch.get("tetris"), Some(&[][..]));
        assert_eq!(batch.queries().collect::<Vec<_>>(), vec!["tetris", "mario"]);
        assert_eq!(batch.total_matches(), 0);
    }

    #[test]
    fn test_serializes_as_ordered_map() {
        let json = serde_json::to_string(&batch()).unwrap();
        assert_eq!(json, r#"{"tetris":[],"mario":[]}"#);
    }

    #[test]
    fn test_empty() {
        let batch = BatchMatches::new();
        assert!(batch.is_empty());
        assert_eq!(serde_json::to_string(&batch).unwrap(), "{}");
    }
}
