//! Keyword search over class labels and descriptions
//!
//! Matching is a case-insensitive substring test. A label hit scores 2, a
//! description-only hit scores 1, and ties keep document order. Scanning
//! stops once `2 × limit` candidates are collected, so on large graphs a
//! late label match can be missed in favour of earlier description matches.

use serde::Serialize;
use tracing::debug;

use crate::config::MAX_SEARCH_LIMIT;
use crate::error::{Error, Result};
use crate::graph::GraphStore;

/// Limit used when the caller does not give one
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

const LABEL_RELEVANCE: u8 = 2;
const DESCRIPTION_RELEVANCE: u8 = 1;

/// A class matching a search query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub name: String,
    pub description: String,
    pub id: String,
    pub url: String,
    pub relevance: u8,
}

/// Clamp a caller-supplied limit into `[1, 100]`
///
/// Only an absent limit falls back to `default_limit`. An explicit `0` is
/// clamped up to 1 rather than treated as unspecified.
pub fn clamp_limit(limit: Option<usize>, default_limit: usize) -> usize {
    limit.unwrap_or(default_limit).clamp(1, MAX_SEARCH_LIMIT)
}

/// Ranked substring search over the class bucket
#[derive(Debug, Clone, Copy)]
pub struct SearchEngine<'a> {
    store: &'a GraphStore,
    default_limit: usize,
}

impl<'a> SearchEngine<'a> {
    pub fn new(store: &'a GraphStore) -> Self {
        Self {
            store,
            default_limit: DEFAULT_SEARCH_LIMIT,
        }
    }

    /// Use a different limit when none is passed to [`search`](Self::search)
    pub fn with_default_limit(mut self, default_limit: usize) -> Self {
        self.default_limit = default_limit;
        self
    }

    /// Search classes whose label or description contains `query`
    pub fn search(&self, query: &str, limit: Option<usize>) -> Result<Vec<SearchHit>> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Err(Error::InvalidQuery("query cannot be empty".to_string()));
        }

        let limit = clamp_limit(limit, self.default_limit);
        let scan_cap = limit * 2;
        let mut hits = Vec::new();
        let mut scanned = 0usize;

        for entity in self.store.classes() {
            scanned += 1;

            let label_match = entity
                .label
                .as_deref()
                .is_some_and(|label| label.to_lowercase().contains(&needle));
            let relevance = if label_match {
                LABEL_RELEVANCE
            } else if entity
                .comment
                .as_deref()
                .is_some_and(|comment| comment.to_lowercase().contains(&needle))
            {
                DESCRIPTION_RELEVANCE
            } else {
                continue;
            };

            let name = self.store.label_of(entity);
            hits.push(SearchHit {
                url: self.store.url_for(&name),
                name,
                description: entity.description(),
                id: entity.id.clone(),
                relevance,
            });

            if hits.len() >= scan_cap {
                break;
            }
        }

        // Stable: equal relevance keeps document order.
        hits.sort_by(|a, b| b.relevance.cmp(&a.relevance));
        hits.truncate(limit);

        debug!(query = %query, limit, scanned, hits = hits.len(), "Search completed");

        Ok(hits)
    }
}
