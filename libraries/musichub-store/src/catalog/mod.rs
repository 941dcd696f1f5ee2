//! Catalog slice: the last-fetched search and trending results.
//!
//! A presentation buffer, not a source of truth: every setter is a full
//! replace driven by a fetch completion elsewhere, and nothing here is
//! persisted.

use musichub_core::types::Track;
use std::collections::HashMap;

/// In-memory snapshot of the remote catalog.
#[derive(Debug, Default)]
pub struct CatalogCache {
    search_results: Vec<Track>,
    popular: HashMap<String, Vec<Track>>,
    loading: bool,
    error: Option<String>,
}

impl CatalogCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the loading flag. Existing results are kept.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Replace the search-result list; clears loading and error.
    pub fn set_search_results(&mut self, tracks: Vec<Track>) {
        self.search_results = tracks;
        self.loading = false;
        self.error = None;
    }

    /// Replace the whole region-to-tracks map; clears loading and error.
    pub fn set_popular(&mut self, popular: HashMap<String, Vec<Track>>) {
        self.popular = popular;
        self.loading = false;
        self.error = None;
    }

    /// Record a fetch error; clears loading but keeps existing results.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.loading = false;
    }

    /// Empty the search-result list only.
    pub fn clear_search_results(&mut self) {
        self.search_results.clear();
    }

    /// The last search results.
    pub fn search_results(&self) -> &[Track] {
        &self.search_results
    }

    /// Trending tracks for one region.
    pub fn popular_for(&self, region: &str) -> Option<&[Track]> {
        self.popular.get(region).map(Vec::as_slice)
    }

    /// The whole region-to-tracks map.
    pub fn popular(&self) -> &HashMap<String, Vec<Track>> {
        &self.popular
    }

    /// Whether a fetch is outstanding.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The last recorded fetch error, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
