//! Search-as-you-type session state.
//!
//! Holds what a search screen needs between keystrokes: the latest
//! suggestions, the active category filter and the user's multi-selection.
//! Committing the selection moves it into the shared [`FavoritesStore`].

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::catalog::CatalogClient;
use crate::favorites::FavoritesStore;
use crate::model::SearchResult;
use crate::spotify::SpotifyApi;

/// Which suggestions to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchFilter {
    /// First artist, then every track
    #[default]
    All,
    Tracks,
    Artists,
}

impl SearchFilter {
    /// Apply the filter to a suggestion list, keeping service order.
    pub fn apply(&self, results: &[SearchResult]) -> Vec<SearchResult> {
        match self {
            SearchFilter::All => results
                .iter()
                .find(|r| r.is_artist())
                .into_iter()
                .chain(results.iter().filter(|r| r.is_track()))
                .cloned()
                .collect(),
            SearchFilter::Tracks => results.iter().filter(|r| r.is_track()).cloned().collect(),
            SearchFilter::Artists => results.iter().filter(|r| r.is_artist()).cloned().collect(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SearchFilter::All => "All",
            SearchFilter::Tracks => "Tracks",
            SearchFilter::Artists => "Artists",
        }
    }
}

impl fmt::Display for SearchFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SearchFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(SearchFilter::All),
            "track" | "tracks" => Ok(SearchFilter::Tracks),
            "artist" | "artists" => Ok(SearchFilter::Artists),
            other => Err(format!(
                "unknown filter '{}' (expected all, tracks or artists)",
                other
            )),
        }
    }
}

/// Per-screen search state on top of a catalog client and favorites store
pub struct SearchSession<A: SpotifyApi> {
    catalog: Arc<CatalogClient<A>>,
    favorites: Arc<FavoritesStore>,
    suggestions: Vec<SearchResult>,
    filter: SearchFilter,
    selected: HashSet<String>,
}

impl<A: SpotifyApi> SearchSession<A> {
    pub fn new(catalog: Arc<CatalogClient<A>>, favorites: Arc<FavoritesStore>) -> Self {
        Self {
            catalog,
            favorites,
            suggestions: Vec::new(),
            filter: SearchFilter::default(),
            selected: HashSet::new(),
        }
    }

    /// React to the query text changing.
    ///
    /// An empty query clears the suggestions without searching. Otherwise
    /// the suggestions are replaced with the search outcome and the
    /// selection is reset.
    pub async fn update_query(&mut self, query: &str) {
        if query.is_empty() {
            self.suggestions.clear();
            return;
        }

        self.suggestions = self.catalog.search(query).await;
        self.selected.clear();
    }

    /// Suggestions after applying the active filter.
    pub fn suggestions(&self) -> Vec<SearchResult> {
        self.filter.apply(&self.suggestions)
    }

    pub fn filter(&self) -> SearchFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: SearchFilter) {
        self.filter = filter;
    }

    /// Select or deselect a suggestion. Returns whether it is now selected.
    ///
    /// Ids that are not among the current suggestions are ignored.
    pub fn toggle_selection(&mut self, id: &str) -> bool {
        if !self.suggestions.iter().any(|r| r.id == id) {
            return false;
        }
        if self.selected.remove(id) {
            false
        } else {
            self.selected.insert(id.to_string());
            true
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Selected suggestions, in suggestion order.
    pub fn selected(&self) -> Vec<SearchResult> {
        self.suggestions
            .iter()
            .filter(|r| self.selected.contains(&r.id))
            .cloned()
            .collect()
    }

    /// Number of selected suggestions. Matches `selected().len()`.
    pub fn selection_count(&self) -> usize {
        self.suggestions
            .iter()
            .filter(|r| self.selected.contains(&r.id))
            .count()
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Add every selected suggestion to favorites and clear the selection.
    ///
    /// Returns how many new favorites were added.
    pub fn commit_selection(&mut self) -> usize {
        let added = self.favorites.add_all(self.selected());
        self.selected.clear();
        added
    }

    pub fn favorites(&self) -> &Arc<FavoritesStore> {
        &self.favorites
    }

    pub fn catalog(&self) -> &Arc<CatalogClient<A>> {
        &self.catalog
    }
}
