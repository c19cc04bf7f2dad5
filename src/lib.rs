//! tempo-run - music catalog search with session favorites.
//!
//! The library holds the non-UI core: a [`catalog::CatalogClient`] that
//! authenticates against the Spotify Web API and normalizes search results,
//! and a [`favorites::FavoritesStore`] that keeps a deduplicated favorites
//! list for the session. [`session::SearchSession`] ties both together for a
//! search-as-you-type screen.

pub mod catalog;
pub mod config;
pub mod error;
pub mod favorites;
pub mod model;
pub mod observe;
pub mod session;
pub mod spotify;
#[cfg(test)]
pub mod test_utils;

pub use catalog::{CatalogClient, CatalogError};
pub use favorites::{FavoritesError, FavoritesStore};
pub use model::{AccessToken, ResultKind, SearchResult};
pub use session::{SearchFilter, SearchSession};
