//! Test utilities and fixtures for tempo-run tests.
//!
//! # Example
//!
//! ```ignore
//! use crate::test_utils::{sample_track, search_response};
//!
//! let response = search_response(&[("a1", "Band")], vec![sample_track("t1", "Song", &["Band"])]);
//! ```

use crate::model::SearchResult;
use crate::spotify::dto;

/// Build a track DTO credited to the given artist names.
///
/// Artist ids are derived from the names.
pub fn sample_track(id: &str, name: &str, artists: &[&str]) -> dto::Track {
    dto::Track {
        id: id.to_string(),
        name: name.to_string(),
        artists: artists
            .iter()
            .map(|artist| dto::Artist {
                id: format!("artist-{}", artist.to_lowercase()),
                name: artist.to_string(),
            })
            .collect(),
    }
}

/// Build a search response with both categories present.
///
/// `artists` are `(id, name)` pairs.
pub fn search_response(artists: &[(&str, &str)], tracks: Vec<dto::Track>) -> dto::SearchResponse {
    dto::SearchResponse {
        artists: Some(dto::Paging {
            items: artists
                .iter()
                .map(|(id, name)| dto::Artist {
                    id: id.to_string(),
                    name: name.to_string(),
                })
                .collect(),
        }),
        tracks: Some(dto::Paging { items: tracks }),
    }
}

/// A track result with a generated name.
pub fn track_result(id: &str) -> SearchResult {
    SearchResult::track(id, format!("Track {}", id), Some("Test Artist".to_string()))
}

/// An artist result with a generated name.
pub fn artist_result(id: &str) -> SearchResult {
    SearchResult::artist(id, format!("Artist {}", id))
}
