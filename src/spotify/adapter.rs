//! Adapter layer: Convert Spotify DTOs to domain models
//!
//! This is the ONLY place where DTO types are converted to domain types.

use super::dto;
use crate::model::{AccessToken, SearchResult};

/// Normalize a search response into suggestion order.
///
/// Only the first artist is kept, and it always comes first. Every track
/// follows in the order the service returned them, carrying its first
/// credited artist's name.
pub fn to_search_results(response: dto::SearchResponse) -> Vec<SearchResult> {
    let first_artist = response
        .artists
        .and_then(|page| page.items.into_iter().next())
        .map(artist_to_result);

    let tracks = response
        .tracks
        .map(|page| page.items)
        .unwrap_or_default()
        .into_iter()
        .map(track_to_result);

    first_artist.into_iter().chain(tracks).collect()
}

fn artist_to_result(artist: dto::Artist) -> SearchResult {
    SearchResult::artist(artist.id, artist.name)
}

fn track_to_result(track: dto::Track) -> SearchResult {
    let primary = track.artists.into_iter().next().map(|a| a.name);
    SearchResult::track(track.id, track.name, primary)
}

pub fn to_access_token(response: dto::TokenResponse) -> AccessToken {
    AccessToken::new(response.access_token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ResultKind;

    fn artist(id: &str, name: &str) -> dto::Artist {
        dto::Artist {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    fn track(id: &str, name: &str, artists: Vec<dto::Artist>) -> dto::Track {
        dto::Track {
            id: id.to_string(),
            name: name.to_string(),
            artists,
        }
    }

    fn response(artists: Vec<dto::Artist>, tracks: Vec<dto::Track>) -> dto::SearchResponse {
        dto::SearchResponse {
            artists: Some(dto::Paging { items: artists }),
            tracks: Some(dto::Paging { items: tracks }),
        }
    }

    #[test]
    fn test_one_artist_three_tracks() {
        let results = to_search_results(response(
            vec![artist("a1", "Band")],
            vec![
                track("t1", "First", vec![artist("a1", "Band"), artist("a9", "Guest")]),
                track("t2", "Second", vec![]),
                track("t3", "Third", vec![artist("a2", "Other")]),
            ],
        ));

        assert_eq!(results.len(), 4);
        assert_eq!(results[0].kind, ResultKind::Artist);
        assert_eq!(results[0].id, "a1");
        assert!(results[0].artist_name.is_none());

        let ids: Vec<_> = results[1..].iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["t1", "t2", "t3"]);
        assert!(results[1..].iter().all(|r| r.kind == ResultKind::Track));
        assert_eq!(results[1].artist_name.as_deref(), Some("Band"));
        assert_eq!(results[2].artist_name, None);
        assert_eq!(results[3].artist_name.as_deref(), Some("Other"));
    }

    #[test]
    fn test_only_first_artist_is_kept() {
        let results = to_search_results(response(
            vec![artist("a1", "First"), artist("a2", "Second")],
            vec![],
        ));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "First");
    }

    #[test]
    fn test_no_artists_two_tracks() {
        let results = to_search_results(response(
            vec![],
            vec![track("t1", "A", vec![]), track("t2", "B", vec![])],
        ));
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.kind == ResultKind::Track));
    }

    #[test]
    fn test_missing_categories() {
        assert!(to_search_results(dto::SearchResponse::default()).is_empty());
    }

    #[test]
    fn test_token_conversion() {
        let token = to_access_token(dto::TokenResponse {
            access_token: "abc".to_string(),
            token_type: None,
            expires_in: None,
        });
        assert_eq!(token.secret(), "abc");
    }
}
