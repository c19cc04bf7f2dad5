//! Catalog client - token lifecycle and search normalization.
//!
//! # Architecture
//!
//! - **DTOs** (`spotify::dto`) - exact API response shapes
//! - **Adapter** (`spotify::adapter`) - DTO to [`SearchResult`] conversion
//! - **Transport** ([`SpotifyApi`]) - one HTTP round trip per call
//! - **[`CatalogClient`]** - caches the access token and applies the lenient
//!   search contract on top of the transport
//!
//! # Search contract
//!
//! [`CatalogClient::search`] never fails. An empty query, a missing token, a
//! transport error, a non-2xx status and a malformed body all come back as an
//! empty list. Callers that need to tell these apart use
//! [`CatalogClient::try_search`].
//!
//! Overlapping searches are not coalesced or cancelled. Each completed search
//! is published to subscribers in completion order, so the last one to land
//! wins for any shared display state.
//!
//! # Usage
//!
//! ```ignore
//! let client = CatalogClient::from_config(&config)?;
//! if let Err(e) = client.authenticate().await {
//!     tracing::warn!("Failed to get access token: {}", e);
//! }
//! for result in client.search("radiohead").await {
//!     println!("{}", result);
//! }
//! ```

mod error;

pub use error::CatalogError;

use crossbeam_channel::Receiver;
use parking_lot::RwLock;

use crate::config::Config;
use crate::model::{AccessToken, SearchResult};
use crate::observe::Observers;
use crate::spotify::{self, SpotifyApi, SpotifyClient};

/// Authenticated, normalizing front end to the catalog service
pub struct CatalogClient<A: SpotifyApi = SpotifyClient> {
    api: A,
    token: RwLock<Option<AccessToken>>,
    observers: Observers<Vec<SearchResult>>,
}

impl CatalogClient<SpotifyClient> {
    /// Build a client talking to the real service described by `config`.
    pub fn from_config(config: &Config) -> Result<Self, CatalogError> {
        let api = SpotifyClient::new(&config.credentials, &config.catalog)?;
        Ok(Self::new(api))
    }
}

impl<A: SpotifyApi> CatalogClient<A> {
    /// Wrap a transport. No token is cached yet.
    pub fn new(api: A) -> Self {
        Self {
            api,
            token: RwLock::new(None),
            observers: Observers::new(),
        }
    }

    /// Fetch an access token and cache it for every later request.
    ///
    /// Returns the newly cached token. One attempt, no retry. On failure the
    /// previously cached token, if any, stays in place and remains usable.
    pub async fn authenticate(&self) -> Result<AccessToken, CatalogError> {
        match self.api.request_token().await {
            Ok(response) => {
                let token = spotify::to_access_token(response);
                *self.token.write() = Some(token.clone());
                tracing::info!("Obtained catalog access token");
                Ok(token)
            }
            Err(e) => {
                let error = match e {
                    CatalogError::Auth(_) => e,
                    other => CatalogError::Auth(other.to_string()),
                };
                tracing::warn!("Failed to get access token: {}", error);
                Err(error)
            }
        }
    }

    /// Whether a token has been obtained at least once.
    pub fn is_authenticated(&self) -> bool {
        self.token.read().is_some()
    }

    /// Search tracks and artists, degrading every failure to an empty list.
    ///
    /// An empty query returns immediately without a network call and is not
    /// published. Everything else is published to subscribers.
    pub async fn search(&self, query: &str) -> Vec<SearchResult> {
        if query.is_empty() {
            return Vec::new();
        }

        let results = match self.try_search(query).await {
            Ok(results) => results,
            Err(CatalogError::Unauthenticated) => {
                tracing::debug!("Search before authentication, returning no results");
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(query, "Search failed: {}", e);
                Vec::new()
            }
        };

        self.observers.notify(results.clone());
        results
    }

    /// Search tracks and artists, reporting why a search produced nothing.
    ///
    /// Result order: the first artist (if any), then every track in the order
    /// the service returned them.
    pub async fn try_search(&self, query: &str) -> Result<Vec<SearchResult>, CatalogError> {
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let token = self.current_token().ok_or(CatalogError::Unauthenticated)?;
        let response = self.api.search(token.secret(), query).await?;
        let results = spotify::to_search_results(response);

        tracing::debug!(query, count = results.len(), "Search completed");
        Ok(results)
    }

    /// Tempo (BPM) of a track, or `None` if it can't be fetched.
    pub async fn track_tempo(&self, track_id: &str) -> Option<f64> {
        let token = self.current_token()?;
        match self.api.audio_features(token.secret(), track_id).await {
            Ok(features) => Some(features.tempo),
            Err(e) => {
                tracing::warn!(track_id, "Failed to get tempo: {}", e);
                None
            }
        }
    }

    /// Receive the results of every completed search from now on.
    pub fn subscribe(&self) -> Receiver<Vec<SearchResult>> {
        self.observers.subscribe()
    }

    /// The underlying transport.
    pub fn api(&self) -> &A {
        &self.api
    }

    fn current_token(&self) -> Option<AccessToken> {
        self.token.read().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ResultKind;
    use crate::spotify::traits::mocks::MockSpotify;
    use crate::test_utils::{search_response, sample_track};

    async fn authenticated(mock: MockSpotify) -> CatalogClient<MockSpotify> {
        let client = CatalogClient::new(mock.with_token("token-1"));
        client.authenticate().await.unwrap();
        client
    }

    #[tokio::test]
    async fn test_empty_query_makes_no_call() {
        let client = authenticated(MockSpotify::new()).await;

        assert!(client.search("").await.is_empty());
        assert!(client.try_search("").await.unwrap().is_empty());
        assert_eq!(client.api().search_calls(), 0);
    }

    #[tokio::test]
    async fn test_search_before_authenticate_is_empty() {
        let client = CatalogClient::new(MockSpotify::new());

        assert!(!client.is_authenticated());
        assert!(client.search("anything").await.is_empty());
        assert_eq!(client.api().search_calls(), 0);
    }

    #[tokio::test]
    async fn test_try_search_before_authenticate_is_unauthenticated() {
        let client = CatalogClient::new(MockSpotify::new());
        let result = client.try_search("anything").await;
        assert!(matches!(result, Err(CatalogError::Unauthenticated)));
    }

    #[tokio::test]
    async fn test_one_artist_three_tracks() {
        let response = search_response(
            &[("a1", "Band")],
            vec![
                sample_track("t1", "One", &["Band"]),
                sample_track("t2", "Two", &[]),
                sample_track("t3", "Three", &["Guest", "Band"]),
            ],
        );
        let client = authenticated(MockSpotify::new().with_search(response)).await;

        let results = client.search("band").await;

        assert_eq!(results.len(), 4);
        assert_eq!(results[0].kind, ResultKind::Artist);
        assert!(results[0].artist_name.is_none());
        assert_eq!(results[1].artist_name.as_deref(), Some("Band"));
        assert_eq!(results[2].artist_name, None);
        assert_eq!(results[3].artist_name.as_deref(), Some("Guest"));
        assert_eq!(client.api().seen_tokens.lock().as_slice(), ["token-1"]);
    }

    #[tokio::test]
    async fn test_no_artists_two_tracks() {
        let response = search_response(
            &[],
            vec![sample_track("t1", "One", &["A"]), sample_track("t2", "Two", &["B"])],
        );
        let client = authenticated(MockSpotify::new().with_search(response)).await;

        let results = client.search("x").await;
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.kind == ResultKind::Track));
    }

    #[tokio::test]
    async fn test_failures_degrade_to_empty() {
        let mock = MockSpotify::new()
            .with_search_error(CatalogError::Network("connection reset".to_string()))
            .with_search_error(CatalogError::Http {
                status: 500,
                message: "boom".to_string(),
            })
            .with_search_error(CatalogError::Parse("expected value".to_string()));
        let client = authenticated(mock).await;

        assert!(client.search("a").await.is_empty());
        assert!(client.search("b").await.is_empty());
        assert!(client.search("c").await.is_empty());
        assert_eq!(client.api().search_calls(), 3);
    }

    #[tokio::test]
    async fn test_try_search_reports_http_error() {
        let mock = MockSpotify::new().with_search_error(CatalogError::Http {
            status: 401,
            message: "The access token expired".to_string(),
        });
        let client = authenticated(mock).await;

        let err = client.try_search("x").await.unwrap_err();
        assert!(err.is_unauthorized());
    }

    #[tokio::test]
    async fn test_failed_reauthentication_keeps_old_token() {
        let mock = MockSpotify::new()
            .with_token("good-token")
            .with_token_error(CatalogError::Auth("HTTP 503: unavailable".to_string()))
            .with_search(search_response(&[], vec![sample_track("t1", "Song", &[])]));
        let client = CatalogClient::new(mock);

        let first = client.authenticate().await.unwrap();
        assert_eq!(first.secret(), "good-token");
        let second = client.authenticate().await;
        assert!(matches!(second, Err(CatalogError::Auth(_))));
        assert!(client.is_authenticated());

        let results = client.search("song").await;
        assert_eq!(results.len(), 1);
        assert_eq!(client.api().seen_tokens.lock().as_slice(), ["good-token"]);
    }

    #[tokio::test]
    async fn test_authenticate_failure_without_prior_token() {
        let client = CatalogClient::new(MockSpotify::new());

        assert!(client.authenticate().await.is_err());
        assert!(!client.is_authenticated());
        assert_eq!(client.api().token_calls(), 1);
    }

    #[tokio::test]
    async fn test_authenticate_replaces_token() {
        let mock = MockSpotify::new().with_token("first").with_token("second");
        let client = CatalogClient::new(mock);

        assert_eq!(client.authenticate().await.unwrap().secret(), "first");
        assert_eq!(client.authenticate().await.unwrap().secret(), "second");
        client.search("q").await;

        assert_eq!(client.api().seen_tokens.lock().as_slice(), ["second"]);
    }

    #[tokio::test]
    async fn test_non_auth_transport_error_is_wrapped() {
        let mock = MockSpotify::new().with_token_error(CatalogError::Network("dns".to_string()));
        let client = CatalogClient::new(mock);

        let err = client.authenticate().await.unwrap_err();
        assert!(matches!(err, CatalogError::Auth(ref m) if m.contains("dns")));
    }

    #[tokio::test]
    async fn test_completed_searches_are_published_in_completion_order() {
        let mock = MockSpotify::new()
            .with_search(search_response(&[("a1", "First")], vec![]))
            .with_search(search_response(&[("a2", "Second")], vec![]));
        let client = authenticated(mock).await;
        let rx = client.subscribe();

        client.search("first").await;
        client.search("").await;
        client.search("second").await;

        let published: Vec<_> = rx.try_iter().collect();
        assert_eq!(published.len(), 2);
        assert_eq!(published[0][0].id, "a1");
        assert_eq!(published[1][0].id, "a2");
    }

    #[tokio::test]
    async fn test_track_tempo() {
        let client = authenticated(MockSpotify::new().with_tempo(172.5)).await;

        assert_eq!(client.track_tempo("t1").await, Some(172.5));
        assert_eq!(client.track_tempo("t1").await, None);
        assert_eq!(client.api().feature_calls(), 2);
    }

    #[tokio::test]
    async fn test_track_tempo_requires_token() {
        let client = CatalogClient::new(MockSpotify::new().with_tempo(120.0));
        assert_eq!(client.track_tempo("t1").await, None);
        assert_eq!(client.api().feature_calls(), 0);
    }
}
