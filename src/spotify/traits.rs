//! Trait definition for the Spotify API.
//!
//! The catalog client is generic over [`SpotifyApi`] so tests can substitute
//! a mock that records how many requests were made.

use async_trait::async_trait;

use super::dto;
use crate::catalog::CatalogError;

/// The three Spotify calls the catalog client needs.
#[async_trait]
pub trait SpotifyApi: Send + Sync {
    /// Exchange client credentials for an access token.
    async fn request_token(&self) -> Result<dto::TokenResponse, CatalogError>;

    /// Search tracks and artists.
    async fn search(&self, token: &str, query: &str)
    -> Result<dto::SearchResponse, CatalogError>;

    /// Audio features for a single track.
    async fn audio_features(
        &self,
        token: &str,
        track_id: &str,
    ) -> Result<dto::AudioFeatures, CatalogError>;
}

#[async_trait]
impl SpotifyApi for super::SpotifyClient {
    async fn request_token(&self) -> Result<dto::TokenResponse, CatalogError> {
        self.request_token().await
    }

    async fn search(
        &self,
        token: &str,
        query: &str,
    ) -> Result<dto::SearchResponse, CatalogError> {
        self.search(token, query).await
    }

    async fn audio_features(
        &self,
        token: &str,
        track_id: &str,
    ) -> Result<dto::AudioFeatures, CatalogError> {
        self.audio_features(token, track_id).await
    }
}
