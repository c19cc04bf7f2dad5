//! Spotify Web API Data Transfer Objects
//!
//! These types match what the Spotify accounts and search endpoints return.
//! Only the fields we read are declared; serde ignores the rest.
//! DO NOT use these types outside the spotify module - convert to domain types.
//!
//! API Reference: https://developer.spotify.com/documentation/web-api/reference/search
//!
//! Example search response (trimmed):
//! ```json
//! {
//!   "artists": { "items": [{ "id": "0OdUWJ0sBjDrqHygGUXeCF", "name": "Band of Horses" }] },
//!   "tracks": {
//!     "items": [{
//!       "id": "4iV5W9uYEdYUVa79Axb7Rh",
//!       "name": "The Funeral",
//!       "artists": [{ "id": "0OdUWJ0sBjDrqHygGUXeCF", "name": "Band of Horses" }]
//!     }]
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Client-credentials token response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    /// Usually "Bearer"
    pub token_type: Option<String>,
    /// Lifetime in seconds (not used; tokens are cached for the session)
    pub expires_in: Option<u64>,
}

/// Top-level search response. Each category is present only if requested.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SearchResponse {
    pub tracks: Option<Paging<Track>>,
    pub artists: Option<Paging<Artist>>,
}

/// A page of items within one search category
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Paging<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

/// Track object (simplified)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    /// Credited artists, in credit order
    #[serde(default)]
    pub artists: Vec<Artist>,
}

/// Artist object (simplified)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
}

/// Audio features for a single track
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AudioFeatures {
    /// Estimated tempo in beats per minute
    pub tempo: f64,
}

/// Error envelope returned on non-2xx responses
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

/// The accounts service returns `error` as a plain string, the Web API as an object.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ErrorBody {
    Detailed { status: u16, message: String },
    Code(String),
}

impl ErrorBody {
    pub fn message(&self) -> &str {
        match self {
            ErrorBody::Detailed { message, .. } => message,
            ErrorBody::Code(code) => code,
        }
    }
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// ============================================================================
