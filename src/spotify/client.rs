//! Spotify HTTP client
//!
//! Handles communication with the Spotify accounts service and Web API.
//! See: https://developer.spotify.com/documentation/web-api
//!
//! ## Authentication
//! Client-credentials flow: POST `grant_type=client_credentials` to the token
//! endpoint with `Authorization: Basic base64(client_id:client_secret)`.
//! reqwest's `basic_auth` builds exactly that header.
//!
//! ## Search
//! The query is percent-encoded by hand and the `type` list is left as a
//! literal `track,artist`, matching what the Web API documents.
//!
//! Every method makes one request. There is no retry, timeout override or
//! token refresh here; the caller decides what to do with a failure.

use super::dto;
use crate::catalog::CatalogError;
use crate::config::{CatalogConfig, Credentials};

/// Results requested per category
pub const SEARCH_LIMIT: u32 = 5;

/// Categories requested from the search endpoint
pub const SEARCH_TYPES: &str = "track,artist";

/// Spotify API client
pub struct SpotifyClient {
    http_client: reqwest::Client,
    client_id: String,
    client_secret: String,
    token_url: String,
    api_base_url: String,
}

impl SpotifyClient {
    /// Create a client against the given endpoints
    ///
    /// The client is configured to accept gzip-compressed responses and to
    /// send a User-Agent identifying the application.
    pub fn new(credentials: &Credentials, endpoints: &CatalogConfig) -> Result<Self, CatalogError> {
        let (client_id, client_secret) =
            credentials.pair().ok_or(CatalogError::MissingCredentials)?;

        let http_client = reqwest::Client::builder()
            .gzip(true)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
            token_url: endpoints.token_url.trim_end_matches('/').to_string(),
            api_base_url: endpoints.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Exchange the client credentials for an access token
    pub async fn request_token(&self) -> Result<dto::TokenResponse, CatalogError> {
        tracing::debug!(url = %self.token_url, "Requesting access token");

        let response = self
            .http_client
            .post(&self.token_url)
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| CatalogError::Auth(e.to_string()))?;

        let response = check_status(response).await.map_err(|e| match e {
            CatalogError::Http { status, message } => {
                CatalogError::Auth(format!("HTTP {}: {}", status, message))
            }
            other => other,
        })?;

        response
            .json::<dto::TokenResponse>()
            .await
            .map_err(|e| CatalogError::Auth(format!("malformed token response: {}", e)))
    }

    /// Search tracks and artists
    pub async fn search(
        &self,
        token: &str,
        query: &str,
    ) -> Result<dto::SearchResponse, CatalogError> {
        let url = search_url(&self.api_base_url, query);
        tracing::debug!(query, "Searching catalog");

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        check_status(response)
            .await?
            .json::<dto::SearchResponse>()
            .await
            .map_err(|e| CatalogError::Parse(e.to_string()))
    }

    /// Fetch audio features (tempo) for one track
    pub async fn audio_features(
        &self,
        token: &str,
        track_id: &str,
    ) -> Result<dto::AudioFeatures, CatalogError> {
        let url = format!(
            "{}/audio-features/{}",
            self.api_base_url,
            urlencoding::encode(track_id)
        );

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        check_status(response)
            .await?
            .json::<dto::AudioFeatures>()
            .await
            .map_err(|e| CatalogError::Parse(e.to_string()))
    }
}

/// Build the search URL for a query
fn search_url(api_base_url: &str, query: &str) -> String {
    format!(
        "{}/search?q={}&type={}&limit={}",
        api_base_url,
        urlencoding::encode(query),
        SEARCH_TYPES,
        SEARCH_LIMIT
    )
}

/// Turn a non-2xx response into [`CatalogError::Http`]
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, CatalogError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<dto::ErrorResponse>(&body)
        .map(|e| e.error.message().to_string())
        .unwrap_or_else(|_| {
            let reason = status.canonical_reason().unwrap_or("Unknown");
            if body.is_empty() {
                reason.to_string()
            } else {
                format!("{} - {}", reason, body.chars().take(200).collect::<String>())
            }
        });

    Err(CatalogError::Http {
        status: status.as_u16(),
        message,
    })
}
