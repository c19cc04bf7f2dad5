//! Spotify Web API integration
//!
//! Token endpoint: https://developer.spotify.com/documentation/web-api/tutorials/client-credentials-flow
//! Search endpoint: https://developer.spotify.com/documentation/web-api/reference/search

pub mod adapter;
mod client;
pub mod dto;
pub mod traits;

pub use adapter::{to_access_token, to_search_results};
pub use client::{SEARCH_LIMIT, SEARCH_TYPES, SpotifyClient};
pub use traits::SpotifyApi;
