//! Core domain types shared by the catalog client and the favorites store.
//!
//! These are OUR types. Spotify response shapes live in `spotify::dto` and are
//! converted into these by `spotify::adapter`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// What kind of catalog entity a [`SearchResult`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    Track,
    Artist,
    /// Declared for completeness; the catalog client never produces it.
    Genre,
}

impl ResultKind {
    /// Lowercase label, as used on the wire and in the CLI.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultKind::Track => "track",
            ResultKind::Artist => "artist",
            ResultKind::Genre => "genre",
        }
    }
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized search hit: a track, an artist or (in principle) a genre.
///
/// Identity is the catalog `id` alone. Two results with the same id compare
/// equal and hash the same, whatever their other fields say.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// Opaque catalog identifier, unique within its kind
    pub id: String,
    /// Display name
    pub name: String,
    /// Entity kind
    pub kind: ResultKind,
    /// First credited artist; only ever set for tracks
    pub artist_name: Option<String>,
}

impl SearchResult {
    /// Create a track result.
    pub fn track(
        id: impl Into<String>,
        name: impl Into<String>,
        artist_name: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: ResultKind::Track,
            artist_name,
        }
    }

    /// Create an artist result.
    pub fn artist(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: ResultKind::Artist,
            artist_name: None,
        }
    }

    pub fn is_track(&self) -> bool {
        self.kind == ResultKind::Track
    }

    pub fn is_artist(&self) -> bool {
        self.kind == ResultKind::Artist
    }
}

impl PartialEq for SearchResult {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for SearchResult {}

impl Hash for SearchResult {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.artist_name {
            Some(artist) => write!(f, "{} - {} ({})", self.name, artist, self.kind),
            None => write!(f, "{} ({})", self.name, self.kind),
        }
    }
}

/// Bearer credential issued by the token endpoint.
///
/// No expiry is modeled. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token, for building the `Authorization` header.
    pub fn secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_equality_is_by_id_only() {
        let a = SearchResult::track("t1", "Song", Some("Artist".to_string()));
        let b = SearchResult::artist("t1", "Somebody Else");
        assert_eq!(a, b);

        let set: HashSet<_> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_artist_has_no_artist_name() {
        let artist = SearchResult::artist("a1", "Band");
        assert_eq!(artist.kind, ResultKind::Artist);
        assert!(artist.artist_name.is_none());
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let json = serde_json::to_string(&ResultKind::Genre).unwrap();
        assert_eq!(json, "\"genre\"");
    }

    #[test]
    fn test_display() {
        let track = SearchResult::track("t1", "Song", Some("Band".to_string()));
        assert_eq!(track.to_string(), "Song - Band (track)");
        assert_eq!(SearchResult::artist("a", "Band").to_string(), "Band (artist)");
    }

    #[test]
    fn test_token_debug_is_redacted() {
        let token = AccessToken::new("super-secret");
        assert!(!format!("{:?}", token).contains("super-secret"));
        assert_eq!(token.secret(), "super-secret");
    }
}
