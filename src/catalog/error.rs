/// Errors that can occur while talking to the catalog service
#[derive(Debug, Clone, thiserror::Error)]
pub enum CatalogError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("No access token - authenticate first")]
    Unauthenticated,

    #[error("Client id and secret are required")]
    MissingCredentials,

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl CatalogError {
    /// Whether the service rejected our token (expired or revoked).
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, CatalogError::Http { status: 401, .. })
    }
}
