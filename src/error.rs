//! Application-wide error types.
//!
//! Library modules use specific error types via `thiserror`, while the
//! CLI uses `anyhow` for convenient error propagation.
//!
//! # Design
//!
//! - [`Error`]: Top-level error enum
//! - Module-specific errors ([`CatalogError`], [`FavoritesError`],
//!   [`ConfigError`]) for detailed handling
//!
//! # Example
//!
//! ```ignore
//! use tempo_run::error::{Result, ResultExt};
//!
//! fn remove(store: &FavoritesStore, index: usize) -> Result<()> {
//!     store.remove_at(index).map(|_| ()).with_context("while deleting favorite")
//! }
//! ```

use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::favorites::FavoritesError;

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O error (terminal, config file)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog service error
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Favorites mutation error
    #[error("Favorites error: {0}")]
    Favorites(#[from] FavoritesError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Create an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Add context to an error.
    pub fn context(self, ctx: impl Into<String>) -> Self {
        Self::WithContext {
            context: ctx.into(),
            source: Box::new(self),
        }
    }
}

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn with_context(self, ctx: impl Into<String>) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.into().context(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_with_context() {
        let err = Error::invalid_input("not a number").context("while parsing index");
        let msg = err.to_string();
        assert!(msg.contains("while parsing index"));
        assert!(msg.contains("not a number"));
    }

    #[test]
    fn test_favorites_error_converts() {
        let result: std::result::Result<(), FavoritesError> =
            Err(FavoritesError::IndexOutOfBounds { index: 4, len: 2 });
        let err = result.with_context("deleting favorite").unwrap_err();
        assert!(err.to_string().contains("Index 4 out of bounds"));
    }

    #[test]
    fn test_io_error_converts_with_context() {
        let result: std::result::Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "stdin closed"));
        let err = result.with_context("while reading input").unwrap_err();
        assert_eq!(err.to_string(), "while reading input: IO error: stdin closed");
    }

    #[test]
    fn test_catalog_error_converts() {
        let err: Error = CatalogError::Unauthenticated.into();
        assert!(matches!(err, Error::Catalog(CatalogError::Unauthenticated)));
    }
}
