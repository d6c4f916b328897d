//! Catalog error types.

use thiserror::Error;

/// Catalog error types.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Upstream response error: {0}")]
    Upstream(String),
}

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
