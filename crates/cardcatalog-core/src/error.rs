//! Error types for Card Catalog

use thiserror::Error;

/// Main error type for catalog loading operations
///
/// Only [`CatalogError::Orchestration`] ever escapes [`crate::load_catalog`];
/// every other variant describes a single resource failure that the loader
/// recovers from.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Transport-level HTTP failure (connection refused, DNS, body read)
    #[error("HTTP error: {0}")]
    Http(Box<reqwest::Error>),

    /// The server answered with a non-2xx status
    #[error("HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    /// The payload was not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading a resource from the local static directory failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The payload parsed but had the wrong shape
    #[error("Invalid payload shape: {0}")]
    InvalidShape(String),

    /// The configured base URL or resource path could not be resolved
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The concurrent boot sequence itself failed
    #[error("Boot orchestration failed: {0}")]
    Orchestration(String),
}

impl From<reqwest::Error> for CatalogError {
    fn from(error: reqwest::Error) -> Self {
        CatalogError::Http(Box::new(error))
    }
}

/// Result type alias using CatalogError
pub type CatalogResult<T> = Result<T, CatalogError>;
