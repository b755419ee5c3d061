//! Error types for the catalog client.

use thiserror::Error;

/// Errors that can occur while talking to the catalog.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    /// The server answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Http {
        /// Response status code.
        status: u16,
        /// Response body, as returned.
        body: String,
    },

    /// The request could not be sent or the response not read.
    #[error("network error: {0}")]
    Network(String),

    /// A catalog query was attempted before obtaining a token.
    #[error("not authenticated; request an auth token first")]
    NotAuthenticated,

    /// The catalog returned no record for the id.
    #[error("no {resource} found with id {id}")]
    NotFound {
        /// Endpoint name, e.g. `games`.
        resource: &'static str,
        /// The requested id.
        id: u64,
    },

    /// Failed to parse a JSON response.
    #[error("JSON parse error: {0}")]
    JsonParse(String),
}

impl CatalogError {
    /// Returns true for non-success HTTP statuses.
    #[must_use]
    pub fn is_http(&self) -> bool {
        matches!(self, Self::Http { .. })
    }

    /// Returns true when the queried record does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonParse(err.to_string())
    }
}

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
