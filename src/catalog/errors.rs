//! Catalog errors
//!
//! Two outcomes are part of the contract: the request was invalid, or it
//! targeted an id that does not exist. Anything else comes from storage.

use thiserror::Error;

use crate::storage::StorageError;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Malformed input, missing or stale author reference, duplicate
    /// association, or a create carrying an id
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The targeted book or author does not exist
    #[error("Resource not found")]
    NotFound,

    /// Unexpected storage failure
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl CatalogError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        CatalogError::InvalidRequest(reason.into())
    }
}
