//! Storage error types
//!
//! Storage failures are never expected on the validated paths of the
//! catalog. When one does occur it is propagated as-is.

use thiserror::Error;

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// A row with this primary key already exists
    #[error("Duplicate key in {table}: {id}")]
    DuplicateKey { table: &'static str, id: u64 },

    /// The row targeted by an update or delete does not exist
    #[error("No row in {table} with id {id}")]
    RowNotFound { table: &'static str, id: u64 },

    /// A write would leave a reference to a missing row, or remove a
    /// row that is still referenced
    #[error("Foreign key violation on {table}: {id}")]
    ForeignKeyViolation { table: &'static str, id: u64 },

    /// A row references an entity that was never persisted
    #[error("Reference to transient entity in {table}")]
    TransientReference { table: &'static str },

    /// Merge of an entity without an id
    #[error("Cannot merge into {table} without an id")]
    MissingId { table: &'static str },

    /// Column value exceeds its declared length
    #[error("Value too long for {column}: {len} > {max}")]
    ValueTooLong {
        column: &'static str,
        len: usize,
        max: usize,
    },

    /// The shared tables lock was poisoned by a panicking writer
    #[error("Storage lock poisoned")]
    LockPoisoned,
}

impl StorageError {
    /// Stable error code for logs
    pub fn code(&self) -> &'static str {
        match self {
            StorageError::DuplicateKey { .. } => "LIBRARY_STORAGE_DUPLICATE_KEY",
            StorageError::RowNotFound { .. } => "LIBRARY_STORAGE_ROW_NOT_FOUND",
            StorageError::ForeignKeyViolation { .. } => "LIBRARY_STORAGE_FOREIGN_KEY",
            StorageError::TransientReference { .. } => "LIBRARY_STORAGE_TRANSIENT_REFERENCE",
            StorageError::MissingId { .. } => "LIBRARY_STORAGE_MISSING_ID",
            StorageError::ValueTooLong { .. } => "LIBRARY_STORAGE_VALUE_TOO_LONG",
            StorageError::LockPoisoned => "LIBRARY_STORAGE_LOCK_POISONED",
        }
    }
}
