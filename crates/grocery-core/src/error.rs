//! Error Types
//!
//! Only persistence can fail. Reducer edge cases are defined no-ops.

/// Failure reported by a key-value store backend
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// Store cannot be reached (no window, storage disabled, private mode)
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    /// Store refused the operation (quota exceeded, security error)
    #[error("storage rejected operation: {0}")]
    Rejected(String),
}

/// Failure while loading or saving the grocery record
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("stored groceries are malformed: {0}")]
    Malformed(#[source] serde_json::Error),
    #[error("failed to encode groceries: {0}")]
    Encode(#[source] serde_json::Error),
}

pub type PersistResult<T> = Result<T, PersistError>;
