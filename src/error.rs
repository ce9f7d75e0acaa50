//! Error Types

use thiserror::Error;

/// Failures from a key-value storage backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// No window, or local storage is disabled for this origin
    #[error("local storage is unavailable")]
    Unavailable,
    /// The backend threw (e.g. quota exceeded)
    #[error("storage backend error: {0}")]
    Backend(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Checklist-level errors
#[derive(Debug, Error)]
pub enum ChecklistError {
    #[error("section not found: {0}")]
    SectionNotFound(String),
    #[error("failed to serialize checklist: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub type ChecklistResult<T> = Result<T, ChecklistError>;
