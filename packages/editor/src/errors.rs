//! Error types for the editor

use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Structural violations rejected by the store. Lookups of missing elements
/// are not errors; those calls are silent no-ops.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("Parent not found: {0}")]
    ParentNotFound(String),

    #[error("Moving {node_id} under {parent_id} would create a cycle")]
    CycleDetected { node_id: String, parent_id: String },
}

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),
}
