//! Error types for the store

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    /// Rejected at the import boundary; store state is untouched.
    #[error("Import rejected: {0}")]
    ImportRejected(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
