//! Error types for draft persistence

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DraftError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("No draft found for resume {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, DraftError>;
