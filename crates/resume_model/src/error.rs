//! Error types for resume model operations

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Unknown export format: {0}")]
    UnknownFormat(String),

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ModelError>;
