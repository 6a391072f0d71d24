//! Error types for the export pipeline
//!
//! Errors carry human-readable messages already localized for the export
//! language; the UI layer surfaces them verbatim.

use resume_model::Language;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    /// The resume failed validation; errors are surfaced verbatim.
    #[error("{}", .errors.join("; "))]
    Invalid { errors: Vec<String> },

    /// Precondition failure independent of the full validator.
    #[error("{0}")]
    Precondition(String),

    /// A serializer failed; the message carries the localized prefix.
    #[error("{0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ExportError>;

impl ExportError {
    /// Wrap a serializer failure with the localized export prefix.
    pub fn serialization(language: Language, detail: impl std::fmt::Display) -> Self {
        let message = match language {
            Language::Ar => format!("فشل تصدير السيرة الذاتية: {detail}"),
            Language::En | Language::Both => format!("Failed to export resume: {detail}"),
        };
        ExportError::Serialization(message)
    }

    /// Localized "name is required" precondition error.
    pub fn name_required(language: Language) -> Self {
        let message = match language {
            Language::Ar => "فشل تصدير السيرة الذاتية: الاسم مطلوب".to_string(),
            Language::En | Language::Both => {
                "Failed to export resume: name is required".to_string()
            }
        };
        ExportError::Precondition(message)
    }
}
