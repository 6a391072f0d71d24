//! Export options
//!
//! Configuration for a single export call: target format, quality preset,
//! template, language, and optional watermark.

use crate::{Language, ModelError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target export format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Pdf,
    Docx,
    Html,
    Json,
}

impl ExportFormat {
    /// File extension without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Docx => "docx",
            ExportFormat::Html => "html",
            ExportFormat::Json => "json",
        }
    }

    /// MIME type of the produced artifact.
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "application/pdf",
            ExportFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            ExportFormat::Html => "text/html; charset=utf-8",
            ExportFormat::Json => "application/json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pdf" => Ok(ExportFormat::Pdf),
            "docx" => Ok(ExportFormat::Docx),
            "html" => Ok(ExportFormat::Html),
            "json" => Ok(ExportFormat::Json),
            other => Err(ModelError::UnknownFormat(other.to_string())),
        }
    }
}

/// Quality preset. Governs the rasterization scale for any raster content;
/// `Print` additionally disables PDF stream compression.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    #[default]
    Standard,
    High,
    Print,
}

impl Quality {
    /// Rasterization scale factor.
    pub fn scale(&self) -> f64 {
        match self {
            Quality::Standard => 1.0,
            Quality::High => 1.5,
            Quality::Print => 2.0,
        }
    }
}

/// Template preset selecting a color palette and font pairing.
/// Unknown ids fall back to `Modern` so stale drafts keep exporting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateId {
    #[default]
    Modern,
    Classic,
    Minimal,
}

impl TemplateId {
    /// Lenient parse: unknown ids fall back to the default template.
    pub fn from_id(id: &str) -> Self {
        match id.to_lowercase().as_str() {
            "classic" => TemplateId::Classic,
            "minimal" => TemplateId::Minimal,
            _ => TemplateId::Modern,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            TemplateId::Modern => "modern",
            TemplateId::Classic => "classic",
            TemplateId::Minimal => "minimal",
        }
    }
}

/// Options for a single export call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportOptions {
    pub format: ExportFormat,
    #[serde(default)]
    pub quality: Quality,
    #[serde(default)]
    pub template: TemplateId,
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub watermark: Option<String>,
}

impl ExportOptions {
    /// Create options for a format with everything else defaulted.
    pub fn new(format: ExportFormat) -> Self {
        Self {
            format,
            quality: Quality::default(),
            template: TemplateId::default(),
            language: Language::default(),
            watermark: None,
        }
    }

    /// Set the export language.
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Set the template preset.
    pub fn with_template(mut self, template: TemplateId) -> Self {
        self.template = template;
        self
    }

    /// Set the quality preset.
    pub fn with_quality(mut self, quality: Quality) -> Self {
        self.quality = quality;
        self
    }

    /// Stamp a watermark string on every PDF page.
    pub fn with_watermark(mut self, text: impl Into<String>) -> Self {
        self.watermark = Some(text.into());
        self
    }
}
