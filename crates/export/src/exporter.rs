//! Export orchestrator
//!
//! Owns the per-call export flow: the name precondition, the dispatch to a
//! format serializer, and the localized wrapping of serializer failures.
//! One exporter instance can serve many calls; the font probe inside it runs
//! once and is shared.

use render_model::render;
use resume_model::{validate, ExportFormat, ExportOptions, Language, ResumeData};
use tracing::{error, info, warn};

use crate::docx::export_docx;
use crate::error::{ExportError, Result};
use crate::filename::export_filename;
use crate::fonts::FontPreparer;
use crate::html::export_html;
use crate::json::export_json;
use crate::pdf::export_pdf;

/// A finished export: the bytes plus what a caller needs to hand them on.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Service object orchestrating resume exports.
#[derive(Debug, Default)]
pub struct ResumeExporter {
    fonts: FontPreparer,
}

impl ResumeExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fonts(fonts: FontPreparer) -> Self {
        Self { fonts }
    }

    /// Export a resume in the requested format.
    ///
    /// The only hard precondition is a non-blank applicant name; incomplete
    /// resumes otherwise export with placeholders (PDF, HTML), skipped
    /// sections (DOCX), or verbatim data (JSON).
    pub async fn export(&self, data: &ResumeData, options: &ExportOptions) -> Result<ExportArtifact> {
        tracing::debug!(format = %options.format, language = %options.language, "export requested");
        if data.personal_info.name.trim().is_empty() {
            return Err(ExportError::name_required(options.language));
        }

        let bytes = match self.serialize(data, options).await {
            Ok(bytes) => bytes,
            Err(e) => {
                error!(format = %options.format, error = %e, "export failed");
                return Err(e);
            }
        };
        let filename_language = self.artifact_language(options);
        let artifact = ExportArtifact {
            filename: export_filename(&data.personal_info.name, filename_language, options.format),
            content_type: options.format.content_type().to_string(),
            bytes,
        };

        info!(
            format = %options.format,
            language = %options.language,
            filename = %artifact.filename,
            size = artifact.bytes.len(),
            "resume exported"
        );
        Ok(artifact)
    }

    /// Export only if the resume passes validation.
    ///
    /// Validation errors abort the export and are surfaced verbatim;
    /// warnings are logged and do not block.
    pub async fn export_validated(
        &self,
        data: &ResumeData,
        options: &ExportOptions,
    ) -> Result<ExportArtifact> {
        let report = validate(data, options.language);
        for warning in &report.warnings {
            warn!(%warning, "resume validation warning");
        }
        if !report.is_valid {
            return Err(ExportError::Invalid {
                errors: report.errors,
            });
        }
        self.export(data, options).await
    }

    async fn serialize(&self, data: &ResumeData, options: &ExportOptions) -> Result<Vec<u8>> {
        match options.format {
            ExportFormat::Json => export_json(data, options.template, options.language),
            ExportFormat::Html => {
                let rendered = render(data, options.template, options.language);
                Ok(export_html(&rendered).into_bytes())
            }
            ExportFormat::Docx => export_docx(data, options.template, options.language)
                .map_err(|e| ExportError::serialization(options.language, e)),
            ExportFormat::Pdf => {
                let report = self.fonts.ensure_loaded().await;
                if report.degraded {
                    warn!(family = %report.family, "no embeddable Arabic face, Arabic PDF exports will fail");
                }
                let language = self.pdf_language(options.language);
                let rendered = render(data, options.template, language);
                export_pdf(&rendered, options, &report)
                    .map_err(|e| ExportError::serialization(options.language, e))
            }
        }
    }

    /// Language the PDF path actually renders in. The bilingual layout is
    /// not expressible in the single-direction page model, so `Both`
    /// degrades to English rather than failing the export.
    fn pdf_language(&self, language: Language) -> Language {
        let effective = language.effective_for_pdf();
        if effective != language {
            warn!(
                requested = %language,
                effective = %effective,
                "bilingual PDF not supported, degrading"
            );
        }
        effective
    }

    /// Language encoded in the artifact filename. Follows the PDF
    /// degradation so the filename matches the content.
    fn artifact_language(&self, options: &ExportOptions) -> Language {
        match options.format {
            ExportFormat::Pdf => options.language.effective_for_pdf(),
            _ => options.language,
        }
    }
}
