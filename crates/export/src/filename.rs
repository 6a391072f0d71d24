//! Export filename construction
//!
//! All formats share the convention `{safeName}_{lang}_{YYYY-MM-DD}.{ext}`.
//! The sanitizer keeps word characters, whitespace, and hyphens; the PDF
//! path additionally keeps Arabic script so Arabic applicant names survive
//! in the filename. Whitespace runs collapse to single underscores.

use chrono::Utc;
use resume_model::{ExportFormat, Language};

/// Characters that must never appear in a generated filename.
pub const FORBIDDEN: &[char] = &['/', '\\', '?', '*', ':', '"', '<', '>', '|'];

fn is_arabic(c: char) -> bool {
    matches!(c,
        '\u{0600}'..='\u{06FF}'
        | '\u{0750}'..='\u{077F}'
        | '\u{08A0}'..='\u{08FF}'
        | '\u{FB50}'..='\u{FDFF}'
        | '\u{FE70}'..='\u{FEFF}'
    )
}

/// Sanitize an applicant name for use in a filename.
///
/// Keeps `[A-Za-z0-9_]`, whitespace, and `-`; `keep_arabic` additionally
/// keeps Arabic script ranges. The empty result falls back to `"resume"`.
pub fn sanitize_name(name: &str, keep_arabic: bool) -> String {
    let filtered: String = name
        .chars()
        .filter(|&c| {
            c.is_ascii_alphanumeric()
                || c == '_'
                || c == '-'
                || c.is_whitespace()
                || (keep_arabic && is_arabic(c))
        })
        .collect();

    let collapsed = filtered
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_");

    if collapsed.is_empty() {
        "resume".to_string()
    } else {
        collapsed
    }
}

/// Build the export filename for an applicant, language, and format.
pub fn export_filename(name: &str, language: Language, format: ExportFormat) -> String {
    let keep_arabic = format == ExportFormat::Pdf;
    let safe = sanitize_name(name, keep_arabic);
    let date = Utc::now().format("%Y-%m-%d");
    format!("{}_{}_{}.{}", safe, language.code(), date, format.extension())
}
