//! Text-layout PDF serializer
//!
//! Produces an A4 PDF from the rendered resume. Latin text uses the
//! viewer-builtin standard fonts; Arabic runs are shaped with the probed
//! system face, which the writer embeds as an Identity-H composite font.
//! Pipeline: [`layout`] paginates the sections into positioned lines,
//! [`writer`] assembles objects, xref table, and trailer.

mod content;
mod fonts;
mod layout;
mod objects;
mod shaping;
mod writer;

pub use layout::{paginate, LineFont, Page, PAGE_HEIGHT, PAGE_WIDTH};
pub use shaping::{contains_arabic, ArabicShaper};
pub use writer::{write_pdf, PdfError, PdfMeta};

use crate::fonts::FontReport;
use render_model::RenderedResume;
use resume_model::{ExportOptions, Quality};

/// Serialize a rendered resume to PDF bytes.
///
/// Print quality turns stream compression off so prepress tools can inspect
/// the content streams directly. An Arabic document without an embeddable
/// face in `fonts` is an error; dropping its text would make the output
/// unreadable, so the export fails instead.
pub fn export_pdf(
    rendered: &RenderedResume,
    options: &ExportOptions,
    fonts: &FontReport,
) -> Result<Vec<u8>, PdfError> {
    let shaper = fonts
        .data
        .as_ref()
        .and_then(|data| ArabicShaper::new(&fonts.family, data));
    if rendered.direction.is_rtl() && shaper.is_none() {
        return Err(PdfError::FontUnavailable(
            "no Arabic-capable font available for embedding".to_string(),
        ));
    }

    let pages = paginate(rendered, shaper.as_ref());
    let meta = PdfMeta {
        title: rendered.name().to_string(),
        watermark: options.watermark.clone(),
        compress: options.quality != Quality::Print,
        ..Default::default()
    };
    write_pdf(&pages, &meta, shaper.as_ref())
}
