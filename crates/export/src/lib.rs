//! Export - Resume serialization to PDF, DOCX, HTML, and JSON
//!
//! This crate implements the export pipeline: font preparation for the PDF
//! path, the four format serializers, export filename construction, and the
//! orchestrator that validates, dispatches, and wraps failures with
//! localized messages.

mod error;
mod filename;
mod fonts;
mod json;
mod html;
mod exporter;
pub mod pdf;
pub mod docx;

pub use error::*;
pub use filename::*;
pub use fonts::*;
pub use json::*;
pub use html::*;
pub use exporter::*;
