//! DOCX serializer
//!
//! Packages a WordprocessingML document built straight from the resume data
//! into the OPC zip container. Only four parts are needed: content types,
//! the root relationships, the document, and its style sheet.

mod document;
mod parts;

pub use document::DocumentWriter;
pub use parts::escape_xml;

use render_model::Theme;
use resume_model::{Language, ResumeData, TemplateId};
use std::io::{self, Cursor, Write};
use thiserror::Error;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

#[derive(Debug, Error)]
pub enum DocxError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

pub type Result<T> = std::result::Result<T, DocxError>;

/// Serialize the resume as a DOCX package.
pub fn export_docx(data: &ResumeData, template: TemplateId, language: Language) -> Result<Vec<u8>> {
    let theme = Theme::resolve(template, language);
    let document_xml = DocumentWriter::new(language).write(data);
    let styles_xml = parts::styles_xml(
        &theme.fonts.heading,
        &theme.fonts.body,
        &theme.primary.hex(),
    );

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    for (path, content) in [
        ("[Content_Types].xml", parts::content_types_xml()),
        ("_rels/.rels", parts::root_rels_xml()),
        ("word/_rels/document.xml.rels", parts::document_rels_xml()),
        ("word/document.xml", document_xml),
        ("word/styles.xml", styles_xml),
    ] {
        zip.start_file(path, options)?;
        zip.write_all(content.as_bytes())?;
    }

    Ok(zip.finish()?.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use zip::ZipArchive;

    fn read_part(bytes: &[u8], path: &str) -> String {
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut file = archive.by_name(path).unwrap();
        let mut content = String::new();
        file.read_to_string(&mut content).unwrap();
        content
    }

    #[test]
    fn test_package_contains_required_parts() {
        let data = ResumeData::with_name("Lina");
        let bytes = export_docx(&data, TemplateId::Modern, Language::En).unwrap();
        let archive = ZipArchive::new(Cursor::new(bytes.as_slice())).unwrap();
        let names: Vec<&str> = archive.file_names().collect();
        for required in [
            "[Content_Types].xml",
            "_rels/.rels",
            "word/_rels/document.xml.rels",
            "word/document.xml",
            "word/styles.xml",
        ] {
            assert!(names.contains(&required), "missing {required}");
        }
    }

    #[test]
    fn test_zip_magic_bytes() {
        let data = ResumeData::with_name("Lina");
        let bytes = export_docx(&data, TemplateId::Modern, Language::En).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_document_carries_name() {
        let data = ResumeData::with_name("Lina Haddad");
        let bytes = export_docx(&data, TemplateId::Modern, Language::En).unwrap();
        assert!(read_part(&bytes, "word/document.xml").contains("Lina Haddad"));
    }

    #[test]
    fn test_styles_use_arabic_fonts_for_arabic() {
        let data = ResumeData::with_name("Lina");
        let bytes = export_docx(&data, TemplateId::Modern, Language::Ar).unwrap();
        let styles = read_part(&bytes, "word/styles.xml");
        assert!(styles.contains("Amiri"));
        assert!(styles.contains("Cairo"));
    }
}
