//! PDF file assembly
//!
//! Writes header, body objects, cross-reference table, and trailer. Content
//! streams are flate-compressed unless compression is turned off for print
//! workflows that prefer inspectable output. Documents with Arabic runs
//! embed the probed TrueType face as an Identity-H composite font and draw
//! those runs as shaped glyph ids.

use super::content::ContentStream;
use super::fonts::{standard_font_dict, StandardFont};
use super::layout::{LineFont, Page, PageItem, PAGE_HEIGHT, PAGE_WIDTH};
use super::objects::{Dictionary, Object, Stream};
use super::shaping::ArabicShaper;
use std::collections::BTreeMap;
use std::io::{self, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid document: {0}")]
    InvalidDocument(String),
    #[error("Font unavailable: {0}")]
    FontUnavailable(String),
}

pub type Result<T> = std::result::Result<T, PdfError>;

/// Resource name of the embedded Arabic face.
const ARABIC_FONT_RESOURCE: &str = "FA";

/// Document-level settings for a PDF write.
#[derive(Debug, Clone)]
pub struct PdfMeta {
    pub title: String,
    pub watermark: Option<String>,
    pub compress: bool,
    pub page_width: f64,
    pub page_height: f64,
}

impl Default for PdfMeta {
    fn default() -> Self {
        Self {
            title: String::new(),
            watermark: None,
            compress: true,
            page_width: PAGE_WIDTH,
            page_height: PAGE_HEIGHT,
        }
    }
}

struct ObjectEntry {
    obj_num: u32,
    offset: u64,
}

/// Low-level writer tracking byte offsets for the xref table.
struct PdfFileWriter {
    out: Vec<u8>,
    objects: Vec<ObjectEntry>,
    next_obj_num: u32,
    compress: bool,
}

impl PdfFileWriter {
    fn new(compress: bool) -> Self {
        Self {
            out: Vec::new(),
            objects: Vec::new(),
            next_obj_num: 1,
            compress,
        }
    }

    fn allocate(&mut self) -> u32 {
        let num = self.next_obj_num;
        self.next_obj_num += 1;
        num
    }

    fn write_header(&mut self) {
        self.out.extend_from_slice(b"%PDF-1.4\n");
        // binary marker so transports treat the file as binary
        self.out.extend_from_slice(&[b'%', 0xE2, 0xE3, 0xCF, 0xD3, b'\n']);
    }

    fn write_object(&mut self, obj_num: u32, object: Object) {
        self.objects.push(ObjectEntry {
            obj_num,
            offset: self.out.len() as u64,
        });
        let _ = write!(self.out, "{obj_num} 0 obj\n");
        object.write(&mut self.out);
        self.out.extend_from_slice(b"\nendobj\n");
    }

    fn write_stream(&mut self, obj_num: u32, mut stream: Stream) -> Result<()> {
        if self.compress {
            stream.data = flate_compress(&stream.data)?;
            stream.dict.set("Filter", Object::name("FlateDecode"));
        }
        self.write_object(obj_num, Object::Stream(stream));
        Ok(())
    }

    fn write_content_stream(&mut self, obj_num: u32, data: Vec<u8>) -> Result<()> {
        self.write_stream(obj_num, Stream::new(data))
    }

    fn write_xref_and_trailer(&mut self, catalog_ref: u32, info_ref: u32) {
        let xref_offset = self.out.len() as u64;
        self.objects.sort_by_key(|e| e.obj_num);

        let _ = write!(self.out, "xref\n0 {}\n", self.next_obj_num);
        self.out.extend_from_slice(b"0000000000 65535 f \n");
        for entry in &self.objects {
            let _ = write!(self.out, "{:010} 00000 n \n", entry.offset);
        }

        self.out.extend_from_slice(b"trailer\n");
        let mut trailer = Dictionary::new();
        trailer.set("Size", Object::Integer(self.next_obj_num as i64));
        trailer.set("Root", Object::Reference(catalog_ref));
        trailer.set("Info", Object::Reference(info_ref));
        trailer.write(&mut self.out);
        let _ = write!(self.out, "\nstartxref\n{xref_offset}\n%%EOF\n");
    }
}

fn flate_compress(data: &[u8]) -> Result<Vec<u8>> {
    use flate2::write::ZlibEncoder;
    use flate2::Compression;

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}

/// Font resource slot assigned per standard face used by the document.
fn collect_fonts(pages: &[Page]) -> Vec<StandardFont> {
    let mut fonts = Vec::new();
    for page in pages {
        for item in &page.items {
            if let PageItem::Text(line) = item {
                if let LineFont::Standard(font) = line.font {
                    if !fonts.contains(&font) {
                        fonts.push(font);
                    }
                }
            }
        }
    }
    if fonts.is_empty() {
        fonts.push(StandardFont::Helvetica);
    }
    // watermark face
    if !fonts.contains(&StandardFont::HelveticaBold) {
        fonts.push(StandardFont::HelveticaBold);
    }
    fonts
}

fn uses_embedded_font(pages: &[Page]) -> bool {
    pages.iter().any(|page| {
        page.items.iter().any(|item| {
            matches!(item, PageItem::Text(line) if line.font == LineFont::Arabic)
        })
    })
}

/// Glyph widths (1000-unit space) for every glyph the document shapes, keyed
/// by glyph id for the CID width array.
fn collect_glyph_widths(pages: &[Page], shaper: &ArabicShaper<'_>) -> BTreeMap<u16, i64> {
    let mut widths = BTreeMap::new();
    for page in pages {
        for item in &page.items {
            if let PageItem::Text(line) = item {
                if line.font == LineFont::Arabic {
                    for glyph in shaper.shape(&line.text, line.size).glyphs {
                        widths
                            .entry(glyph.glyph_id)
                            .or_insert_with(|| shaper.glyph_width(glyph.glyph_id));
                    }
                }
            }
        }
    }
    widths
}

fn font_resource_name(fonts: &[StandardFont], font: StandardFont) -> String {
    let index = fonts.iter().position(|&f| f == font).unwrap_or(0);
    format!("F{}", index + 1)
}

/// Write the Type0/CIDFontType2/descriptor/file chain for the embedded face.
fn write_embedded_font(
    pdf: &mut PdfFileWriter,
    shaper: &ArabicShaper<'_>,
    widths: &BTreeMap<u16, i64>,
    type0_ref: u32,
    cid_ref: u32,
    descriptor_ref: u32,
    file_ref: u32,
) -> Result<()> {
    let base_name = shaper.postscript_name();
    let metrics = shaper.metrics();

    let mut type0 = Dictionary::with_type("Font");
    type0.set("Subtype", Object::name("Type0"));
    type0.set("BaseFont", Object::name(base_name.clone()));
    type0.set("Encoding", Object::name("Identity-H"));
    type0.set(
        "DescendantFonts",
        Object::Array(vec![Object::Reference(cid_ref)]),
    );
    pdf.write_object(type0_ref, Object::Dictionary(type0));

    let mut system_info = Dictionary::new();
    system_info.set("Registry", Object::text("Adobe"));
    system_info.set("Ordering", Object::text("Identity"));
    system_info.set("Supplement", Object::Integer(0));

    let mut w = Vec::with_capacity(widths.len() * 2);
    for (&gid, &width) in widths {
        w.push(Object::Integer(i64::from(gid)));
        w.push(Object::Array(vec![Object::Integer(width)]));
    }

    let mut cid = Dictionary::with_type("Font");
    cid.set("Subtype", Object::name("CIDFontType2"));
    cid.set("BaseFont", Object::name(base_name.clone()));
    cid.set("CIDSystemInfo", Object::Dictionary(system_info));
    cid.set("FontDescriptor", Object::Reference(descriptor_ref));
    cid.set("CIDToGIDMap", Object::name("Identity"));
    cid.set("DW", Object::Integer(1000));
    cid.set("W", Object::Array(w));
    pdf.write_object(cid_ref, Object::Dictionary(cid));

    let mut descriptor = Dictionary::with_type("FontDescriptor");
    descriptor.set("FontName", Object::name(base_name));
    descriptor.set("Flags", Object::Integer(4));
    descriptor.set(
        "FontBBox",
        Object::Array(metrics.bbox.iter().map(|&v| Object::Real(v)).collect()),
    );
    descriptor.set("ItalicAngle", Object::Integer(0));
    descriptor.set("Ascent", Object::Real(metrics.ascent));
    descriptor.set("Descent", Object::Real(metrics.descent));
    descriptor.set("CapHeight", Object::Real(metrics.cap_height));
    descriptor.set("StemV", Object::Integer(80));
    descriptor.set("FontFile2", Object::Reference(file_ref));
    pdf.write_object(descriptor_ref, Object::Dictionary(descriptor));

    let data = shaper.font_data().to_vec();
    let mut stream = Stream::new(data);
    stream
        .dict
        .set("Length1", Object::Integer(shaper.font_data().len() as i64));
    pdf.write_stream(file_ref, stream)
}

fn render_page(
    page: &Page,
    fonts: &[StandardFont],
    meta: &PdfMeta,
    arabic: Option<&ArabicShaper<'_>>,
) -> Vec<u8> {
    let mut cs = ContentStream::new();

    for item in &page.items {
        match item {
            PageItem::Text(line) => {
                let (r, g, b) = line.color.normalized();
                match line.font {
                    LineFont::Standard(font) => {
                        cs.begin_text()
                            .set_font(&font_resource_name(fonts, font), line.size)
                            .set_fill_rgb(r, g, b)
                            .set_text_matrix(1.0, 0.0, 0.0, 1.0, line.x, line.y)
                            .show_text(&line.text)
                            .end_text();
                    }
                    LineFont::Arabic => {
                        // write_pdf rejects Arabic lines without a shaper
                        let Some(shaper) = arabic else { continue };
                        let run = shaper.shape(&line.text, line.size);
                        cs.begin_text()
                            .set_font(ARABIC_FONT_RESOURCE, line.size)
                            .set_fill_rgb(r, g, b)
                            .set_text_matrix(1.0, 0.0, 0.0, 1.0, line.x, line.y)
                            .show_glyphs(&run.glyph_ids())
                            .end_text();
                    }
                }
            }
            PageItem::Rule(rule) => {
                let (r, g, b) = rule.color.normalized();
                cs.save_state()
                    .set_stroke_rgb(r, g, b)
                    .set_line_width(1.0)
                    .move_to(rule.x1, rule.y)
                    .line_to(rule.x2, rule.y)
                    .stroke()
                    .restore_state();
            }
        }
    }

    if let Some(text) = &meta.watermark {
        draw_watermark(&mut cs, text, fonts, meta);
    }

    cs.into_bytes()
}

/// Diagonal gray watermark across the page center.
fn draw_watermark(cs: &mut ContentStream, text: &str, fonts: &[StandardFont], meta: &PdfMeta) {
    let size = 48.0;
    let face = StandardFont::HelveticaBold;
    let width = face.text_width(text, size);
    // rotate 45 degrees around the page center
    let (sin, cos) = (std::f64::consts::FRAC_1_SQRT_2, std::f64::consts::FRAC_1_SQRT_2);
    let cx = meta.page_width / 2.0 - width / 2.0 * cos;
    let cy = meta.page_height / 2.0 - width / 2.0 * sin;

    cs.save_state()
        .begin_text()
        .set_font(&font_resource_name(fonts, face), size)
        .set_fill_rgb(0.85, 0.85, 0.85)
        .set_text_matrix(cos, sin, -sin, cos, cx, cy)
        .show_text(text)
        .end_text()
        .restore_state();
}

/// Assemble the laid-out pages into a complete PDF file.
///
/// Pages carrying Arabic runs require `arabic`; refusing to write them
/// otherwise keeps shaped text from silently degrading to substitutions.
pub fn write_pdf(
    pages: &[Page],
    meta: &PdfMeta,
    arabic: Option<&ArabicShaper<'_>>,
) -> Result<Vec<u8>> {
    if pages.is_empty() {
        return Err(PdfError::InvalidDocument("no pages to write".to_string()));
    }
    if meta.page_width <= 0.0 || meta.page_height <= 0.0 {
        return Err(PdfError::InvalidDocument(format!(
            "page dimensions must be positive, got {}x{}",
            meta.page_width, meta.page_height
        )));
    }
    let needs_embedded = uses_embedded_font(pages);
    if needs_embedded && arabic.is_none() {
        return Err(PdfError::FontUnavailable(
            "document has Arabic runs but no embeddable face".to_string(),
        ));
    }

    let fonts = collect_fonts(pages);
    let mut pdf = PdfFileWriter::new(meta.compress);
    pdf.write_header();

    let catalog_ref = pdf.allocate();
    let pages_ref = pdf.allocate();
    let info_ref = pdf.allocate();
    let font_refs: Vec<u32> = fonts.iter().map(|_| pdf.allocate()).collect();
    let embedded_refs = if needs_embedded {
        Some((pdf.allocate(), pdf.allocate(), pdf.allocate(), pdf.allocate()))
    } else {
        None
    };
    let page_refs: Vec<u32> = pages.iter().map(|_| pdf.allocate()).collect();
    let content_refs: Vec<u32> = pages.iter().map(|_| pdf.allocate()).collect();

    let mut catalog = Dictionary::with_type("Catalog");
    catalog.set("Pages", Object::Reference(pages_ref));
    pdf.write_object(catalog_ref, Object::Dictionary(catalog));

    let mut pages_dict = Dictionary::with_type("Pages");
    pages_dict.set(
        "Kids",
        Object::Array(page_refs.iter().map(|&r| Object::Reference(r)).collect()),
    );
    pages_dict.set("Count", Object::Integer(page_refs.len() as i64));
    pdf.write_object(pages_ref, Object::Dictionary(pages_dict));

    let mut info = Dictionary::new();
    info.set("Title", Object::text(&meta.title));
    info.set("Producer", Object::text("sira-export"));
    pdf.write_object(info_ref, Object::Dictionary(info));

    for (&font, &font_ref) in fonts.iter().zip(&font_refs) {
        pdf.write_object(font_ref, Object::Dictionary(standard_font_dict(font)));
    }

    if let (Some((type0_ref, cid_ref, descriptor_ref, file_ref)), Some(shaper)) =
        (embedded_refs, arabic)
    {
        let widths = collect_glyph_widths(pages, shaper);
        write_embedded_font(
            &mut pdf, shaper, &widths, type0_ref, cid_ref, descriptor_ref, file_ref,
        )?;
    }

    let mut resources = Dictionary::new();
    let mut font_dict = Dictionary::new();
    for (&font, &font_ref) in fonts.iter().zip(&font_refs) {
        font_dict.set(font_resource_name(&fonts, font), Object::Reference(font_ref));
    }
    if let Some((type0_ref, ..)) = embedded_refs {
        font_dict.set(ARABIC_FONT_RESOURCE, Object::Reference(type0_ref));
    }
    resources.set("Font", Object::Dictionary(font_dict));
    resources.set(
        "ProcSet",
        Object::Array(vec![Object::name("PDF"), Object::name("Text")]),
    );

    for ((page, &page_ref), &content_ref) in pages.iter().zip(&page_refs).zip(&content_refs) {
        pdf.write_content_stream(content_ref, render_page(page, &fonts, meta, arabic))?;

        let mut page_dict = Dictionary::with_type("Page");
        page_dict.set("Parent", Object::Reference(pages_ref));
        page_dict.set(
            "MediaBox",
            Object::Array(vec![
                Object::Real(0.0),
                Object::Real(0.0),
                Object::Real(meta.page_width),
                Object::Real(meta.page_height),
            ]),
        );
        page_dict.set("Contents", Object::Reference(content_ref));
        page_dict.set("Resources", Object::Dictionary(resources.clone()));
        pdf.write_object(page_ref, Object::Dictionary(page_dict));
    }

    pdf.write_xref_and_trailer(catalog_ref, info_ref);
    Ok(pdf.out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::layout::{paginate, TextLine};
    use render_model::{render, Color};
    use resume_model::{Language, ResumeData, TemplateId};

    fn test_pages() -> Vec<Page> {
        let data = ResumeData::with_name("Lina Haddad");
        let rendered = render(&data, TemplateId::Modern, Language::En);
        paginate(&rendered, None)
    }

    #[test]
    fn test_pdf_structure() {
        let bytes = write_pdf(&test_pages(), &PdfMeta::default(), None).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.4"));
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/Type /Catalog"));
        assert!(text.contains("/Type /Pages"));
        assert!(text.contains("/Type /Page"));
        assert!(text.contains("xref"));
        assert!(text.contains("trailer"));
        assert!(text.ends_with("%%EOF\n"));
    }

    #[test]
    fn test_uncompressed_stream_is_readable() {
        let meta = PdfMeta {
            compress: false,
            ..Default::default()
        };
        let bytes = write_pdf(&test_pages(), &meta, None).unwrap();
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("BT"));
        assert!(text.contains("Lina Haddad"));
        assert!(!text.contains("FlateDecode"));
    }

    #[test]
    fn test_compressed_stream_hides_text() {
        let bytes = write_pdf(&test_pages(), &PdfMeta::default(), None).unwrap();
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("FlateDecode"));
        assert!(!text.contains("Lina Haddad"));
    }

    #[test]
    fn test_watermark_on_every_page() {
        let meta = PdfMeta {
            watermark: Some("DRAFT".to_string()),
            compress: false,
            ..Default::default()
        };
        let bytes = write_pdf(&test_pages(), &meta, None).unwrap();
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("DRAFT"));
    }

    #[test]
    fn test_empty_pages_rejected() {
        assert!(matches!(
            write_pdf(&[], &PdfMeta::default(), None),
            Err(PdfError::InvalidDocument(_))
        ));
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let meta = PdfMeta {
            page_width: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            write_pdf(&test_pages(), &meta, None),
            Err(PdfError::InvalidDocument(_))
        ));
    }

    #[test]
    fn test_arabic_lines_require_an_embeddable_face() {
        let line = TextLine {
            text: "\u{623}\u{62d}\u{645}\u{62f}".to_string(),
            x: 48.0,
            y: 700.0,
            font: LineFont::Arabic,
            size: 12.0,
            color: Color::BLACK,
        };
        let pages = vec![Page {
            items: vec![PageItem::Text(line)],
        }];
        assert!(matches!(
            write_pdf(&pages, &PdfMeta::default(), None),
            Err(PdfError::FontUnavailable(_))
        ));
    }

    #[test]
    fn test_title_in_info_dictionary() {
        let meta = PdfMeta {
            title: "Resume - Lina".to_string(),
            ..Default::default()
        };
        let bytes = write_pdf(&test_pages(), &meta, None).unwrap();
        assert!(String::from_utf8_lossy(&bytes).contains("Resume - Lina"));
    }
}
