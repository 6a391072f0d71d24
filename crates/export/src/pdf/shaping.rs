//! Arabic text shaping
//!
//! Shapes Arabic runs with rustybuzz so glyphs carry their joined forms and
//! correct advances. The shaper wraps a face parsed from the probed system
//! font; the writer embeds the same bytes, so glyph ids written to content
//! streams resolve against the embedded face.

use rustybuzz::ttf_parser::GlyphId;
use rustybuzz::{Face, UnicodeBuffer};

/// A shaped glyph with its advance in font units.
#[derive(Debug, Clone, Copy)]
pub struct ShapedGlyph {
    pub glyph_id: u16,
    pub x_advance: i32,
}

/// One shaped run of text.
#[derive(Debug, Clone)]
pub struct ShapedRun {
    pub glyphs: Vec<ShapedGlyph>,
    /// Total advance in points at the requested size.
    pub width: f64,
}

impl ShapedRun {
    pub fn glyph_ids(&self) -> Vec<u16> {
        self.glyphs.iter().map(|g| g.glyph_id).collect()
    }
}

/// Face metrics scaled to the PDF glyph space (1000 units per em).
#[derive(Debug, Clone, Copy)]
pub struct FaceMetrics {
    pub ascent: f64,
    pub descent: f64,
    pub cap_height: f64,
    pub bbox: [f64; 4],
}

/// Shaper over a single Arabic-capable face.
pub struct ArabicShaper<'a> {
    face: Face<'a>,
    data: &'a [u8],
    family: String,
    units_per_em: f64,
}

impl<'a> ArabicShaper<'a> {
    /// Parse the face at index 0. `None` when the data is not a usable font.
    pub fn new(family: &str, data: &'a [u8]) -> Option<Self> {
        let face = Face::from_slice(data, 0)?;
        let units_per_em = f64::from(face.units_per_em());
        Some(Self {
            face,
            data,
            family: family.to_string(),
            units_per_em,
        })
    }

    /// Raw face bytes for embedding.
    pub fn font_data(&self) -> &[u8] {
        self.data
    }

    /// BaseFont name for the font dictionaries.
    pub fn postscript_name(&self) -> String {
        self.family.split_whitespace().collect()
    }

    /// Shape a run. Direction and script are inferred from the text, so a
    /// Latin fragment inside an Arabic document keeps its LTR order.
    pub fn shape(&self, text: &str, size: f64) -> ShapedRun {
        let mut buffer = UnicodeBuffer::new();
        buffer.push_str(text);
        let output = rustybuzz::shape(&self.face, &[], buffer);

        let infos = output.glyph_infos();
        let positions = output.glyph_positions();

        let mut glyphs = Vec::with_capacity(infos.len());
        let mut total_advance = 0i64;
        for (info, pos) in infos.iter().zip(positions) {
            glyphs.push(ShapedGlyph {
                glyph_id: info.glyph_id as u16,
                x_advance: pos.x_advance,
            });
            total_advance += i64::from(pos.x_advance);
        }

        ShapedRun {
            glyphs,
            width: total_advance as f64 * size / self.units_per_em,
        }
    }

    pub fn text_width(&self, text: &str, size: f64) -> f64 {
        self.shape(text, size).width
    }

    /// Horizontal advance of one glyph in 1000-unit glyph space, for the
    /// CID width array.
    pub fn glyph_width(&self, glyph_id: u16) -> i64 {
        let advance = self
            .face
            .glyph_hor_advance(GlyphId(glyph_id))
            .unwrap_or(0);
        (f64::from(advance) * 1000.0 / self.units_per_em).round() as i64
    }

    pub fn metrics(&self) -> FaceMetrics {
        let scale = 1000.0 / self.units_per_em;
        let ascent = f64::from(self.face.ascender()) * scale;
        let bbox = self.face.global_bounding_box();
        FaceMetrics {
            ascent,
            descent: f64::from(self.face.descender()) * scale,
            cap_height: self
                .face
                .capital_height()
                .map_or(ascent, |h| f64::from(h) * scale),
            bbox: [
                f64::from(bbox.x_min) * scale,
                f64::from(bbox.y_min) * scale,
                f64::from(bbox.x_max) * scale,
                f64::from(bbox.y_max) * scale,
            ],
        }
    }
}

impl std::fmt::Debug for ArabicShaper<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArabicShaper")
            .field("family", &self.family)
            .field("units_per_em", &self.units_per_em)
            .finish()
    }
}

/// Whether a string needs the embedded Arabic face.
pub fn contains_arabic(text: &str) -> bool {
    text.chars().any(|c| {
        matches!(c,
            '\u{0600}'..='\u{06FF}'
                | '\u{0750}'..='\u{077F}'
                | '\u{08A0}'..='\u{08FF}'
                | '\u{FB50}'..='\u{FDFF}'
                | '\u{FE70}'..='\u{FEFF}'
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_arabic() {
        assert!(contains_arabic("أحمد"));
        assert!(contains_arabic("Ahmed أحمد"));
        assert!(!contains_arabic("Ahmed Ali"));
        assert!(!contains_arabic(""));
    }

    #[test]
    fn test_rejects_non_font_data() {
        assert!(ArabicShaper::new("Amiri", b"not a font").is_none());
    }
}
