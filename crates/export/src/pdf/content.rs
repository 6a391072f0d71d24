//! PDF content stream builder
//!
//! Emits the text and graphics operators a resume page uses. Text is encoded
//! for the WinAnsi-encoded standard fonts; characters outside that range are
//! substituted so the stream stays viewable everywhere.

use super::objects::fmt_real;
use std::io::Write as _;

#[derive(Debug, Default)]
pub struct ContentStream {
    data: Vec<u8>,
}

impl ContentStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    pub fn save_state(&mut self) -> &mut Self {
        self.line("q");
        self
    }

    pub fn restore_state(&mut self) -> &mut Self {
        self.line("Q");
        self
    }

    pub fn begin_text(&mut self) -> &mut Self {
        self.line("BT");
        self
    }

    pub fn end_text(&mut self) -> &mut Self {
        self.line("ET");
        self
    }

    pub fn set_font(&mut self, name: &str, size: f64) -> &mut Self {
        let _ = writeln!(self.data, "/{name} {} Tf", fmt_real(size));
        self
    }

    /// Set the text matrix (Tm). Used for both placement and the rotated
    /// watermark.
    pub fn set_text_matrix(
        &mut self,
        a: f64,
        b: f64,
        c: f64,
        d: f64,
        e: f64,
        f: f64,
    ) -> &mut Self {
        let _ = writeln!(
            self.data,
            "{} {} {} {} {} {} Tm",
            fmt_real(a),
            fmt_real(b),
            fmt_real(c),
            fmt_real(d),
            fmt_real(e),
            fmt_real(f)
        );
        self
    }

    pub fn set_fill_rgb(&mut self, r: f64, g: f64, b: f64) -> &mut Self {
        let _ = writeln!(
            self.data,
            "{} {} {} rg",
            fmt_real(r),
            fmt_real(g),
            fmt_real(b)
        );
        self
    }

    pub fn set_stroke_rgb(&mut self, r: f64, g: f64, b: f64) -> &mut Self {
        let _ = writeln!(
            self.data,
            "{} {} {} RG",
            fmt_real(r),
            fmt_real(g),
            fmt_real(b)
        );
        self
    }

    pub fn set_line_width(&mut self, width: f64) -> &mut Self {
        let _ = writeln!(self.data, "{} w", fmt_real(width));
        self
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        let _ = writeln!(self.data, "{} {} m", fmt_real(x), fmt_real(y));
        self
    }

    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        let _ = writeln!(self.data, "{} {} l", fmt_real(x), fmt_real(y));
        self
    }

    pub fn stroke(&mut self) -> &mut Self {
        self.line("S");
        self
    }

    /// Show a text string (Tj), encoded to single-byte form.
    pub fn show_text(&mut self, text: &str) -> &mut Self {
        self.data.push(b'(');
        for c in text.chars() {
            let byte = encode_char(c);
            match byte {
                b'(' | b')' | b'\\' => {
                    self.data.push(b'\\');
                    self.data.push(byte);
                }
                0x20..=0x7E => self.data.push(byte),
                _ => {
                    let _ = write!(self.data, "\\{byte:03o}");
                }
            }
        }
        self.data.extend_from_slice(b") Tj\n");
        self
    }

    /// Show pre-shaped glyphs as a hex string. Used with the embedded
    /// Identity-H font, where each code is a glyph id.
    pub fn show_glyphs(&mut self, glyph_ids: &[u16]) -> &mut Self {
        self.data.push(b'<');
        for gid in glyph_ids {
            let _ = write!(self.data, "{gid:04X}");
        }
        self.data.extend_from_slice(b"> Tj\n");
        self
    }

    fn line(&mut self, s: &str) {
        self.data.extend_from_slice(s.as_bytes());
        self.data.push(b'\n');
    }
}

/// Map a char to a WinAnsi byte, substituting what has no slot.
fn encode_char(c: char) -> u8 {
    match c {
        '\u{2013}' => 0x96,
        '\u{2014}' => 0x97,
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201C}' => 0x93,
        '\u{201D}' => 0x94,
        '\u{2022}' => 0x95,
        c if (c as u32) <= 0xFF => c as u8,
        _ => b'?',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(stream: ContentStream) -> String {
        String::from_utf8(stream.into_bytes()).unwrap()
    }

    #[test]
    fn test_text_block_operators() {
        let mut cs = ContentStream::new();
        cs.begin_text()
            .set_font("F1", 12.0)
            .set_text_matrix(1.0, 0.0, 0.0, 1.0, 72.0, 720.0)
            .show_text("Hello")
            .end_text();
        let out = rendered(cs);
        assert!(out.contains("BT"));
        assert!(out.contains("/F1 12 Tf"));
        assert!(out.contains("1 0 0 1 72 720 Tm"));
        assert!(out.contains("(Hello) Tj"));
        assert!(out.contains("ET"));
    }

    #[test]
    fn test_show_text_escapes_and_encodes() {
        let mut cs = ContentStream::new();
        cs.show_text("a(b) \u{2013} caf\u{e9}");
        let out = rendered(cs);
        assert!(out.contains("\\(b\\)"));
        assert!(out.contains("\\226")); // en dash in WinAnsi
        assert!(out.contains("\\351")); // e acute
    }

    #[test]
    fn test_unmappable_char_is_substituted() {
        let mut cs = ContentStream::new();
        cs.show_text("\u{4e2d}");
        assert!(rendered(cs).contains("(?) Tj"));
    }

    #[test]
    fn test_show_glyphs_emits_hex_string() {
        let mut cs = ContentStream::new();
        cs.show_glyphs(&[0x0041, 0x1234, 0x000F]);
        assert!(rendered(cs).contains("<00411234000F> Tj"));
    }
}
