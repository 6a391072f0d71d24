//! Standard-14 font selection
//!
//! The text-layout PDF path uses the viewer-builtin fonts. Theme families
//! map onto the closest standard face; the probed Arabic families have no
//! standard-14 counterpart, so Arabic themes land on the sans faces.

use super::objects::{Dictionary, Object};

/// The standard faces the resume layout uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
    TimesRoman,
    TimesBold,
}

impl StandardFont {
    pub fn pdf_name(self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
            StandardFont::TimesRoman => "Times-Roman",
            StandardFont::TimesBold => "Times-Bold",
        }
    }

    /// Resolve a theme family to a standard face.
    pub fn from_family(family: &str, bold: bool) -> Self {
        let lower = family.to_lowercase();
        let serif = lower.contains("times") || lower.contains("georgia") || lower.contains("serif");
        match (serif, bold) {
            (true, false) => StandardFont::TimesRoman,
            (true, true) => StandardFont::TimesBold,
            (false, false) => StandardFont::Helvetica,
            (false, true) => StandardFont::HelveticaBold,
        }
    }

    /// Approximate advance width of a char in 1/1000 em. Standard-14 metrics
    /// are not shipped; these averages are close enough for line wrapping.
    pub fn char_width(self, c: char) -> f64 {
        let narrow = matches!(c, 'i' | 'l' | 'j' | 't' | 'f' | 'I' | '.' | ',' | ':' | ';' | '\'' | '|' | '!');
        let wide = matches!(c, 'm' | 'w' | 'M' | 'W' | '@');
        match (self, narrow, wide) {
            (_, true, _) => 300.0,
            (_, _, true) => 850.0,
            (StandardFont::Helvetica | StandardFont::HelveticaBold, _, _) => 556.0,
            (StandardFont::TimesRoman | StandardFont::TimesBold, _, _) => 500.0,
        }
    }

    /// Width of a string at a font size, in points.
    pub fn text_width(self, text: &str, size: f64) -> f64 {
        text.chars().map(|c| self.char_width(c)).sum::<f64>() * size / 1000.0
    }
}

/// Build the font dictionary for a standard face.
pub fn standard_font_dict(font: StandardFont) -> Dictionary {
    let mut dict = Dictionary::with_type("Font");
    dict.set("Subtype", Object::name("Type1"));
    dict.set("BaseFont", Object::name(font.pdf_name()));
    dict.set("Encoding", Object::name("WinAnsiEncoding"));
    dict
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_resolution() {
        assert_eq!(
            StandardFont::from_family("Georgia", false),
            StandardFont::TimesRoman
        );
        assert_eq!(
            StandardFont::from_family("Helvetica", true),
            StandardFont::HelveticaBold
        );
        assert_eq!(
            StandardFont::from_family("Amiri", false),
            StandardFont::Helvetica
        );
    }

    #[test]
    fn test_text_width_scales_with_size() {
        let font = StandardFont::Helvetica;
        let small = font.text_width("resume", 10.0);
        let large = font.text_width("resume", 20.0);
        assert!((large - small * 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_font_dict_shape() {
        let dict = standard_font_dict(StandardFont::TimesBold);
        let mut out = Vec::new();
        dict.write(&mut out);
        let s = String::from_utf8(out).unwrap();
        assert!(s.contains("/BaseFont /Times-Bold"));
        assert!(s.contains("/Encoding /WinAnsiEncoding"));
    }
}
