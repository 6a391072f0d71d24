//! Template themes
//!
//! Each template id selects a color palette and a font pairing, independent
//! of the resume data. The Arabic pairing differs from the Latin pairing so
//! Arabic text gets a family with full glyph coverage.

use resume_model::{Language, TemplateId};
use serde::{Deserialize, Serialize};

/// An RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS hex notation, e.g. `#1f6f8b`.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Components normalized to 0.0..=1.0 (PDF color operators).
    pub fn normalized(&self) -> (f64, f64, f64) {
        (
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        )
    }
}

/// Font pairing for headings and body text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontPairing {
    pub heading: String,
    pub body: String,
}

/// Visual preset resolved from a template id and language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub template: TemplateId,
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub fonts: FontPairing,
}

impl Theme {
    /// Resolve the theme for a template and language.
    pub fn resolve(template: TemplateId, language: Language) -> Self {
        let (primary, secondary, accent) = match template {
            TemplateId::Modern => (
                Color::rgb(0x1f, 0x6f, 0x8b),
                Color::rgb(0x39, 0x3e, 0x46),
                Color::rgb(0xf2, 0xa3, 0x65),
            ),
            TemplateId::Classic => (
                Color::rgb(0x2c, 0x3e, 0x50),
                Color::rgb(0x55, 0x5b, 0x6e),
                Color::rgb(0x8e, 0x44, 0xad),
            ),
            TemplateId::Minimal => (
                Color::rgb(0x21, 0x21, 0x21),
                Color::rgb(0x61, 0x61, 0x61),
                Color::rgb(0x00, 0x89, 0x7b),
            ),
        };

        let fonts = if language.is_rtl() {
            FontPairing {
                heading: "Cairo".to_string(),
                body: "Amiri".to_string(),
            }
        } else {
            match template {
                TemplateId::Classic => FontPairing {
                    heading: "Georgia".to_string(),
                    body: "Times New Roman".to_string(),
                },
                _ => FontPairing {
                    heading: "Helvetica".to_string(),
                    body: "Arial".to_string(),
                },
            }
        };

        Self {
            template,
            primary,
            secondary,
            accent,
            fonts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_hex() {
        assert_eq!(Color::rgb(0x1f, 0x6f, 0x8b).hex(), "#1f6f8b");
        assert_eq!(Color::BLACK.hex(), "#000000");
    }

    #[test]
    fn test_color_normalized() {
        let (r, g, b) = Color::WHITE.normalized();
        assert_eq!((r, g, b), (1.0, 1.0, 1.0));
    }

    #[test]
    fn test_arabic_gets_arabic_font_pairing() {
        let theme = Theme::resolve(TemplateId::Modern, Language::Ar);
        assert_eq!(theme.fonts.body, "Amiri");

        let theme = Theme::resolve(TemplateId::Modern, Language::En);
        assert_eq!(theme.fonts.body, "Arial");
    }

    #[test]
    fn test_templates_differ_in_palette() {
        let modern = Theme::resolve(TemplateId::Modern, Language::En);
        let classic = Theme::resolve(TemplateId::Classic, Language::En);
        assert_ne!(modern.primary, classic.primary);
    }
}
