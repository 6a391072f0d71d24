//! Text direction handling
//!
//! The document-level direction follows the export language (RTL for Arabic).
//! Individual strings inside an LTR document can still be RTL (an Arabic name
//! on an English resume); `detect_direction` classifies those per-string via
//! the Unicode Bidirectional Algorithm.

use resume_model::Language;
use serde::{Deserialize, Serialize};
use unicode_bidi::BidiInfo;

/// Horizontal layout direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    /// Base direction for an export language.
    pub fn for_language(language: Language) -> Self {
        if language.is_rtl() {
            Direction::Rtl
        } else {
            Direction::Ltr
        }
    }

    /// HTML `dir` attribute value.
    pub fn html_dir(&self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, Direction::Rtl)
    }
}

/// Detect the dominant direction of a single string.
///
/// Empty or direction-neutral text resolves to LTR.
pub fn detect_direction(text: &str) -> Direction {
    if text.is_empty() {
        return Direction::Ltr;
    }
    let info = BidiInfo::new(text, None);
    let has_rtl = info
        .paragraphs
        .iter()
        .any(|p| p.level.is_rtl());
    if has_rtl {
        Direction::Rtl
    } else {
        Direction::Ltr
    }
}
