//! Export languages
//!
//! The pipeline is bilingual Arabic/English. `Both` is accepted everywhere
//! but the PDF layout engine only handles a single direction per document,
//! so the PDF path degrades `Both` to `En`. That degradation is deliberate
//! product behavior; `effective_for_pdf` makes it explicit so callers can
//! surface it instead of discovering it in the output.

use crate::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Ar,
    #[default]
    En,
    Both,
}

impl Language {
    /// Language code used in export filenames and JSON metadata.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Ar => "ar",
            Language::En => "en",
            Language::Both => "both",
        }
    }

    /// Whether layouts for this language run right-to-left.
    /// `Both` lays out left-to-right with bilingual labels.
    pub fn is_rtl(&self) -> bool {
        matches!(self, Language::Ar)
    }

    /// The language the PDF path actually lays out. `Both` degrades to `En`.
    pub fn effective_for_pdf(&self) -> Language {
        match self {
            Language::Both => Language::En,
            other => *other,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ar" | "arabic" => Ok(Language::Ar),
            "en" | "english" => Ok(Language::En),
            "both" => Ok(Language::Both),
            other => Err(ModelError::UnknownLanguage(other.to_string())),
        }
    }
}
