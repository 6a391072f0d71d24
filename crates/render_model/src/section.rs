//! Typed sections of a rendered resume
//!
//! Items carry display-ready strings: date ranges are already joined, the
//! "current" flag already substituted with the localized "Present" label,
//! and absent optional fields already replaced by placeholder text where the
//! layout calls for it.

use crate::{Direction, Theme};
use resume_model::Language;
use serde::{Deserialize, Serialize};

/// Kind of contact line in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    Email,
    Phone,
    Location,
}

/// One header contact line. `is_placeholder` marks values substituted for
/// absent fields so serializers can style them dimmed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub kind: ContactKind,
    pub value: String,
    pub is_placeholder: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceItem {
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub date_range: String,
    pub description: String,
    pub description_is_placeholder: bool,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationItem {
    pub degree: String,
    pub institution: String,
    pub location: Option<String>,
    pub date_range: Option<String>,
    pub gpa: Option<String>,
    pub honors: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillItem {
    pub name: String,
    pub badge: String,
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificateItem {
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub credential_id: Option<String>,
}

/// A typed section in document order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Section {
    Header { name: String, contacts: Vec<Contact> },
    Summary { title: String, text: String, is_placeholder: bool },
    Experience { title: String, items: Vec<ExperienceItem> },
    Education { title: String, items: Vec<EducationItem> },
    Skills { title: String, items: Vec<SkillItem> },
    Certificates { title: String, items: Vec<CertificateItem> },
}

/// The canonical rendered resume consumed by the PDF and HTML serializers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedResume {
    pub language: Language,
    pub direction: Direction,
    pub theme: Theme,
    pub sections: Vec<Section>,
}

impl RenderedResume {
    /// The applicant name from the header section.
    pub fn name(&self) -> &str {
        self.sections
            .iter()
            .find_map(|s| match s {
                Section::Header { name, .. } => Some(name.as_str()),
                _ => None,
            })
            .unwrap_or_default()
    }
}
