//! Root resume aggregate
//!
//! `ResumeData` is created empty, mutated field-by-field by the editing UI,
//! and consumed read-only at export time. Serialized field names are the
//! camelCase names used by the persisted draft and the JSON export schema.

use crate::{Certificate, Education, Experience, Skill};
use serde::{Deserialize, Serialize};

/// Contact and headline information for the resume owner.
///
/// Only `name` is required; everything else is optional and rendered with
/// language-appropriate placeholders when absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

impl PersonalInfo {
    /// Whether at least one contact method (email or phone) is present.
    pub fn has_contact(&self) -> bool {
        self.email.as_deref().is_some_and(|e| !e.trim().is_empty())
            || self.phone.as_deref().is_some_and(|p| !p.trim().is_empty())
    }
}

/// The root resume aggregate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeData {
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub certificates: Vec<Certificate>,
}

impl ResumeData {
    /// Create an empty resume with just a name.
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            personal_info: PersonalInfo {
                name: name.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Whether every content section (experience, education, skills) is empty.
    pub fn has_no_content(&self) -> bool {
        self.experience.is_empty() && self.education.is_empty() && self.skills.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_field_names_are_camel_case() {
        let resume = ResumeData::with_name("Ahmed Ali");
        let json = serde_json::to_value(&resume).unwrap();
        assert!(json.get("personalInfo").is_some());
        assert_eq!(json["personalInfo"]["name"], "Ahmed Ali");
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let json = r#"{"personalInfo":{"name":"Sara"}}"#;
        let resume: ResumeData = serde_json::from_str(json).unwrap();
        assert!(resume.has_no_content());
        assert!(resume.certificates.is_empty());
    }

    #[test]
    fn test_has_contact() {
        let mut info = PersonalInfo {
            name: "X".to_string(),
            ..Default::default()
        };
        assert!(!info.has_contact());

        info.phone = Some("  ".to_string());
        assert!(!info.has_contact());

        info.email = Some("x@example.com".to_string());
        assert!(info.has_contact());
    }
}
