//! JSON export envelope
//!
//! Wraps the resume data in a metadata envelope so a consumer can tell when
//! and how the file was produced without parsing the payload.

use chrono::Utc;
use resume_model::{Language, ResumeData, TemplateId};
use serde::{Deserialize, Serialize};

use crate::error::{ExportError, Result};

/// Envelope schema version. Bump when the envelope shape changes.
const ENVELOPE_VERSION: &str = "1.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportMetadata {
    pub exported_at: String,
    pub language: Language,
    pub template: TemplateId,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonEnvelope {
    pub metadata: ExportMetadata,
    pub resume_data: ResumeData,
}

/// Serialize the resume into the versioned envelope.
///
/// Works on any resume, complete or not; the data is exported exactly as
/// given.
pub fn export_json(
    data: &ResumeData,
    template: TemplateId,
    language: Language,
) -> Result<Vec<u8>> {
    let envelope = JsonEnvelope {
        metadata: ExportMetadata {
            exported_at: Utc::now().to_rfc3339(),
            language,
            template,
            version: ENVELOPE_VERSION.to_string(),
        },
        resume_data: data.clone(),
    };
    serde_json::to_vec_pretty(&envelope)
        .map_err(|e| ExportError::serialization(language, &e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_version_and_payload() {
        let data = ResumeData::with_name("Lina");
        let bytes = export_json(&data, TemplateId::Modern, Language::En).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["metadata"]["version"], "1.0");
        assert_eq!(value["metadata"]["language"], "en");
        assert_eq!(value["resumeData"]["personalInfo"]["name"], "Lina");
    }

    #[test]
    fn test_envelope_round_trips() {
        let data = ResumeData::with_name("Omar");
        let bytes = export_json(&data, TemplateId::Classic, Language::Ar).unwrap();
        let envelope: JsonEnvelope = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(envelope.resume_data.personal_info.name, "Omar");
        assert_eq!(envelope.metadata.template, TemplateId::Classic);
    }

    #[test]
    fn test_round_trip_preserves_every_section() {
        use resume_model::{Certificate, Education, Experience, Skill, SkillLevel};

        let mut data = ResumeData::with_name("Omar Khalil");
        data.personal_info.email = Some("omar@example.com".to_string());
        data.personal_info.summary = Some("Compositor and toolsmith.".to_string());
        data.experience.push(Experience {
            title: "Typesetter".to_string(),
            company: "Dar al-Kutub".to_string(),
            start_date: "2018-02".to_string(),
            end_date: Some("2021-09".to_string()),
            description: Some("Maintained the bilingual catalogue.".to_string()),
            achievements: vec!["Digitized 12k records".to_string()],
            ..Default::default()
        });
        data.education.push(Education {
            degree: "BA Linguistics".to_string(),
            institution: "Alexandria University".to_string(),
            gpa: Some("3.7".to_string()),
            ..Default::default()
        });
        data.skills.push(Skill {
            name: "InDesign".to_string(),
            level: SkillLevel::Advanced,
            category: Some("Tools".to_string()),
        });
        data.certificates.push(Certificate {
            name: "TLS Typography".to_string(),
            issuer: "TLS".to_string(),
            date: "2020-01".to_string(),
            ..Default::default()
        });

        let bytes = export_json(&data, TemplateId::Modern, Language::En).unwrap();
        let envelope: JsonEnvelope = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(envelope.resume_data, data);
    }

    #[test]
    fn test_empty_resume_still_exports() {
        let data = ResumeData::default();
        assert!(export_json(&data, TemplateId::Minimal, Language::En).is_ok());
    }
}
