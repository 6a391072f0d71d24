//! Resume validation
//!
//! Pure function over the resume data: blocking errors, non-blocking quality
//! warnings, and the completeness score. The export orchestrator refuses to
//! serialize when `is_valid` is false and surfaces `errors` verbatim.

use crate::{completeness_score, Language, ResumeData};
use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Minimum summary length before a quality warning is raised.
const MIN_SUMMARY_LEN: usize = 50;
/// Minimum experience description length before a quality warning is raised.
const MIN_DESCRIPTION_LEN: usize = 30;
/// Minimum recommended number of skills.
const MIN_SKILLS: usize = 3;

/// Outcome of validating a resume.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub completeness: u8,
}

/// Loose phone pattern: an optional leading `+`, then at least seven digits
/// allowing spaces, hyphens, and parentheses. Deliberately permissive.
fn phone_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\+?[\d\s\-()]{7,20}$").expect("valid phone pattern"))
}

/// Pick the message for the requested language. `Both` reads English.
fn msg(language: Language, en: &str, ar: &str) -> String {
    match language {
        Language::Ar => ar.to_string(),
        Language::En | Language::Both => en.to_string(),
    }
}

/// Validate a resume for export.
///
/// Errors block export; warnings are quality suggestions and never block.
pub fn validate(resume: &ResumeData, language: Language) -> ValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let info = &resume.personal_info;

    if info.name.trim().is_empty() {
        errors.push(msg(language, "Name is required", "الاسم مطلوب"));
    }

    if !info.has_contact() {
        errors.push(msg(
            language,
            "At least one contact method (email or phone) is required",
            "مطلوب وسيلة تواصل واحدة على الأقل (بريد إلكتروني أو هاتف)",
        ));
    }

    if resume.has_no_content() {
        errors.push(msg(
            language,
            "Resume content is required: add experience, education, or skills",
            "محتوى السيرة الذاتية مطلوب: أضف خبرة أو تعليمًا أو مهارات",
        ));
    }

    for (i, exp) in resume.experience.iter().enumerate() {
        if !exp.is_structurally_complete() {
            errors.push(msg(
                language,
                &format!(
                    "Experience entry {} is missing a title, company, or start date",
                    i + 1
                ),
                &format!(
                    "خبرة رقم {} تفتقد المسمى الوظيفي أو الشركة أو تاريخ البدء",
                    i + 1
                ),
            ));
        }
        if exp
            .description
            .as_deref()
            .map_or(true, |d| d.trim().chars().count() < MIN_DESCRIPTION_LEN)
        {
            warnings.push(msg(
                language,
                &format!(
                    "Experience entry {} has a short description; aim for {} characters or more",
                    i + 1,
                    MIN_DESCRIPTION_LEN
                ),
                &format!("وصف الخبرة رقم {} قصير؛ يُفضل {} حرفًا أو أكثر", i + 1, MIN_DESCRIPTION_LEN),
            ));
        }
    }

    for (i, edu) in resume.education.iter().enumerate() {
        if !edu.is_structurally_complete() {
            errors.push(msg(
                language,
                &format!(
                    "Education entry {} is missing a degree or institution",
                    i + 1
                ),
                &format!("تعليم رقم {} يفتقد الدرجة العلمية أو المؤسسة", i + 1),
            ));
        }
    }

    match info.summary.as_deref() {
        Some(s) if s.trim().chars().count() >= MIN_SUMMARY_LEN => {}
        _ => warnings.push(msg(
            language,
            &format!("Add a professional summary of at least {} characters", MIN_SUMMARY_LEN),
            &format!("أضف ملخصًا مهنيًا من {} حرفًا على الأقل", MIN_SUMMARY_LEN),
        )),
    }

    if let Some(phone) = info.phone.as_deref() {
        if !phone.trim().is_empty() && !phone_pattern().is_match(phone.trim()) {
            warnings.push(msg(
                language,
                "Phone number format looks unusual",
                "تنسيق رقم الهاتف يبدو غير معتاد",
            ));
        }
    }

    if resume.skills.len() < MIN_SKILLS {
        warnings.push(msg(
            language,
            &format!("Add at least {} skills to strengthen your resume", MIN_SKILLS),
            &format!("أضف {} مهارات على الأقل لتقوية سيرتك الذاتية", MIN_SKILLS),
        ));
    }

    if info.location.as_deref().map_or(true, |l| l.trim().is_empty()) {
        warnings.push(msg(language, "Add your location", "أضف موقعك"));
    }

    if resume.certificates.is_empty() {
        warnings.push(msg(
            language,
            "Consider adding certificates",
            "فكر في إضافة شهادات",
        ));
    }

    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
        warnings,
        completeness: completeness_score(resume),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Experience, PersonalInfo};

    fn valid_resume() -> ResumeData {
        ResumeData {
            personal_info: PersonalInfo {
                name: "Sara".to_string(),
                email: Some("sara@x.com".to_string()),
                summary: Some("A".repeat(60)),
                ..Default::default()
            },
            experience: vec![Experience {
                title: "Dev".to_string(),
                company: "X".to_string(),
                start_date: "2020-01".to_string(),
                current: true,
                description: Some("Built the billing platform end to end.".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_resume_passes() {
        let result = validate(&valid_resume(), Language::En);
        assert!(result.is_valid, "errors: {:?}", result.errors);
        assert!(result.completeness >= 60);
    }

    #[test]
    fn test_missing_name_always_errors() {
        let mut resume = valid_resume();
        resume.personal_info.name = "  ".to_string();
        let result = validate(&resume, Language::En);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.contains("Name is required")));
    }

    #[test]
    fn test_name_only_resume_requires_content() {
        // Scenario: name present, every content section empty.
        let resume = ResumeData::with_name("Ahmed Ali");
        let result = validate(&resume, Language::En);
        assert!(!result.is_valid);
        assert!(result
            .errors
            .iter()
            .any(|e| e.contains("content is required")));
        // No contact method either.
        assert!(result.errors.iter().any(|e| e.contains("contact method")));
    }

    #[test]
    fn test_arabic_messages_for_arabic_language() {
        let resume = ResumeData::default();
        let result = validate(&resume, Language::Ar);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.contains("الاسم مطلوب")));
    }

    #[test]
    fn test_incomplete_experience_entry_errors() {
        let mut resume = valid_resume();
        resume.experience[0].company = String::new();
        let result = validate(&resume, Language::En);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.contains("Experience entry 1")));
    }

    #[test]
    fn test_incomplete_education_entry_errors() {
        let mut resume = valid_resume();
        resume.education.push(Default::default());
        let result = validate(&resume, Language::En);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.contains("Education entry 1")));
    }

    #[test]
    fn test_warnings_do_not_block() {
        let mut resume = valid_resume();
        resume.personal_info.phone = Some("call me maybe".to_string());
        resume.personal_info.summary = Some("short".to_string());
        let result = validate(&resume, Language::En);
        assert!(result.is_valid);
        assert!(result.warnings.iter().any(|w| w.contains("Phone number")));
        assert!(result.warnings.iter().any(|w| w.contains("summary")));
    }

    #[test]
    fn test_loose_phone_pattern_accepts_common_formats() {
        let mut resume = valid_resume();
        for phone in ["+20 100 555 0101", "(555) 123-4567", "01001234567"] {
            resume.personal_info.phone = Some(phone.to_string());
            let result = validate(&resume, Language::En);
            assert!(
                !result.warnings.iter().any(|w| w.contains("Phone number")),
                "rejected {phone}"
            );
        }
    }

    #[test]
    fn test_skill_and_certificate_warnings() {
        let result = validate(&valid_resume(), Language::En);
        assert!(result.warnings.iter().any(|w| w.contains("skills")));
        assert!(result.warnings.iter().any(|w| w.contains("certificates")));
        assert!(result.warnings.iter().any(|w| w.contains("location")));
    }
}
