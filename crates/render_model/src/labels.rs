//! Bilingual labels and placeholder text
//!
//! Section titles, the "Present" end-date substitute, skill-level badges,
//! and the placeholder strings shown for absent optional fields. The `Both`
//! language combines both dictionaries in section titles so a single layout
//! can serve bilingual previews.

use resume_model::{Language, SkillLevel};

/// Display strings for one export language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub summary_title: String,
    pub experience_title: String,
    pub education_title: String,
    pub skills_title: String,
    pub certificates_title: String,
    pub present: String,
    pub email_placeholder: String,
    pub phone_placeholder: String,
    pub location_placeholder: String,
    pub summary_placeholder: String,
    pub description_placeholder: String,
}

const EN: (&str, &str, &str, &str, &str, &str) = (
    "Summary",
    "Experience",
    "Education",
    "Skills",
    "Certificates",
    "Present",
);
const AR: (&str, &str, &str, &str, &str, &str) = (
    "الملخص",
    "الخبرات",
    "التعليم",
    "المهارات",
    "الشهادات",
    "حتى الآن",
);

impl Labels {
    /// Resolve the label set for a language.
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::En => Self::english(),
            Language::Ar => Self::arabic(),
            Language::Both => Self::bilingual(),
        }
    }

    fn english() -> Self {
        Self {
            summary_title: EN.0.to_string(),
            experience_title: EN.1.to_string(),
            education_title: EN.2.to_string(),
            skills_title: EN.3.to_string(),
            certificates_title: EN.4.to_string(),
            present: EN.5.to_string(),
            email_placeholder: "email@example.com".to_string(),
            phone_placeholder: "+0 000 000 0000".to_string(),
            location_placeholder: "City, Country".to_string(),
            summary_placeholder: "A short professional summary goes here.".to_string(),
            description_placeholder: "Describe your role and impact.".to_string(),
        }
    }

    fn arabic() -> Self {
        Self {
            summary_title: AR.0.to_string(),
            experience_title: AR.1.to_string(),
            education_title: AR.2.to_string(),
            skills_title: AR.3.to_string(),
            certificates_title: AR.4.to_string(),
            present: AR.5.to_string(),
            email_placeholder: "email@example.com".to_string(),
            phone_placeholder: "+0 000 000 0000".to_string(),
            location_placeholder: "المدينة، الدولة".to_string(),
            summary_placeholder: "اكتب ملخصًا مهنيًا قصيرًا هنا.".to_string(),
            description_placeholder: "صِف دورك وأثرك في العمل.".to_string(),
        }
    }

    /// Bilingual titles ("Experience / الخبرات") over English placeholders.
    fn bilingual() -> Self {
        let en = Self::english();
        Self {
            summary_title: format!("{} / {}", EN.0, AR.0),
            experience_title: format!("{} / {}", EN.1, AR.1),
            education_title: format!("{} / {}", EN.2, AR.2),
            skills_title: format!("{} / {}", EN.3, AR.3),
            certificates_title: format!("{} / {}", EN.4, AR.4),
            present: EN.5.to_string(),
            ..en
        }
    }

    /// Badge text for a skill level.
    pub fn skill_badge(&self, level: SkillLevel, language: Language) -> String {
        match language {
            Language::Ar => match level {
                SkillLevel::Beginner => "مبتدئ",
                SkillLevel::Intermediate => "متوسط",
                SkillLevel::Advanced => "متقدم",
                SkillLevel::Expert => "خبير",
            },
            Language::En | Language::Both => match level {
                SkillLevel::Beginner => "Beginner",
                SkillLevel::Intermediate => "Intermediate",
                SkillLevel::Advanced => "Advanced",
                SkillLevel::Expert => "Expert",
            },
        }
        .to_string()
    }
}
