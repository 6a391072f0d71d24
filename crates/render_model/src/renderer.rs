//! Template renderer
//!
//! `render` turns resume data into the canonical rendered representation for
//! a template and language. Purely declarative: per-section presence checks,
//! placeholder substitution, and date-range joining. Sections are emitted in
//! the fixed order header, summary, experience, education, skills,
//! certificates — the same order the DOCX path mirrors.

use crate::{
    CertificateItem, Contact, ContactKind, Direction, EducationItem, ExperienceItem, Labels,
    RenderedResume, Section, SkillItem, Theme,
};
use resume_model::{Education, Experience, Language, ResumeData, TemplateId};

/// Render a resume into the canonical representation.
pub fn render(resume: &ResumeData, template: TemplateId, language: Language) -> RenderedResume {
    let labels = Labels::for_language(language);
    let theme = Theme::resolve(template, language);
    let info = &resume.personal_info;

    let mut sections = Vec::with_capacity(6);

    let mut contacts = Vec::new();
    contacts.push(contact(
        ContactKind::Email,
        info.email.as_deref(),
        &labels.email_placeholder,
    ));
    contacts.push(contact(
        ContactKind::Phone,
        info.phone.as_deref(),
        &labels.phone_placeholder,
    ));
    contacts.push(contact(
        ContactKind::Location,
        info.location.as_deref(),
        &labels.location_placeholder,
    ));
    sections.push(Section::Header {
        name: info.name.clone(),
        contacts,
    });

    let (summary, summary_is_placeholder) = match info.summary.as_deref() {
        Some(s) if !s.trim().is_empty() => (s.to_string(), false),
        _ => (labels.summary_placeholder.clone(), true),
    };
    sections.push(Section::Summary {
        title: labels.summary_title.clone(),
        text: summary,
        is_placeholder: summary_is_placeholder,
    });

    sections.push(Section::Experience {
        title: labels.experience_title.clone(),
        items: resume
            .experience
            .iter()
            .map(|e| experience_item(e, &labels))
            .collect(),
    });

    sections.push(Section::Education {
        title: labels.education_title.clone(),
        items: resume.education.iter().map(education_item).collect(),
    });

    sections.push(Section::Skills {
        title: labels.skills_title.clone(),
        items: resume
            .skills
            .iter()
            .map(|s| SkillItem {
                name: s.name.clone(),
                badge: labels.skill_badge(s.level, language),
                category: s.category.clone(),
            })
            .collect(),
    });

    sections.push(Section::Certificates {
        title: labels.certificates_title.clone(),
        items: resume
            .certificates
            .iter()
            .map(|c| CertificateItem {
                name: c.name.clone(),
                issuer: c.issuer.clone(),
                date: c.date.clone(),
                credential_id: c.credential_id.clone(),
            })
            .collect(),
    });

    RenderedResume {
        language,
        direction: Direction::for_language(language),
        theme,
        sections,
    }
}

fn contact(kind: ContactKind, value: Option<&str>, placeholder: &str) -> Contact {
    match value {
        Some(v) if !v.trim().is_empty() => Contact {
            kind,
            value: v.to_string(),
            is_placeholder: false,
        },
        _ => Contact {
            kind,
            value: placeholder.to_string(),
            is_placeholder: true,
        },
    }
}

fn experience_item(exp: &Experience, labels: &Labels) -> ExperienceItem {
    let end = match exp.effective_end_date() {
        Some(end) if !end.trim().is_empty() => end.to_string(),
        Some(_) | None => labels.present.clone(),
    };
    let date_range = format!("{} – {}", exp.start_date, end);

    let (description, description_is_placeholder) = match exp.description.as_deref() {
        Some(d) if !d.trim().is_empty() => (d.to_string(), false),
        _ => (labels.description_placeholder.clone(), true),
    };

    ExperienceItem {
        title: exp.title.clone(),
        company: exp.company.clone(),
        location: exp.location.clone(),
        date_range,
        description,
        description_is_placeholder,
        achievements: exp.achievements.clone(),
    }
}

fn education_item(edu: &Education) -> EducationItem {
    let date_range = match (edu.start_date.as_deref(), edu.end_date.as_deref()) {
        (Some(s), Some(e)) => Some(format!("{} – {}", s, e)),
        (Some(s), None) => Some(s.to_string()),
        (None, Some(e)) => Some(e.to_string()),
        (None, None) => None,
    };
    EducationItem {
        degree: edu.degree.clone(),
        institution: edu.institution.clone(),
        location: edu.location.clone(),
        date_range,
        gpa: edu.gpa.clone(),
        honors: edu.honors.clone(),
        description: edu.description.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resume_model::{PersonalInfo, Skill, SkillLevel};

    fn sample_resume() -> ResumeData {
        ResumeData {
            personal_info: PersonalInfo {
                name: "Sara".to_string(),
                email: Some("sara@x.com".to_string()),
                ..Default::default()
            },
            experience: vec![Experience {
                title: "Dev".to_string(),
                company: "X".to_string(),
                start_date: "2020-01".to_string(),
                end_date: Some("2023-05".to_string()),
                current: true,
                achievements: vec!["Shipped v2".to_string()],
                ..Default::default()
            }],
            skills: vec![Skill {
                name: "Rust".to_string(),
                level: SkillLevel::Expert,
                category: None,
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_current_substitutes_present_label() {
        let rendered = render(&sample_resume(), TemplateId::Modern, Language::En);
        let Section::Experience { items, .. } = &rendered.sections[2] else {
            panic!("expected experience section");
        };
        assert_eq!(items[0].date_range, "2020-01 – Present");
    }

    #[test]
    fn test_current_substitutes_arabic_present_label() {
        let rendered = render(&sample_resume(), TemplateId::Modern, Language::Ar);
        let Section::Experience { items, .. } = &rendered.sections[2] else {
            panic!("expected experience section");
        };
        assert!(items[0].date_range.ends_with("حتى الآن"));
        assert!(rendered.direction.is_rtl());
    }

    #[test]
    fn test_absent_fields_become_placeholders() {
        let rendered = render(&sample_resume(), TemplateId::Modern, Language::En);
        let Section::Header { contacts, .. } = &rendered.sections[0] else {
            panic!("expected header section");
        };
        let phone = contacts
            .iter()
            .find(|c| c.kind == ContactKind::Phone)
            .unwrap();
        assert!(phone.is_placeholder);

        let email = contacts
            .iter()
            .find(|c| c.kind == ContactKind::Email)
            .unwrap();
        assert!(!email.is_placeholder);
        assert_eq!(email.value, "sara@x.com");
    }

    #[test]
    fn test_summary_placeholder_when_absent() {
        let rendered = render(&sample_resume(), TemplateId::Modern, Language::En);
        let Section::Summary { is_placeholder, .. } = &rendered.sections[1] else {
            panic!("expected summary section");
        };
        assert!(is_placeholder);
    }

    #[test]
    fn test_section_order_is_fixed() {
        let rendered = render(&sample_resume(), TemplateId::Classic, Language::En);
        assert_eq!(rendered.sections.len(), 6);
        assert!(matches!(rendered.sections[0], Section::Header { .. }));
        assert!(matches!(rendered.sections[1], Section::Summary { .. }));
        assert!(matches!(rendered.sections[2], Section::Experience { .. }));
        assert!(matches!(rendered.sections[3], Section::Education { .. }));
        assert!(matches!(rendered.sections[4], Section::Skills { .. }));
        assert!(matches!(rendered.sections[5], Section::Certificates { .. }));
    }

    #[test]
    fn test_skill_badges_localized() {
        let rendered = render(&sample_resume(), TemplateId::Modern, Language::Ar);
        let Section::Skills { items, .. } = &rendered.sections[4] else {
            panic!("expected skills section");
        };
        assert_eq!(items[0].badge, "خبير");
    }

    #[test]
    fn test_name_accessor() {
        let rendered = render(&sample_resume(), TemplateId::Modern, Language::En);
        assert_eq!(rendered.name(), "Sara");
    }
}
