//! word/document.xml writer
//!
//! Builds WordprocessingML directly from the resume data. Unlike the visual
//! serializers, absent optional fields are skipped outright instead of
//! rendered as placeholders, so the Word file contains only real content.
//! Arabic documents set paragraph-level `w:bidi` and run-level `w:rtl`.

use super::parts::{escape_xml, namespaces};
use render_model::Labels;
use resume_model::{Language, ResumeData};

pub struct DocumentWriter {
    labels: Labels,
    rtl: bool,
}

impl DocumentWriter {
    pub fn new(language: Language) -> Self {
        Self {
            labels: Labels::for_language(language),
            rtl: language.is_rtl(),
        }
    }

    pub fn write(&self, data: &ResumeData) -> String {
        let mut xml = String::with_capacity(8 * 1024);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(&format!(
            r#"<w:document xmlns:w="{}" xmlns:r="{}">"#,
            namespaces::W,
            namespaces::R
        ));
        xml.push_str("<w:body>");

        self.write_header(&mut xml, data);
        self.write_summary(&mut xml, data);
        self.write_experience(&mut xml, data);
        self.write_education(&mut xml, data);
        self.write_skills(&mut xml, data);
        self.write_certificates(&mut xml, data);

        xml.push_str("</w:body></w:document>");
        xml
    }

    fn write_header(&self, xml: &mut String, data: &ResumeData) {
        let info = &data.personal_info;
        self.styled_paragraph(xml, "Title", &info.name);

        let contacts: Vec<&str> = [&info.email, &info.phone, &info.location]
            .into_iter()
            .filter_map(|f| f.as_deref())
            .collect();
        if !contacts.is_empty() {
            self.paragraph(xml, &contacts.join(" | "), false);
        }
    }

    fn write_summary(&self, xml: &mut String, data: &ResumeData) {
        if let Some(summary) = &data.personal_info.summary {
            self.styled_paragraph(xml, "Heading1", &self.labels.summary_title);
            self.paragraph(xml, summary, false);
        }
    }

    fn write_experience(&self, xml: &mut String, data: &ResumeData) {
        if data.experience.is_empty() {
            return;
        }
        self.styled_paragraph(xml, "Heading1", &self.labels.experience_title);
        for exp in &data.experience {
            let end = exp
                .effective_end_date()
                .unwrap_or(self.labels.present.as_str());
            self.paragraph(xml, &format!("{} \u{2014} {}", exp.title, exp.company), true);
            let mut meta = format!("{} \u{2013} {}", exp.start_date, end);
            if let Some(location) = &exp.location {
                meta = format!("{meta} | {location}");
            }
            self.paragraph(xml, &meta, false);
            if let Some(description) = &exp.description {
                self.paragraph(xml, description, false);
            }
            for achievement in &exp.achievements {
                self.paragraph(xml, &format!("\u{2022} {achievement}"), false);
            }
        }
    }

    fn write_education(&self, xml: &mut String, data: &ResumeData) {
        if data.education.is_empty() {
            return;
        }
        self.styled_paragraph(xml, "Heading1", &self.labels.education_title);
        for edu in &data.education {
            self.paragraph(
                xml,
                &format!("{} \u{2014} {}", edu.degree, edu.institution),
                true,
            );
            let mut meta = Vec::new();
            if let (Some(start), Some(end)) = (&edu.start_date, &edu.end_date) {
                meta.push(format!("{start} \u{2013} {end}"));
            }
            if let Some(gpa) = &edu.gpa {
                meta.push(format!("GPA: {gpa}"));
            }
            if !meta.is_empty() {
                self.paragraph(xml, &meta.join(" | "), false);
            }
        }
    }

    fn write_skills(&self, xml: &mut String, data: &ResumeData) {
        if data.skills.is_empty() {
            return;
        }
        self.styled_paragraph(xml, "Heading1", &self.labels.skills_title);
        let joined = data
            .skills
            .iter()
            .map(|s| {
                let badge = self.labels.skill_badge(
                    s.level,
                    if self.rtl { Language::Ar } else { Language::En },
                );
                format!("{} ({badge})", s.name)
            })
            .collect::<Vec<_>>()
            .join(", ");
        self.paragraph(xml, &joined, false);
    }

    fn write_certificates(&self, xml: &mut String, data: &ResumeData) {
        if data.certificates.is_empty() {
            return;
        }
        self.styled_paragraph(xml, "Heading1", &self.labels.certificates_title);
        for cert in &data.certificates {
            self.paragraph(
                xml,
                &format!("{} \u{2014} {} ({})", cert.name, cert.issuer, cert.date),
                false,
            );
        }
    }

    fn styled_paragraph(&self, xml: &mut String, style: &str, text: &str) {
        xml.push_str("<w:p><w:pPr>");
        xml.push_str(&format!(r#"<w:pStyle w:val="{style}"/>"#));
        if self.rtl {
            xml.push_str("<w:bidi/>");
        }
        xml.push_str("</w:pPr>");
        self.run(xml, text);
        xml.push_str("</w:p>");
    }

    fn paragraph(&self, xml: &mut String, text: &str, bold: bool) {
        xml.push_str("<w:p>");
        if self.rtl {
            xml.push_str("<w:pPr><w:bidi/></w:pPr>");
        }
        xml.push_str("<w:r><w:rPr>");
        if bold {
            xml.push_str("<w:b/>");
        }
        if self.rtl {
            xml.push_str("<w:rtl/>");
        }
        xml.push_str("</w:rPr>");
        self.text(xml, text);
        xml.push_str("</w:r></w:p>");
    }

    fn run(&self, xml: &mut String, text: &str) {
        xml.push_str("<w:r>");
        if self.rtl {
            xml.push_str("<w:rPr><w:rtl/></w:rPr>");
        }
        self.text(xml, text);
        xml.push_str("</w:r>");
    }

    fn text(&self, xml: &mut String, text: &str) {
        xml.push_str(r#"<w:t xml:space="preserve">"#);
        xml.push_str(&escape_xml(text));
        xml.push_str("</w:t>");
    }
}
