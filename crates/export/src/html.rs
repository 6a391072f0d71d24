//! Self-contained HTML serializer
//!
//! Produces a single HTML document from the rendered resume: styles are
//! inlined, the direction attribute follows the rendered direction, and web
//! fonts load from a stylesheet link. Placeholder values render dimmed and
//! italic so a reader can tell them from real data.

use render_model::{detect_direction, Direction, RenderedResume, Section};
use std::fmt::Write as _;

/// Escape text for an HTML context.
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn font_stylesheet_url(rendered: &RenderedResume) -> String {
    let families = format!(
        "family={}&family={}",
        rendered.theme.fonts.heading.replace(' ', "+"),
        rendered.theme.fonts.body.replace(' ', "+"),
    );
    format!("https://fonts.googleapis.com/css2?{families}&display=swap")
}

fn base_styles(rendered: &RenderedResume) -> String {
    let theme = &rendered.theme;
    let align = if rendered.direction.is_rtl() { "right" } else { "left" };
    format!(
        r#"    * {{ margin: 0; padding: 0; box-sizing: border-box; }}
    body {{
      font-family: '{body}', sans-serif;
      color: {secondary};
      max-width: 210mm;
      margin: 0 auto;
      padding: 24px 32px;
      line-height: 1.5;
      text-align: {align};
    }}
    h1, h2 {{ font-family: '{heading}', sans-serif; color: {primary}; }}
    h1 {{ font-size: 28px; margin-bottom: 4px; }}
    h2 {{
      font-size: 16px;
      margin: 18px 0 8px;
      border-bottom: 2px solid {accent};
      padding-bottom: 2px;
      text-transform: uppercase;
      letter-spacing: 0.04em;
    }}
    .contacts {{ font-size: 13px; margin-bottom: 8px; }}
    .contacts span + span::before {{ content: " \2022 "; color: {accent}; }}
    .item {{ margin-bottom: 12px; }}
    .item-head {{ display: flex; justify-content: space-between; flex-wrap: wrap; }}
    .item-title {{ font-weight: bold; color: {primary}; }}
    .item-dates {{ font-size: 13px; color: {secondary}; }}
    .item-sub {{ font-size: 14px; font-style: italic; }}
    .badge {{
      display: inline-block;
      font-size: 12px;
      border: 1px solid {accent};
      border-radius: 10px;
      padding: 1px 8px;
      margin: 2px;
    }}
    ul {{ padding-inline-start: 20px; }}
    li {{ font-size: 14px; }}
    .placeholder {{ color: #9e9e9e; font-style: italic; }}
    @media print {{
      body {{ padding: 0; }}
      a {{ color: inherit; text-decoration: none; }}
    }}
"#,
        body = theme.fonts.body,
        heading = theme.fonts.heading,
        primary = theme.primary.hex(),
        secondary = theme.secondary.hex(),
        accent = theme.accent.hex(),
    )
}

fn push_placeholder_class(out: &mut String, is_placeholder: bool) {
    if is_placeholder {
        out.push_str(" placeholder");
    }
}

/// `dir` attribute for a value whose detected direction disagrees with the
/// document, so an Arabic name on an English resume (or a Latin email on an
/// Arabic one) still reads correctly.
fn dir_attr(text: &str, doc: Direction) -> String {
    if text.is_empty() {
        return String::new();
    }
    let detected = detect_direction(text);
    if detected == doc {
        String::new()
    } else {
        format!(" dir=\"{}\"", detected.html_dir())
    }
}

fn write_section(out: &mut String, section: &Section, doc: Direction) {
    match section {
        Section::Header { name, contacts } => {
            let _ = writeln!(out, "  <header>");
            let _ = writeln!(
                out,
                "    <h1{}>{}</h1>",
                dir_attr(name, doc),
                escape_html(name)
            );
            let _ = write!(out, "    <div class=\"contacts\">");
            for contact in contacts {
                let mut class = String::new();
                push_placeholder_class(&mut class, contact.is_placeholder);
                let _ = write!(
                    out,
                    "<span class=\"contact{class}\"{}>{}</span>",
                    dir_attr(&contact.value, doc),
                    escape_html(&contact.value)
                );
            }
            let _ = writeln!(out, "</div>");
            let _ = writeln!(out, "  </header>");
        }
        Section::Summary { title, text, is_placeholder } => {
            let mut class = String::new();
            push_placeholder_class(&mut class, *is_placeholder);
            let _ = writeln!(out, "  <section>");
            let _ = writeln!(out, "    <h2>{}</h2>", escape_html(title));
            let _ = writeln!(out, "    <p class=\"summary{class}\">{}</p>", escape_html(text));
            let _ = writeln!(out, "  </section>");
        }
        Section::Experience { title, items } => {
            let _ = writeln!(out, "  <section>");
            let _ = writeln!(out, "    <h2>{}</h2>", escape_html(title));
            for item in items {
                let _ = writeln!(out, "    <div class=\"item\">");
                let _ = writeln!(out, "      <div class=\"item-head\">");
                let _ = writeln!(
                    out,
                    "        <span class=\"item-title\">{}</span>",
                    escape_html(&item.title)
                );
                let _ = writeln!(
                    out,
                    "        <span class=\"item-dates\">{}</span>",
                    escape_html(&item.date_range)
                );
                let _ = writeln!(out, "      </div>");
                let sub = match &item.location {
                    Some(location) => format!("{} \u{2022} {}", item.company, location),
                    None => item.company.clone(),
                };
                let _ = writeln!(out, "      <div class=\"item-sub\">{}</div>", escape_html(&sub));
                let mut class = String::new();
                push_placeholder_class(&mut class, item.description_is_placeholder);
                let _ = writeln!(
                    out,
                    "      <p class=\"desc{class}\">{}</p>",
                    escape_html(&item.description)
                );
                if !item.achievements.is_empty() {
                    let _ = writeln!(out, "      <ul>");
                    for achievement in &item.achievements {
                        let _ = writeln!(out, "        <li>{}</li>", escape_html(achievement));
                    }
                    let _ = writeln!(out, "      </ul>");
                }
                let _ = writeln!(out, "    </div>");
            }
            let _ = writeln!(out, "  </section>");
        }
        Section::Education { title, items } => {
            let _ = writeln!(out, "  <section>");
            let _ = writeln!(out, "    <h2>{}</h2>", escape_html(title));
            for item in items {
                let _ = writeln!(out, "    <div class=\"item\">");
                let _ = writeln!(out, "      <div class=\"item-head\">");
                let _ = writeln!(
                    out,
                    "        <span class=\"item-title\">{}</span>",
                    escape_html(&item.degree)
                );
                if let Some(dates) = &item.date_range {
                    let _ = writeln!(
                        out,
                        "        <span class=\"item-dates\">{}</span>",
                        escape_html(dates)
                    );
                }
                let _ = writeln!(out, "      </div>");
                let sub = match &item.location {
                    Some(location) => format!("{} \u{2022} {}", item.institution, location),
                    None => item.institution.clone(),
                };
                let _ = writeln!(out, "      <div class=\"item-sub\">{}</div>", escape_html(&sub));
                for extra in [&item.gpa, &item.honors, &item.description].into_iter().flatten() {
                    let _ = writeln!(out, "      <p class=\"desc\">{}</p>", escape_html(extra));
                }
                let _ = writeln!(out, "    </div>");
            }
            let _ = writeln!(out, "  </section>");
        }
        Section::Skills { title, items } => {
            let _ = writeln!(out, "  <section>");
            let _ = writeln!(out, "    <h2>{}</h2>", escape_html(title));
            let _ = write!(out, "    <div class=\"skills\">");
            for item in items {
                let _ = write!(
                    out,
                    "<span class=\"badge\">{} \u{2013} {}</span>",
                    escape_html(&item.name),
                    escape_html(&item.badge)
                );
            }
            let _ = writeln!(out, "</div>");
            let _ = writeln!(out, "  </section>");
        }
        Section::Certificates { title, items } => {
            let _ = writeln!(out, "  <section>");
            let _ = writeln!(out, "    <h2>{}</h2>", escape_html(title));
            for item in items {
                let _ = writeln!(out, "    <div class=\"item\">");
                let _ = writeln!(out, "      <div class=\"item-head\">");
                let _ = writeln!(
                    out,
                    "        <span class=\"item-title\">{}</span>",
                    escape_html(&item.name)
                );
                let _ = writeln!(
                    out,
                    "        <span class=\"item-dates\">{}</span>",
                    escape_html(&item.date)
                );
                let _ = writeln!(out, "      </div>");
                let _ = writeln!(
                    out,
                    "      <div class=\"item-sub\">{}</div>",
                    escape_html(&item.issuer)
                );
                if let Some(id) = &item.credential_id {
                    let _ = writeln!(out, "      <p class=\"desc\">ID: {}</p>", escape_html(id));
                }
                let _ = writeln!(out, "    </div>");
            }
            let _ = writeln!(out, "  </section>");
        }
    }
}

/// Serialize the rendered resume as one self-contained HTML document.
pub fn export_html(rendered: &RenderedResume) -> String {
    let lang = rendered.language.code();
    let dir = rendered.direction.html_dir();
    let title = escape_html(rendered.name());

    let mut out = String::with_capacity(8 * 1024);
    let _ = writeln!(out, "<!DOCTYPE html>");
    let _ = writeln!(out, "<html lang=\"{lang}\" dir=\"{dir}\">");
    let _ = writeln!(out, "<head>");
    let _ = writeln!(out, "  <meta charset=\"utf-8\">");
    let _ = writeln!(
        out,
        "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">"
    );
    let _ = writeln!(out, "  <title>{title}</title>");
    let _ = writeln!(
        out,
        "  <link rel=\"stylesheet\" href=\"{}\">",
        font_stylesheet_url(rendered)
    );
    let _ = writeln!(out, "  <style>");
    out.push_str(&base_styles(rendered));
    let _ = writeln!(out, "  </style>");
    let _ = writeln!(out, "</head>");
    let _ = writeln!(out, "<body>");
    for section in &rendered.sections {
        write_section(&mut out, section, rendered.direction);
    }
    let _ = writeln!(out, "</body>");
    let _ = writeln!(out, "</html>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use render_model::render;
    use resume_model::{Language, ResumeData, TemplateId};

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a<b>&\"c\""), "a&lt;b&gt;&amp;&quot;c&quot;");
    }

    #[test]
    fn test_arabic_document_is_rtl() {
        let data = ResumeData::with_name("\u{644}\u{64a}\u{646}\u{627}");
        let rendered = render(&data, TemplateId::Modern, Language::Ar);
        let html = export_html(&rendered);
        assert!(html.contains("dir=\"rtl\""));
        assert!(html.contains("lang=\"ar\""));
    }

    #[test]
    fn test_arabic_name_on_english_resume_gets_dir_attribute() {
        let data = ResumeData::with_name("أحمد علي");
        let rendered = render(&data, TemplateId::Modern, Language::En);
        let html = export_html(&rendered);
        assert!(html.contains("<h1 dir=\"rtl\">"));
    }

    #[test]
    fn test_latin_contact_on_arabic_resume_gets_dir_attribute() {
        let mut data = ResumeData::with_name("أحمد علي");
        data.personal_info.email = Some("ahmed@example.com".to_string());
        let rendered = render(&data, TemplateId::Modern, Language::Ar);
        let html = export_html(&rendered);
        assert!(html.contains(" dir=\"ltr\">ahmed@example.com"));
        // the name agrees with the document and carries no override
        assert!(html.contains("<h1>"));
    }

    #[test]
    fn test_placeholder_contacts_marked() {
        let data = ResumeData::with_name("Lina");
        let rendered = render(&data, TemplateId::Modern, Language::En);
        let html = export_html(&rendered);
        assert!(html.contains("placeholder"));
    }

    #[test]
    fn test_document_is_self_contained() {
        let data = ResumeData::with_name("Lina");
        let rendered = render(&data, TemplateId::Minimal, Language::En);
        let html = export_html(&rendered);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<style>"));
        assert!(html.trim_end().ends_with("</html>"));
    }
}
