//! Static package parts
//!
//! Content types, relationships, and the style sheet are fixed for every
//! exported resume, so they are generated as plain strings.

pub mod namespaces {
    pub const W: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
    pub const R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
    pub const CT: &str = "http://schemas.openxmlformats.org/package/2006/content-types";
    pub const REL: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
}

pub fn content_types_xml() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="{}">
<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
<Default Extension="xml" ContentType="application/xml"/>
<Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
<Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/>
</Types>"#,
        namespaces::CT
    )
}

pub fn root_rels_xml() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="{}">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
</Relationships>"#,
        namespaces::REL
    )
}

pub fn document_rels_xml() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="{}">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
</Relationships>"#,
        namespaces::REL
    )
}

/// Heading and body styles keyed by the theme fonts.
pub fn styles_xml(heading_font: &str, body_font: &str, primary_hex: &str) -> String {
    let primary = primary_hex.trim_start_matches('#');
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="{w}">
<w:docDefaults><w:rPrDefault><w:rPr><w:rFonts w:ascii="{body}" w:hAnsi="{body}" w:cs="{body}"/><w:sz w:val="22"/></w:rPr></w:rPrDefault></w:docDefaults>
<w:style w:type="paragraph" w:styleId="Title"><w:name w:val="Title"/><w:rPr><w:rFonts w:ascii="{heading}" w:hAnsi="{heading}" w:cs="{heading}"/><w:b/><w:sz w:val="48"/><w:color w:val="{primary}"/></w:rPr></w:style>
<w:style w:type="paragraph" w:styleId="Heading1"><w:name w:val="heading 1"/><w:rPr><w:rFonts w:ascii="{heading}" w:hAnsi="{heading}" w:cs="{heading}"/><w:b/><w:sz w:val="28"/><w:color w:val="{primary}"/></w:rPr></w:style>
</w:styles>"#,
        w = namespaces::W,
        heading = escape_xml(heading_font),
        body = escape_xml(body_font),
        primary = primary,
    )
}

/// Escape text for an XML attribute or text node.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a<b>&'\""), "a&lt;b&gt;&amp;&apos;&quot;");
    }

    #[test]
    fn test_content_types_cover_document_and_styles() {
        let xml = content_types_xml();
        assert!(xml.contains("/word/document.xml"));
        assert!(xml.contains("/word/styles.xml"));
    }

    #[test]
    fn test_styles_strip_hash_from_color() {
        let xml = styles_xml("Cairo", "Amiri", "#1f6f8b");
        assert!(xml.contains(r#"w:val="1f6f8b""#));
        assert!(!xml.contains("#1f6f8b"));
    }
}
