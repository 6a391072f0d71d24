//! A4 text layout
//!
//! Turns the rendered resume into positioned lines on A4 pages. Lines wrap
//! at the content width, sections flow top to bottom, and a new page opens
//! whenever the cursor would cross the bottom margin. Right-to-left resumes
//! right-align every line. Runs containing Arabic are assigned the embedded
//! face and measured through the shaper; everything else uses the standard
//! fonts with approximate metrics.

use super::fonts::StandardFont;
use super::shaping::{contains_arabic, ArabicShaper};
use render_model::{Color, RenderedResume, Section};

/// A4 portrait in PDF points.
pub const PAGE_WIDTH: f64 = 595.28;
pub const PAGE_HEIGHT: f64 = 841.89;

const MARGIN: f64 = 48.0;
const CONTENT_WIDTH: f64 = PAGE_WIDTH - 2.0 * MARGIN;

const NAME_SIZE: f64 = 22.0;
const HEADING_SIZE: f64 = 13.0;
const BODY_SIZE: f64 = 10.0;
const SMALL_SIZE: f64 = 9.0;
const LINE_GAP: f64 = 1.4;
const SECTION_GAP: f64 = 10.0;

/// Face a line is drawn with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineFont {
    Standard(StandardFont),
    /// The embedded Arabic face; glyphs are shaped at draw time.
    Arabic,
}

/// A positioned run of text.
#[derive(Debug, Clone)]
pub struct TextLine {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font: LineFont,
    pub size: f64,
    pub color: Color,
}

/// A horizontal rule under a section heading.
#[derive(Debug, Clone)]
pub struct Rule {
    pub x1: f64,
    pub x2: f64,
    pub y: f64,
    pub color: Color,
}

#[derive(Debug, Clone)]
pub enum PageItem {
    Text(TextLine),
    Rule(Rule),
}

#[derive(Debug, Clone, Default)]
pub struct Page {
    pub items: Vec<PageItem>,
}

struct LayoutCursor<'s, 'f> {
    pages: Vec<Page>,
    y: f64,
    rtl: bool,
    shaper: Option<&'s ArabicShaper<'f>>,
    heading_font: StandardFont,
    heading_bold: StandardFont,
    body_font: StandardFont,
    primary: Color,
    secondary: Color,
    accent: Color,
}

impl<'s, 'f> LayoutCursor<'s, 'f> {
    fn new(rendered: &RenderedResume, shaper: Option<&'s ArabicShaper<'f>>) -> Self {
        let theme = &rendered.theme;
        Self {
            pages: vec![Page::default()],
            y: PAGE_HEIGHT - MARGIN,
            rtl: rendered.direction.is_rtl(),
            shaper,
            heading_font: StandardFont::from_family(&theme.fonts.heading, false),
            heading_bold: StandardFont::from_family(&theme.fonts.heading, true),
            body_font: StandardFont::from_family(&theme.fonts.body, false),
            primary: theme.primary,
            secondary: theme.secondary,
            accent: theme.accent,
        }
    }

    fn page(&mut self) -> &mut Page {
        // pages is never empty
        self.pages.last_mut().unwrap_or_else(|| unreachable!())
    }

    fn ensure_room(&mut self, height: f64) {
        if self.y - height < MARGIN {
            self.pages.push(Page::default());
            self.y = PAGE_HEIGHT - MARGIN;
        }
    }

    /// Face for a run: the embedded Arabic face when the run needs it and a
    /// shaper is available, otherwise the requested standard font.
    fn pick(&self, font: StandardFont, text: &str) -> LineFont {
        match self.shaper {
            Some(_) if contains_arabic(text) => LineFont::Arabic,
            _ => LineFont::Standard(font),
        }
    }

    fn measure(&self, text: &str, font: LineFont, size: f64) -> f64 {
        match (font, self.shaper) {
            (LineFont::Arabic, Some(shaper)) => shaper.text_width(text, size),
            (LineFont::Standard(font), _) => font.text_width(text, size),
            // pick() never yields Arabic without a shaper
            (LineFont::Arabic, None) => 0.0,
        }
    }

    /// Emit one already-fitting line and advance the cursor.
    fn put_line(&mut self, text: &str, font: StandardFont, size: f64, color: Color) {
        let font = self.pick(font, text);
        let height = size * LINE_GAP;
        self.ensure_room(height);
        self.y -= height;
        let x = if self.rtl {
            PAGE_WIDTH - MARGIN - self.measure(text, font, size)
        } else {
            MARGIN
        };
        let line = TextLine {
            text: text.to_string(),
            x,
            y: self.y,
            font,
            size,
            color,
        };
        self.page().items.push(PageItem::Text(line));
    }

    /// Wrap text at the content width and emit each line.
    fn put_wrapped(&mut self, text: &str, font: StandardFont, size: f64, color: Color) {
        let lines = wrap_text(text, CONTENT_WIDTH, |s| {
            let picked = self.pick(font, s);
            self.measure(s, picked, size)
        });
        for line in lines {
            self.put_line(&line, font, size, color);
        }
    }

    fn put_heading(&mut self, title: &str) {
        self.ensure_room(HEADING_SIZE * LINE_GAP + SECTION_GAP + 4.0);
        self.y -= SECTION_GAP;
        self.put_line(title, self.heading_bold, HEADING_SIZE, self.primary);
        self.y -= 3.0;
        let rule = Rule {
            x1: MARGIN,
            x2: PAGE_WIDTH - MARGIN,
            y: self.y,
            color: self.accent,
        };
        self.page().items.push(PageItem::Rule(rule));
        self.y -= 4.0;
    }

    fn gap(&mut self, points: f64) {
        self.y -= points;
    }
}

/// Greedy word wrap against a caller-supplied measure.
fn wrap_text(text: &str, max_width: f64, measure: impl Fn(&str) -> f64) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if measure(&candidate) <= max_width || current.is_empty() {
            current = candidate;
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Lay the rendered resume out onto A4 pages.
pub fn paginate(rendered: &RenderedResume, shaper: Option<&ArabicShaper<'_>>) -> Vec<Page> {
    let mut cursor = LayoutCursor::new(rendered, shaper);

    for section in &rendered.sections {
        match section {
            Section::Header { name, contacts } => {
                cursor.put_line(name, cursor.heading_bold, NAME_SIZE, cursor.primary);
                cursor.gap(2.0);
                let joined = contacts
                    .iter()
                    .map(|c| c.value.as_str())
                    .collect::<Vec<_>>()
                    .join("  \u{2022}  ");
                cursor.put_wrapped(&joined, cursor.body_font, SMALL_SIZE, cursor.secondary);
            }
            Section::Summary { title, text, .. } => {
                cursor.put_heading(title);
                cursor.put_wrapped(text, cursor.body_font, BODY_SIZE, cursor.secondary);
            }
            Section::Experience { title, items } => {
                cursor.put_heading(title);
                for item in items {
                    cursor.put_line(&item.title, cursor.heading_font, BODY_SIZE + 1.0, cursor.primary);
                    let sub = match &item.location {
                        Some(location) => {
                            format!("{} \u{2022} {} \u{2022} {}", item.company, location, item.date_range)
                        }
                        None => format!("{} \u{2022} {}", item.company, item.date_range),
                    };
                    cursor.put_wrapped(&sub, cursor.body_font, SMALL_SIZE, cursor.secondary);
                    cursor.put_wrapped(&item.description, cursor.body_font, BODY_SIZE, cursor.secondary);
                    for achievement in &item.achievements {
                        let bullet = format!("\u{2022} {achievement}");
                        cursor.put_wrapped(&bullet, cursor.body_font, BODY_SIZE, cursor.secondary);
                    }
                    cursor.gap(4.0);
                }
            }
            Section::Education { title, items } => {
                cursor.put_heading(title);
                for item in items {
                    cursor.put_line(&item.degree, cursor.heading_font, BODY_SIZE + 1.0, cursor.primary);
                    let mut sub = item.institution.clone();
                    if let Some(location) = &item.location {
                        sub = format!("{sub} \u{2022} {location}");
                    }
                    if let Some(dates) = &item.date_range {
                        sub = format!("{sub} \u{2022} {dates}");
                    }
                    cursor.put_wrapped(&sub, cursor.body_font, SMALL_SIZE, cursor.secondary);
                    for extra in [&item.gpa, &item.honors, &item.description].into_iter().flatten() {
                        cursor.put_wrapped(extra, cursor.body_font, SMALL_SIZE, cursor.secondary);
                    }
                    cursor.gap(4.0);
                }
            }
            Section::Skills { title, items } => {
                cursor.put_heading(title);
                let joined = items
                    .iter()
                    .map(|s| format!("{} ({})", s.name, s.badge))
                    .collect::<Vec<_>>()
                    .join("  \u{2022}  ");
                cursor.put_wrapped(&joined, cursor.body_font, BODY_SIZE, cursor.secondary);
            }
            Section::Certificates { title, items } => {
                cursor.put_heading(title);
                for item in items {
                    let line = format!("{} \u{2022} {} \u{2022} {}", item.name, item.issuer, item.date);
                    cursor.put_wrapped(&line, cursor.body_font, BODY_SIZE, cursor.secondary);
                }
            }
        }
    }

    cursor.pages
}
