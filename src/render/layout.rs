//! Resume layout engine.
//!
//! Places the resume onto a sequence of fixed-size pages as positioned text
//! runs and rules. Coordinates are millimetres from the top-left corner, and
//! text `y` values are baselines.

use crate::model::Resume;

use super::cursor::LayoutCursor;
use super::metrics::{wrap_text, FontFace};
use super::options::RenderOptions;

/// Gray level of the separator rule under the name.
pub const RULE_GRAY: u8 = 220;

const BULLET: &str = "\u{2022}";

const GAP_AFTER_NAME: f32 = 8.0;
const SEPARATOR_ROOM: f32 = 5.0;
const SEPARATOR_ADVANCE: f32 = 3.0;
const GAP_AFTER_SEPARATOR: f32 = 5.0;
const GAP_AFTER_HEADING: f32 = 4.0;
const GAP_AFTER_SHORT_ENTRY: f32 = 1.5;
const GAP_AFTER_ENTRY: f32 = 2.0;
const GAP_AFTER_SECTION: f32 = 5.0;

/// A positioned drawing primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// One wrapped line of text
    Text {
        x: f32,
        y: f32,
        text: String,
        face: FontFace,
        size: f32,
    },
    /// A horizontal rule
    Rule { x1: f32, x2: f32, y: f32 },
}

/// Elements on one page, in drawing order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutPage {
    pub elements: Vec<Element>,
}

impl LayoutPage {
    /// Text runs on this page.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().filter_map(|element| match element {
            Element::Text { text, .. } => Some(text.as_str()),
            Element::Rule { .. } => None,
        })
    }
}

/// The laid-out multi-page canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    pub page_width: f32,
    pub page_height: f32,
    pub pages: Vec<LayoutPage>,
}

impl PageLayout {
    /// Number of pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Index of the first page containing a text run equal to `text`.
    pub fn find_text(&self, text: &str) -> Option<usize> {
        self.pages
            .iter()
            .position(|page| page.texts().any(|t| t == text))
    }
}

/// Lay out `resume` according to `options`.
///
/// Sections appear in a fixed order and only when non-empty; the name header
/// and the separator rule are always present, so the result has at least one
/// page.
pub fn layout_resume(resume: &Resume, options: &RenderOptions) -> PageLayout {
    let mut engine = LayoutEngine::new(options);
    let mut cursor = LayoutCursor::new(options.margin);

    cursor = engine.text_block(cursor, &resume.name, FontFace::Bold, options.name_size, 0.0);
    cursor = cursor.advance(GAP_AFTER_NAME);
    cursor = engine.separator(cursor);
    cursor = cursor.advance(GAP_AFTER_SEPARATOR);

    let sections: [(&str, &[String], f32); 5] = [
        ("Languages", resume.languages.as_slice(), GAP_AFTER_SHORT_ENTRY),
        ("Work Experience", resume.work_experience.as_slice(), GAP_AFTER_ENTRY),
        ("Education", resume.education.as_slice(), GAP_AFTER_ENTRY),
        ("Skills", resume.skills.as_slice(), GAP_AFTER_SHORT_ENTRY),
        ("Additional Information", resume.certificates.as_slice(), GAP_AFTER_ENTRY),
    ];
    for (heading, entries, gap) in sections {
        if !entries.is_empty() {
            cursor = engine.list_section(cursor, heading, entries, gap);
        }
    }

    if !resume.position.is_empty() || !resume.summary.is_empty() {
        cursor = engine.career_section(cursor, &resume.position, &resume.summary);
    }

    log::debug!(
        "laid out resume on {} page(s), final baseline {:.1}mm",
        engine.pages.len(),
        cursor.y
    );

    engine.finish()
}

struct LayoutEngine<'o> {
    options: &'o RenderOptions,
    pages: Vec<LayoutPage>,
}

impl<'o> LayoutEngine<'o> {
    fn new(options: &'o RenderOptions) -> Self {
        Self {
            options,
            pages: vec![LayoutPage::default()],
        }
    }

    fn finish(self) -> PageLayout {
        PageLayout {
            page_width: self.options.page_width,
            page_height: self.options.page_height,
            pages: self.pages,
        }
    }

    fn list_section(
        &mut self,
        cursor: LayoutCursor,
        heading: &str,
        entries: &[String],
        gap: f32,
    ) -> LayoutCursor {
        let opts = self.options;
        let mut cursor = self.text_block(cursor, heading, FontFace::Bold, opts.heading_size, 0.0);
        cursor = cursor.advance(GAP_AFTER_HEADING);

        for entry in entries {
            let bullet = format!("{BULLET} {entry}");
            cursor = self.text_block(
                cursor,
                &bullet,
                FontFace::Regular,
                opts.body_size,
                opts.bullet_indent,
            );
            cursor = cursor.advance(gap);
        }

        cursor.advance(GAP_AFTER_SECTION)
    }

    fn career_section(
        &mut self,
        cursor: LayoutCursor,
        position: &str,
        summary: &str,
    ) -> LayoutCursor {
        let opts = self.options;
        let mut cursor = self.text_block(
            cursor,
            "Career & Objectives",
            FontFace::Bold,
            opts.heading_size,
            0.0,
        );
        cursor = cursor.advance(GAP_AFTER_HEADING);

        if !position.is_empty() {
            let line = format!("Position: {position}");
            cursor = self.text_block(cursor, &line, FontFace::Bold, opts.body_size, opts.bullet_indent);
            cursor = cursor.advance(GAP_AFTER_ENTRY);
        }
        if !summary.is_empty() {
            cursor = self.text_block(
                cursor,
                summary,
                FontFace::Regular,
                opts.body_size,
                opts.bullet_indent,
            );
            cursor = cursor.advance(GAP_AFTER_ENTRY);
        }

        cursor
    }

    /// Wrap `text` and place its lines.
    ///
    /// A block that does not fit in the remaining space but fits on an empty
    /// page moves to a new page as a whole; taller blocks break per line.
    fn text_block(
        &mut self,
        cursor: LayoutCursor,
        text: &str,
        face: FontFace,
        size: f32,
        indent: f32,
    ) -> LayoutCursor {
        let opts = self.options;
        let lines = wrap_text(text, face, size, opts.content_width() - indent);
        let step = opts.line_step(size);
        let block_height = lines.len() as f32 * step;

        let mut cursor = cursor;
        if cursor.overflows(block_height, opts.bottom_limit())
            && opts.margin + block_height <= opts.bottom_limit()
        {
            cursor = self.break_page(cursor);
        }

        for line in lines {
            if cursor.overflows(step, opts.bottom_limit()) {
                cursor = self.break_page(cursor);
            }
            if !line.is_empty() {
                self.push(
                    cursor,
                    Element::Text {
                        x: opts.margin + indent,
                        y: cursor.y,
                        text: line,
                        face,
                        size,
                    },
                );
            }
            cursor = cursor.advance(step);
        }

        cursor
    }

    fn separator(&mut self, cursor: LayoutCursor) -> LayoutCursor {
        let opts = self.options;
        let mut cursor = cursor;
        if cursor.overflows(SEPARATOR_ROOM, opts.bottom_limit()) {
            cursor = self.break_page(cursor);
        }
        self.push(
            cursor,
            Element::Rule {
                x1: opts.margin,
                x2: opts.page_width - opts.margin,
                y: cursor.y,
            },
        );
        cursor.advance(SEPARATOR_ADVANCE)
    }

    /// Start a new page unless the cursor already sits at the top of one.
    fn break_page(&mut self, cursor: LayoutCursor) -> LayoutCursor {
        if cursor.y <= self.options.margin {
            return cursor;
        }
        let cursor = cursor.next_page(self.options.margin);
        self.pages.push(LayoutPage::default());
        cursor
    }

    fn push(&mut self, cursor: LayoutCursor, element: Element) {
        while self.pages.len() <= cursor.page {
            self.pages.push(LayoutPage::default());
        }
        self.pages[cursor.page].elements.push(element);
    }
}
