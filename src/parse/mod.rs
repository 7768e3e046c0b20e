//! Resume text parsing.
//!
//! A line-oriented state machine driven by the [`HEADER_KEYS`] table. Header
//! lines (`Skills: Go, Rust`) fill a field and open a section; other lines
//! continue the open section or are discarded when none is open.

mod sections;

pub use sections::{
    match_header, ContinuationMode, Field, HeaderKey, ParserState, HEADER_KEYS, NON_NAME_PREFIXES,
};

use sections::starts_with_any_header;

use crate::model::Resume;

/// Lines this long or longer are never inferred as a name.
pub const MAX_INFERRED_NAME_CHARS: usize = 100;

/// Parses free text into a [`Resume`].
///
/// Parsing is total: unstructured input yields a partially or fully default
/// record instead of an error.
#[derive(Debug, Default)]
pub struct ResumeParser {
    resume: Resume,
    state: ParserState,
    name_seen: bool,
}

impl ResumeParser {
    /// Create a parser in the initial state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `text` into a resume.
    pub fn parse(text: &str) -> Resume {
        let mut parser = Self::new();
        let lines = normalized_lines(text);

        for line in &lines {
            parser.feed(line);
        }

        parser.finish(lines.first().copied())
    }

    /// Process one trimmed, non-empty line.
    fn feed(&mut self, line: &str) {
        if let Some((header, value)) = match_header(line) {
            // Any `Name:` line, even an empty one, disables first-line inference.
            if header.field == Field::Name {
                self.name_seen = true;
            }
            self.apply_header(header.field, value);
            self.state = header.next_state;
            return;
        }

        if let Some(field) = self.state.field() {
            self.apply_continuation(field, line);
        }
    }

    fn apply_header(&mut self, field: Field, value: &str) {
        match field.mode() {
            ContinuationMode::Assign => *self.text_field(field) = value.to_string(),
            ContinuationMode::AppendText => append_text(self.text_field(field), value),
            ContinuationMode::SplitList => push_split(self.list_field(field), value),
            ContinuationMode::WholeEntry => {
                if !value.is_empty() {
                    self.list_field(field).push(value.to_string());
                }
            }
        }
    }

    fn apply_continuation(&mut self, field: Field, line: &str) {
        match field.mode() {
            ContinuationMode::AppendText => append_text(self.text_field(field), line),
            ContinuationMode::SplitList => push_split(self.list_field(field), line),
            ContinuationMode::WholeEntry => self.list_field(field).push(line.to_string()),
            // Single-valued sections never stay open.
            ContinuationMode::Assign => {}
        }
    }

    fn finish(mut self, first_line: Option<&str>) -> Resume {
        if !self.name_seen {
            if let Some(line) = first_line.filter(|l| is_name_candidate(l)) {
                self.resume.name = line.to_string();
            }
        }
        self.resume
    }

    fn text_field(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.resume.name,
            Field::Position => &mut self.resume.position,
            _ => &mut self.resume.summary,
        }
    }

    fn list_field(&mut self, field: Field) -> &mut Vec<String> {
        match field {
            Field::Education => &mut self.resume.education,
            Field::WorkExperience => &mut self.resume.work_experience,
            Field::Skills => &mut self.resume.skills,
            Field::Languages => &mut self.resume.languages,
            _ => &mut self.resume.certificates,
        }
    }
}

/// Parse resume text. Never fails.
pub fn parse_resume(text: &str) -> Resume {
    ResumeParser::parse(text)
}

/// Normalize line endings, trim every line and drop blank ones.
fn normalized_lines(text: &str) -> Vec<&str> {
    text.split(['\n', '\r'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

fn is_name_candidate(line: &str) -> bool {
    !starts_with_any_header(line) && line.chars().count() < MAX_INFERRED_NAME_CHARS
}

fn append_text(target: &mut String, text: &str) {
    if text.is_empty() {
        return;
    }
    if !target.is_empty() {
        target.push(' ');
    }
    target.push_str(text);
}

fn push_split(target: &mut Vec<String>, text: &str) {
    target.extend(
        text.split(',')
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .map(str::to_string),
    );
}
