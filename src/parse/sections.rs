//! Section header table.
//!
//! Each recognised `Key:` prefix maps to the resume field it fills and the
//! state the parser moves to afterwards. Matching is case-insensitive and the
//! first entry in table order wins.

/// Resume field targeted by a header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Position,
    Summary,
    Education,
    WorkExperience,
    Skills,
    Certificates,
    Languages,
}

/// Which section a non-header line continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParserState {
    #[default]
    None,
    Summary,
    Education,
    WorkExperience,
    Skills,
    Certificates,
    Languages,
}

/// How content is added to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContinuationMode {
    /// Replace a single-valued string
    Assign,
    /// Extend a string with a single space
    AppendText,
    /// Split on commas, append each non-empty piece
    SplitList,
    /// Append the whole value as one entry
    WholeEntry,
}

/// One row of the header table.
#[derive(Debug, Clone, Copy)]
pub struct HeaderKey {
    /// Lowercase prefix including the colon
    pub prefix: &'static str,
    /// Field receiving the remainder of the line
    pub field: Field,
    /// State after the header line
    pub next_state: ParserState,
}

const fn key(prefix: &'static str, field: Field, next_state: ParserState) -> HeaderKey {
    HeaderKey {
        prefix,
        field,
        next_state,
    }
}

/// Recognised section headers, in match order.
pub const HEADER_KEYS: &[HeaderKey] = &[
    key("name:", Field::Name, ParserState::None),
    key("position:", Field::Position, ParserState::None),
    key("summary:", Field::Summary, ParserState::Summary),
    key("education:", Field::Education, ParserState::Education),
    key("work experience:", Field::WorkExperience, ParserState::WorkExperience),
    key("experience:", Field::WorkExperience, ParserState::WorkExperience),
    key("skills:", Field::Skills, ParserState::Skills),
    key("certificates:", Field::Certificates, ParserState::Certificates),
    key("certifications:", Field::Certificates, ParserState::Certificates),
    key("languages:", Field::Languages, ParserState::Languages),
];

/// Profile-style prefixes that are not sections but still rule out name inference.
pub const NON_NAME_PREFIXES: &[&str] = &["objective:", "profile:"];

impl Field {
    /// How a header value for this field is applied.
    pub fn mode(self) -> ContinuationMode {
        match self {
            Field::Name | Field::Position => ContinuationMode::Assign,
            Field::Summary => ContinuationMode::AppendText,
            Field::Skills | Field::Languages => ContinuationMode::SplitList,
            Field::Education | Field::WorkExperience | Field::Certificates => {
                ContinuationMode::WholeEntry
            }
        }
    }
}

impl ParserState {
    /// Field continued by a non-header line, if any.
    pub fn field(self) -> Option<Field> {
        match self {
            ParserState::None => None,
            ParserState::Summary => Some(Field::Summary),
            ParserState::Education => Some(Field::Education),
            ParserState::WorkExperience => Some(Field::WorkExperience),
            ParserState::Skills => Some(Field::Skills),
            ParserState::Certificates => Some(Field::Certificates),
            ParserState::Languages => Some(Field::Languages),
        }
    }
}

/// Find the first header whose prefix starts `line`, ignoring ASCII case.
///
/// Returns the header and the trimmed remainder after the prefix.
pub fn match_header(line: &str) -> Option<(&'static HeaderKey, &str)> {
    HEADER_KEYS.iter().find_map(|header| {
        strip_prefix_ignore_case(line, header.prefix).map(|rest| (header, rest.trim()))
    })
}

/// Whether `line` starts with any header or profile-style prefix.
pub fn starts_with_any_header(line: &str) -> bool {
    match_header(line).is_some()
        || NON_NAME_PREFIXES
            .iter()
            .any(|prefix| strip_prefix_ignore_case(line, prefix).is_some())
}

fn strip_prefix_ignore_case<'l>(line: &'l str, prefix: &str) -> Option<&'l str> {
    let head = line.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        line.get(prefix.len()..)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_header_case_insensitive() {
        let (header, rest) = match_header("SKILLS:  Go, Rust ").unwrap();
        assert_eq!(header.field, Field::Skills);
        assert_eq!(rest, "Go, Rust");
    }

    #[test]
    fn test_work_experience_beats_experience() {
        let (header, rest) = match_header("Work Experience: Acme").unwrap();
        assert_eq!(header.prefix, "work experience:");
        assert_eq!(rest, "Acme");

        let (header, _) = match_header("experience: Acme").unwrap();
        assert_eq!(header.field, Field::WorkExperience);
    }

    #[test]
    fn test_prefix_must_be_at_line_start() {
        assert!(match_header("My skills: many").is_none());
        assert!(match_header("Skills").is_none());
        assert!(match_header("Ünïcödé").is_none());
    }

    #[test]
    fn test_name_and_position_reset_state() {
        for line in ["Name: x", "Position: y"] {
            let (header, _) = match_header(line).unwrap();
            assert_eq!(header.next_state, ParserState::None);
            assert_eq!(header.field.mode(), ContinuationMode::Assign);
        }
    }

    #[test]
    fn test_state_field_mapping() {
        assert_eq!(ParserState::None.field(), None);
        assert_eq!(ParserState::Languages.field(), Some(Field::Languages));
        for header in HEADER_KEYS {
            if header.next_state != ParserState::None {
                assert_eq!(header.next_state.field(), Some(header.field));
            }
        }
    }

    #[test]
    fn test_profile_prefixes_block_inference_only() {
        assert!(match_header("Objective: grow").is_none());
        assert!(starts_with_any_header("Objective: grow"));
        assert!(starts_with_any_header("profile: builder"));
        assert!(!starts_with_any_header("Jane Doe"));
    }
}
