//! The structured resume record.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::parse::{match_header, Field};

/// A person's professional profile as exchanged with the tailoring service.
///
/// Field names serialize in camelCase (`workExperience`), which is the
/// contract the tailoring collaborator expects. Missing fields deserialize
/// to their defaults, so every field is always present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Resume {
    /// Full name
    pub name: String,

    /// Current or target position
    pub position: String,

    /// Free-form summary paragraph
    pub summary: String,

    /// Education entries, in document order
    pub education: Vec<String>,

    /// Work experience entries, in document order
    pub work_experience: Vec<String>,

    /// Individual skills
    pub skills: Vec<String>,

    /// Certificates and certifications
    pub certificates: Vec<String>,

    /// Spoken languages
    pub languages: Vec<String>,
}

impl Resume {
    /// Create an empty resume.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether every field is at its default value.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Total number of list entries across all list sections.
    pub fn entry_count(&self) -> usize {
        self.education.len()
            + self.work_experience.len()
            + self.skills.len()
            + self.certificates.len()
            + self.languages.len()
    }

    /// Canonical `Key: value` text form that the parser reads back.
    ///
    /// `name` and `position` survive a re-parse up to surrounding whitespace.
    /// They are written last so that list entries beginning with `Name:` or
    /// `Position:` cannot override them, and line breaks inside single-line
    /// fields become spaces. List entries are written one per line under
    /// their header; skills and languages that themselves contain commas will
    /// be split again on re-parse.
    pub fn to_key_value_text(&self) -> String {
        let mut out = String::new();

        if !self.summary.is_empty() {
            out.push_str(&format!("Summary: {}\n", single_line(&self.summary)));
        }

        let sections: [(&str, &[String]); 5] = [
            ("Education", &self.education),
            ("Work Experience", &self.work_experience),
            ("Skills", &self.skills),
            ("Certificates", &self.certificates),
            ("Languages", &self.languages),
        ];
        for (header, entries) in sections {
            if entries.is_empty() {
                continue;
            }
            out.push_str(header);
            out.push_str(":\n");
            for entry in entries {
                out.push_str(entry);
                out.push('\n');
            }
        }

        let singular = [
            ("Name", Field::Name, &self.name),
            ("Position", Field::Position, &self.position),
        ];
        for (key, field, value) in singular {
            // An empty value is still written when an entry above would set it.
            let shadowed = out
                .lines()
                .any(|line| matches!(match_header(line.trim()), Some((h, _)) if h.field == field));
            if !value.is_empty() || shadowed {
                out.push_str(&format!("{key}: {}\n", single_line(value)));
            }
        }

        out
    }

    /// File name offered when saving the rendered PDF.
    ///
    /// Whitespace runs in the name become underscores: `"Jane  Doe"` yields
    /// `"Jane_Doe_Resume.pdf"`. An empty name yields `"Resume.pdf"`.
    pub fn suggested_filename(&self) -> String {
        static WHITESPACE: OnceLock<Regex> = OnceLock::new();
        let re = WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

        let name = self.name.trim();
        if name.is_empty() {
            return "Resume.pdf".to_string();
        }
        format!("{}_Resume.pdf", re.replace_all(name, "_"))
    }
}

/// Join the non-blank lines of `value` with single spaces.
fn single_line(value: &str) -> String {
    value
        .split(['\r', '\n'])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
