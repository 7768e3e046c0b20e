//! Source format detection for resume uploads.

use crate::error::{Error, Result};
use std::fmt;
use std::path::Path;

/// Format of an uploaded resume source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceFormat {
    /// A PDF document with the version from its header (e.g., "1.7").
    Pdf {
        /// PDF version string
        version: String,
    },
    /// UTF-8 plain text.
    PlainText,
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceFormat::Pdf { version } => write!(f, "PDF {}", version),
            SourceFormat::PlainText => write!(f, "plain text"),
        }
    }
}

/// How a file name's extension routes the upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// `.pdf`
    Pdf,
    /// `.txt`
    Text,
    /// No extension; the content decides.
    Unknown,
}

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
const PDF_MAGIC_LEN: usize = 5;
const VERSION_LEN: usize = 3; // e.g., "1.7"

/// Detect the source format from the leading bytes of an upload.
///
/// # Returns
/// * `Ok(SourceFormat::Pdf { .. })` if the data starts with a PDF header
/// * `Ok(SourceFormat::PlainText)` if the data is UTF-8 without NUL bytes
/// * `Err(Error::UnsupportedFileType)` otherwise
///
/// # Example
/// ```
/// use resumekit::detect::{detect_source_format, SourceFormat};
///
/// let format = detect_source_format(b"Name: Jane Doe\n").unwrap();
/// assert_eq!(format, SourceFormat::PlainText);
/// ```
pub fn detect_source_format(data: &[u8]) -> Result<SourceFormat> {
    if data.starts_with(PDF_MAGIC) {
        let version = data
            .get(PDF_MAGIC_LEN..PDF_MAGIC_LEN + VERSION_LEN)
            .map(|v| String::from_utf8_lossy(v).to_string())
            .filter(|v| is_valid_version(v))
            .ok_or_else(|| Error::UnsupportedFileType("malformed PDF header".to_string()))?;
        return Ok(SourceFormat::Pdf { version });
    }

    if !data.contains(&0) && std::str::from_utf8(data).is_ok() {
        return Ok(SourceFormat::PlainText);
    }

    Err(Error::UnsupportedFileType(
        "input is neither plain text nor a PDF document".to_string(),
    ))
}

/// Classify a file name by its extension (case-insensitive).
///
/// Returns `Err(Error::UnsupportedFileType)` for any extension other than
/// `.pdf` or `.txt`.
pub fn source_kind_from_name(file_name: &str) -> Result<SourceKind> {
    let extension = Path::new(file_name)
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase());

    match extension.as_deref() {
        None => Ok(SourceKind::Unknown),
        Some("pdf") => Ok(SourceKind::Pdf),
        Some("txt") => Ok(SourceKind::Text),
        Some(other) => Err(Error::UnsupportedFileType(format!(
            "'.{}' files are not supported; please upload a .txt or .pdf file",
            other
        ))),
    }
}

/// Check if a version string is valid.
fn is_valid_version(version: &str) -> bool {
    if version.len() != 3 {
        return false;
    }

    let chars: Vec<char> = version.chars().collect();
    chars[0].is_ascii_digit() && chars[1] == '.' && chars[2].is_ascii_digit()
}

/// Check if bytes start with a valid PDF header.
pub fn is_pdf_bytes(data: &[u8]) -> bool {
    matches!(detect_source_format(data), Ok(SourceFormat::Pdf { .. }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_valid_pdf() {
        let data = b"%PDF-1.7\n%\xe2\xe3\xcf\xd3";
        let format = detect_source_format(data).unwrap();
        assert_eq!(
            format,
            SourceFormat::Pdf {
                version: "1.7".to_string()
            }
        );
    }

    #[test]
    fn test_detect_plain_text() {
        let format = detect_source_format("Name: José\nSkills: Rust".as_bytes()).unwrap();
        assert_eq!(format, SourceFormat::PlainText);
    }

    #[test]
    fn test_detect_binary_is_unsupported() {
        let data = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0x00];
        let result = detect_source_format(&data);
        assert!(matches!(result, Err(Error::UnsupportedFileType(_))));
    }

    #[test]
    fn test_detect_truncated_pdf_header() {
        let result = detect_source_format(b"%PDF-");
        assert!(matches!(result, Err(Error::UnsupportedFileType(_))));
    }

    #[test]
    fn test_source_kind_from_name() {
        assert_eq!(source_kind_from_name("resume.PDF").unwrap(), SourceKind::Pdf);
        assert_eq!(source_kind_from_name("cv.txt").unwrap(), SourceKind::Text);
        assert_eq!(source_kind_from_name("resume").unwrap(), SourceKind::Unknown);
        assert!(matches!(
            source_kind_from_name("resume.docx"),
            Err(Error::UnsupportedFileType(_))
        ));
    }

    #[test]
    fn test_is_pdf_bytes() {
        assert!(is_pdf_bytes(b"%PDF-1.4\n"));
        assert!(!is_pdf_bytes(b"Not a PDF"));
        assert!(!is_pdf_bytes(b""));
    }

    #[test]
    fn test_version_validation() {
        assert!(is_valid_version("1.0"));
        assert!(is_valid_version("2.0"));
        assert!(!is_valid_version("10.0"));
        assert!(!is_valid_version("abc"));
    }
}
