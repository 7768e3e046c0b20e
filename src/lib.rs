//! # resumekit
//!
//! Resume text extraction, parsing and PDF rendering.
//!
//! The crate turns an uploaded resume (plain text or PDF) into linear text,
//! parses that text into a structured [`Resume`], and renders a `Resume` back
//! into a paginated A4 PDF.
//!
//! ## Quick Start
//!
//! ```no_run
//! use resumekit::{load_resume_file, parse_resume, render_resume_pdf};
//!
//! fn main() -> resumekit::Result<()> {
//!     let text = load_resume_file("resume.pdf")?;
//!     let resume = parse_resume(&text);
//!
//!     let pdf = render_resume_pdf(&resume)?;
//!     std::fs::write(resume.suggested_filename(), pdf)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Line-aware extraction**: glyph runs are regrouped into lines by baseline
//! - **Keyword parsing**: `Key: value` sections with continuation lines
//! - **Deterministic rendering**: identical input yields identical PDF bytes
//! - **Tailoring seam**: plug any [`Tailor`] into a [`ResumePipeline`]

pub mod detect;
pub mod error;
pub mod extract;
pub mod model;
pub mod parse;
pub mod pipeline;
pub mod render;

// Re-export commonly used types
pub use detect::{detect_source_format, source_kind_from_name, SourceFormat, SourceKind};
pub use error::{Error, Result};
pub use extract::{ExtractOptions, LopdfBackend, PageSelection, PdfBackend, TextExtractor};
pub use model::Resume;
pub use parse::{parse_resume, ResumeParser};
pub use pipeline::{IdentityTailor, PipelineOutput, ResumePipeline, Tailor};
pub use render::{
    layout_resume, render_resume_pdf, render_resume_pdf_with_options, PageLayout, RenderOptions,
};

use std::path::Path;

/// Extract linear text from PDF bytes.
///
/// Pages are separated by a blank line. Pages that fail to decode are logged
/// and skipped.
///
/// # Errors
///
/// * [`Error::ExtractionFailure`] if the document cannot be opened
/// * [`Error::EmptyDocument`] if no page yields any text
///
/// # Example
///
/// ```no_run
/// let data = std::fs::read("resume.pdf").unwrap();
/// let text = resumekit::extract_text(&data).unwrap();
/// println!("{}", text);
/// ```
pub fn extract_text(data: &[u8]) -> Result<String> {
    extract_text_with_options(data, &ExtractOptions::default())
}

/// Extract linear text from PDF bytes with custom options.
pub fn extract_text_with_options(data: &[u8], options: &ExtractOptions) -> Result<String> {
    let backend = LopdfBackend::load_bytes(data)?;
    if backend.is_encrypted() {
        log::warn!("document is encrypted; extracted text may be empty");
    }
    TextExtractor::with_options(&backend, options.clone()).extract()
}

/// Turn uploaded bytes into resume text.
///
/// The file extension picks the decoder: `.pdf` is extracted, `.txt` is read
/// as UTF-8 (invalid sequences replaced). A name without an extension falls
/// back to content sniffing. Any other extension is rejected with
/// [`Error::UnsupportedFileType`].
pub fn load_resume_text(data: &[u8], file_name: &str) -> Result<String> {
    load_resume_text_with_options(data, file_name, &ExtractOptions::default())
}

/// [`load_resume_text`] with custom extraction options.
pub fn load_resume_text_with_options(
    data: &[u8],
    file_name: &str,
    options: &ExtractOptions,
) -> Result<String> {
    let is_pdf = match source_kind_from_name(file_name)? {
        SourceKind::Pdf => true,
        SourceKind::Text => false,
        SourceKind::Unknown => matches!(detect_source_format(data)?, SourceFormat::Pdf { .. }),
    };

    if is_pdf {
        extract_text_with_options(data, options)
    } else {
        Ok(String::from_utf8_lossy(data).into_owned())
    }
}

/// Read a resume file and return its text.
///
/// # Example
///
/// ```no_run
/// let text = resumekit::load_resume_file("resume.txt").unwrap();
/// let resume = resumekit::parse_resume(&text);
/// ```
pub fn load_resume_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let data = std::fs::read(path)?;
    load_resume_text(&data, &file_name_of(path))
}

/// Read a resume file asynchronously and return its text.
#[cfg(feature = "async")]
pub async fn load_resume_file_async<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let data = tokio::fs::read(path).await?;
    load_resume_text(&data, &file_name_of(path))
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
