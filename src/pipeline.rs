//! End-to-end resume tailoring pipeline.
//!
//! Loads resume text, parses it, hands the record to a [`Tailor`] together
//! with the job description, and renders the tailored result to PDF.

use std::path::Path;

use crate::error::{Error, Result};
use crate::extract::ExtractOptions;
use crate::model::Resume;
use crate::parse::parse_resume;
use crate::render::{render_resume_pdf_with_options, RenderOptions};

/// Rejection message for missing resume text.
pub const RESUME_TEXT_REQUIRED: &str =
    "Please provide your base resume text or upload a resume file.";

/// Rejection message for a missing job description.
pub const JOB_DESCRIPTION_REQUIRED: &str =
    "Please provide the job description you want to tailor your resume for.";

/// Rewrites a resume for a job description.
///
/// Implementations are typically remote services. Any closure of the shape
/// `Fn(&Resume, &str) -> Result<Resume>` is a `Tailor`.
pub trait Tailor {
    /// Produce a tailored copy of `resume`.
    fn tailor(&self, resume: &Resume, job_description: &str) -> Result<Resume>;
}

impl<F> Tailor for F
where
    F: Fn(&Resume, &str) -> Result<Resume>,
{
    fn tailor(&self, resume: &Resume, job_description: &str) -> Result<Resume> {
        self(resume, job_description)
    }
}

/// A tailor that returns the resume unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTailor;

impl Tailor for IdentityTailor {
    fn tailor(&self, resume: &Resume, _job_description: &str) -> Result<Resume> {
        Ok(resume.clone())
    }
}

/// Everything produced by one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// Resume text the run started from
    pub text: String,
    /// Record parsed from `text`
    pub base: Resume,
    /// Record returned by the tailor
    pub tailored: Resume,
    /// Rendered PDF of `tailored`
    pub pdf: Vec<u8>,
    /// Suggested download name for `pdf`
    pub file_name: String,
}

/// Load → parse → tailor → render.
pub struct ResumePipeline<T: Tailor> {
    tailor: T,
    extract_options: ExtractOptions,
    render_options: RenderOptions,
}

impl<T: Tailor> ResumePipeline<T> {
    /// Create a pipeline with default extraction and render options.
    pub fn new(tailor: T) -> Self {
        Self {
            tailor,
            extract_options: ExtractOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Set extraction options used for PDF input.
    pub fn with_extract_options(mut self, options: ExtractOptions) -> Self {
        self.extract_options = options;
        self
    }

    /// Set render options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }

    /// The tailoring collaborator.
    pub fn tailor(&self) -> &T {
        &self.tailor
    }

    /// Run on resume text already in memory.
    pub fn run_text(&self, resume_text: &str, job_description: &str) -> Result<PipelineOutput> {
        if resume_text.trim().is_empty() {
            return Err(Error::InvalidInput(RESUME_TEXT_REQUIRED.to_string()));
        }
        if job_description.trim().is_empty() {
            return Err(Error::InvalidInput(JOB_DESCRIPTION_REQUIRED.to_string()));
        }

        let base = parse_resume(resume_text);
        log::debug!("parsed resume with {} list entries", base.entry_count());

        let tailored = self
            .tailor
            .tailor(&base, job_description)
            .map_err(|e| Error::Tailoring(format!("Failed to tailor resume: {e}")))?;

        let pdf = render_resume_pdf_with_options(&tailored, &self.render_options)?;
        let file_name = tailored.suggested_filename();

        Ok(PipelineOutput {
            text: resume_text.to_string(),
            base,
            tailored,
            pdf,
            file_name,
        })
    }

    /// Run on an uploaded file's bytes.
    pub fn run_bytes(
        &self,
        data: &[u8],
        file_name: &str,
        job_description: &str,
    ) -> Result<PipelineOutput> {
        let text = crate::load_resume_text_with_options(data, file_name, &self.extract_options)?;
        self.run_text(&text, job_description)
    }

    /// Run on a file on disk.
    pub fn run_file<P: AsRef<Path>>(&self, path: P, job_description: &str) -> Result<PipelineOutput> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.run_bytes(&data, &name, job_description)
    }
}
