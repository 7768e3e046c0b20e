//! Resume rendering.
//!
//! [`layout_resume`] places the resume on a multi-page canvas; the PDF writer
//! then serializes that canvas with lopdf.

mod cursor;
mod layout;
mod metrics;
mod options;
mod pdf;

pub use cursor::LayoutCursor;
pub use layout::{layout_resume, Element, LayoutPage, PageLayout, RULE_GRAY};
pub use metrics::{text_width_mm, wrap_text, FontFace, MM_PER_PT};
pub use options::{RenderOptions, A4_HEIGHT, A4_WIDTH};
pub use pdf::encode_win_ansi;

use crate::error::Result;
use crate::model::Resume;

/// Render `resume` to PDF bytes with default options.
pub fn render_resume_pdf(resume: &Resume) -> Result<Vec<u8>> {
    render_resume_pdf_with_options(resume, &RenderOptions::default())
}

/// Render `resume` to PDF bytes.
///
/// Fails with [`crate::Error::RenderFailure`] only when the PDF writer faults.
pub fn render_resume_pdf_with_options(resume: &Resume, options: &RenderOptions) -> Result<Vec<u8>> {
    let layout = layout_resume(resume, options);
    let title = options.title.as_deref().unwrap_or(&resume.name);
    pdf::write_pdf(&layout, options, title)
}
