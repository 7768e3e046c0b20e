//! PDF text extraction.
//!
//! The pipeline is: [`PdfBackend`] pages → content operations →
//! [`GlyphRun`]s (text plus baseline Y) → [`Line`]s grouped by baseline
//! proximity → page text joined by newlines, pages joined by blank lines.

mod backend;
mod extractor;
mod glyph;
mod lines;
mod options;

pub use backend::{
    decode_fallback, parse_content, ContentOp, LopdfBackend, Operand, PageId, PdfBackend,
};
pub use extractor::TextExtractor;
pub use glyph::{collect_glyph_runs, GlyphRun};
pub use lines::{assemble_lines, join_lines, Line};
pub use options::{ExtractOptions, PageSelection, DEFAULT_LINE_THRESHOLD};
