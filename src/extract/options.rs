//! Extraction options and configuration.

use std::ops::RangeInclusive;

/// Default maximum baseline difference for runs on the same line.
///
/// Tuned for browser-style PDF producers; producers with more baseline
/// jitter (superscripts, mixed font sizes) may need a larger value.
pub const DEFAULT_LINE_THRESHOLD: f32 = 5.0;

/// Options for extracting text from PDF documents.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Maximum baseline Y difference (user-space units) between consecutive
    /// glyph runs that still belong to the same line
    pub line_threshold: f32,

    /// Page selection (which pages to extract)
    pub pages: PageSelection,

    /// Apply Unicode NFC normalization to the extracted text
    pub normalize_unicode: bool,
}

impl ExtractOptions {
    /// Create new extraction options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the line-break threshold. Negative values are clamped to zero.
    pub fn with_line_threshold(mut self, threshold: f32) -> Self {
        self.line_threshold = threshold.max(0.0);
        self
    }

    /// Set page selection.
    pub fn with_pages(mut self, pages: PageSelection) -> Self {
        self.pages = pages;
        self
    }

    /// Enable or disable Unicode normalization.
    pub fn with_unicode_normalization(mut self, normalize: bool) -> Self {
        self.normalize_unicode = normalize;
        self
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            line_threshold: DEFAULT_LINE_THRESHOLD,
            pages: PageSelection::All,
            normalize_unicode: true,
        }
    }
}

/// Page selection for extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PageSelection {
    /// All pages
    #[default]
    All,
    /// A range of pages (inclusive, 1-indexed)
    Range(RangeInclusive<u32>),
    /// Specific pages (1-indexed)
    Pages(Vec<u32>),
    /// Disjoint ranges sorted by first page, as parsed from a comma list
    Ranges(Vec<RangeInclusive<u32>>),
}

impl PageSelection {
    /// Whether the 1-based page `page` is selected.
    pub fn includes(&self, page: u32) -> bool {
        match self {
            Self::All => true,
            Self::Range(range) => range.contains(&page),
            Self::Pages(pages) => pages.contains(&page),
            Self::Ranges(ranges) => ranges.iter().any(|range| range.contains(&page)),
        }
    }

    /// Parse `"all"`, `"2-4"` or a comma list such as `"1,3,5-7"`.
    ///
    /// A lone range stays a `Range`; comma lists become `Ranges` with
    /// overlapping and adjacent pieces merged. Ranges are never expanded into
    /// individual page numbers.
    pub fn parse(spec: &str) -> Result<Self, String> {
        let spec = spec.trim();
        if spec.is_empty() || spec.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }

        let mut parts = spec.split(',').map(parse_span).collect::<Result<Vec<_>, _>>()?;
        if parts.len() == 1 {
            return Ok(Self::Range(parts.remove(0)));
        }

        parts.retain(|range| !range.is_empty());
        parts.sort_by_key(|range| *range.start());

        let mut merged: Vec<RangeInclusive<u32>> = Vec::with_capacity(parts.len());
        for range in parts {
            match merged.last_mut() {
                Some(last) if *range.start() <= last.end().saturating_add(1) => {
                    if range.end() > last.end() {
                        *last = *last.start()..=*range.end();
                    }
                }
                _ => merged.push(range),
            }
        }
        Ok(Self::Ranges(merged))
    }
}

/// One comma-separated piece: `"3"` or `"3-5"`.
fn parse_span(piece: &str) -> Result<RangeInclusive<u32>, String> {
    let number = |text: &str| {
        text.trim()
            .parse::<u32>()
            .map_err(|_| format!("'{}' is not a page number", text.trim()))
    };
    match piece.split_once('-') {
        Some((first, last)) => Ok(number(first)?..=number(last)?),
        None => {
            let page = number(piece)?;
            Ok(page..=page)
        }
    }
}
