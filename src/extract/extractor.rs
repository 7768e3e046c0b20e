//! Document-level text extraction.

use unicode_normalization::UnicodeNormalization;

use crate::error::{Error, Result};

use super::backend::{PageId, PdfBackend};
use super::glyph::collect_glyph_runs;
use super::lines::{assemble_lines, join_lines};
use super::options::ExtractOptions;

/// Separator placed between the text of consecutive pages.
const PAGE_SEPARATOR: &str = "\n\n";

/// Turns the pages of a PDF backend into linear, line-structured text.
pub struct TextExtractor<'a, B: PdfBackend + ?Sized> {
    backend: &'a B,
    options: ExtractOptions,
}

impl<'a, B: PdfBackend + ?Sized> TextExtractor<'a, B> {
    /// Create an extractor with default options.
    pub fn new(backend: &'a B) -> Self {
        Self::with_options(backend, ExtractOptions::default())
    }

    /// Create an extractor with custom options.
    pub fn with_options(backend: &'a B, options: ExtractOptions) -> Self {
        Self { backend, options }
    }

    /// Extract the text of every selected page.
    ///
    /// A page that fails to extract is logged and skipped. Fails with
    /// [`Error::EmptyDocument`] when no page yields any text.
    pub fn extract(&self) -> Result<String> {
        let mut page_texts = Vec::new();

        for (index, (page_num, page_id)) in self.backend.pages().into_iter().enumerate() {
            if !self.options.pages.includes(page_num) {
                continue;
            }

            match self.extract_page(page_id, index) {
                Ok(text) => {
                    if !text.is_empty() {
                        page_texts.push(text);
                    }
                }
                Err(e) => {
                    log::warn!("Failed to extract text from page {}: {}", page_num, e);
                }
            }
        }

        let text = page_texts.join(PAGE_SEPARATOR);
        let text = if self.options.normalize_unicode {
            text.nfc().collect::<String>()
        } else {
            text
        };

        if text.trim().is_empty() {
            return Err(Error::EmptyDocument);
        }

        Ok(text)
    }

    /// Extract one page as newline-joined lines.
    pub fn extract_page(&self, page_id: PageId, index: usize) -> Result<String> {
        let content = self.backend.content_stream(page_id)?;
        let ops = self.backend.parse_operations(&content)?;

        let runs = collect_glyph_runs(&ops, index, |font, bytes| {
            self.backend.decode_string(page_id, font, bytes)
        });
        let lines = assemble_lines(&runs, self.options.line_threshold);

        log::debug!(
            "page {:?}: {} glyph runs merged into {} lines",
            page_id,
            runs.len(),
            lines.len()
        );

        Ok(join_lines(&lines))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::backend::decode_fallback;
    use std::collections::BTreeMap;

    /// Backend serving raw content streams; `None` marks a broken page.
    struct StreamBackend {
        pages: Vec<Option<&'static str>>,
    }

    impl PdfBackend for StreamBackend {
        fn pages(&self) -> BTreeMap<u32, PageId> {
            (0..self.pages.len())
                .map(|i| (i as u32 + 1, (i as u32 + 10, 0)))
                .collect()
        }

        fn content_stream(&self, page: PageId) -> Result<Vec<u8>> {
            self.pages[(page.0 - 10) as usize]
                .map(|s| s.as_bytes().to_vec())
                .ok_or_else(|| Error::ExtractionFailure("missing contents".to_string()))
        }

        fn decode_string(&self, _page: PageId, _font: &[u8], bytes: &[u8]) -> String {
            decode_fallback(bytes)
        }
    }

    #[test]
    fn test_extract_single_page() {
        let backend = StreamBackend {
            pages: vec![Some(
                "BT 72 700 Td (Name: Jane) Tj 0 -14 Td (Skills: Go) Tj ET",
            )],
        };
        let text = TextExtractor::new(&backend).extract().unwrap();
        assert_eq!(text, "Name: Jane\nSkills: Go");
    }

    #[test]
    fn test_failing_page_is_skipped() {
        let backend = StreamBackend {
            pages: vec![
                Some("BT 72 700 Td (first) Tj ET"),
                None,
                Some("BT 72 700 Td (third) Tj ET"),
            ],
        };
        let text = TextExtractor::new(&backend).extract().unwrap();
        assert_eq!(text, "first\n\nthird");
    }

    #[test]
    fn test_blank_pages_are_not_separated() {
        let backend = StreamBackend {
            pages: vec![
                Some("BT 72 700 Td (first) Tj ET"),
                Some("BT 72 700 Td (   ) Tj ET"),
                Some("BT 72 700 Td (third) Tj ET"),
            ],
        };
        assert_eq!(TextExtractor::new(&backend).extract().unwrap(), "first\n\nthird");
    }

    #[test]
    fn test_all_pages_failing_is_empty_document() {
        let backend = StreamBackend {
            pages: vec![None, None],
        };
        let result = TextExtractor::new(&backend).extract();
        assert!(matches!(result, Err(Error::EmptyDocument)));
    }

    #[test]
    fn test_page_selection_skips_pages() {
        let backend = StreamBackend {
            pages: vec![
                Some("BT 72 700 Td (first) Tj ET"),
                Some("BT 72 700 Td (second) Tj ET"),
            ],
        };
        let options = ExtractOptions::new()
            .with_pages(crate::extract::options::PageSelection::Pages(vec![2]));
        let text = TextExtractor::with_options(&backend, options)
            .extract()
            .unwrap();
        assert_eq!(text, "second");
    }

    #[test]
    fn test_nfc_normalization() {
        // "e" followed by a combining acute accent
        let backend = StreamBackend {
            pages: vec![Some("BT 72 700 Td (Jose\u{301}) Tj ET")],
        };
        let text = TextExtractor::new(&backend).extract().unwrap();
        assert_eq!(text, "Jos\u{e9}");

        let raw = TextExtractor::with_options(
            &backend,
            ExtractOptions::new().with_unicode_normalization(false),
        )
        .extract()
        .unwrap();
        assert_eq!(raw, "Jose\u{301}");
    }
}
