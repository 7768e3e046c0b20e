//! Document access seam for text extraction.
//!
//! The extractor only needs four things from a PDF: its page list, each
//! page's content bytes, a content parser, and font-aware string decoding.
//! [`PdfBackend`] names exactly those so tests can substitute an in-memory
//! document; [`LopdfBackend`] is the production implementation.

use std::collections::BTreeMap;

use lopdf::content::Content;
use lopdf::{Document, Object, Stream};

use crate::error::{Error, Result};

/// Object id of a page: (object number, generation).
pub type PageId = (u32, u16);

/// Content stream operand, reduced to the shapes glyph collection reads.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Integer(i64),
    Real(f32),
    Name(Vec<u8>),
    Str(Vec<u8>),
    Array(Vec<Operand>),
    Other,
}

impl Operand {
    /// Numeric value of an integer or real operand.
    pub fn as_number(&self) -> Option<f32> {
        match self {
            Operand::Integer(i) => Some(*i as f32),
            Operand::Real(r) => Some(*r),
            _ => None,
        }
    }
}

impl From<&Object> for Operand {
    fn from(obj: &Object) -> Self {
        match obj {
            Object::Integer(i) => Operand::Integer(*i),
            Object::Real(r) => Operand::Real(*r),
            Object::Name(name) => Operand::Name(name.clone()),
            Object::String(bytes, _) => Operand::Str(bytes.clone()),
            Object::Array(items) => Operand::Array(items.iter().map(Operand::from).collect()),
            _ => Operand::Other,
        }
    }
}

/// One content stream operator with its operands.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentOp {
    pub operator: String,
    pub operands: Vec<Operand>,
}

impl ContentOp {
    pub fn new(operator: impl Into<String>, operands: Vec<Operand>) -> Self {
        Self {
            operator: operator.into(),
            operands,
        }
    }
}

/// Read access to a PDF document.
///
/// Per-page methods fail independently; the extractor logs and skips a page
/// whose content cannot be read or parsed.
pub trait PdfBackend {
    /// Pages keyed by 1-based page number.
    fn pages(&self) -> BTreeMap<u32, PageId>;

    /// Decoded (unfiltered) content bytes of a page.
    fn content_stream(&self, page: PageId) -> Result<Vec<u8>>;

    /// Tokenize content bytes into operations.
    fn parse_operations(&self, data: &[u8]) -> Result<Vec<ContentOp>> {
        parse_content(data)
    }

    /// Turn string operand bytes into text using the named font's encoding.
    fn decode_string(&self, page: PageId, font: &[u8], bytes: &[u8]) -> String;
}

/// Tokenize a content stream with lopdf's content parser.
pub fn parse_content(data: &[u8]) -> Result<Vec<ContentOp>> {
    let content = Content::decode(data).map_err(|e| Error::ExtractionFailure(e.to_string()))?;

    Ok(content
        .operations
        .iter()
        .map(|op| ContentOp::new(op.operator.clone(), op.operands.iter().map(Operand::from).collect()))
        .collect())
}

/// Decode string bytes without font information.
///
/// A UTF-16BE byte order mark wins; otherwise UTF-8 is tried before falling
/// back to Latin-1, which never fails.
pub fn decode_fallback(bytes: &[u8]) -> String {
    match bytes {
        [0xFE, 0xFF, rest @ ..] => {
            let units: Vec<u16> = rest
                .chunks_exact(2)
                .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
                .collect();
            String::from_utf16_lossy(&units)
        }
        _ => match std::str::from_utf8(bytes) {
            Ok(text) => text.to_string(),
            Err(_) => bytes.iter().copied().map(char::from).collect(),
        },
    }
}

/// [`PdfBackend`] over a parsed `lopdf::Document`.
pub struct LopdfBackend {
    doc: Document,
}

impl LopdfBackend {
    /// Parse a document held in memory.
    ///
    /// Any decoder failure surfaces as [`Error::ExtractionFailure`].
    pub fn load_bytes(data: &[u8]) -> Result<Self> {
        match Document::load_mem(data) {
            Ok(doc) => Ok(Self { doc }),
            Err(lopdf::Error::Decryption(_)) => Err(Error::ExtractionFailure(
                "document is encrypted".to_string(),
            )),
            Err(e) => Err(Error::ExtractionFailure(e.to_string())),
        }
    }

    pub fn is_encrypted(&self) -> bool {
        self.doc.is_encrypted()
    }

    /// Header version, e.g. `"1.5"`.
    pub fn version(&self) -> &str {
        &self.doc.version
    }

    fn stream<'a>(&'a self, obj: &'a Object) -> Option<&'a Stream> {
        match obj {
            Object::Reference(id) => match self.doc.get_object(*id) {
                Ok(Object::Stream(stream)) => Some(stream),
                _ => None,
            },
            Object::Stream(stream) => Some(stream),
            _ => None,
        }
    }
}

impl PdfBackend for LopdfBackend {
    fn pages(&self) -> BTreeMap<u32, PageId> {
        self.doc.get_pages()
    }

    fn content_stream(&self, page: PageId) -> Result<Vec<u8>> {
        let contents = self
            .doc
            .get_dictionary(page)
            .and_then(|dict| dict.get(b"Contents"))
            .map_err(|e| Error::ExtractionFailure(e.to_string()))?;

        if let Some(stream) = self.stream(contents) {
            return unfiltered(stream);
        }

        // An array of streams is one logical stream; unreadable parts are dropped.
        let Object::Array(parts) = contents else {
            return Err(Error::ExtractionFailure(format!(
                "page {} {} has no content stream",
                page.0, page.1
            )));
        };
        let mut data = Vec::new();
        for part in parts.iter().filter_map(|obj| self.stream(obj)) {
            if let Ok(bytes) = unfiltered(part) {
                data.extend_from_slice(&bytes);
                data.push(b'\n');
            }
        }
        Ok(data)
    }

    fn decode_string(&self, page: PageId, font: &[u8], bytes: &[u8]) -> String {
        self.doc
            .get_page_fonts(page)
            .ok()
            .and_then(|fonts| fonts.get(font).copied())
            .and_then(|dict| dict.get_font_encoding(&self.doc).ok())
            .and_then(|encoding| Document::decode_text(&encoding, bytes).ok())
            .unwrap_or_else(|| decode_fallback(bytes))
    }
}

/// Stream payload with its filters applied.
fn unfiltered(stream: &Stream) -> Result<Vec<u8>> {
    if !stream.dict.has(b"Filter") {
        return Ok(stream.content.clone());
    }
    stream
        .decompressed_content()
        .map_err(|e| Error::ExtractionFailure(e.to_string()))
}
