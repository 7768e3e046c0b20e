//! PDF writer for a [`PageLayout`].
//!
//! Emits PDF 1.5 with the standard Type1 fonts `Helvetica` (`/F1`) and
//! `Helvetica-Bold` (`/F2`) in WinAnsiEncoding. Output is deterministic: no
//! creation dates and no file identifiers.

use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::Compression;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream, StringFormat};

use crate::error::{Error, Result};

use super::layout::{Element, LayoutPage, PageLayout, RULE_GRAY};
use super::metrics::{FontFace, MM_PER_PT};
use super::options::RenderOptions;

const PRODUCER: &str = concat!("resumekit ", env!("CARGO_PKG_VERSION"));

/// Stroke width of rules, in millimetres.
const RULE_WIDTH: f32 = 0.2;

/// Serialize `layout` to PDF bytes.
pub fn write_pdf(layout: &PageLayout, options: &RenderOptions, title: &str) -> Result<Vec<u8>> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let regular_id = doc.add_object(font_dict(FontFace::Regular));
    let bold_id = doc.add_object(font_dict(FontFace::Bold));
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => regular_id,
            "F2" => bold_id,
        },
    });

    let media_box: Vec<Object> = vec![
        Object::Real(0.0),
        Object::Real(0.0),
        Object::Real(to_pt(layout.page_width)),
        Object::Real(to_pt(layout.page_height)),
    ];

    let mut kids = Vec::with_capacity(layout.pages.len());
    for page in &layout.pages {
        let content = page_content(page, layout.page_height)
            .encode()
            .map_err(|e| Error::RenderFailure(e.to_string()))?;
        let content_id = doc.add_object(content_stream(content, options.compress)?);

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => media_box.clone(),
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        kids.push(Object::from(page_id));
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let info_id: ObjectId = doc.add_object(dictionary! {
        "Title" => Object::String(encode_text_string(title), StringFormat::Literal),
        "Producer" => Object::string_literal(PRODUCER),
    });
    doc.trailer.set("Info", info_id);

    let mut out = Vec::new();
    doc.save_to(&mut out)
        .map_err(|e| Error::RenderFailure(e.to_string()))?;

    log::debug!("wrote {} page(s), {} bytes", count, out.len());
    Ok(out)
}

fn font_dict(face: FontFace) -> Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => face.base_font(),
        "Encoding" => "WinAnsiEncoding",
    }
}

fn resource_name(face: FontFace) -> &'static [u8] {
    match face {
        FontFace::Regular => b"F1",
        FontFace::Bold => b"F2",
    }
}

fn content_stream(content: Vec<u8>, compress: bool) -> Result<Stream> {
    if !compress {
        return Ok(Stream::new(Dictionary::new(), content));
    }

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(&content)
        .map_err(|e| Error::RenderFailure(e.to_string()))?;
    let compressed = encoder
        .finish()
        .map_err(|e| Error::RenderFailure(e.to_string()))?;

    Ok(Stream::new(
        dictionary! { "Filter" => "FlateDecode" },
        compressed,
    ))
}

/// Build the content stream for one page.
///
/// Layout coordinates are millimetres from the top edge; PDF user space is
/// points from the bottom edge.
fn page_content(page: &LayoutPage, page_height: f32) -> Content {
    let mut operations = Vec::new();

    for element in &page.elements {
        match element {
            Element::Text {
                x,
                y,
                text,
                face,
                size,
            } => {
                operations.push(Operation::new("BT", vec![]));
                operations.push(Operation::new(
                    "Tf",
                    vec![
                        Object::Name(resource_name(*face).to_vec()),
                        Object::Real(*size),
                    ],
                ));
                operations.push(Operation::new(
                    "Td",
                    vec![
                        Object::Real(to_pt(*x)),
                        Object::Real(to_pt(page_height - y)),
                    ],
                ));
                operations.push(Operation::new(
                    "Tj",
                    vec![Object::String(encode_win_ansi(text), StringFormat::Literal)],
                ));
                operations.push(Operation::new("ET", vec![]));
            }
            Element::Rule { x1, x2, y } => {
                let gray = f32::from(RULE_GRAY) / 255.0;
                let y = to_pt(page_height - y);
                operations.push(Operation::new("q", vec![]));
                operations.push(Operation::new(
                    "RG",
                    vec![Object::Real(gray), Object::Real(gray), Object::Real(gray)],
                ));
                operations.push(Operation::new("w", vec![Object::Real(to_pt(RULE_WIDTH))]));
                operations.push(Operation::new(
                    "m",
                    vec![Object::Real(to_pt(*x1)), Object::Real(y)],
                ));
                operations.push(Operation::new(
                    "l",
                    vec![Object::Real(to_pt(*x2)), Object::Real(y)],
                ));
                operations.push(Operation::new("S", vec![]));
                operations.push(Operation::new("Q", vec![]));
            }
        }
    }

    Content { operations }
}

fn to_pt(mm: f32) -> f32 {
    mm / MM_PER_PT
}

/// Encode `text` for a WinAnsiEncoding simple font.
///
/// Characters without a WinAnsi code become `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| match ch {
            ' '..='~' | '\u{a0}'..='\u{ff}' => ch as u8,
            '\u{20ac}' => 0x80,
            '\u{2026}' => 0x85,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201c}' => 0x93,
            '\u{201d}' => 0x94,
            '\u{2022}' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            _ => b'?',
        })
        .collect()
}

/// Encode an Info dictionary text string: ASCII as-is, otherwise UTF-16BE with BOM.
fn encode_text_string(text: &str) -> Vec<u8> {
    if text.is_ascii() {
        return text.as_bytes().to_vec();
    }
    let mut bytes = vec![0xFE, 0xFF];
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_win_ansi() {
        assert_eq!(encode_win_ansi("Go, Rust"), b"Go, Rust".to_vec());
        assert_eq!(encode_win_ansi("\u{2022} Jos\u{e9}"), vec![0x95, b' ', b'J', b'o', b's', 0xE9]);
        assert_eq!(encode_win_ansi("\u{2014}\u{20ac}"), vec![0x97, 0x80]);
        assert_eq!(encode_win_ansi("\u{4e2d}\u{1f600}"), b"??".to_vec());
        assert_eq!(encode_win_ansi("\t"), b"?".to_vec());
    }

    #[test]
    fn test_encode_text_string() {
        assert_eq!(encode_text_string("Jane"), b"Jane".to_vec());
        assert_eq!(
            encode_text_string("\u{e9}"),
            vec![0xFE, 0xFF, 0x00, 0xE9]
        );
    }

    #[test]
    fn test_page_content_flips_y() {
        let page = LayoutPage {
            elements: vec![Element::Text {
                x: 20.0,
                y: 20.0,
                text: "Jane".to_string(),
                face: FontFace::Bold,
                size: 28.0,
            }],
        };
        let content = page_content(&page, 297.0);
        let td = content
            .operations
            .iter()
            .find(|op| op.operator == "Td")
            .unwrap();
        match (&td.operands[0], &td.operands[1]) {
            (Object::Real(x), Object::Real(y)) => {
                assert!((*x - 56.69).abs() < 0.01);
                assert!((*y - 785.2).abs() < 0.1);
            }
            other => panic!("unexpected operands {other:?}"),
        }
        let tf = &content.operations[1];
        assert!(matches!(&tf.operands[0], Object::Name(name) if name == b"F2"));
    }

    #[test]
    fn test_write_pdf_loads_back() {
        let layout = PageLayout {
            page_width: 210.0,
            page_height: 297.0,
            pages: vec![LayoutPage::default(), LayoutPage::default()],
        };
        let bytes = write_pdf(&layout, &RenderOptions::default(), "Jane").unwrap();
        assert!(bytes.starts_with(b"%PDF-1.5"));

        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 2);
    }
}
