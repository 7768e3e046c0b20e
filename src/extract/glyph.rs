//! Glyph-run collection from decoded content streams.
//!
//! Walks the text-showing operators of a page in content-stream order and
//! records each shown string together with the baseline Y coordinate of the
//! text matrix at the time it was shown.

use super::backend::{ContentOp, Operand};

/// A positioned text fragment shown by a single text operator.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphRun {
    /// Decoded text content
    pub text: String,
    /// Baseline Y coordinate in user space
    pub y: f32,
    /// Zero-based index of the originating page
    pub page: usize,
}

impl GlyphRun {
    /// Create a new glyph run.
    pub fn new(text: impl Into<String>, y: f32, page: usize) -> Self {
        Self {
            text: text.into(),
            y,
            page,
        }
    }
}

/// TJ displacement (thousandths of an em) above which a word space is assumed.
const TJ_SPACE_THRESHOLD: f32 = 200.0;

/// Collect glyph runs from a page's content operations.
///
/// `decode` turns a (font resource name, string bytes) pair into text; it is
/// called with the font selected by the most recent `Tf`.
pub fn collect_glyph_runs<F>(ops: &[ContentOp], page: usize, mut decode: F) -> Vec<GlyphRun>
where
    F: FnMut(&[u8], &[u8]) -> String,
{
    let mut runs = Vec::new();
    let mut font: Vec<u8> = Vec::new();
    let mut matrix = TextMatrix::default();
    let mut in_text_block = false;

    for op in ops {
        match op.operator.as_str() {
            "BT" => {
                in_text_block = true;
                matrix.reset();
            }
            "ET" => {
                in_text_block = false;
            }
            "Tf" => {
                if let Some(Operand::Name(name)) = op.operands.first() {
                    font = name.clone();
                }
            }
            "TL" => {
                if let Some(leading) = op.operands.first().and_then(Operand::as_number) {
                    matrix.leading = leading;
                }
            }
            "Td" | "TD" => {
                if op.operands.len() >= 2 {
                    let tx = op.operands[0].as_number().unwrap_or(0.0);
                    let ty = op.operands[1].as_number().unwrap_or(0.0);
                    if op.operator == "TD" {
                        matrix.leading = -ty;
                    }
                    matrix.translate(tx, ty);
                }
            }
            "Tm" => {
                if op.operands.len() >= 6 {
                    let n = |i: usize, default: f32| {
                        op.operands[i].as_number().unwrap_or(default)
                    };
                    matrix.set(n(0, 1.0), n(1, 0.0), n(2, 0.0), n(3, 1.0), n(4, 0.0), n(5, 0.0));
                }
            }
            "T*" => {
                matrix.next_line();
            }
            "Tj" | "TJ" if in_text_block => {
                let text = match op.operands.first() {
                    Some(Operand::Str(bytes)) => decode(&font, bytes),
                    Some(Operand::Array(items)) => decode_tj_array(items, &font, &mut decode),
                    _ => String::new(),
                };
                push_run(&mut runs, text, matrix.y(), page);
            }
            "'" | "\"" => {
                matrix.next_line();
                if in_text_block {
                    let text_idx = if op.operator == "\"" { 2 } else { 0 };
                    if let Some(Operand::Str(bytes)) = op.operands.get(text_idx) {
                        let text = decode(&font, bytes);
                        push_run(&mut runs, text, matrix.y(), page);
                    }
                }
            }
            _ => {}
        }
    }

    runs
}

fn push_run(runs: &mut Vec<GlyphRun>, text: String, y: f32, page: usize) {
    if !text.is_empty() {
        runs.push(GlyphRun { text, y, page });
    }
}

/// Decode a TJ array, turning large negative displacements into word spaces.
fn decode_tj_array<F>(items: &[Operand], font: &[u8], decode: &mut F) -> String
where
    F: FnMut(&[u8], &[u8]) -> String,
{
    let mut combined = String::new();

    for item in items {
        match item {
            Operand::Str(bytes) => combined.push_str(&decode(font, bytes)),
            Operand::Integer(_) | Operand::Real(_) => {
                let adjustment = -item.as_number().unwrap_or(0.0);
                if adjustment > TJ_SPACE_THRESHOLD {
                    if let Some(last) = combined.chars().last() {
                        if !last.is_whitespace() && !is_spaceless_script_char(last) {
                            combined.push(' ');
                        }
                    }
                }
            }
            _ => {}
        }
    }

    combined
}

/// Text matrix state needed to locate baselines.
#[derive(Debug, Clone, Copy)]
struct TextMatrix {
    a: f32,
    b: f32,
    c: f32,
    d: f32,
    e: f32, // X translation
    f: f32, // Y translation
    leading: f32,
}

impl Default for TextMatrix {
    fn default() -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: 0.0,
            f: 0.0,
            leading: 0.0,
        }
    }
}

impl TextMatrix {
    /// Reset position at `BT`; leading is graphics state and survives.
    fn reset(&mut self) {
        *self = Self {
            leading: self.leading,
            ..Self::default()
        };
    }

    fn set(&mut self, a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) {
        self.a = a;
        self.b = b;
        self.c = c;
        self.d = d;
        self.e = e;
        self.f = f;
    }

    fn translate(&mut self, tx: f32, ty: f32) {
        self.e += tx * self.a + ty * self.c;
        self.f += tx * self.b + ty * self.d;
    }

    fn next_line(&mut self) {
        self.translate(0.0, -self.leading);
    }

    fn y(&self) -> f32 {
        self.f
    }
}

/// Check if character is from a script that doesn't use word spaces.
/// Chinese and Japanese don't use spaces between words, but Korean does.
fn is_spaceless_script_char(c: char) -> bool {
    let code = c as u32;

    // CJK Unified Ideographs and Extension A
    (0x4E00..=0x9FFF).contains(&code)
    || (0x3400..=0x4DBF).contains(&code)
    // CJK Unified Ideographs Extension B-F
    || (0x20000..=0x2EBEF).contains(&code)
    // Hiragana and Katakana
    || (0x3040..=0x30FF).contains(&code)
    // CJK Symbols and Punctuation
    || (0x3000..=0x303F).contains(&code)
}
