//! Standard-14 Helvetica metrics and greedy word wrap.
//!
//! Widths are AFM advance widths in 1/1000 em for ASCII 0x20..=0x7E.
//! Index = (char as usize) - 32.

/// Millimetres per PostScript point.
pub const MM_PER_PT: f32 = 25.4 / 72.0;

/// Width used for characters outside the tables.
const FALLBACK_WIDTH: u16 = 556;

/// Width of the bullet glyph (WinAnsi 0x95) in both faces.
const BULLET_WIDTH: u16 = 350;

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    278, 278, 584, 584, 584, 556, 1015,
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    278, 278, 278, 469, 556, 333,
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];

/// The two faces used by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFace {
    Regular,
    Bold,
}

impl FontFace {
    /// Pick the face for a bold flag.
    pub fn from_bold(bold: bool) -> Self {
        if bold {
            FontFace::Bold
        } else {
            FontFace::Regular
        }
    }

    /// PostScript base font name.
    pub fn base_font(self) -> &'static str {
        match self {
            FontFace::Regular => "Helvetica",
            FontFace::Bold => "Helvetica-Bold",
        }
    }

    /// Advance width of `ch` in 1/1000 em.
    pub fn char_width(self, ch: char) -> u16 {
        let table = match self {
            FontFace::Regular => &HELVETICA,
            FontFace::Bold => &HELVETICA_BOLD,
        };
        match ch {
            ' '..='~' => table[ch as usize - 32],
            '\u{2022}' => BULLET_WIDTH,
            _ => FALLBACK_WIDTH,
        }
    }
}

/// Rendered width of `text` in millimetres at `font_size` points.
pub fn text_width_mm(text: &str, face: FontFace, font_size: f32) -> f32 {
    let units: u32 = text.chars().map(|c| u32::from(face.char_width(c))).sum();
    units as f32 / 1000.0 * font_size * MM_PER_PT
}

/// Split `text` into lines no wider than `max_width` millimetres.
///
/// Words are packed greedily and separated by single spaces; `\n` forces a
/// break. A word wider than the line is broken between characters. Always
/// returns at least one line, which is empty for empty input.
pub fn wrap_text(text: &str, face: FontFace, font_size: f32, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        wrap_paragraph(paragraph, face, font_size, max_width, &mut lines);
    }
    lines
}

fn wrap_paragraph(
    paragraph: &str,
    face: FontFace,
    font_size: f32,
    max_width: f32,
    lines: &mut Vec<String>,
) {
    let fits = |s: &str| text_width_mm(s, face, font_size) <= max_width;
    let mut current = String::new();

    for word in paragraph.split_whitespace() {
        if current.is_empty() {
            if fits(word) {
                current.push_str(word);
                continue;
            }
        } else {
            let candidate = format!("{current} {word}");
            if fits(&candidate) {
                current = candidate;
                continue;
            }
            lines.push(std::mem::take(&mut current));
            if fits(word) {
                current.push_str(word);
                continue;
            }
        }

        // Over-long word: fill lines character by character.
        for ch in word.chars() {
            current.push(ch);
            if current.chars().count() > 1 && !fits(&current) {
                current.pop();
                lines.push(std::mem::take(&mut current));
                current.push(ch);
            }
        }
    }

    lines.push(current);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_widths() {
        assert_eq!(FontFace::Regular.char_width(' '), 278);
        assert_eq!(FontFace::Regular.char_width('W'), 944);
        assert_eq!(FontFace::Regular.char_width('~'), 584);
        assert_eq!(FontFace::Bold.char_width('b'), 611);
        assert_eq!(FontFace::Bold.char_width('\u{2022}'), 350);
        assert_eq!(FontFace::Regular.char_width('\u{4e2d}'), FALLBACK_WIDTH);
    }

    #[test]
    fn test_text_width() {
        // 10 digits at 556 units, 10pt: 55.6pt
        let width = text_width_mm("0123456789", FontFace::Regular, 10.0);
        assert!((width - 55.6 * MM_PER_PT).abs() < 1e-3);
        assert_eq!(text_width_mm("", FontFace::Bold, 10.0), 0.0);
        assert!(text_width_mm("Resume", FontFace::Bold, 10.0) > text_width_mm("Resume", FontFace::Regular, 10.0));
    }

    #[test]
    fn test_wrap_short_text_single_line() {
        assert_eq!(
            wrap_text("Jane   Doe", FontFace::Bold, 28.0, 170.0),
            vec!["Jane Doe"]
        );
    }

    #[test]
    fn test_wrap_empty_text() {
        assert_eq!(wrap_text("", FontFace::Regular, 10.0, 170.0), vec![""]);
    }

    #[test]
    fn test_wrap_respects_width() {
        let text = "lorem ipsum dolor sit amet ".repeat(20);
        let lines = wrap_text(&text, FontFace::Regular, 10.0, 80.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(text_width_mm(line, FontFace::Regular, 10.0) <= 80.0);
            assert!(!line.starts_with(' ') && !line.ends_with(' '));
        }
        assert_eq!(lines.join(" "), text.trim_end());
    }

    #[test]
    fn test_wrap_breaks_long_word() {
        let word = "x".repeat(200);
        let lines = wrap_text(&word, FontFace::Regular, 10.0, 30.0);
        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), word);
        for line in &lines {
            assert!(text_width_mm(line, FontFace::Regular, 10.0) <= 30.0);
        }
    }

    #[test]
    fn test_wrap_hard_breaks() {
        assert_eq!(
            wrap_text("one\ntwo", FontFace::Regular, 10.0, 170.0),
            vec!["one", "two"]
        );
    }
}
