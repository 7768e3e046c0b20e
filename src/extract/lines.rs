//! Line assembly from glyph runs.

use super::glyph::GlyphRun;

/// One line of reading-order text merged from consecutive glyph runs.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// Merged text, trimmed
    pub text: String,
    /// Baseline Y of the first run on the line
    pub y: f32,
}

/// Merge glyph runs into lines, in source order.
///
/// A new line starts whenever a run's baseline differs from the previous
/// run's baseline by more than `threshold`. Runs are not sorted by position:
/// producers that emit text out of reading order yield lines in that order.
/// Whitespace-only lines are dropped.
pub fn assemble_lines(runs: &[GlyphRun], threshold: f32) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_y = 0.0;
    let mut last_y: Option<f32> = None;

    for run in runs {
        match last_y {
            Some(prev) if (run.y - prev).abs() > threshold => {
                flush(&mut lines, &current, current_y);
                current.clear();
                current.push_str(&run.text);
                current_y = run.y;
            }
            _ => {
                if current.is_empty() {
                    current_y = run.y;
                }
                append_run(&mut current, &run.text);
            }
        }
        last_y = Some(run.y);
    }
    flush(&mut lines, &current, current_y);

    lines
}

/// Join lines with single newlines.
pub fn join_lines(lines: &[Line]) -> String {
    lines
        .iter()
        .map(|l| l.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Append a run, inserting one space unless either side already has whitespace.
fn append_run(line: &mut String, text: &str) {
    let line_ends_with_space = line.chars().last().is_some_and(char::is_whitespace);
    let text_starts_with_space = text.chars().next().is_some_and(char::is_whitespace);

    if !line.is_empty() && !line_ends_with_space && !text_starts_with_space {
        line.push(' ');
    }
    line.push_str(text);
}

fn flush(lines: &mut Vec<Line>, text: &str, y: f32) {
    let text = text.trim();
    if !text.is_empty() {
        lines.push(Line {
            text: text.to_string(),
            y,
        });
    }
}
