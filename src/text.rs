//! # Text Wrapping
//!
//! Greedy line breaking against real font metrics.
//!
//! The algorithm is the editor's contract, not a typesetting engine: a line
//! starts with its first word, and each following word is appended with a
//! single space separator if the measured candidate still fits, otherwise it
//! opens the next line. A word that is too wide to fit on a line by itself
//! is hard-broken character by character at the last position that fits.
//! Newlines in the source always start a new paragraph, independently of the
//! fitting logic. Justified text renders flush-left; inter-word spacing
//! adjustment is not implemented.

use crate::font::FontMetrics;

/// One wrapped line with its measured width in points.
#[derive(Debug, Clone, PartialEq)]
pub struct WrappedLine {
    pub text: String,
    pub width: f64,
}

/// Wrap `text` into lines no wider than `max_width` points.
///
/// Always returns at least one line (empty input yields one empty line), so
/// callers can anchor a text block without special-casing. A single word
/// wider than `max_width` produces hard-broken fragments of at least one
/// character each — the loop always advances.
pub fn wrap(text: &str, max_width: f64, metrics: &FontMetrics, font_size: f64) -> Vec<WrappedLine> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        wrap_paragraph(paragraph, max_width, metrics, font_size, &mut lines);
    }

    lines
}

fn wrap_paragraph(
    paragraph: &str,
    max_width: f64,
    metrics: &FontMetrics,
    font_size: f64,
    lines: &mut Vec<WrappedLine>,
) {
    let mut words = paragraph.split_whitespace();

    let mut current = match words.next() {
        Some(first) => place_word(first, max_width, metrics, font_size, lines),
        None => {
            // Blank paragraph: an empty line keeps explicit newlines visible.
            lines.push(WrappedLine {
                text: String::new(),
                width: 0.0,
            });
            return;
        }
    };

    for word in words {
        let candidate_width = metrics.measure(&current, font_size)
            + metrics.char_width(' ', font_size)
            + metrics.measure(word, font_size);
        if candidate_width <= max_width {
            current.push(' ');
            current.push_str(word);
        } else {
            commit(current, metrics, font_size, lines);
            current = place_word(word, max_width, metrics, font_size, lines);
        }
    }

    commit(current, metrics, font_size, lines);
}

/// Start a fresh line with `word`, hard-breaking it if it cannot fit whole.
///
/// Returns the (possibly trailing fragment of the) word as the new current
/// line; fully emitted fragments are pushed to `lines` directly.
fn place_word(
    word: &str,
    max_width: f64,
    metrics: &FontMetrics,
    font_size: f64,
    lines: &mut Vec<WrappedLine>,
) -> String {
    let mut rest: Vec<char> = word.chars().collect();

    while metrics.measure(&rest.iter().collect::<String>(), font_size) > max_width && rest.len() > 1
    {
        // Longest prefix that fits, but never fewer than one character.
        let mut cut = 1;
        let mut width = metrics.char_width(rest[0], font_size);
        while cut < rest.len() {
            let next = width + metrics.char_width(rest[cut], font_size);
            if next > max_width {
                break;
            }
            width = next;
            cut += 1;
        }
        let fragment: String = rest[..cut].iter().collect();
        commit(fragment, metrics, font_size, lines);
        rest.drain(..cut);
    }

    rest.iter().collect()
}

fn commit(line: String, metrics: &FontMetrics, font_size: f64, lines: &mut Vec<WrappedLine>) {
    let width = metrics.measure(&line, font_size);
    lines.push(WrappedLine { text: line, width });
}
