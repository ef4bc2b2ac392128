//! Greedy word-wrap reflow.
//!
//! The dialog widget stores its body as reflowed lines and pages over them;
//! this module owns the wrapping rule. Wrapping is greedy with no lookahead:
//! tokens accumulate into the current line until the next token would not fit,
//! at which point the line is closed and that token starts the next one.

use unicode_width::UnicodeWidthStr;

/// Reflows raw text into lines of at most `max_width` display columns.
///
/// The text is split on whitespace into tokens; tokens are rejoined with
/// single spaces. A token is never split across lines, so a single token wider
/// than `max_width` gets a line of its own that exceeds the limit. Empty or
/// whitespace-only input produces no lines.
///
/// Joining the returned lines with single spaces reproduces the
/// whitespace-collapsed input.
///
/// # Example
///
/// ```
/// use termprompt_text::reflow;
///
/// let lines = reflow("the quick brown fox jumps", 11);
/// assert_eq!(lines, vec!["the quick", "brown fox", "jumps"]);
/// ```
pub fn reflow(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for token in text.split_whitespace() {
        let token_width = token.width();

        if current.is_empty() {
            // An oversized token still gets a line of its own.
            current.push_str(token);
            current_width = token_width;
            continue;
        }

        if current_width + 1 + token_width <= max_width {
            current.push(' ');
            current.push_str(token);
            current_width += 1 + token_width;
        } else {
            lines.push(current);
            current = token.to_string();
            current_width = token_width;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// Centers `line` within `width` display columns, padding with `fill`.
///
/// When the padding is odd the extra fill character goes on the right. A line
/// already at or beyond `width` is returned unchanged; nothing is ever
/// truncated.
///
/// # Example
///
/// ```
/// use termprompt_text::center_decorated;
///
/// assert_eq!(center_decorated("<NO>", 5, ' '), "<NO> ");
/// assert_eq!(center_decorated("body", 10, '*'), "***body***");
/// ```
pub fn center_decorated(line: &str, width: usize, fill: char) -> String {
    let line_width = line.width();
    if line_width >= width {
        return line.to_string();
    }

    let pad = width - line_width;
    let left = pad / 2;
    let right = pad - left;

    let mut out = String::with_capacity(line.len() + pad);
    for _ in 0..left {
        out.push(fill);
    }
    out.push_str(line);
    for _ in 0..right {
        out.push(fill);
    }
    out
}
