pub mod markdown;

pub use markdown::render_markdown;

use unicode_width::UnicodeWidthChar;

pub fn truncate_string(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Simulate how a paragraph wraps with `Wrap { trim: true }`: explicit
/// newlines break, everything wider than `max_width` display columns breaks,
/// and trailing whitespace is trimmed from each visual line. Widths come
/// from unicode-width, so CJK glyphs count as two columns.
///
/// Returns (line_text, start_char, end_char) per visual line, in char
/// indices into the original string.
fn simulate_wrapped_lines(text: &str, max_width: usize) -> Vec<(String, usize, usize)> {
    let mut lines = Vec::new();
    let mut current_line = String::new();
    let mut current_width = 0;
    let mut line_start = 0;

    for (char_idx, ch) in text.chars().enumerate() {
        if ch == '\n' {
            lines.push((current_line.trim_end().to_string(), line_start, char_idx));
            current_line = String::new();
            current_width = 0;
            line_start = char_idx + 1;
            continue;
        }

        let char_width = ch.width().unwrap_or(1);
        if current_width + char_width > max_width && current_width > 0 {
            lines.push((current_line.trim_end().to_string(), line_start, char_idx));
            current_line = ch.to_string();
            current_width = char_width;
            line_start = char_idx;
        } else {
            current_line.push(ch);
            current_width += char_width;
        }
    }

    let total_chars = text.chars().count();
    if !current_line.is_empty() || text.ends_with('\n') || text.is_empty() {
        lines.push((current_line.trim_end().to_string(), line_start, total_chars));
    }

    lines
}

/// Visual (line, column) of a char-index cursor within wrapped text.
/// Used to keep the cursor in view while editing; the column is in chars,
/// not display columns, since it only feeds scroll decisions.
pub fn calculate_wrapped_cursor_position(
    text: &str,
    cursor: usize,
    max_width: usize,
) -> (usize, usize) {
    if text.is_empty() || cursor == 0 {
        return (0, 0);
    }

    let wrapped = simulate_wrapped_lines(text, max_width);
    for (line_idx, (_, start, end)) in wrapped.iter().enumerate() {
        if cursor >= *start && cursor <= *end {
            return (line_idx, cursor - start);
        }
    }

    // Cursor past the last simulated line; clamp to its end.
    match wrapped.last() {
        Some((line, _, _)) => (wrapped.len() - 1, line.chars().count()),
        None => (0, 0),
    }
}
