use lazy_static::lazy_static;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use regex::Regex;

lazy_static! {
    static ref NUMBERED: Regex = Regex::new(r"^(\d+)\.\s+(.*)$").unwrap();
    static ref INLINE: Regex = Regex::new(r"(\*\*(.+?)\*\*|\*(.+?)\*|`([^`]+)`)").unwrap();
}

/// Render lightly-marked-up generator output to ratatui lines.
/// Supports **bold**, *italic*, `code` and - / * / numbered list items,
/// which covers what the example sentences actually come back with.
pub fn render_markdown(content: &str) -> Vec<Line<'static>> {
    let mut result = Vec::new();

    for line in content.lines() {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            result.push(Line::from(""));
            continue;
        }

        if let Some(item) = trimmed.strip_prefix("- ").or(trimmed.strip_prefix("* ")) {
            let mut spans = vec![Span::from("  • ")];
            spans.extend(parse_inline(item));
            result.push(Line::from(spans));
            continue;
        }

        if let Some(caps) = NUMBERED.captures(trimmed) {
            let num = caps.get(1).map(|m| m.as_str()).unwrap_or("");
            let item = caps.get(2).map(|m| m.as_str()).unwrap_or("");
            let mut spans = vec![Span::from(format!("  {}. ", num))];
            spans.extend(parse_inline(item));
            result.push(Line::from(spans));
            continue;
        }

        result.push(Line::from(parse_inline(line)));
    }

    result
}

fn parse_inline(text: &str) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut remaining = text;

    while !remaining.is_empty() {
        let Some(m) = INLINE.find(remaining) else {
            spans.push(Span::from(remaining.to_string()));
            break;
        };

        if m.start() > 0 {
            spans.push(Span::from(remaining[..m.start()].to_string()));
        }

        if let Some(caps) = INLINE.captures(m.as_str()) {
            if let Some(bold) = caps.get(2) {
                spans.push(Span::styled(
                    bold.as_str().to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ));
            } else if let Some(italic) = caps.get(3) {
                spans.push(Span::styled(
                    italic.as_str().to_string(),
                    Style::default().add_modifier(Modifier::ITALIC),
                ));
            } else if let Some(code) = caps.get(4) {
                spans.push(Span::styled(
                    code.as_str().to_string(),
                    Style::default().add_modifier(Modifier::DIM),
                ));
            }
        }

        remaining = &remaining[m.end()..];
    }

    if spans.is_empty() {
        spans.push(Span::from(text.to_string()));
    }

    spans
}
