use crate::handlers::InputState;
use crate::utils::calculate_wrapped_cursor_position;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_manual_editor(f: &mut Frame, editor: &mut InputState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Edit Vocabulary - one term,translation per line")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let body_area = chunks[1];
    let visible_height = body_area.height.saturating_sub(2) as usize;
    let text_width = body_area.width.saturating_sub(2) as usize;

    let (cursor_line, _) =
        calculate_wrapped_cursor_position(editor.text(), editor.cursor(), text_width.max(1));
    let mut scroll = editor.scroll_y as usize;
    if cursor_line < scroll {
        scroll = cursor_line;
    } else if visible_height > 0 && cursor_line >= scroll + visible_height {
        scroll = cursor_line - visible_height + 1;
    }
    editor.scroll_y = scroll as u16;

    let content = if editor.text().is_empty() {
        Text::from("[Type your word list here...]")
    } else {
        Text::from(editor.text())
    };
    let body = Paragraph::new(content)
        .wrap(Wrap { trim: true })
        .scroll((editor.scroll_y, 0))
        .block(Block::default().borders(Borders::ALL).title("Word List"));
    f.render_widget(body, body_area);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "Ctrl-S",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Save  "),
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" New Line  "),
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Cancel"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}
