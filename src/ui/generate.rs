use crate::handlers::GenerateForm;
use crate::models::Level;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw_generate_form(f: &mut Frame, form: &GenerateForm, status: Option<&str>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Generate Vocabulary")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let topic_text = if form.topic.text().is_empty() {
        "[e.g. sushi restaurant, taking the train...]"
    } else {
        form.topic.text()
    };
    let topic = Paragraph::new(topic_text)
        .block(Block::default().borders(Borders::ALL).title("Topic"));
    f.render_widget(topic, chunks[1]);

    let mut level_spans: Vec<Span> = Vec::new();
    for level in Level::ALL {
        let style = if level == form.level {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        level_spans.push(Span::styled(level.label().to_string(), style));
        level_spans.push(Span::from("   "));
    }
    let levels = Paragraph::new(Line::from(level_spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Level"));
    f.render_widget(levels, chunks[2]);

    if let Some(message) = status {
        let status_widget = Paragraph::new(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Yellow),
        ))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(status_widget, chunks[3]);
    }

    let help_text = vec![Line::from(vec![
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Generate  "),
        Span::styled(
            "Tab",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Level  "),
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
    f.render_widget(help, chunks[5]);
}
