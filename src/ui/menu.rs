use crate::ui::layout::calculate_menu_chunks;
use crate::utils::truncate_string;
use crate::vocab::VocabStore;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

pub fn draw_menu(f: &mut Frame, store: &VocabStore, status: Option<&str>, ai_ready: bool) {
    let layout = calculate_menu_chunks(f.area());

    let title = Paragraph::new("Tango Trainer")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.title_area);

    let items: Vec<ListItem> = if store.is_empty() {
        vec![ListItem::new("No words yet - add some with 'm' or 'g'").style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )]
    } else {
        store
            .entries()
            .iter()
            .map(|entry| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        truncate_string(&entry.term, 20),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::from("  →  "),
                    Span::from(truncate_string(&entry.translation, 40)),
                ]))
            })
            .collect()
    };

    let list_title = format!("Vocabulary ({} words)", store.len());
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(list_title));
    f.render_widget(list, layout.list_area);

    let status_line = match status {
        Some(message) => Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Yellow),
        )),
        None if !ai_ready => Line::from(Span::styled(
            "OPENROUTER_API_KEY not set - generation will be unavailable",
            Style::default().fg(Color::DarkGray),
        )),
        None => Line::from(""),
    };
    let status_widget = Paragraph::new(status_line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status_widget, layout.status_area);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "m",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Edit Words  "),
        Span::styled(
            "g",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" AI Generate  "),
        Span::styled(
            "s",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Start Quiz  "),
        Span::styled(
            "q",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Quit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}
