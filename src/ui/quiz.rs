use crate::handlers::InputState;
use crate::quiz::QuizSession;
use crate::ui::layout::calculate_quiz_chunks;
use crate::utils::render_markdown;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

pub fn draw_quiz(f: &mut Frame, session: &QuizSession, input: &InputState, status: Option<&str>) {
    let layout = calculate_quiz_chunks(f.area());

    let total = session.total().max(1);
    let answered = session.position().min(session.total());
    let gauge_label = if session.is_finished() {
        format!("Done - {} / {} answered", answered, session.total())
    } else {
        format!("Question {} / {}", answered + 1, session.total())
    };
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(answered as f64 / total as f64)
        .label(gauge_label);
    f.render_widget(gauge, layout.header_area);

    let question_line = match session.current() {
        Some(entry) => Line::from(Span::styled(
            entry.term.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        None => Line::from("おつかれさまでした！"),
    };
    let question = Paragraph::new(vec![Line::from(""), question_line])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Question"));
    f.render_widget(question, layout.question_area);

    if let Some(feedback) = session.feedback() {
        let mut text = Text::default();
        if feedback.is_correct {
            text.push_line(Line::from(Span::styled(
                "Correct!",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )));
        } else {
            text.push_line(Line::from(Span::styled(
                "Incorrect...",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )));
            text.push_line(Line::from(format!(
                "The answer was: {}",
                feedback.correct_translation
            )));
        }
        text.push_line(Line::from(""));
        text.push_line(Line::from(Span::styled(
            "Example:",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        text.extend(render_markdown(&feedback.example));

        let panel = Paragraph::new(text)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Feedback"));
        f.render_widget(panel, layout.answer_area);
    } else {
        let mut text = Text::from(if input.text().is_empty() {
            "[Type the translation here...]"
        } else {
            input.text()
        });
        if let Some(message) = status {
            text.push_line(Line::from(""));
            text.push_line(Line::from(Span::styled(
                message.to_string(),
                Style::default().fg(Color::Yellow),
            )));
        }
        let answer = Paragraph::new(text)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Your Answer"));
        f.render_widget(answer, layout.answer_area);
    }

    let help_text = if session.feedback().is_some() {
        vec![Line::from(vec![
            Span::styled(
                "Enter",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(" Next  "),
            Span::styled(
                "Esc",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(" Quit Quiz"),
        ])]
    } else {
        vec![Line::from(vec![
            Span::styled(
                "Enter",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(" Submit Answer  "),
            Span::styled(
                "Esc",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(" Quit Quiz"),
        ])]
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

pub fn draw_quit_confirmation(f: &mut Frame) {
    let text = vec![
        Line::from(""),
        Line::from("Abandon this quiz and return to the menu?"),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "y",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(" Yes  "),
            Span::styled(
                "n",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(" Keep Going"),
        ]),
    ];
    let popup = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Quit Quiz?"));
    f.render_widget(popup, f.area());
}
