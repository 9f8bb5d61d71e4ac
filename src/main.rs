use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tango_trainer::ai::{prompts, TextGenerator};
use tango_trainer::ai_worker::WorkerGenerator;
use tango_trainer::handlers::{self, GenerateForm, InputState, PendingCall};
use tango_trainer::models::AppState;
use tango_trainer::quiz::QuizSession;
use tango_trainer::vocab::VocabStore;
use tango_trainer::{logger, ui};

fn main() -> io::Result<()> {
    logger::init();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    let mut app_state = AppState::Menu;
    let mut store = VocabStore::with_seed();
    let mut quiz = QuizSession::new();
    let mut editor = InputState::new();
    let mut form = GenerateForm::new();
    let mut answer_input = InputState::new();
    let mut status: Option<String> = None;

    let generator = WorkerGenerator::spawn();
    let ai_ready = std::env::var("OPENROUTER_API_KEY").is_ok();

    loop {
        terminal.draw(|f| match app_state {
            AppState::Menu => ui::draw_menu(f, &store, status.as_deref(), ai_ready),
            AppState::ManualEntry => ui::draw_manual_editor(f, &mut editor),
            AppState::GenerateForm => ui::draw_generate_form(f, &form, status.as_deref()),
            AppState::Quiz => ui::draw_quiz(f, &quiz, &answer_input, status.as_deref()),
            AppState::QuizQuitConfirm => ui::draw_quit_confirmation(f),
            AppState::Summary => ui::draw_summary(f, &quiz),
        })?;

        let Event::Key(key) = event::read()? else {
            continue;
        };

        let mut pending: Option<PendingCall> = None;
        match app_state {
            AppState::Menu => match key.code {
                KeyCode::Char('m') => {
                    status = None;
                    editor.set_text(&store.to_editor_text());
                    app_state = AppState::ManualEntry;
                }
                KeyCode::Char('g') => {
                    status = None;
                    form.reset();
                    app_state = AppState::GenerateForm;
                }
                KeyCode::Char('s') => match quiz.start(store.entries()) {
                    Ok(()) => {
                        status = None;
                        answer_input.clear();
                        app_state = AppState::Quiz;
                    }
                    Err(e) => status = Some(e.to_string()),
                },
                KeyCode::Char('q') => break,
                _ => {}
            },
            AppState::ManualEntry => handlers::handle_editor_input(
                &mut editor,
                &mut store,
                &mut app_state,
                &mut status,
                key,
            ),
            AppState::GenerateForm => {
                pending =
                    handlers::handle_generate_input(&mut form, &mut app_state, &mut status, key);
            }
            AppState::Quiz => {
                pending =
                    handlers::handle_quiz_input(&mut quiz, &mut answer_input, &mut app_state, key);
            }
            AppState::QuizQuitConfirm => match key.code {
                KeyCode::Char('y') | KeyCode::Enter => {
                    quiz.reset();
                    answer_input.clear();
                    status = None;
                    app_state = AppState::Menu;
                }
                KeyCode::Char('n') | KeyCode::Esc => app_state = AppState::Quiz,
                _ => {}
            },
            AppState::Summary => match key.code {
                KeyCode::Char('r') => {
                    quiz.reset();
                    match quiz.start(store.entries()) {
                        Ok(()) => {
                            answer_input.clear();
                            status = None;
                            app_state = AppState::Quiz;
                        }
                        Err(e) => {
                            status = Some(e.to_string());
                            app_state = AppState::Menu;
                        }
                    }
                }
                KeyCode::Char('m') => {
                    quiz.reset();
                    app_state = AppState::Menu;
                }
                KeyCode::Char('q') => break,
                _ => {}
            },
        }

        match pending {
            Some(PendingCall::SubmitAnswer(text)) => {
                terminal.draw(|f| {
                    ui::draw_quiz(f, &quiz, &answer_input, status.as_deref());
                    ui::draw_busy(f, "Writing an example sentence...");
                })?;
                match quiz.submit_answer(&text, &generator) {
                    Ok(()) => {
                        answer_input.clear();
                        status = None;
                    }
                    Err(e) => status = Some(e.to_string()),
                }
            }
            Some(PendingCall::GenerateVocab { topic, level }) => {
                terminal.draw(|f| {
                    ui::draw_generate_form(f, &form, None);
                    ui::draw_busy(f, "Generating vocabulary...");
                })?;
                let prompt = prompts::vocab_batch(&topic, level);
                match generator.generate(&prompt) {
                    Ok(raw) => match store.replace_from_generated(&raw) {
                        Ok(summary) => {
                            status = Some(format!(
                                "generated {} words about {}",
                                summary.added, topic
                            ));
                            app_state = AppState::Menu;
                        }
                        Err(e) => status = Some(e.to_string()),
                    },
                    Err(e) => status = Some(e.to_string()),
                }
            }
            None => {}
        }
    }

    Ok(())
}
