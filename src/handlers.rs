use crate::models::{AppState, Level};
use crate::quiz::QuizSession;
use crate::vocab::VocabStore;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A blocking generation call the main loop must perform on the driver's
/// behalf, so it can draw a busy frame before the wait.
#[derive(Debug, PartialEq, Eq)]
pub enum PendingCall {
    SubmitAnswer(String),
    GenerateVocab { topic: String, level: Level },
}

/// Editable text buffer with a char-index cursor. Indices are chars, not
/// bytes; byte offsets are resolved at the edit site so CJK input cannot
/// split a code point.
#[derive(Debug, Default)]
pub struct InputState {
    buffer: String,
    cursor: usize,
    pub scroll_y: u16,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: &str) -> Self {
        Self {
            buffer: text.to_string(),
            cursor: text.chars().count(),
            scroll_y: 0,
        }
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn set_text(&mut self, text: &str) {
        self.buffer = text.to_string();
        self.cursor = self.buffer.chars().count();
        self.scroll_y = 0;
    }

    pub fn clear(&mut self) {
        self.set_text("");
    }

    pub fn insert(&mut self, ch: char) {
        let at = self.byte_index(self.cursor);
        self.buffer.insert(at, ch);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let at = self.byte_index(self.cursor - 1);
            self.buffer.remove(at);
            self.cursor -= 1;
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.buffer.chars().count() {
            self.cursor += 1;
        }
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.buffer.len())
    }
}

/// State of the AI generation form: free-text topic plus a JLPT level.
#[derive(Debug, Default)]
pub struct GenerateForm {
    pub topic: InputState,
    pub level: Level,
}

impl GenerateForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.topic.clear();
        self.level = Level::default();
    }
}

/// Manual-entry editor: Ctrl-S replaces the store, Esc abandons the edit.
pub fn handle_editor_input(
    editor: &mut InputState,
    store: &mut VocabStore,
    app_state: &mut AppState,
    status: &mut Option<String>,
    key: KeyEvent,
) {
    match key.code {
        KeyCode::Esc => {
            *app_state = AppState::Menu;
        }
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            match store.replace_from_text(editor.text()) {
                Ok(summary) => {
                    *status = Some(if summary.skipped > 0 {
                        format!(
                            "updated {} words ({} bad lines skipped)",
                            summary.added, summary.skipped
                        )
                    } else {
                        format!("updated {} words", summary.added)
                    });
                    *app_state = AppState::Menu;
                }
                Err(e) => {
                    *status = Some(e.to_string());
                }
            }
        }
        KeyCode::Enter => editor.insert('\n'),
        KeyCode::Backspace => editor.backspace(),
        KeyCode::Left => editor.move_left(),
        KeyCode::Right => editor.move_right(),
        KeyCode::Char(c) => editor.insert(c),
        _ => {}
    }
}

/// Generation form: Enter requests a vocabulary batch, Tab / Shift-Tab
/// cycle the level, everything else edits the topic.
pub fn handle_generate_input(
    form: &mut GenerateForm,
    app_state: &mut AppState,
    status: &mut Option<String>,
    key: KeyEvent,
) -> Option<PendingCall> {
    match key.code {
        KeyCode::Esc => {
            *app_state = AppState::Menu;
            None
        }
        KeyCode::Tab => {
            form.level = form.level.next();
            None
        }
        KeyCode::BackTab => {
            form.level = form.level.prev();
            None
        }
        KeyCode::Enter => {
            let topic = form.topic.text().trim().to_string();
            if topic.is_empty() {
                *status = Some("enter a topic first".to_string());
                None
            } else {
                Some(PendingCall::GenerateVocab {
                    topic,
                    level: form.level,
                })
            }
        }
        KeyCode::Backspace => {
            form.topic.backspace();
            None
        }
        KeyCode::Left => {
            form.topic.move_left();
            None
        }
        KeyCode::Right => {
            form.topic.move_right();
            None
        }
        KeyCode::Char(c) => {
            form.topic.insert(c);
            None
        }
        _ => None,
    }
}

/// Quiz screen. While feedback is up, Enter dismisses it (and moves to the
/// summary once the run is finished); otherwise keys edit the answer and
/// Enter hands the submission back to the main loop.
pub fn handle_quiz_input(
    session: &mut QuizSession,
    input: &mut InputState,
    app_state: &mut AppState,
    key: KeyEvent,
) -> Option<PendingCall> {
    if session.feedback().is_some() {
        match key.code {
            KeyCode::Esc => *app_state = AppState::QuizQuitConfirm,
            KeyCode::Enter => {
                session.dismiss_feedback();
                if session.is_finished() {
                    *app_state = AppState::Summary;
                }
            }
            _ => {}
        }
        return None;
    }

    match key.code {
        KeyCode::Esc => {
            *app_state = AppState::QuizQuitConfirm;
            None
        }
        KeyCode::Enter => Some(PendingCall::SubmitAnswer(input.text().to_string())),
        KeyCode::Backspace => {
            input.backspace();
            None
        }
        KeyCode::Left => {
            input.move_left();
            None
        }
        KeyCode::Right => {
            input.move_right();
            None
        }
        KeyCode::Char(c) => {
            input.insert(c);
            None
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{GenerateError, TextGenerator};
    use crate::models::VocabEntry;

    struct SilentGenerator;

    impl TextGenerator for SilentGenerator {
        fn generate(&self, _prompt: &str) -> Result<String, GenerateError> {
            Err(GenerateError::Unavailable("offline".to_string()))
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_input_state_inserts_cjk_at_cursor() {
        let mut input = InputState::with_text("猫貓");
        input.move_left();
        input.insert('犬');
        assert_eq!(input.text(), "猫犬貓");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn test_input_state_backspace_removes_whole_char() {
        let mut input = InputState::with_text("勉強");
        input.backspace();
        assert_eq!(input.text(), "勉");
        input.backspace();
        assert_eq!(input.text(), "");
        input.backspace();
        assert_eq!(input.text(), "");
    }

    #[test]
    fn test_input_state_cursor_bounds() {
        let mut input = InputState::with_text("猫");
        input.move_right();
        assert_eq!(input.cursor(), 1);
        input.move_left();
        input.move_left();
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_editor_save_replaces_store() {
        let mut editor = InputState::with_text("犬,狗\nbad line");
        let mut store = VocabStore::with_seed();
        let mut app_state = AppState::ManualEntry;
        let mut status = None;

        handle_editor_input(&mut editor, &mut store, &mut app_state, &mut status, ctrl('s'));

        assert_eq!(app_state, AppState::Menu);
        assert_eq!(store.entries(), &[VocabEntry::new("犬", "狗")]);
        assert!(status.unwrap().contains("1 bad lines skipped"));
    }

    #[test]
    fn test_editor_save_failure_keeps_editing() {
        let mut editor = InputState::with_text("nothing usable here");
        let mut store = VocabStore::with_seed();
        let mut app_state = AppState::ManualEntry;
        let mut status = None;

        handle_editor_input(&mut editor, &mut store, &mut app_state, &mut status, ctrl('s'));

        assert_eq!(app_state, AppState::ManualEntry);
        assert_eq!(store.len(), 3);
        assert!(status.is_some());
    }

    #[test]
    fn test_editor_escape_discards() {
        let mut editor = InputState::with_text("犬,狗");
        let mut store = VocabStore::with_seed();
        let mut app_state = AppState::ManualEntry;
        let mut status = None;

        handle_editor_input(
            &mut editor,
            &mut store,
            &mut app_state,
            &mut status,
            key(KeyCode::Esc),
        );

        assert_eq!(app_state, AppState::Menu);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_editor_enter_inserts_newline() {
        let mut editor = InputState::with_text("猫,貓");
        let mut store = VocabStore::new();
        let mut app_state = AppState::ManualEntry;
        let mut status = None;

        handle_editor_input(
            &mut editor,
            &mut store,
            &mut app_state,
            &mut status,
            key(KeyCode::Enter),
        );

        assert_eq!(editor.text(), "猫,貓\n");
        assert_eq!(app_state, AppState::ManualEntry);
    }

    #[test]
    fn test_generate_form_tab_cycles_level() {
        let mut form = GenerateForm::new();
        let mut app_state = AppState::GenerateForm;
        let mut status = None;

        assert_eq!(form.level, Level::N5);
        handle_generate_input(&mut form, &mut app_state, &mut status, key(KeyCode::Tab));
        assert_eq!(form.level, Level::N4);
        handle_generate_input(&mut form, &mut app_state, &mut status, key(KeyCode::BackTab));
        assert_eq!(form.level, Level::N5);
    }

    #[test]
    fn test_generate_form_requires_topic() {
        let mut form = GenerateForm::new();
        let mut app_state = AppState::GenerateForm;
        let mut status = None;

        let call =
            handle_generate_input(&mut form, &mut app_state, &mut status, key(KeyCode::Enter));
        assert!(call.is_none());
        assert!(status.is_some());
        assert_eq!(app_state, AppState::GenerateForm);
    }

    #[test]
    fn test_generate_form_submits_topic_and_level() {
        let mut form = GenerateForm::new();
        let mut app_state = AppState::GenerateForm;
        let mut status = None;

        for ch in "壽司店".chars() {
            handle_generate_input(&mut form, &mut app_state, &mut status, key(KeyCode::Char(ch)));
        }
        handle_generate_input(&mut form, &mut app_state, &mut status, key(KeyCode::Tab));

        let call =
            handle_generate_input(&mut form, &mut app_state, &mut status, key(KeyCode::Enter));
        assert_eq!(
            call,
            Some(PendingCall::GenerateVocab {
                topic: "壽司店".to_string(),
                level: Level::N4,
            })
        );
    }

    #[test]
    fn test_quiz_typing_then_enter_submits() {
        let mut session = QuizSession::new();
        session.start(&[VocabEntry::new("猫", "貓")]).unwrap();
        let mut input = InputState::new();
        let mut app_state = AppState::Quiz;

        for ch in "是貓".chars() {
            handle_quiz_input(&mut session, &mut input, &mut app_state, key(KeyCode::Char(ch)));
        }
        let call = handle_quiz_input(&mut session, &mut input, &mut app_state, key(KeyCode::Enter));

        assert_eq!(call, Some(PendingCall::SubmitAnswer("是貓".to_string())));
        assert_eq!(app_state, AppState::Quiz);
    }

    #[test]
    fn test_quiz_enter_dismisses_feedback_and_finishes() {
        let mut session = QuizSession::new();
        session.start(&[VocabEntry::new("猫", "貓")]).unwrap();
        session.submit_answer("貓", &SilentGenerator).unwrap();
        assert!(session.feedback().is_some());

        let mut input = InputState::new();
        let mut app_state = AppState::Quiz;
        let call = handle_quiz_input(&mut session, &mut input, &mut app_state, key(KeyCode::Enter));

        assert!(call.is_none());
        assert!(session.feedback().is_none());
        assert_eq!(app_state, AppState::Summary);
    }

    #[test]
    fn test_quiz_feedback_dismissal_mid_run_stays_in_quiz() {
        let mut session = QuizSession::new();
        session
            .start(&[VocabEntry::new("猫", "貓"), VocabEntry::new("犬", "狗")])
            .unwrap();
        session.submit_answer("なにか", &SilentGenerator).unwrap();

        let mut input = InputState::new();
        let mut app_state = AppState::Quiz;
        handle_quiz_input(&mut session, &mut input, &mut app_state, key(KeyCode::Enter));

        assert_eq!(app_state, AppState::Quiz);
        assert!(session.current().is_some());
    }

    #[test]
    fn test_quiz_escape_asks_for_confirmation() {
        let mut session = QuizSession::new();
        session.start(&[VocabEntry::new("猫", "貓")]).unwrap();
        let mut input = InputState::new();
        let mut app_state = AppState::Quiz;

        handle_quiz_input(&mut session, &mut input, &mut app_state, key(KeyCode::Esc));
        assert_eq!(app_state, AppState::QuizQuitConfirm);
    }
}
