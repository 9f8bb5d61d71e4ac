pub mod ai;
pub mod ai_worker;
pub mod handlers;
pub mod logger;
pub mod models;
pub mod quiz;
pub mod ui;
pub mod utils;
pub mod vocab;

// Re-exports for convenience
pub use ai::{
    GenerateError, GenerationBackend, ModelConfig, OpenRouterClient, TextGenerator, DEFAULT_MODEL,
    DEFAULT_TIMEOUT_SECS,
};
pub use ai_worker::{spawn_generation_worker, GenRequest, GenResponse, WorkerGenerator};
pub use handlers::{
    handle_editor_input, handle_generate_input, handle_quiz_input, GenerateForm, InputState,
    PendingCall,
};
pub use models::{AppState, Feedback, Level, VocabEntry};
pub use quiz::{QuizError, QuizSession, NO_EXAMPLE_PLACEHOLDER};
pub use ui::{
    draw_busy, draw_generate_form, draw_manual_editor, draw_menu, draw_quit_confirmation,
    draw_quiz, draw_summary,
};
pub use utils::calculate_wrapped_cursor_position;
pub use vocab::{parse_vocab_lines, ParseSummary, VocabError, VocabStore};
