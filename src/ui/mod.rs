pub mod busy;
pub mod editor;
pub mod generate;
pub mod layout;
mod menu;
mod quiz;
mod summary;

pub use busy::draw_busy;
pub use editor::draw_manual_editor;
pub use generate::draw_generate_form;
pub use layout::{calculate_menu_chunks, calculate_quiz_chunks};
pub use menu::draw_menu;
pub use quiz::{draw_quit_confirmation, draw_quiz};
pub use summary::draw_summary;
