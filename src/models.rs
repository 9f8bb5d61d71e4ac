use serde::{Deserialize, Serialize};

/// A single vocabulary pair: the Japanese term and its translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabEntry {
    pub term: String,
    pub translation: String,
}

impl VocabEntry {
    pub fn new(term: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            translation: translation.into(),
        }
    }
}

/// JLPT difficulty, passed through to the generation prompt verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    N5,
    N4,
    N3,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::N5, Level::N4, Level::N3];

    pub fn jlpt(self) -> &'static str {
        match self {
            Level::N5 => "N5",
            Level::N4 => "N4",
            Level::N3 => "N3",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Level::N5 => "N5 (beginner)",
            Level::N4 => "N4 (elementary)",
            Level::N3 => "N3 (intermediate)",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Level::N5 => Level::N4,
            Level::N4 => Level::N3,
            Level::N3 => Level::N5,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Level::N5 => Level::N3,
            Level::N4 => Level::N5,
            Level::N3 => Level::N4,
        }
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::N5
    }
}

/// Result of the most recent answer, kept until the user moves on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub is_correct: bool,
    pub correct_translation: String,
    pub example: String,
}

#[derive(Debug, PartialEq)]
pub enum AppState {
    Menu,
    ManualEntry,
    GenerateForm,
    Quiz,
    QuizQuitConfirm,
    Summary,
}
