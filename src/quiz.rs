use crate::ai::{prompts, TextGenerator};
use crate::logger;
use crate::models::{Feedback, VocabEntry};
use rand::seq::SliceRandom;
use thiserror::Error;

/// Shown instead of an example sentence when generation fails or times out.
pub const NO_EXAMPLE_PLACEHOLDER: &str = "no example available";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("cannot start a quiz with an empty vocabulary list")]
    EmptyVocabulary,

    #[error("answer is empty - type something first")]
    EmptyAnswer,

    #[error("the quiz is already finished")]
    SessionFinished,
}

/// One quiz run over a shuffled snapshot of the vocabulary list.
///
/// The session moves Idle -> Running -> Finished: `start` activates it,
/// `submit_answer` advances one question at a time, and reaching the end of
/// the order makes it Finished until `reset` returns it to Idle. The order
/// is fixed at start time; later store changes do not affect a running quiz.
#[derive(Debug, Default)]
pub struct QuizSession {
    order: Vec<VocabEntry>,
    position: usize,
    score: usize,
    feedback: Option<Feedback>,
    active: bool,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a run over a shuffled copy of `entries`.
    pub fn start(&mut self, entries: &[VocabEntry]) -> Result<(), QuizError> {
        if entries.is_empty() {
            return Err(QuizError::EmptyVocabulary);
        }
        let mut order = entries.to_vec();
        order.shuffle(&mut rand::thread_rng());
        self.order = order;
        self.position = 0;
        self.score = 0;
        self.feedback = None;
        self.active = true;
        Ok(())
    }

    /// Score one answer against the pending question and advance.
    ///
    /// Correctness is a bidirectional substring test on the trimmed answer,
    /// case-sensitive. This accepts answers with extra words around the
    /// translation, and also accepts a short answer that happens to be
    /// contained in it - intentionally loose, kept from the original tool.
    ///
    /// The example sentence is best-effort: any generator failure collapses
    /// to [`NO_EXAMPLE_PLACEHOLDER`] and never blocks scoring or advancement.
    pub fn submit_answer(
        &mut self,
        raw: &str,
        generator: &dyn TextGenerator,
    ) -> Result<(), QuizError> {
        if !self.active || self.position >= self.order.len() {
            return Err(QuizError::SessionFinished);
        }
        let answer = raw.trim();
        if answer.is_empty() {
            return Err(QuizError::EmptyAnswer);
        }

        let question = self.order[self.position].clone();
        let is_correct = is_correct_answer(answer, &question.translation);
        if is_correct {
            self.score += 1;
        }

        let prompt = prompts::example_sentence(&question.term, &question.translation);
        let example = match generator.generate(&prompt) {
            Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
            Ok(_) => NO_EXAMPLE_PLACEHOLDER.to_string(),
            Err(err) => {
                logger::log(&format!(
                    "example generation failed for {}: {}",
                    question.term, err
                ));
                NO_EXAMPLE_PLACEHOLDER.to_string()
            }
        };

        self.feedback = Some(Feedback {
            is_correct,
            correct_translation: question.translation,
            example,
        });
        self.position += 1;
        Ok(())
    }

    /// Clear the feedback panel without touching position or score.
    /// Dismissed enrichment text is gone for good; it is never regenerated.
    pub fn dismiss_feedback(&mut self) {
        self.feedback = None;
    }

    /// Back to Idle from any state.
    pub fn reset(&mut self) {
        self.order.clear();
        self.position = 0;
        self.score = 0;
        self.feedback = None;
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_finished(&self) -> bool {
        self.active && self.position >= self.order.len()
    }

    /// The question currently pending, if any.
    pub fn current(&self) -> Option<&VocabEntry> {
        if self.active {
            self.order.get(self.position)
        } else {
            None
        }
    }

    pub fn order(&self) -> &[VocabEntry] {
        &self.order
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total(&self) -> usize {
        self.order.len()
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }
}

fn is_correct_answer(answer: &str, translation: &str) -> bool {
    answer.contains(translation) || translation.contains(answer)
}
