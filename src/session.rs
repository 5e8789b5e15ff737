//! One playthrough: position, selection and score over a fixed question list.

use crate::error::ConfigError;
use crate::models::{OPTION_COUNT, Question};
use crate::reward::RewardKind;

/// Top-level phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Quiz,
    Result,
}

/// Outcome of answering the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    pub correct: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Selection {
    option: usize,
    feedback: Feedback,
}

#[derive(Debug, Clone)]
pub struct QuizSession {
    phase: Phase,
    questions: Vec<Question>,
    current_index: usize,
    score: usize,
    selection: Option<Selection>,
}

impl QuizSession {
    /// A session waiting for its questions.
    pub fn new() -> Self {
        Self {
            phase: Phase::Loading,
            questions: Vec::new(),
            current_index: 0,
            score: 0,
            selection: None,
        }
    }

    pub fn with_questions(questions: Vec<Question>) -> Result<Self, ConfigError> {
        let mut session = Self::new();
        session.begin(questions)?;
        Ok(session)
    }

    /// Leaves `Loading` for the first unanswered question.
    ///
    /// An empty list is fatal: the session stays in `Loading`.
    pub fn begin(&mut self, questions: Vec<Question>) -> Result<(), ConfigError> {
        if questions.is_empty() {
            return Err(ConfigError::EmptySource);
        }

        log::info!("Starting quiz with {} questions", questions.len());
        self.questions = questions;
        self.reset_progress();
        Ok(())
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_answered(&self) -> bool {
        self.selection.is_some()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            Phase::Quiz => self.questions.get(self.current_index),
            _ => None,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question_number(&self) -> usize {
        self.current_index + 1
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn selected(&self) -> Option<usize> {
        self.selection.map(|selection| selection.option)
    }

    pub fn feedback(&self) -> Option<Feedback> {
        self.selection.map(|selection| selection.feedback)
    }

    /// Fraction of questions answered correctly, in `[0, 1]`.
    pub fn score_ratio(&self) -> f32 {
        if self.questions.is_empty() {
            0.0
        } else {
            self.score as f32 / self.questions.len() as f32
        }
    }

    /// Reward animation for the result screen.
    pub fn reward(&self) -> Option<RewardKind> {
        match self.phase {
            Phase::Result => Some(RewardKind::for_score(self.score, self.questions.len())),
            _ => None,
        }
    }

    /// Answers the current question.
    ///
    /// Returns `None` when the question is already answered or the session is
    /// not in `Quiz`. Callers only pass hit-tested indices, so an index past
    /// the last option is a bug.
    pub fn select_option(&mut self, option: usize) -> Option<Feedback> {
        debug_assert!(option < OPTION_COUNT, "option {} out of range", option);

        if option >= OPTION_COUNT {
            log::warn!("Refusing out-of-range option {}", option);
            return None;
        }
        if self.phase != Phase::Quiz || self.selection.is_some() {
            log::debug!("Ignoring selection of option {} in {:?}", option, self.phase);
            return None;
        }

        let question = self.questions.get(self.current_index)?;
        let feedback = Feedback {
            correct: question.is_correct(option),
        };
        if feedback.correct {
            self.score += 1;
        }
        self.selection = Some(Selection { option, feedback });
        Some(feedback)
    }

    /// Moves past an answered question; ignored otherwise.
    pub fn advance(&mut self) -> bool {
        if self.phase != Phase::Quiz || self.selection.is_none() {
            return false;
        }

        self.current_index += 1;
        self.selection = None;

        if self.current_index == self.questions.len() {
            log::info!(
                "Quiz finished: {} / {}",
                self.score,
                self.questions.len()
            );
            self.phase = Phase::Result;
        }
        true
    }

    /// Plays the same questions again from the start.
    pub fn restart(&mut self) -> bool {
        if self.phase != Phase::Result {
            return false;
        }

        self.reset_progress();
        true
    }

    fn reset_progress(&mut self) {
        self.phase = Phase::Quiz;
        self.current_index = 0;
        self.score = 0;
        self.selection = None;
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}
