use std::io;

use thiserror::Error;

use crate::data::LoadError;

/// The question source cannot be used; the quiz never leaves `Loading`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("question source contains no rows")]
    EmptySource,

    #[error("row {row} is missing column {column}")]
    MissingColumn { row: usize, column: usize },

    #[error("row {row} has correct index {value:?}, expected 0..4")]
    InvalidCorrectIndex { row: usize, value: String },
}

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The question source is empty or malformed.
    #[error("Failed to load questions: {0}")]
    Config(#[from] ConfigError),

    /// IO error during quiz execution.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl From<LoadError> for QuizError {
    fn from(err: LoadError) -> Self {
        QuizError::Config(ConfigError::Load(err))
    }
}
