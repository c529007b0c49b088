use thiserror::Error;

use crate::config::ConfigError;

/// Failures reported by [`PositionalList`](crate::PositionalList).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    #[error("The list is empty or shorter than the requested position")]
    EmptyCollection,

    #[error("Position {offset} is unavailable in a list of {len} elements")]
    PositionUnavailable { offset: usize, len: usize },
}

/// Errors surfaced by the console exercises.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed movie record: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid input for {field}: '{value}'")]
    InvalidInput { field: &'static str, value: String },

    #[error("Invalid number {number}. Choose a number between 1 and {count}.")]
    InvalidNumber { number: usize, count: usize },

    #[error("Item not found in cart. Nothing {action}.")]
    ItemNotFound { action: &'static str },

    #[error("Song with ID '{id}' not found in playlist.")]
    SongNotFound { id: String },

    #[error(transparent)]
    List(#[from] ListError),
}

impl AppError {
    pub fn invalid_input(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            value: value.into(),
        }
    }

    /// I/O failures end a session; everything else is reported and the
    /// session continues.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Io(_) | Self::Csv(_) | Self::Config(_))
    }
}
