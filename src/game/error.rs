//! Error types for game sessions

use crate::core::FeedbackError;
use crate::wordlists::LibraryError;
use thiserror::Error;

/// Errors returned by session construction and guess submission
///
/// `InvalidLength` and `UnknownWord` are ordinary user mistakes: the session is
/// unchanged and the caller can simply ask again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Guess must be {expected} letters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("'{0}' is not in the word list")]
    UnknownWord(String),

    #[error("Game is over; start a new one")]
    SessionClosed,

    #[error("Secret word '{secret}' does not have {expected} letters")]
    InvalidSecret { secret: String, expected: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Library(#[from] LibraryError),

    #[error(transparent)]
    Feedback(#[from] FeedbackError),
}

impl GameError {
    /// True for input mistakes that leave the session untouched
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidLength { .. } | Self::UnknownWord(_))
    }
}
