//! Core domain types for the game
//!
//! Words and letter feedback. Everything here is pure: no I/O and no global state.

mod feedback;
mod word;

pub use feedback::{FeedbackError, GuessResult, LetterFeedback, evaluate};
pub use word::{Word, WordError};
