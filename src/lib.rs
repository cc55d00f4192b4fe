//! Wordle Game
//!
//! A terminal word-guessing game: guess the secret word within a limited number
//! of attempts, with per-letter feedback that handles repeated letters correctly.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{LetterFeedback, Word};
//! use wordle_game::game::{GameSession, GameStatus};
//! use wordle_game::wordlists::WordLibrary;
//!
//! let library = WordLibrary::new(5, ["crane", "slate", "level"]).unwrap();
//! let mut session = GameSession::new(&library, Word::new("slate").unwrap(), 6).unwrap();
//!
//! let outcome = session.submit_guess("crane").unwrap();
//! assert_eq!(outcome.status, GameStatus::InProgress);
//! assert_eq!(outcome.result.feedback()[2], LetterFeedback::Correct);
//! ```

// Core domain types
pub mod core;

// Game state engine
pub mod game;

// Word lists and the word library
pub mod wordlists;

// Command implementations
pub mod commands;

// Board rendering and terminal output
pub mod output;

// Interactive TUI interface
pub mod interactive;
