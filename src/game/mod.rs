//! Game state engine
//!
//! Sessions, their boards and configuration. No I/O happens here; callers
//! drive a session with raw input and decide what to do with each outcome.

mod board;
mod config;
mod error;
mod session;

pub use board::Board;
pub use config::{GameConfig, MAX_ATTEMPTS, WORD_LENGTH};
pub use error::GameError;
pub use session::{GameSession, GameStatus, TurnOutcome};
