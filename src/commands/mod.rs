//! Command implementations

pub mod evaluate;
pub mod simple;

pub use evaluate::evaluate_words;
pub use simple::{GameSummary, run_simple};
