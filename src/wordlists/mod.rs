//! Word lists and the word library
//!
//! Provides the embedded dictionary, loaders for external lists, and the
//! immutable `WordLibrary` that games validate guesses against.

mod embedded;
mod library;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use library::{EntryProblem, LibraryError, WordLibrary};
