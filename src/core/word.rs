//! Word representation
//!
//! A Word stores a lowercase, letters-only word along with its letters split out
//! for positional comparison. Length is not fixed here; the library enforces it.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// A lowercase dictionary word
///
/// Letters are stored as `char`s so dictionaries outside ASCII work the same way.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
    letters: Box<[char]>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word '{0}' contains characters other than letters")]
    InvalidCharacters(String),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// The input is lowercased. Surrounding whitespace is not trimmed, so
    /// `" crane"` is rejected like any other non-letter input.
    ///
    /// # Errors
    /// Returns `WordError` if the text is empty or contains anything but letters
    /// (digits, spaces, apostrophes, hyphens...).
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("Crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    /// assert_eq!(word.len(), 5);
    ///
    /// assert!(Word::new("it's").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.chars().all(char::is_alphabetic) {
            return Err(WordError::InvalidCharacters(text));
        }

        let letters = text.chars().collect();

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the letters of the word in order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Number of letters (not bytes)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false for a constructed word
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Get the count of each letter in the word
    ///
    /// Seeds the remaining-letter pool for feedback evaluation.
    pub(crate) fn letter_counts(&self) -> FxHashMap<char, usize> {
        let mut counts = FxHashMap::default();
        for &ch in &self.letters {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
