//! Immutable dictionary of fixed-length words
//!
//! The library is built once, then shared read-only by any number of game
//! sessions. Members are kept sorted so selection by index is deterministic and
//! membership is a binary search.

use crate::core::{Word, WordError};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fmt;
use thiserror::Error;

/// Sorted, de-duplicated set of words that all share one length
#[derive(Debug, Clone)]
pub struct WordLibrary {
    words: Vec<Word>,
    word_length: usize,
}

/// Why a dictionary entry was refused
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryProblem {
    WrongLength { expected: usize, actual: usize },
    NotLetters,
}

impl fmt::Display for EntryProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { expected, actual } => {
                write!(f, "expected {expected} letters, got {actual}")
            }
            Self::NotLetters => write!(f, "contains characters other than letters"),
        }
    }
}

/// Error type for library construction and selection
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LibraryError {
    #[error("Word library is empty")]
    Empty,
    #[error("Invalid dictionary entry '{entry}': {problem}")]
    InvalidEntry { entry: String, problem: EntryProblem },
}

impl WordLibrary {
    /// Build a library from already-filtered entries
    ///
    /// Entries are lowercased, sorted and de-duplicated. Filtering is the
    /// loader's job: a single bad entry fails the whole construction.
    ///
    /// # Errors
    /// - `LibraryError::InvalidEntry` if an entry is not `word_length` letters
    /// - `LibraryError::Empty` if there are no entries
    ///
    /// # Examples
    /// ```
    /// use wordle_game::wordlists::WordLibrary;
    ///
    /// let library = WordLibrary::new(5, ["slate", "crane", "CRANE"]).unwrap();
    /// assert_eq!(library.len(), 2);
    /// assert!(library.contains_str("crane"));
    ///
    /// assert!(WordLibrary::new(5, ["cat"]).is_err());
    /// ```
    pub fn new<I, S>(word_length: usize, entries: I) -> Result<Self, LibraryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = Vec::new();

        for entry in entries {
            let entry = entry.as_ref();
            let word = Word::new(entry).map_err(|e| LibraryError::InvalidEntry {
                entry: entry.to_string(),
                problem: match e {
                    WordError::Empty => EntryProblem::WrongLength {
                        expected: word_length,
                        actual: 0,
                    },
                    WordError::InvalidCharacters(_) => EntryProblem::NotLetters,
                },
            })?;

            if word.len() != word_length {
                return Err(LibraryError::InvalidEntry {
                    entry: entry.to_string(),
                    problem: EntryProblem::WrongLength {
                        expected: word_length,
                        actual: word.len(),
                    },
                });
            }

            words.push(word);
        }

        if words.is_empty() {
            return Err(LibraryError::Empty);
        }

        words.sort();
        words.dedup();

        log::info!(
            "Built word library: {} words of {word_length} letters",
            words.len()
        );

        Ok(Self { words, word_length })
    }

    /// Length every member shares
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Number of distinct words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Check membership of a word
    #[must_use]
    pub fn contains(&self, candidate: &Word) -> bool {
        self.words.binary_search(candidate).is_ok()
    }

    /// Check membership of raw text (case-insensitive)
    #[must_use]
    pub fn contains_str(&self, candidate: &str) -> bool {
        let lowered = candidate.to_lowercase();
        self.words
            .binary_search_by(|w| w.text().cmp(lowered.as_str()))
            .is_ok()
    }

    /// Pick a word uniformly at random
    ///
    /// # Errors
    /// Returns `LibraryError::Empty` if the library has no members.
    pub fn pick_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&Word, LibraryError> {
        self.words.choose(rng).ok_or(LibraryError::Empty)
    }

    /// Iterate over members in alphabetical order
    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }
}

impl<'a> IntoIterator for &'a WordLibrary {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
