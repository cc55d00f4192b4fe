//! Letter feedback calculation and representation
//!
//! Each position of a guess is classified against the secret word:
//! - `Correct` = right letter, right position
//! - `Present` = letter occurs elsewhere in the secret (and is not used up)
//! - `Absent`  = no unclaimed occurrence of the letter remains

use super::Word;
use thiserror::Error;

/// Classification of one letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterFeedback {
    Correct,
    Present,
    Absent,
}

impl LetterFeedback {
    /// Emoji square for share strings
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Error raised when a guess cannot be compared against the secret
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("Cannot compare a {guess}-letter guess with a {secret}-letter secret")]
    LengthMismatch { secret: usize, guess: usize },
}

/// Feedback for one submitted guess
///
/// Pairs the guessed word with one `LetterFeedback` per letter position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessResult {
    guess: Word,
    feedback: Vec<LetterFeedback>,
}

impl GuessResult {
    /// The guessed word
    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    /// Per-position feedback, same length as the guess
    #[inline]
    #[must_use]
    pub fn feedback(&self) -> &[LetterFeedback] {
        &self.feedback
    }

    /// Letters of the guess paired with their feedback
    pub fn cells(&self) -> impl Iterator<Item = (char, LetterFeedback)> + '_ {
        self.guess
            .letters()
            .iter()
            .copied()
            .zip(self.feedback.iter().copied())
    }

    /// Check if every position is `Correct`
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.feedback.iter().all(|&f| f == LetterFeedback::Correct)
    }

    /// Count the positions with the given classification
    #[must_use]
    pub fn count(&self, kind: LetterFeedback) -> usize {
        self.feedback.iter().filter(|&&f| f == kind).count()
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.feedback.iter().map(|f| f.to_emoji()).collect()
    }
}

/// Evaluate `guess` against `secret`
///
/// Implements the standard feedback rules, including duplicate letters: each
/// occurrence of a letter in the secret is claimed by at most one guess
/// position, and exact matches claim first.
///
/// # Algorithm
/// 1. First pass: mark exact matches `Correct` and remove them from the pool
/// 2. Second pass: mark `Present` while the pool still holds the letter,
///    otherwise `Absent`
///
/// # Errors
/// Returns `FeedbackError::LengthMismatch` if the words differ in length.
///
/// # Examples
/// ```
/// use wordle_game::core::{LetterFeedback::*, Word, evaluate};
///
/// let secret = Word::new("slate").unwrap();
/// let guess = Word::new("crane").unwrap();
/// let result = evaluate(&secret, &guess).unwrap();
///
/// assert_eq!(result.feedback(), &[Absent, Absent, Correct, Absent, Correct]);
/// ```
pub fn evaluate(secret: &Word, guess: &Word) -> Result<GuessResult, FeedbackError> {
    if secret.len() != guess.len() {
        return Err(FeedbackError::LengthMismatch {
            secret: secret.len(),
            guess: guess.len(),
        });
    }

    let mut feedback = vec![LetterFeedback::Absent; guess.len()];
    let mut remaining = secret.letter_counts();

    // First pass: exact position matches
    for (i, (&g, &s)) in guess.letters().iter().zip(secret.letters()).enumerate() {
        if g == s {
            feedback[i] = LetterFeedback::Correct;
            if let Some(count) = remaining.get_mut(&g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: misplaced letters from what is left in the pool
    for (i, &g) in guess.letters().iter().enumerate() {
        if feedback[i] == LetterFeedback::Correct {
            continue;
        }
        if let Some(count) = remaining.get_mut(&g)
            && *count > 0
        {
            feedback[i] = LetterFeedback::Present;
            *count -= 1;
        }
    }

    Ok(GuessResult {
        guess: guess.clone(),
        feedback,
    })
}
