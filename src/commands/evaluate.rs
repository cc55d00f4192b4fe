//! One-shot feedback evaluation
//!
//! Compares a single guess with a given secret, outside of any game.

use crate::core::{GuessResult, Word, evaluate};
use anyhow::{Context, Result};

/// Evaluate `guess` against `secret`
///
/// # Errors
///
/// Returns an error if either word is not letters-only or their lengths differ.
pub fn evaluate_words(secret: &str, guess: &str) -> Result<GuessResult> {
    let secret = Word::new(secret.trim()).context("Invalid secret word")?;
    let guess = Word::new(guess.trim()).context("Invalid guess")?;
    Ok(evaluate(&secret, &guess)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterFeedback::{Absent, Correct, Present};

    #[test]
    fn evaluate_words_classic_example() {
        let result = evaluate_words("slate", "CRANE").unwrap();
        assert_eq!(result.feedback(), &[Absent, Absent, Correct, Absent, Correct]);
    }

    #[test]
    fn evaluate_words_duplicates() {
        let result = evaluate_words("level", "ellel").unwrap();
        assert_eq!(result.feedback(), &[Present, Present, Absent, Correct, Correct]);
    }

    #[test]
    fn evaluate_words_rejects_bad_input() {
        assert!(evaluate_words("crane", "cr4ne").is_err());
        assert!(evaluate_words("crane", "cranes").is_err());
        assert!(evaluate_words("", "crane").is_err());
    }
}
