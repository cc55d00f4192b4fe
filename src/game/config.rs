//! Game configuration

use super::GameError;

/// Default number of letters per word
pub const WORD_LENGTH: usize = 5;

/// Default number of valid guesses per game
pub const MAX_ATTEMPTS: usize = 6;

/// Settings for building a library and starting sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub word_length: usize,
    pub max_attempts: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: WORD_LENGTH,
            max_attempts: MAX_ATTEMPTS,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub const fn new(word_length: usize, max_attempts: usize) -> Self {
        Self {
            word_length,
            max_attempts,
        }
    }

    /// Reject settings no game can be played with
    ///
    /// # Errors
    /// Returns `GameError::InvalidConfig` if either value is zero.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.word_length == 0 {
            return Err(GameError::InvalidConfig(
                "word length must be at least 1".to_string(),
            ));
        }
        if self.max_attempts == 0 {
            return Err(GameError::InvalidConfig(
                "at least one attempt is required".to_string(),
            ));
        }
        Ok(())
    }
}
