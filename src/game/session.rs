//! Game session state machine
//!
//! A session owns one secret word and its board, and borrows the shared library
//! to validate guesses. `InProgress` moves to `Won` or `Lost`; both are final.

use super::{Board, GameConfig, GameError};
use crate::core::{GuessResult, Word, evaluate};
use crate::wordlists::WordLibrary;
use rand::Rng;

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Result of one accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    pub status: GameStatus,
    pub result: GuessResult,
    /// The secret word, disclosed only when the game is lost
    pub secret: Option<Word>,
}

/// One game: secret word, board and status
///
/// The library is borrowed, so any number of sessions can share it.
#[derive(Debug, Clone)]
pub struct GameSession<'a> {
    library: &'a WordLibrary,
    secret: Word,
    board: Board,
    status: GameStatus,
}

impl<'a> GameSession<'a> {
    /// Start a game with a known secret
    ///
    /// The secret does not have to be in the library, only the right length.
    ///
    /// # Errors
    /// - `GameError::InvalidConfig` if `max_attempts` is zero
    /// - `GameError::InvalidSecret` if the secret length differs from the library's
    pub fn new(
        library: &'a WordLibrary,
        secret: Word,
        max_attempts: usize,
    ) -> Result<Self, GameError> {
        if max_attempts == 0 {
            return Err(GameError::InvalidConfig(
                "at least one attempt is required".to_string(),
            ));
        }

        if secret.len() != library.word_length() {
            return Err(GameError::InvalidSecret {
                secret: secret.text().to_string(),
                expected: library.word_length(),
            });
        }

        log::debug!(
            "New session: {} letters, {max_attempts} attempts",
            library.word_length()
        );

        Ok(Self {
            library,
            secret,
            board: Board::new(max_attempts),
            status: GameStatus::InProgress,
        })
    }

    /// Start a game with a secret drawn uniformly from the library
    ///
    /// # Errors
    /// Returns `GameError::Library` if the library is empty, or the errors of
    /// [`GameSession::new`].
    pub fn with_random_secret<R: Rng + ?Sized>(
        library: &'a WordLibrary,
        max_attempts: usize,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let secret = library.pick_random(rng)?.clone();
        Self::new(library, secret, max_attempts)
    }

    /// Start a random game using `config`
    ///
    /// # Errors
    /// Returns `GameError::InvalidConfig` if the config is invalid or its word
    /// length does not match the library.
    pub fn from_config<R: Rng + ?Sized>(
        library: &'a WordLibrary,
        config: &GameConfig,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        config.validate()?;
        if config.word_length != library.word_length() {
            return Err(GameError::InvalidConfig(format!(
                "word length {} does not match the {}-letter library",
                config.word_length,
                library.word_length()
            )));
        }
        Self::with_random_secret(library, config.max_attempts, rng)
    }

    /// Submit one line of player input
    ///
    /// Input is trimmed and lowercased. Rejected input does not use an attempt
    /// and does not touch the board.
    ///
    /// # Errors
    /// - `GameError::SessionClosed` if the game is already won or lost
    /// - `GameError::InvalidLength` if the guess has the wrong number of letters
    /// - `GameError::UnknownWord` if the guess is not in the library
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    /// use wordle_game::game::{GameError, GameSession, GameStatus};
    /// use wordle_game::wordlists::WordLibrary;
    ///
    /// let library = WordLibrary::new(5, ["abide", "crane", "slate"]).unwrap();
    /// let mut session = GameSession::new(&library, Word::new("abide").unwrap(), 6).unwrap();
    ///
    /// assert!(matches!(session.submit_guess("abc"), Err(GameError::InvalidLength { .. })));
    /// assert_eq!(session.attempts(), 0);
    ///
    /// let outcome = session.submit_guess("  ABIDE\n").unwrap();
    /// assert_eq!(outcome.status, GameStatus::Won);
    /// ```
    pub fn submit_guess(&mut self, raw: &str) -> Result<TurnOutcome, GameError> {
        if self.status.is_terminal() {
            return Err(GameError::SessionClosed);
        }

        let normalized = raw.trim().to_lowercase();

        let length = normalized.chars().count();
        if length != self.word_length() {
            return Err(GameError::InvalidLength {
                expected: self.word_length(),
                actual: length,
            });
        }

        let guess = match Word::new(normalized.as_str()) {
            Ok(word) if self.library.contains(&word) => word,
            _ => return Err(GameError::UnknownWord(normalized)),
        };

        let result = evaluate(&self.secret, &guess)?;
        self.board.push(result.clone());

        self.status = if guess == self.secret {
            GameStatus::Won
        } else if self.board.is_full() {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        };

        log::debug!(
            "Attempt {}/{}: {} -> {:?}",
            self.attempts(),
            self.max_attempts(),
            result.to_emoji(),
            self.status
        );

        Ok(TurnOutcome {
            status: self.status,
            result,
            secret: self.revealed_secret().cloned(),
        })
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Valid guesses made so far
    #[inline]
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.board.len()
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.board.max_rows()
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        self.max_attempts() - self.attempts()
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.library.word_length()
    }

    #[inline]
    #[must_use]
    pub const fn library(&self) -> &'a WordLibrary {
        self.library
    }

    /// The secret word, available only once the game is lost
    #[must_use]
    pub fn revealed_secret(&self) -> Option<&Word> {
        (self.status == GameStatus::Lost).then_some(&self.secret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterFeedback::{Absent, Correct, Present};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn library() -> WordLibrary {
        WordLibrary::new(
            5,
            [
                "abide", "crane", "react", "slate", "level", "ellel", "trace", "plate", "stare",
                "eerie",
            ],
        )
        .unwrap()
    }

    fn session<'a>(library: &'a WordLibrary, secret: &str) -> GameSession<'a> {
        GameSession::new(library, Word::new(secret).unwrap(), 6).unwrap()
    }

    #[test]
    fn guessing_secret_wins() {
        let library = library();
        let mut game = session(&library, "abide");

        let outcome = game.submit_guess("abide").unwrap();

        assert_eq!(outcome.status, GameStatus::Won);
        assert_eq!(outcome.result.feedback(), &[Correct; 5]);
        assert_eq!(outcome.secret, None);
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.attempts(), 1);
    }

    #[test]
    fn input_is_normalized() {
        let library = library();
        let mut game = session(&library, "crane");

        let outcome = game.submit_guess("  SlAtE \r\n").unwrap();
        assert_eq!(outcome.result.guess().text(), "slate");
        assert_eq!(outcome.status, GameStatus::InProgress);
    }

    #[test]
    fn wrong_length_does_not_consume_attempt() {
        let library = library();
        let mut game = session(&library, "crane");

        assert_eq!(
            game.submit_guess("abid"),
            Err(GameError::InvalidLength {
                expected: 5,
                actual: 4
            })
        );
        assert_eq!(game.attempts(), 0);
        assert!(game.board().is_empty());
    }

    #[test]
    fn length_is_checked_before_membership() {
        let library = library();
        let mut game = session(&library, "crane");

        assert!(matches!(
            game.submit_guess("zzzzzz"),
            Err(GameError::InvalidLength { actual: 6, .. })
        ));
    }

    #[test]
    fn unknown_word_does_not_consume_attempt() {
        let library = library();
        let mut game = session(&library, "crane");
        game.submit_guess("slate").unwrap();

        let before = game.board().clone();
        assert_eq!(
            game.submit_guess("zzzzz"),
            Err(GameError::UnknownWord("zzzzz".to_string()))
        );
        assert_eq!(game.attempts(), 1);
        assert_eq!(game.board(), &before);
    }

    #[test]
    fn non_letter_input_is_unknown() {
        let library = library();
        let mut game = session(&library, "crane");
        assert!(matches!(
            game.submit_guess("cr4ne"),
            Err(GameError::UnknownWord(_))
        ));
        assert_eq!(game.attempts(), 0);
    }

    #[test]
    fn exhausting_attempts_loses_and_reveals_secret() {
        let library = library();
        let mut game = session(&library, "abide");

        let guesses = ["crane", "react", "slate", "level", "trace"];
        for guess in guesses {
            let outcome = game.submit_guess(guess).unwrap();
            assert_eq!(outcome.status, GameStatus::InProgress);
            assert_eq!(outcome.secret, None);
            assert_eq!(game.revealed_secret(), None);
        }

        let outcome = game.submit_guess("plate").unwrap();
        assert_eq!(outcome.status, GameStatus::Lost);
        assert_eq!(outcome.secret.as_ref().map(Word::text), Some("abide"));
        assert_eq!(game.revealed_secret().map(Word::text), Some("abide"));
        assert_eq!(game.attempts(), 6);
        assert_eq!(game.attempts_remaining(), 0);
    }

    #[test]
    fn winning_on_last_attempt_is_a_win() {
        let library = library();
        let mut game = GameSession::new(&library, Word::new("abide").unwrap(), 2).unwrap();

        game.submit_guess("crane").unwrap();
        let outcome = game.submit_guess("abide").unwrap();
        assert_eq!(outcome.status, GameStatus::Won);
        assert_eq!(outcome.secret, None);
    }

    #[test]
    fn terminal_session_rejects_guesses() {
        let library = library();
        let mut game = session(&library, "abide");
        game.submit_guess("abide").unwrap();

        assert_eq!(game.submit_guess("crane"), Err(GameError::SessionClosed));
        // Even invalid input reports the closed session
        assert_eq!(game.submit_guess("x"), Err(GameError::SessionClosed));
        assert_eq!(game.attempts(), 1);
    }

    #[test]
    fn repeated_guesses_still_count() {
        let library = library();
        let mut game = GameSession::new(&library, Word::new("abide").unwrap(), 2).unwrap();

        game.submit_guess("crane").unwrap();
        let outcome = game.submit_guess("crane").unwrap();
        assert_eq!(outcome.status, GameStatus::Lost);
    }

    #[test]
    fn board_records_feedback_in_order() {
        let library = library();
        let mut game = session(&library, "level");

        game.submit_guess("ellel").unwrap();
        game.submit_guess("crane").unwrap();

        let rows = game.board().rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].feedback(), &[Present, Present, Absent, Correct, Correct]);
        assert_eq!(rows[1].feedback(), &[Absent, Absent, Absent, Absent, Present]);
    }

    #[test]
    fn secret_length_must_match_library() {
        let library = library();
        let result = GameSession::new(&library, Word::new("cat").unwrap(), 6);
        assert!(matches!(result, Err(GameError::InvalidSecret { .. })));
    }

    #[test]
    fn zero_attempts_rejected() {
        let library = library();
        let result = GameSession::new(&library, Word::new("crane").unwrap(), 0);
        assert!(matches!(result, Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn random_secret_comes_from_library() {
        let library = library();
        let mut rng = StdRng::seed_from_u64(3);
        let mut game =
            GameSession::with_random_secret(&library, library.len(), &mut rng).unwrap();

        // Walking the whole library must hit the secret
        let won = library
            .iter()
            .any(|word| game.submit_guess(word.text()).unwrap().status == GameStatus::Won);
        assert!(won);
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn from_config_checks_word_length() {
        let library = library();
        let mut rng = StdRng::seed_from_u64(0);

        let ok = GameSession::from_config(&library, &GameConfig::default(), &mut rng).unwrap();
        assert_eq!(ok.max_attempts(), 6);

        let mismatch = GameSession::from_config(&library, &GameConfig::new(4, 6), &mut rng);
        assert!(matches!(mismatch, Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn sessions_sharing_a_library_are_independent() {
        let library = library();
        let mut first = session(&library, "crane");
        let second = session(&library, "slate");

        first.submit_guess("abide").unwrap();
        assert_eq!(first.attempts(), 1);
        assert_eq!(second.attempts(), 0);
    }

    #[test]
    fn recoverable_errors() {
        assert!(GameError::UnknownWord("x".into()).is_recoverable());
        assert!(
            GameError::InvalidLength {
                expected: 5,
                actual: 1
            }
            .is_recoverable()
        );
        assert!(!GameError::SessionClosed.is_recoverable());
    }
}
