//! Chronological record of a game's guesses

use crate::core::GuessResult;

/// Append-only history of guess results
///
/// Only the owning session can push; callers get read access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: Vec<GuessResult>,
    max_rows: usize,
}

impl Board {
    pub(crate) fn new(max_rows: usize) -> Self {
        Self {
            rows: Vec::with_capacity(max_rows),
            max_rows,
        }
    }

    pub(crate) fn push(&mut self, result: GuessResult) {
        debug_assert!(self.rows.len() < self.max_rows, "board is full");
        self.rows.push(result);
    }

    /// Played rows, oldest first
    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[GuessResult] {
        &self.rows
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Capacity of the board (the attempt limit)
    #[inline]
    #[must_use]
    pub const fn max_rows(&self) -> usize {
        self.max_rows
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.rows.len() >= self.max_rows
    }

    /// Emoji grid, one line per played row
    #[must_use]
    pub fn to_emoji_grid(&self) -> String {
        self.rows
            .iter()
            .map(GuessResult::to_emoji)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Word, evaluate};

    fn result(secret: &str, guess: &str) -> GuessResult {
        evaluate(&Word::new(secret).unwrap(), &Word::new(guess).unwrap()).unwrap()
    }

    #[test]
    fn board_appends_in_order() {
        let mut board = Board::new(6);
        assert!(board.is_empty());

        board.push(result("crane", "slate"));
        board.push(result("crane", "crane"));

        assert_eq!(board.len(), 2);
        assert_eq!(board.rows()[0].guess().text(), "slate");
        assert_eq!(board.rows()[1].guess().text(), "crane");
        assert!(!board.is_full());
    }

    #[test]
    fn board_full_at_capacity() {
        let mut board = Board::new(2);
        board.push(result("crane", "slate"));
        board.push(result("crane", "abide"));
        assert!(board.is_full());
        assert_eq!(board.max_rows(), 2);
    }

    #[test]
    fn board_emoji_grid() {
        let mut board = Board::new(6);
        board.push(result("slate", "crane"));
        board.push(result("slate", "slate"));
        assert_eq!(board.to_emoji_grid(), "⬜⬜🟩⬜🟩\n🟩🟩🟩🟩🟩");
    }
}
