//! Simple interactive CLI mode
//!
//! Line-based game without the TUI. Generic over reader and writer so whole
//! games can be scripted in tests.

use crate::core::Word;
use crate::game::{GameSession, GameStatus};
use crate::output::{format_board, format_secret};
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

/// How a line-based game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    /// `InProgress` if the player quit or input ran out
    pub status: GameStatus,
    pub attempts: usize,
    /// Disclosed only for lost games
    pub secret: Option<Word>,
}

/// Run one game, reading guesses line by line
///
/// Invalid guesses are reported and re-prompted without using an attempt.
/// `quit`/`exit`/`q` (unless they are library words) or end of input stops early.
///
/// # Errors
///
/// Returns an error on I/O failure or if the session reports a non-input error.
pub fn run_simple<R: BufRead, W: Write>(
    session: &mut GameSession<'_>,
    mut reader: R,
    mut writer: W,
) -> Result<GameSummary> {
    writeln!(
        writer,
        "\nGuess the {}-letter word in {} attempts. Type 'quit' to leave.\n",
        session.word_length(),
        session.max_attempts()
    )?;
    write!(writer, "{}", format_board(session))?;

    while !session.status().is_terminal() {
        write!(writer, "> ")?;
        writer.flush()?;

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            writeln!(writer)?;
            break;
        }

        if is_quit_command(session, &line) {
            break;
        }

        match session.submit_guess(&line) {
            Ok(outcome) => {
                writeln!(writer)?;
                write!(writer, "{}", format_board(session))?;

                match outcome.status {
                    GameStatus::Won => {
                        let turns = session.attempts();
                        writeln!(
                            writer,
                            "\n{}",
                            format!(
                                "🎉 Solved in {turns} {}!",
                                if turns == 1 { "guess" } else { "guesses" }
                            )
                            .green()
                            .bold()
                        )?;
                        writeln!(writer, "{}", session.board().to_emoji_grid())?;
                    }
                    GameStatus::Lost => {
                        writeln!(writer, "\n{}", "Out of attempts. The word was:".red().bold())?;
                        if let Some(secret) = &outcome.secret {
                            writeln!(writer, "{}", format_secret(secret))?;
                        }
                    }
                    GameStatus::InProgress => {
                        log::debug!("{} attempts left", session.attempts_remaining());
                    }
                }
            }
            Err(e) if e.is_recoverable() => {
                writeln!(writer, "{}", format!("❌ {e}").red())?;
            }
            Err(e) => return Err(e.into()),
        }
    }

    writeln!(writer, "Have a nice day!")?;

    Ok(GameSummary {
        status: session.status(),
        attempts: session.attempts(),
        secret: session.revealed_secret().cloned(),
    })
}

/// `quit`/`exit`/`q` end the game unless the library holds that word
fn is_quit_command(session: &GameSession<'_>, line: &str) -> bool {
    let input = line.trim();
    matches!(input.to_lowercase().as_str(), "quit" | "exit" | "q")
        && !session.library().contains_str(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WordLibrary;
    use std::io::Cursor;

    fn library() -> WordLibrary {
        WordLibrary::new(5, ["abide", "crane", "slate", "level", "react", "trace", "plate"])
            .unwrap()
    }

    fn play(secret: &str, max_attempts: usize, input: &str) -> (GameSummary, String) {
        let library = library();
        let mut session =
            GameSession::new(&library, Word::new(secret).unwrap(), max_attempts).unwrap();
        let mut output = Vec::new();
        let summary = run_simple(&mut session, Cursor::new(input), &mut output).unwrap();
        (summary, String::from_utf8(output).unwrap())
    }

    #[test]
    fn simple_win() {
        let (summary, output) = play("abide", 6, "crane\nABIDE\n");
        assert_eq!(summary.status, GameStatus::Won);
        assert_eq!(summary.attempts, 2);
        assert_eq!(summary.secret, None);
        assert!(output.contains("Solved in 2 guesses"));
    }

    #[test]
    fn simple_invalid_input_reprompts() {
        let (summary, output) = play("abide", 6, "abc\nzzzzz\nabide\n");
        assert_eq!(summary.status, GameStatus::Won);
        assert_eq!(summary.attempts, 1);
        assert!(output.contains("Guess must be 5 letters, got 3"));
        assert!(output.contains("'zzzzz' is not in the word list"));
    }

    #[test]
    fn simple_loss_reveals_secret() {
        let (summary, output) = play("abide", 2, "crane\nslate\n");
        assert_eq!(summary.status, GameStatus::Lost);
        assert_eq!(summary.secret.as_ref().map(Word::text), Some("abide"));
        assert!(output.contains("Out of attempts"));
        assert!(output.contains("[d]"));
    }

    #[test]
    fn simple_quit_and_eof() {
        let (summary, output) = play("abide", 6, "crane\nquit\nslate\n");
        assert_eq!(summary.status, GameStatus::InProgress);
        assert_eq!(summary.attempts, 1);
        assert!(output.contains("Have a nice day!"));

        let (summary, _) = play("abide", 6, "crane\n");
        assert_eq!(summary.status, GameStatus::InProgress);
        assert_eq!(summary.attempts, 1);
    }

    #[test]
    fn simple_library_words_are_never_quit_commands() {
        let library = WordLibrary::new(4, ["quit", "exit", "cats"]).unwrap();

        let mut session = GameSession::new(&library, Word::new("quit").unwrap(), 6).unwrap();
        let mut output = Vec::new();
        let summary = run_simple(&mut session, Cursor::new("exit\nQUIT\n"), &mut output).unwrap();
        assert_eq!(summary.status, GameStatus::Won);
        assert_eq!(summary.attempts, 2);

        // "q" is not a 4-letter word, so it still ends the game
        let mut session = GameSession::new(&library, Word::new("cats").unwrap(), 6).unwrap();
        let summary = run_simple(&mut session, Cursor::new("exit\nq\ncats\n"), Vec::new()).unwrap();
        assert_eq!(summary.status, GameStatus::InProgress);
        assert_eq!(summary.attempts, 1);
    }
}
