// Integration tests for wordle_game
// These drive whole games through the public API the binary uses

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Cursor;
use wordle_game::commands::run_simple;
use wordle_game::core::LetterFeedback::{Absent, Correct, Present};
use wordle_game::core::Word;
use wordle_game::game::{GameConfig, GameError, GameSession, GameStatus};
use wordle_game::output::{BoardSize, render_text};
use wordle_game::wordlists::WordLibrary;
use wordle_game::wordlists::loader::{WordSource, load_library, parse_dictionary};

fn library() -> WordLibrary {
    WordLibrary::new(
        5,
        ["abide", "crane", "react", "slate", "level", "ellel", "trace", "plate"],
    )
    .unwrap()
}

#[test]
fn test_dictionary_to_finished_game() {
    // Raw dictionary text -> filtered entries -> library -> seeded game
    let content = "crane /n10\nit's\nslate\nx-ray\nabide\nCRANE\n";
    let entries = parse_dictionary(content, 5);
    let library = WordLibrary::new(5, &entries).unwrap();
    assert_eq!(library.len(), 3);

    let mut rng = StdRng::seed_from_u64(11);
    let mut session =
        GameSession::from_config(&library, &GameConfig::new(5, 3), &mut rng).unwrap();

    // Three guesses cover the whole library, so the game must be won
    let mut status = GameStatus::InProgress;
    for word in &library {
        status = session.submit_guess(word.text()).unwrap().status;
        if status.is_terminal() {
            break;
        }
    }
    assert_eq!(status, GameStatus::Won);
}

#[test]
fn test_scripted_loss_through_simple_mode() {
    let library = library();
    let mut session = GameSession::new(&library, Word::new("abide").unwrap(), 6).unwrap();

    let input = "crane\nnope\nreact\nslate\nlevel\ntrace\nplate\nabide\n";
    let mut output = Vec::new();
    let summary = run_simple(&mut session, Cursor::new(input), &mut output).unwrap();

    // "nope" was rejected without using an attempt; the game ended on "plate"
    assert_eq!(summary.status, GameStatus::Lost);
    assert_eq!(summary.attempts, 6);
    assert_eq!(summary.secret.unwrap().text(), "abide");

    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("Guess must be 5 letters, got 4"));

    // The trailing "abide" line was never read into the session
    assert_eq!(session.submit_guess("abide"), Err(GameError::SessionClosed));
}

#[test]
fn test_duplicate_letters_on_the_board() {
    let library = library();
    let mut session = GameSession::new(&library, Word::new("level").unwrap(), 6).unwrap();

    let outcome = session.submit_guess("ELLEL").unwrap();
    assert_eq!(outcome.result.feedback(), &[Present, Present, Absent, Correct, Correct]);

    let outcome = session.submit_guess("level").unwrap();
    assert_eq!(outcome.status, GameStatus::Won);

    let rows = render_text(session.board(), BoardSize::for_session(&session));
    assert_eq!(rows.len(), 6);
    assert_eq!(rows[0], "[e][l][l][e][l]");
    assert_eq!(rows[1], "[l][e][v][e][l]");
    assert_eq!(rows[2], "[ ][ ][ ][ ][ ]");
}

#[test]
fn test_crane_react_scenario() {
    let library = library();
    let mut session = GameSession::new(&library, Word::new("crane").unwrap(), 6).unwrap();

    let outcome = session.submit_guess("react").unwrap();
    assert_eq!(outcome.result.feedback(), &[Present, Present, Correct, Present, Absent]);
    assert_eq!(outcome.status, GameStatus::InProgress);
}

#[test]
fn test_invalid_guesses_never_touch_the_board() {
    let library = library();
    let mut session = GameSession::new(&library, Word::new("crane").unwrap(), 6).unwrap();

    for bad in ["", "abc", "abcdef", "zzzzz", "cr ne", "cr-ne"] {
        let err = session.submit_guess(bad).unwrap_err();
        assert!(err.is_recoverable(), "{bad:?} gave {err:?}");
    }
    assert_eq!(session.attempts(), 0);
    assert!(session.board().is_empty());
}

#[test]
fn test_one_library_many_sessions() {
    let library = library();
    let sessions: Vec<GameSession<'_>> = ["abide", "crane", "slate"]
        .into_iter()
        .map(|s| GameSession::new(&library, Word::new(s).unwrap(), 6).unwrap())
        .collect();

    let won: Vec<bool> = sessions
        .into_iter()
        .map(|mut s| s.submit_guess("crane").unwrap().status == GameStatus::Won)
        .collect();
    assert_eq!(won, [false, true, false]);
}

#[test]
fn test_embedded_library_plays() {
    let library = load_library(&WordSource::Embedded, 5).unwrap();
    let mut session = GameSession::new(&library, Word::new("crane").unwrap(), 6).unwrap();
    let outcome = session.submit_guess("slate").unwrap();
    assert_eq!(outcome.result.count(Correct), 2);
}
