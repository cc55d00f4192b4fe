//! Wordle Game - CLI
//!
//! Terminal word-guessing game with TUI and line-based modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::PathBuf;
use wordle_game::{
    commands::{evaluate_words, run_simple},
    game::{GameConfig, GameSession, MAX_ATTEMPTS, WORD_LENGTH},
    output::display::format_rows,
    output::{BoardRow, Cell},
    wordlists::{
        WordLibrary,
        loader::{WordSource, load_library, load_library_cached},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden word with per-letter colour feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Number of letters per word
    #[arg(short, long, global = true, default_value_t = WORD_LENGTH)]
    length: usize,

    /// Number of guesses allowed
    #[arg(short, long, global = true, default_value_t = MAX_ATTEMPTS)]
    attempts: usize,

    /// Cache file for the filtered wordlist; reused instead of the wordlist when present
    #[arg(long, global = true)]
    cache: Option<PathBuf>,

    /// Seed for picking the secret word (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode
    Simple,

    /// Show the feedback a guess gets against a secret word
    Evaluate {
        /// The secret word
        secret: String,

        /// The guess to score
        guess: String,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut cli = Cli::parse();

    let config = GameConfig::new(cli.length, cli.attempts);
    config.validate()?;

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    match command {
        Commands::Evaluate { secret, guess } => run_evaluate_command(&secret, &guess),
        Commands::Play => {
            let library = load_words(&cli, &config)?;
            run_play_command(&library, config, make_rng(cli.seed))
        }
        Commands::Simple => {
            let library = load_words(&cli, &config)?;
            run_simple_command(&library, config, make_rng(cli.seed))
        }
    }
}

fn load_words(cli: &Cli, config: &GameConfig) -> Result<WordLibrary> {
    let source = WordSource::from_arg(&cli.wordlist);
    match &cli.cache {
        Some(cache) => load_library_cached(&source, cache, config.word_length),
        None => load_library(&source, config.word_length),
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn run_evaluate_command(secret: &str, guess: &str) -> Result<()> {
    let result = evaluate_words(secret, guess)?;

    let row: BoardRow = result
        .cells()
        .map(|(letter, feedback)| Cell::Letter { letter, feedback })
        .collect();
    print!("{}", format_rows(&[row]));
    println!("{}", result.to_emoji());

    Ok(())
}

fn run_simple_command(library: &WordLibrary, config: GameConfig, mut rng: StdRng) -> Result<()> {
    let mut session = GameSession::from_config(library, &config, &mut rng)?;
    let stdin = io::stdin();
    let summary = run_simple(&mut session, stdin.lock(), io::stdout())?;
    log::info!(
        "Game ended: {:?} after {} attempts",
        summary.status,
        summary.attempts
    );
    Ok(())
}

fn run_play_command(library: &WordLibrary, config: GameConfig, rng: StdRng) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let app = App::new(library, config, rng)?;
    run_tui(app)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults() {
        let cli = Cli::parse_from(["wordle_game"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.wordlist, "embedded");
        assert_eq!(cli.length, 5);
        assert_eq!(cli.attempts, 6);
        assert_eq!(cli.seed, None);
        assert_eq!(cli.cache, None);
    }

    #[test]
    fn cli_cache_flag() {
        let cli = Cli::parse_from(["wordle_game", "simple", "--cache", "words.cache"]);
        assert_eq!(cli.cache, Some(PathBuf::from("words.cache")));
        assert!(matches!(cli.command, Some(Commands::Simple)));
    }

    #[test]
    fn cli_evaluate_with_global_flags() {
        let cli = Cli::parse_from(["wordle_game", "evaluate", "level", "ellel", "-a", "8"]);
        assert_eq!(cli.attempts, 8);
        assert!(matches!(
            cli.command,
            Some(Commands::Evaluate { ref secret, ref guess }) if secret == "level" && guess == "ellel"
        ));
    }

    #[test]
    fn seeded_rng_is_repeatable() {
        use rand::Rng;
        let a: u64 = make_rng(Some(5)).random();
        let b: u64 = make_rng(Some(5)).random();
        assert_eq!(a, b);
    }
}
