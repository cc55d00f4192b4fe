//! TUI application state and logic

use crate::game::{GameConfig, GameSession, GameStatus};
use crate::wordlists::WordLibrary;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub library: &'a WordLibrary,
    pub config: GameConfig,
    pub session: GameSession<'a>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    rng: StdRng,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Results across the games played in this run
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Index = number of guesses used to win
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    fn record(&mut self, status: GameStatus, attempts: usize) {
        self.total_games += 1;
        if status == GameStatus::Won {
            self.games_won += 1;
            if self.guess_distribution.len() <= attempts {
                self.guess_distribution.resize(attempts + 1, 0);
            }
            self.guess_distribution[attempts] += 1;
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl<'a> App<'a> {
    /// Create the app and start the first game
    ///
    /// # Errors
    ///
    /// Returns an error if `config` does not fit the library.
    pub fn new(library: &'a WordLibrary, config: GameConfig, mut rng: StdRng) -> Result<Self> {
        let session = GameSession::from_config(library, &config, &mut rng)?;

        let mut app = Self {
            library,
            config,
            session,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            rng,
        };
        app.add_message(
            &format!(
                "Guess the {}-letter word in {} attempts.",
                config.word_length, config.max_attempts
            ),
            MessageStyle::Info,
        );
        Ok(app)
    }

    /// Discard the current session and draw a new secret
    pub fn new_game(&mut self) {
        match GameSession::from_config(self.library, &self.config, &mut self.rng) {
            Ok(session) => {
                self.session = session;
                self.input_buffer.clear();
                self.messages.clear();
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Type a letter into the input line
    pub fn push_char(&mut self, c: char) {
        if self.session.status().is_terminal() || !c.is_alphabetic() {
            return;
        }
        if self.input_buffer.chars().count() < self.config.word_length {
            self.input_buffer.extend(c.to_lowercase());
        }
    }

    pub fn pop_char(&mut self) {
        self.input_buffer.pop();
    }

    /// Submit the input line as a guess
    pub fn submit(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);

        match self.session.submit_guess(&input) {
            Ok(outcome) => match outcome.status {
                GameStatus::Won => {
                    let turns = self.session.attempts();
                    self.stats.record(GameStatus::Won, turns);
                    let celebration = match turns {
                        1 => "🎯 HOLE IN ONE! 🌟",
                        2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                        3 => "✨ SPLENDID! Three guesses! ✨",
                        4 => "👏 GREAT JOB! Four guesses! 👏",
                        5 => "🎉 NICE WORK! Five guesses! 🎉",
                        _ => "😅 PHEW! Got it! 😅",
                    };
                    self.add_message(celebration, MessageStyle::Success);
                    self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                }
                GameStatus::Lost => {
                    self.stats.record(GameStatus::Lost, self.session.attempts());
                    let secret = outcome
                        .secret
                        .map(|w| w.text().to_uppercase())
                        .unwrap_or_default();
                    self.add_message(
                        &format!("Out of attempts! The word was {secret}."),
                        MessageStyle::Error,
                    );
                    self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                }
                GameStatus::InProgress => {
                    self.add_message(
                        &format!("{} attempts left", self.session.attempts_remaining()),
                        MessageStyle::Info,
                    );
                }
            },
            Err(e) if e.is_recoverable() => {
                // Keep the typed word so it can be corrected
                self.input_buffer = input;
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            }
            return;
        }

        if self.session.status().is_terminal() {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => self.new_game(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(c) => self.push_char(c),
            KeyCode::Backspace => self.pop_char(),
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
