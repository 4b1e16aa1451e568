//! TUI application state and logic

use crate::config::TargetPicker;
use crate::core::{GameEngine, GameStatus, Key, Outcome, Word};
use crate::output::{share_summary, share_text};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// Application state
pub struct App<'a> {
    pub game: GameEngine,
    pub picker: TargetPicker,
    pub words: &'a [Word],
    pub input_mode: InputMode,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub share: Option<String>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Playing,
    GameOver,
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

/// Results across the games of one session
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Index `n` counts wins in `n` guesses
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
    /// Returns an error if no target word can be chosen.
    pub fn new(mut picker: TargetPicker, words: &'a [Word]) -> Result<Self> {
        let game = picker.new_engine(words)?;

        let mut app = Self {
            game,
            picker,
            words,
            input_mode: InputMode::Playing,
            messages: Vec::new(),
            stats: Statistics::default(),
            share: None,
            should_quit: false,
        };
        app.add_message(
            &format!(
                "Guess the {}-letter word in {} tries!",
                app.game.cols(),
                app.game.rows()
            ),
            MessageStyle::Info,
        );
        Ok(app)
    }

    /// Handle one key press from the terminal
    pub fn handle_input(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        let ctrl_c = code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL);
        if ctrl_c || code == KeyCode::Esc {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Playing => {
                let key = match code {
                    KeyCode::Enter => Some(Key::Submit),
                    KeyCode::Backspace | KeyCode::Delete => Some(Key::Clear),
                    KeyCode::Char(c) => Key::from_char(c),
                    _ => None,
                };
                if let Some(key) = key {
                    self.press(key);
                }
            }
            InputMode::GameOver => match code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Char('s') => self.share_result(),
                _ => {
                    // Board is frozen until a new game starts
                }
            },
        }
    }

    /// Forward a key to the engine and react to the outcome
    pub fn press(&mut self, key: Key) {
        match self.game.press(key) {
            Outcome::Ignored => {
                if key == Key::Submit {
                    self.add_message("Not enough letters", MessageStyle::Error);
                }
            }
            Outcome::Updated => {}
            Outcome::Finished(status) => self.finish(status),
        }
    }

    fn finish(&mut self, status: GameStatus) {
        self.stats.record(status, self.game.attempts_used());
        self.input_mode = InputMode::GameOver;

        match status {
            GameStatus::Won => {
                let celebration = match self.game.attempts_used() {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Hooray, you won! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
            }
            _ => {
                self.add_message(
                    &format!(
                        "Meh. The word was {}. Try again tomorrow!",
                        self.game.target().text().to_uppercase()
                    ),
                    MessageStyle::Error,
                );
            }
        }
        self.add_message(
            "Press 's' to share, 'n' for new game or 'q' to quit.",
            MessageStyle::Info,
        );
    }

    pub fn share_result(&mut self) {
        let text = share_text(&self.game);
        debug!(summary = %share_summary(&self.game), "share text built");
        self.share = Some(text);
        self.add_message(
            "Share text saved; it will be printed when you quit.",
            MessageStyle::Success,
        );
    }

    pub fn new_game(&mut self) {
        match self.picker.new_engine(self.words) {
            Ok(game) => {
                self.game = game;
                self.input_mode = InputMode::Playing;
                self.share = None;
                self.messages.clear();
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
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
/// Returns the share text if the player asked for it, so the caller can
/// print it once the terminal is restored.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<Option<String>> {
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

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<Option<String>> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_input(key.code, key.modifiers);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.share)
}
