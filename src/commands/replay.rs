//! Replay command
//!
//! Plays a fixed list of guesses against a known target and reports the
//! feedback for each row, the final status and the share block.

use crate::core::{CellFeedback, GameEngine, GameStatus, Key, Outcome, Word};
use crate::output::{share_summary, share_text};

/// Configuration for a replay
pub struct ReplayConfig {
    pub target: String,
    pub guesses: Vec<String>,
    pub max_guesses: usize,
}

impl ReplayConfig {
    #[must_use]
    pub const fn new(target: String, guesses: Vec<String>) -> Self {
        Self {
            target,
            guesses,
            max_guesses: crate::core::DEFAULT_ROWS,
        }
    }
}

/// Result of replaying a game
pub struct ReplayResult {
    pub target: String,
    pub status: GameStatus,
    pub steps: Vec<ReplayStep>,
    /// Guesses left over after the game had already ended
    pub unused: Vec<String>,
    pub share: String,
    pub summary: String,
}

/// One submitted row
pub struct ReplayStep {
    pub word: String,
    pub feedback: Vec<CellFeedback>,
}

/// Replay `config.guesses` against `config.target`
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid or `max_guesses` is zero
/// - A guess is not made of letters or has the wrong length
pub fn replay_game(config: ReplayConfig) -> Result<ReplayResult, String> {
    let target = Word::new(&config.target).map_err(|e| format!("Invalid target word: {e}"))?;
    let cols = target.len();
    let mut game = GameEngine::with_word(target, config.max_guesses, cols).map_err(|e| e.to_string())?;

    let mut steps = Vec::new();
    let mut unused = Vec::new();

    for raw in config.guesses {
        let guess = Word::new(&raw).map_err(|e| format!("Invalid guess '{raw}': {e}"))?;
        if guess.len() != cols {
            return Err(format!(
                "Guess '{raw}' has {} letters, expected {cols}",
                guess.len()
            ));
        }

        if game.status().is_over() {
            unused.push(guess.text().to_string());
            continue;
        }

        for &letter in guess.chars() {
            game.press(Key::Letter(letter));
        }
        let outcome = game.press(Key::Submit);
        debug_assert!(outcome != Outcome::Ignored, "full row must be accepted");

        steps.push(ReplayStep {
            word: guess.text().to_string(),
            feedback: game.submitted_feedback().pop().unwrap_or_default(),
        });
    }

    Ok(ReplayResult {
        target: game.target().text().to_string(),
        status: game.status(),
        steps,
        unused,
        share: share_text(&game),
        summary: share_summary(&game),
    })
}
