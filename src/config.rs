//! Game setup
//!
//! Resolves the command-line choices into a target word and a fresh engine.

use crate::core::{DEFAULT_ROWS, GameEngine, Word};
use crate::wordlists::choose_target;
use anyhow::{Context, Result, anyhow};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

/// Configuration for starting games
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Maximum number of attempts
    pub rows: usize,
    /// Fixed answer; drawn from the word list when absent
    pub target: Option<String>,
    /// Seed for target selection, for reproducible games
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            target: None,
            seed: None,
        }
    }
}

/// Picks targets for a sequence of games
///
/// Holds the RNG so that "new game" keeps drawing from the same seeded stream.
pub struct TargetPicker {
    config: GameConfig,
    rng: StdRng,
}

impl GameConfig {
    #[must_use]
    pub fn new(rows: usize, target: Option<String>, seed: Option<u64>) -> Self {
        Self { rows, target, seed }
    }

    /// Build a picker for this configuration
    #[must_use]
    pub fn picker(&self) -> TargetPicker {
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        TargetPicker {
            config: self.clone(),
            rng,
        }
    }

    /// Choose a target once and build an engine for it
    ///
    /// # Errors
    /// Returns an error if the word list is empty or the target is invalid.
    pub fn new_engine(&self, words: &[Word]) -> Result<GameEngine> {
        self.picker().new_engine(words)
    }
}

impl TargetPicker {
    /// The fixed target if configured, otherwise a random word from `words`
    ///
    /// # Errors
    /// Returns an error if the fixed target isn't a valid word or `words` is empty.
    pub fn resolve_target(&mut self, words: &[Word]) -> Result<Word> {
        if let Some(ref fixed) = self.config.target {
            return Word::new(fixed.as_str()).with_context(|| format!("Invalid target word '{fixed}'"));
        }

        let word = choose_target(words, &mut self.rng)
            .cloned()
            .ok_or_else(|| anyhow!("Word list is empty"))?;
        debug!(candidates = words.len(), "target drawn from word list");
        Ok(word)
    }

    /// Choose a target and start a game sized to it
    ///
    /// # Errors
    /// Returns an error if no target can be chosen or the engine rejects the dimensions.
    pub fn new_engine(&mut self, words: &[Word]) -> Result<GameEngine> {
        let target = self.resolve_target(words)?;
        let cols = target.len();
        GameEngine::with_word(target, self.config.rows, cols).map_err(|e| anyhow!(e))
    }
}
