//! Core domain types for Wordle
//!
//! This module contains the game-state engine and the value types it is built from.
//! Everything here is pure, in-memory logic with no I/O.

mod feedback;
mod game;
mod key;
mod word;

pub use feedback::{CellFeedback, row_to_codes, row_to_emoji};
pub use game::{
    ConfigError, DEFAULT_ROWS, DEFAULT_WORD_LENGTH, GameEngine, GameError, GameStatus, Outcome,
};
pub use key::{CLEAR, ENTER, KEYBOARD_ROWS, Key};
pub use word::{Word, WordError};
