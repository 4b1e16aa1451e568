//! Wordle Game
//!
//! A Wordle clone built around a pure game-state engine, with a terminal UI,
//! a line-based text mode and a spoiler-free share summary.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{CellFeedback, GameEngine, GameStatus, Key};
//!
//! let mut game = GameEngine::new("hello", 6, 5).unwrap();
//! for key in "world".chars().filter_map(Key::from_char) {
//!     game.press(key);
//! }
//! game.press(Key::Submit);
//!
//! assert_eq!(game.cell_feedback_at(0, 1).unwrap(), Some(CellFeedback::Present));
//! assert_eq!(game.key_feedback_for(b'l'), Some(CellFeedback::Correct));
//! assert_eq!(game.status(), GameStatus::Playing);
//! ```

// Core domain types and the game engine
pub mod core;

// Game setup from command-line options
pub mod config;

// Diagnostic logging
pub mod logging;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
