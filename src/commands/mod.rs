//! Command implementations

pub mod replay;
pub mod simple;

pub use replay::{ReplayConfig, ReplayResult, ReplayStep, replay_game};
pub use simple::{play_lines, run_simple};
