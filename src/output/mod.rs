//! Terminal output formatting
//!
//! Display utilities for CLI results, colored tiles and the share block.

pub mod display;
pub mod formatters;
pub mod share;

pub use display::print_replay_result;
pub use share::{SHARE_HEADER, share_summary, share_text};
