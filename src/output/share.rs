//! Share text
//!
//! Builds the spoiler-free summary a player copies to share their result:
//! a header line followed by one glyph per cell for each submitted row.

use crate::core::{GameEngine, GameStatus, row_to_emoji};

/// Header line of the share block
pub const SHARE_HEADER: &str = "Wordle";

/// Emoji grid of all submitted rows
///
/// # Examples
/// ```
/// use wordle_game::core::GameEngine;
/// use wordle_game::output::share_text;
///
/// let mut game = GameEngine::new("hello", 6, 5).unwrap();
/// for key in "hello".bytes() {
///     game.press_letter(key);
/// }
/// game.press_submit();
/// assert_eq!(share_text(&game), "Wordle\n🟩🟩🟩🟩🟩");
/// ```
#[must_use]
pub fn share_text(game: &GameEngine) -> String {
    let rows: Vec<String> = game
        .submitted_feedback()
        .iter()
        .map(|row| row_to_emoji(row))
        .collect();

    if rows.is_empty() {
        SHARE_HEADER.to_string()
    } else {
        format!("{SHARE_HEADER}\n{}", rows.join("\n"))
    }
}

/// Attempts used out of attempts allowed, `X` for a loss
#[must_use]
pub fn share_summary(game: &GameEngine) -> String {
    match game.status() {
        GameStatus::Lost => format!("X/{}", game.rows()),
        _ => format!("{}/{}", game.attempts_used(), game.rows()),
    }
}
