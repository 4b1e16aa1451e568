//! Formatting utilities for terminal output

use crate::core::{CellFeedback, GameEngine};
use colored::{ColoredString, Colorize};

/// Style a single letter tile by its feedback
#[must_use]
pub fn colored_tile(letter: char, feedback: Option<CellFeedback>) -> ColoredString {
    let tile = format!(" {} ", letter.to_ascii_uppercase());
    match feedback {
        Some(CellFeedback::Correct) => tile.black().on_green().bold(),
        Some(CellFeedback::Present) => tile.black().on_yellow().bold(),
        Some(CellFeedback::Absent) => tile.white().on_bright_black(),
        None => tile.bright_white(),
    }
}

/// Render one grid row as colored tiles
///
/// # Panics
/// Panics if `row >= game.rows()`
#[must_use]
pub fn colored_row(game: &GameEngine, row: usize) -> String {
    game.grid()[row]
        .iter()
        .enumerate()
        .map(|(col, cell)| {
            let letter = cell.map_or('·', char::from);
            let feedback = game.cell_feedback_at(row, col).ok().flatten();
            colored_tile(letter, feedback).to_string()
        })
        .collect()
}

/// Keyboard rows with each key tinted by its best feedback
#[must_use]
pub fn colored_keyboard(game: &GameEngine) -> Vec<String> {
    crate::core::KEYBOARD_ROWS
        .iter()
        .map(|row| {
            row.iter()
                .filter(|label| label.len() == 1)
                .map(|label| {
                    let letter = label.as_bytes()[0];
                    colored_tile(char::from(letter), game.key_feedback_for(letter)).to_string()
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_tile_without_colors() {
        colored::control::set_override(false);
        assert_eq!(colored_tile('a', None).to_string(), " A ");
        assert_eq!(colored_tile('b', Some(CellFeedback::Correct)).to_string(), " B ");
    }

    #[test]
    fn row_shows_placeholders_for_empty_cells() {
        colored::control::set_override(false);
        let mut game = GameEngine::new("hello", 6, 5).unwrap();
        game.press_letter(b'h');
        game.press_letter(b'e');
        assert_eq!(colored_row(&game, 0), " H  E  ·  ·  · ");
    }

    #[test]
    fn keyboard_has_three_rows_of_letters() {
        colored::control::set_override(false);
        let game = GameEngine::new("hello", 6, 5).unwrap();
        let rows = colored_keyboard(&game);
        assert_eq!(rows.len(), 3);
        assert!(rows[0].starts_with(" Q  W "));
        // ENTER and CLEAR are not drawn as tiles
        assert_eq!(rows[2], " Z  X  C  V  B  N  M ");
    }
}
