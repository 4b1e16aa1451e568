//! Game-state engine
//!
//! Owns the guess grid, the cursor and the target word, and derives feedback
//! and win/loss status from them. Every mutator returns an [`Outcome`] so a
//! front end knows whether to redraw and when to announce the result.
//!
//! Feedback is never stored: it is recomputed from the grid on each query,
//! which is at most `rows × cols` comparisons.

use super::{CellFeedback, Key, Word, WordError};
use std::fmt;
use tracing::{debug, info};

/// Attempts allowed in a standard game
pub const DEFAULT_ROWS: usize = 6;

/// Letters per word in a standard game
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Lifecycle of a single game
///
/// `Won` and `Lost` are terminal; no operation leaves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// Result of feeding one input to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The input was rejected; grid, cursor and status are unchanged
    Ignored,
    /// The grid or cursor changed; the game is still being played
    Updated,
    /// This input ended the game. Reported once per game.
    Finished(GameStatus),
}

impl Outcome {
    /// Whether the caller needs to redraw
    #[must_use]
    pub const fn changed(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Why a game could not be set up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    NoRows,
    NoColumns,
    LengthMismatch { expected: usize, actual: usize },
    InvalidWord(WordError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoRows => write!(f, "a game needs at least one row"),
            Self::NoColumns => write!(f, "a game needs at least one column"),
            Self::LengthMismatch { expected, actual } => {
                write!(f, "target word has {actual} letters, grid has {expected} columns")
            }
            Self::InvalidWord(err) => write!(f, "invalid target word: {err}"),
        }
    }
}

/// Errors raised by the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    InvalidConfiguration(ConfigError),
    OutOfRange { row: usize, col: usize },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration(err) => write!(f, "Invalid configuration: {err}"),
            Self::OutOfRange { row, col } => {
                write!(f, "Cell ({row}, {col}) is outside the grid")
            }
        }
    }
}

impl std::error::Error for GameError {}

impl From<ConfigError> for GameError {
    fn from(err: ConfigError) -> Self {
        Self::InvalidConfiguration(err)
    }
}

/// One game of Wordle
#[derive(Debug, Clone)]
pub struct GameEngine {
    target: Word,
    grid: Vec<Vec<Option<u8>>>,
    rows: usize,
    cols: usize,
    current_row: usize,
    current_col: usize,
    status: GameStatus,
}

impl GameEngine {
    /// Start a game guessing `target` in at most `rows` attempts of `cols` letters
    ///
    /// # Errors
    /// Returns `GameError::InvalidConfiguration` if `rows` or `cols` is zero,
    /// the target is not a word of ASCII letters, or its length differs from `cols`.
    /// The length is that of `target` as given; surrounding whitespace counts.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{GameEngine, GameStatus};
    ///
    /// let game = GameEngine::new("hello", 6, 5).unwrap();
    /// assert_eq!(game.status(), GameStatus::Playing);
    /// assert_eq!(game.cursor(), (0, 0));
    ///
    /// assert!(GameEngine::new("hello", 6, 4).is_err());
    /// ```
    pub fn new(target: &str, rows: usize, cols: usize) -> Result<Self, GameError> {
        if rows < 1 {
            return Err(ConfigError::NoRows.into());
        }
        if cols < 1 {
            return Err(ConfigError::NoColumns.into());
        }

        // Checked on the raw text, before `Word::new` trims it
        let actual = target.chars().count();
        if actual != cols {
            return Err(ConfigError::LengthMismatch {
                expected: cols,
                actual,
            }
            .into());
        }

        let target = Word::new(target).map_err(ConfigError::InvalidWord)?;
        Self::with_word(target, rows, cols)
    }

    /// Start a game from an already validated word
    ///
    /// # Errors
    /// Same as [`GameEngine::new`].
    pub fn with_word(target: Word, rows: usize, cols: usize) -> Result<Self, GameError> {
        if rows < 1 {
            return Err(ConfigError::NoRows.into());
        }
        if cols < 1 {
            return Err(ConfigError::NoColumns.into());
        }
        if target.len() != cols {
            return Err(ConfigError::LengthMismatch {
                expected: cols,
                actual: target.len(),
            }
            .into());
        }

        debug!(rows, cols, "new game");

        Ok(Self {
            target,
            grid: vec![vec![None; cols]; rows],
            rows,
            cols,
            current_row: 0,
            current_col: 0,
            status: GameStatus::Playing,
        })
    }

    /// Feed a single key to the engine
    pub fn press(&mut self, key: Key) -> Outcome {
        match key {
            Key::Letter(letter) => self.press_letter(letter),
            Key::Clear => self.press_clear(),
            Key::Submit => self.press_submit(),
        }
    }

    /// Type a letter into the next free cell of the active row
    ///
    /// Ignored once the game is over, when the row is full, or for
    /// anything that is not an ASCII letter.
    pub fn press_letter(&mut self, letter: u8) -> Outcome {
        if !self.accepts_input() || self.current_col >= self.cols {
            return Outcome::Ignored;
        }
        if !letter.is_ascii_alphabetic() {
            return Outcome::Ignored;
        }

        self.grid[self.current_row][self.current_col] = Some(letter.to_ascii_lowercase());
        self.current_col += 1;
        Outcome::Updated
    }

    /// Remove the last letter of the active row
    pub fn press_clear(&mut self) -> Outcome {
        if !self.accepts_input() || self.current_col == 0 {
            return Outcome::Ignored;
        }

        self.current_col -= 1;
        self.grid[self.current_row][self.current_col] = None;
        Outcome::Updated
    }

    /// Lock in the active row and evaluate it
    ///
    /// Only a completely filled row can be submitted.
    pub fn press_submit(&mut self) -> Outcome {
        if !self.accepts_input() {
            return Outcome::Ignored;
        }

        let row_full = self.grid[self.current_row].iter().all(Option::is_some);
        if !row_full || self.current_col != self.cols {
            return Outcome::Ignored;
        }

        self.current_row += 1;
        self.current_col = 0;
        debug!(
            attempt = self.current_row,
            guess = %self.row_text(self.current_row - 1),
            "row submitted"
        );

        if self.row_matches_target(self.current_row - 1) {
            self.status = GameStatus::Won;
        } else if self.current_row == self.rows {
            self.status = GameStatus::Lost;
        }

        if self.status.is_over() {
            info!(status = ?self.status, attempts = self.current_row, "game over");
            Outcome::Finished(self.status)
        } else {
            Outcome::Updated
        }
    }

    /// Feedback for one cell, or `None` if its row hasn't been submitted
    ///
    /// # Errors
    /// Returns `GameError::OutOfRange` if `(row, col)` is outside the grid.
    pub fn cell_feedback_at(&self, row: usize, col: usize) -> Result<Option<CellFeedback>, GameError> {
        if row >= self.rows || col >= self.cols {
            return Err(GameError::OutOfRange { row, col });
        }
        if row >= self.current_row {
            return Ok(None);
        }

        Ok(self.grid[row][col].map(|letter| CellFeedback::evaluate(letter, col, &self.target)))
    }

    /// Best feedback ever observed for `letter`, for keyboard tinting
    ///
    /// Returns `None` if the letter hasn't appeared in a submitted row.
    #[must_use]
    pub fn key_feedback_for(&self, letter: u8) -> Option<CellFeedback> {
        let letter = letter.to_ascii_lowercase();

        self.grid[..self.current_row]
            .iter()
            .flat_map(|row| row.iter().enumerate())
            .filter(|&(_, cell)| *cell == Some(letter))
            .map(|(col, _)| CellFeedback::evaluate(letter, col, &self.target))
            .max()
    }

    /// Feedback for every submitted row, oldest first
    #[must_use]
    pub fn submitted_feedback(&self) -> Vec<Vec<CellFeedback>> {
        self.grid[..self.current_row]
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .filter_map(|(col, cell)| {
                        cell.map(|letter| CellFeedback::evaluate(letter, col, &self.target))
                    })
                    .collect()
            })
            .collect()
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// The full grid; `None` marks an empty cell
    #[inline]
    #[must_use]
    pub fn grid(&self) -> &[Vec<Option<u8>>] {
        &self.grid
    }

    /// Position `(row, col)` where the next letter will land
    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> (usize, usize) {
        (self.current_row, self.current_col)
    }

    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Number of rows submitted so far
    #[inline]
    #[must_use]
    pub const fn attempts_used(&self) -> usize {
        self.current_row
    }

    /// The answer. Front ends should only reveal it once the game is over.
    #[inline]
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    /// Letters of a row as a string, with spaces for empty cells
    ///
    /// # Panics
    /// Panics if `row >= rows()`
    #[must_use]
    pub fn row_text(&self, row: usize) -> String {
        self.grid[row]
            .iter()
            .map(|cell| cell.map_or(' ', char::from))
            .collect()
    }

    fn accepts_input(&self) -> bool {
        self.status == GameStatus::Playing && self.current_row < self.rows
    }

    fn row_matches_target(&self, row: usize) -> bool {
        let letters: Option<Vec<u8>> = self.grid[row].iter().copied().collect();
        letters.is_some_and(|letters| self.target.matches(&letters))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use CellFeedback::{Absent, Correct, Present};

    fn type_word(game: &mut GameEngine, word: &str) {
        for letter in word.bytes() {
            game.press_letter(letter);
        }
    }

    fn guess(game: &mut GameEngine, word: &str) -> Outcome {
        type_word(game, word);
        game.press_submit()
    }

    fn row_feedback(game: &GameEngine, row: usize) -> Vec<Option<CellFeedback>> {
        (0..game.cols())
            .map(|col| game.cell_feedback_at(row, col).unwrap())
            .collect()
    }

    #[test]
    fn new_game_is_empty() {
        let game = GameEngine::new("hello", DEFAULT_ROWS, DEFAULT_WORD_LENGTH).unwrap();
        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(game.cursor(), (0, 0));
        assert_eq!(game.attempts_used(), 0);
        assert!(game.grid().iter().flatten().all(Option::is_none));
        assert_eq!(game.grid().len(), 6);
        assert!(game.grid().iter().all(|row| row.len() == 5));
    }

    #[test]
    fn invalid_configuration() {
        assert_eq!(
            GameEngine::new("hello", 6, 4).unwrap_err(),
            GameError::InvalidConfiguration(ConfigError::LengthMismatch {
                expected: 4,
                actual: 5
            })
        );
        assert_eq!(
            GameEngine::new("hello", 0, 5).unwrap_err(),
            GameError::InvalidConfiguration(ConfigError::NoRows)
        );
        assert_eq!(
            GameEngine::new("", 6, 0).unwrap_err(),
            GameError::InvalidConfiguration(ConfigError::NoColumns)
        );
        assert!(matches!(
            GameEngine::new("he11o", 6, 5),
            Err(GameError::InvalidConfiguration(ConfigError::InvalidWord(_)))
        ));
    }

    #[test]
    fn padded_target_is_rejected() {
        assert_eq!(
            GameEngine::new(" hello ", 6, 5).unwrap_err(),
            GameError::InvalidConfiguration(ConfigError::LengthMismatch {
                expected: 5,
                actual: 7
            })
        );
        assert_eq!(
            GameEngine::new(" hello ", 6, 7).unwrap_err(),
            GameError::InvalidConfiguration(ConfigError::LengthMismatch {
                expected: 7,
                actual: 5
            })
        );
    }

    #[test]
    fn uppercase_target_is_normalised() {
        let mut game = GameEngine::new("HELLO", 6, 5).unwrap();
        assert_eq!(guess(&mut game, "hello"), Outcome::Finished(GameStatus::Won));
    }

    #[test]
    fn press_letter_fills_row_and_stops_at_end() {
        let mut game = GameEngine::new("hello", 6, 5).unwrap();
        for letter in b"abcde" {
            assert_eq!(game.press_letter(*letter), Outcome::Updated);
        }
        assert_eq!(game.cursor(), (0, 5));

        assert_eq!(game.press_letter(b'f'), Outcome::Ignored);
        assert_eq!(game.cursor(), (0, 5));
        assert_eq!(game.row_text(0), "abcde");
    }

    #[test]
    fn press_letter_lowercases_and_rejects_non_letters() {
        let mut game = GameEngine::new("hello", 6, 5).unwrap();
        assert_eq!(game.press_letter(b'H'), Outcome::Updated);
        assert_eq!(game.press_letter(b'1'), Outcome::Ignored);
        assert_eq!(game.press_letter(b' '), Outcome::Ignored);
        assert_eq!(game.grid()[0][0], Some(b'h'));
        assert_eq!(game.cursor(), (0, 1));
    }

    #[test]
    fn press_clear_removes_last_letter() {
        let mut game = GameEngine::new("hello", 6, 5).unwrap();
        type_word(&mut game, "wor");
        assert_eq!(game.press_clear(), Outcome::Updated);
        assert_eq!(game.cursor(), (0, 2));
        assert_eq!(game.row_text(0), "wo   ");
    }

    #[test]
    fn scenario_d_clear_on_empty_row_is_noop() {
        let mut game = GameEngine::new("hello", 6, 5).unwrap();
        let before = game.grid().to_vec();
        assert_eq!(game.press_clear(), Outcome::Ignored);
        assert_eq!(game.cursor(), (0, 0));
        assert_eq!(game.grid(), before.as_slice());
    }

    #[test]
    fn clear_never_reaches_submitted_rows() {
        let mut game = GameEngine::new("hello", 6, 5).unwrap();
        guess(&mut game, "world");
        assert_eq!(game.press_clear(), Outcome::Ignored);
        assert_eq!(game.row_text(0), "world");
    }

    #[test]
    fn submit_partial_row_is_noop() {
        let mut game = GameEngine::new("hello", 6, 5).unwrap();
        type_word(&mut game, "hell");
        let before = game.grid().to_vec();

        assert_eq!(game.press_submit(), Outcome::Ignored);
        assert_eq!(game.cursor(), (0, 4));
        assert_eq!(game.grid(), before.as_slice());
        assert_eq!(game.status(), GameStatus::Playing);
    }

    #[test]
    fn submit_empty_row_is_noop() {
        let mut game = GameEngine::new("hello", 6, 5).unwrap();
        assert_eq!(game.press_submit(), Outcome::Ignored);
        assert_eq!(game.attempts_used(), 0);
    }

    #[test]
    fn scenario_a_feedback_for_world() {
        let mut game = GameEngine::new("hello", 6, 5).unwrap();
        assert_eq!(guess(&mut game, "world"), Outcome::Updated);

        assert_eq!(
            row_feedback(&game, 0),
            vec![
                Some(Absent),
                Some(Present),
                Some(Absent),
                Some(Correct),
                Some(Absent)
            ]
        );
        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(game.cursor(), (1, 0));
    }

    #[test]
    fn scenario_b_first_guess_wins() {
        let mut game = GameEngine::new("hello", 6, 5).unwrap();
        assert_eq!(guess(&mut game, "hello"), Outcome::Finished(GameStatus::Won));

        assert_eq!(row_feedback(&game, 0), vec![Some(Correct); 5]);
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.attempts_used(), 1);
    }

    #[test]
    fn won_game_rejects_all_input() {
        let mut game = GameEngine::new("hello", 6, 5).unwrap();
        guess(&mut game, "hello");
        let before = game.grid().to_vec();

        assert_eq!(game.press_letter(b'a'), Outcome::Ignored);
        assert_eq!(game.press_clear(), Outcome::Ignored);
        assert_eq!(game.press_submit(), Outcome::Ignored);
        assert_eq!(game.press(Key::Letter(b'z')), Outcome::Ignored);
        assert_eq!(game.grid(), before.as_slice());
        assert_eq!(game.cursor(), (1, 0));
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn scenario_c_six_misses_lose() {
        let mut game = GameEngine::new("hello", 6, 5).unwrap();
        let misses = ["world", "would", "words", "large", "write", "first"];

        for (i, word) in misses.iter().enumerate() {
            let outcome = guess(&mut game, word);
            if i < 5 {
                assert_eq!(outcome, Outcome::Updated);
                assert_eq!(game.status(), GameStatus::Playing);
            } else {
                assert_eq!(outcome, Outcome::Finished(GameStatus::Lost));
            }
        }

        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.cursor(), (6, 0));
        assert_eq!(game.press_letter(b'h'), Outcome::Ignored);
    }

    #[test]
    fn win_on_last_row_is_a_win() {
        let mut game = GameEngine::new("hello", 2, 5).unwrap();
        guess(&mut game, "world");
        assert_eq!(guess(&mut game, "hello"), Outcome::Finished(GameStatus::Won));
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn scenario_e_key_feedback_keeps_best() {
        let mut game = GameEngine::new("hello", 6, 5).unwrap();
        // "world": l at col 3 is Correct
        guess(&mut game, "world");
        // "large": l at col 0 is Present
        guess(&mut game, "large");

        assert_eq!(game.key_feedback_for(b'l'), Some(Correct));
        assert_eq!(game.key_feedback_for(b'L'), Some(Correct));
        assert_eq!(game.key_feedback_for(b'o'), Some(Present));
        assert_eq!(game.key_feedback_for(b'w'), Some(Absent));
        assert_eq!(game.key_feedback_for(b'z'), None);
    }

    #[test]
    fn key_feedback_correct_beats_absent() {
        // A letter missing from the target and a letter at its exact column
        let mut game = GameEngine::new("lxxxx", 6, 5).unwrap();
        guess(&mut game, "abcde");
        guess(&mut game, "lmnop");
        assert_eq!(game.key_feedback_for(b'l'), Some(Correct));
        assert_eq!(game.key_feedback_for(b'a'), Some(Absent));
    }

    #[test]
    fn typed_but_unsubmitted_letters_have_no_key_feedback() {
        let mut game = GameEngine::new("hello", 6, 5).unwrap();
        type_word(&mut game, "hel");
        assert_eq!(game.key_feedback_for(b'h'), None);
        assert_eq!(row_feedback(&game, 0), vec![None; 5]);
    }

    #[test]
    fn unsubmitted_rows_have_no_feedback() {
        let mut game = GameEngine::new("hello", 6, 5).unwrap();
        guess(&mut game, "world");
        for row in 1..6 {
            assert_eq!(row_feedback(&game, row), vec![None; 5]);
        }
    }

    #[test]
    fn feedback_out_of_range() {
        let game = GameEngine::new("hello", 6, 5).unwrap();
        assert_eq!(
            game.cell_feedback_at(6, 0),
            Err(GameError::OutOfRange { row: 6, col: 0 })
        );
        assert_eq!(
            game.cell_feedback_at(0, 5),
            Err(GameError::OutOfRange { row: 0, col: 5 })
        );
    }

    #[test]
    fn feedback_queries_are_repeatable() {
        let mut game = GameEngine::new("hello", 6, 5).unwrap();
        guess(&mut game, "world");
        guess(&mut game, "large");

        assert_eq!(game.submitted_feedback(), game.submitted_feedback());
        assert_eq!(game.key_feedback_for(b'l'), game.key_feedback_for(b'l'));
        assert_eq!(row_feedback(&game, 1), row_feedback(&game, 1));
    }

    #[test]
    fn submitted_feedback_matches_cells() {
        let mut game = GameEngine::new("hello", 6, 5).unwrap();
        guess(&mut game, "world");
        type_word(&mut game, "he");

        let feedback = game.submitted_feedback();
        assert_eq!(feedback.len(), 1);
        assert_eq!(feedback[0], vec![Absent, Present, Absent, Correct, Absent]);
    }

    #[test]
    fn press_dispatches_keys() {
        let mut game = GameEngine::new("cat", 3, 3).unwrap();
        for key in [
            Key::Letter(b'c'),
            Key::Letter(b'a'),
            Key::Letter(b'r'),
            Key::Clear,
            Key::Letter(b't'),
        ] {
            assert_eq!(game.press(key), Outcome::Updated);
        }
        assert_eq!(game.press(Key::Submit), Outcome::Finished(GameStatus::Won));
    }

    #[test]
    fn outcome_changed() {
        assert!(!Outcome::Ignored.changed());
        assert!(Outcome::Updated.changed());
        assert!(Outcome::Finished(GameStatus::Lost).changed());
    }

    #[test]
    fn error_display() {
        let err = GameEngine::new("hello", 6, 4).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid configuration: target word has 5 letters, grid has 4 columns"
        );
        let err = GameError::OutOfRange { row: 7, col: 1 };
        assert_eq!(err.to_string(), "Cell (7, 1) is outside the grid");
    }
}
