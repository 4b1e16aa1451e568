//! Per-cell feedback classification
//!
//! Each submitted cell is classified as one of:
//! - Absent (letter not in the target at all)
//! - Present (letter in the target, wrong column)
//! - Correct (letter matches the target at that column)
//!
//! The variants are declared in rank order so that `Ord` gives the keyboard
//! priority directly: `Correct > Present > Absent`.

use super::Word;

/// Feedback for one submitted cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CellFeedback {
    Absent,
    Present,
    Correct,
}

impl CellFeedback {
    /// Classify `letter` typed at `col` against `target`
    ///
    /// Presence is a plain membership test: a letter that occurs anywhere in
    /// the target is `Present` in every non-matching column, regardless of
    /// how many times it was guessed.
    ///
    /// # Panics
    /// Panics if `col >= target.len()`
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{CellFeedback, Word};
    ///
    /// let target = Word::new("hello").unwrap();
    /// assert_eq!(CellFeedback::evaluate(b'h', 0, &target), CellFeedback::Correct);
    /// assert_eq!(CellFeedback::evaluate(b'o', 1, &target), CellFeedback::Present);
    /// assert_eq!(CellFeedback::evaluate(b'w', 0, &target), CellFeedback::Absent);
    /// ```
    #[must_use]
    pub fn evaluate(letter: u8, col: usize, target: &Word) -> Self {
        if target.char_at(col) == letter {
            Self::Correct
        } else if target.has_letter(letter) {
            Self::Present
        } else {
            Self::Absent
        }
    }

    /// Glyph used in the share text
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
        }
    }

    /// Single-letter code used by the plain-text output (G/Y/-)
    #[must_use]
    pub const fn to_code(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }
}

/// Render a row of feedback as emoji
#[must_use]
pub fn row_to_emoji(row: &[CellFeedback]) -> String {
    row.iter().map(|f| f.to_emoji()).collect()
}

/// Render a row of feedback as G/Y/- codes
#[must_use]
pub fn row_to_codes(row: &[CellFeedback]) -> String {
    row.iter().map(|f| f.to_code()).collect()
}
