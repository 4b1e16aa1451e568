//! Reduced input alphabet for the engine
//!
//! Front ends translate raw events (terminal keys, typed lines, on-screen
//! keyboard labels) into `Key` before calling the engine.

/// Label of the submit key on the on-screen keyboard
pub const ENTER: &str = "ENTER";

/// Label of the backspace key on the on-screen keyboard
pub const CLEAR: &str = "CLEAR";

/// On-screen keyboard layout, top row first
pub const KEYBOARD_ROWS: [&[&str]; 3] = [
    &["q", "w", "e", "r", "t", "y", "u", "i", "o", "p"],
    &["a", "s", "d", "f", "g", "h", "j", "k", "l"],
    &[ENTER, "z", "x", "c", "v", "b", "n", "m", CLEAR],
];

/// A single engine input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A lowercase ASCII letter
    Letter(u8),
    Clear,
    Submit,
}

impl Key {
    /// Translate a typed character
    ///
    /// Letters are lowercased; newline/carriage return submit; backspace and
    /// delete clear. Anything else is not a key.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Key;
    ///
    /// assert_eq!(Key::from_char('H'), Some(Key::Letter(b'h')));
    /// assert_eq!(Key::from_char('\n'), Some(Key::Submit));
    /// assert_eq!(Key::from_char('7'), None);
    /// ```
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'a'..='z' => Some(Self::Letter(ch as u8)),
            'A'..='Z' => Some(Self::Letter(ch.to_ascii_lowercase() as u8)),
            '\n' | '\r' => Some(Self::Submit),
            '\u{8}' | '\u{7f}' => Some(Self::Clear),
            _ => None,
        }
    }

    /// Translate an on-screen keyboard label (case-insensitive)
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        if label.eq_ignore_ascii_case(ENTER) {
            return Some(Self::Submit);
        }
        if label.eq_ignore_ascii_case(CLEAR) {
            return Some(Self::Clear);
        }

        let mut chars = label.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) if ch.is_ascii_alphabetic() => Self::from_char(ch),
            _ => None,
        }
    }
}
