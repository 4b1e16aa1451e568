//! Word lists for picking a game's target
//!
//! Provides the embedded word list and uniform random selection from any list.

mod embedded;
pub mod loader;

use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;

pub use embedded::{WORDS, WORDS_COUNT};

/// Pick a target uniformly at random
///
/// Returns `None` if `words` is empty.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use wordle_game::wordlists::{WORDS, choose_target, loader::words_from_slice};
///
/// let words = words_from_slice(WORDS);
/// let mut rng = StdRng::seed_from_u64(7);
/// let target = choose_target(&words, &mut rng).unwrap();
/// assert!(words.contains(target));
/// ```
pub fn choose_target<'a, R: Rng + ?Sized>(words: &'a [Word], rng: &mut R) -> Option<&'a Word> {
    words.choose(rng)
}
