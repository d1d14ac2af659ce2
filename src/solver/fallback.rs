//! Static letter-frequency fallback
//!
//! Last tier of the cascade, used when neither corpus produces a letter.

use crate::core::GuessedLetters;

/// English letters ordered by approximate frequency, most frequent first
pub const FALLBACK_ORDER: [char; 26] = [
    'e', 'a', 'r', 'i', 'o', 't', 'n', 's', 'l', 'c', 'u', 'd', 'p', 'm', 'h', 'g', 'b', 'f', 'y',
    'w', 'k', 'v', 'x', 'z', 'j', 'q',
];

/// Returned when every letter of [`FALLBACK_ORDER`] has been guessed
///
/// Not checked against the guessed set, so it can repeat a guess.
pub const LAST_RESORT: char = 'z';

/// First letter of [`FALLBACK_ORDER`] not yet guessed
///
/// Always produces a letter.
///
/// # Examples
/// ```
/// use airline_hangman::core::GuessedLetters;
/// use airline_hangman::solver::fallback::fallback_guess;
///
/// assert_eq!(fallback_guess(&GuessedLetters::new()), 'e');
///
/// let guessed: GuessedLetters = ['e', 'a'].into_iter().collect();
/// assert_eq!(fallback_guess(&guessed), 'r');
/// ```
#[must_use]
pub fn fallback_guess(guessed: &GuessedLetters) -> char {
    FALLBACK_ORDER
        .iter()
        .copied()
        .find(|&letter| !guessed.contains(letter))
        .unwrap_or(LAST_RESORT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn order_covers_alphabet_once() {
        let unique: FxHashSet<char> = FALLBACK_ORDER.iter().copied().collect();
        assert_eq!(unique.len(), 26);
        assert!(FALLBACK_ORDER.iter().all(char::is_ascii_lowercase));
    }

    #[test]
    fn skips_guessed_letters_in_order() {
        let guessed: GuessedLetters = "eariot".chars().collect();
        assert_eq!(fallback_guess(&guessed), 'n');
    }

    #[test]
    fn ignores_letters_outside_order() {
        let guessed: GuessedLetters = ['q', 'j'].into_iter().collect();
        assert_eq!(fallback_guess(&guessed), 'e');
    }

    #[test]
    fn last_unguessed_letter() {
        let guessed: GuessedLetters = FALLBACK_ORDER[..25].iter().copied().collect();
        assert_eq!(fallback_guess(&guessed), 'q');
    }

    #[test]
    fn exhausted_order_returns_last_resort_even_if_guessed() {
        let guessed: GuessedLetters = FALLBACK_ORDER.iter().copied().collect();
        assert!(guessed.contains(LAST_RESORT));
        assert_eq!(fallback_guess(&guessed), 'z');
    }
}
