//! Letter frequency scoring over candidate phrases
//!
//! Counts every letter across the candidates in corpus order, keeping the
//! position at which each letter was first seen so ties resolve deterministically.

use crate::core::GuessedLetters;
use rustc_hash::FxHashMap;

/// Occurrence statistics for one letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterCount {
    pub letter: char,
    /// Occurrences across all candidates
    pub count: usize,
    /// Index in the concatenated letter stream where the letter first appeared
    pub first_seen: usize,
}

/// Frequency table built from a candidate set
#[derive(Debug, Clone, Default)]
pub struct LetterFrequencyTable {
    entries: Vec<LetterCount>,
    index: FxHashMap<char, usize>,
}

impl LetterFrequencyTable {
    /// Count letters across `candidates`, skipping word separators
    ///
    /// # Examples
    /// ```
    /// use airline_hangman::solver::scorer::LetterFrequencyTable;
    ///
    /// let table = LetterFrequencyTable::from_candidates(["indigo", "airbus"]);
    /// assert_eq!(table.count_of('i'), 3);
    /// assert_eq!(table.count_of('z'), 0);
    /// ```
    pub fn from_candidates<I, S>(candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::default();
        let mut position = 0;

        for candidate in candidates {
            for letter in candidate.as_ref().chars().filter(|c| c.is_alphabetic()) {
                table.record(letter, position);
                position += 1;
            }
        }

        table
    }

    fn record(&mut self, letter: char, position: usize) {
        if let Some(&slot) = self.index.get(&letter) {
            self.entries[slot].count += 1;
        } else {
            self.index.insert(letter, self.entries.len());
            self.entries.push(LetterCount {
                letter,
                count: 1,
                first_seen: position,
            });
        }
    }

    #[must_use]
    pub fn count_of(&self, letter: char) -> usize {
        self.index
            .get(&letter)
            .map_or(0, |&slot| self.entries[slot].count)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All letters, highest count first, ties by earliest first sighting
    #[must_use]
    pub fn ranked(&self) -> Vec<LetterCount> {
        let mut ranked = self.entries.clone();
        ranked.sort_by_key(|entry| (std::cmp::Reverse(entry.count), entry.first_seen));
        ranked
    }

    /// Best letter not yet guessed, or `None` when every counted letter is taken
    #[must_use]
    pub fn best_excluding(&self, guessed: &GuessedLetters) -> Option<char> {
        self.entries
            .iter()
            .filter(|entry| !guessed.contains(entry.letter))
            .min_by_key(|entry| (std::cmp::Reverse(entry.count), entry.first_seen))
            .map(|entry| entry.letter)
    }
}

/// Score `candidates` and pick the best unguessed letter
///
/// Returns `None` for an empty candidate set or when all candidate letters
/// have been guessed.
#[must_use]
pub fn best_letter(candidates: &[&str], guessed: &GuessedLetters) -> Option<char> {
    if candidates.is_empty() {
        return None;
    }

    LetterFrequencyTable::from_candidates(candidates.iter()).best_excluding(guessed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highest_count_wins() {
        let guessed = GuessedLetters::new();
        assert_eq!(best_letter(&["indigo", "airbus"], &guessed), Some('i'));
    }

    #[test]
    fn ties_break_on_first_seen() {
        let guessed = GuessedLetters::new();
        // All six letters appear once, 'c' is scanned first
        assert_eq!(best_letter(&["cat", "dog"], &guessed), Some('c'));
    }

    #[test]
    fn guessed_letters_are_excluded() {
        let guessed: GuessedLetters = ['i', 'g'].into_iter().collect();
        // Remaining n, d, o tie at one; n is seen first
        assert_eq!(best_letter(&["indigo"], &guessed), Some('n'));
    }

    #[test]
    fn exhausted_table_yields_none() {
        let guessed: GuessedLetters = "indgo".chars().collect();
        assert_eq!(best_letter(&["indigo"], &guessed), None);
    }

    #[test]
    fn empty_candidates_yield_none() {
        assert_eq!(best_letter(&[], &GuessedLetters::new()), None);
    }

    #[test]
    fn spaces_are_not_counted() {
        let table = LetterFrequencyTable::from_candidates(["air india"]);
        assert_eq!(table.count_of(' '), 0);
        assert_eq!(table.count_of('i'), 3);
        assert_eq!(table.count_of('a'), 2);
    }

    #[test]
    fn first_seen_spans_candidates() {
        let table = LetterFrequencyTable::from_candidates(["ab", "cb"]);
        let ranked = table.ranked();

        assert_eq!(
            ranked,
            vec![
                LetterCount { letter: 'b', count: 2, first_seen: 1 },
                LetterCount { letter: 'a', count: 1, first_seen: 0 },
                LetterCount { letter: 'c', count: 1, first_seen: 2 },
            ]
        );
    }

    #[test]
    fn ranking_is_deterministic() {
        let candidates = ["runway", "airway", "taxiway"];
        let first = LetterFrequencyTable::from_candidates(candidates).ranked();
        let second = LetterFrequencyTable::from_candidates(candidates).ranked();
        assert_eq!(first, second);
        assert_eq!(first[0].letter, 'a');
    }
}
