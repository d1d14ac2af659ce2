//! Letters already tried in the current game

use rustc_hash::FxHashSet;

/// Set of single lowercase letters already guessed
///
/// Supplied by the caller on every request; the engine never retains it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessedLetters {
    letters: FxHashSet<char>,
}

impl GuessedLetters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from loosely typed entries such as a JSON string array
    ///
    /// Entries that are not exactly one alphabetic character are ignored;
    /// accepted letters are lowercased.
    ///
    /// # Examples
    /// ```
    /// use airline_hangman::core::GuessedLetters;
    ///
    /// let guessed = GuessedLetters::from_strs(["a", "E", "xy", "", "7"]);
    /// assert_eq!(guessed.sorted(), vec!['a', 'e']);
    /// ```
    pub fn from_strs<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        entries
            .into_iter()
            .filter_map(|entry| {
                let mut chars = entry.as_ref().trim().chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) if ch.is_alphabetic() => Some(ch),
                    _ => None,
                }
            })
            .collect()
    }

    /// Record a letter, returning `false` if it was already present
    pub fn insert(&mut self, letter: char) -> bool {
        self.letters.insert(normalize(letter))
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.iter().copied()
    }

    /// Letters in alphabetical order, for display
    #[must_use]
    pub fn sorted(&self) -> Vec<char> {
        let mut letters: Vec<char> = self.iter().collect();
        letters.sort_unstable();
        letters
    }
}

impl FromIterator<char> for GuessedLetters {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        Self {
            letters: iter.into_iter().map(normalize).collect(),
        }
    }
}

fn normalize(letter: char) -> char {
    let mut lower = letter.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(ch), None) => ch,
        _ => letter,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_reports_duplicates() {
        let mut guessed = GuessedLetters::new();
        assert!(guessed.insert('e'));
        assert!(!guessed.insert('e'));
        assert!(!guessed.insert('E'));
        assert_eq!(guessed.len(), 1);
    }

    #[test]
    fn collect_lowercases() {
        let guessed: GuessedLetters = ['A', 'b'].into_iter().collect();
        assert!(guessed.contains('a'));
        assert!(guessed.contains('b'));
        assert!(!guessed.contains('A'));
    }

    #[test]
    fn from_strs_keeps_single_letters_only() {
        let guessed = GuessedLetters::from_strs(vec![
            "i".to_string(),
            " g ".to_string(),
            "ab".to_string(),
            "-".to_string(),
        ]);
        assert_eq!(guessed.sorted(), vec!['g', 'i']);
    }

    #[test]
    fn empty_by_default() {
        let guessed = GuessedLetters::default();
        assert!(guessed.is_empty());
        assert!(guessed.sorted().is_empty());
    }
}
