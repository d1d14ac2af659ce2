//! Structural phrase matching
//!
//! Compares a masked state against corpus phrases slot by slot: same word count,
//! same length per word, and every revealed letter in place.

use crate::core::{Cell, WordState};
use crate::corpus::Corpus;
use rayon::prelude::*;

/// Corpora at least this large are filtered in parallel
const PARALLEL_THRESHOLD: usize = 4096;

/// Check whether `phrase` has the exact shape and revealed letters of `state`
///
/// Phrases are tokenized on single spaces. A state with no slots, or with an
/// empty slot, matches nothing.
///
/// # Examples
/// ```
/// use airline_hangman::core::WordState;
/// use airline_hangman::solver::matcher::matches;
///
/// let state = WordState::parse("_ _ _   i _ _ _ _").unwrap();
/// assert!(matches(&state, "air india"));
/// assert!(!matches(&state, "airindia"));
/// assert!(!matches(&state, "air asia"));
/// ```
#[must_use]
pub fn matches(state: &WordState, phrase: &str) -> bool {
    if !state.is_well_formed() {
        return false;
    }

    let mut words = phrase.split(' ');
    for slot in state.slots() {
        match words.next() {
            Some(word) if word_matches(slot, word) => {}
            _ => return false,
        }
    }

    words.next().is_none()
}

fn word_matches(slot: &[Cell], word: &str) -> bool {
    let mut letters = word.chars();

    for cell in slot {
        match (cell, letters.next()) {
            (_, None) => return false,
            (Cell::Known(expected), Some(actual)) if *expected != actual => return false,
            _ => {}
        }
    }

    letters.next().is_none()
}

/// Filter a corpus down to the phrases matching `state`
///
/// Candidates keep corpus order, which the letter scorer relies on for
/// tie-breaking.
#[must_use]
pub fn filter_candidates<'a>(state: &WordState, corpus: &'a Corpus) -> Vec<&'a str> {
    if !state.is_well_formed() {
        return Vec::new();
    }

    if corpus.len() >= PARALLEL_THRESHOLD {
        corpus
            .phrases()
            .par_iter()
            .map(String::as_str)
            .filter(|phrase| matches(state, phrase))
            .collect()
    } else {
        corpus.iter().filter(|phrase| matches(state, phrase)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(phrases: &[&str]) -> Corpus {
        Corpus::from_slice(phrases)
    }

    #[test]
    fn unknown_cells_constrain_length_only() {
        let state = WordState::blank(&[6]);
        let corpus = corpus(&["indigo", "airbus", "jet", "cockpits"]);

        assert_eq!(filter_candidates(&state, &corpus), vec!["indigo", "airbus"]);
    }

    #[test]
    fn known_cells_must_match_exactly() {
        let state = WordState::parse("i _ _ i g _").unwrap();
        let corpus = corpus(&["indigo", "airbus"]);

        assert_eq!(filter_candidates(&state, &corpus), vec!["indigo"]);
    }

    #[test]
    fn multi_word_shape() {
        let state = WordState::blank(&[3, 5]);
        let corpus = corpus(&[
            "air india",
            "air asia",
            "airindia",
            "jet bridge",
            "air india cargo",
            "the crew",
            "red carpet",
        ]);

        let candidates = filter_candidates(&state, &corpus);
        assert_eq!(candidates, vec!["air india"]);
    }

    #[test]
    fn every_candidate_has_state_shape() {
        let state = WordState::parse("_ a _   _ _ _ _").unwrap();
        let corpus = corpus(&[
            "car park", "jet lag", "tax free", "gate", "far away", "red eye", "way down",
        ]);

        for candidate in filter_candidates(&state, &corpus) {
            let words: Vec<&str> = candidate.split(' ').collect();
            assert_eq!(words.len(), state.slot_count());
            for (word, slot) in words.iter().zip(state.slots()) {
                assert_eq!(word.chars().count(), slot.len());
                for (ch, cell) in word.chars().zip(slot) {
                    if let Cell::Known(letter) = cell {
                        assert_eq!(ch, *letter);
                    }
                }
            }
        }
    }

    #[test]
    fn degenerate_states_match_nothing() {
        let corpus = corpus(&["a", "air", ""]);

        assert!(filter_candidates(&WordState::default(), &corpus).is_empty());
        assert!(filter_candidates(&WordState::blank(&[0]), &corpus).is_empty());
        assert!(filter_candidates(&WordState::blank(&[3, 0]), &corpus).is_empty());
    }

    #[test]
    fn irregular_spacing_does_not_match() {
        let state = WordState::blank(&[3, 5]);
        assert!(!matches(&state, "air  india"));
        assert!(!matches(&state, " air india"));
    }

    #[test]
    fn letter_count_uses_chars_not_bytes() {
        let state = WordState::blank(&[4]);
        assert!(matches(&state, "café"));
    }

    #[test]
    fn parallel_path_preserves_order() {
        let phrases: Vec<String> = (0..PARALLEL_THRESHOLD + 10)
            .map(|i| if i % 3 == 0 { format!("a{}", "b".repeat(i % 7)) } else { "zz".to_string() })
            .collect();
        let corpus = Corpus::new(phrases.clone());
        let state = WordState::parse("a _").unwrap();

        let expected: Vec<&str> = phrases
            .iter()
            .map(String::as_str)
            .filter(|p| matches(&state, p))
            .collect();
        assert_eq!(filter_candidates(&state, &corpus), expected);
        assert!(!expected.is_empty());
    }
}
