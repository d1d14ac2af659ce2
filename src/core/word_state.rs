//! Masked phrase representation
//!
//! A `WordState` is the guesser's view of the secret phrase: an ordered list of
//! word slots, each an ordered list of cells that are either revealed or hidden.

use super::GuessedLetters;
use std::fmt;

/// One letter position inside a word slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Letter already revealed at this position
    Known(char),
    /// Letter not yet disclosed
    Unknown,
}

impl Cell {
    /// Placeholder character used for hidden letters in the wire format
    pub const PLACEHOLDER: char = '_';

    /// The revealed letter, if any
    #[inline]
    #[must_use]
    pub const fn letter(self) -> Option<char> {
        match self {
            Self::Known(letter) => Some(letter),
            Self::Unknown => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_known(self) -> bool {
        matches!(self, Self::Known(_))
    }

    /// Decode a single non-whitespace wire character
    fn from_wire(ch: char) -> Result<Self, WordStateError> {
        if ch == Self::PLACEHOLDER {
            return Ok(Self::Unknown);
        }
        if !ch.is_alphabetic() {
            return Err(WordStateError::InvalidCharacter(ch));
        }

        let mut lower = ch.to_lowercase();
        match (lower.next(), lower.next()) {
            (Some(letter), None) => Ok(Self::Known(letter)),
            _ => Err(WordStateError::InvalidCharacter(ch)),
        }
    }

    const fn to_char(self) -> char {
        match self {
            Self::Known(letter) => letter,
            Self::Unknown => Self::PLACEHOLDER,
        }
    }
}

/// Error type for wire states and reveals that cannot be applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordStateError {
    Empty,
    InvalidCharacter(char),
    PositionOutOfRange { position: usize, len: usize },
    ConflictingReveal { position: usize, existing: char },
}

impl fmt::Display for WordStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word state is empty"),
            Self::InvalidCharacter(ch) => {
                write!(f, "Word state contains invalid character {ch:?}")
            }
            Self::PositionOutOfRange { position, len } => {
                write!(f, "Position {position} is outside a phrase of {len} letters")
            }
            Self::ConflictingReveal { position, existing } => {
                write!(f, "Position {position} already shows '{existing}'")
            }
        }
    }
}

impl std::error::Error for WordStateError {}

/// Masked view of a secret phrase
///
/// Slot boundaries correspond to the spaces of the secret phrase.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WordState {
    slots: Vec<Vec<Cell>>,
}

impl WordState {
    /// Build a state directly from slots
    ///
    /// No validation happens here; degenerate shapes simply never match a corpus.
    #[must_use]
    pub const fn new(slots: Vec<Vec<Cell>>) -> Self {
        Self { slots }
    }

    /// A fully hidden state with the given word lengths
    ///
    /// # Examples
    /// ```
    /// use airline_hangman::core::WordState;
    ///
    /// let state = WordState::blank(&[3, 5]);
    /// assert_eq!(state.to_wire(), "_ _ _   _ _ _ _ _");
    /// ```
    #[must_use]
    pub fn blank(lengths: &[usize]) -> Self {
        Self {
            slots: lengths.iter().map(|&len| vec![Cell::Unknown; len]).collect(),
        }
    }

    /// Mask a secret phrase, revealing only letters already guessed
    #[must_use]
    pub fn from_secret(secret: &str, guessed: &GuessedLetters) -> Self {
        let slots = secret
            .split_whitespace()
            .map(|word| {
                word.chars()
                    .map(|ch| {
                        if guessed.contains(ch) {
                            Cell::Known(ch)
                        } else {
                            Cell::Unknown
                        }
                    })
                    .collect()
            })
            .collect();

        Self { slots }
    }

    /// Parse the wire encoding
    ///
    /// Cells are separated by a single whitespace character and words by a run
    /// of two or more. `_` marks a hidden letter; revealed letters are lowercased.
    ///
    /// # Errors
    /// Returns `WordStateError` if the string is blank or contains a character
    /// that is neither a letter nor the placeholder.
    ///
    /// # Examples
    /// ```
    /// use airline_hangman::core::{Cell, WordState};
    ///
    /// let state = WordState::parse("_ _ _   i _ _ _ _").unwrap();
    /// assert_eq!(state.slot_lengths(), vec![3, 5]);
    /// assert_eq!(state.slots()[1][0], Cell::Known('i'));
    ///
    /// assert!(WordState::parse("   ").is_err());
    /// assert!(WordState::parse("a _ 3").is_err());
    /// ```
    pub fn parse(wire: &str) -> Result<Self, WordStateError> {
        let trimmed = wire.trim();
        if trimmed.is_empty() {
            return Err(WordStateError::Empty);
        }

        let mut slots = Vec::new();
        let mut current = Vec::new();
        let mut gap = 0usize;

        for ch in trimmed.chars() {
            if ch.is_whitespace() {
                gap += 1;
                continue;
            }
            if gap >= 2 {
                slots.push(std::mem::take(&mut current));
            }
            gap = 0;
            current.push(Cell::from_wire(ch)?);
        }
        slots.push(current);

        Ok(Self { slots })
    }

    /// Parse the wire encoding, mapping malformed input to an empty state
    ///
    /// An empty state matches nothing, so the guess engine cascades straight
    /// to its fallback tier.
    #[must_use]
    pub fn parse_lenient(wire: &str) -> Self {
        Self::parse(wire).unwrap_or_else(|err| {
            tracing::debug!(wire, %err, "treating malformed word state as unmatchable");
            Self::default()
        })
    }

    /// Render in the wire encoding (inverse of [`WordState::parse`])
    #[must_use]
    pub fn to_wire(&self) -> String {
        self.slots
            .iter()
            .map(|slot| {
                slot.iter()
                    .map(|cell| cell.to_char().to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("   ")
    }

    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[Vec<Cell>] {
        &self.slots
    }

    #[inline]
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn slot_lengths(&self) -> Vec<usize> {
        self.slots.iter().map(Vec::len).collect()
    }

    /// Total number of letter cells across all slots
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.slots.iter().map(Vec::len).sum()
    }

    #[must_use]
    pub fn unknown_count(&self) -> usize {
        self.cells().filter(|cell| !cell.is_known()).count()
    }

    /// At least one slot and no empty slot
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        !self.slots.is_empty() && self.slots.iter().all(|slot| !slot.is_empty())
    }

    /// Well-formed and every cell revealed
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.is_well_formed() && self.unknown_count() == 0
    }

    /// Reveal `letter` at the given 0-based letter positions
    ///
    /// Positions count letters only, continuing across word boundaries.
    ///
    /// # Errors
    /// Returns `WordStateError` if a position is past the last letter or the
    /// cell already shows a different letter. The state is left untouched on error.
    pub fn reveal(&mut self, letter: char, positions: &[usize]) -> Result<(), WordStateError> {
        let len = self.letter_count();
        let cells: Vec<Cell> = self.cells().collect();

        for &position in positions {
            match cells.get(position) {
                None => return Err(WordStateError::PositionOutOfRange { position, len }),
                Some(Cell::Known(existing)) if *existing != letter => {
                    return Err(WordStateError::ConflictingReveal {
                        position,
                        existing: *existing,
                    });
                }
                Some(_) => {}
            }
        }

        let mut index = 0;
        for slot in &mut self.slots {
            for cell in slot {
                if positions.contains(&index) {
                    *cell = Cell::Known(letter);
                }
                index += 1;
            }
        }

        Ok(())
    }

    fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.slots.iter().flatten().copied()
    }
}

impl fmt::Display for WordState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            for cell in slot {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}
