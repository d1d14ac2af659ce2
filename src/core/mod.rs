//! Core domain types for hangman
//!
//! This module contains the fundamental domain types: the masked phrase state,
//! the guessed-letter set, and a playable game used by the simulator.

mod game;
mod guessed;
mod word_state;

pub use game::{DEFAULT_LIVES, Game, GameError, GuessOutcome};
pub use guessed::GuessedLetters;
pub use word_state::{Cell, WordState, WordStateError};
