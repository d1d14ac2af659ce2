//! Airline Hangman
//!
//! A hangman letter guesser tuned for airline vocabulary. Each guess consults
//! an airline phrase corpus first, then a general word corpus, then a fixed
//! letter-frequency order.
//!
//! # Quick Start
//!
//! ```rust
//! use airline_hangman::core::GuessedLetters;
//! use airline_hangman::corpus::{AIRLINES, Corpus, GENERAL};
//! use airline_hangman::solver::GuessEngine;
//!
//! let engine = GuessEngine::new(Corpus::from_slice(AIRLINES), Corpus::from_slice(GENERAL));
//!
//! // Three hidden letters, a word gap, then five hidden letters
//! let letter = engine.guess_wire("_ _ _   _ _ _ _ _", &GuessedLetters::new());
//! assert!(letter.is_ascii_lowercase());
//! ```

// Core domain types
pub mod core;

// Guessing algorithms
pub mod solver;

// Phrase corpora
pub mod corpus;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
