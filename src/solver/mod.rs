//! Hangman guessing
//!
//! Pattern matching, letter scoring, the static fallback, and the engine that
//! cascades through them.

mod engine;
pub mod fallback;
pub mod matcher;
pub mod scorer;

pub use engine::{EngineConfig, Guess, GuessEngine, Tier};
