//! Assistant session shared by the interactive front ends
//!
//! The user plays hangman somewhere else; the session mirrors that game from
//! the feedback the user types in and asks the engine for each next letter.

use crate::core::{GuessOutcome, GuessedLetters, WordState, WordStateError};
use crate::solver::{Guess, GuessEngine};
use std::fmt;

/// What the game revealed for a suggested letter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    /// 0-based letter positions where the letter appears
    Hit(Vec<usize>),
    Miss,
}

/// Error type for user input the session cannot apply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    InvalidShape(String),
    InvalidPosition(String),
    State(WordStateError),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidShape(input) => write!(
                f,
                "Invalid shape '{input}'. Enter word lengths like '3 5' or a state like '_ _ _   _ _'"
            ),
            Self::InvalidPosition(token) => write!(f, "Invalid position '{token}'"),
            Self::State(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for InputError {}

impl From<WordStateError> for InputError {
    fn from(err: WordStateError) -> Self {
        Self::State(err)
    }
}

/// One answered suggestion
#[derive(Debug, Clone)]
pub struct AssistTurn {
    pub guess: Guess,
    pub feedback: Feedback,
}

#[derive(Debug, Clone)]
struct Snapshot {
    state: WordState,
    guessed: GuessedLetters,
    lives_remaining: usize,
}

/// Mirror of a hangman game driven by user feedback
#[derive(Debug, Clone)]
pub struct AssistSession {
    state: WordState,
    guessed: GuessedLetters,
    max_lives: usize,
    lives_remaining: usize,
    turns: Vec<AssistTurn>,
    undo_stack: Vec<Snapshot>,
}

impl AssistSession {
    #[must_use]
    pub fn new(state: WordState, max_lives: usize) -> Self {
        let mut guessed = GuessedLetters::new();
        for letter in state.slots().iter().flatten().filter_map(|cell| cell.letter()) {
            guessed.insert(letter);
        }

        Self {
            state,
            guessed,
            max_lives,
            lives_remaining: max_lives,
            turns: Vec::new(),
            undo_stack: Vec::new(),
        }
    }

    /// Ask the engine for the next letter
    #[must_use]
    pub fn suggest(&self, engine: &GuessEngine) -> Guess {
        engine.guess_detailed(&self.state, &self.guessed)
    }

    /// Record the game's answer to `guess`
    ///
    /// A hit with no positions counts as a miss. Letters already guessed are
    /// reported as `Repeated` and leave the session unchanged.
    ///
    /// # Errors
    ///
    /// Returns `WordStateError` if a position is outside the phrase or already
    /// shows a different letter; the session is left unchanged.
    pub fn apply(&mut self, guess: Guess, feedback: Feedback) -> Result<GuessOutcome, WordStateError> {
        if self.guessed.contains(guess.letter) {
            return Ok(GuessOutcome::Repeated);
        }

        let snapshot = Snapshot {
            state: self.state.clone(),
            guessed: self.guessed.clone(),
            lives_remaining: self.lives_remaining,
        };

        let (outcome, feedback) = match feedback {
            Feedback::Hit(positions) if !positions.is_empty() => {
                self.state.reveal(guess.letter, &positions)?;
                (GuessOutcome::Correct, Feedback::Hit(positions))
            }
            _ => {
                self.lives_remaining = self.lives_remaining.saturating_sub(1);
                (GuessOutcome::Incorrect, Feedback::Miss)
            }
        };

        self.guessed.insert(guess.letter);
        self.undo_stack.push(snapshot);
        self.turns.push(AssistTurn { guess, feedback });
        Ok(outcome)
    }

    /// Roll back the last answered suggestion, returning its letter
    pub fn undo(&mut self) -> Option<char> {
        let snapshot = self.undo_stack.pop()?;
        self.state = snapshot.state;
        self.guessed = snapshot.guessed;
        self.lives_remaining = snapshot.lives_remaining;
        self.turns.pop().map(|turn| turn.guess.letter)
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.state.is_complete()
    }

    #[must_use]
    pub const fn is_lost(&self) -> bool {
        self.lives_remaining == 0
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.is_solved() || self.is_lost()
    }

    #[must_use]
    pub const fn state(&self) -> &WordState {
        &self.state
    }

    #[must_use]
    pub const fn guessed(&self) -> &GuessedLetters {
        &self.guessed
    }

    #[must_use]
    pub const fn lives_remaining(&self) -> usize {
        self.lives_remaining
    }

    #[must_use]
    pub const fn max_lives(&self) -> usize {
        self.max_lives
    }

    #[must_use]
    pub fn turns(&self) -> &[AssistTurn] {
        &self.turns
    }

    /// Letters answered as misses, in order
    #[must_use]
    pub fn incorrect(&self) -> Vec<char> {
        self.turns
            .iter()
            .filter(|turn| turn.feedback == Feedback::Miss)
            .map(|turn| turn.guess.letter)
            .collect()
    }
}

/// Parse the phrase shape typed at the start of a game
///
/// Accepts word lengths (`3 5`) or a wire state (`_ _ _   i _ _ _ _`).
///
/// # Errors
///
/// Returns `InputError` for blank input, zero-length words, or malformed states.
///
/// # Examples
/// ```
/// use airline_hangman::commands::parse_shape;
///
/// assert_eq!(parse_shape("3 5").unwrap().slot_lengths(), vec![3, 5]);
/// assert_eq!(parse_shape("_ _ x").unwrap().to_wire(), "_ _ x");
/// ```
pub fn parse_shape(input: &str) -> Result<WordState, InputError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(InputError::InvalidShape(input.to_string()));
    }

    let lengths: Option<Vec<usize>> = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| token.parse().ok())
        .collect();

    match lengths {
        Some(lengths) if lengths.contains(&0) => Err(InputError::InvalidShape(input.to_string())),
        Some(lengths) => Ok(WordState::blank(&lengths)),
        None => Ok(WordState::parse(input)?),
    }
}

/// Parse the positions a letter was revealed at
///
/// Positions are 1-based over letters only; blank input or `-` means a miss.
///
/// # Errors
///
/// Returns `InputError::InvalidPosition` for tokens that are not numbers in
/// `1..=letter_count`.
pub fn parse_feedback(input: &str, letter_count: usize) -> Result<Feedback, InputError> {
    let input = input.trim();
    if input.is_empty() || input == "-" {
        return Ok(Feedback::Miss);
    }

    let mut positions = Vec::new();
    for token in input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
    {
        match token.parse::<usize>() {
            Ok(position) if (1..=letter_count).contains(&position) => positions.push(position - 1),
            _ => return Err(InputError::InvalidPosition(token.to_string())),
        }
    }

    positions.sort_unstable();
    positions.dedup();
    Ok(Feedback::Hit(positions))
}
