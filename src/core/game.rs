//! A single hangman game against a known secret
//!
//! Used by the simulator commands; the guess engine itself never sees a `Game`.

use super::{GuessedLetters, WordState};
use std::fmt;

/// Lives granted per game unless configured otherwise
pub const DEFAULT_LIVES: usize = 6;

/// Result of applying one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Letter occurs in the secret
    Correct,
    /// Letter does not occur, one life lost
    Incorrect,
    /// Letter was already tried, nothing changes
    Repeated,
}

/// Error type for secrets that cannot be played
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    EmptySecret,
    InvalidCharacter(char),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySecret => write!(f, "Secret phrase is empty"),
            Self::InvalidCharacter(ch) => {
                write!(f, "Secret phrase contains invalid character {ch:?}")
            }
        }
    }
}

impl std::error::Error for GameError {}

/// Hangman game state with lives tracking
#[derive(Debug, Clone)]
pub struct Game {
    secret: String,
    guessed: GuessedLetters,
    history: Vec<char>,
    incorrect: Vec<char>,
    lives_remaining: usize,
}

impl Game {
    /// Start a game for `secret`
    ///
    /// The secret is lowercased and its whitespace collapsed to single spaces.
    ///
    /// # Errors
    /// Returns `GameError` if the secret is blank or contains anything other
    /// than letters and spaces.
    ///
    /// # Examples
    /// ```
    /// use airline_hangman::core::{Game, GuessOutcome};
    ///
    /// let mut game = Game::new("Air  India", 6).unwrap();
    /// assert_eq!(game.secret(), "air india");
    /// assert_eq!(game.apply_guess('i'), GuessOutcome::Correct);
    /// assert_eq!(game.apply_guess('z'), GuessOutcome::Incorrect);
    /// assert_eq!(game.lives_remaining(), 5);
    /// ```
    pub fn new(secret: &str, lives: usize) -> Result<Self, GameError> {
        let secret = secret
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();

        if secret.is_empty() {
            return Err(GameError::EmptySecret);
        }
        if let Some(ch) = secret.chars().find(|&c| c != ' ' && !c.is_alphabetic()) {
            return Err(GameError::InvalidCharacter(ch));
        }

        Ok(Self {
            secret,
            guessed: GuessedLetters::new(),
            history: Vec::new(),
            incorrect: Vec::new(),
            lives_remaining: lives,
        })
    }

    /// Apply a guess and update lives
    pub fn apply_guess(&mut self, letter: char) -> GuessOutcome {
        let letter = letter.to_lowercase().next().unwrap_or(letter);
        if !self.guessed.insert(letter) {
            return GuessOutcome::Repeated;
        }
        self.history.push(letter);

        if self.secret.contains(letter) {
            GuessOutcome::Correct
        } else {
            self.incorrect.push(letter);
            self.lives_remaining = self.lives_remaining.saturating_sub(1);
            GuessOutcome::Incorrect
        }
    }

    /// Masked view of the secret
    #[must_use]
    pub fn state(&self) -> WordState {
        WordState::from_secret(&self.secret, &self.guessed)
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.secret
            .chars()
            .filter(|&c| c != ' ')
            .all(|c| self.guessed.contains(c))
    }

    #[must_use]
    pub fn is_lost(&self) -> bool {
        self.lives_remaining == 0 && !self.is_won()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.is_won() || self.lives_remaining == 0
    }

    #[inline]
    #[must_use]
    pub fn secret(&self) -> &str {
        &self.secret
    }

    #[inline]
    #[must_use]
    pub const fn guessed(&self) -> &GuessedLetters {
        &self.guessed
    }

    /// Distinct guesses in the order they were made
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[char] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub fn incorrect(&self) -> &[char] {
        &self.incorrect
    }

    #[inline]
    #[must_use]
    pub const fn lives_remaining(&self) -> usize {
        self.lives_remaining
    }
}
