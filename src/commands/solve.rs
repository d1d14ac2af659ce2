//! Phrase solving command
//!
//! Plays one full hangman game against a known secret and records every step.

use crate::core::{DEFAULT_LIVES, Game, GameError, GuessOutcome, WordState};
use crate::solver::{GuessEngine, Tier};
use tracing::warn;

/// Configuration for solving a phrase
pub struct SolveConfig {
    pub secret: String,
    pub max_lives: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(secret: String) -> Self {
        Self {
            secret,
            max_lives: DEFAULT_LIVES,
        }
    }
}

/// Result of solving a phrase
pub struct SolveResult {
    pub success: bool,
    pub steps: Vec<GuessStep>,
    pub secret: String,
    pub incorrect: Vec<char>,
    pub lives_remaining: usize,
    pub max_lives: usize,
    /// The engine proposed a letter it had already tried
    pub stalled: bool,
}

/// A single guess in the game
pub struct GuessStep {
    pub letter: char,
    pub state_before: WordState,
    pub tier: Tier,
    pub candidates: usize,
    pub outcome: GuessOutcome,
    pub lives_after: usize,
}

/// Play a game for `config.secret` with the engine choosing every letter
///
/// A repeated guess ends the game as a failure: the engine is deterministic,
/// so asking again would produce the same letter forever.
///
/// # Errors
///
/// Returns `GameError` if the secret is empty or contains characters other
/// than letters and spaces.
pub fn solve_phrase(config: SolveConfig, engine: &GuessEngine) -> Result<SolveResult, GameError> {
    let mut game = Game::new(&config.secret, config.max_lives)?;
    let mut steps = Vec::new();
    let mut stalled = false;

    while !game.is_over() {
        let state_before = game.state();
        let guess = engine.guess_detailed(&state_before, game.guessed());
        let outcome = game.apply_guess(guess.letter);

        steps.push(GuessStep {
            letter: guess.letter,
            state_before,
            tier: guess.tier,
            candidates: guess.candidates,
            outcome,
            lives_after: game.lives_remaining(),
        });

        if outcome == GuessOutcome::Repeated {
            warn!(secret = game.secret(), letter = %guess.letter, "engine repeated a guess");
            stalled = true;
            break;
        }
    }

    Ok(SolveResult {
        success: game.is_won(),
        steps,
        secret: game.secret().to_string(),
        incorrect: game.incorrect().to_vec(),
        lives_remaining: game.lives_remaining(),
        max_lives: config.max_lives,
        stalled,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{AIRLINES, Corpus, GENERAL};

    fn small_engine() -> GuessEngine {
        GuessEngine::new(
            Corpus::from_slice(&["indigo", "airbus", "air india"]),
            Corpus::from_slice(&["cat", "dog"]),
        )
    }

    #[test]
    fn solves_domain_phrase() {
        let result = solve_phrase(SolveConfig::new("indigo".to_string()), &small_engine()).unwrap();

        assert!(result.success);
        assert!(!result.stalled);
        assert!(result.incorrect.is_empty());
        assert_eq!(result.steps[0].letter, 'i');
        assert_eq!(result.steps[0].tier, Tier::Domain);
    }

    #[test]
    fn solves_multi_word_phrase() {
        let result =
            solve_phrase(SolveConfig::new("Air India".to_string()), &small_engine()).unwrap();

        assert!(result.success);
        assert_eq!(result.secret, "air india");
        assert!(result.steps.iter().all(|s| s.tier == Tier::Domain));
    }

    #[test]
    fn records_state_before_each_guess() {
        let result = solve_phrase(SolveConfig::new("indigo".to_string()), &small_engine()).unwrap();

        assert_eq!(result.steps[0].state_before.to_wire(), "_ _ _ _ _ _");
        assert_eq!(result.steps[1].state_before.to_wire(), "i _ _ i _ _");
    }

    #[test]
    fn unknown_phrase_uses_fallback_and_can_fail() {
        let mut config = SolveConfig::new("quiz".to_string());
        config.max_lives = 3;
        let result = solve_phrase(config, &small_engine()).unwrap();

        assert!(!result.success);
        assert_eq!(result.lives_remaining, 0);
        assert_eq!(result.incorrect.len(), 3);
        assert!(result.steps.iter().all(|s| s.tier == Tier::Fallback));
        assert_eq!(result.incorrect, vec!['e', 'a', 'r']);
    }

    #[test]
    fn lives_never_increase() {
        let result = solve_phrase(SolveConfig::new("cat".to_string()), &small_engine()).unwrap();

        let mut lives = DEFAULT_LIVES;
        for step in &result.steps {
            assert!(step.lives_after <= lives);
            lives = step.lives_after;
        }
        assert!(result.success);
    }

    #[test]
    fn invalid_secret_returns_error() {
        assert!(solve_phrase(SolveConfig::new("a320".to_string()), &small_engine()).is_err());
        assert!(solve_phrase(SolveConfig::new(String::new()), &small_engine()).is_err());
    }

    #[test]
    fn embedded_corpora_solve_known_phrases() {
        let engine = GuessEngine::new(Corpus::from_slice(AIRLINES), Corpus::from_slice(GENERAL));

        for phrase in ["boarding pass", "airbus", "cockpit"] {
            let result = solve_phrase(SolveConfig::new(phrase.to_string()), &engine).unwrap();
            assert!(result.success, "failed to solve '{phrase}'");
        }
    }
}
