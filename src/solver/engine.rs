//! Main guess engine interface

use super::fallback::fallback_guess;
use super::matcher::filter_candidates;
use super::scorer::best_letter;
use crate::core::{GuessedLetters, WordState};
use crate::corpus::{AIRLINES, Corpus, CorpusSource, GENERAL};
use std::fmt;
use std::path::Path;
use tracing::{debug, info};

/// Knowledge source consulted by the engine, in cascade order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// Airline-specific corpus
    Domain,
    /// Broad-coverage corpus
    General,
    /// Static letter-frequency order
    Fallback,
}

impl Tier {
    /// All tiers in the order they are tried
    pub const CASCADE: [Self; 3] = [Self::Domain, Self::General, Self::Fallback];

    /// Tier tried after this one fails; the fallback never fails
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Domain => Self::General,
            Self::General | Self::Fallback => Self::Fallback,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Domain => "domain",
            Self::General => "general",
            Self::Fallback => "fallback",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A chosen letter together with where it came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guess {
    pub letter: char,
    pub tier: Tier,
    /// Size of the candidate set in the deciding tier (0 for the fallback)
    pub candidates: usize,
}

/// Where the engine's two corpora come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub domain: CorpusSource,
    pub general: CorpusSource,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            domain: CorpusSource::Embedded,
            general: CorpusSource::Embedded,
        }
    }
}

impl EngineConfig {
    /// Interpret command-line values, each `embedded` or a path
    #[must_use]
    pub fn from_args(domain: &str, general: &str) -> Self {
        Self {
            domain: CorpusSource::from_arg(domain),
            general: CorpusSource::from_arg(general),
        }
    }

    /// Load both corpora and build the engine
    ///
    /// File sources that are missing or unreadable leave their tier empty.
    #[must_use]
    pub fn build(&self) -> GuessEngine {
        GuessEngine::new(self.domain.load(AIRLINES), self.general.load(GENERAL))
    }
}

/// Tiered hangman guesser
///
/// Holds the two corpora for its whole lifetime and nothing else, so a single
/// instance can serve any number of concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct GuessEngine {
    domain: Corpus,
    general: Corpus,
}

impl GuessEngine {
    /// Create an engine from already loaded corpora
    #[must_use]
    pub fn new(domain: Corpus, general: Corpus) -> Self {
        info!(
            domain = domain.len(),
            general = general.len(),
            "guess engine ready"
        );
        Self { domain, general }
    }

    /// Load both corpora from files
    ///
    /// Missing or unreadable files leave the matching tier empty.
    #[must_use]
    pub fn from_paths(domain: impl AsRef<Path>, general: impl AsRef<Path>) -> Self {
        use crate::corpus::loader::load_or_empty;

        Self::new(load_or_empty(domain), load_or_empty(general))
    }

    /// Best next letter for the given state
    ///
    /// # Examples
    /// ```
    /// use airline_hangman::core::{GuessedLetters, WordState};
    /// use airline_hangman::corpus::Corpus;
    /// use airline_hangman::solver::GuessEngine;
    ///
    /// let engine = GuessEngine::new(
    ///     Corpus::from_slice(&["indigo", "airbus"]),
    ///     Corpus::empty(),
    /// );
    /// let state = WordState::blank(&[6]);
    /// assert_eq!(engine.guess(&state, &GuessedLetters::new()), 'i');
    /// ```
    #[must_use]
    pub fn guess(&self, state: &WordState, guessed: &GuessedLetters) -> char {
        self.guess_detailed(state, guessed).letter
    }

    /// Best next letter along with the deciding tier
    #[must_use]
    pub fn guess_detailed(&self, state: &WordState, guessed: &GuessedLetters) -> Guess {
        let mut tier = Tier::Domain;

        loop {
            let Some(corpus) = self.corpus(tier) else {
                let letter = fallback_guess(guessed);
                debug!(%letter, "using fallback order");
                return Guess {
                    letter,
                    tier,
                    candidates: 0,
                };
            };

            let candidates = filter_candidates(state, corpus);
            if let Some(letter) = best_letter(&candidates, guessed) {
                debug!(%tier, %letter, candidates = candidates.len(), "tier produced a guess");
                return Guess {
                    letter,
                    tier,
                    candidates: candidates.len(),
                };
            }

            debug!(%tier, candidates = candidates.len(), "tier exhausted, cascading");
            tier = tier.next();
        }
    }

    /// Best next letter for a wire-encoded state
    ///
    /// Malformed wire states match no corpus and fall through to the fallback.
    #[must_use]
    pub fn guess_wire(&self, wire: &str, guessed: &GuessedLetters) -> char {
        self.guess(&WordState::parse_lenient(wire), guessed)
    }

    /// Candidate phrases for `state` in a corpus tier (empty for the fallback)
    #[must_use]
    pub fn candidates(&self, tier: Tier, state: &WordState) -> Vec<&str> {
        self.corpus(tier)
            .map(|corpus| filter_candidates(state, corpus))
            .unwrap_or_default()
    }

    const fn corpus(&self, tier: Tier) -> Option<&Corpus> {
        match tier {
            Tier::Domain => Some(&self.domain),
            Tier::General => Some(&self.general),
            Tier::Fallback => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn domain(&self) -> &Corpus {
        &self.domain
    }

    #[inline]
    #[must_use]
    pub const fn general(&self) -> &Corpus {
        &self.general
    }
}
