//! Benchmark command
//!
//! Plays a random sample of phrases and measures guessing performance.

use super::solve::{SolveConfig, solve_phrase};
use crate::solver::GuessEngine;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_phrases: usize,
    pub solved: usize,
    pub total_guesses: usize,
    pub total_incorrect: usize,
    pub average_guesses: f64,
    pub average_incorrect: f64,
    pub min_incorrect: usize,
    pub max_incorrect: usize,
    /// Number of incorrect guesses → number of games
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub phrases_per_second: f64,
}

impl BenchmarkResult {
    #[must_use]
    pub fn success_rate(&self) -> f64 {
        if self.total_phrases == 0 {
            0.0
        } else {
            self.solved as f64 / self.total_phrases as f64 * 100.0
        }
    }
}

/// Pick up to `count` distinct phrases at random
///
/// A fixed `seed` makes the sample reproducible.
#[must_use]
pub fn sample_phrases(phrases: &[String], count: usize, seed: Option<u64>) -> Vec<String> {
    let sample = match seed {
        Some(seed) => phrases
            .choose_multiple(&mut StdRng::seed_from_u64(seed), count)
            .cloned()
            .collect(),
        None => phrases
            .choose_multiple(&mut rand::rng(), count)
            .cloned()
            .collect(),
    };
    debug!(requested = count, available = phrases.len(), ?seed, "sampled phrases");
    sample
}

/// Play every phrase in order and aggregate the results
///
/// Phrases that cannot be played are skipped with a warning.
#[must_use]
pub fn run_benchmark(engine: &GuessEngine, phrases: &[String], max_lives: usize) -> BenchmarkResult {
    let start = Instant::now();
    let mut total_phrases = 0;
    let mut solved = 0;
    let mut total_guesses = 0;
    let mut total_incorrect = 0;
    let mut min_incorrect = usize::MAX;
    let mut max_incorrect = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    for phrase in phrases {
        let config = SolveConfig {
            secret: phrase.clone(),
            max_lives,
        };
        let result = match solve_phrase(config, engine) {
            Ok(result) => result,
            Err(err) => {
                warn!(phrase = %phrase, %err, "skipping unplayable phrase");
                continue;
            }
        };

        let incorrect = result.incorrect.len();
        total_phrases += 1;
        if result.success {
            solved += 1;
        }
        total_guesses += result.steps.len();
        total_incorrect += incorrect;
        min_incorrect = min_incorrect.min(incorrect);
        max_incorrect = max_incorrect.max(incorrect);
        *distribution.entry(incorrect).or_insert(0) += 1;
    }

    let duration = start.elapsed();
    let (average_guesses, average_incorrect) = if total_phrases > 0 {
        (
            total_guesses as f64 / total_phrases as f64,
            total_incorrect as f64 / total_phrases as f64,
        )
    } else {
        (0.0, 0.0)
    };

    BenchmarkResult {
        total_phrases,
        solved,
        total_guesses,
        total_incorrect,
        average_guesses,
        average_incorrect,
        min_incorrect: if total_phrases > 0 { min_incorrect } else { 0 },
        max_incorrect,
        distribution,
        duration,
        phrases_per_second: total_phrases as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
