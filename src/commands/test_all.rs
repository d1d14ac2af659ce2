//! Test all phrases - comprehensive simulator run
//!
//! Plays a full game for every phrase in a test list and generates statistics.

use super::solve::{SolveConfig, solve_phrase};
use crate::solver::{GuessEngine, Tier};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::warn;

/// Result from playing a single phrase
#[derive(Debug, Clone)]
pub struct PhraseTestResult {
    pub phrase: String,
    pub guesses: Vec<char>,
    pub incorrect: Vec<char>,
    pub tiers: Vec<Tier>,
    pub success: bool,
    pub duration: Duration,
}

/// Statistics from playing every phrase
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_phrases: usize,
    pub solved: usize,
    pub failed: usize,
    /// Number of incorrect guesses → number of won games
    pub incorrect_distribution: HashMap<usize, usize>,
    pub tier_usage: HashMap<Tier, usize>,
    pub total_time: Duration,
    pub average_incorrect_on_wins: f64,
    pub failed_phrases: Vec<(String, Vec<char>)>,
    pub skipped: Vec<(String, String)>,
}

impl TestAllStatistics {
    #[must_use]
    pub fn success_rate(&self) -> f64 {
        if self.total_phrases == 0 {
            0.0
        } else {
            self.solved as f64 / self.total_phrases as f64 * 100.0
        }
    }
}

/// Play every phrase (or the first `limit`) in parallel
///
/// Phrases that cannot be played, such as ones containing digits, are skipped
/// and reported separately.
#[must_use]
pub fn run_test_all(
    engine: &GuessEngine,
    phrases: &[String],
    limit: Option<usize>,
    max_lives: usize,
) -> TestAllStatistics {
    let test_phrases = &phrases[..limit.unwrap_or(phrases.len()).min(phrases.len())];

    println!("🎯 Testing {} phrases...", test_phrases.len());

    let pb = ProgressBar::new(test_phrases.len() as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░"),
    );

    let total_start = Instant::now();

    let outcomes: Vec<Result<PhraseTestResult, (String, String)>> = test_phrases
        .par_iter()
        .map(|phrase| {
            let start = Instant::now();
            let config = SolveConfig {
                secret: phrase.clone(),
                max_lives,
            };
            let outcome = solve_phrase(config, engine)
                .map(|result| PhraseTestResult {
                    phrase: phrase.clone(),
                    guesses: result.steps.iter().map(|s| s.letter).collect(),
                    incorrect: result.incorrect,
                    tiers: result.steps.iter().map(|s| s.tier).collect(),
                    success: result.success,
                    duration: start.elapsed(),
                })
                .map_err(|err| {
                    warn!(phrase = %phrase, %err, "skipping unplayable phrase");
                    (phrase.clone(), err.to_string())
                });
            pb.inc(1);
            outcome
        })
        .collect();

    pb.finish_with_message("Complete!");

    let total_time = total_start.elapsed();

    let mut results = Vec::new();
    let mut skipped = Vec::new();
    for outcome in outcomes {
        match outcome {
            Ok(result) => results.push(result),
            Err(entry) => skipped.push(entry),
        }
    }

    summarize(&results, skipped, total_time)
}

fn summarize(
    results: &[PhraseTestResult],
    skipped: Vec<(String, String)>,
    total_time: Duration,
) -> TestAllStatistics {
    let mut incorrect_distribution: HashMap<usize, usize> = HashMap::new();
    let mut tier_usage: HashMap<Tier, usize> = HashMap::new();

    for result in results {
        if result.success {
            *incorrect_distribution
                .entry(result.incorrect.len())
                .or_insert(0) += 1;
        }
        for &tier in &result.tiers {
            *tier_usage.entry(tier).or_insert(0) += 1;
        }
    }

    let solved = results.iter().filter(|r| r.success).count();
    let total_incorrect_on_wins: usize = results
        .iter()
        .filter(|r| r.success)
        .map(|r| r.incorrect.len())
        .sum();
    let average_incorrect_on_wins = if solved > 0 {
        total_incorrect_on_wins as f64 / solved as f64
    } else {
        0.0
    };

    let failed_phrases = results
        .iter()
        .filter(|r| !r.success)
        .map(|r| (r.phrase.clone(), r.incorrect.clone()))
        .collect();

    TestAllStatistics {
        total_phrases: results.len(),
        solved,
        failed: results.len() - solved,
        incorrect_distribution,
        tier_usage,
        total_time,
        average_incorrect_on_wins,
        failed_phrases,
        skipped,
    }
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Harness Summary ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total phrases tested: {}", stats.total_phrases);
    println!(
        "  Guessed correctly:    {} {}",
        stats.solved,
        format!("({:.2}%)", stats.success_rate()).green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed:               {} {}",
            stats.failed,
            format!("({:.2}%)", 100.0 - stats.success_rate()).red()
        );
    }
    println!(
        "  Avg incorrect / win:  {}",
        format!("{:.2}", stats.average_incorrect_on_wins)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Total time:           {:.2}s",
        stats.total_time.as_secs_f64()
    );

    if stats.solved > 0 {
        println!("\n📈 {}", "Incorrect Guesses on Wins".bright_cyan().bold());
        let max_count = *stats.incorrect_distribution.values().max().unwrap_or(&1);
        let max_misses = stats.incorrect_distribution.keys().max().copied().unwrap_or(0);
        for misses in 0..=max_misses {
            let count = stats.incorrect_distribution.get(&misses).unwrap_or(&0);
            let percentage = *count as f64 / stats.solved as f64 * 100.0;
            let bar_len = (*count * 40 / max_count).max(usize::from(*count > 0));
            let bar = format!(
                "{}{}",
                "█".repeat(bar_len).green(),
                "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
            );
            println!("  {misses} misses: {bar} {count:4} ({percentage:5.1}%)");
        }
    }

    println!("\n🧭 {}", "Tier Usage".bright_cyan().bold());
    let total_guesses: usize = stats.tier_usage.values().sum();
    for tier in Tier::CASCADE {
        let count = stats.tier_usage.get(&tier).copied().unwrap_or(0);
        let percentage = if total_guesses > 0 {
            count as f64 / total_guesses as f64 * 100.0
        } else {
            0.0
        };
        println!("  {:<9} {count:5} guesses ({percentage:5.1}%)", tier.name());
    }

    if !stats.failed_phrases.is_empty() {
        println!("\n😰 {}", "Failed Phrases".yellow().bold());
        for (phrase, incorrect) in &stats.failed_phrases {
            let guesses: Vec<String> = incorrect.iter().map(char::to_string).collect();
            println!(
                "  '{}' | incorrect guesses: {}",
                phrase.yellow(),
                if guesses.is_empty() {
                    "None".to_string()
                } else {
                    guesses.join(", ")
                }
            );
        }
    }

    if !stats.skipped.is_empty() {
        println!("\n⚠️  {}", "Skipped Phrases".red().bold());
        for (phrase, reason) in &stats.skipped {
            println!("  '{phrase}': {reason}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DEFAULT_LIVES;
    use crate::corpus::Corpus;

    fn engine() -> GuessEngine {
        GuessEngine::new(
            Corpus::from_slice(&["indigo", "airbus", "air india"]),
            Corpus::from_slice(&["cat", "dog"]),
        )
    }

    fn phrases(list: &[&str]) -> Vec<String> {
        list.iter().map(|&s| s.to_string()).collect()
    }

    #[test]
    fn counts_solved_and_failed() {
        let stats = run_test_all(
            &engine(),
            &phrases(&["indigo", "air india", "quiz"]),
            None,
            3,
        );

        assert_eq!(stats.total_phrases, 3);
        assert_eq!(stats.solved, 2);
        assert_eq!(stats.failed, 1);
        assert_eq!(stats.failed_phrases, vec![("quiz".to_string(), vec!['e', 'a', 'r'])]);
        assert!((stats.average_incorrect_on_wins - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn limit_restricts_phrases() {
        let stats = run_test_all(
            &engine(),
            &phrases(&["indigo", "airbus", "cat"]),
            Some(2),
            DEFAULT_LIVES,
        );
        assert_eq!(stats.total_phrases, 2);

        let stats = run_test_all(&engine(), &phrases(&["indigo"]), Some(10), DEFAULT_LIVES);
        assert_eq!(stats.total_phrases, 1);
    }

    #[test]
    fn unplayable_phrases_are_skipped() {
        let stats = run_test_all(
            &engine(),
            &phrases(&["indigo", "a320"]),
            None,
            DEFAULT_LIVES,
        );

        assert_eq!(stats.total_phrases, 1);
        assert_eq!(stats.skipped.len(), 1);
        assert_eq!(stats.skipped[0].0, "a320");
    }

    #[test]
    fn distribution_sums_to_solved() {
        let stats = run_test_all(
            &engine(),
            &phrases(&["indigo", "airbus", "cat", "dog"]),
            None,
            DEFAULT_LIVES,
        );

        let distribution_sum: usize = stats.incorrect_distribution.values().sum();
        assert_eq!(distribution_sum, stats.solved);
    }

    #[test]
    fn tier_usage_covers_every_guess() {
        let stats = run_test_all(&engine(), &phrases(&["cat", "indigo"]), None, DEFAULT_LIVES);

        assert!(stats.tier_usage.get(&Tier::Domain).copied().unwrap_or(0) > 0);
        assert!(stats.tier_usage.get(&Tier::General).copied().unwrap_or(0) > 0);
    }

    #[test]
    fn empty_list() {
        let stats = run_test_all(&engine(), &[], None, DEFAULT_LIVES);
        assert_eq!(stats.total_phrases, 0);
        assert!(stats.success_rate().abs() < f64::EPSILON);
    }
}
