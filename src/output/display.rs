//! Display functions for command results

use super::formatters::{
    create_progress_bar, format_letters, lives_bar, outcome_symbol, spaced_state,
};
use crate::commands::{BenchmarkResult, GuessReport, SolveResult};
use crate::core::GuessOutcome;
use colored::Colorize;

/// Print the result of solving a phrase
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.secret.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let turn = i + 1;
        let symbol = match step.outcome {
            GuessOutcome::Correct => outcome_symbol(step.outcome).green(),
            GuessOutcome::Incorrect => outcome_symbol(step.outcome).red(),
            GuessOutcome::Repeated => outcome_symbol(step.outcome).yellow(),
        };
        println!(
            "\nTurn {turn}: {} {symbol}  {}",
            step.letter.to_uppercase().to_string().bold(),
            spaced_state(&step.state_before)
        );

        if verbose {
            println!("  Source:     {}", step.tier);
            if step.candidates > 0 {
                println!("  Candidates: {}", step.candidates);
            }
            println!(
                "  Lives:      {}",
                lives_bar(step.lives_after, result.max_lives)
            );
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!(
                "✅ Solved in {} guesses with {} incorrect!",
                result.steps.len(),
                result.incorrect.len()
            )
            .green()
            .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed after {} guesses", result.steps.len())
                .red()
                .bold()
        );
        if result.stalled {
            println!("   The engine repeated a letter it had already tried.");
        }
    }
    println!("   Incorrect guesses: {}", format_letters(&result.incorrect));
}

/// Print a detailed guess decision
pub fn print_guess_report(report: &GuessReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "GUESS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    if report.well_formed {
        println!("\n   Board:      {}", spaced_state(&report.state).bright_white());
        println!("   Word sizes: {:?}", report.state.slot_lengths());
    } else {
        println!("\n   Board:      {}", "unreadable, no corpus can match".yellow());
    }
    println!("   Guessed:    {}", format_letters(&report.guessed));
    println!("   Source:     {}", report.guess.tier);
    if report.guess.candidates > 0 {
        println!("   Candidates: {}", report.guess.candidates);
    }
    println!(
        "\n📊 Next guess: {}",
        report.guess.letter.to_string().bright_green().bold()
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Phrases tested:    {}", result.total_phrases);
    println!(
        "   Solved:            [{}] {} ({:.1}%)",
        create_progress_bar(result.success_rate(), 100.0, 20).green(),
        result.solved,
        result.success_rate()
    );
    println!(
        "   Avg incorrect:     {}",
        format!("{:.2}", result.average_incorrect)
            .bright_yellow()
            .bold()
    );
    println!("   Avg guesses:       {:.2}", result.average_guesses);
    println!(
        "   Best case:         {}",
        format!("{}", result.min_incorrect).green()
    );
    println!(
        "   Worst case:        {}",
        format!("{}", result.max_incorrect).yellow()
    );
    println!("   Time taken:        {:.2}s", result.duration.as_secs_f64());
    println!("   Phrases/second:    {:.1}", result.phrases_per_second);

    if result.total_phrases == 0 {
        return;
    }

    println!("\n📈 {}", "Incorrect guesses:".bright_cyan().bold());
    for misses in 0..=result.max_incorrect {
        if let Some(&count) = result.distribution.get(&misses) {
            let pct = (count as f64 / result.total_phrases as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░"
                    .repeat(40_usize.saturating_sub(bar_width))
                    .bright_black()
            );
            println!("   {misses}: {bar} {count:4} ({pct:5.1}%)");
        }
    }
}
