//! Simple interactive CLI mode
//!
//! Text-based hangman assistant without TUI

use super::assist::{AssistSession, Feedback, parse_feedback, parse_shape};
use crate::core::{DEFAULT_LIVES, GuessOutcome};
use crate::output::formatters::{format_letters, lives_bar, spaced_state};
use crate::solver::GuessEngine;
use colored::Colorize;
use std::io::{self, Write};

enum Flow {
    NewGame,
    Quit,
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(engine: &GuessEngine) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║            Airline Hangman - Interactive Assistant           ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("I'll suggest letters using airline vocabulary first, then common words.");
    println!("Start each game by entering the phrase shape:\n");
    println!("  - Word lengths, e.g. '3 5' for a 3-letter word and a 5-letter word");
    println!("  - Or the board as shown, e.g. '_ _ _   _ _ _ _ _'\n");
    println!("After each suggestion, enter the positions where the letter appears");
    println!("(1-based, e.g. '1 4'), or '-' if it is not in the phrase.\n");
    println!("Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last answer\n");

    loop {
        let Some(mut session) = read_shape()? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match play(engine, &mut session)? {
            Flow::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Flow::NewGame => println!("\n🔄 New game started!\n"),
        }
    }
}

fn read_shape() -> Result<Option<AssistSession>, String> {
    loop {
        let input = get_user_input("Phrase shape")?;
        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => return Ok(None),
            _ => match parse_shape(&input) {
                Ok(state) => return Ok(Some(AssistSession::new(state, DEFAULT_LIVES))),
                Err(err) => println!("❌ {err}\n"),
            },
        }
    }
}

fn play(engine: &GuessEngine, session: &mut AssistSession) -> Result<Flow, String> {
    loop {
        if session.is_solved() {
            print_solved(session);
            return ask_play_again();
        }
        if session.is_lost() {
            println!("\n{}", "💀 Out of lives! The phrase beat us this time.".red().bold());
            println!("   Board: {}\n", spaced_state(session.state()));
            return ask_play_again();
        }

        let guess = session.suggest(engine);
        let turn = session.turns().len() + 1;

        println!("────────────────────────────────────────────────────────────");
        println!(
            "Turn {turn}: {}   lives {}",
            spaced_state(session.state()).bright_white().bold(),
            lives_bar(session.lives_remaining(), session.max_lives())
        );
        println!("────────────────────────────────────────────────────────────");
        println!("   Guessed: {}", format_letters(&session.guessed().sorted()));
        println!(
            "\n📊 Suggested letter: {}",
            guess.letter.to_uppercase().to_string().bright_green().bold()
        );
        if guess.candidates > 0 {
            println!(
                "   Source: {} corpus, {} matching {}\n",
                guess.tier,
                guess.candidates,
                if guess.candidates == 1 { "phrase" } else { "phrases" }
            );
        } else {
            println!("   Source: {} letter order\n", guess.tier);
        }

        let letter_count = session.state().letter_count();
        loop {
            let input = get_user_input("Positions (e.g. '1 4', '-' for miss, or command)")?;

            match input.to_lowercase().as_str() {
                "quit" | "q" | "exit" => return Ok(Flow::Quit),
                "new" | "n" => return Ok(Flow::NewGame),
                "undo" | "u" => {
                    if let Some(letter) = session.undo() {
                        println!("✓ Undone '{letter}'!\n");
                    } else {
                        println!("Nothing to undo!\n");
                    }
                    break;
                }
                _ => {}
            }

            let feedback = match parse_feedback(&input, letter_count) {
                Ok(feedback) => feedback,
                Err(err) => {
                    println!("❌ {err}. Use positions 1-{letter_count} or '-'\n");
                    continue;
                }
            };

            match session.apply(guess, feedback) {
                Ok(GuessOutcome::Correct) => println!("✓ Nice, '{}' is in!\n", guess.letter),
                Ok(GuessOutcome::Incorrect) => println!("✗ No '{}'.\n", guess.letter),
                Ok(GuessOutcome::Repeated) => println!("'{}' was already guessed.\n", guess.letter),
                Err(err) => {
                    println!("❌ {err}\n");
                    continue;
                }
            }
            break;
        }
    }
}

fn print_solved(session: &AssistSession) {
    let misses = session.incorrect().len();

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!(
        "{}",
        "    🎉 ✈️  P H R A S E   S O L V E D !  ✈️ 🎉    "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(70).bright_cyan());

    let performance = match misses {
        0 => ("🏆 Flawless!", "Not a single wrong letter!"),
        1 => ("⭐ Excellent!", "Only one miss!"),
        2 | 3 => ("✨ Good!", "Nice work!"),
        _ => ("😅 Phew!", "Made it with lives to spare!"),
    };

    println!("\n  {}", performance.0.bright_yellow().bold());
    println!("  {}", performance.1.bright_white());
    println!(
        "\n  Solved in {} {} with {} {}",
        session.turns().len().to_string().bright_cyan().bold(),
        if session.turns().len() == 1 { "guess" } else { "guesses" },
        misses.to_string().bright_cyan().bold(),
        if misses == 1 { "miss" } else { "misses" }
    );

    println!("\n  Guess history:");
    for (i, turn) in session.turns().iter().enumerate() {
        let mark = match &turn.feedback {
            Feedback::Hit(_) => "✓".green(),
            Feedback::Miss => "✗".red(),
        };
        println!(
            "    {}. {} {mark} ({})",
            (i + 1).to_string().bright_black(),
            turn.guess.letter.to_uppercase().to_string().bright_white().bold(),
            turn.guess.tier
        );
    }

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!();
}

fn ask_play_again() -> Result<Flow, String> {
    match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
        "yes" | "y" => Ok(Flow::NewGame),
        _ => Ok(Flow::Quit),
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
