//! Airline Hangman - CLI
//!
//! Hangman letter guesser with TUI and CLI modes, tuned for airline vocabulary.

use airline_hangman::{
    commands::{
        GuessRequest, SolveConfig, guess_from_json, guess_from_request, print_test_all_statistics,
        run_benchmark, run_simple, run_test_all, sample_phrases, solve_phrase,
    },
    core::DEFAULT_LIVES,
    corpus::loader::load_test_phrases,
    output::{print_benchmark_result, print_guess_report, print_solve_result},
    solver::{EngineConfig, GuessEngine},
};
use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_TEST_FILE: &str = "data/words_to_test.txt";

#[derive(Parser)]
#[command(
    name = "airline_hangman",
    about = "Hangman letter guesser using airline vocabulary, common words, then letter frequency",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Domain corpus: 'embedded' (default, airline phrases) or path to file
    #[arg(
        long,
        global = true,
        env = "HANGMAN_DOMAIN_CORPUS",
        default_value = "embedded"
    )]
    domain: String,

    /// General corpus: 'embedded' (default, common words) or path to file
    #[arg(
        long,
        global = true,
        env = "HANGMAN_GENERAL_CORPUS",
        default_value = "embedded"
    )]
    general: String,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI assistant (default)
    Play,

    /// Simple CLI assistant (no TUI)
    Simple,

    /// Suggest the next letter for a board
    Guess {
        /// Board such as '_ _ _   i _ _ _ _', or the JSON payload with --json (stdin if omitted)
        state: Option<String>,

        /// Letters already guessed, comma separated
        #[arg(short, long, value_delimiter = ',')]
        guessed: Vec<String>,

        /// Treat input as a JSON request and answer with JSON
        #[arg(long)]
        json: bool,

        /// Show the deciding tier and candidate count
        #[arg(long, conflicts_with = "json")]
        explain: bool,
    },

    /// Play a full game against a known phrase
    Solve {
        /// The secret phrase
        phrase: String,

        /// Number of incorrect guesses allowed
        #[arg(short, long, default_value_t = DEFAULT_LIVES)]
        lives: usize,

        /// Show tier and candidate count for every guess
        #[arg(long)]
        details: bool,
    },

    /// Benchmark on random phrases from a test list
    Benchmark {
        /// Number of random phrases to play
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Seed for a reproducible sample
        #[arg(long)]
        seed: Option<u64>,

        /// Test list, one phrase per line
        #[arg(short, long, default_value = DEFAULT_TEST_FILE)]
        file: String,

        /// Number of incorrect guesses allowed
        #[arg(long, default_value_t = DEFAULT_LIVES)]
        lives: usize,
    },

    /// Play every phrase in a test list
    TestAll {
        /// Test list, one phrase per line
        #[arg(short, long, default_value = DEFAULT_TEST_FILE)]
        file: String,

        /// Limit number of phrases to play
        #[arg(short, long)]
        limit: Option<usize>,

        /// Number of incorrect guesses allowed
        #[arg(long, default_value_t = DEFAULT_LIVES)]
        lives: usize,
    },
}

/// Install the stderr log subscriber
///
/// `RUST_LOG` wins over the -v/-q flags.
fn init_logging(verbose: u8, quiet: bool) -> Result<()> {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!(e))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet)?;

    let engine = EngineConfig::from_args(&cli.domain, &cli.general).build();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&engine),
        Commands::Simple => run_simple(&engine).map_err(|e| anyhow!(e)),
        Commands::Guess {
            state,
            guessed,
            json,
            explain,
        } => {
            if json {
                run_json_guess_command(&engine, state)
            } else {
                let state = state.context("a board state is required unless --json is given")?;
                run_guess_command(&engine, state, guessed, explain);
                Ok(())
            }
        }
        Commands::Solve {
            phrase,
            lives,
            details,
        } => run_solve_command(&engine, phrase, lives, details),
        Commands::Benchmark {
            count,
            seed,
            file,
            lives,
        } => run_benchmark_command(&engine, count, seed, &file, lives),
        Commands::TestAll { file, limit, lives } => {
            run_test_all_command(&engine, &file, limit, lives)
        }
    }
}

fn run_guess_command(engine: &GuessEngine, state: String, guessed: Vec<String>, explain: bool) {
    let request = GuessRequest::new(state, guessed);
    let report = guess_from_request(engine, &request);

    if explain {
        print_guess_report(&report);
    } else {
        println!("{}", report.guess.letter);
    }
}

fn run_json_guess_command(engine: &GuessEngine, payload: Option<String>) -> Result<()> {
    let payload = if let Some(payload) = payload {
        payload
    } else {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read request from stdin")?;
        buffer
    };
    debug!(bytes = payload.len(), "received guess request");

    let response = guess_from_json(engine, &payload)?;
    println!("{}", response.to_json()?);
    Ok(())
}

fn run_solve_command(
    engine: &GuessEngine,
    phrase: String,
    lives: usize,
    details: bool,
) -> Result<()> {
    let config = SolveConfig {
        secret: phrase,
        max_lives: lives,
    };
    let result = solve_phrase(config, engine)?;

    print_solve_result(&result, details);
    Ok(())
}

fn load_phrases(file: &str) -> Result<Vec<String>> {
    let phrases = load_test_phrases(Path::new(file))
        .with_context(|| format!("failed to read test list '{file}'"))?;
    if phrases.is_empty() {
        bail!("test list '{file}' contains no phrases");
    }
    info!(file, phrases = phrases.len(), "loaded test list");
    Ok(phrases)
}

fn run_benchmark_command(
    engine: &GuessEngine,
    count: usize,
    seed: Option<u64>,
    file: &str,
    lives: usize,
) -> Result<()> {
    let phrases = load_phrases(file)?;
    let sample = sample_phrases(&phrases, count, seed);

    match seed {
        Some(seed) => println!(
            "Running benchmark on {} random phrases (seed {seed})...",
            sample.len()
        ),
        None => println!("Running benchmark on {} random phrases...", sample.len()),
    }

    let result = run_benchmark(engine, &sample, lives);
    print_benchmark_result(&result);
    Ok(())
}

fn run_test_all_command(
    engine: &GuessEngine,
    file: &str,
    limit: Option<usize>,
    lives: usize,
) -> Result<()> {
    let phrases = load_phrases(file)?;

    println!("\n{}", "═".repeat(70));
    println!(" Comprehensive Airline Hangman Test ");
    println!("{}", "═".repeat(70));
    println!("\nTesting against {} phrases from {file}", phrases.len());
    println!(
        "Corpora: {} domain phrases, {} general phrases",
        engine.domain().len(),
        engine.general().len()
    );
    println!("Lives: {lives}");
    println!();

    let stats = run_test_all(engine, &phrases, limit, lives);
    print_test_all_statistics(&stats);
    Ok(())
}

fn run_play_command(engine: &GuessEngine) -> Result<()> {
    use airline_hangman::interactive::{App, run_tui};

    let app = App::new(engine);
    run_tui(app)
}
