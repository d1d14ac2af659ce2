use airline_hangman::commands::{SolveConfig, guess_from_json, solve_phrase};
use airline_hangman::core::{GuessedLetters, WordState};
use airline_hangman::corpus::{AIRLINES, Corpus, GENERAL};
use airline_hangman::solver::fallback::{FALLBACK_ORDER, LAST_RESORT, fallback_guess};
use airline_hangman::solver::matcher::{filter_candidates, matches};
use airline_hangman::solver::scorer::best_letter;
use airline_hangman::solver::{GuessEngine, Tier};
use std::io::Write;
use tempfile::NamedTempFile;

fn engine(domain: &[&str], general: &[&str]) -> GuessEngine {
    GuessEngine::new(Corpus::from_slice(domain), Corpus::from_slice(general))
}

fn embedded() -> GuessEngine {
    engine(AIRLINES, GENERAL)
}

fn guessed(letters: &str) -> GuessedLetters {
    letters.chars().collect()
}

fn state(wire: &str) -> WordState {
    WordState::parse(wire).unwrap()
}

#[test]
fn scenario_blank_six_letters_prefers_domain() {
    let engine = engine(&["indigo", "airbus"], &[]);
    assert_eq!(engine.guess(&WordState::blank(&[6]), &guessed("")), 'i');
}

#[test]
fn scenario_partially_revealed_word() {
    let engine = engine(&["indigo", "airbus"], &[]);
    assert_eq!(engine.guess(&state("i _ _ i g _"), &guessed("ig")), 'n');
}

#[test]
fn scenario_general_tier_answers_when_domain_misses() {
    let engine = engine(&["indigo", "airbus"], &["cat", "dog"]);
    let guess = engine.guess_detailed(&WordState::blank(&[3]), &guessed(""));

    assert_eq!(guess.letter, 'c');
    assert_eq!(guess.tier, Tier::General);

    let empty_domain = engine_with_empty_domain(&["cat", "dog"]);
    assert_eq!(empty_domain.guess(&WordState::blank(&[3]), &guessed("")), 'c');
}

fn engine_with_empty_domain(general: &[&str]) -> GuessEngine {
    GuessEngine::new(Corpus::empty(), Corpus::from_slice(general))
}

#[test]
fn scenario_empty_corpora_use_fallback() {
    let engine = GuessEngine::default();
    let guess = engine.guess_detailed(&WordState::blank(&[5]), &guessed(""));

    assert_eq!(guess.letter, 'e');
    assert_eq!(guess.tier, Tier::Fallback);
}

#[test]
fn scenario_multi_word_shape() {
    let engine = engine(&["air india", "indigo", "air asia", "airbus"], &[]);
    let shape = WordState::blank(&[3, 5]);

    assert_eq!(engine.candidates(Tier::Domain, &shape), vec!["air india"]);
    assert!(matches(&shape, "air india"));
    assert!(!matches(&shape, "air asia"));
    assert!(!matches(&shape, "airindia"));
    assert!(!matches(&shape, "air india express"));

    let wire = engine.guess_wire("_ _ _   _ _ _ _ _", &guessed(""));
    assert_eq!(wire, 'i');
}

#[test]
fn fallback_exhaustion_returns_last_resort() {
    let all: GuessedLetters = FALLBACK_ORDER.iter().copied().collect();
    assert_eq!(all.len(), 26);
    assert_eq!(fallback_guess(&all), LAST_RESORT);

    let engine = embedded();
    assert_eq!(engine.guess(&WordState::blank(&[4]), &all), 'z');
}

#[test]
fn cascade_matches_tier_by_tier_evaluation() {
    let engine = embedded();
    let domain = Corpus::from_slice(AIRLINES);
    let general = Corpus::from_slice(GENERAL);

    let cases = [
        ("_ _ _ _ _ _", ""),
        ("_ _ _   _ _ _ _ _", "e"),
        ("c _ _ _ p _ t", "cpt"),
        ("_ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _", ""),
        ("w _ n d _ w", "wnd"),
        ("_ _ _", "aeiou"),
        ("_ _ _ _", "etaoinshrdlucmfwypvbgkjqxz"),
    ];

    for (wire, letters) in cases {
        let state = state(wire);
        let guessed = guessed(letters);

        let expected = best_letter(&filter_candidates(&state, &domain), &guessed)
            .or_else(|| best_letter(&filter_candidates(&state, &general), &guessed))
            .unwrap_or_else(|| fallback_guess(&guessed));

        assert_eq!(engine.guess(&state, &guessed), expected, "state '{wire}'");
    }
}

#[test]
fn candidates_are_exactly_the_matching_phrases() {
    let domain = Corpus::from_slice(AIRLINES);
    let shapes = ["_ _ _ _ _ _", "a _ _   _ _ _ _ _", "_ _ _ _ _ _ _   _ _ _ _", "f _ _ _ _ _"];

    for wire in shapes {
        let state = state(wire);
        let candidates = filter_candidates(&state, &domain);
        let brute: Vec<&str> = AIRLINES.iter().copied().filter(|p| matches(&state, p)).collect();

        assert_eq!(candidates, brute, "state '{wire}'");
        for phrase in candidates {
            assert_eq!(
                phrase.split(' ').map(|w| w.chars().count()).collect::<Vec<_>>(),
                state.slot_lengths()
            );
        }
    }
}

#[test]
fn engine_never_repeats_a_letter() {
    let engine = embedded();

    for &phrase in AIRLINES.iter().chain(GENERAL.iter().take(100)) {
        let result = solve_phrase(SolveConfig::new(phrase.to_string()), &engine).unwrap();
        assert!(!result.stalled, "repeated guess while playing '{phrase}'");

        let mut seen = GuessedLetters::new();
        for step in &result.steps {
            assert!(seen.insert(step.letter), "'{}' repeated for '{phrase}'", step.letter);
        }
    }
}

#[test]
fn repeated_calls_are_deterministic() {
    let first = embedded();
    let second = embedded();
    let state = state("_ _ _ _ _ _ _   _ _ _ _");
    let guessed = guessed("ea");

    let answer = first.guess_detailed(&state, &guessed);
    for _ in 0..5 {
        assert_eq!(first.guess_detailed(&state, &guessed), answer);
        assert_eq!(second.guess_detailed(&state, &guessed), answer);
    }
}

#[test]
fn shared_engine_serves_concurrent_callers() {
    let engine = embedded();
    let requests: Vec<(WordState, GuessedLetters)> = [
        ("_ _ _ _ _ _", ""),
        ("_ _ _   _ _ _ _ _", ""),
        ("b _ _ _ _ _ _ _   _ _ _ _", "b"),
        ("_ _ _ _", "e"),
        ("r _ n _ _ _", "rn"),
        ("_ _ _ _ _ _ _ _ _ _", "eaio"),
    ]
    .iter()
    .map(|(wire, letters)| (state(wire), guessed(letters)))
    .collect();

    let sequential: Vec<char> = requests
        .iter()
        .map(|(state, guessed)| engine.guess(state, guessed))
        .collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| {
                    requests
                        .iter()
                        .map(|(state, guessed)| engine.guess(state, guessed))
                        .collect::<Vec<char>>()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), sequential);
        }
    });
}

#[test]
fn json_request_round_trip() {
    let engine = engine(&["indigo", "airbus"], &[]);
    let payload = r#"{"currentWordState": "i _ _ i g _", "guessedLetters": ["i", "g"], "guessesRemaining": 4}"#;

    let response = guess_from_json(&engine, payload).unwrap();
    assert_eq!(response.to_json().unwrap(), r#"{"nextGuess":"n"}"#);

    let err = guess_from_json(&engine, r#"{"currentWordState": "_ _"}"#).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid request: Missing 'currentWordState' or 'guessedLetters'."
    );
}

#[test]
fn corpora_loaded_from_files() {
    let mut domain = NamedTempFile::new().unwrap();
    writeln!(domain, "indigo\n\nairbus\n").unwrap();
    let mut general = NamedTempFile::new().unwrap();
    writeln!(general, "cat\ndog").unwrap();

    let engine = GuessEngine::from_paths(domain.path(), general.path());
    assert_eq!(engine.domain().len(), 2);
    assert_eq!(engine.general().len(), 2);
    assert_eq!(engine.guess(&WordState::blank(&[6]), &guessed("")), 'i');
    assert_eq!(engine.guess(&WordState::blank(&[3]), &guessed("")), 'c');
}

#[test]
fn missing_corpus_file_disables_only_that_tier() {
    let mut general = NamedTempFile::new().unwrap();
    writeln!(general, "cat\ndog").unwrap();

    let engine = GuessEngine::from_paths("/no/such/airlines.txt", general.path());
    assert!(engine.domain().is_empty());

    let guess = engine.guess_detailed(&WordState::blank(&[3]), &guessed(""));
    assert_eq!(guess.tier, Tier::General);
    assert_eq!(guess.letter, 'c');
}
