//! Corpus loading utilities
//!
//! Line-based loading from files, with a degrading variant for engine startup.

use super::Corpus;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{error, info, warn};

/// Load phrases from a file
///
/// Every non-empty line, trimmed, becomes one phrase in file order. Duplicates
/// are kept.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use airline_hangman::corpus::loader::load_from_file;
///
/// let corpus = load_from_file("data/airlines_corpus.txt").unwrap();
/// println!("Loaded {} phrases", corpus.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Corpus> {
    let content = fs::read_to_string(path)?;
    Ok(parse_lines(&content, |_| false))
}

/// Load phrases from a file, degrading to an empty corpus
///
/// A missing or unreadable file is logged and yields an empty corpus, so the
/// tier it backs simply never produces candidates.
pub fn load_or_empty<P: AsRef<Path>>(path: P) -> Corpus {
    let path = path.as_ref();

    if !path.exists() {
        warn!(path = %path.display(), "corpus file not found, tier disabled");
        return Corpus::empty();
    }

    match load_from_file(path) {
        Ok(corpus) => {
            info!(path = %path.display(), phrases = corpus.len(), "loaded corpus");
            corpus
        }
        Err(err) => {
            error!(path = %path.display(), %err, "failed to read corpus, tier disabled");
            Corpus::empty()
        }
    }
}

/// Load a list of test phrases for the simulator
///
/// Blank lines and `#` comments are skipped; the result is deduplicated and
/// sorted so runs are reproducible.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn load_test_phrases<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    let mut phrases: Vec<String> = parse_lines(&content, |line| line.starts_with('#'))
        .iter()
        .map(str::to_string)
        .collect();

    phrases.sort();
    phrases.dedup();
    Ok(phrases)
}

fn parse_lines(content: &str, skip: impl Fn(&str) -> bool) -> Corpus {
    let phrases = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() || skip(trimmed) {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .collect();

    Corpus::new(phrases)
}
