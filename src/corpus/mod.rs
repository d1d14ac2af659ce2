//! Phrase corpora for the guess engine
//!
//! Provides the immutable `Corpus` type, file loading, and the airline and
//! general corpora embedded into the binary.

mod embedded;
pub mod loader;

pub use embedded::{AIRLINES, AIRLINES_COUNT, GENERAL, GENERAL_COUNT};

use std::path::PathBuf;

/// Ordered, immutable collection of phrases
///
/// Loaded once when the engine is built and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    phrases: Vec<String>,
}

impl Corpus {
    #[must_use]
    pub const fn new(phrases: Vec<String>) -> Self {
        Self { phrases }
    }

    #[must_use]
    pub const fn empty() -> Self {
        Self {
            phrases: Vec::new(),
        }
    }

    /// Build from a static slice, such as the embedded lists
    ///
    /// # Examples
    /// ```
    /// use airline_hangman::corpus::{AIRLINES, Corpus};
    ///
    /// let corpus = Corpus::from_slice(AIRLINES);
    /// assert_eq!(corpus.len(), AIRLINES.len());
    /// ```
    #[must_use]
    pub fn from_slice(slice: &[&str]) -> Self {
        Self {
            phrases: slice.iter().map(|&s| s.to_string()).collect(),
        }
    }

    #[inline]
    #[must_use]
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.phrases.iter().map(String::as_str)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}

/// Where a corpus comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorpusSource {
    /// The list compiled into the binary
    Embedded,
    /// A phrase file on disk
    File(PathBuf),
}

impl CorpusSource {
    /// Interpret a command-line value: `embedded` or a path
    #[must_use]
    pub fn from_arg(value: &str) -> Self {
        match value {
            "embedded" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        }
    }

    /// Load the corpus, using `embedded` for the built-in variant
    ///
    /// File sources degrade to an empty corpus when missing or unreadable.
    #[must_use]
    pub fn load(&self, embedded: &[&str]) -> Corpus {
        match self {
            Self::Embedded => Corpus::from_slice(embedded),
            Self::File(path) => loader::load_or_empty(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_normalized(phrase: &str) {
        assert!(
            phrase
                .chars()
                .all(|c| c.is_ascii_lowercase() || c == ' '),
            "Phrase '{phrase}' contains characters other than lowercase letters and spaces"
        );
        assert!(
            !phrase.starts_with(' ') && !phrase.ends_with(' ') && !phrase.contains("  "),
            "Phrase '{phrase}' has irregular spacing"
        );
    }

    #[test]
    fn airlines_count_matches_const() {
        assert_eq!(AIRLINES.len(), AIRLINES_COUNT);
    }

    #[test]
    fn general_count_matches_const() {
        assert_eq!(GENERAL.len(), GENERAL_COUNT);
    }

    #[test]
    fn embedded_phrases_are_normalized() {
        for &phrase in AIRLINES.iter().chain(GENERAL) {
            assert_normalized(phrase);
        }
    }

    #[test]
    fn airlines_contains_domain_terms() {
        for term in ["indigo", "airbus", "air india", "boarding pass"] {
            assert!(AIRLINES.contains(&term), "'{term}' missing from AIRLINES");
        }
    }

    #[test]
    fn from_arg_parses_sources() {
        assert_eq!(CorpusSource::from_arg("embedded"), CorpusSource::Embedded);
        assert_eq!(
            CorpusSource::from_arg("data/custom.txt"),
            CorpusSource::File(PathBuf::from("data/custom.txt"))
        );
    }

    #[test]
    fn missing_file_source_loads_empty() {
        let source = CorpusSource::from_arg("/definitely/not/here/corpus.txt");
        assert!(source.load(AIRLINES).is_empty());
    }

    #[test]
    fn embedded_source_loads_slice() {
        let corpus = CorpusSource::Embedded.load(GENERAL);
        assert_eq!(corpus.len(), GENERAL_COUNT);
    }

    #[test]
    fn iter_preserves_order() {
        let corpus = Corpus::from_slice(&["b", "a", "b"]);
        assert_eq!(corpus.iter().collect::<Vec<_>>(), vec!["b", "a", "b"]);
        assert!(!corpus.is_empty());
        assert!(Corpus::empty().is_empty());
    }
}
