//! Single guess command
//!
//! Validates a guess request, runs the engine once, and reports the letter.

use crate::core::{GuessedLetters, WordState};
use crate::solver::{Guess, GuessEngine};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Error type for request payloads rejected before reaching the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    NoPayload,
    InvalidJson(String),
    MissingFields,
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPayload => write!(f, "Invalid request: No JSON payload received."),
            Self::InvalidJson(err) => write!(f, "Invalid request: {err}"),
            Self::MissingFields => write!(
                f,
                "Invalid request: Missing 'currentWordState' or 'guessedLetters'."
            ),
        }
    }
}

impl std::error::Error for RequestError {}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRequest {
    current_word_state: Option<String>,
    guessed_letters: Option<Vec<String>>,
}

/// A validated guess request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRequest {
    pub current_word_state: String,
    pub guessed_letters: Vec<String>,
}

impl GuessRequest {
    #[must_use]
    pub const fn new(current_word_state: String, guessed_letters: Vec<String>) -> Self {
        Self {
            current_word_state,
            guessed_letters,
        }
    }

    /// Parse and validate a JSON payload
    ///
    /// Unknown fields such as `guessesRemaining` are ignored.
    ///
    /// # Errors
    ///
    /// Returns `RequestError` if the payload is blank, `null` or `{}`, is not
    /// valid JSON of the expected shape, or lacks either required field.
    ///
    /// # Examples
    /// ```
    /// use airline_hangman::commands::GuessRequest;
    ///
    /// let request = GuessRequest::from_json(
    ///     r#"{"currentWordState": "_ _ _", "guessedLetters": ["e"], "guessesRemaining": 5}"#,
    /// ).unwrap();
    /// assert_eq!(request.current_word_state, "_ _ _");
    ///
    /// assert!(GuessRequest::from_json(r#"{"currentWordState": "_ _ _"}"#).is_err());
    /// ```
    pub fn from_json(payload: &str) -> Result<Self, RequestError> {
        if payload.trim().is_empty() {
            return Err(RequestError::NoPayload);
        }

        let value: serde_json::Value = serde_json::from_str(payload)
            .map_err(|err| RequestError::InvalidJson(err.to_string()))?;

        let is_empty = match &value {
            serde_json::Value::Null => true,
            serde_json::Value::Object(map) => map.is_empty(),
            _ => false,
        };
        if is_empty {
            return Err(RequestError::NoPayload);
        }

        let raw: RawRequest = serde_json::from_value(value)
            .map_err(|err| RequestError::InvalidJson(err.to_string()))?;

        match (raw.current_word_state, raw.guessed_letters) {
            (Some(current_word_state), Some(guessed_letters)) => Ok(Self {
                current_word_state,
                guessed_letters,
            }),
            _ => Err(RequestError::MissingFields),
        }
    }

    #[must_use]
    pub fn guessed(&self) -> GuessedLetters {
        GuessedLetters::from_strs(&self.guessed_letters)
    }
}

/// Response payload, serialized as `{"nextGuess": "e"}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessResponse {
    pub next_guess: char,
}

impl GuessResponse {
    /// Serialize to a JSON string
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Result of running one request through the engine
pub struct GuessReport {
    /// Parsed state, empty when the wire form was malformed
    pub state: WordState,
    pub well_formed: bool,
    pub guessed: Vec<char>,
    pub guess: Guess,
}

/// Run a validated request through the engine
#[must_use]
pub fn guess_from_request(engine: &GuessEngine, request: &GuessRequest) -> GuessReport {
    let state = WordState::parse_lenient(&request.current_word_state);
    let guessed = request.guessed();
    let guess = engine.guess_detailed(&state, &guessed);

    GuessReport {
        well_formed: state.is_well_formed(),
        state,
        guessed: guessed.sorted(),
        guess,
    }
}

/// Validate a JSON payload and answer it
///
/// # Errors
///
/// Returns `RequestError` when the payload fails validation; the engine
/// itself never fails.
pub fn guess_from_json(engine: &GuessEngine, payload: &str) -> Result<GuessResponse, RequestError> {
    let request = GuessRequest::from_json(payload)?;
    let report = guess_from_request(engine, &request);

    Ok(GuessResponse {
        next_guess: report.guess.letter,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Corpus;
    use crate::solver::Tier;

    fn engine() -> GuessEngine {
        GuessEngine::new(
            Corpus::from_slice(&["indigo", "airbus", "air india"]),
            Corpus::from_slice(&["cat", "dog"]),
        )
    }

    #[test]
    fn rejects_empty_payloads() {
        assert_eq!(GuessRequest::from_json(""), Err(RequestError::NoPayload));
        assert_eq!(GuessRequest::from_json("null"), Err(RequestError::NoPayload));
        assert_eq!(GuessRequest::from_json("{}"), Err(RequestError::NoPayload));
    }

    #[test]
    fn rejects_missing_fields() {
        assert_eq!(
            GuessRequest::from_json(r#"{"guessedLetters": []}"#),
            Err(RequestError::MissingFields)
        );
        assert_eq!(
            GuessRequest::from_json(r#"{"currentWordState": "_ _", "guessedLetters": null}"#),
            Err(RequestError::MissingFields)
        );
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            GuessRequest::from_json("{not json"),
            Err(RequestError::InvalidJson(_))
        ));
        assert!(matches!(
            GuessRequest::from_json(r#"{"currentWordState": 7, "guessedLetters": []}"#),
            Err(RequestError::InvalidJson(_))
        ));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            RequestError::MissingFields.to_string(),
            "Invalid request: Missing 'currentWordState' or 'guessedLetters'."
        );
        assert_eq!(
            RequestError::NoPayload.to_string(),
            "Invalid request: No JSON payload received."
        );
    }

    #[test]
    fn answers_valid_payload() {
        let payload = r#"{"currentWordState": "i _ _ i g _", "guessedLetters": ["i", "g"]}"#;
        let response = guess_from_json(&engine(), payload).unwrap();

        assert_eq!(response.next_guess, 'n');
        assert_eq!(response.to_json().unwrap(), r#"{"nextGuess":"n"}"#);
    }

    #[test]
    fn report_describes_decision() {
        let request = GuessRequest::new("_ _ _   _ _ _ _ _".to_string(), vec![]);
        let report = guess_from_request(&engine(), &request);

        assert!(report.well_formed);
        assert_eq!(report.state.slot_lengths(), vec![3, 5]);
        assert_eq!(report.guess.tier, Tier::Domain);
        assert_eq!(report.guess.candidates, 1);
        assert_eq!(report.guess.letter, 'i');
    }

    #[test]
    fn malformed_state_still_answers() {
        let request = GuessRequest::new("_ ? _".to_string(), vec!["e".to_string()]);
        let report = guess_from_request(&engine(), &request);

        assert!(!report.well_formed);
        assert_eq!(report.guess.tier, Tier::Fallback);
        assert_eq!(report.guess.letter, 'a');
        assert_eq!(report.guessed, vec!['e']);
    }
}
