//! The target answer of a round.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// A validated puzzle word (lowercase ASCII letters only, non-empty).
///
/// Construction trims and lower-cases the input, so `" Cat "` becomes `"cat"`.
/// Anything containing spaces, hyphens, digits or non-ASCII letters is rejected:
/// such entries cannot be laid out as single-letter tiles.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word(String);

impl Word {
    /// Create a new validated word.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The text is empty after trimming
    /// - The text contains anything other than ASCII letters
    pub fn new(text: impl Into<String>) -> Result<Self, DomainError> {
        let text = text.into();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Word cannot be empty"));
        }
        if !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(DomainError::validation(format!(
                "Word must contain only letters: '{}'",
                trimmed
            )));
        }
        Ok(Self(trimmed.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of letters (and therefore tiles and slots).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }

    /// Whether a guess spells this word, ignoring case and surrounding whitespace.
    pub fn matches_guess(&self, guess: &str) -> bool {
        guess.trim().eq_ignore_ascii_case(&self.0)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Word {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> String {
        word.0
    }
}
