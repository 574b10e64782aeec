//! Fill-in-the-blank spelling patterns used to query the word lookup service.
//!
//! A pattern has one fixed lowercase letter and `?` wildcards everywhere else,
//! e.g. `"??a?"` matches any four-letter word whose third letter is `a`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Shortest generated pattern (and therefore shortest puzzle word)
pub const MIN_PATTERN_LENGTH: usize = 3;

/// Longest generated pattern
pub const MAX_PATTERN_LENGTH: usize = 5;

/// Wildcard character understood by the lookup service
pub const WILDCARD: char = '?';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPattern {
    length: usize,
    fixed_position: usize,
    fixed_letter: char,
}

impl SearchPattern {
    /// Create a pattern with an explicit fixed letter.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the length is zero, the position
    /// is outside the pattern, or the letter is not a lowercase ASCII letter.
    pub fn new(
        length: usize,
        fixed_position: usize,
        fixed_letter: char,
    ) -> Result<Self, DomainError> {
        if length == 0 {
            return Err(DomainError::validation("Pattern length must be at least 1"));
        }
        if fixed_position >= length {
            return Err(DomainError::validation(format!(
                "Fixed position {} is outside a pattern of length {}",
                fixed_position, length
            )));
        }
        if !fixed_letter.is_ascii_lowercase() {
            return Err(DomainError::validation(format!(
                "Fixed letter must be a lowercase ASCII letter, got '{}'",
                fixed_letter
            )));
        }
        Ok(Self {
            length,
            fixed_position,
            fixed_letter,
        })
    }

    /// Generate a random pattern of length 3..=5 with one random letter at a
    /// random position.
    ///
    /// `pick(n)` must return a value in `0..n`; out-of-range values are clamped.
    pub fn generate(mut pick: impl FnMut(usize) -> usize) -> Self {
        let span = MAX_PATTERN_LENGTH - MIN_PATTERN_LENGTH + 1;
        let length = MIN_PATTERN_LENGTH + bounded(&mut pick, span);
        let fixed_position = bounded(&mut pick, length);
        let fixed_letter = (b'a' + bounded(&mut pick, 26) as u8) as char;
        Self {
            length,
            fixed_position,
            fixed_letter,
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn fixed_position(&self) -> usize {
        self.fixed_position
    }

    pub fn fixed_letter(&self) -> char {
        self.fixed_letter
    }

    /// Whether `word` has this pattern's length and fixed letter (case-insensitive).
    pub fn matches(&self, word: &str) -> bool {
        word.chars().count() == self.length
            && word
                .chars()
                .nth(self.fixed_position)
                .is_some_and(|c| c.to_ascii_lowercase() == self.fixed_letter)
    }
}

impl fmt::Display for SearchPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.length {
            if i == self.fixed_position {
                write!(f, "{}", self.fixed_letter)?;
            } else {
                write!(f, "{}", WILDCARD)?;
            }
        }
        Ok(())
    }
}

fn bounded(pick: &mut impl FnMut(usize) -> usize, n: usize) -> usize {
    pick(n).min(n.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_wildcards_around_fixed_letter() {
        let pattern = SearchPattern::new(4, 2, 'a').expect("valid pattern");
        assert_eq!(pattern.to_string(), "??a?");
    }

    #[test]
    fn generate_uses_picked_values() {
        // span pick -> 1 (length 4), position pick -> 0, letter pick -> 2 ('c')
        let mut picks = vec![1usize, 0, 2].into_iter();
        let pattern = SearchPattern::generate(|_| picks.next().unwrap_or(0));
        assert_eq!(pattern.to_string(), "c???");
    }

    #[test]
    fn generate_stays_within_bounds_for_any_picker() {
        for raw in [0usize, 1, 7, 25, 1000] {
            let pattern = SearchPattern::generate(|_| raw);
            assert!((MIN_PATTERN_LENGTH..=MAX_PATTERN_LENGTH).contains(&pattern.length()));
            assert!(pattern.fixed_position() < pattern.length());
            assert!(pattern.fixed_letter().is_ascii_lowercase());
            assert_eq!(
                pattern.to_string().chars().filter(|c| *c == WILDCARD).count(),
                pattern.length() - 1
            );
        }
    }

    #[test]
    fn matches_length_and_letter() {
        let pattern = SearchPattern::new(3, 0, 'c').expect("valid pattern");
        assert!(pattern.matches("cat"));
        assert!(pattern.matches("Cup"));
        assert!(!pattern.matches("bat"));
        assert!(!pattern.matches("cart"));
    }

    #[test]
    fn rejects_invalid_parts() {
        assert!(SearchPattern::new(0, 0, 'a').is_err());
        assert!(SearchPattern::new(3, 3, 'a').is_err());
        assert!(SearchPattern::new(3, 1, 'A').is_err());
    }
}
