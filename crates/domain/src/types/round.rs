//! Round lifecycle vocabulary
//!
//! `PuzzlePhase` is the state of the puzzle state machine; `RoundOutcome` is
//! the coarser result the player sees (a round that is loading or in play is
//! still `Pending`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// State of the puzzle state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PuzzlePhase {
    /// A word acquisition is (or is about to be) in flight
    #[default]
    Loading,
    /// Tiles are ready and the player may place them
    Active,
    /// Correct guess; waiting out the feedback delay
    Success,
    /// Wrong guess; answer revealed while waiting out the feedback delay
    Error,
    /// Acquisition gave up after the attempt budget
    NoWordsAvailable,
    /// Word cap reached for the topic
    TopicComplete,
}

impl PuzzlePhase {
    /// Only an active round accepts tile input.
    pub fn accepts_input(&self) -> bool {
        matches!(self, Self::Active)
    }

    pub fn outcome(&self) -> RoundOutcome {
        match self {
            Self::Loading | Self::Active => RoundOutcome::Pending,
            Self::Success => RoundOutcome::Success,
            Self::Error => RoundOutcome::Error,
            Self::NoWordsAvailable => RoundOutcome::NoWordsAvailable,
            Self::TopicComplete => RoundOutcome::TopicComplete,
        }
    }
}

impl fmt::Display for PuzzlePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loading => write!(f, "loading"),
            Self::Active => write!(f, "active"),
            Self::Success => write!(f, "success"),
            Self::Error => write!(f, "error"),
            Self::NoWordsAvailable => write!(f, "no_words_available"),
            Self::TopicComplete => write!(f, "topic_complete"),
        }
    }
}

/// Player-visible result of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundOutcome {
    #[default]
    Pending,
    Success,
    Error,
    NoWordsAvailable,
    TopicComplete,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_active_accepts_input() {
        assert!(PuzzlePhase::Active.accepts_input());
        for phase in [
            PuzzlePhase::Loading,
            PuzzlePhase::Success,
            PuzzlePhase::Error,
            PuzzlePhase::NoWordsAvailable,
            PuzzlePhase::TopicComplete,
        ] {
            assert!(!phase.accepts_input(), "{} should not accept input", phase);
        }
    }

    #[test]
    fn loading_and_active_are_pending() {
        assert_eq!(PuzzlePhase::Loading.outcome(), RoundOutcome::Pending);
        assert_eq!(PuzzlePhase::Active.outcome(), RoundOutcome::Pending);
        assert_eq!(PuzzlePhase::Error.outcome(), RoundOutcome::Error);
    }

    #[test]
    fn phase_serializes_snake_case() {
        let json = serde_json::to_string(&PuzzlePhase::NoWordsAvailable).expect("serialize");
        assert_eq!(json, "\"no_words_available\"");
    }
}
