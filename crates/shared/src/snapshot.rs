//! Observable puzzle state for UI binding.

use serde::{Deserialize, Serialize};
use unscramble_domain::{PuzzlePhase, RoundOutcome};

/// Everything a UI renders, captured after one engine transition.
///
/// Tiles and slot letters are upper-case for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleSnapshot {
    pub phase: PuzzlePhase,
    pub outcome: RoundOutcome,
    /// Scrambled tiles still available to place
    pub tiles: Vec<char>,
    /// Answer slots, `None` where still empty
    pub slots: Vec<Option<char>>,
    /// Tiles joined into a single label
    pub scrambled: String,
    pub hint: String,
    pub hint_available: bool,
    pub message: String,
    pub is_success: bool,
    pub is_error: bool,
    pub input_enabled: bool,
    pub success_count: u32,
    pub words_served: u32,
    pub max_words_per_topic: u32,
    pub topic: Option<String>,
}

impl PuzzleSnapshot {
    /// Number of slots still waiting for a tile.
    pub fn empty_slots(&self) -> usize {
        self.slots.iter().filter(|s| s.is_none()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_phase_and_optional_slots() {
        let snapshot = PuzzleSnapshot {
            phase: PuzzlePhase::Active,
            tiles: vec!['T'],
            slots: vec![Some('C'), Some('A'), None],
            input_enabled: true,
            ..Default::default()
        };
        let json = serde_json::to_value(&snapshot).expect("serialize");
        assert_eq!(json["phase"], "active");
        assert_eq!(json["outcome"], "pending");
        assert_eq!(json["slots"][2], serde_json::Value::Null);
        assert_eq!(snapshot.empty_slots(), 1);
    }
}
