//! Hint progression for the current word.

use crate::value_objects::DefinitionSet;

/// Walks through a word's definitions one hint at a time.
///
/// The first hint is visible as soon as definitions are set. Advancing stops
/// at the last definition: the cycle never wraps back to the first hint within
/// a round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HintCycler {
    definitions: Option<DefinitionSet>,
    current_index: usize,
    available: bool,
}

impl HintCycler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new round's hints at index 0.
    pub fn set_definitions(&mut self, definitions: DefinitionSet) {
        self.available = definitions.len() > 1;
        self.current_index = 0;
        self.definitions = Some(definitions);
    }

    /// Drop all hints (no word loaded).
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Move to the next hint and return its gloss.
    ///
    /// Returns `None` without changing anything once every hint has been shown.
    pub fn advance(&mut self) -> Option<&str> {
        if !self.available {
            return None;
        }
        let len = self.definitions.as_ref().map_or(0, DefinitionSet::len);
        if len == 0 {
            self.available = false;
            return None;
        }
        self.current_index = (self.current_index + 1) % len;
        self.available = self.current_index < len - 1;
        self.current()
    }

    /// Gloss of the hint currently shown, if any.
    pub fn current(&self) -> Option<&str> {
        self.definitions
            .as_ref()
            .and_then(|defs| defs.get(self.current_index))
            .map(|def| def.gloss())
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_available(&self) -> bool {
        self.available
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycler_with(glosses: &[&str]) -> HintCycler {
        let raw: Vec<String> = glosses.iter().map(|g| format!("n\t{}", g)).collect();
        let mut cycler = HintCycler::new();
        cycler.set_definitions(DefinitionSet::from_raw(raw));
        cycler
    }

    #[test]
    fn first_hint_is_shown_immediately() {
        let cycler = cycler_with(&["feline"]);
        assert_eq!(cycler.current(), Some("feline"));
        assert!(!cycler.is_available());
    }

    #[test]
    fn single_definition_never_advances() {
        let mut cycler = cycler_with(&["feline"]);
        assert_eq!(cycler.advance(), None);
        assert_eq!(cycler.current_index(), 0);
    }

    #[test]
    fn advance_k_times_lands_on_min_k_and_last() {
        let glosses = ["one", "two", "three", "four"];
        for k in 0..8usize {
            let mut cycler = cycler_with(&glosses);
            for _ in 0..k {
                cycler.advance();
            }
            let expected = k.min(glosses.len() - 1);
            assert_eq!(cycler.current_index(), expected, "after {} advances", k);
            assert_eq!(cycler.current(), Some(glosses[expected]));
            assert_eq!(cycler.is_available(), expected < glosses.len() - 1);
        }
    }

    #[test]
    fn advance_returns_new_hint_until_exhausted() {
        let mut cycler = cycler_with(&["a small boat", "to row"]);
        assert!(cycler.is_available());
        assert_eq!(cycler.advance(), Some("to row"));
        assert!(!cycler.is_available());
        assert_eq!(cycler.advance(), None);
        assert_eq!(cycler.current(), Some("to row"));
    }

    #[test]
    fn set_definitions_resets_progress() {
        let mut cycler = cycler_with(&["x", "y"]);
        cycler.advance();
        cycler.set_definitions(DefinitionSet::from_raw(["n\tp", "n\tq", "n\tr"]));
        assert_eq!(cycler.current_index(), 0);
        assert_eq!(cycler.current(), Some("p"));
        assert!(cycler.is_available());
    }

    #[test]
    fn cleared_cycler_has_no_hint() {
        let mut cycler = cycler_with(&["x", "y"]);
        cycler.clear();
        assert_eq!(cycler.current(), None);
        assert!(!cycler.is_available());
        assert_eq!(cycler.advance(), None);
    }
}
