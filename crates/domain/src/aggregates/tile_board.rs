//! Scrambled tiles and the ordered answer slots the player fills.
//!
//! Every letter of the word lives in exactly one place: either among the
//! remaining scrambled tiles or in a filled slot. Moving a letter is a single
//! `&mut self` call, so no caller can observe it in both or neither.

use crate::value_objects::Word;

/// Re-roll budget before falling back to a rotation.
const MAX_SCRAMBLE_ATTEMPTS: usize = 64;

/// Shuffle the letters of `word` so the result differs from the original order.
///
/// Uses Fisher–Yates and re-rolls any permutation equal to the word. `pick(n)`
/// must return a value in `0..n`. Words made of a single repeated letter have
/// no distinct permutation and are returned unchanged.
pub fn scramble(word: &Word, mut pick: impl FnMut(usize) -> usize) -> Vec<char> {
    let original: Vec<char> = word.letters().collect();
    if original.windows(2).all(|pair| pair[0] == pair[1]) {
        return original;
    }

    for _ in 0..MAX_SCRAMBLE_ATTEMPTS {
        let mut tiles = original.clone();
        for i in (1..tiles.len()).rev() {
            let j = pick(i + 1).min(i);
            tiles.swap(i, j);
        }
        if tiles != original {
            return tiles;
        }
    }

    // A degenerate picker kept producing the identity; any rotation of a word
    // with two distinct letters differs from it.
    let mut rotated = original;
    rotated.rotate_left(1);
    rotated
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TileBoard {
    tiles: Vec<char>,
    slots: Vec<Option<char>>,
}

impl TileBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scramble `word` into fresh tiles and empty every slot.
    pub fn reset(&mut self, word: &Word, pick: impl FnMut(usize) -> usize) {
        self.tiles = scramble(word, pick);
        self.slots = vec![None; word.len()];
    }

    /// Remove all tiles and slots (no word on the board).
    pub fn clear(&mut self) {
        self.tiles.clear();
        self.slots.clear();
    }

    /// Place `letter` into the first empty slot.
    ///
    /// Consumes the leftmost matching tile. Returns `false` (and changes
    /// nothing) if the letter is not among the tiles or every slot is full.
    pub fn place(&mut self, letter: char) -> bool {
        match self.slots.iter().position(Option::is_none) {
            Some(slot) => self.fill(letter, slot),
            None => false,
        }
    }

    /// Place `letter` into a specific slot.
    ///
    /// Occupied slots are never overwritten; dropping onto one is a no-op.
    pub fn place_at(&mut self, letter: char, slot: usize) -> bool {
        match self.slots.get(slot) {
            Some(None) => self.fill(letter, slot),
            _ => false,
        }
    }

    fn fill(&mut self, letter: char, slot: usize) -> bool {
        let letter = letter.to_ascii_lowercase();
        let Some(tile_index) = self.tiles.iter().position(|t| *t == letter) else {
            return false;
        };
        let Some(target) = self.slots.get_mut(slot) else {
            return false;
        };
        *target = Some(self.tiles.remove(tile_index));
        true
    }

    pub fn all_slots_filled(&self) -> bool {
        !self.slots.is_empty() && self.slots.iter().all(Option::is_some)
    }

    /// Filled slot letters in order; empty slots contribute nothing.
    pub fn current_guess(&self) -> String {
        self.slots.iter().flatten().collect()
    }

    pub fn tiles(&self) -> &[char] {
        &self.tiles
    }

    pub fn slots(&self) -> &[Option<char>] {
        &self.slots
    }

    pub fn contains_tile(&self, letter: char) -> bool {
        self.tiles.contains(&letter.to_ascii_lowercase())
    }
}
