//! Unscramble Domain - the rules of the word-unscramble puzzle.
//!
//! - `value_objects/` - `Word`, `Definition`, `Topic`, `SearchPattern`
//! - `aggregates/` - `TileBoard`, `HintCycler`, `TopicSession`
//! - `types/` - round lifecycle vocabulary
//!
//! Nothing here performs I/O. Randomness is injected as a `FnMut(usize) -> usize`
//! picker returning a value in `0..n`.

pub mod aggregates;
pub mod error;
pub mod types;
pub mod value_objects;

pub use aggregates::{scramble, HintCycler, TileBoard, TopicSession, MAX_WORDS_PER_TOPIC};
pub use error::DomainError;
pub use types::{PuzzlePhase, RoundOutcome};
pub use value_objects::{
    Definition, DefinitionSet, SearchPattern, Topic, Word, MAX_PATTERN_LENGTH,
    MIN_PATTERN_LENGTH, WILDCARD,
};
