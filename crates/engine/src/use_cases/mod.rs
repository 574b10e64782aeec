//! Use cases - User story orchestration.
//!
//! - `word_source` - one lookup, filtered down to playable candidates
//! - `acquisition` - bounded retry around the word source
//! - `puzzle` - the session state machine and its async driver

pub mod acquisition;
pub mod puzzle;
pub mod word_source;

pub use acquisition::{AcquireWord, AcquisitionError};
pub use puzzle::{PuzzleEngine, PuzzleHandle, PuzzleRuntime};
pub use word_source::{Candidate, WordCandidateSource};
