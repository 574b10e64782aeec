//! # Unscramble Domain Types
//!
//! Shared vocabulary types used by both the engine and the UI-facing
//! protocol crate.
//!
//! ## Design Principles
//!
//! 1. **Pure data types** - No I/O, no async, no side effects
//! 2. **Serializable** - All types derive Serialize/Deserialize

mod round;
pub use round::{PuzzlePhase, RoundOutcome};
