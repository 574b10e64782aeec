//! Unscramble Shared - types exchanged between the puzzle engine and a UI
//!
//! This crate contains everything a presentation layer needs to drive the engine:
//! - `PuzzleCommand` - the player gestures the engine accepts
//! - `PuzzleSnapshot` - the observable state published after every transition
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde, serde_json, and thiserror
//! 2. **No business logic** - Pure data types and serialization

pub mod commands;
pub mod snapshot;

pub use commands::{CommandParseError, PuzzleCommand};
pub use snapshot::PuzzleSnapshot;
