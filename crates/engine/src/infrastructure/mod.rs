//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod announcer;
pub mod datamuse;
pub mod offline_lexicon;
pub mod ports;
pub mod random;
pub mod settings;
