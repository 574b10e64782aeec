//! Value objects for the puzzle domain
//!
//! Small immutable types that are valid by construction.

mod definition;
mod search_pattern;
mod topic;
mod word;

pub use definition::{Definition, DefinitionSet};
pub use search_pattern::{SearchPattern, MAX_PATTERN_LENGTH, MIN_PATTERN_LENGTH, WILDCARD};
pub use topic::Topic;
pub use word::Word;
