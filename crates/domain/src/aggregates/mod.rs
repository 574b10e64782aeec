//! Aggregates - stateful puzzle components that guard their own invariants.

mod hint_cycler;
mod tile_board;
mod topic_session;

pub use hint_cycler::HintCycler;
pub use tile_board::{scramble, TileBoard};
pub use topic_session::{TopicSession, MAX_WORDS_PER_TOPIC};
