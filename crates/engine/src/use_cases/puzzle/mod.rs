//! Puzzle session: the state machine and the task that drives it.

mod engine;
mod runtime;

pub use engine::{
    Effect, Generation, PuzzleEngine, LOADING_HINT, NO_HINT, NO_WORDS_MESSAGE, SUCCESS_MESSAGE,
};
pub use runtime::{PuzzleHandle, PuzzleRuntime, RuntimeStopped};
