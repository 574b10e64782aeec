//! Unscramble Engine library.
//!
//! Runs a word-unscramble puzzle session: word lookup, retry, the session
//! state machine and a console front end.
//!
//! ## Structure
//!
//! - `use_cases/` - candidate lookup, acquisition retry, puzzle state machine and runtime
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `api/` - console entry point
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
