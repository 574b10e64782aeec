//! API layer - console entry point.

pub mod console;

pub use console::{render, render_text, run_console};
