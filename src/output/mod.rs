//! Terminal output formatting
//!
//! Display utilities for the plain CLI game mode.

pub mod formatters;

pub use formatters::{colored_guess_row, keyboard_summary, share_grid};
