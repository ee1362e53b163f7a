//! Core domain types for the game
//!
//! This module contains the fundamental domain types with no game state.
//! All types here are pure, testable, and have clear rules.

mod feedback;
mod word;

pub use feedback::{Feedback, LetterScore};
pub use word::{Word, WordError};
