//! Wordle
//!
//! A playable Wordle clone for the terminal: guess the hidden five-letter
//! word in six tries, with a colored guess board and a virtual keyboard that
//! tracks what you know about every letter.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::Word;
//! use wordle_game::game::{Dictionary, GameState, Session};
//!
//! let words = vec![Word::new("crane").unwrap(), Word::new("slate").unwrap()];
//! let dictionary = Dictionary::new(words).unwrap();
//! let mut session = Session::with_target(dictionary, Word::new("crane").unwrap());
//!
//! let outcome = session.submit("slate").unwrap();
//! assert_eq!(outcome.state, GameState::InProgress);
//!
//! let outcome = session.submit("crane").unwrap();
//! assert_eq!(outcome.state, GameState::Won);
//! ```

// Core domain types
pub mod core;

// Game state and rules
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
