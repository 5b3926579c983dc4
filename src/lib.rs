//! Worldle
//!
//! A terminal Wordle: guess the hidden five-letter word in six attempts,
//! with per-letter feedback after every guess.
//!
//! # Quick Start
//!
//! ```rust
//! use worldle::core::{Feedback, LetterScore, Word};
//!
//! let solution = Word::new("hello").unwrap();
//! let guess = Word::new("world").unwrap();
//!
//! let feedback = Feedback::score(&guess, &solution);
//! assert_eq!(feedback.scores()[1], LetterScore::Present); // the O
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod engine;

// Injectable async capabilities (daily word, dictionary)
pub mod ports;

// Word lists
pub mod wordlists;

// Plain CLI game mode
pub mod commands;

// Interactive TUI interface
pub mod interactive;
