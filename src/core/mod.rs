//! Core domain types for the game
//!
//! This module contains the fundamental domain types with zero external I/O.
//! All types here are pure, testable, and have clear mathematical properties.

mod feedback;
mod word;

pub use feedback::{Feedback, LetterScore};
pub use word::{Word, WordError};

/// Length of every solution and guess word.
pub const WORD_LEN: usize = 5;

/// Number of guess attempts a game allows.
pub const MAX_GUESSES: usize = 6;
