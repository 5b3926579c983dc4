//! Injectable asynchronous capabilities
//!
//! The engine never talks to the outside world directly. The two external
//! lookups — "what is today's word" and "is this a real word" — are traits
//! the binary wires up at startup and tests replace with deterministic
//! fakes.

mod daily;
mod dictionary;

pub use daily::{FixedProvider, RotationProvider, ScheduleProvider};
pub use dictionary::WordlistValidator;

use crate::core::{Word, WordError};
use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

/// Failure to resolve the session's solution word
///
/// Any of these is fatal to game start: there is no playing without a
/// solution.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("no puzzle scheduled for {0}")]
    MissingDate(NaiveDate),
    #[error("puzzle schedule unreadable")]
    Source(#[from] std::io::Error),
    #[error("puzzle schedule is not valid JSON")]
    Format(#[from] serde_json::Error),
    #[error("scheduled entry for {0} is not valid base64")]
    BadEncoding(NaiveDate),
    #[error("scheduled entry for {date} is not a playable word")]
    BadWord {
        date: NaiveDate,
        #[source]
        source: WordError,
    },
}

/// Failure to get a verdict from the dictionary
///
/// Distinct from "not a word": an unavailable dictionary is indeterminate
/// and the player may retry the same row.
#[derive(Debug, Error)]
pub enum ValidatorError {
    #[error("dictionary unavailable: {0}")]
    Unavailable(String),
}

/// Resolves the solution word for a calendar date
#[async_trait]
pub trait WordProvider: Send + Sync {
    async fn word_for(&self, date: NaiveDate) -> Result<Word, ProviderError>;
}

/// Answers "is this a recognized word?"
///
/// `Ok(false)` means the word is not recognized (the remote lookup's
/// not-found case). `Err` means no verdict could be reached and must not
/// be collapsed into either boolean.
#[async_trait]
pub trait DictionaryValidator: Send + Sync {
    async fn check(&self, word: &Word) -> Result<bool, ValidatorError>;
}
