//! Daily word providers
//!
//! [`ScheduleProvider`] reads a puzzle schedule file: a JSON object
//! mapping `YYYY-M-D` date keys (no zero padding) to base64-encoded
//! words. [`RotationProvider`] rotates deterministically through a word
//! pool by calendar day so the game is playable without a schedule file.
//! [`FixedProvider`] returns a preset word (CLI override, tests).

use super::{ProviderError, WordProvider};
use crate::core::Word;
use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{Datelike, NaiveDate};
use log::{debug, info};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Date-keyed puzzle schedule loaded from a JSON file
///
/// The file is a single JSON object: `YYYY-M-D` keys, base64-encoded
/// word values.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct ScheduleProvider {
    entries: HashMap<String, String>,
}

impl ScheduleProvider {
    /// Load a schedule from a JSON file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ProviderError> {
        let content = fs::read_to_string(path.as_ref())?;
        let provider = Self::from_json(&content)?;
        info!(
            "loaded {} scheduled puzzles from {}",
            provider.entries.len(),
            path.as_ref().display()
        );
        Ok(provider)
    }

    /// Parse a schedule from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ProviderError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The schedule key for a date: `YYYY-M-D`, no zero padding
    fn key_for(date: NaiveDate) -> String {
        format!("{}-{}-{}", date.year(), date.month(), date.day())
    }
}

#[async_trait]
impl WordProvider for ScheduleProvider {
    async fn word_for(&self, date: NaiveDate) -> Result<Word, ProviderError> {
        let key = Self::key_for(date);
        let encoded = self
            .entries
            .get(&key)
            .ok_or(ProviderError::MissingDate(date))?;

        let bytes = BASE64
            .decode(encoded.trim())
            .map_err(|_| ProviderError::BadEncoding(date))?;
        let text =
            String::from_utf8(bytes).map_err(|_| ProviderError::BadEncoding(date))?;

        debug!("schedule hit for {key}");
        Word::new(&text).map_err(|source| ProviderError::BadWord { date, source })
    }
}

/// Deterministic daily rotation over a word pool
///
/// The word for a date is `pool[days_since_epoch mod pool_len]`, so every
/// player sees the same word on the same day.
#[derive(Debug, Clone)]
pub struct RotationProvider {
    pool: Vec<Word>,
    epoch: NaiveDate,
}

impl RotationProvider {
    /// Day zero of the rotation
    const EPOCH: (i32, u32, u32) = (2024, 1, 1);

    /// Rotate over `pool`; `None` if the pool is empty
    #[must_use]
    pub fn new(pool: Vec<Word>) -> Option<Self> {
        if pool.is_empty() {
            return None;
        }
        let (y, m, d) = Self::EPOCH;
        let epoch = NaiveDate::from_ymd_opt(y, m, d)?;
        Some(Self { pool, epoch })
    }

    /// Rotate over the embedded answer pool
    ///
    /// # Panics
    /// Panics if the embedded answer list is empty, which would be a build
    /// defect.
    #[must_use]
    pub fn embedded() -> Self {
        let pool = crate::wordlists::loader::words_from_slice(crate::wordlists::ANSWERS);
        Self::new(pool).expect("embedded answer list is never empty")
    }
}

#[async_trait]
impl WordProvider for RotationProvider {
    async fn word_for(&self, date: NaiveDate) -> Result<Word, ProviderError> {
        let days = (date - self.epoch).num_days();
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let index = days.rem_euclid(self.pool.len() as i64) as usize;
        debug!("rotation index {index} for {date}");
        Ok(self.pool[index].clone())
    }
}

/// Always returns the same word
#[derive(Debug, Clone)]
pub struct FixedProvider(pub Word);

#[async_trait]
impl WordProvider for FixedProvider {
    async fn word_for(&self, _date: NaiveDate) -> Result<Word, ProviderError> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn schedule_keys_are_not_zero_padded() {
        assert_eq!(ScheduleProvider::key_for(date(2024, 1, 1)), "2024-1-1");
        assert_eq!(ScheduleProvider::key_for(date(2024, 12, 31)), "2024-12-31");
        assert_eq!(ScheduleProvider::key_for(date(2024, 10, 5)), "2024-10-5");
    }

    #[tokio::test]
    async fn schedule_decodes_and_uppercases() {
        // "aGVsbG8=" is base64 for "hello"
        let provider = ScheduleProvider::from_json(r#"{"2024-1-1": "aGVsbG8="}"#).unwrap();
        let word = provider.word_for(date(2024, 1, 1)).await.unwrap();
        assert_eq!(word.text(), "HELLO");
    }

    #[tokio::test]
    async fn schedule_missing_date_is_an_error() {
        let provider = ScheduleProvider::from_json(r#"{"2024-1-1": "aGVsbG8="}"#).unwrap();
        let err = provider.word_for(date(2024, 1, 2)).await.unwrap_err();
        assert!(matches!(err, ProviderError::MissingDate(_)));
    }

    #[tokio::test]
    async fn schedule_rejects_bad_base64() {
        let provider = ScheduleProvider::from_json(r#"{"2024-1-1": "!!not-base64!!"}"#).unwrap();
        let err = provider.word_for(date(2024, 1, 1)).await.unwrap_err();
        assert!(matches!(err, ProviderError::BadEncoding(_)));
    }

    #[tokio::test]
    async fn schedule_rejects_non_word_entries() {
        // "dG9vbG9uZw==" is base64 for "toolong"
        let provider = ScheduleProvider::from_json(r#"{"2024-1-1": "dG9vbG9uZw=="}"#).unwrap();
        let err = provider.word_for(date(2024, 1, 1)).await.unwrap_err();
        assert!(matches!(err, ProviderError::BadWord { .. }));
    }

    #[test]
    fn schedule_rejects_malformed_json() {
        assert!(matches!(
            ScheduleProvider::from_json("not json"),
            Err(ProviderError::Format(_))
        ));
    }

    #[test]
    fn schedule_rejects_non_string_entries() {
        // Values must be base64 strings, not numbers or nested objects
        assert!(matches!(
            ScheduleProvider::from_json(r#"{"2024-1-1": 42}"#),
            Err(ProviderError::Format(_))
        ));
        assert!(matches!(
            ScheduleProvider::from_json(r#"{"2024-1-1": {"word": "aGVsbG8="}}"#),
            Err(ProviderError::Format(_))
        ));
    }

    #[tokio::test]
    async fn rotation_is_deterministic_and_daily() {
        let pool = vec![
            Word::new("hello").unwrap(),
            Word::new("world").unwrap(),
            Word::new("crane").unwrap(),
        ];
        let provider = RotationProvider::new(pool).unwrap();

        let a = provider.word_for(date(2024, 1, 1)).await.unwrap();
        let b = provider.word_for(date(2024, 1, 2)).await.unwrap();
        let again = provider.word_for(date(2024, 1, 1)).await.unwrap();

        assert_eq!(a.text(), "HELLO");
        assert_eq!(b.text(), "WORLD");
        assert_eq!(a, again);

        // Wraps around the pool
        let wrapped = provider.word_for(date(2024, 1, 4)).await.unwrap();
        assert_eq!(wrapped, a);
    }

    #[tokio::test]
    async fn rotation_handles_dates_before_epoch() {
        let pool = vec![Word::new("hello").unwrap(), Word::new("world").unwrap()];
        let provider = RotationProvider::new(pool).unwrap();
        // Must not panic; rem_euclid keeps the index in range
        provider.word_for(date(2020, 6, 15)).await.unwrap();
    }

    #[test]
    fn rotation_rejects_empty_pool() {
        assert!(RotationProvider::new(Vec::new()).is_none());
    }

    #[tokio::test]
    async fn fixed_provider_ignores_date() {
        let provider = FixedProvider(Word::new("crane").unwrap());
        let a = provider.word_for(date(2024, 1, 1)).await.unwrap();
        let b = provider.word_for(date(2030, 12, 25)).await.unwrap();
        assert_eq!(a, b);
    }
}
