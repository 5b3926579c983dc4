//! Word-list dictionary validator
//!
//! Checks guesses against a set of accepted words: the embedded allowed
//! list by default, or a custom list loaded from a file.

use super::{DictionaryValidator, ValidatorError};
use crate::core::Word;
use crate::wordlists;
use async_trait::async_trait;
use log::info;
use rustc_hash::FxHashSet;
use std::path::Path;

/// Dictionary backed by an in-memory word set
#[derive(Debug, Clone)]
pub struct WordlistValidator {
    words: FxHashSet<Word>,
}

impl WordlistValidator {
    /// Validator over the embedded allowed-guess list
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(wordlists::loader::words_from_slice(wordlists::ALLOWED))
    }

    /// Validator over a custom word-list file (one word per line)
    pub fn from_file<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let words = wordlists::loader::load_from_file(path.as_ref())?;
        info!(
            "loaded {} dictionary words from {}",
            words.len(),
            path.as_ref().display()
        );
        Ok(Self::from_words(words))
    }

    /// Validator over an explicit word set
    #[must_use]
    pub fn from_words(words: Vec<Word>) -> Self {
        Self {
            words: words.into_iter().collect(),
        }
    }

    /// Number of recognized words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[async_trait]
impl DictionaryValidator for WordlistValidator {
    async fn check(&self, word: &Word) -> Result<bool, ValidatorError> {
        Ok(self.words.contains(word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn recognizes_listed_words() {
        let validator = WordlistValidator::from_words(vec![
            Word::new("hello").unwrap(),
            Word::new("world").unwrap(),
        ]);

        assert!(validator.check(&Word::new("hello").unwrap()).await.unwrap());
        assert!(validator.check(&Word::new("WORLD").unwrap()).await.unwrap());
        assert!(!validator.check(&Word::new("zzzzz").unwrap()).await.unwrap());
    }

    #[tokio::test]
    async fn embedded_list_contains_common_words() {
        let validator = WordlistValidator::embedded();
        assert!(!validator.is_empty());

        for word in ["hello", "world", "crane", "slate", "speed", "erase"] {
            assert!(
                validator.check(&Word::new(word).unwrap()).await.unwrap(),
                "embedded dictionary should contain '{word}'"
            );
        }
    }
}
