//! Word representation
//!
//! A `Word` stores exactly five uppercase ASCII letters. Both the hidden
//! solution and every submitted guess are normalized through this type.

use super::WORD_LEN;
use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// A validated five-letter word, stored uppercase
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    letters: [u8; WORD_LEN],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly {WORD_LEN} letters, got {0}")]
    InvalidLength(usize),
    #[error("word must contain only ASCII letters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new `Word` from a string, normalizing case to uppercase
    ///
    /// # Errors
    /// Returns `WordError` if the input is not exactly five ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use worldle::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        let char_count = text.chars().count();
        if char_count != WORD_LEN {
            return Err(WordError::InvalidLength(char_count));
        }
        // Char count matched, so a byte-count mismatch means non-ASCII content
        if text.len() != WORD_LEN || !text.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacters);
        }

        let mut letters = [0u8; WORD_LEN];
        for (slot, b) in letters.iter_mut().zip(text.bytes()) {
            *slot = b.to_ascii_uppercase();
        }

        Ok(Self { letters })
    }

    /// Build a `Word` from grid cells; `None` if any cell is empty or invalid
    #[must_use]
    pub fn from_letters(cells: [Option<char>; WORD_LEN]) -> Option<Self> {
        let mut letters = [0u8; WORD_LEN];
        for (slot, cell) in letters.iter_mut().zip(cells) {
            let c = cell?;
            if !c.is_ascii_alphabetic() {
                return None;
            }
            *slot = (c as u8).to_ascii_uppercase();
        }
        Some(Self { letters })
    }

    /// Get the word as its uppercase byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LEN] {
        &self.letters
    }

    /// Get the letter at a position (0-4) as a `char`
    ///
    /// # Panics
    /// Panics if `position >= 5`
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> char {
        self.letters[position] as char
    }

    /// Get the word as an owned uppercase string
    #[must_use]
    pub fn text(&self) -> String {
        self.letters.iter().map(|&b| b as char).collect()
    }

    /// Check whether the word contains a letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.letters.contains(&letter.to_ascii_uppercase())
    }

    /// Count of each letter in the word
    ///
    /// Used for feedback scoring with duplicate letters.
    #[inline]
    pub(crate) fn letter_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &b in &self.letters {
            *counts.entry(b).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.letters {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "CRANE");
        assert_eq!(word.letters(), b"CRANE");
    }

    #[test]
    fn word_creation_case_normalized() {
        let word = Word::new("CRANE").unwrap();
        let word2 = Word::new("CrAnE").unwrap();
        assert_eq!(word, word2);
        assert_eq!(word2.text(), "CRANE");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("too long"),
            Err(WordError::InvalidLength(8))
        ));
        assert!(matches!(Word::new("shrt"), Err(WordError::InvalidLength(4))));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("cran3").is_err()); // Number
        assert!(Word::new("cran ").is_err()); // Space
        assert!(Word::new("cran!").is_err()); // Punctuation
    }

    #[test]
    fn word_creation_multibyte_is_a_character_error() {
        // Five characters but six bytes; the accent makes it a content
        // problem, not a length problem
        assert!(matches!(
            Word::new("héllo"),
            Err(WordError::InvalidCharacters)
        ));
        // Length errors count characters, not bytes
        assert!(matches!(
            Word::new("héll"),
            Err(WordError::InvalidLength(4))
        ));
    }

    #[test]
    fn word_from_letters() {
        let cells = [Some('h'), Some('e'), Some('L'), Some('l'), Some('O')];
        let word = Word::from_letters(cells).unwrap();
        assert_eq!(word.text(), "HELLO");

        let partial = [Some('h'), Some('e'), None, Some('l'), Some('o')];
        assert!(Word::from_letters(partial).is_none());
    }

    #[test]
    fn word_letter_at() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.letter_at(0), 'C');
        assert_eq!(word.letter_at(4), 'E');
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("crane").unwrap();
        assert!(word.has_letter(b'c'));
        assert!(word.has_letter(b'C'));
        assert!(!word.has_letter(b'z'));
    }

    #[test]
    fn word_letter_counts() {
        let word = Word::new("speed").unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts.get(&b'S'), Some(&1));
        assert_eq!(counts.get(&b'E'), Some(&2));
        assert_eq!(counts.get(&b'D'), Some(&1));
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane").unwrap();
        assert_eq!(format!("{word}"), "CRANE");
    }

    #[test]
    fn word_from_str() {
        let word: Word = "slate".parse().unwrap();
        assert_eq!(word.text(), "SLATE");
        assert!("toolong".parse::<Word>().is_err());
    }
}
