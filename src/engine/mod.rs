//! Game state machine
//!
//! [`GameEngine`] owns the puzzle state — solution, guess grid, cursor,
//! keypad hints — and exposes the three operations the input surface maps
//! to: append a letter, delete the last letter, submit the row. Submission
//! runs the injected dictionary check (bounded by a timeout) and, when the
//! word is accepted, scores the row against the solution.
//!
//! Phases: `Entering → Validating → Entering | Resolved`. While a
//! dictionary check is outstanding the engine ignores all mutations, so a
//! pending validation can never race new keystrokes. After `Resolved`,
//! every operation is an ignored no-op.

mod grid;

pub use grid::Grid;

use crate::core::{Feedback, LetterScore, MAX_GUESSES, Word};
use crate::ports::DictionaryValidator;
use log::{debug, warn};
use rustc_hash::FxHashMap;
use std::time::Duration;
use tokio::time::timeout;

/// How long a dictionary check may run before it counts as unavailable
pub const DEFAULT_VALIDATION_TIMEOUT: Duration = Duration::from_secs(5);

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// Rows remain and the solution has not been guessed
    InProgress,
    /// The solution was guessed; `attempts` is 1-indexed
    Won { attempts: usize },
    /// All six rows were used without a match
    Lost,
}

/// Result of a row submission, consumed by the rendering layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The game is already resolved; nothing happened
    Ignored,
    /// Fewer than five letters in the row; nothing changed
    NotEnoughLetters,
    /// The dictionary does not recognize the word; the row stays editable
    NotInDictionary,
    /// The dictionary check failed or timed out; retryable, distinct from
    /// "not a word"
    ValidatorUnavailable,
    /// The row was accepted and scored
    Scored(RowReport),
}

/// Scoring report for an accepted row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowReport {
    /// Index of the row that was scored
    pub row: usize,
    /// Per-letter classification of the row
    pub feedback: Feedback,
    /// Game state after this row
    pub outcome: GameOutcome,
}

/// A normalized engine input
///
/// Physical keys (Enter/Backspace/A–Z) and the on-screen keypad
/// (GO/DEL/A–Z) both reduce to these three operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Letter(char),
    Submit,
    Delete,
}

impl Key {
    /// Normalize a typed character; `None` for anything non-alphabetic
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        c.is_ascii_alphabetic()
            .then(|| Self::Letter(c.to_ascii_uppercase()))
    }
}

#[derive(Debug, Clone, Copy)]
enum Phase {
    Entering,
    Validating,
    Resolved(GameOutcome),
}

/// The puzzle state machine
pub struct GameEngine<V> {
    solution: Word,
    grid: Grid,
    scored: Vec<Feedback>,
    key_hints: FxHashMap<char, LetterScore>,
    phase: Phase,
    validator: V,
    validation_timeout: Duration,
}

impl<V: DictionaryValidator> GameEngine<V> {
    /// Start a game for `solution`, validating guesses through `validator`
    #[must_use]
    pub fn new(solution: Word, validator: V) -> Self {
        Self {
            solution,
            grid: Grid::new(),
            scored: Vec::with_capacity(MAX_GUESSES),
            key_hints: FxHashMap::default(),
            phase: Phase::Entering,
            validator,
            validation_timeout: DEFAULT_VALIDATION_TIMEOUT,
        }
    }

    /// Override the dictionary-check timeout
    #[must_use]
    pub const fn with_validation_timeout(mut self, timeout: Duration) -> Self {
        self.validation_timeout = timeout;
        self
    }

    /// Append a letter at the cursor
    ///
    /// Case-normalizes to uppercase. Returns `false` (no state change) if
    /// the row is full, the character is not an ASCII letter, or the game
    /// is not accepting input.
    pub fn append_letter(&mut self, letter: char) -> bool {
        if !matches!(self.phase, Phase::Entering) || !letter.is_ascii_alphabetic() {
            return false;
        }
        self.grid.push_letter(letter.to_ascii_uppercase())
    }

    /// Delete the letter before the cursor
    ///
    /// Returns `false` (no state change) at column 0 or when the game is
    /// not accepting input.
    pub fn delete_letter(&mut self) -> bool {
        if !matches!(self.phase, Phase::Entering) {
            return false;
        }
        self.grid.pop_letter()
    }

    /// Route a normalized key to the matching operation
    ///
    /// `Submit` must go through [`Self::submit_row`] because it suspends on
    /// the dictionary check; this handles the synchronous keys and returns
    /// `true` when the caller should submit instead.
    pub fn handle_key(&mut self, key: Key) -> bool {
        match key {
            Key::Letter(c) => {
                self.append_letter(c);
                false
            }
            Key::Delete => {
                self.delete_letter();
                false
            }
            Key::Submit => true,
        }
    }

    /// Submit the current row
    ///
    /// In order: rejects a short row, validates the word through the
    /// dictionary port (bounded by the configured timeout), then scores
    /// the row, updates keypad hints, and advances the cursor or resolves
    /// the game. Rejections leave the row intact for correction.
    pub async fn submit_row(&mut self) -> SubmitOutcome {
        if !matches!(self.phase, Phase::Entering) {
            return SubmitOutcome::Ignored;
        }
        let Some(word) = self.grid.current_word() else {
            debug!("submit rejected: row incomplete");
            return SubmitOutcome::NotEnoughLetters;
        };

        self.phase = Phase::Validating;
        let verdict = timeout(self.validation_timeout, self.validator.check(&word)).await;
        self.phase = Phase::Entering;

        match verdict {
            Err(_) => {
                warn!("dictionary check timed out after {:?}", self.validation_timeout);
                SubmitOutcome::ValidatorUnavailable
            }
            Ok(Err(e)) => {
                warn!("dictionary check failed: {e}");
                SubmitOutcome::ValidatorUnavailable
            }
            Ok(Ok(false)) => {
                debug!("submit rejected: {word} not in dictionary");
                SubmitOutcome::NotInDictionary
            }
            Ok(Ok(true)) => SubmitOutcome::Scored(self.score_row(&word)),
        }
    }

    fn score_row(&mut self, word: &Word) -> RowReport {
        let (row, _) = self.grid.cursor();
        let feedback = Feedback::score(word, &self.solution);

        // Keypad hints only ever upgrade: Absent < Present < Correct
        for (i, &score) in feedback.scores().iter().enumerate() {
            let hint = self
                .key_hints
                .entry(word.letter_at(i))
                .or_insert(LetterScore::Absent);
            if score > *hint {
                *hint = score;
            }
        }
        self.scored.push(feedback);

        let outcome = if feedback.is_win() {
            GameOutcome::Won { attempts: row + 1 }
        } else if row + 1 == MAX_GUESSES {
            GameOutcome::Lost
        } else {
            self.grid.advance_row();
            GameOutcome::InProgress
        };

        if outcome != GameOutcome::InProgress {
            debug!("game resolved on row {row}: {outcome:?}");
            self.phase = Phase::Resolved(outcome);
        }

        RowReport { row, feedback, outcome }
    }

    /// The hidden solution (revealed by the UI on a loss)
    #[must_use]
    pub const fn solution(&self) -> &Word {
        &self.solution
    }

    /// The guess grid and cursor
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Feedback for an already-scored row
    #[must_use]
    pub fn feedback_for(&self, row: usize) -> Option<Feedback> {
        self.scored.get(row).copied()
    }

    /// Best-known classification for a keypad letter
    #[must_use]
    pub fn key_hint(&self, letter: char) -> Option<LetterScore> {
        self.key_hints.get(&letter.to_ascii_uppercase()).copied()
    }

    /// Letters confirmed absent from the solution, in no particular order
    pub fn used_letters(&self) -> impl Iterator<Item = char> + '_ {
        self.key_hints
            .iter()
            .filter(|&(_, &score)| score == LetterScore::Absent)
            .map(|(&letter, _)| letter)
    }

    /// Current game outcome, derived from the phase
    #[must_use]
    pub const fn outcome(&self) -> GameOutcome {
        match self.phase {
            Phase::Resolved(outcome) => outcome,
            Phase::Entering | Phase::Validating => GameOutcome::InProgress,
        }
    }

    /// Whether the game has resolved to a win or loss
    #[must_use]
    pub const fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Resolved(_))
    }
}
