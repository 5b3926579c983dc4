//! Guess feedback scoring
//!
//! After each submitted guess every position is classified against the
//! solution as `Correct` (right letter, right spot), `Present` (in the
//! solution, wrong spot) or `Absent`. Duplicate letters follow Wordle's
//! rules: a guessed letter is never credited more times than it occurs in
//! the solution.

use super::{WORD_LEN, Word};

/// Classification of a single guessed letter
///
/// Ordered so that a later guess can only upgrade a keypad hint:
/// `Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterScore {
    /// Letter does not appear in the solution (or all copies are used up)
    Absent,
    /// Letter appears in the solution, but at a different position
    Present,
    /// Letter is at exactly this position in the solution
    Correct,
}

/// Per-letter feedback for one submitted row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    scores: [LetterScore; WORD_LEN],
}

impl Feedback {
    /// All positions correct (a winning row)
    pub const WIN: Self = Self {
        scores: [LetterScore::Correct; WORD_LEN],
    };

    /// Score `guess` against `solution`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact position matches `Correct` and consume
    ///    that letter from the solution's remaining counts.
    /// 2. Second pass, left to right over unmarked positions: mark
    ///    `Present` while the letter's remaining count is positive
    ///    (consuming one per credit), otherwise `Absent`.
    ///
    /// The consume-on-match order is what makes duplicates come out right:
    /// excess guessed copies beyond the solution's count score `Absent`.
    ///
    /// # Examples
    /// ```
    /// use worldle::core::{Feedback, LetterScore::*, Word};
    ///
    /// let guess = Word::new("erase").unwrap();
    /// let solution = Word::new("speed").unwrap();
    /// let fb = Feedback::score(&guess, &solution);
    ///
    /// // Only two E credits exist in SPEED
    /// assert_eq!(fb.scores(), &[Present, Absent, Absent, Present, Present]);
    /// ```
    #[must_use]
    pub fn score(guess: &Word, solution: &Word) -> Self {
        let mut scores = [LetterScore::Absent; WORD_LEN];
        let mut remaining = solution.letter_counts();

        // First pass: exact position matches
        for i in 0..WORD_LEN {
            if guess.letters()[i] == solution.letters()[i] {
                scores[i] = LetterScore::Correct;
                if let Some(count) = remaining.get_mut(&guess.letters()[i]) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: misplaced letters, while credits remain
        for i in 0..WORD_LEN {
            if scores[i] == LetterScore::Correct {
                continue;
            }
            if let Some(count) = remaining.get_mut(&guess.letters()[i])
                && *count > 0
            {
                scores[i] = LetterScore::Present;
                *count -= 1;
            }
        }

        Self { scores }
    }

    /// The five per-position scores, left to right
    #[inline]
    #[must_use]
    pub const fn scores(&self) -> &[LetterScore; WORD_LEN] {
        &self.scores
    }

    /// Whether every position is `Correct`
    #[inline]
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.scores == [LetterScore::Correct; WORD_LEN]
    }
}
