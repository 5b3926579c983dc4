//! Guess grid and cursor
//!
//! Six rows of five cells, each holding an uppercase letter or nothing,
//! plus the (row, col) write position for the next letter. All access is
//! by index; the grid never resizes.

use crate::core::{MAX_GUESSES, WORD_LEN, Word};

/// The 6×5 board of guessed letters with its write cursor
///
/// Invariants: `row < MAX_GUESSES`, `col <= WORD_LEN`, and `col` resets to
/// 0 whenever `row` advances. Cells at or past the cursor in the current
/// row are empty.
#[derive(Debug, Clone)]
pub struct Grid {
    cells: [[Option<char>; WORD_LEN]; MAX_GUESSES],
    row: usize,
    col: usize,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// An empty grid with the cursor at (0, 0)
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [[None; WORD_LEN]; MAX_GUESSES],
            row: 0,
            col: 0,
        }
    }

    /// Write a letter at the cursor and advance it
    ///
    /// Returns `false` (no state change) if the current row is full.
    /// The letter must already be an uppercase ASCII letter.
    pub fn push_letter(&mut self, letter: char) -> bool {
        debug_assert!(letter.is_ascii_uppercase());
        if self.col >= WORD_LEN {
            return false;
        }
        self.cells[self.row][self.col] = Some(letter);
        self.col += 1;
        true
    }

    /// Clear the cell before the cursor and step back
    ///
    /// Returns `false` (no state change) at column 0.
    pub fn pop_letter(&mut self) -> bool {
        if self.col == 0 {
            return false;
        }
        self.col -= 1;
        self.cells[self.row][self.col] = None;
        true
    }

    /// Move to the next row, resetting the column to 0
    ///
    /// Returns `false` if the last row was already active.
    pub fn advance_row(&mut self) -> bool {
        if self.row + 1 >= MAX_GUESSES {
            return false;
        }
        self.row += 1;
        self.col = 0;
        true
    }

    /// The current row's letters assembled into a `Word`, if complete
    #[must_use]
    pub fn current_word(&self) -> Option<Word> {
        Word::from_letters(self.cells[self.row])
    }

    /// Whether the current row holds all five letters
    #[inline]
    #[must_use]
    pub const fn row_full(&self) -> bool {
        self.col == WORD_LEN
    }

    /// The letter at (row, col), if any
    ///
    /// # Panics
    /// Panics if the indices are out of range.
    #[inline]
    #[must_use]
    pub const fn cell(&self, row: usize, col: usize) -> Option<char> {
        self.cells[row][col]
    }

    /// The cursor as (row, col)
    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty_at_origin() {
        let grid = Grid::new();
        assert_eq!(grid.cursor(), (0, 0));
        for row in 0..MAX_GUESSES {
            for col in 0..WORD_LEN {
                assert_eq!(grid.cell(row, col), None);
            }
        }
    }

    #[test]
    fn push_advances_cursor_until_full() {
        let mut grid = Grid::new();
        for (i, letter) in "HELLO".chars().enumerate() {
            assert!(grid.push_letter(letter));
            assert_eq!(grid.cursor(), (0, i + 1));
        }
        assert!(grid.row_full());

        // Sixth letter in a row is refused
        assert!(!grid.push_letter('X'));
        assert_eq!(grid.cursor(), (0, WORD_LEN));
    }

    #[test]
    fn pop_steps_back_and_clears() {
        let mut grid = Grid::new();
        grid.push_letter('A');
        grid.push_letter('B');

        assert!(grid.pop_letter());
        assert_eq!(grid.cursor(), (0, 1));
        assert_eq!(grid.cell(0, 1), None);
        assert_eq!(grid.cell(0, 0), Some('A'));

        assert!(grid.pop_letter());
        assert!(!grid.pop_letter()); // at column 0
        assert_eq!(grid.cursor(), (0, 0));
    }

    #[test]
    fn current_word_requires_full_row() {
        let mut grid = Grid::new();
        for letter in "HELL".chars() {
            grid.push_letter(letter);
        }
        assert!(grid.current_word().is_none());

        grid.push_letter('O');
        assert_eq!(grid.current_word().unwrap().text(), "HELLO");
    }

    #[test]
    fn advance_row_resets_column() {
        let mut grid = Grid::new();
        for letter in "HELLO".chars() {
            grid.push_letter(letter);
        }
        assert!(grid.advance_row());
        assert_eq!(grid.cursor(), (1, 0));
        // Previous row's letters stay put
        assert_eq!(grid.cell(0, 0), Some('H'));
    }

    #[test]
    fn advance_row_stops_at_last_row() {
        let mut grid = Grid::new();
        for _ in 0..MAX_GUESSES - 1 {
            assert!(grid.advance_row());
        }
        assert!(!grid.advance_row());
        assert_eq!(grid.cursor(), (MAX_GUESSES - 1, 0));
    }
}
