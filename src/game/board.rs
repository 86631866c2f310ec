//! Board model
//!
//! A grid of rows x columns. Each cell holds at most one letter and, once
//! its row has been scored, a status. Scored rows are frozen.

use crate::core::{CellStatus, Feedback, Word};

/// One board cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    pub letter: Option<char>,
    pub status: Option<CellStatus>,
}

/// One guess row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    cells: Vec<Cell>,
    scored: bool,
}

impl Row {
    fn new(width: usize) -> Self {
        Self {
            cells: vec![Cell::default(); width],
            scored: false,
        }
    }

    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    #[must_use]
    pub const fn is_scored(&self) -> bool {
        self.scored
    }

    /// Letters typed so far, skipping empty cells
    #[must_use]
    pub fn text(&self) -> String {
        self.cells.iter().filter_map(|cell| cell.letter).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: Vec<Row>,
    width: usize,
}

impl Board {
    #[must_use]
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            rows: (0..height).map(|_| Row::new(width)).collect(),
            width,
        }
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[inline]
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Letter at a cell, if any
    #[must_use]
    pub fn letter(&self, row: usize, col: usize) -> Option<char> {
        self.rows.get(row)?.cells.get(col)?.letter
    }

    /// Write (or clear) the letter of an unscored cell
    ///
    /// Returns `false` if the cell does not exist or its row is frozen.
    pub fn set_letter(&mut self, row: usize, col: usize, letter: Option<char>) -> bool {
        match self.rows.get_mut(row) {
            Some(r) if !r.scored && col < r.cells.len() => {
                r.cells[col].letter = letter;
                true
            }
            _ => false,
        }
    }

    /// Write a scored guess into a row and freeze it
    ///
    /// Returns `false`, leaving the board untouched, if the row is missing
    /// or was already scored.
    pub fn score_row(&mut self, row: usize, guess: &Word, feedback: &Feedback) -> bool {
        let Some(r) = self.rows.get_mut(row) else {
            return false;
        };
        if r.scored {
            return false;
        }
        for ((cell, &letter), &status) in r
            .cells
            .iter_mut()
            .zip(guess.letters())
            .zip(feedback.statuses())
        {
            cell.letter = Some(letter);
            cell.status = Some(status);
        }
        r.scored = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(guess: &str, target: &str) -> (Word, Feedback) {
        let guess = Word::parse(guess).unwrap();
        let target = Word::parse(target).unwrap();
        let feedback = Feedback::calculate(&guess, &target);
        (guess, feedback)
    }

    #[test]
    fn board_starts_empty() {
        let board = Board::new(4, 7);
        assert_eq!(board.height(), 4);
        assert_eq!(board.width(), 7);
        for row in board.rows() {
            assert!(!row.is_scored());
            assert_eq!(row.text(), "");
            assert!(row.cells().iter().all(|c| *c == Cell::default()));
        }
    }

    #[test]
    fn set_letter_and_row_text_skips_gaps() {
        let mut board = Board::new(2, 5);
        assert!(board.set_letter(0, 0, Some('A')));
        assert!(board.set_letter(0, 2, Some('B')));
        assert_eq!(board.row(0).unwrap().text(), "AB");
        assert_eq!(board.letter(0, 2), Some('B'));
        assert_eq!(board.letter(0, 1), None);

        assert!(board.set_letter(0, 2, None));
        assert_eq!(board.row(0).unwrap().text(), "A");
    }

    #[test]
    fn set_letter_out_of_bounds() {
        let mut board = Board::new(2, 5);
        assert!(!board.set_letter(2, 0, Some('A')));
        assert!(!board.set_letter(0, 5, Some('A')));
        assert_eq!(board.letter(9, 9), None);
    }

    #[test]
    fn score_row_freezes_row() {
        let mut board = Board::new(2, 7);
        let (guess, feedback) = scored("anoraco", "cercano");

        assert!(board.score_row(0, &guess, &feedback));
        let row = board.row(0).unwrap();
        assert!(row.is_scored());
        assert_eq!(row.text(), "ANORACO");
        assert_eq!(row.cells()[4].status, Some(CellStatus::Correct));

        // Frozen: neither letters nor scores change again
        assert!(!board.set_letter(0, 0, Some('Z')));
        let (other, other_feedback) = scored("cercano", "cercano");
        assert!(!board.score_row(0, &other, &other_feedback));
        assert_eq!(board.row(0).unwrap().text(), "ANORACO");
    }

    #[test]
    fn score_row_replaces_typed_letters() {
        let mut board = Board::new(1, 7);
        board.set_letter(0, 0, Some('X'));
        let (guess, feedback) = scored("cercano", "cercano");
        assert!(board.score_row(0, &guess, &feedback));
        assert_eq!(board.letter(0, 0), Some('C'));
    }

    #[test]
    fn score_row_missing_row() {
        let mut board = Board::new(1, 7);
        let (guess, feedback) = scored("cercano", "cercano");
        assert!(!board.score_row(3, &guess, &feedback));
    }
}
