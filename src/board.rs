//! Game board state and rules: move legality and line-sum win detection.

use crate::common::{BoardError, Player};
use crate::config::EMPTY_GLYPH;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

/// An `n × n` grid of signed cell values.
///
/// Cells hold `0` (empty) or a player's [`Player::signum`]. Because the
/// players are opposite-sign unit values, the absolute value of a line's
/// sum equals the side length exactly when one player owns every cell in
/// that line, which is what the win check relies on.
#[derive(Debug)]
pub struct Board {
    side_length: usize,
    cells: Vec<i8>,
}

impl Board {
    /// Create an all-empty board.
    ///
    /// Fails with [`BoardError::InvalidSideLength`] for a zero side
    /// length.
    pub fn new(side_length: usize) -> Result<Self, BoardError> {
        if side_length == 0 {
            return Err(BoardError::InvalidSideLength);
        }
        Ok(Board {
            side_length,
            cells: vec![0; side_length * side_length],
        })
    }

    /// The grid's row and column count.
    pub fn side_length(&self) -> usize {
        self.side_length
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, BoardError> {
        if row >= self.side_length || col >= self.side_length {
            return Err(BoardError::OutOfBounds);
        }
        Ok(row * self.side_length + col)
    }

    /// Owner of the cell at (row, col), or `None` when empty.
    pub fn cell(&self, row: usize, col: usize) -> Result<Option<Player>, BoardError> {
        let idx = self.index(row, col)?;
        Ok(Player::from_signum(self.cells[idx]))
    }

    /// Returns `true` when no empty cells remain.
    ///
    /// [`Board::winner`] never reports a draw; callers that want draw
    /// handling combine this with an empty winner result.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&v| v != 0)
    }

    /// Claim the cell at (row, col) for `player`.
    ///
    /// Fails with [`BoardError::OutOfBounds`] or
    /// [`BoardError::CellOccupied`] without touching any state. A claimed
    /// cell never changes again; turn alternation is the caller's
    /// responsibility.
    pub fn apply_move(&mut self, player: Player, row: usize, col: usize) -> Result<(), BoardError> {
        let idx = self.index(row, col)?;
        if self.cells[idx] != 0 {
            return Err(BoardError::CellOccupied);
        }
        self.cells[idx] = player.signum();
        Ok(())
    }

    /// Scan for a line fully owned by one player.
    ///
    /// Rows are checked first, then columns, both in index order, then
    /// the two full diagonals. A line is won when the absolute value of
    /// its sum reaches the side length; for rows and columns the owner is
    /// read from the line's first cell, for diagonals from the board's
    /// center cell, which lies on both diagonals for odd side lengths.
    /// Read-only; never reports a draw.
    pub fn winner(&self) -> Option<Player> {
        let n = self.side_length;
        for row in 0..n {
            let sum: i32 = (0..n).map(|col| i32::from(self.cells[row * n + col])).sum();
            if sum.unsigned_abs() as usize == n {
                return Player::from_signum(self.cells[row * n]);
            }
        }
        for col in 0..n {
            let sum: i32 = (0..n).map(|row| i32::from(self.cells[row * n + col])).sum();
            if sum.unsigned_abs() as usize == n {
                return Player::from_signum(self.cells[col]);
            }
        }
        let main: i32 = (0..n).map(|i| i32::from(self.cells[i * n + i])).sum();
        let anti: i32 = (0..n)
            .map(|i| i32::from(self.cells[(n - 1 - i) * n + i]))
            .sum();
        if main.unsigned_abs() as usize == n || anti.unsigned_abs() as usize == n {
            let mid = n / 2;
            return Player::from_signum(self.cells[mid * n + mid]);
        }
        None
    }
}

impl fmt::Display for Board {
    /// Textual grid with row labels on the right and column labels below.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.side_length;
        writeln!(f, "Board:")?;
        for row in 0..n {
            write!(f, "|")?;
            for col in 0..n {
                match Player::from_signum(self.cells[row * n + col]) {
                    Some(p) => write!(f, "{}|", p.glyph())?,
                    None => write!(f, "{}|", EMPTY_GLYPH)?,
                }
            }
            writeln!(f, "{}", row)?;
        }
        write!(f, " ")?;
        for col in 0..n {
            if col > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", col)?;
        }
        Ok(())
    }
}
