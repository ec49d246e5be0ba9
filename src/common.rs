//! Common types: players and board errors.

use core::fmt;

/// One of the two players. `Cross` moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    Cross,
    Nought,
}

impl Player {
    /// Signed cell encoding: `Cross` is -1, `Nought` is +1.
    ///
    /// Opposite-sign unit values let a line be summed to detect a win,
    /// and make turn alternation a sign flip.
    pub const fn signum(self) -> i8 {
        match self {
            Player::Cross => -1,
            Player::Nought => 1,
        }
    }

    /// The other player.
    pub const fn opponent(self) -> Self {
        match self {
            Player::Cross => Player::Nought,
            Player::Nought => Player::Cross,
        }
    }

    /// Glyph used when rendering a cell owned by this player.
    pub const fn glyph(self) -> char {
        match self {
            Player::Cross => 'X',
            Player::Nought => 'O',
        }
    }

    /// Decode a signed cell value back to its owner, `None` for empty.
    pub const fn from_signum(value: i8) -> Option<Self> {
        match value {
            -1 => Some(Player::Cross),
            1 => Some(Player::Nought),
            _ => None,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Board construction was asked for a zero side length.
    InvalidSideLength,
    /// Move coordinates fall outside the grid.
    OutOfBounds,
    /// Target cell already holds a mark.
    CellOccupied,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidSideLength => write!(f, "Side length must be at least 1"),
            BoardError::OutOfBounds => write!(f, "Coordinates are outside the grid"),
            BoardError::CellOccupied => write!(f, "Cell already holds a mark"),
        }
    }
}
