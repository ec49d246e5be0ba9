use crate::board::Board;
use crate::common::{BoardError, Player};

/// Current status of a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Waiting on the current player's move.
    InProgress,
    /// A player owns a full line.
    Won(Player),
    /// The board is full with no winner.
    Drawn,
}

/// Caller-owned game session: a board plus turn tracking.
///
/// The board itself never tracks turns. This object flips the acting
/// player after each successful move, checks for a winner only after a
/// successful application, and stops accepting moves once the game is
/// over.
#[derive(Debug)]
pub struct Game {
    board: Board,
    current: Player,
    status: GameStatus,
}

impl Game {
    /// Start a session on an empty board. `Cross` moves first.
    pub fn new(side_length: usize) -> Result<Self, BoardError> {
        Ok(Game {
            board: Board::new(side_length)?,
            current: Player::Cross,
            status: GameStatus::InProgress,
        })
    }

    /// Immutable view of the board for rendering or inspection.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose move is expected next.
    pub fn current_player(&self) -> Player {
        self.current
    }

    /// Evaluate the session status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Apply the current player's move at (row, col).
    ///
    /// A rejected move leaves both the board and the turn untouched.
    /// Once the status is terminal, further calls are no-ops that return
    /// the terminal status.
    pub fn play(&mut self, row: usize, col: usize) -> Result<GameStatus, BoardError> {
        if self.status != GameStatus::InProgress {
            return Ok(self.status);
        }
        self.board.apply_move(self.current, row, col)?;
        if let Some(winner) = self.board.winner() {
            self.status = GameStatus::Won(winner);
        } else if self.board.is_full() {
            self.status = GameStatus::Drawn;
        } else {
            self.current = self.current.opponent();
        }
        Ok(self.status)
    }
}
