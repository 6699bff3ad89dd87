//! Tic-tac-toe state and its turn-engine binding.

use parlor_engine::{Seat, Status, TurnGame};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{Board, Mark, MoveError, Position, Square, rules};

/// Board plus move history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicTacToeState {
    board: Board,
    history: Vec<Position>,
}

impl TicTacToeState {
    /// Creates an empty game.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an existing board.
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            history: Vec::new(),
        }
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Positions played so far, in order.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// The most recently played position.
    pub fn last_position(&self) -> Option<Position> {
        self.history.last().copied()
    }
}

impl TurnGame for TicTacToeState {
    type Move = Position;
    type Error = MoveError;
    const NAME: &'static str = "tictactoe";

    #[instrument(skip(self))]
    fn check(&self, _seat: Seat, mv: &Position) -> Result<(), MoveError> {
        if rules::status(&self.board).is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(*mv) {
            return Err(MoveError::SquareOccupied(*mv));
        }
        Ok(())
    }

    fn apply(&mut self, seat: Seat, mv: Position) {
        self.board.set(mv, Square::Occupied(Mark::for_seat(seat)));
        self.history.push(mv);
    }

    fn status(&self, _last_mover: Seat) -> Status<Seat> {
        rules::status(&self.board).map(Mark::seat)
    }
}
