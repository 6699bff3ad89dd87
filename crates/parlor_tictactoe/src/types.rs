//! Core domain types for tic-tac-toe.

use parlor_engine::Seat;
use serde::{Deserialize, Serialize};

use crate::Position;

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Cross, played by side A (moves first).
    X,
    /// Nought, played by side B.
    O,
}

impl Mark {
    /// Returns the opponent's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// The mark played by a seat.
    pub fn for_seat(seat: Seat) -> Self {
        match seat {
            Seat::First => Mark::X,
            Seat::Second => Mark::O,
        }
    }

    /// The seat playing this mark.
    pub fn seat(self) -> Seat {
        match self {
            Mark::X => Seat::First,
            Mark::O => Seat::Second,
        }
    }

    /// Symbol drawn on the board.
    pub fn symbol(self) -> char {
        match self {
            Mark::X => '×',
            Mark::O => '○',
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from rows of `'X'`, `'O'` and anything else for empty.
    pub fn from_rows(rows: [&str; 3]) -> Self {
        let mut board = Self::new();
        for (row, line) in rows.iter().enumerate() {
            for (col, c) in line.chars().take(3).enumerate() {
                let square = match c {
                    'X' | 'x' => Square::Occupied(Mark::X),
                    'O' | 'o' => Square::Occupied(Mark::O),
                    _ => Square::Empty,
                };
                board.squares[row * 3 + col] = square;
            }
        }
        board
    }

    /// Gets the square at a position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at a position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => ' ',
                    Square::Occupied(mark) => mark.symbol(),
                };
                result.push(' ');
                result.push(symbol);
                result.push(' ');
                if col < 2 {
                    result.push('│');
                }
            }
            if row < 2 {
                result.push_str("\n───┼───┼───\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Error that can occur when validating a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("{} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
