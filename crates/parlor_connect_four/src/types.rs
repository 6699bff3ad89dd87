//! Grid, cells and tokens.

use parlor_engine::Seat;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of rows; row 0 is the top.
pub const ROWS: usize = 6;
/// Number of columns.
pub const COLS: usize = 7;
/// Tokens in a line needed to win.
pub const RUN: usize = 4;

/// A side's token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Token {
    /// Side A's token.
    Red,
    /// Side B's token.
    Yellow,
}

impl Token {
    /// Token dropped by a seat.
    pub fn for_seat(seat: Seat) -> Self {
        match seat {
            Seat::First => Token::Red,
            Seat::Second => Token::Yellow,
        }
    }

    /// Seat owning this token.
    pub fn seat(self) -> Seat {
        match self {
            Token::Red => Seat::First,
            Token::Yellow => Seat::Second,
        }
    }

    /// The other side's token.
    pub fn opponent(self) -> Self {
        match self {
            Token::Red => Token::Yellow,
            Token::Yellow => Token::Red,
        }
    }
}

/// One grid cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No token.
    #[default]
    Empty,
    /// Holds a token.
    Filled(Token),
}

/// A column index, 0-based; displayed 1-based.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("column {}", _0 + 1)]
pub struct Column(pub usize);

impl Column {
    /// All columns, left to right.
    pub fn all() -> impl Iterator<Item = Column> {
        (0..COLS).map(Column)
    }
}

/// 6×7 grid, row-major, row 0 at the top.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: [[Cell; COLS]; ROWS],
}

impl Grid {
    /// Creates an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a grid from six rows, top first: `'R'`/`'A'` for side A,
    /// `'Y'`/`'B'` for side B, anything else empty.
    pub fn from_rows(rows: [&str; ROWS]) -> Self {
        let mut grid = Self::new();
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().take(COLS).enumerate() {
                grid.cells[r][c] = match ch {
                    'R' | 'A' => Cell::Filled(Token::Red),
                    'Y' | 'B' => Cell::Filled(Token::Yellow),
                    _ => Cell::Empty,
                };
            }
        }
        grid
    }

    /// Cell at `(row, col)`; out-of-range coordinates read as empty.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or_default()
    }

    /// All rows, top first.
    pub fn rows(&self) -> &[[Cell; COLS]; ROWS] {
        &self.cells
    }

    /// Whether a token can still be dropped into `column`.
    pub fn is_open(&self, column: Column) -> bool {
        column.0 < COLS && self.cells[0][column.0] == Cell::Empty
    }

    /// Row a token dropped into `column` would land on.
    #[instrument(skip(self))]
    pub fn landing_row(&self, column: Column) -> Option<usize> {
        if column.0 >= COLS {
            return None;
        }
        (0..ROWS)
            .rev()
            .find(|row| self.cells[*row][column.0] == Cell::Empty)
    }

    /// Drops `token` into `column`; returns the row it landed on.
    pub fn drop_token(&mut self, column: Column, token: Token) -> Option<usize> {
        let row = self.landing_row(column)?;
        self.cells[row][column.0] = Cell::Filled(token);
        Some(row)
    }

    /// Columns that still accept a token.
    pub fn open_columns(&self) -> Vec<Column> {
        Column::all().filter(|c| self.is_open(*c)).collect()
    }
}

/// Error that can occur when validating a drop.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Column index outside the grid.
    #[display("There is no column {}", _0 + 1)]
    NoSuchColumn(usize),

    /// The column's top cell is taken.
    #[display("{} is full", _0)]
    ColumnFull(Column),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
