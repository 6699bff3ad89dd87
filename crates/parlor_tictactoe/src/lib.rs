//! Tic-tac-toe: a 3×3 grid, three identical marks in a line win.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bot;
mod game;
mod position;
pub mod rules;
mod types;

pub use bot::{TicTacToeBot, choose_cell, completing_cell, random_cell};
pub use game::TicTacToeState;
pub use position::Position;
pub use types::{Board, Mark, MoveError, Square};
