//! Connect-four: tokens fall to the lowest free cell of a column; four in a
//! row in any direction win.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bot;
mod game;
pub mod rules;
mod types;

pub use bot::{ConnectFourBot, choose_column, completing_column, random_column};
pub use game::{ConnectFourState, Landing};
pub use types::{COLS, Cell, Column, Grid, MoveError, ROWS, RUN, Token};
