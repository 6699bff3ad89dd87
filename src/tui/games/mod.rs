//! Board drawing and keyboard input, one module per game.

pub mod connect_four;
pub mod guess;
pub mod nim;
pub mod tictactoe;
