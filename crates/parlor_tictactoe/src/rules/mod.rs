//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board); rules are kept apart from
//! board storage so bots and the detector share them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner};

use parlor_engine::Status;
use tracing::instrument;

use crate::{Board, Mark};

/// Terminal-condition detector.
///
/// Lines are checked first (rows, columns, diagonals); a tie is declared
/// only when every square is filled and no line matched.
#[instrument(skip(board))]
pub fn status(board: &Board) -> Status<Mark> {
    if let Some(mark) = check_winner(board) {
        Status::Won(mark)
    } else if is_full(board) {
        Status::Tie
    } else {
        Status::Ongoing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_win() {
        let board = Board::from_rows(["XXX", "OO.", "..."]);
        assert_eq!(status(&board), Status::Won(Mark::X));
    }

    #[test]
    fn test_full_board_without_line_is_tie() {
        let board = Board::from_rows(["XOX", "XOO", "OXX"]);
        assert_eq!(status(&board), Status::Tie);
    }

    #[test]
    fn test_win_on_last_square_beats_tie() {
        let board = Board::from_rows(["XOX", "OXO", "OXX"]);
        assert_eq!(status(&board), Status::Won(Mark::X));
    }

    #[test]
    fn test_partial_board_ongoing() {
        let board = Board::from_rows(["XO.", "...", "..."]);
        assert_eq!(status(&board), Status::Ongoing);
    }
}
