//! Terminal-condition detection for connect-four.

use parlor_engine::Status;
use tracing::instrument;

use crate::{COLS, Cell, Grid, ROWS, RUN, Token};

/// Scan directions as `(d_row, d_col)`: horizontal, vertical, ↘, ↙.
pub const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

fn window_owner(grid: &Grid, row: usize, col: usize, (dr, dc): (isize, isize)) -> Option<Token> {
    let Cell::Filled(token) = grid.get(row, col) else {
        return None;
    };
    for step in 1..RUN as isize {
        let r = row as isize + dr * step;
        let c = col as isize + dc * step;
        if r < 0 || c < 0 || r >= ROWS as isize || c >= COLS as isize {
            return None;
        }
        if grid.get(r as usize, c as usize) != Cell::Filled(token) {
            return None;
        }
    }
    Some(token)
}

/// Returns the token owning any four-cell window.
#[instrument(skip(grid))]
pub fn check_winner(grid: &Grid) -> Option<Token> {
    DIRECTIONS.iter().find_map(|dir| {
        (0..ROWS)
            .flat_map(|row| (0..COLS).map(move |col| (row, col)))
            .find_map(|(row, col)| window_owner(grid, row, col, *dir))
    })
}

/// True once the top row is full, which under gravity means every cell is.
pub fn is_full(grid: &Grid) -> bool {
    grid.rows()[0].iter().all(|c| *c != Cell::Empty)
}

/// Terminal-condition detector.
#[instrument(skip(grid))]
pub fn status(grid: &Grid) -> Status<Token> {
    if let Some(token) = check_winner(grid) {
        Status::Won(token)
    } else if is_full(grid) {
        Status::Tie
    } else {
        Status::Ongoing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_stack_in_top_rows() {
        let grid = Grid::from_rows([
            "..R....", "..R....", "..R....", "..R....", "..Y....", "..Y....",
        ]);
        assert_eq!(status(&grid), Status::Won(Token::Red));
    }

    #[test]
    fn test_horizontal() {
        let grid = Grid::from_rows([
            ".......", ".......", ".......", ".......", ".......", "...YYYY",
        ]);
        assert_eq!(check_winner(&grid), Some(Token::Yellow));
    }

    #[test]
    fn test_diagonal_down_right() {
        let grid = Grid::from_rows([
            ".......", ".......", "R......", "YR.....", "YYR....", "YYRR...",
        ]);
        assert_eq!(check_winner(&grid), Some(Token::Red));
    }

    #[test]
    fn test_diagonal_down_left() {
        let grid = Grid::from_rows([
            ".......", ".......", "......Y", ".....YR", "....YRR", "...YRRR",
        ]);
        assert_eq!(check_winner(&grid), Some(Token::Yellow));
    }

    #[test]
    fn test_three_is_not_enough() {
        let grid = Grid::from_rows([
            ".......", ".......", ".......", ".......", ".......", "RRR.YYY",
        ]);
        assert_eq!(status(&grid), Status::Ongoing);
    }

    #[test]
    fn test_full_grid_without_line_is_tie() {
        // Pairs of columns alternate so no run of four forms in any direction.
        let grid = Grid::from_rows([
            "RRYYRRY", "YYRRYYR", "RRYYRRY", "YYRRYYR", "RRYYRRY", "YYRRYYR",
        ]);
        assert_eq!(check_winner(&grid), None);
        assert_eq!(status(&grid), Status::Tie);
    }
}
