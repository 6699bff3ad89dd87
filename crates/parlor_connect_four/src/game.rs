//! Connect-four state and its turn-engine binding.

use parlor_engine::{Seat, Status, TurnGame};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{Column, Grid, MoveError, Token, rules};

/// Where the last token came to rest; drives the drop animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Landing {
    /// Column the token was dropped into.
    pub column: Column,
    /// Row it landed on.
    pub row: usize,
    /// The token itself.
    pub token: Token,
}

/// Grid plus the most recent landing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectFourState {
    grid: Grid,
    last: Option<Landing>,
    drops: u32,
}

impl ConnectFourState {
    /// Creates an empty game.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an existing grid.
    pub fn from_grid(grid: Grid) -> Self {
        Self {
            grid,
            last: None,
            drops: 0,
        }
    }

    /// The current grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The most recent landing, if any.
    pub fn last_landing(&self) -> Option<Landing> {
        self.last
    }

    /// Tokens dropped in this match.
    pub fn drops(&self) -> u32 {
        self.drops
    }
}

impl TurnGame for ConnectFourState {
    type Move = Column;
    type Error = MoveError;
    const NAME: &'static str = "connect_four";

    #[instrument(skip(self))]
    fn check(&self, _seat: Seat, mv: &Column) -> Result<(), MoveError> {
        if rules::status(&self.grid).is_over() {
            return Err(MoveError::GameOver);
        }
        if mv.0 >= crate::COLS {
            return Err(MoveError::NoSuchColumn(mv.0));
        }
        if !self.grid.is_open(*mv) {
            return Err(MoveError::ColumnFull(*mv));
        }
        Ok(())
    }

    fn apply(&mut self, seat: Seat, mv: Column) {
        let token = Token::for_seat(seat);
        if let Some(row) = self.grid.drop_token(mv, token) {
            debug!(column = mv.0, row, ?token, "Token landed");
            self.last = Some(Landing {
                column: mv,
                row,
                token,
            });
            self.drops += 1;
        }
    }

    fn status(&self, _last_mover: Seat) -> Status<Seat> {
        rules::status(&self.grid).map(Token::seat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_records_landing() {
        let mut game = ConnectFourState::new();
        game.apply(Seat::First, Column(3));
        game.apply(Seat::Second, Column(3));
        assert_eq!(
            game.last_landing(),
            Some(Landing {
                column: Column(3),
                row: 4,
                token: Token::Yellow
            })
        );
        assert_eq!(game.drops(), 2);
    }

    #[test]
    fn test_check_rejects_bad_columns() {
        let game = ConnectFourState::from_grid(Grid::from_rows([
            "R......", "Y......", "R......", "Y......", "R......", "Y......",
        ]));
        assert_eq!(
            game.check(Seat::First, &Column(0)),
            Err(MoveError::ColumnFull(Column(0)))
        );
        assert_eq!(
            game.check(Seat::First, &Column(7)),
            Err(MoveError::NoSuchColumn(7))
        );
        assert!(game.check(Seat::First, &Column(6)).is_ok());
    }
}
