//! Connect-four bot: one-ply complete-or-block, else random.

use parlor_engine::{EngineError, MoveSource, Policy, Seat, Tier};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{info, instrument};

use crate::{Column, ConnectFourState, Grid, Token, rules};

/// First column (left to right) where dropping `token` wins at once.
#[instrument(skip(grid))]
pub fn completing_column(grid: &Grid, token: Token) -> Option<Column> {
    grid.open_columns().into_iter().find(|column| {
        let mut trial = grid.clone();
        trial.drop_token(*column, token).is_some() && rules::check_winner(&trial) == Some(token)
    })
}

/// A uniformly random open column.
pub fn random_column<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Option<Column> {
    grid.open_columns().choose(rng).copied()
}

/// Picks a column for `token` under the given policy.
pub fn choose_column<R: Rng + ?Sized>(
    grid: &Grid,
    token: Token,
    policy: Policy,
    rng: &mut R,
) -> Option<Column> {
    match policy {
        Policy::Random => random_column(grid, rng),
        Policy::Strategic => completing_column(grid, token)
            .or_else(|| completing_column(grid, token.opponent()))
            .or_else(|| random_column(grid, rng)),
    }
}

/// In-process connect-four bot.
#[derive(Debug)]
pub struct ConnectFourBot {
    tier: Tier,
    rng: StdRng,
}

impl ConnectFourBot {
    /// Creates a bot with an entropy-seeded RNG.
    #[instrument]
    pub fn new(tier: Tier) -> Self {
        Self {
            tier,
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a bot with a seeded RNG.
    #[instrument]
    pub fn with_seed(tier: Tier, seed: u64) -> Self {
        Self {
            tier,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The bot's tier.
    pub fn tier(&self) -> Tier {
        self.tier
    }
}

impl MoveSource<ConnectFourState> for ConnectFourBot {
    fn get_move(&mut self, game: &ConnectFourState, seat: Seat) -> Result<Column, EngineError> {
        let policy = self.tier.policy(&mut self.rng);
        let column = choose_column(game.grid(), Token::for_seat(seat), policy, &mut self.rng)
            .ok_or(EngineError::NoLegalMove { seat })?;
        info!(%seat, tier = %self.tier, %column, "Bot move");
        Ok(column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completes_vertical() {
        let grid = Grid::from_rows([
            ".......", ".......", ".......", "...R...", "...R...", "...R...",
        ]);
        assert_eq!(completing_column(&grid, Token::Red), Some(Column(3)));
        assert_eq!(completing_column(&grid, Token::Yellow), None);
    }

    #[test]
    fn test_no_open_column_on_full_grid() {
        let grid = Grid::from_rows([
            "RRYYRRY", "YYRRYYR", "RRYYRRY", "YYRRYYR", "RRYYRRY", "YYRRYYR",
        ]);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(random_column(&grid, &mut rng), None);
    }
}
