//! Tic-tac-toe bot strategies.

use parlor_engine::{EngineError, MoveSource, Policy, Seat, Tier};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{info, instrument};

use crate::rules::LINES;
use crate::{Board, Mark, Position, Square, TicTacToeState};

/// Finds a line holding two of `mark` and one empty square.
///
/// Lines are scanned in detection order; the empty square of the first
/// match is returned.
#[instrument(skip(board))]
pub fn completing_cell(board: &Board, mark: Mark) -> Option<Position> {
    LINES.iter().find_map(|line| {
        let own = line
            .iter()
            .filter(|p| board.get(**p) == Square::Occupied(mark))
            .count();
        let empty: Vec<Position> = line.iter().copied().filter(|p| board.is_empty(*p)).collect();
        match (own, empty.as_slice()) {
            (2, [cell]) => Some(*cell),
            _ => None,
        }
    })
}

/// A uniformly random empty square.
pub fn random_cell<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
    Position::valid_moves(board).choose(rng).copied()
}

/// Picks a square for `mark` under the given policy.
///
/// Strategic play completes its own line, else blocks the opponent's,
/// else plays randomly.
pub fn choose_cell<R: Rng + ?Sized>(
    board: &Board,
    mark: Mark,
    policy: Policy,
    rng: &mut R,
) -> Option<Position> {
    match policy {
        Policy::Random => random_cell(board, rng),
        Policy::Strategic => completing_cell(board, mark)
            .or_else(|| completing_cell(board, mark.opponent()))
            .or_else(|| random_cell(board, rng)),
    }
}

/// In-process tic-tac-toe bot.
#[derive(Debug)]
pub struct TicTacToeBot {
    tier: Tier,
    rng: StdRng,
}

impl TicTacToeBot {
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

impl MoveSource<TicTacToeState> for TicTacToeBot {
    fn get_move(&mut self, game: &TicTacToeState, seat: Seat) -> Result<Position, EngineError> {
        let policy = self.tier.policy(&mut self.rng);
        let cell = choose_cell(game.board(), Mark::for_seat(seat), policy, &mut self.rng)
            .ok_or(EngineError::NoLegalMove { seat })?;
        info!(%seat, tier = %self.tier, %cell, "Bot move");
        Ok(cell)
    }
}
