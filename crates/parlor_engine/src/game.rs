//! The contract every game and every collaborator implements.

use std::fmt;

use derive_getters::Getters;
use tracing::{debug, instrument};

use crate::{EngineError, Outcome, Scoring, Seat, Status};

/// A two-seat, strictly alternating game.
///
/// The state is owned by the [`Session`](crate::Session) running the match;
/// nothing is shared across matches.
pub trait TurnGame {
    /// A single move.
    type Move: Clone + fmt::Debug + fmt::Display;

    /// Why a move is illegal.
    type Error: std::error::Error;

    /// Scoreboard name of the game.
    const NAME: &'static str;

    /// The seat that makes the first move.
    fn opening_seat(&self) -> Seat {
        Seat::First
    }

    /// Legality predicate: may `seat` play `mv` in the current state?
    fn check(&self, seat: Seat, mv: &Self::Move) -> Result<(), Self::Error>;

    /// Applies a move that has passed [`TurnGame::check`].
    fn apply(&mut self, seat: Seat, mv: Self::Move);

    /// Terminal-condition detector, in terms of seats.
    ///
    /// `last_mover` is the seat whose move was just applied; games where the
    /// last mover loses need it.
    fn status(&self, last_mover: Seat) -> Status<Seat>;

    /// What the outcome contributes to the score store.
    fn scoring(&self, outcome: &Outcome) -> Scoring {
        Scoring::from_outcome(outcome)
    }
}

/// Supplies moves for one seat.
///
/// Human sources block on the input collaborator; bot sources compute the
/// move synchronously.
pub trait MoveSource<G: TurnGame> {
    /// Produces the next move for `seat`.
    fn get_move(&mut self, game: &G, seat: Seat) -> Result<G::Move, EngineError>;

    /// Called when the session rejected the last move from this source.
    fn rejected(&mut self, _error: &G::Error) {}
}

/// Context shown alongside the state on every render.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters)]
pub struct Annotations {
    /// Display name of the seat about to move (or who just moved on the
    /// final render).
    active: String,
    /// Display name of the other seat.
    waiting: String,
    /// Human-readable description of the move just applied.
    last_move: Option<String>,
    /// True when the move just applied came from a bot.
    by_bot: bool,
    /// Number of moves applied so far.
    turn: u32,
}

impl Annotations {
    /// Creates annotations for a render call.
    pub fn new(
        active: String,
        waiting: String,
        last_move: Option<String>,
        by_bot: bool,
        turn: u32,
    ) -> Self {
        Self {
            active,
            waiting,
            last_move,
            by_bot,
            turn,
        }
    }
}

/// Side-effect-only presentation of the state.
///
/// The engine never reads anything back from a renderer.
pub trait Renderer<G: TurnGame> {
    /// Presents the current state.
    fn render(&mut self, game: &G, annotations: &Annotations) -> Result<(), EngineError>;
}

/// Renderer for headless runs: logs every state at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TraceRenderer;

impl<G: TurnGame + fmt::Debug> Renderer<G> for TraceRenderer {
    #[instrument(skip_all, fields(game = G::NAME, turn = annotations.turn))]
    fn render(&mut self, game: &G, annotations: &Annotations) -> Result<(), EngineError> {
        debug!(state = ?game, last_move = ?annotations.last_move, "Rendered state");
        Ok(())
    }
}

/// Persistent score storage.
///
/// Both calls are no-ops for bot-identified names.
pub trait ScoreSink {
    /// Records a win/tie game result.
    fn record_match(&mut self, winner: &str, loser: &str, tie: bool) -> Result<(), EngineError>;

    /// Records an efficiency metric (lower is better).
    fn record_metric(&mut self, player: &str, score: f64) -> Result<(), EngineError>;
}
