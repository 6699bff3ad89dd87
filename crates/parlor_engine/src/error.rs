//! Engine error types.

use derive_more::{Display, Error};
use tracing::instrument;

use crate::Seat;

/// Failure while running a match.
///
/// Illegal moves are not errors: the session re-prompts the move source
/// instead. These variants cover the few ways a match can stop early.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum EngineError {
    /// The player aborted input (e.g. Ctrl-C in the terminal).
    #[display("Input aborted by the player")]
    Interrupted,

    /// The input or output collaborator failed.
    #[display("Terminal I/O failed: {}", _0)]
    Input(String),

    /// A move source kept handing back illegal moves.
    #[display("{} produced {} illegal moves in a row", seat, attempts)]
    IllegalMoveLimit {
        /// The seat whose source misbehaved.
        seat: Seat,
        /// How many consecutive illegal moves were rejected.
        attempts: u32,
    },

    /// A bot was asked to move in a position without legal moves.
    #[display("{} has no legal move", seat)]
    NoLegalMove {
        /// The seat that could not move.
        seat: Seat,
    },

    /// A match could not be set up (bad starting parameters or players).
    #[display("Invalid match setup: {}", _0)]
    Setup(String),

    /// The score sink could not persist a result.
    #[display("Score store failed: {}", _0)]
    Score(String),
}

impl std::error::Error for EngineError {}

impl From<RosterError> for EngineError {
    fn from(err: RosterError) -> Self {
        Self::Setup(err.message)
    }
}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        Self::Input(err.to_string())
    }
}

/// Roster error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Roster error: {} at {}:{}", message, file, line)]
pub struct RosterError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl RosterError {
    /// Creates a new roster error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
