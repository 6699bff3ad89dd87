//! Session controller: runs one full match.

use tracing::{debug, info, instrument, warn};

use crate::{
    Annotations, EngineError, Identity, MoveSource, Outcome, PlayerIdentity, Renderer,
    ScoreSink, Scoring, Seat, TurnGame,
};

/// Consecutive illegal moves tolerated from one source before giving up.
pub const MAX_ILLEGAL_ATTEMPTS: u32 = 32;

/// Result of a finished match.
#[derive(Debug, Clone)]
pub struct MatchReport<G> {
    outcome: Outcome,
    scoring: Scoring,
    turns: u32,
    game: G,
}

impl<G> MatchReport<G> {
    /// Who won.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// What the match contributes to the score store.
    pub fn scoring(&self) -> &Scoring {
        &self.scoring
    }

    /// Number of moves applied.
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// The final state.
    pub fn game(&self) -> &G {
        &self.game
    }
}

/// Drives one match: alternates seats, validates and applies moves, and
/// stops once the detector reports a result.
pub struct Session<'a, G: TurnGame> {
    game: G,
    sides: [Identity; 2],
    sources: [Box<dyn MoveSource<G> + 'a>; 2],
    active: Seat,
    waiting: Seat,
    turns: u32,
}

impl<'a, G: TurnGame> Session<'a, G> {
    /// Creates a session; `sides` and `sources` are indexed by seat.
    #[instrument(skip_all, fields(game = G::NAME))]
    pub fn new(
        game: G,
        sides: [Identity; 2],
        sources: [Box<dyn MoveSource<G> + 'a>; 2],
    ) -> Self {
        let active = game.opening_seat();
        info!(
            side_a = %sides[0].display_name(),
            side_b = %sides[1].display_name(),
            opening = %active,
            "Creating session"
        );
        Self {
            game,
            sides,
            sources,
            active,
            waiting: active.opponent(),
            turns: 0,
        }
    }

    /// The seat about to move.
    pub fn active(&self) -> Seat {
        self.active
    }

    /// The seat waiting for its turn.
    pub fn waiting(&self) -> Seat {
        self.waiting
    }

    /// The current state.
    pub fn game(&self) -> &G {
        &self.game
    }

    /// Plays the match to its end.
    ///
    /// # Errors
    ///
    /// Fails when a move source aborts (e.g. the player interrupted input),
    /// when a source exceeds [`MAX_ILLEGAL_ATTEMPTS`], or when rendering
    /// fails. Nothing is reported to the score store in those cases.
    #[instrument(skip_all, fields(game = G::NAME))]
    pub fn run(mut self, renderer: &mut dyn Renderer<G>) -> Result<MatchReport<G>, EngineError> {
        info!("Match started");
        renderer.render(&self.game, &self.annotations(None))?;

        loop {
            let seat = self.active;
            let mv = self.next_legal_move(seat)?;
            let description = mv.to_string();
            debug!(%seat, mv = %description, "Applying move");

            self.game.apply(seat, mv);
            self.turns += 1;

            let status = self.game.status(seat);
            let finished = Outcome::from_status(status);
            renderer.render(&self.game, &self.annotations(Some(description)))?;

            if let Some(outcome) = finished {
                let scoring = self.game.scoring(&outcome);
                info!(?outcome, turns = self.turns, "Match finished");
                return Ok(MatchReport {
                    outcome,
                    scoring,
                    turns: self.turns,
                    game: self.game,
                });
            }

            self.advance();
        }
    }

    /// Swaps the active and waiting seats after a confirmed turn.
    fn advance(&mut self) {
        std::mem::swap(&mut self.active, &mut self.waiting);
    }

    /// Asks the seat's source for moves until one passes the legality check.
    fn next_legal_move(&mut self, seat: Seat) -> Result<G::Move, EngineError> {
        for attempt in 1..=MAX_ILLEGAL_ATTEMPTS {
            let mv = self.sources[seat.index()].get_move(&self.game, seat)?;
            match self.game.check(seat, &mv) {
                Ok(()) => return Ok(mv),
                Err(e) => {
                    warn!(%seat, attempt, mv = %mv, error = %e, "Rejected illegal move");
                    self.sources[seat.index()].rejected(&e);
                }
            }
        }
        Err(EngineError::IllegalMoveLimit {
            seat,
            attempts: MAX_ILLEGAL_ATTEMPTS,
        })
    }

    fn annotations(&self, last_move: Option<String>) -> Annotations {
        // After a move the mover is still `active` until `advance` runs.
        Annotations::new(
            self.sides[self.active.index()].display_name(),
            self.sides[self.waiting.index()].display_name(),
            last_move,
            self.sides[self.active.index()].is_bot(),
            self.turns,
        )
    }
}

/// Score reporting adapter: translates a match result into score sink calls.
///
/// Matches between two bots and metrics earned by bots are not recorded.
#[instrument(skip(identity, sink))]
pub fn report(
    scoring: &Scoring,
    names: [&str; 2],
    identity: &dyn PlayerIdentity,
    sink: &mut dyn ScoreSink,
) -> Result<(), EngineError> {
    match *scoring {
        Scoring::Match { winner, loser, tie } => {
            let (winner, loser) = (names[winner.index()], names[loser.index()]);
            if identity.is_bot(winner) && identity.is_bot(loser) {
                debug!("Bot-only match, nothing to record");
                return Ok(());
            }
            info!(winner, loser, tie, "Recording match");
            sink.record_match(winner, loser, tie)
        }
        Scoring::Metric { seat, score } => {
            let player = names[seat.index()];
            if identity.is_bot(player) {
                debug!(player, "Bot metric, nothing to record");
                return Ok(());
            }
            info!(player, score, "Recording metric");
            sink.record_metric(player, score)
        }
    }
}
