//! Score sink backed by the flat-file store.

use parlor_engine::{EngineError, PlayerIdentity, ScoreSink};
use tracing::{debug, instrument};

use crate::game_kind::GameKind;
use crate::scores::ScoreStore;

/// Writes one game's results to a [`ScoreStore`], leaving bots out.
pub struct FileScoreSink<'a> {
    store: &'a ScoreStore,
    game: GameKind,
    identity: &'a dyn PlayerIdentity,
}

impl<'a> FileScoreSink<'a> {
    /// Creates a sink for `game`.
    pub fn new(store: &'a ScoreStore, game: GameKind, identity: &'a dyn PlayerIdentity) -> Self {
        Self {
            store,
            game,
            identity,
        }
    }

    fn human<'n>(&self, name: &'n str) -> Option<&'n str> {
        if self.identity.is_bot(name) {
            debug!(name, "Skipping bot");
            None
        } else {
            Some(name)
        }
    }
}

impl ScoreSink for FileScoreSink<'_> {
    #[instrument(skip(self), fields(game = %self.game))]
    fn record_match(&mut self, winner: &str, loser: &str, tie: bool) -> Result<(), EngineError> {
        let (winner, loser) = (self.human(winner), self.human(loser));
        if winner.is_none() && loser.is_none() {
            return Ok(());
        }
        Ok(self.store.record_match(self.game, winner, loser, tie)?)
    }

    #[instrument(skip(self), fields(game = %self.game))]
    fn record_metric(&mut self, player: &str, score: f64) -> Result<(), EngineError> {
        match self.human(player) {
            Some(player) => Ok(self.store.record_metric(self.game, player, score)?),
            None => Ok(()),
        }
    }
}
