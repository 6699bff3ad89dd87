//! Match glue shared by the terminal UI and headless simulation.

use std::fmt;

use derive_getters::Getters;
use parlor_connect_four::{ConnectFourBot, ConnectFourState};
use parlor_engine::{
    EngineError, Identity, MatchReport, MoveSource, Outcome, PlayerIdentity, Roster, ScoreSink,
    Scoring, Seat, Session, Tier, TraceRenderer, TurnGame, report,
};
use parlor_guess::{GuessBot, GuessState, efficiency};
use parlor_nim::{NimBot, NimState};
use parlor_tictactoe::{TicTacToeBot, TicTacToeState};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::{info, instrument};

use crate::game_kind::GameKind;
use crate::scores::{FileScoreSink, ScoreStore};

/// One-line account of how a match ended.
pub trait Recap: TurnGame {
    /// Describes `outcome`; `names` are indexed by seat.
    fn recap(&self, outcome: &Outcome, names: [&str; 2]) -> String;
}

fn decided<'a>(outcome: &Outcome, names: [&'a str; 2]) -> Option<(&'a str, &'a str)> {
    match *outcome {
        Outcome::Decided { winner, loser } => Some((names[winner.index()], names[loser.index()])),
        Outcome::Tie => None,
    }
}

impl Recap for NimState {
    fn recap(&self, outcome: &Outcome, names: [&str; 2]) -> String {
        match decided(outcome, names) {
            Some((winner, loser)) => format!("{} took the last match, {} wins!", loser, winner),
            None => "It's a tie!".to_string(),
        }
    }
}

impl Recap for TicTacToeState {
    fn recap(&self, outcome: &Outcome, names: [&str; 2]) -> String {
        match decided(outcome, names) {
            Some((winner, _)) => format!("{} lines up three and wins!", winner),
            None => "The grid is full, it's a tie!".to_string(),
        }
    }
}

impl Recap for ConnectFourState {
    fn recap(&self, outcome: &Outcome, names: [&str; 2]) -> String {
        match decided(outcome, names) {
            Some((winner, _)) => format!("{} connects four and wins!", winner),
            None => "The grid is full, it's a tie!".to_string(),
        }
    }
}

impl Recap for GuessState {
    fn recap(&self, _outcome: &Outcome, names: [&str; 2]) -> String {
        let holder = names[parlor_guess::HOLDER.index()];
        let guesser = names[parlor_guess::GUESSER.index()];
        if self.lives() == 0 {
            format!("{} answered wrong twice, {} wins!", holder, guesser)
        } else {
            format!(
                "{} found {} in {} guesses (score {:.3})",
                guesser,
                self.secret(),
                self.guesses(),
                efficiency(self.guesses(), self.maximum())
            )
        }
    }
}

/// What a finished match leaves behind.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct MatchSummary {
    game: GameKind,
    outcome: Outcome,
    scoring: Scoring,
    turns: u32,
    headline: String,
}

/// Reports a finished match to the sink (if any) and summarizes it.
#[instrument(skip_all, fields(game = %game))]
pub fn finish<G: Recap>(
    game: GameKind,
    result: &MatchReport<G>,
    sides: &[Identity; 2],
    identity: &dyn PlayerIdentity,
    sink: Option<&mut dyn ScoreSink>,
) -> Result<MatchSummary, EngineError> {
    let names = [sides[0].display_name(), sides[1].display_name()];
    let names = [names[0].as_str(), names[1].as_str()];
    if let Some(sink) = sink {
        report(result.scoring(), names, identity, sink)?;
    }
    let headline = result.game().recap(result.outcome(), names);
    info!(headline = %headline, turns = result.turns(), "Match summarized");
    Ok(MatchSummary {
        game,
        outcome: *result.outcome(),
        scoring: *result.scoring(),
        turns: result.turns(),
        headline,
    })
}

/// Parameters of a headless bot-vs-bot run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationPlan {
    /// Game to play.
    pub game: GameKind,
    /// Tier of side A.
    pub first: Tier,
    /// Tier of side B.
    pub second: Tier,
    /// Number of matches.
    pub matches: u32,
    /// Seed for reproducible runs.
    pub seed: Option<u64>,
    /// Route outcomes through the score reporter.
    pub record: bool,
}

/// Aggregated results of a simulation.
#[derive(Debug, Clone, Default, PartialEq, Getters)]
pub struct Tally {
    matches: u32,
    first_wins: u32,
    second_wins: u32,
    ties: u32,
    turns: u64,
    metric_total: f64,
    metric_count: u32,
}

impl Tally {
    fn add(&mut self, summary: &MatchSummary) {
        self.matches += 1;
        self.turns += u64::from(summary.turns);
        match summary.outcome.winner() {
            Some(Seat::First) => self.first_wins += 1,
            Some(Seat::Second) => self.second_wins += 1,
            None => self.ties += 1,
        }
        if let Scoring::Metric { score, .. } = summary.scoring {
            self.metric_total += score;
            self.metric_count += 1;
        }
    }

    /// Mean efficiency score, for the guessing game.
    pub fn mean_metric(&self) -> Option<f64> {
        (self.metric_count > 0).then(|| self.metric_total / f64::from(self.metric_count))
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "matches:       {}", self.matches)?;
        writeln!(f, "side A wins:   {}", self.first_wins)?;
        writeln!(f, "side B wins:   {}", self.second_wins)?;
        writeln!(f, "ties:          {}", self.ties)?;
        if self.matches > 0 {
            writeln!(
                f,
                "average turns: {:.2}",
                self.turns as f64 / f64::from(self.matches)
            )?;
        }
        if let Some(mean) = self.mean_metric() {
            writeln!(f, "average score: {:.3}", mean)?;
        }
        Ok(())
    }
}

fn run_headless<G: Recap + fmt::Debug>(
    game: GameKind,
    state: G,
    sources: [Box<dyn MoveSource<G>>; 2],
    sides: &[Identity; 2],
    roster: &Roster,
    sink: Option<&mut dyn ScoreSink>,
) -> Result<MatchSummary, EngineError> {
    let session = Session::new(state, sides.clone(), sources);
    let result = session.run(&mut TraceRenderer)?;
    finish(game, &result, sides, roster, sink)
}

/// Plays `plan.matches` bot-vs-bot matches without a terminal.
#[instrument(skip(store))]
pub fn simulate(plan: SimulationPlan, store: &ScoreStore) -> Result<Tally, EngineError> {
    let mut master = match plan.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let sides = [Identity::bot(1, plan.first), Identity::bot(2, plan.second)];
    let mut roster = Roster::new();
    for side in &sides {
        roster.add(side.clone())?;
    }

    let mut tally = Tally::default();
    for round in 0..plan.matches {
        let (seed_a, seed_b) = (master.next_u64(), master.next_u64());
        let mut file_sink = FileScoreSink::new(store, plan.game, &roster);
        let sink: Option<&mut dyn ScoreSink> = if plan.record {
            Some(&mut file_sink)
        } else {
            None
        };
        let summary = match plan.game {
            GameKind::Nim => run_headless(
                plan.game,
                NimState::random(&mut master),
                [
                    Box::new(NimBot::with_seed(plan.first, seed_a)),
                    Box::new(NimBot::with_seed(plan.second, seed_b)),
                ],
                &sides,
                &roster,
                sink,
            )?,
            GameKind::TicTacToe => run_headless(
                plan.game,
                TicTacToeState::new(),
                [
                    Box::new(TicTacToeBot::with_seed(plan.first, seed_a)),
                    Box::new(TicTacToeBot::with_seed(plan.second, seed_b)),
                ],
                &sides,
                &roster,
                sink,
            )?,
            GameKind::ConnectFour => run_headless(
                plan.game,
                ConnectFourState::new(),
                [
                    Box::new(ConnectFourBot::with_seed(plan.first, seed_a)),
                    Box::new(ConnectFourBot::with_seed(plan.second, seed_b)),
                ],
                &sides,
                &roster,
                sink,
            )?,
            GameKind::Guess => {
                let mut holder = GuessBot::with_seed(plan.first, seed_a);
                let (maximum, secret) = holder.choose_setup();
                let state = GuessState::new(maximum, secret)
                    .map_err(|e| EngineError::Setup(e.to_string()))?;
                run_headless(
                    plan.game,
                    state,
                    [
                        Box::new(holder),
                        Box::new(GuessBot::with_seed(plan.second, seed_b)),
                    ],
                    &sides,
                    &roster,
                    sink,
                )?
            }
        };
        tracing::debug!(round, headline = %summary.headline, "Simulated match");
        tally.add(&summary);
    }
    info!(matches = tally.matches, "Simulation finished");
    Ok(tally)
}
