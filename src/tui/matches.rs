//! Starts a match on the terminal for a chosen game and pair of sides.

use std::rc::Rc;

use parlor_connect_four::{ConnectFourBot, ConnectFourState};
use parlor_engine::{EngineError, Identity, MoveSource, Roster, Session, Tier};
use parlor_guess::{GuessBot, GuessState, HOLDER};
use parlor_nim::{NimBot, NimState};
use parlor_tictactoe::{TicTacToeBot, TicTacToeState};
use ratatui::backend::Backend;
use tracing::{info, instrument};

use crate::game_kind::GameKind;
use crate::runner::{MatchSummary, Recap, finish};
use crate::scores::{FileScoreSink, ScoreStore};
use crate::tui::games::connect_four::ConnectFourInput;
use crate::tui::games::guess::{self, GuessInput};
use crate::tui::games::nim::{self, NimInput};
use crate::tui::games::tictactoe::TicTacToeInput;
use crate::tui::table::{GameView, SharedTable, TableRenderer};

type Source<G> = Box<dyn MoveSource<G>>;

/// A bot of the side's tier, or keyboard input under the side's name.
fn source<G: parlor_engine::TurnGame>(
    side: &Identity,
    bot: impl FnOnce(Tier) -> Source<G>,
    human: impl FnOnce(String) -> Source<G>,
) -> Source<G> {
    match side.tier() {
        Some(tier) => bot(tier),
        None => human(side.display_name()),
    }
}

fn sources<G: parlor_engine::TurnGame>(
    sides: &[Identity; 2],
    bot: impl Fn(Tier) -> Source<G>,
    human: impl Fn(String) -> Source<G>,
) -> [Source<G>; 2] {
    [
        source(&sides[0], &bot, &human),
        source(&sides[1], &bot, &human),
    ]
}

fn run_table<B: Backend + 'static, G: Recap + GameView>(
    game: GameKind,
    state: G,
    sources: [Source<G>; 2],
    sides: &[Identity; 2],
    table: &SharedTable<B>,
    roster: &Roster,
    store: &ScoreStore,
) -> Result<MatchSummary, EngineError> {
    let mut renderer = TableRenderer::new(Rc::clone(table));
    let result = Session::new(state, sides.clone(), sources).run(&mut renderer)?;
    let mut sink = FileScoreSink::new(store, game, roster);
    finish(game, &result, sides, roster, Some(&mut sink))
}

/// Sets up and plays one match; results of human players go to `store`.
///
/// # Errors
///
/// [`EngineError::Interrupted`] when a player pressed Ctrl-C, in which case
/// nothing was recorded.
#[instrument(skip(table, roster, store), fields(game = %game))]
pub fn play<B: Backend + 'static>(
    game: GameKind,
    sides: [Identity; 2],
    table: &SharedTable<B>,
    roster: &Roster,
    store: &ScoreStore,
) -> Result<MatchSummary, EngineError> {
    info!(
        side_a = %sides[0].display_name(),
        side_b = %sides[1].display_name(),
        "Launching match"
    );
    match game {
        GameKind::Nim => {
            let state = nim::setup(&mut table.borrow_mut(), &sides, &mut rand::thread_rng())?;
            let sources = sources::<NimState>(
                &sides,
                |tier| Box::new(NimBot::new(tier)),
                |name| Box::new(NimInput::new(Rc::clone(table), name)),
            );
            run_table(game, state, sources, &sides, table, roster, store)
        }
        GameKind::TicTacToe => {
            let sources = sources::<TicTacToeState>(
                &sides,
                |tier| Box::new(TicTacToeBot::new(tier)),
                |name| Box::new(TicTacToeInput::new(Rc::clone(table), name)),
            );
            run_table(game, TicTacToeState::new(), sources, &sides, table, roster, store)
        }
        GameKind::ConnectFour => {
            let sources = sources::<ConnectFourState>(
                &sides,
                |tier| Box::new(ConnectFourBot::new(tier)),
                |name| Box::new(ConnectFourInput::new(Rc::clone(table), name)),
            );
            run_table(game, ConnectFourState::new(), sources, &sides, table, roster, store)
        }
        GameKind::Guess => {
            let (state, holder_bot) = guess::setup(&mut table.borrow_mut(), &sides)?;
            let mut sources = sources::<GuessState>(
                &sides,
                |tier| Box::new(GuessBot::new(tier)),
                |name| Box::new(GuessInput::new(Rc::clone(table), name)),
            );
            // The bot that picked the secret answers for it.
            if let Some(bot) = holder_bot {
                sources[HOLDER.index()] = Box::new(bot);
            }
            run_table(game, state, sources, &sides, table, roster, store)
        }
    }
}
