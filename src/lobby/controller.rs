//! Lobby controller: the state machine driving the terminal UI.

use parlor_engine::{EngineError, Identity};
use ratatui::backend::Backend;
use tracing::{debug, error, info, instrument, warn};

use crate::game_kind::GameKind;
use crate::lobby::screen::{LobbyContext, Screen, ScreenTransition};
use crate::lobby::screens::{GameOverScreen, LoginScreen, MainMenuScreen, RoleSelectScreen};
use crate::scores::ScoreStore;
use crate::tui::console::is_interrupt;
use crate::tui::matches;
use crate::tui::table::SharedTable;

/// Active screen in the lobby state machine.
#[derive(Debug)]
enum ActiveScreen {
    Login(LoginScreen),
    MainMenu(MainMenuScreen),
    RoleSelect(RoleSelectScreen),
    GameOver(GameOverScreen),
}

impl ActiveScreen {
    fn screen(&self) -> &dyn Screen {
        match self {
            ActiveScreen::Login(s) => s,
            ActiveScreen::MainMenu(s) => s,
            ActiveScreen::RoleSelect(s) => s,
            ActiveScreen::GameOver(s) => s,
        }
    }

    fn screen_mut(&mut self) -> &mut dyn Screen {
        match self {
            ActiveScreen::Login(s) => s,
            ActiveScreen::MainMenu(s) => s,
            ActiveScreen::RoleSelect(s) => s,
            ActiveScreen::GameOver(s) => s,
        }
    }
}

/// Controller that drives the lobby state machine.
///
/// Call [`LobbyController::run`] to start the event loop.
pub struct LobbyController<B: Backend> {
    table: SharedTable<B>,
    context: LobbyContext,
}

impl<B: Backend + 'static> LobbyController<B> {
    /// Creates a controller drawing on `table` and recording into `store`.
    #[instrument(skip_all)]
    pub fn new(table: SharedTable<B>, store: ScoreStore) -> Self {
        info!(scores = %store.dir().display(), "Creating LobbyController");
        Self {
            table,
            context: LobbyContext::new(store),
        }
    }

    /// Who is logged in and the score store.
    pub fn context(&self) -> &LobbyContext {
        &self.context
    }

    /// Runs the lobby until a player quits.
    ///
    /// Ctrl-C outside a match quits as well.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<(), EngineError> {
        info!("Starting lobby event loop");
        let mut screen = ActiveScreen::Login(LoginScreen::new(1));

        loop {
            {
                let mut table = self.table.borrow_mut();
                let context = &self.context;
                table
                    .console()
                    .draw(|frame| screen.screen().render(frame, context))?;
            }

            let key = self.table.borrow_mut().console().key()?;
            if is_interrupt(&key) {
                info!("Lobby interrupted");
                return Ok(());
            }

            let transition = screen.screen_mut().handle_key(key, &mut self.context);
            screen = match transition {
                ScreenTransition::Play { game, sides } => self.play(game, sides),
                other => match self.apply_transition(other, screen) {
                    Some(next) => next,
                    None => {
                        info!("Lobby quitting");
                        return Ok(());
                    }
                },
            };
        }
    }

    /// Plays one match and picks the screen that follows it.
    #[instrument(skip(self, sides))]
    fn play(&mut self, game: GameKind, sides: [Identity; 2]) -> ActiveScreen {
        let result = matches::play(
            game,
            sides,
            &self.table,
            self.context.roster(),
            self.context.store(),
        );
        // Keys typed while the last frames were shown belong to the match.
        if let Err(e) = self.table.borrow_mut().console().discard_pending() {
            warn!(error = %e, "Could not flush input");
        }
        match result {
            Ok(summary) => {
                ActiveScreen::GameOver(GameOverScreen::new(game, summary.headline().clone()))
            }
            Err(EngineError::Interrupted) => {
                info!("Match interrupted, nothing recorded");
                ActiveScreen::MainMenu(MainMenuScreen::new())
            }
            Err(e) => {
                error!(error = %e, "Match aborted");
                ActiveScreen::GameOver(GameOverScreen::new(game, format!("Match aborted: {}", e)))
            }
        }
    }

    /// Applies a screen transition, returning the next screen or `None` to quit.
    #[instrument(skip(self, current))]
    fn apply_transition(
        &mut self,
        transition: ScreenTransition,
        current: ActiveScreen,
    ) -> Option<ActiveScreen> {
        debug!(transition = ?transition, "Applying screen transition");
        match transition {
            ScreenTransition::Stay => Some(current),
            ScreenTransition::GoToLogin { slot } => {
                info!(slot, "Navigating to Login");
                Some(ActiveScreen::Login(LoginScreen::new(slot)))
            }
            ScreenTransition::GoToMainMenu => {
                info!("Navigating to MainMenu");
                Some(ActiveScreen::MainMenu(MainMenuScreen::new()))
            }
            ScreenTransition::GoToRoleSelect { game } => {
                match self.context.roster().players() {
                    [first, second, ..] => {
                        info!(game = %game, "Navigating to RoleSelect");
                        Some(ActiveScreen::RoleSelect(RoleSelectScreen::new(
                            game,
                            [first.clone(), second.clone()],
                        )))
                    }
                    players => {
                        let slot = players.len() as u8 + 1;
                        warn!(slot, "Missing a player, back to Login");
                        Some(ActiveScreen::Login(LoginScreen::new(slot)))
                    }
                }
            }
            // Matches are launched by the caller.
            ScreenTransition::Play { .. } => Some(current),
            ScreenTransition::Quit => None,
        }
    }
}
