//! Screen trait and transition type for the lobby state machine.

use crossterm::event::KeyEvent;
use derive_getters::Getters;
use parlor_engine::{Identity, Roster};
use ratatui::Frame;

use crate::game_kind::GameKind;
use crate::scores::ScoreStore;

/// What every lobby screen can see: who is playing and the scoreboards.
#[derive(Debug, Getters)]
pub struct LobbyContext {
    roster: Roster,
    store: ScoreStore,
}

impl LobbyContext {
    /// Creates a context with an empty roster.
    pub fn new(store: ScoreStore) -> Self {
        Self {
            roster: Roster::new(),
            store,
        }
    }

    /// The roster, for registering players.
    pub fn roster_mut(&mut self) -> &mut Roster {
        &mut self.roster
    }
}

/// The result of handling an input event on a screen.
///
/// Screens return this from [`Screen::handle_key`] to drive the
/// [`LobbyController`](crate::lobby::LobbyController) state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenTransition {
    /// Stay on the current screen.
    Stay,
    /// Navigate to the login screen for player `slot` (1 or 2).
    GoToLogin {
        /// Which player logs in.
        slot: u8,
    },
    /// Navigate to the main menu.
    GoToMainMenu,
    /// Choose who plays side A of `game`.
    GoToRoleSelect {
        /// The game picked from the menu.
        game: GameKind,
    },
    /// Start a match; `sides[0]` is side A.
    Play {
        /// The game to play.
        game: GameKind,
        /// Both sides, indexed by seat.
        sides: [Identity; 2],
    },
    /// Exit the lobby.
    Quit,
}

/// Trait implemented by each screen in the lobby state machine.
///
/// Each screen owns its own state, renders its UI, and handles key events.
/// The controller calls these methods in the event loop.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame, context: &LobbyContext);

    /// Handles a key event and returns the resulting [`ScreenTransition`].
    fn handle_key(&mut self, key: KeyEvent, context: &mut LobbyContext) -> ScreenTransition;
}
