//! Player identities: humans with a display name, bots with a tier.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::{RosterError, Tier};

/// Who sits in a seat.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Identity {
    /// A human with an arbitrary display name.
    Human {
        /// Display name, also the score store key.
        name: String,
    },
    /// An in-process bot.
    Bot {
        /// Bot number shown to the players ("Bot 1", "Bot 2").
        number: u8,
        /// Difficulty, fixed for the whole match.
        tier: Tier,
    },
}

impl Identity {
    /// Creates a human identity.
    pub fn human(name: impl Into<String>) -> Self {
        Identity::Human { name: name.into() }
    }

    /// Creates a bot identity.
    pub fn bot(number: u8, tier: Tier) -> Self {
        Identity::Bot { number, tier }
    }

    /// Name shown on screen and used as the score key.
    pub fn display_name(&self) -> String {
        match self {
            Identity::Human { name } => name.clone(),
            Identity::Bot { number, .. } => format!("Bot {}", number),
        }
    }

    /// Returns true for bots.
    pub fn is_bot(&self) -> bool {
        matches!(self, Identity::Bot { .. })
    }

    /// The bot's tier, `None` for humans.
    pub fn tier(&self) -> Option<Tier> {
        match self {
            Identity::Human { .. } => None,
            Identity::Bot { tier, .. } => Some(*tier),
        }
    }
}

/// Lookup of identity facts by player name.
pub trait PlayerIdentity {
    /// Returns true if the name belongs to a bot.
    fn is_bot(&self, name: &str) -> bool;

    /// The bot tier behind a name, `None` for humans and unknown names.
    fn difficulty(&self, name: &str) -> Option<Tier>;

    /// The name to show on screen.
    fn display_name(&self, name: &str) -> String;
}

/// The players registered for this run of the suite.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    players: Vec<Identity>,
}

impl Roster {
    /// Creates an empty roster.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a player.
    ///
    /// # Errors
    ///
    /// Rejects empty human names, names already taken, and human names that
    /// would impersonate a bot.
    #[instrument(skip(self))]
    pub fn add(&mut self, identity: Identity) -> Result<(), RosterError> {
        let name = identity.display_name();
        if let Identity::Human { name: raw } = &identity {
            if raw.trim().is_empty() {
                warn!("Rejected empty player name");
                return Err(RosterError::new("Name cannot be empty"));
            }
            if looks_like_bot(raw) {
                warn!(name = %raw, "Rejected bot-like player name");
                return Err(RosterError::new(format!("'{}' is reserved for bots", raw)));
            }
        }
        if self.find(&name).is_some() {
            warn!(name = %name, "Rejected duplicate player name");
            return Err(RosterError::new(format!("'{}' is already playing", name)));
        }
        info!(name = %name, bot = identity.is_bot(), "Player registered");
        self.players.push(identity);
        Ok(())
    }

    /// Returns the identity registered under a name.
    #[instrument(skip(self))]
    pub fn find(&self, name: &str) -> Option<&Identity> {
        let found = self.players.iter().find(|p| p.display_name() == name);
        debug!(found = found.is_some(), "Roster lookup");
        found
    }

    /// All registered players, in registration order.
    pub fn players(&self) -> &[Identity] {
        &self.players
    }
}

fn looks_like_bot(name: &str) -> bool {
    name.strip_prefix("Bot ")
        .is_some_and(|rest| !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit()))
}

impl PlayerIdentity for Roster {
    fn is_bot(&self, name: &str) -> bool {
        self.find(name).is_some_and(Identity::is_bot)
    }

    fn difficulty(&self, name: &str) -> Option<Tier> {
        self.find(name).and_then(Identity::tier)
    }

    fn display_name(&self, name: &str) -> String {
        self.find(name)
            .map(Identity::display_name)
            .unwrap_or_else(|| name.to_string())
    }
}
