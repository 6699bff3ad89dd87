//! Login screen: a player types a name or picks a bot.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use parlor_engine::{Identity, Tier};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tracing::{debug, info, instrument};

use crate::lobby::screen::{LobbyContext, Screen, ScreenTransition};

/// Longest accepted player name.
const MAX_NAME: usize = 24;

/// State for the login screen of player `slot`.
#[derive(Debug, Getters)]
pub struct LoginScreen {
    slot: u8,
    name_input: String,
    bot_tier: Option<Tier>,
    error_message: Option<String>,
}

impl LoginScreen {
    /// Creates the login screen for player 1 or 2.
    #[instrument]
    pub fn new(slot: u8) -> Self {
        debug!(slot, "Initializing LoginScreen");
        Self {
            slot,
            name_input: String::new(),
            bot_tier: None,
            error_message: None,
        }
    }

    /// Cycles no bot → easy → medium → hard → no bot.
    fn cycle_bot(&mut self) {
        self.bot_tier = match self.bot_tier {
            None => Some(Tier::Easy),
            Some(Tier::Hard) => None,
            Some(tier) => Some(tier.cycle()),
        };
        debug!(tier = ?self.bot_tier, "Bot tier toggled");
    }

    /// The identity described by the current input.
    fn identity(&self) -> Identity {
        match self.bot_tier {
            Some(tier) => Identity::bot(self.slot, tier),
            None => Identity::human(self.name_input.trim()),
        }
    }

    /// Registers the player, keeping the error on screen when refused.
    #[instrument(skip(self, context))]
    fn confirm(&mut self, context: &mut LobbyContext) -> ScreenTransition {
        let identity = self.identity();
        match context.roster_mut().add(identity.clone()) {
            Ok(()) => {
                info!(slot = self.slot, name = %identity.display_name(), "Player logged in");
                if self.slot == 1 {
                    ScreenTransition::GoToLogin { slot: 2 }
                } else {
                    ScreenTransition::GoToMainMenu
                }
            }
            Err(e) => {
                self.error_message = Some(e.message);
                ScreenTransition::Stay
            }
        }
    }
}

impl Screen for LoginScreen {
    #[instrument(skip(self, frame, _context))]
    fn render(&self, frame: &mut Frame, _context: &LobbyContext) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(1),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(1),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new(format!("Player {}", self.slot))
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let (text, style, label) = match self.bot_tier {
            Some(tier) => (
                format!("Bot {} ({})", self.slot, tier),
                Style::default().fg(Color::Magenta),
                "Bot (Tab to change)",
            ),
            None => (
                self.name_input.clone(),
                Style::default().fg(Color::White),
                "Your name",
            ),
        };
        let input = Paragraph::new(text)
            .style(style)
            .block(Block::default().borders(Borders::ALL).title(label));
        frame.render_widget(input, chunks[2]);

        let error = Paragraph::new(self.error_message.as_deref().unwrap_or(""))
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center);
        frame.render_widget(error, chunks[3]);

        let help = Paragraph::new("Type name | Tab: Bot easy/medium/hard | Enter: Confirm | Esc: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[5]);
    }

    #[instrument(skip(self, key, context))]
    fn handle_key(&mut self, key: KeyEvent, context: &mut LobbyContext) -> ScreenTransition {
        match key.code {
            KeyCode::Tab => {
                self.cycle_bot();
                self.error_message = None;
                ScreenTransition::Stay
            }
            KeyCode::Char(c) if !c.is_control() => {
                self.bot_tier = None;
                if self.name_input.chars().count() < MAX_NAME {
                    self.name_input.push(c);
                }
                ScreenTransition::Stay
            }
            KeyCode::Backspace => {
                self.name_input.pop();
                ScreenTransition::Stay
            }
            KeyCode::Enter => self.confirm(context),
            KeyCode::Esc => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scores::ScoreStore;

    fn press(screen: &mut LoginScreen, context: &mut LobbyContext, code: KeyCode) -> ScreenTransition {
        screen.handle_key(KeyEvent::from(code), context)
    }

    #[test]
    fn test_tab_cycles_bot_tiers() {
        let mut screen = LoginScreen::new(1);
        let mut context = LobbyContext::new(ScoreStore::new("unused"));
        let mut seen = Vec::new();
        for _ in 0..4 {
            press(&mut screen, &mut context, KeyCode::Tab);
            seen.push(screen.bot_tier);
        }
        assert_eq!(
            seen,
            vec![Some(Tier::Easy), Some(Tier::Medium), Some(Tier::Hard), None]
        );
    }

    #[test]
    fn test_second_player_cannot_reuse_name() {
        let mut context = LobbyContext::new(ScoreStore::new("unused"));
        let mut first = LoginScreen::new(1);
        for c in "ana".chars() {
            press(&mut first, &mut context, KeyCode::Char(c));
        }
        assert_eq!(
            press(&mut first, &mut context, KeyCode::Enter),
            ScreenTransition::GoToLogin { slot: 2 }
        );

        let mut second = LoginScreen::new(2);
        for c in "ana".chars() {
            press(&mut second, &mut context, KeyCode::Char(c));
        }
        assert_eq!(press(&mut second, &mut context, KeyCode::Enter), ScreenTransition::Stay);
        assert!(second.error_message.is_some());

        press(&mut second, &mut context, KeyCode::Tab);
        assert_eq!(
            press(&mut second, &mut context, KeyCode::Enter),
            ScreenTransition::GoToMainMenu
        );
        assert_eq!(context.roster().players().len(), 2);
    }

    #[test]
    fn test_empty_name_refused() {
        let mut context = LobbyContext::new(ScoreStore::new("unused"));
        let mut screen = LoginScreen::new(1);
        assert_eq!(press(&mut screen, &mut context, KeyCode::Enter), ScreenTransition::Stay);
        assert_eq!(screen.error_message.as_deref(), Some("Name cannot be empty"));
    }
}
