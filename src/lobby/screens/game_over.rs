//! End-of-match screen.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use tracing::instrument;

use crate::game_kind::GameKind;
use crate::lobby::screen::{LobbyContext, Screen, ScreenTransition};

/// Announces how the match ended and waits for Enter.
#[derive(Debug, Getters)]
pub struct GameOverScreen {
    game: GameKind,
    headline: String,
}

impl GameOverScreen {
    /// Creates the screen for a finished (or aborted) match.
    pub fn new(game: GameKind, headline: impl Into<String>) -> Self {
        Self {
            game,
            headline: headline.into(),
        }
    }
}

impl Screen for GameOverScreen {
    #[instrument(skip(self, frame, _context))]
    fn render(&self, frame: &mut Frame, _context: &LobbyContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(3),
            ])
            .split(frame.area());

        let title = Paragraph::new(format!("{} - Game over", self.game.title()))
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let headline = Paragraph::new(self.headline.as_str())
            .style(
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(headline, chunks[1]);

        let help = Paragraph::new("Enter: Back to menu")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);
    }

    fn handle_key(&mut self, key: KeyEvent, _context: &mut LobbyContext) -> ScreenTransition {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => ScreenTransition::GoToMainMenu,
            _ => ScreenTransition::Stay,
        }
    }
}
