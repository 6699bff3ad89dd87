//! Role selection: who starts (or hides the number), with the rules alongside.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use parlor_engine::Identity;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use tracing::{debug, info, instrument};

use crate::game_kind::GameKind;
use crate::lobby::screen::{LobbyContext, Screen, ScreenTransition};

/// State for the role selection screen.
#[derive(Debug, Getters)]
pub struct RoleSelectScreen {
    game: GameKind,
    players: [Identity; 2],
    list_state: ListState,
}

impl RoleSelectScreen {
    /// Creates the screen with the first registered player selected.
    #[instrument]
    pub fn new(game: GameKind, players: [Identity; 2]) -> Self {
        debug!(game = %game, "Initializing RoleSelectScreen");
        let mut state = ListState::default();
        state.select(Some(0));
        Self {
            game,
            players,
            list_state: state,
        }
    }

    fn toggle(&mut self) {
        let next = 1 - self.list_state.selected().unwrap_or(0).min(1);
        self.list_state.select(Some(next));
    }

    /// Both sides with the selected player as side A.
    pub fn sides(&self) -> [Identity; 2] {
        let first = self.list_state.selected().unwrap_or(0).min(1);
        [
            self.players[first].clone(),
            self.players[1 - first].clone(),
        ]
    }
}

impl Screen for RoleSelectScreen {
    #[instrument(skip(self, frame, _context))]
    fn render(&self, frame: &mut Frame, _context: &LobbyContext) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(4),
                Constraint::Min(5),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new(self.game.title())
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let items: Vec<ListItem> = self
            .players
            .iter()
            .map(|p| ListItem::new(p.display_name()))
            .collect();
        let choice = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(self.game.role_question()),
            )
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");
        let mut list_state = self.list_state;
        frame.render_stateful_widget(choice, chunks[1], &mut list_state);

        let rules: Vec<Line> = self.game.rules().iter().map(|l| Line::from(*l)).collect();
        let rules = Paragraph::new(rules)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Rules"));
        frame.render_widget(rules, chunks[2]);

        let help = Paragraph::new("↑↓: Choose | Enter: Play | q: Back to menu")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[3]);
    }

    #[instrument(skip(self, key, _context))]
    fn handle_key(&mut self, key: KeyEvent, _context: &mut LobbyContext) -> ScreenTransition {
        match key.code {
            KeyCode::Up | KeyCode::Down => {
                self.toggle();
                ScreenTransition::Stay
            }
            KeyCode::Enter => {
                let sides = self.sides();
                info!(game = %self.game, side_a = %sides[0].display_name(), "Roles chosen");
                ScreenTransition::Play {
                    game: self.game,
                    sides,
                }
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                ScreenTransition::GoToMainMenu
            }
            _ => ScreenTransition::Stay,
        }
    }
}
