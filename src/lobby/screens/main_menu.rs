//! Main menu: the games on the left, the scoreboards on the right.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Row, Table},
};
use tracing::{debug, info, instrument, warn};

use crate::game_kind::GameKind;
use crate::lobby::screen::{LobbyContext, Screen, ScreenTransition};
use crate::scores::ScoreStore;

/// Rows shown per scoreboard.
const BOARD_ROWS: usize = 8;

/// Menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuOption {
    Play(GameKind),
    Quit,
}

impl MenuOption {
    fn label(self) -> &'static str {
        match self {
            Self::Play(game) => game.title(),
            Self::Quit => "Quit",
        }
    }

    fn all() -> Vec<MenuOption> {
        GameKind::all()
            .into_iter()
            .map(MenuOption::Play)
            .chain(std::iter::once(MenuOption::Quit))
            .collect()
    }
}

/// State for the main menu.
#[derive(Debug, Getters)]
pub struct MainMenuScreen {
    list_state: ListState,
}

impl Default for MainMenuScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl MainMenuScreen {
    /// Creates the menu with the first game selected.
    #[instrument]
    pub fn new() -> Self {
        debug!("Initializing MainMenuScreen");
        let mut state = ListState::default();
        state.select(Some(0));
        Self { list_state: state }
    }

    fn select_previous(&mut self) {
        let count = MenuOption::all().len();
        let i = match self.list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => count - 1,
        };
        self.list_state.select(Some(i));
    }

    fn select_next(&mut self) {
        let count = MenuOption::all().len();
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % count,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn selected_option(&self) -> MenuOption {
        let options = MenuOption::all();
        let idx = self.list_state.selected().unwrap_or(0);
        options[idx.min(options.len() - 1)]
    }
}

/// Draws one game's scoreboard.
fn draw_scoreboard(frame: &mut Frame, area: Rect, store: &ScoreStore, game: GameKind) {
    let block = Block::default().borders(Borders::ALL).title(game.title());
    let rankings = match store.rankings(game) {
        Ok(rankings) => rankings,
        Err(e) => {
            warn!(game = %game, error = %e, "Scoreboard unavailable");
            let message = Paragraph::new("Scores unavailable")
                .style(Style::default().fg(Color::Red))
                .block(block);
            frame.render_widget(message, area);
            return;
        }
    };

    let rows: Vec<Row> = rankings
        .iter()
        .take(BOARD_ROWS)
        .enumerate()
        .map(|(i, r)| {
            Row::new(vec![
                format!("{}.", i + 1),
                r.name().clone(),
                r.score().clone(),
            ])
        })
        .collect();
    let table = Table::new(
        rows,
        [
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(8),
        ],
    )
    .block(block);
    frame.render_widget(table, area);
}

impl Screen for MainMenuScreen {
    #[instrument(skip(self, frame, context))]
    fn render(&self, frame: &mut Frame, context: &LobbyContext) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(10),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new("Parlor Games")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let names: Vec<String> = context
            .roster()
            .players()
            .iter()
            .map(|p| p.display_name())
            .collect();
        let players = Paragraph::new(names.join("  vs  "))
            .style(Style::default().fg(Color::Green))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(players, chunks[1]);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(24), Constraint::Min(40)])
            .split(chunks[2]);

        let items: Vec<ListItem> = MenuOption::all()
            .iter()
            .map(|opt| ListItem::new(opt.label()))
            .collect();
        let menu = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Menu"))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");
        let mut list_state = self.list_state;
        frame.render_stateful_widget(menu, body[0], &mut list_state);

        let halves = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(body[1]);
        let games = GameKind::all();
        for (half, pair) in halves.iter().zip(games.chunks(2)) {
            let cells = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(*half);
            for (cell, game) in cells.iter().zip(pair) {
                draw_scoreboard(frame, *cell, context.store(), *game);
            }
        }

        let help = Paragraph::new("↑↓: Navigate | Enter: Select | q: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[3]);
    }

    #[instrument(skip(self, key, _context))]
    fn handle_key(&mut self, key: KeyEvent, _context: &mut LobbyContext) -> ScreenTransition {
        match key.code {
            KeyCode::Up => {
                self.select_previous();
                ScreenTransition::Stay
            }
            KeyCode::Down => {
                self.select_next();
                ScreenTransition::Stay
            }
            KeyCode::Enter => {
                let option = self.selected_option();
                info!(option = ?option, "Menu option selected");
                match option {
                    MenuOption::Play(game) => ScreenTransition::GoToRoleSelect { game },
                    MenuOption::Quit => ScreenTransition::Quit,
                }
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}
