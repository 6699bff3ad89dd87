//! Connect-four on the terminal.

use crossterm::event::KeyCode;
use parlor_connect_four::{
    COLS, Cell, Column, ConnectFourState, Grid, Landing, MoveError, ROWS, Token,
};
use parlor_engine::{EngineError, MoveSource, Seat};
use ratatui::{
    Frame,
    backend::Backend,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tracing::debug;

use crate::tui::table::{Caption, GameView, SharedTable, center_rect};

const DISC: &str = "●";

/// Decoration drawn over the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DropOverlay {
    /// Token hovering above a column while a human aims.
    pub cursor: Option<(Column, Token)>,
    /// Row the last token is passing through; it is hidden at its landing.
    pub falling: Option<(usize, Landing)>,
}

impl GameView for ConnectFourState {
    type Overlay = DropOverlay;
    const TITLE: &'static str = "Connect Four";

    fn draw_board(&self, frame: &mut Frame, area: Rect, overlay: &DropOverlay) {
        let lines = grid_lines(self.grid(), overlay);
        let height = lines.len() as u16;
        let width = (COLS * 2 + 3) as u16;
        let board = Paragraph::new(lines).alignment(Alignment::Left);
        frame.render_widget(board, center_rect(area, width, height));
    }

    fn drop_frames(&self) -> Vec<DropOverlay> {
        let Some(landing) = self.last_landing() else {
            return Vec::new();
        };
        (0..landing.row)
            .map(|row| DropOverlay {
                cursor: None,
                falling: Some((row, landing)),
            })
            .collect()
    }
}

fn token_style(token: Token) -> Style {
    match token {
        Token::Red => Style::default().fg(Color::Red),
        Token::Yellow => Style::default().fg(Color::Yellow),
    }
}

/// What occupies a cell once the overlay is taken into account.
fn shown_cell(grid: &Grid, row: usize, col: usize, overlay: &DropOverlay) -> Cell {
    if let Some((falling_row, landing)) = overlay.falling
        && landing.column.0 == col
    {
        if row == falling_row {
            return Cell::Filled(landing.token);
        }
        if row == landing.row {
            return Cell::Empty;
        }
    }
    grid.get(row, col)
}

fn grid_lines(grid: &Grid, overlay: &DropOverlay) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(ROWS + 3);

    let mut aim = vec![Span::raw("  ")];
    for col in 0..COLS {
        match overlay.cursor {
            Some((Column(c), token)) if c == col => {
                aim.push(Span::styled(format!("{} ", DISC), token_style(token)));
            }
            _ => aim.push(Span::raw("  ")),
        }
    }
    lines.push(Line::from(aim));

    for row in 0..ROWS {
        let mut spans = vec![Span::styled("│ ", Style::default().fg(Color::Blue))];
        for col in 0..COLS {
            spans.push(match shown_cell(grid, row, col, overlay) {
                Cell::Empty => Span::styled("· ", Style::default().fg(Color::DarkGray)),
                Cell::Filled(token) => Span::styled(format!("{} ", DISC), token_style(token)),
            });
        }
        spans.push(Span::styled("│", Style::default().fg(Color::Blue)));
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(Span::styled(
        format!("└{}┘", "─".repeat(COLS * 2 + 1)),
        Style::default().fg(Color::Blue),
    )));
    let numbers: String = (1..=COLS).map(|n| format!("{} ", n)).collect();
    lines.push(Line::from(Span::styled(
        format!("  {}", numbers),
        Style::default().fg(Color::DarkGray),
    )));
    lines
}

/// Moves the aiming cursor, clamped to the grid.
pub fn move_cursor(cursor: Column, key: KeyCode) -> Column {
    match key {
        KeyCode::Left => Column(cursor.0.saturating_sub(1)),
        KeyCode::Right => Column((cursor.0 + 1).min(COLS - 1)),
        KeyCode::Char(c @ '1'..='7') => Column(c as usize - '1' as usize),
        _ => cursor,
    }
}

/// Keyboard input for one human seat.
pub struct ConnectFourInput<B: Backend> {
    table: SharedTable<B>,
    name: String,
    cursor: Column,
    error: Option<String>,
}

impl<B: Backend> ConnectFourInput<B> {
    /// Creates the input for the player called `name`.
    pub fn new(table: SharedTable<B>, name: String) -> Self {
        Self {
            table,
            name,
            cursor: Column(COLS / 2),
            error: None,
        }
    }
}

impl<B: Backend> MoveSource<ConnectFourState> for ConnectFourInput<B> {
    fn get_move(&mut self, game: &ConnectFourState, seat: Seat) -> Result<Column, EngineError> {
        let mut error = self.error.take();
        let token = Token::for_seat(seat);
        let prompt = format!("{}, pick a column for your disc", self.name);
        let mut table = self.table.borrow_mut();
        loop {
            let caption = Caption {
                prompt: &prompt,
                error: error.as_deref(),
                help: "←→ / 1-7: Aim | Enter / ↓: Drop | Ctrl-C: Abort",
            };
            let overlay = DropOverlay {
                cursor: Some((self.cursor, token)),
                falling: None,
            };
            table.show(game, &overlay, caption)?;
            match table.key()?.code {
                KeyCode::Enter | KeyCode::Down | KeyCode::Char(' ') => {
                    if game.grid().is_open(self.cursor) {
                        return Ok(self.cursor);
                    }
                    debug!(column = self.cursor.0, "Full column picked");
                    error = Some(MoveError::ColumnFull(self.cursor).to_string());
                }
                code => self.cursor = move_cursor(self.cursor, code),
            }
        }
    }

    fn rejected(&mut self, error: &MoveError) {
        self.error = Some(error.to_string());
    }
}
