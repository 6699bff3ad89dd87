//! Tic-tac-toe on the terminal.

use crossterm::event::KeyCode;
use parlor_engine::{EngineError, MoveSource, Seat};
use parlor_tictactoe::{Board, Mark, MoveError, Position, Square, TicTacToeState};
use ratatui::{
    Frame,
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tracing::debug;

use crate::tui::table::{Caption, GameView, SharedTable, center_rect};

impl GameView for TicTacToeState {
    /// Cursor position, when a human is choosing.
    type Overlay = Option<Position>;
    const TITLE: &'static str = "Tic-Tac-Toe";

    fn draw_board(&self, frame: &mut Frame, area: Rect, cursor: &Option<Position>) {
        draw_board(frame, area, self.board(), *cursor, self.last_position());
    }
}

/// Moves cursor based on arrow keys, wrapping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    match key {
        KeyCode::Up => cursor.step(-1, 0),
        KeyCode::Down => cursor.step(1, 0),
        KeyCode::Left => cursor.step(0, -1),
        KeyCode::Right => cursor.step(0, 1),
        _ => cursor,
    }
}

fn draw_board(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: Option<Position>,
    last: Option<Position>,
) {
    let board_area = center_rect(area, 29, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..3 {
        draw_row(frame, rows[row * 2], board, cursor, last, row);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: Option<Position>,
    last: Option<Position>,
    row: usize,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(9),
            Constraint::Length(1),
            Constraint::Length(9),
            Constraint::Length(1),
            Constraint::Length(9),
        ])
        .split(area);

    for col in 0..3 {
        if let Some(pos) = Position::from_row_col(row, col) {
            draw_cell(frame, cols[col * 2], board, cursor, last, pos);
        }
    }
    draw_separator_vertical(frame, cols[1]);
    draw_separator_vertical(frame, cols[3]);
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: Option<Position>,
    last: Option<Position>,
    pos: Position,
) {
    let (symbol, mut style) = match board.get(pos) {
        Square::Empty => ("   ".to_string(), Style::default().fg(Color::DarkGray)),
        Square::Occupied(mark) => {
            let color = match mark {
                Mark::X => Color::Blue,
                Mark::O => Color::Red,
            };
            (
                format!(" {} ", mark.symbol()),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        }
    };
    if last == Some(pos) {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    if cursor == Some(pos) {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(symbol, style)),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─────────┼─────────┼─────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│\n│\n│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

/// Keyboard input for one human seat.
pub struct TicTacToeInput<B: Backend> {
    table: SharedTable<B>,
    name: String,
    cursor: Position,
    error: Option<String>,
}

impl<B: Backend> TicTacToeInput<B> {
    /// Creates the input for the player called `name`.
    pub fn new(table: SharedTable<B>, name: String) -> Self {
        Self {
            table,
            name,
            cursor: Position::Center,
            error: None,
        }
    }
}

impl<B: Backend> MoveSource<TicTacToeState> for TicTacToeInput<B> {
    fn get_move(&mut self, game: &TicTacToeState, seat: Seat) -> Result<Position, EngineError> {
        let mut error = self.error.take();
        let prompt = format!("{}, place your {}", self.name, Mark::for_seat(seat).symbol());
        let mut table = self.table.borrow_mut();
        loop {
            let caption = Caption {
                prompt: &prompt,
                error: error.as_deref(),
                help: "←↑↓→: Move | Enter: Place | Ctrl-C: Abort",
            };
            table.show(game, &Some(self.cursor), caption)?;
            match table.key()?.code {
                KeyCode::Enter | KeyCode::Char(' ') => {
                    if game.board().is_empty(self.cursor) {
                        return Ok(self.cursor);
                    }
                    debug!(cursor = %self.cursor, "Occupied square picked");
                    error = Some(MoveError::SquareOccupied(self.cursor).to_string());
                }
                code => self.cursor = move_cursor(self.cursor, code),
            }
        }
    }

    fn rejected(&mut self, error: &MoveError) {
        self.error = Some(error.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_and_wraps() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::TopCenter, KeyCode::Up), Position::BottomCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::Center, KeyCode::Enter), Position::Center);
    }
}
