//! Matchsticks on the terminal.

use crossterm::event::KeyCode;
use parlor_engine::{EngineError, Identity, MoveSource, Seat};
use parlor_nim::{MoveError, NimState, START_RANGE, Take};
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use ratatui::backend::Backend;
use tracing::{info, instrument};

use crate::tui::prompt::NumberPrompt;
use crate::tui::table::{Caption, GameView, SharedTable, Table, center_rect};

const PER_ROW: u32 = 10;

impl GameView for NimState {
    type Overlay = ();
    const TITLE: &'static str = "Matchsticks";

    fn draw_board(&self, frame: &mut Frame, area: Rect, _overlay: &()) {
        let remaining = self.remaining();
        let mut lines = vec![
            Line::from(Span::styled(
                format!("{} left", plural(remaining)),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        let mut left = remaining;
        while left > 0 {
            let row = left.min(PER_ROW);
            lines.push(Line::from(Span::styled(
                "┃ ".repeat(row as usize),
                Style::default().fg(Color::Yellow),
            )));
            left -= row;
        }
        let height = lines.len() as u16;
        let board = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(board, center_rect(area, (PER_ROW * 2 + 2) as u16, height));
    }
}

fn plural(count: u32) -> String {
    if count == 1 {
        "1 match".to_string()
    } else {
        format!("{} matches", count)
    }
}

/// Picks the starting count: the first human at the table is asked, an
/// all-bot table gets a random count.
#[instrument(skip_all)]
pub fn setup<B: Backend, R: Rng + ?Sized>(
    table: &mut Table<B>,
    sides: &[Identity; 2],
    rng: &mut R,
) -> Result<NimState, EngineError> {
    let Some(chooser) = sides.iter().find(|s| !s.is_bot()) else {
        return Ok(NimState::random(rng));
    };
    let question = format!(
        "{}, with how many matches do we play? ({} to {})",
        chooser.display_name(),
        START_RANGE.start(),
        START_RANGE.end()
    );
    let start = table.ask_number(NimState::TITLE, &question, NumberPrompt::new(), |n| {
        NimState::new(n).map(|_| ()).map_err(|e| e.to_string())
    })?;
    info!(start, "Starting count chosen");
    NimState::new(start).map_err(|e| EngineError::Setup(e.to_string()))
}

/// Keyboard input for one human seat.
pub struct NimInput<B: Backend> {
    table: SharedTable<B>,
    name: String,
    error: Option<String>,
}

impl<B: Backend> NimInput<B> {
    /// Creates the input for the player called `name`.
    pub fn new(table: SharedTable<B>, name: String) -> Self {
        Self {
            table,
            name,
            error: None,
        }
    }
}

impl<B: Backend> MoveSource<NimState> for NimInput<B> {
    fn get_move(&mut self, game: &NimState, _seat: Seat) -> Result<Take, EngineError> {
        let error = self.error.take();
        let prompt = format!(
            "{}, take between 1 and {} matches",
            self.name,
            game.max_take()
        );
        let mut table = self.table.borrow_mut();
        loop {
            let caption = Caption {
                prompt: &prompt,
                error: error.as_deref(),
                help: "1 / 2 / 3: Take | Ctrl-C: Abort",
            };
            table.show(game, &(), caption)?;
            if let KeyCode::Char(c @ '1'..='3') = table.key()?.code {
                return Ok(Take(u32::from(c) - u32::from('0')));
            }
        }
    }

    fn rejected(&mut self, error: &MoveError) {
        self.error = Some(error.to_string());
    }
}
