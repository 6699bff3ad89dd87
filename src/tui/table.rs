//! The match screen: header, board, prompt and key help.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use parlor_engine::{Annotations, EngineError, Renderer, TurnGame};
use ratatui::{
    Frame,
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tracing::{debug, instrument};

use crate::config::ParlorConfig;
use crate::tui::console::Console;
use crate::tui::prompt::{NumberPrompt, PromptEvent};

/// How a game draws itself inside the match screen.
pub trait GameView: TurnGame {
    /// Extra, input-specific decoration (cursor, falling token…).
    type Overlay: Default;

    /// Screen title.
    const TITLE: &'static str;

    /// Draws the board into `area`.
    fn draw_board(&self, frame: &mut Frame, area: Rect, overlay: &Self::Overlay);

    /// Intermediate frames shown before the state after a move.
    fn drop_frames(&self) -> Vec<Self::Overlay> {
        Vec::new()
    }
}

/// Text around the board.
#[derive(Debug, Clone, Copy, Default)]
pub struct Caption<'a> {
    /// Question or instruction for the player to move.
    pub prompt: &'a str,
    /// Error from the last attempt, shown in red.
    pub error: Option<&'a str>,
    /// Key help.
    pub help: &'a str,
}

/// The terminal as seen during a match, shared by renderer and human inputs.
pub struct Table<B: Backend> {
    console: Console<B>,
    headline: String,
    bot_delay: Duration,
    drop_frame: Duration,
}

/// Shared handle to the [`Table`].
pub type SharedTable<B> = Rc<RefCell<Table<B>>>;

impl<B: Backend> Table<B> {
    /// Wraps a console with the configured pacing.
    pub fn new(console: Console<B>, config: &ParlorConfig) -> Self {
        Self {
            console,
            headline: String::new(),
            bot_delay: Duration::from_millis(*config.bot_delay_ms()),
            drop_frame: Duration::from_millis(*config.drop_frame_ms()),
        }
    }

    /// Wraps into a shared handle.
    pub fn shared(self) -> SharedTable<B> {
        Rc::new(RefCell::new(self))
    }

    /// The console, for screens outside a match.
    pub fn console(&mut self) -> &mut Console<B> {
        &mut self.console
    }

    /// Sets the line shown under the title.
    pub fn set_headline(&mut self, headline: impl Into<String>) {
        self.headline = headline.into();
    }

    /// Draws the match screen.
    pub fn show<G: GameView>(
        &mut self,
        game: &G,
        overlay: &G::Overlay,
        caption: Caption<'_>,
    ) -> Result<(), EngineError> {
        let headline = self.headline.clone();
        self.console.draw(|frame| {
            let board = match_layout(frame, G::TITLE, &headline, caption);
            game.draw_board(frame, board, overlay);
        })
    }

    /// Asks for a number outside the board, re-asking until `validate`
    /// accepts it.
    #[instrument(skip(self, validate))]
    pub fn ask_number(
        &mut self,
        title: &str,
        question: &str,
        mut prompt: NumberPrompt,
        validate: impl Fn(u32) -> Result<(), String>,
    ) -> Result<u32, EngineError> {
        let mut error: Option<String> = None;
        loop {
            let entry = prompt.display();
            let caption = Caption {
                prompt: question,
                error: error.as_deref(),
                help: prompt.help(),
            };
            self.console.draw(|frame| {
                let area = match_layout(frame, title, "", caption);
                let entry = Paragraph::new(entry.as_str())
                    .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
                    .alignment(Alignment::Center);
                frame.render_widget(entry, center_rect(area, 30, 1));
            })?;

            let key = self.console.match_key()?;
            if let PromptEvent::Submit(value) = prompt.handle(&key) {
                match validate(value) {
                    Ok(()) => {
                        debug!(value, "Number accepted");
                        return Ok(value);
                    }
                    Err(message) => error = Some(message),
                }
            }
        }
    }

    /// Next key press during a match; Ctrl-C aborts.
    pub fn key(&mut self) -> Result<crossterm::event::KeyEvent, EngineError> {
        self.console.match_key()
    }
}

/// Lays out title, headline, prompt and help; returns the board area.
pub fn match_layout(frame: &mut Frame, title: &str, headline: &str, caption: Caption<'_>) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(1), // Headline
            Constraint::Min(9),    // Board
            Constraint::Length(1), // Prompt
            Constraint::Length(1), // Error
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    frame.render_widget(
        Paragraph::new(headline)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new(caption.prompt)
            .style(Style::default().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center),
        chunks[3],
    );
    frame.render_widget(
        Paragraph::new(caption.error.unwrap_or(""))
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center),
        chunks[4],
    );
    frame.render_widget(
        Paragraph::new(caption.help)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL)),
        chunks[5],
    );
    chunks[2]
}

/// A `width`×`height` rectangle centred in `area`.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

/// Headline for a render call.
pub fn headline(annotations: &Annotations) -> String {
    match annotations.last_move() {
        Some(mv) => format!("{}: {}", annotations.active(), mv),
        None => format!("{} plays first", annotations.active()),
    }
}

/// Renderer drawing onto the shared table.
pub struct TableRenderer<B: Backend> {
    table: SharedTable<B>,
}

impl<B: Backend> TableRenderer<B> {
    /// Creates a renderer for `table`.
    pub fn new(table: SharedTable<B>) -> Self {
        Self { table }
    }
}

impl<B: Backend, G: GameView> Renderer<G> for TableRenderer<B> {
    #[instrument(skip_all, fields(game = G::NAME, turn = annotations.turn()))]
    fn render(&mut self, game: &G, annotations: &Annotations) -> Result<(), EngineError> {
        let mut table = self.table.borrow_mut();
        table.set_headline(headline(annotations));

        if annotations.last_move().is_some() {
            let frames = game.drop_frames();
            if !frames.is_empty() {
                for overlay in &frames {
                    table.show(game, overlay, Caption::default())?;
                    std::thread::sleep(table.drop_frame);
                }
                table.console.discard_pending()?;
            }
        }

        table.show(game, &G::Overlay::default(), Caption::default())?;
        if *annotations.by_bot() {
            std::thread::sleep(table.bot_delay);
        }
        Ok(())
    }
}
