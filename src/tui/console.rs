//! Terminal plus keyboard, behind one handle.

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use parlor_engine::EngineError;
use ratatui::{Frame, Terminal, backend::Backend};
use tracing::{debug, instrument};

/// Where key presses come from.
pub trait KeySource {
    /// Blocks until the next key press.
    fn next_key(&mut self) -> io::Result<KeyEvent>;

    /// Drops key presses that arrived while the screen was busy.
    fn discard_pending(&mut self) -> io::Result<()>;
}

/// Key presses from the real terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct CrosstermKeys;

impl KeySource for CrosstermKeys {
    fn next_key(&mut self) -> io::Result<KeyEvent> {
        loop {
            // Skip key release events (crossterm fires both press and release).
            if let Event::Key(key) = event::read()?
                && key.kind != KeyEventKind::Release
            {
                return Ok(key);
            }
        }
    }

    fn discard_pending(&mut self) -> io::Result<()> {
        let mut dropped = 0usize;
        while event::poll(Duration::ZERO)? {
            event::read()?;
            dropped += 1;
        }
        if dropped > 0 {
            debug!(dropped, "Discarded buffered input");
        }
        Ok(())
    }
}

/// A fixed sequence of key presses, for driving screens without a terminal.
///
/// Running out of keys reads as Ctrl-C.
#[derive(Debug, Default, Clone)]
pub struct ScriptedKeys {
    keys: VecDeque<KeyEvent>,
}

impl ScriptedKeys {
    /// Creates a script from key codes.
    pub fn new(codes: impl IntoIterator<Item = KeyCode>) -> Self {
        Self {
            keys: codes.into_iter().map(KeyEvent::from).collect(),
        }
    }

    /// Types every character of `text`.
    pub fn typed(text: &str) -> impl Iterator<Item = KeyCode> + '_ {
        text.chars().map(KeyCode::Char)
    }
}

impl KeySource for ScriptedKeys {
    fn next_key(&mut self) -> io::Result<KeyEvent> {
        Ok(self
            .keys
            .pop_front()
            .unwrap_or_else(|| KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)))
    }

    fn discard_pending(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// True for Ctrl-C.
pub fn is_interrupt(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// The terminal and its keyboard.
pub struct Console<B: Backend> {
    terminal: Terminal<B>,
    keys: Box<dyn KeySource>,
}

impl<B: Backend> Console<B> {
    /// Wraps a terminal and a key source.
    pub fn new(terminal: Terminal<B>, keys: Box<dyn KeySource>) -> Self {
        Self { terminal, keys }
    }

    /// Draws one frame.
    pub fn draw(&mut self, render: impl FnOnce(&mut Frame)) -> Result<(), EngineError> {
        self.terminal
            .draw(render)
            .map(|_| ())
            .map_err(|e| EngineError::Input(e.to_string()))
    }

    /// Next key press, as typed.
    #[instrument(skip(self))]
    pub fn key(&mut self) -> Result<KeyEvent, EngineError> {
        Ok(self.keys.next_key()?)
    }

    /// Next key press during a match; Ctrl-C aborts the match.
    pub fn match_key(&mut self) -> Result<KeyEvent, EngineError> {
        let key = self.key()?;
        if is_interrupt(&key) {
            debug!("Match interrupted from the keyboard");
            return Err(EngineError::Interrupted);
        }
        Ok(key)
    }

    /// Drops buffered key presses.
    pub fn discard_pending(&mut self) -> Result<(), EngineError> {
        Ok(self.keys.discard_pending()?)
    }

    /// The wrapped terminal.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}
