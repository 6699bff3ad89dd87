//! Digit entry with optional hiding.

use crossterm::event::{KeyCode, KeyEvent};

/// Longest accepted entry; keeps the value inside `u32`.
const MAX_DIGITS: usize = 9;

/// What a key did to the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptEvent {
    /// Still typing.
    Pending,
    /// Enter pressed on a non-empty entry.
    Submit(u32),
}

/// A number being typed.
///
/// When hidable, `h` masks the digits and `s` shows them again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberPrompt {
    digits: String,
    hidden: bool,
    hidable: bool,
}

impl NumberPrompt {
    /// A plain prompt.
    pub fn new() -> Self {
        Self::default()
    }

    /// A prompt whose entry can be hidden from onlookers.
    pub fn hidable() -> Self {
        Self {
            hidable: true,
            ..Self::default()
        }
    }

    /// Applies one key.
    pub fn handle(&mut self, key: &KeyEvent) -> PromptEvent {
        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() && self.digits.len() < MAX_DIGITS => {
                self.digits.push(c);
            }
            KeyCode::Backspace => {
                self.digits.pop();
            }
            KeyCode::Char('h' | 'H') if self.hidable => self.hidden = true,
            KeyCode::Char('s' | 'S') if self.hidable => self.hidden = false,
            KeyCode::Enter => {
                if let Ok(value) = self.digits.parse() {
                    self.digits.clear();
                    return PromptEvent::Submit(value);
                }
            }
            _ => {}
        }
        PromptEvent::Pending
    }

    /// The entry as shown on screen.
    pub fn display(&self) -> String {
        if self.hidden {
            "> <hidden>".to_string()
        } else {
            format!("> {}", self.digits)
        }
    }

    /// Key help for this prompt.
    pub fn help(&self) -> &'static str {
        if self.hidable {
            "0-9: Type | Enter: Confirm | h: Hide | s: Show | Ctrl-C: Abort"
        } else {
            "0-9: Type | Enter: Confirm | Ctrl-C: Abort"
        }
    }
}
