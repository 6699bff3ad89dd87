//! Higher/lower on the terminal.

use crossterm::event::KeyCode;
use parlor_engine::{EngineError, Identity, MoveSource, Seat};
use parlor_guess::{
    GUESSER, GuessBot, GuessMove, GuessState, HOLDER, MIN_MAXIMUM, MoveError, Phase, Response,
};
use ratatui::{
    Frame,
    backend::Backend,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tracing::{info, instrument};

use crate::tui::prompt::{NumberPrompt, PromptEvent};
use crate::tui::table::{Caption, GameView, SharedTable, Table, center_rect};

impl GameView for GuessState {
    type Overlay = ();
    const TITLE: &'static str = "Higher or Lower";

    fn draw_board(&self, frame: &mut Frame, area: Rect, _overlay: &()) {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let mut lines = vec![
            Line::from(format!("The number lies between 0 and {}", self.maximum())),
            Line::from(format!(
                "Guesses: {}    Lives: {}",
                self.guesses(),
                "♥ ".repeat(self.lives() as usize).trim_end()
            )),
            Line::from(""),
        ];

        if let Some(exchange) = self.last_exchange() {
            lines.push(Line::from(Span::styled(reveal(exchange.guess, exchange.truth), bold)));
            if !exchange.is_honest() {
                lines.push(Line::from(Span::styled(
                    "That answer was wrong, a life is lost!",
                    Style::default().fg(Color::Red),
                )));
            }
        }
        if let Phase::Answering { guess } = self.phase() {
            lines.push(Line::from(Span::styled(
                format!("Is it {}?", guess),
                bold.fg(Color::Yellow),
            )));
        }
        if self.is_finished() {
            lines.push(Line::from(format!("The number was {}", self.secret())));
        }

        let height = lines.len() as u16;
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            center_rect(area, 48, height),
        );
    }
}

/// The sentence revealing how the secret compares to `guess`.
pub fn reveal(guess: u32, truth: Response) -> String {
    match truth {
        Response::Greater => format!("The number is greater than {}!", guess),
        Response::Lower => format!("The number is lower than {}!", guess),
        Response::Equal => format!("{} is the number!", guess),
    }
}

/// Agrees on the maximum and the secret.
///
/// A human holder types both, the secret on a hidable prompt. A bot holder
/// samples them from its tier's range and is returned to act as the
/// holder's move source.
#[instrument(skip_all)]
pub fn setup<B: Backend>(
    table: &mut Table<B>,
    sides: &[Identity; 2],
) -> Result<(GuessState, Option<GuessBot>), EngineError> {
    let holder = &sides[HOLDER.index()];
    if let Some(tier) = holder.tier() {
        let mut bot = GuessBot::new(tier);
        let (maximum, secret) = bot.choose_setup();
        info!(maximum, %tier, "Bot holder chose a secret");
        let state =
            GuessState::new(maximum, secret).map_err(|e| EngineError::Setup(e.to_string()))?;
        return Ok((state, Some(bot)));
    }

    let name = holder.display_name();
    let maximum = table.ask_number(
        GuessState::TITLE,
        &format!("{}, what is the maximum? (at least {})", name, MIN_MAXIMUM),
        NumberPrompt::new(),
        |n| {
            if n < MIN_MAXIMUM {
                Err(MoveError::MaximumTooSmall(n).to_string())
            } else {
                Ok(())
            }
        },
    )?;
    let secret = table.ask_number(
        GuessState::TITLE,
        &format!(
            "{}, choose your number between 0 and {} (keep it secret from {})",
            name,
            maximum,
            sides[GUESSER.index()].display_name()
        ),
        NumberPrompt::hidable(),
        |n| {
            GuessState::new(maximum, n)
                .map(|_| ())
                .map_err(|e| e.to_string())
        },
    )?;
    info!(maximum, "Human holder chose a secret");
    let state =
        GuessState::new(maximum, secret).map_err(|e| EngineError::Setup(e.to_string()))?;
    Ok((state, None))
}

/// Keyboard input for a human on either side of the table.
pub struct GuessInput<B: Backend> {
    table: SharedTable<B>,
    name: String,
    prompt: NumberPrompt,
    error: Option<String>,
}

impl<B: Backend> GuessInput<B> {
    /// Creates the input for the player called `name`.
    pub fn new(table: SharedTable<B>, name: String) -> Self {
        Self {
            table,
            name,
            prompt: NumberPrompt::new(),
            error: None,
        }
    }

    fn ask_guess(&mut self, game: &GuessState) -> Result<GuessMove, EngineError> {
        let mut table = self.table.borrow_mut();
        let mut error = self.error.take();
        loop {
            let prompt = format!("{}, your guess {}", self.name, self.prompt.display());
            let caption = Caption {
                prompt: &prompt,
                error: error.as_deref(),
                help: self.prompt.help(),
            };
            table.show(game, &(), caption)?;
            let key = table.key()?;
            if let PromptEvent::Submit(value) = self.prompt.handle(&key) {
                return Ok(GuessMove::Guess(value));
            }
            error = None;
        }
    }

    fn ask_answer(&mut self, game: &GuessState, guess: u32) -> Result<GuessMove, EngineError> {
        let mut table = self.table.borrow_mut();
        let error = self.error.take();
        let prompt = format!("{}, is your number greater, lower or equal to {}?", self.name, guess);
        loop {
            let caption = Caption {
                prompt: &prompt,
                error: error.as_deref(),
                help: "+: Greater | -: Lower | =: Equal | Ctrl-C: Abort",
            };
            table.show(game, &(), caption)?;
            if let KeyCode::Char(c) = table.key()?.code
                && let Some(response) = Response::from_key(c)
            {
                return Ok(GuessMove::Answer(response));
            }
        }
    }
}

impl<B: Backend> MoveSource<GuessState> for GuessInput<B> {
    fn get_move(&mut self, game: &GuessState, _seat: Seat) -> Result<GuessMove, EngineError> {
        match game.phase() {
            Phase::Guessing => self.ask_guess(game),
            Phase::Answering { guess } => self.ask_answer(game, guess),
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
    fn test_reveal_sentences() {
        assert_eq!(reveal(50, Response::Greater), "The number is greater than 50!");
        assert_eq!(reveal(75, Response::Lower), "The number is lower than 75!");
        assert_eq!(reveal(62, Response::Equal), "62 is the number!");
    }
}
