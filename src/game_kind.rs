//! The games offered by the suite.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// How a game's scoreboard ranks players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankRule {
    /// `(wins, total)` per player, best win rate first.
    WinRate,
    /// One efficiency score per match, lowest first.
    Efficiency,
}

/// One of the four games, in menu order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[strum(serialize_all = "kebab-case")]
pub enum GameKind {
    /// Higher/lower.
    Guess,
    /// Misère matchsticks.
    Nim,
    /// Tic-tac-toe.
    #[strum(serialize = "tictactoe")]
    TicTacToe,
    /// Connect-four.
    ConnectFour,
}

impl GameKind {
    /// All games, in menu order.
    pub fn all() -> Vec<GameKind> {
        Self::iter().collect()
    }

    /// Title shown in menus and headers.
    pub fn title(self) -> &'static str {
        match self {
            GameKind::Guess => "Higher or Lower",
            GameKind::Nim => "Matchsticks",
            GameKind::TicTacToe => "Tic-Tac-Toe",
            GameKind::ConnectFour => "Connect Four",
        }
    }

    /// Score file name inside the scores directory.
    pub fn score_file(self) -> &'static str {
        match self {
            GameKind::Guess => "guess.txt",
            GameKind::Nim => "nim.txt",
            GameKind::TicTacToe => "tictactoe.txt",
            GameKind::ConnectFour => "connect_four.txt",
        }
    }

    /// Ranking rule for the scoreboard.
    pub fn rank_rule(self) -> RankRule {
        match self {
            GameKind::Guess => RankRule::Efficiency,
            _ => RankRule::WinRate,
        }
    }

    /// Question asked while choosing roles; the selected player becomes side A.
    pub fn role_question(self) -> &'static str {
        match self {
            GameKind::Guess => "Who hides the number?",
            _ => "Who starts?",
        }
    }

    /// Rules shown during role selection.
    pub fn rules(self) -> &'static [&'static str] {
        match self {
            GameKind::Guess => &[
                "One player picks a maximum (at least 10) and hides a number",
                "between 0 and that maximum. The other player guesses; after",
                "each guess the hider answers + (greater), - (lower) or = (found).",
                "Each wrong answer costs the hider one of two lives.",
                "The fewer guesses per maximum, the better the score.",
            ],
            GameKind::Nim => &[
                "Between 15 and 30 matches are laid out.",
                "Each turn, take 1, 2 or 3 matches.",
                "Whoever takes the last match loses.",
            ],
            GameKind::TicTacToe => &[
                "Players take turns marking an empty square of a 3×3 grid.",
                "Three marks in a row, column or diagonal win.",
                "A full grid without a line is a tie.",
            ],
            GameKind::ConnectFour => &[
                "Players take turns dropping a token into one of 7 columns.",
                "Tokens fall to the lowest free cell.",
                "Four tokens in a line, in any direction, win.",
                "A full grid without a line is a tie.",
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_cli_names() {
        assert_eq!(GameKind::from_str("nim").unwrap(), GameKind::Nim);
        assert_eq!(GameKind::from_str("tictactoe").unwrap(), GameKind::TicTacToe);
        assert_eq!(
            GameKind::from_str("connect-four").unwrap(),
            GameKind::ConnectFour
        );
        assert_eq!(GameKind::ConnectFour.to_string(), "connect-four");
        assert!(GameKind::from_str("chess").is_err());
    }

    #[test]
    fn test_menu_order() {
        assert_eq!(
            GameKind::all(),
            vec![
                GameKind::Guess,
                GameKind::Nim,
                GameKind::TicTacToe,
                GameKind::ConnectFour
            ]
        );
    }
}
