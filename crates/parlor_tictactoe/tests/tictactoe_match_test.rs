//! Full tic-tac-toe matches through the turn engine.

use parlor_engine::{
    EngineError, Identity, MoveSource, Outcome, Policy, Scoring, Seat, Session, Tier,
    TraceRenderer, TurnGame,
};
use parlor_tictactoe::{
    Board, Mark, MoveError, Position, Square, TicTacToeBot, TicTacToeState, choose_cell,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

struct Scripted(Vec<Position>);

impl MoveSource<TicTacToeState> for Scripted {
    fn get_move(&mut self, _game: &TicTacToeState, _seat: Seat) -> Result<Position, EngineError> {
        if self.0.is_empty() {
            return Err(EngineError::Interrupted);
        }
        Ok(self.0.remove(0))
    }
}

fn scripted_session(
    a: Vec<Position>,
    b: Vec<Position>,
) -> Session<'static, TicTacToeState> {
    Session::new(
        TicTacToeState::new(),
        [Identity::human("ana"), Identity::human("ben")],
        [Box::new(Scripted(a)), Box::new(Scripted(b))],
    )
}

#[test]
fn test_top_row_wins_for_side_a() {
    use Position::*;
    let session = scripted_session(
        vec![TopLeft, TopCenter, TopRight],
        vec![MiddleLeft, Center],
    );
    let report = session.run(&mut TraceRenderer).expect("match finishes");
    assert_eq!(
        *report.outcome(),
        Outcome::Decided {
            winner: Seat::First,
            loser: Seat::Second
        }
    );
    assert_eq!(report.turns(), 5);
}

#[test]
fn test_full_board_is_tie() {
    use Position::*;
    // X O X / X O O / O X X
    let session = scripted_session(
        vec![TopLeft, TopRight, MiddleLeft, BottomCenter, BottomRight],
        vec![TopCenter, Center, MiddleRight, BottomLeft],
    );
    let report = session.run(&mut TraceRenderer).expect("match finishes");
    assert_eq!(*report.outcome(), Outcome::Tie);
    assert_eq!(
        *report.scoring(),
        Scoring::Match {
            winner: Seat::First,
            loser: Seat::Second,
            tie: true
        }
    );
}

#[test]
fn test_occupied_square_is_reprompted() {
    use Position::*;
    // Side B's first attempt at the centre is rejected; TopCenter is used instead.
    let session = scripted_session(
        vec![Center, TopLeft, BottomRight],
        vec![Center, TopCenter, TopRight],
    );
    let report = session.run(&mut TraceRenderer).expect("match finishes");
    assert_eq!(report.game().board().get(Center), Square::Occupied(Mark::X));
    assert_eq!(
        report.game().history(),
        &[Center, TopCenter, TopLeft, TopRight, BottomRight]
    );
    assert_eq!(report.outcome().winner(), Some(Seat::First));
}

#[test]
fn test_strategic_blocks_opponent() {
    let board = Board::from_rows(["OO.", "X..", "..."]);
    let mut rng = StdRng::seed_from_u64(3);
    assert_eq!(
        choose_cell(&board, Mark::X, Policy::Strategic, &mut rng),
        Some(Position::TopRight)
    );
}

#[test]
fn test_strategic_prefers_winning_over_blocking() {
    let board = Board::from_rows(["OO.", "XX.", "..."]);
    let mut rng = StdRng::seed_from_u64(3);
    assert_eq!(
        choose_cell(&board, Mark::X, Policy::Strategic, &mut rng),
        Some(Position::MiddleRight)
    );
}

#[test]
fn test_bot_matches_always_finish() {
    for seed in 0..50 {
        for (first, second) in [(Tier::Hard, Tier::Easy), (Tier::Medium, Tier::Hard)] {
            let session = Session::new(
                TicTacToeState::new(),
                [Identity::bot(1, first), Identity::bot(2, second)],
                [
                    Box::new(TicTacToeBot::with_seed(first, seed)),
                    Box::new(TicTacToeBot::with_seed(second, seed + 500)),
                ],
            );
            let report = session.run(&mut TraceRenderer).expect("bots finish");
            assert!(report.turns() >= 5 && report.turns() <= 9);
            assert!(report.game().status(Seat::First).is_over());
        }
    }
}

#[test]
fn test_move_error_display() {
    assert_eq!(
        MoveError::SquareOccupied(Position::Center).to_string(),
        "Center is already occupied"
    );
}
