use crate::games::SessionRng;
use super::board::Board;
use super::game_state::TicTacToeGameState;
use super::types::{BotType, GameOutcome, MoveResult, Side};
use super::win_detector::evaluate;

/// Score of a won position from O's point of view. X wins score the negation.
pub const WIN_SCORE: i32 = 10;
pub const DRAW_SCORE: i32 = 0;

pub struct BotInput {
    pub board: Board,
    pub current_side: Side,
}

impl BotInput {
    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: *state.board(),
            current_side: state.current_side(),
        }
    }
}

pub fn calculate_move(
    bot_type: BotType,
    input: BotInput,
    rng: &mut SessionRng,
) -> Option<usize> {
    match bot_type {
        BotType::Random => calculate_random_move(&input.board, rng),
        BotType::Minimax => calculate_minimax_move(&input),
    }
}

/// Uniform pick among the empty cells; `None` on a full board.
pub fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<usize> {
    rng.choose(&board.empty_indices())
}

pub fn calculate_minimax_move(input: &BotInput) -> Option<usize> {
    best_move(&input.board, input.current_side).index
}

/// Exhaustive minimax for `side` to move.
///
/// A decided board yields no index and its terminal score: +10 for O, -10 for X, 0 for a draw.
/// Scores do not depend on depth, and among equal scores the lowest cell index is kept.
pub fn best_move(board: &Board, side: Side) -> MoveResult {
    match evaluate(board) {
        GameOutcome::Win { side: winner, .. } => MoveResult {
            index: None,
            score: terminal_score(winner),
        },
        GameOutcome::Draw => MoveResult {
            index: None,
            score: DRAW_SCORE,
        },
        GameOutcome::InProgress => select_move(board, side),
    }
}

fn select_move(board: &Board, side: Side) -> MoveResult {
    let mut best = MoveResult {
        index: None,
        score: DRAW_SCORE,
    };

    for index in board.empty_indices() {
        let next = board.with_mark(index, side);
        let score = best_move(&next, side.opponent()).score;

        let improves = match best.index {
            None => true,
            Some(_) if side.is_maximizing() => score > best.score,
            Some(_) => score < best.score,
        };

        if improves {
            best = MoveResult {
                index: Some(index),
                score,
            };
        }
    }

    best
}

fn terminal_score(winner: Side) -> i32 {
    if winner.is_maximizing() {
        WIN_SCORE
    } else {
        -WIN_SCORE
    }
}
