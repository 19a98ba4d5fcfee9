use std::fmt;

use crate::games::SessionRng;
use crate::log;
use super::board::{Board, InvalidMove};
use super::bot_controller::{BotInput, calculate_move};
use super::types::{GameMode, GameOutcome, Side};
use super::win_detector::evaluate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    GameOver,
    Invalid(InvalidMove),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::GameOver => write!(f, "Game is already over"),
            MoveError::Invalid(e) => write!(f, "Invalid move: {}", e),
        }
    }
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::Invalid(e) => Some(e),
            MoveError::GameOver => None,
        }
    }
}

impl From<InvalidMove> for MoveError {
    fn from(e: InvalidMove) -> Self {
        MoveError::Invalid(e)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotMove {
    pub index: usize,
    pub outcome: GameOutcome,
}

/// One game between X and O. The caller owns it and decides when to restart.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    current_side: Side,
    mode: GameMode,
    last_move: Option<usize>,
}

impl TicTacToeGameState {
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            current_side: Side::X,
            mode,
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_side(&self) -> Side {
        self.current_side
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn outcome(&self) -> GameOutcome {
        evaluate(&self.board)
    }

    /// Places the current side's mark. Terminal outcomes are absorbing until [`reset`](Self::reset).
    pub fn place_mark(&mut self, index: usize) -> Result<GameOutcome, MoveError> {
        if self.outcome().is_over() {
            return Err(MoveError::GameOver);
        }

        self.board = self.board.apply_move(index, self.current_side)?;
        self.last_move = Some(index);

        let outcome = self.outcome();
        if !outcome.is_over() {
            self.current_side = self.current_side.opponent();
        }

        Ok(outcome)
    }

    pub fn is_bot_turn(&self) -> bool {
        self.mode.bot_side() == Some(self.current_side) && !self.outcome().is_over()
    }

    /// Lets the automated side move. `Ok(None)` when it is not the bot's turn.
    pub fn play_bot_move(&mut self, rng: &mut SessionRng) -> Result<Option<BotMove>, MoveError> {
        let Some(bot_type) = self.mode.bot_type() else {
            return Ok(None);
        };
        if !self.is_bot_turn() {
            return Ok(None);
        }

        let side = self.current_side;
        let Some(index) = calculate_move(bot_type, BotInput::from_game_state(self), rng) else {
            return Ok(None);
        };

        let outcome = self.place_mark(index)?;
        log!("{:?} bot played {} at cell {} on {}", bot_type, side, index, self.board);

        Ok(Some(BotMove { index, outcome }))
    }

    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_side = Side::X;
        self.last_move = None;
    }

    /// Switching modes restarts the game.
    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.reset();
    }
}
