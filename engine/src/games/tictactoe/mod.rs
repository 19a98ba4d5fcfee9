mod board;
mod bot_controller;
mod game_state;
mod types;
mod win_detector;

pub use board::{Board, InvalidMove};
pub use bot_controller::{
    BotInput, DRAW_SCORE, WIN_SCORE, best_move, calculate_minimax_move, calculate_move,
    calculate_random_move,
};
pub use game_state::{BotMove, MoveError, TicTacToeGameState};
pub use types::{
    BOARD_SIZE, BotType, CELL_COUNT, Cell, GameMode, GameOutcome, MoveResult, Position, Side,
    WIN_PATTERNS, WinPattern,
};
pub use win_detector::{check_win, evaluate};
