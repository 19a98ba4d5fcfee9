use super::board::Board;
use super::types::{Cell, GameOutcome, Side, WIN_PATTERNS, WinPattern};

/// First pattern, in declaration order, fully held by one side.
pub fn check_win(board: &Board) -> Option<(Side, WinPattern)> {
    let cells = board.cells();
    for pattern in WIN_PATTERNS {
        let [a, b, c] = pattern.cells();
        if let Cell::Mark(side) = cells[a]
            && cells[b] == cells[a]
            && cells[c] == cells[a]
        {
            return Some((side, pattern));
        }
    }
    None
}

pub fn evaluate(board: &Board) -> GameOutcome {
    if let Some((side, pattern)) = check_win(board) {
        return GameOutcome::Win { side, pattern };
    }

    if board.is_full() {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}
