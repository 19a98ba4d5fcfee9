use tictactoe_engine::games::tictactoe::{BOARD_SIZE, Board, Cell, GameOutcome, Position, Side};

/// Text grid; empty cells show the 1-based number a player types to claim them.
pub fn render_board(board: &Board) -> String {
    let rows: Vec<String> = board
        .cells()
        .chunks(BOARD_SIZE)
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(col, cell)| match cell {
                    Cell::Mark(side) => format!(" {} ", side),
                    Cell::Empty => format!(" {} ", row * BOARD_SIZE + col + 1),
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();

    rows.join("\n---+---+---\n")
}

fn describe_position(position: Position) -> String {
    format!("row {}, col {}", position.row + 1, position.col + 1)
}

pub fn describe_outcome(outcome: &GameOutcome, side_to_move: Side) -> String {
    match outcome {
        GameOutcome::InProgress => format!("Player {}'s turn", side_to_move),
        GameOutcome::Win { side, pattern } => format!(
            "Player {} wins! Line from {} to {}",
            side,
            describe_position(pattern.start()),
            describe_position(pattern.end())
        ),
        GameOutcome::Draw => "It's a draw".to_string(),
    }
}
