use std::fmt;
use std::str::FromStr;

use super::types::{BOARD_SIZE, CELL_COUNT, Cell, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMove {
    OutOfRange(usize),
    Occupied(usize),
}

impl fmt::Display for InvalidMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidMove::OutOfRange(index) => {
                write!(f, "Cell {} is outside the board (0-{})", index, CELL_COUNT - 1)
            }
            InvalidMove::Occupied(index) => write!(f, "Cell {} is already marked", index),
        }
    }
}

impl std::error::Error for InvalidMove {}

/// The 9 cells of a 3x3 board in row-major order.
///
/// `Board` is `Copy`: applying a move yields a new board and leaves the original untouched,
/// so search branches never share state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn apply_move(&self, index: usize, side: Side) -> Result<Board, InvalidMove> {
        match self.get(index) {
            None => Err(InvalidMove::OutOfRange(index)),
            Some(Cell::Mark(_)) => Err(InvalidMove::Occupied(index)),
            Some(Cell::Empty) => Ok(self.with_mark(index, side)),
        }
    }

    /// Caller guarantees `index` is an empty in-range cell.
    pub(crate) fn with_mark(&self, index: usize, side: Side) -> Board {
        let mut next = *self;
        next.cells[index] = Cell::Mark(side);
        next
    }

    pub fn empty_indices(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn count(&self, side: Side) -> usize {
        self.cells
            .iter()
            .filter(|&&cell| cell == Cell::Mark(side))
            .count()
    }
}

/// Compact notation: `X`, `O` and `.` per cell, rows separated by `/`.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(BOARD_SIZE).enumerate() {
            if row > 0 {
                write!(f, "/")?;
            }
            for cell in chunk {
                let symbol = cell.side().map_or('.', Side::as_char);
                write!(f, "{}", symbol)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .collect();

        if symbols.len() != CELL_COUNT {
            return Err(format!(
                "Board needs exactly {} cells, got {}",
                CELL_COUNT,
                symbols.len()
            ));
        }

        let mut cells = [Cell::Empty; CELL_COUNT];
        for (index, symbol) in symbols.into_iter().enumerate() {
            cells[index] = match symbol.to_ascii_uppercase() {
                'X' => Cell::Mark(Side::X),
                'O' => Cell::Mark(Side::O),
                '.' => Cell::Empty,
                other => return Err(format!("Unexpected cell symbol '{}'", other)),
            };
        }

        Ok(Self { cells })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.empty_indices(), (0..CELL_COUNT).collect::<Vec<_>>());
        assert!(!board.is_full());
    }

    #[test]
    fn test_apply_move_sets_cell_and_keeps_original() {
        let board = Board::new();
        let next = board.apply_move(4, Side::X).unwrap();
        assert_eq!(next.get(4), Some(Cell::Mark(Side::X)));
        assert_eq!(board.get(4), Some(Cell::Empty));
        assert_eq!(next.count(Side::X), 1);
    }

    #[test]
    fn test_apply_move_on_occupied_cell_fails() {
        let board: Board = "X../.../...".parse().unwrap();
        assert_eq!(board.apply_move(0, Side::O), Err(InvalidMove::Occupied(0)));
        assert_eq!(board.to_string(), "X../.../...");
    }

    #[test]
    fn test_apply_move_out_of_range_fails() {
        let board = Board::new();
        assert_eq!(board.apply_move(9, Side::X), Err(InvalidMove::OutOfRange(9)));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_empty_indices_ascending() {
        let board: Board = "XO./.X./O..".parse().unwrap();
        assert_eq!(board.empty_indices(), vec![2, 3, 5, 7, 8]);
    }

    #[test]
    fn test_full_board_has_no_empty_indices() {
        let board: Board = "XOX/XOO/OXX".parse().unwrap();
        assert!(board.is_full());
        assert!(board.empty_indices().is_empty());
    }

    #[test]
    fn test_parse_ignores_layout() {
        let compact: Board = "OO.XX....".parse().unwrap();
        let spaced: Board = "O O .\n X X .\n . . .".parse().unwrap();
        assert_eq!(compact, spaced);
        assert_eq!(compact.to_string(), "OO./XX./...");
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!("XO".parse::<Board>().is_err());
        assert!("XOZ/.../...".parse::<Board>().is_err());
    }
}
