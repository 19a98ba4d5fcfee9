use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// One of the two players. X moves first and minimizes, O maximizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    X,
    O,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::X => Side::O,
            Side::O => Side::X,
        }
    }

    pub fn is_maximizing(self) -> bool {
        self == Side::O
    }

    pub fn as_char(self) -> char {
        match self {
            Side::X => 'X',
            Side::O => 'O',
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Mark(Side),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Mark(side) => Some(side),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn from_index(index: usize) -> Self {
        Self::new(index / BOARD_SIZE, index % BOARD_SIZE)
    }

    pub fn to_index(&self) -> usize {
        self.row * BOARD_SIZE + self.col
    }
}

/// Three board indices forming a winning line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WinPattern(pub [usize; 3]);

impl WinPattern {
    pub fn cells(&self) -> [usize; 3] {
        self.0
    }

    pub fn start(&self) -> Position {
        Position::from_index(self.0[0])
    }

    pub fn end(&self) -> Position {
        Position::from_index(self.0[2])
    }
}

/// Rows, then columns, then diagonals. Win detection scans in this order.
pub const WIN_PATTERNS: [WinPattern; 8] = [
    WinPattern([0, 1, 2]),
    WinPattern([3, 4, 5]),
    WinPattern([6, 7, 8]),
    WinPattern([0, 3, 6]),
    WinPattern([1, 4, 7]),
    WinPattern([2, 5, 8]),
    WinPattern([0, 4, 8]),
    WinPattern([2, 4, 6]),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Win { side: Side, pattern: WinPattern },
    Draw,
}

impl GameOutcome {
    pub fn is_over(&self) -> bool {
        *self != GameOutcome::InProgress
    }

    pub fn winner(&self) -> Option<Side> {
        match self {
            GameOutcome::Win { side, .. } => Some(*side),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// `None` when the board was already decided; `score` then carries the terminal value.
    pub index: Option<usize>,
    pub score: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotType {
    Random,
    Minimax,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameMode {
    PlayerVsPlayer,
    Easy,
    #[default]
    Hard,
}

impl GameMode {
    pub fn bot_type(self) -> Option<BotType> {
        match self {
            GameMode::PlayerVsPlayer => None,
            GameMode::Easy => Some(BotType::Random),
            GameMode::Hard => Some(BotType::Minimax),
        }
    }

    /// The automated opponent always plays O.
    pub fn bot_side(self) -> Option<Side> {
        self.bot_type().map(|_| Side::O)
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameMode::PlayerVsPlayer => "pvp",
            GameMode::Easy => "easy",
            GameMode::Hard => "hard",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pvp" => Ok(GameMode::PlayerVsPlayer),
            "easy" => Ok(GameMode::Easy),
            "hard" => Ok(GameMode::Hard),
            other => Err(format!(
                "Unknown game mode '{}', expected one of: pvp, easy, hard",
                other
            )),
        }
    }
}
