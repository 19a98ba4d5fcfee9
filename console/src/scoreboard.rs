use std::fmt;

use tictactoe_engine::games::tictactoe::{GameOutcome, Side};

/// Results of every finished game in this run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Scoreboard {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Win { side: Side::X, .. } => self.x_wins += 1,
            GameOutcome::Win { side: Side::O, .. } => self.o_wins += 1,
            GameOutcome::Draw => self.draws += 1,
            GameOutcome::InProgress => {}
        }
    }

    pub fn games_played(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

impl fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "X wins: {}  O wins: {}  Draws: {}",
            self.x_wins, self.o_wins, self.draws
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::games::tictactoe::WIN_PATTERNS;

    #[test]
    fn test_record_counts_each_result() {
        let mut scoreboard = Scoreboard::new();
        scoreboard.record(GameOutcome::Win {
            side: Side::O,
            pattern: WIN_PATTERNS[6],
        });
        scoreboard.record(GameOutcome::Draw);
        scoreboard.record(GameOutcome::Draw);

        assert_eq!(scoreboard.o_wins, 1);
        assert_eq!(scoreboard.draws, 2);
        assert_eq!(scoreboard.games_played(), 3);
        assert_eq!(scoreboard.to_string(), "X wins: 0  O wins: 1  Draws: 2");
    }

    #[test]
    fn test_in_progress_is_ignored() {
        let mut scoreboard = Scoreboard::new();
        scoreboard.record(GameOutcome::InProgress);
        assert_eq!(scoreboard, Scoreboard::new());
    }
}
