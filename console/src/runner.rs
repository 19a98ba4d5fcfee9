use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use tictactoe_engine::games::SessionRng;
use tictactoe_engine::games::tictactoe::{GameMode, GameOutcome, MoveError, TicTacToeGameState};
use tictactoe_engine::log;

use crate::board_view::{describe_outcome, render_board};
use crate::command::{Command, HELP_TEXT};
use crate::scoreboard::Scoreboard;

pub struct RunnerSettings {
    pub mode: GameMode,
    pub bot_delay: Duration,
    pub show_scoreboard: bool,
}

/// Line-based game loop: reads commands from `input`, writes the board to `output`.
pub struct ConsoleRunner<R: BufRead, W: Write> {
    input: R,
    output: W,
    game: TicTacToeGameState,
    scoreboard: Scoreboard,
    rng: SessionRng,
    bot_delay: Duration,
    show_scoreboard: bool,
}

impl<R: BufRead, W: Write> ConsoleRunner<R, W> {
    pub fn new(input: R, output: W, settings: RunnerSettings, rng: SessionRng) -> Self {
        Self {
            input,
            output,
            game: TicTacToeGameState::new(settings.mode),
            scoreboard: Scoreboard::new(),
            rng,
            bot_delay: settings.bot_delay,
            show_scoreboard: settings.show_scoreboard,
        }
    }

    #[cfg(test)]
    pub fn game(&self) -> &TicTacToeGameState {
        &self.game
    }

    #[cfg(test)]
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "Tic-tac-toe ({} mode). {}", self.game.mode(), HELP_TEXT)?;
        self.show_board()?;

        loop {
            if self.game.is_bot_turn() {
                self.play_bot()?;
                continue;
            }

            write!(self.output, "> ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                break;
            };

            match Command::parse(&line) {
                Ok(Command::Quit) => break,
                Ok(Command::Place(index)) => self.play_human(index)?,
                Ok(Command::NewGame) => {
                    self.game.reset();
                    log!("New game in {} mode", self.game.mode());
                    self.show_board()?;
                }
                Ok(Command::Mode(mode)) => {
                    self.game.set_mode(mode);
                    log!("Switched to {} mode", mode);
                    writeln!(self.output, "Mode set to {}, starting a new game", mode)?;
                    self.show_board()?;
                }
                Ok(Command::Scores) => writeln!(self.output, "{}", self.scoreboard)?,
                Ok(Command::Help) => writeln!(self.output, "{}", HELP_TEXT)?,
                Err(message) => writeln!(self.output, "{}", message)?,
            }
        }

        if self.scoreboard.games_played() > 0 {
            writeln!(self.output, "Final score: {}", self.scoreboard)?;
        }
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn play_human(&mut self, index: usize) -> io::Result<()> {
        let side = self.game.current_side();
        match self.game.place_mark(index) {
            Ok(outcome) => {
                log!("{} played cell {}", side, index);
                self.after_move(outcome)
            }
            Err(MoveError::GameOver) => {
                writeln!(self.output, "The game is over, type 'new' to play again")
            }
            Err(e) => writeln!(self.output, "{}", e),
        }
    }

    fn play_bot(&mut self) -> io::Result<()> {
        if !self.bot_delay.is_zero() {
            thread::sleep(self.bot_delay);
        }

        let side = self.game.current_side();
        match self.game.play_bot_move(&mut self.rng) {
            Ok(Some(bot_move)) => {
                writeln!(self.output, "{} takes cell {}", side, bot_move.index + 1)?;
                self.after_move(bot_move.outcome)
            }
            Ok(None) => Ok(()),
            Err(e) => {
                log!("Bot move rejected: {}", e);
                Err(io::Error::other(e))
            }
        }
    }

    fn after_move(&mut self, outcome: GameOutcome) -> io::Result<()> {
        self.show_board()?;
        if outcome.is_over() {
            self.scoreboard.record(outcome);
            log!("Game finished on {}: {:?}", self.game.board(), outcome);
            if self.show_scoreboard {
                writeln!(self.output, "{}", self.scoreboard)?;
            }
            writeln!(self.output, "Type 'new' to play again or 'quit' to leave")?;
        }
        Ok(())
    }

    fn show_board(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", render_board(self.game.board()))?;
        writeln!(
            self.output,
            "{}",
            describe_outcome(&self.game.outcome(), self.game.current_side())
        )
    }
}
