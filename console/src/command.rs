use tictactoe_engine::games::tictactoe::{CELL_COUNT, GameMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Zero-based cell index.
    Place(usize),
    NewGame,
    Mode(GameMode),
    Scores,
    Help,
    Quit,
}

pub const HELP_TEXT: &str = "Commands: 1-9 place a mark, new, mode <pvp|easy|hard>, scores, help, quit";

impl Command {
    pub fn parse(line: &str) -> Result<Command, String> {
        let mut words = line.split_whitespace();
        let Some(first) = words.next() else {
            return Err("Enter a cell number (1-9) or 'help'".to_string());
        };

        match first.to_ascii_lowercase().as_str() {
            "new" | "n" | "restart" => Ok(Command::NewGame),
            "scores" | "score" | "s" => Ok(Command::Scores),
            "help" | "h" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            "mode" | "m" => {
                let mode = words
                    .next()
                    .ok_or_else(|| "Usage: mode <pvp|easy|hard>".to_string())?;
                Ok(Command::Mode(mode.parse()?))
            }
            other => {
                let number: usize = other
                    .parse()
                    .map_err(|_| format!("Unknown command '{}'. {}", other, HELP_TEXT))?;
                if number == 0 || number > CELL_COUNT {
                    return Err(format!("Cell number must be between 1 and {}", CELL_COUNT));
                }
                Ok(Command::Place(number - 1))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_numbers_are_one_based() {
        assert_eq!(Command::parse("1"), Ok(Command::Place(0)));
        assert_eq!(Command::parse(" 9 \n"), Ok(Command::Place(8)));
    }

    #[test]
    fn test_out_of_range_cell_is_rejected() {
        assert!(Command::parse("0").is_err());
        assert!(Command::parse("10").is_err());
    }

    #[test]
    fn test_words() {
        assert_eq!(Command::parse("NEW"), Ok(Command::NewGame));
        assert_eq!(Command::parse("q"), Ok(Command::Quit));
        assert_eq!(Command::parse("scores"), Ok(Command::Scores));
        assert_eq!(Command::parse("mode easy"), Ok(Command::Mode(GameMode::Easy)));
    }

    #[test]
    fn test_mode_requires_valid_argument() {
        assert!(Command::parse("mode").is_err());
        assert!(Command::parse("mode nightmare").is_err());
    }

    #[test]
    fn test_blank_and_garbage() {
        assert!(Command::parse("   ").is_err());
        assert!(Command::parse("center").is_err());
    }
}
