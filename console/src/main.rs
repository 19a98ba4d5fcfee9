mod board_view;
mod command;
mod config;
mod runner;
mod scoreboard;

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tictactoe_engine::games::SessionRng;
use tictactoe_engine::games::tictactoe::GameMode;
use tictactoe_engine::{log, logger};

use config::get_config_manager;
use runner::{ConsoleRunner, RunnerSettings};

#[derive(Parser)]
#[command(name = "tictactoe", about = "Play tic-tac-toe against a friend or the computer")]
struct Args {
    /// YAML config file; defaults to tictactoe_config.yaml next to the executable.
    #[arg(long)]
    config: Option<PathBuf>,

    /// pvp, easy or hard. Overrides the config file.
    #[arg(long)]
    mode: Option<GameMode>,

    /// Seed for the easy bot, to replay a session.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Console".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = get_config_manager(args.config.as_deref()).get_config()?;

    let mode = args.mode.unwrap_or(config.mode);
    let rng = match args.seed.or(config.seed) {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Starting {} mode with seed {}", mode, rng.seed());

    let settings = RunnerSettings {
        mode,
        bot_delay: Duration::from_millis(config.bot_delay_ms),
        show_scoreboard: config.show_scoreboard,
    };

    let stdin = io::stdin();
    let mut runner = ConsoleRunner::new(stdin.lock(), io::stdout(), settings, rng);
    runner.run()?;

    Ok(())
}
