use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tictactoe_engine::config::{
    ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer,
};
use tictactoe_engine::games::tictactoe::GameMode;

const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";
pub const MAX_BOT_DELAY_MS: u64 = 5000;

fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: Option<&Path>,
) -> ConfigManager<FileContentConfigProvider, ConsoleConfig, YamlConfigSerializer> {
    let path = path.map_or_else(get_config_path, Path::to_path_buf);
    ConfigManager::from_yaml_file(path)
}

fn default_show_scoreboard() -> bool {
    true
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ConsoleConfig {
    pub mode: GameMode,
    /// Pause before the bot answers, in milliseconds.
    pub bot_delay_ms: u64,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_show_scoreboard")]
    pub show_scoreboard: bool,
}

impl Validate for ConsoleConfig {
    fn validate(&self) -> Result<(), String> {
        if self.bot_delay_ms > MAX_BOT_DELAY_MS {
            return Err(format!(
                "bot_delay_ms must not exceed {}, got {}",
                MAX_BOT_DELAY_MS, self.bot_delay_ms
            ));
        }
        Ok(())
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::Hard,
            bot_delay_ms: 600,
            seed: None,
            show_scoreboard: true,
        }
    }
}
