use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_common::config::{
    ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer,
};
use tictactoe_common::games::tictactoe::{
    Difficulty, FirstPlayerMode, GameMode, TicTacToeSessionSettings,
};

pub const CONFIG_FILE: &str = "tictactoe_client_config.yaml";

const MAX_COMPUTER_DELAY_MS: u64 = 5000;

pub fn get_config_manager(
    path: &Path,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub game: GameConfig,
    pub computer: ComputerConfig,
    pub log_file: Option<String>,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.computer.validate()?;
        if let Some(ref log_file) = self.log_file
            && log_file.trim().is_empty()
        {
            return Err("log_file must not be blank".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub mode: GameMode,
    pub difficulty: Difficulty,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ComputerConfig {
    pub name: String,
    pub delay_ms: u64,
    pub may_open: bool,
}

impl Validate for ComputerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("computer name must not be empty".to_string());
        }
        if self.delay_ms > MAX_COMPUTER_DELAY_MS {
            return Err(format!(
                "computer delay_ms must not exceed {}",
                MAX_COMPUTER_DELAY_MS
            ));
        }
        Ok(())
    }
}

impl Config {
    pub fn session_settings(&self) -> TicTacToeSessionSettings {
        TicTacToeSessionSettings {
            mode: self.game.mode,
            difficulty: self.game.difficulty,
            first_player_mode: if self.computer.may_open {
                FirstPlayerMode::Random
            } else {
                FirstPlayerMode::Human
            },
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            game: GameConfig {
                mode: GameMode::HumanVsComputer,
                difficulty: Difficulty::Medium,
            },
            computer: ComputerConfig {
                name: "Bridget".to_string(),
                delay_ms: 700,
                may_open: true,
            },
            log_file: Some("tictactoe_client.log".to_string()),
        }
    }
}
