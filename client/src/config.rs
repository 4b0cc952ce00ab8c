use serde::{Deserialize, Serialize};
use tictactoe_engine::config::{ConfigManager, Validate};
use tictactoe_engine::tictactoe::{BotDifficulty, GameMode, Mark};

pub const CONFIG_FILE: &str = "tictactoe_client_config.yaml";

pub fn get_config_manager(file_path: &str) -> ConfigManager<Config> {
    ConfigManager::from_yaml_file(file_path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub game: GameConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub mode: GameMode,
    pub difficulty: BotDifficulty,
    pub human_mark: Mark,
    pub ai_move_delay_ms: u32,
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.human_mark == Mark::Empty {
            return Err("human_mark must be X or O".to_string());
        }
        if self.ai_move_delay_ms > 5000 {
            return Err("ai_move_delay_ms must not exceed 5000".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            game: GameConfig {
                mode: GameMode::TwoPlayer,
                difficulty: BotDifficulty::Easy,
                human_mark: Mark::X,
                ai_move_delay_ms: 150,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::config::{
        ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, YamlConfigSerializer,
    };

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_client_config_{}.yaml", random_number));
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_default_config_round_trips_through_serializer() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: Config = serializer.deserialize(&serialized).unwrap();
        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_config_round_trips_through_file_provider() {
        let config = Config {
            game: GameConfig {
                mode: GameMode::VsComputer,
                difficulty: BotDifficulty::Hard,
                human_mark: Mark::O,
                ai_move_delay_ms: 300,
            },
        };
        let serializer = YamlConfigSerializer::new();
        let file_path = get_temp_file_path();
        let provider = FileContentConfigProvider::new(file_path.clone());

        let serialized = serializer.serialize(&config).unwrap();
        provider.set_config_content(&serialized).unwrap();

        let content = provider.get_config_content().unwrap().unwrap();
        let deserialized: Config = serializer.deserialize(&content).unwrap();
        assert_eq!(config, deserialized);

        let _ = std::fs::remove_file(&file_path);
    }

    #[test]
    fn test_manager_returns_default_when_file_is_missing() {
        let manager = get_config_manager(&get_temp_file_path());
        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_manager_persists_and_reloads_config() {
        let file_path = get_temp_file_path();
        let config = Config {
            game: GameConfig {
                mode: GameMode::VsComputer,
                difficulty: BotDifficulty::Medium,
                human_mark: Mark::X,
                ai_move_delay_ms: 150,
            },
        };

        let manager = get_config_manager(&file_path);
        manager.set_config(&config).unwrap();
        assert_eq!(manager.get_config().unwrap(), config);

        // A fresh manager re-reads from disk.
        let reloaded = get_config_manager(&file_path);
        assert_eq!(reloaded.get_config().unwrap(), config);

        let _ = std::fs::remove_file(&file_path);
    }

    #[test]
    fn test_validation_rejects_empty_human_mark() {
        let mut config = Config::default();
        config.game.human_mark = Mark::Empty;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_excessive_delay() {
        let mut config = Config::default();
        config.game.ai_move_delay_ms = 10_000;
        assert!(config.validate().is_err());
    }
}
