use dungeon_common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use dungeon_common::games::dungeon::{DragonBehavior, FieldSize};
use serde::{Deserialize, Serialize};

use crate::input::validate_dimensions;

pub const CONFIG_FILE: &str = "dungeon_config.yaml";
const DEFAULT_LOG_FILE: &str = "dungeon.log";

pub fn get_config_manager(path: &str) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Fixed map size. When absent the player is asked for one.
    pub field: Option<FieldConfig>,
    pub dragons: DragonBehavior,
    pub reveal_map: bool,
    /// Append-mode log file; `None` logs to stdout.
    pub log_file: Option<String>,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if let Some(field) = &self.field {
            field.validate()?;
        }
        self.dragons.validate()?;
        if let Some(log_file) = &self.log_file
            && log_file.trim().is_empty()
        {
            return Err("log_file must not be empty".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct FieldConfig {
    pub width: usize,
    pub height: usize,
}

impl FieldConfig {
    pub fn to_field_size(self) -> FieldSize {
        FieldSize::new(self.width, self.height)
    }
}

impl Validate for FieldConfig {
    fn validate(&self) -> Result<(), String> {
        validate_dimensions(self.width, self.height).map(|_| ())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field: None,
            dragons: DragonBehavior::default(),
            reveal_map: false,
            log_file: Some(DEFAULT_LOG_FILE.to_string()),
        }
    }
}
