//! Configuration management

use crate::error::{DaybookError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default name of the journal document inside the journal root
pub const DEFAULT_DATA_FILE: &str = "journal-data.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_file")]
    pub data_file: String,
    pub created: DateTime<Utc>,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            data_file: default_data_file(),
            created: Utc::now(),
        }
    }

    /// Load config from .daybook/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".daybook").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DaybookError::NotDaybookDirectory(path.to_path_buf())
            } else {
                DaybookError::Io(e)
            }
        })?;

        Ok(toml::from_str(&contents)?)
    }

    /// Save config to .daybook/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let daybook_dir = path.join(".daybook");
        let config_path = daybook_dir.join("config.toml");

        // Ensure .daybook directory exists
        if !daybook_dir.exists() {
            fs::create_dir(&daybook_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;

        fs::write(&config_path, contents)?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_config() {
        let config = Config::new();
        assert_eq!(config.data_file, "journal-data.json");
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let config = Config::new();

        // Save config
        config.save_to_dir(temp.path()).unwrap();

        // Check .daybook directory was created
        assert!(temp.path().join(".daybook").exists());
        assert!(temp.path().join(".daybook/config.toml").exists());

        // Load config
        let loaded = Config::load_from_dir(temp.path()).unwrap();

        // Verify it matches
        assert_eq!(loaded.data_file, config.data_file);
        assert_eq!(loaded.created, config.created);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();

        // Try to load config from directory without .daybook
        let result = Config::load_from_dir(temp.path());

        assert!(result.is_err());
        match result.unwrap_err() {
            DaybookError::NotDaybookDirectory(_) => {}
            _ => panic!("Expected NotDaybookDirectory error"),
        }
    }

    #[test]
    fn test_data_file_defaults_when_absent() {
        let temp = TempDir::new().unwrap();
        let daybook_dir = temp.path().join(".daybook");
        fs::create_dir(&daybook_dir).unwrap();
        fs::write(
            daybook_dir.join("config.toml"),
            "created = \"2024-11-01T07:00:00Z\"\n",
        )
        .unwrap();

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.data_file, DEFAULT_DATA_FILE);
    }
}
