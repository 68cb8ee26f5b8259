//! File system repository

use crate::error::{DaybookError, Result};
use crate::infrastructure::{Config, EntryStore};
use std::fs;
use std::path::{Path, PathBuf};

/// Abstract repository for journal operations
pub trait JournalRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .daybook/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .daybook/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .daybook directory exists
    fn is_initialized(&self) -> bool;

    /// Create .daybook directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of JournalRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover journal root by walking up from current directory
    /// First checks DAYBOOK_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        // 1. Check DAYBOOK_ROOT environment variable first
        if let Ok(root_path) = std::env::var("DAYBOOK_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_daybook_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(DaybookError::Config(format!(
                    "DAYBOOK_ROOT is set to '{}' but no .daybook directory found. \
                    Run 'daybook init' in that directory or unset DAYBOOK_ROOT.",
                    path.display()
                )));
            }
        }

        // 2. Fall back to walking up from current directory
        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover journal root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_daybook_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            // Try to move to parent directory
            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    // Reached filesystem root without finding .daybook
                    return Err(DaybookError::NotDaybookDirectory(start.to_path_buf()));
                }
            }
        }
    }

    /// Open the entry store for this journal, at the data file the
    /// configuration names
    pub fn entry_store(&self) -> Result<EntryStore> {
        let config = self.load_config()?;
        Ok(EntryStore::new(self.root.join(&config.data_file)))
    }

    /// Check if a path contains a .daybook directory
    fn has_daybook_dir(path: &Path) -> bool {
        path.join(".daybook").is_dir()
    }
}

impl JournalRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_daybook_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let daybook_dir = self.root.join(".daybook");

        if daybook_dir.exists() {
            return Err(DaybookError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&daybook_dir)?;
        Ok(())
    }
}
