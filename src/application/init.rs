//! Initialize journal use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};
use std::fs;
use std::path::Path;

/// Initialize a new journal at the specified path.
pub fn init(path: &Path) -> Result<()> {
    // Create the directory if it doesn't exist
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    // Create repository for this path
    let repo = FileSystemRepository::new(path.to_path_buf());

    // Initialize .daybook directory
    repo.initialize()?;

    // Create and save default config
    let config = Config::new();
    repo.save_config(&config)?;

    // Bootstrap the journal document so reads and saves have a file
    repo.entry_store()?.initialize()?;

    println!("Initialized daybook journal at {}", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_structure() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("journal");

        init(&root).unwrap();

        assert!(root.join(".daybook").is_dir());
        assert!(root.join(".daybook/config.toml").exists());
        assert!(root.join("journal-data.json").exists());

        let raw = fs::read_to_string(root.join("journal-data.json")).unwrap();
        assert_eq!(raw.trim(), "{\n  \"entries\": []\n}");
    }

    #[test]
    fn test_init_twice_fails() {
        let temp = TempDir::new().unwrap();

        init(temp.path()).unwrap();
        assert!(init(temp.path()).is_err());
    }
}
