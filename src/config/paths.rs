//! Path management for Passbook
//!
//! Resolves where the settings file, the ledger data file and the audit log live.
//!
//! ## Path Resolution Order
//!
//! 1. `PASSBOOK_DATA_DIR` environment variable (if set)
//! 2. The platform config directory for `passbook` (e.g. `~/.config/passbook`
//!    on Linux, `%APPDATA%\passbook\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::PassbookError;

/// Name of the ledger data file inside the base directory
pub const DATA_FILE_NAME: &str = "bank_data.txt";

/// Manages all paths used by Passbook
#[derive(Debug, Clone)]
pub struct PassbookPaths {
    /// Base directory for all Passbook data
    base_dir: PathBuf,
}

impl PassbookPaths {
    /// Create a new PassbookPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and
    /// `PASSBOOK_DATA_DIR` is not set.
    pub fn new() -> Result<Self, PassbookError> {
        let base_dir = if let Ok(custom) = std::env::var("PASSBOOK_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create PassbookPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the default path to the ledger data file
    pub fn data_file(&self) -> PathBuf {
        self.base_dir.join(DATA_FILE_NAME)
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), PassbookError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| PassbookError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Check if Passbook has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, PassbookError> {
    ProjectDirs::from("", "", "passbook")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| PassbookError::Config("Could not determine home directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PassbookPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_file(), temp_dir.path().join("bank_data.txt"));
        assert_eq!(paths.audit_log(), temp_dir.path().join("audit.log"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var("PASSBOOK_DATA_DIR", custom_path);

        let paths = PassbookPaths::new().unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());

        env::remove_var("PASSBOOK_DATA_DIR");
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PassbookPaths::with_base_dir(temp_dir.path().join("nested").join("passbook"));

        assert!(!paths.base_dir().exists());
        paths.ensure_directories().unwrap();
        assert!(paths.base_dir().exists());
        assert!(!paths.is_initialized());
    }
}
