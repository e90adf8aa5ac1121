//! Filesystem locations used by devport.
//!
//! The registry lives at `~/.devport/ports.json`. The location is resolved once
//! per invocation and passed explicitly to the store, so tests can point it at a
//! temporary directory.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Name of the per-user configuration directory under `$HOME`.
pub const CONFIG_DIR_NAME: &str = ".devport";

/// File name of the persisted registry.
pub const REGISTRY_FILE_NAME: &str = "ports.json";

/// Resolved configuration paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DevportPaths {
    config_dir: PathBuf,
    registry_file: PathBuf,
}

impl DevportPaths {
    /// Resolve the default paths under the invoking user's home directory.
    pub fn new() -> Result<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| Error::Persistence("Could not determine home directory".to_string()))?;

        Ok(Self::with_dir(home.join(CONFIG_DIR_NAME)))
    }

    /// Use a custom configuration directory (for testing).
    pub fn with_dir(config_dir: impl Into<PathBuf>) -> Self {
        let config_dir = config_dir.into();
        let registry_file = config_dir.join(REGISTRY_FILE_NAME);
        Self {
            config_dir,
            registry_file,
        }
    }

    /// Directory holding the registry file.
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Full path of the registry file.
    pub fn registry_file(&self) -> &Path {
        &self.registry_file
    }
}
