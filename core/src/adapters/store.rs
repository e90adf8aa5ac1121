//! JSON file store for the port registry.
//!
//! Stores records at `~/.devport/ports.json`:
//!
//! ```json
//! {
//!   "3000": {
//!     "project": "web",
//!     "description": "",
//!     "createdAt": "2024-05-01T10:00:00.000Z"
//!   }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use crate::config::DevportPaths;
use crate::domain::{iso_millis, PortRecord};
use crate::error::{Error, Result};
use crate::ports::{RecordStore, RegistryMap};

/// On-disk shape of a record as written. The port is the surrounding object key.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct StoredRecord {
    project: String,
    description: String,
    #[serde(with = "iso_millis", skip_serializing_if = "Option::is_none")]
    created_at: Option<DateTime<Utc>>,
}

impl From<&PortRecord> for StoredRecord {
    fn from(record: &PortRecord) -> Self {
        Self {
            project: record.project.clone(),
            description: record.description.clone(),
            created_at: record.created_at,
        }
    }
}

/// On-disk shape of a record as read. Every field may be missing or null,
/// so one hand-edited entry cannot make the whole file unreadable.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LenientRecord {
    #[serde(default)]
    project: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    created_at: Option<Value>,
}

impl LenientRecord {
    fn into_record(self, port: u16) -> PortRecord {
        let created_at = match self.created_at {
            Some(Value::String(raw)) => {
                let parsed = iso_millis::parse(&raw);
                if parsed.is_none() {
                    warn!(port = port, created_at = %raw, "Ignoring unreadable registry timestamp");
                }
                parsed
            }
            Some(Value::Null) | None => None,
            Some(other) => {
                warn!(port = port, created_at = %other, "Ignoring unreadable registry timestamp");
                None
            }
        };

        PortRecord {
            port,
            project: self.project.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            created_at,
        }
    }
}

/// Registry store backed by a single pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store for the registry file in `paths`.
    pub fn new(paths: &DevportPaths) -> Self {
        Self::with_path(paths.registry_file())
    }

    /// Create a store with a custom path (for testing).
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse registry file contents.
    ///
    /// Only invalid JSON (or a top level that is not an object) fails.
    /// Entries whose key is not a port or whose value has the wrong shape
    /// are skipped with a warning; missing fields fall back to defaults.
    pub fn decode(content: &str) -> Result<RegistryMap> {
        let raw: Map<String, Value> = serde_json::from_str(content)?;
        let mut records = RegistryMap::new();

        for (key, value) in raw {
            let port: u16 = match key.trim().parse() {
                Ok(p) => p,
                Err(_) => {
                    warn!(key = %key, "Skipping registry entry with invalid port");
                    continue;
                }
            };

            match serde_json::from_value::<LenientRecord>(value) {
                Ok(record) => {
                    records.insert(port, record.into_record(port));
                }
                Err(e) => warn!(port = port, error = %e, "Skipping unreadable registry entry"),
            }
        }

        Ok(records)
    }

    /// Render records in the on-disk format (2-space indent, ascending keys).
    pub fn encode(records: &RegistryMap) -> Result<String> {
        let stored: BTreeMap<u16, StoredRecord> = records
            .iter()
            .map(|(port, record)| (*port, StoredRecord::from(record)))
            .collect();
        Ok(serde_json::to_string_pretty(&stored)?)
    }
}

impl RecordStore for JsonFileStore {
    /// Returns an empty map if the file doesn't exist.
    async fn load(&self) -> Result<RegistryMap> {
        let exists = fs::try_exists(&self.path)
            .await
            .map_err(|e| Error::Persistence(format!("Failed to access registry: {}", e)))?;

        if !exists {
            debug!(path = %self.path.display(), "Registry file missing, starting empty");
            return Ok(RegistryMap::new());
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| Error::Persistence(format!("Failed to read registry: {}", e)))?;

        Self::decode(&content)
            .map_err(|e| Error::Persistence(format!("Failed to parse registry: {}", e)))
    }

    /// Creates the config directory if it doesn't exist.
    async fn save(&self, records: &RegistryMap) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).await.map_err(|e| {
                Error::Persistence(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = Self::encode(records)
            .map_err(|e| Error::Persistence(format!("Failed to serialize registry: {}", e)))?;

        // Write atomically by writing to temp file then renaming
        let temp_path = self.path.with_extension("json.tmp");

        let mut file = fs::File::create(&temp_path)
            .await
            .map_err(|e| Error::Persistence(format!("Failed to create temp registry file: {}", e)))?;

        file.write_all(content.as_bytes())
            .await
            .map_err(|e| Error::Persistence(format!("Failed to write registry: {}", e)))?;

        file.sync_all()
            .await
            .map_err(|e| Error::Persistence(format!("Failed to sync registry: {}", e)))?;

        fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| Error::Persistence(format!("Failed to rename registry file: {}", e)))?;

        debug!(path = %self.path.display(), count = records.len(), "Registry saved");
        Ok(())
    }
}
