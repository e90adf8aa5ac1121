//! Port registry application service.

use tracing::{debug, error};

use crate::adapters::JsonFileStore;
use crate::config::DevportPaths;
use crate::domain::PortRecord;
use crate::error::{Error, Result};
use crate::ports::{RecordStore, RegistryMap};

/// Port where `suggest` starts searching when no start is given.
pub const DEFAULT_SUGGEST_START: u16 = 3000;

/// Application service for port registrations.
///
/// Every operation re-reads the store; mutations load the whole map, change
/// it in memory and write the whole map back. Nothing is cached between
/// calls and no lock is held across load and save.
pub struct Registry<S: RecordStore> {
    store: S,
}

impl Registry<JsonFileStore> {
    /// Open the registry file under `paths`.
    pub fn open(paths: &DevportPaths) -> Self {
        Self::new(JsonFileStore::new(paths))
    }
}

impl<S: RecordStore> Registry<S> {
    /// Create a registry over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load all records; an unreadable or malformed store counts as empty.
    async fn load(&self) -> RegistryMap {
        match self.store.load().await {
            Ok(records) => records,
            Err(e) => {
                error!(error = %e, "Error loading ports configuration");
                RegistryMap::new()
            }
        }
    }

    /// Register `port` for `project`.
    ///
    /// Fails with [`Error::AlreadyRegistered`] if the port already has a
    /// record; the existing record is left untouched.
    pub async fn add(&self, port: u16, project: &str, description: &str) -> Result<PortRecord> {
        let mut records = self.load().await;

        if let Some(existing) = records.get(&port) {
            return Err(Error::AlreadyRegistered {
                port,
                project: existing.project.clone(),
            });
        }

        let record = PortRecord::new(port, project, description);
        records.insert(port, record.clone());
        self.store.save(&records).await?;

        debug!(port = port, project = project, "Port registered");
        Ok(record)
    }

    /// Remove the registration for `port`, returning the removed record.
    pub async fn remove(&self, port: u16) -> Result<PortRecord> {
        let mut records = self.load().await;

        let removed = records.remove(&port).ok_or(Error::NotRegistered(port))?;
        self.store.save(&records).await?;

        debug!(port = port, project = %removed.project, "Port removed");
        Ok(removed)
    }

    /// Look up the registration for `port`.
    pub async fn find(&self, port: u16) -> Option<PortRecord> {
        self.load().await.remove(&port)
    }

    /// All registrations, ascending by port.
    pub async fn list(&self) -> Vec<PortRecord> {
        self.load().await.into_values().collect()
    }

    /// Smallest port `>= start` with no registration.
    ///
    /// Nothing is reserved. Returns `None` when every port from `start` up to
    /// 65535 is registered.
    pub async fn suggest(&self, start: u16) -> Option<u16> {
        let records = self.load().await;
        (start..=u16::MAX).find(|port| !records.contains_key(port))
    }

    /// Remove every registration.
    pub async fn clear_all(&self) -> Result<()> {
        self.store.save(&RegistryMap::new()).await?;
        debug!("All ports cleared");
        Ok(())
    }
}
