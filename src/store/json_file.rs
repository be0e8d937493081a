//! JSON-file-backed lead store
//!
//! Persists the lead list across sessions, using the same
//! `directories` + `serde_json` layout as the config file.

use super::{LeadStore, StoreError};
use crate::state::LeadRecord;
use async_trait::async_trait;
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Lead store persisted as a JSON array on disk
#[derive(Debug)]
pub struct JsonLeadStore {
    path: PathBuf,
    leads: Vec<LeadRecord>,
}

impl JsonLeadStore {
    /// Open a store file, loading any previously recorded leads
    pub fn open(path: PathBuf) -> Result<Self, StoreError> {
        let leads = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_json::from_str(&content)?
        } else {
            Vec::new()
        };
        debug!(path = %path.display(), count = leads.len(), "opened lead store");
        Ok(Self { path, leads })
    }

    /// Default store location in the user's data directory
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "waitlist", "waitlist-tui")
            .map(|dirs| dirs.data_dir().join("leads.json"))
    }

    fn persist(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.leads)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

#[async_trait]
impl LeadStore for JsonLeadStore {
    async fn append(&mut self, record: LeadRecord) -> Result<(), StoreError> {
        self.leads.push(record);
        if let Err(e) = self.persist() {
            // Keep the in-memory list consistent with what is on disk
            self.leads.pop();
            return Err(e);
        }
        Ok(())
    }

    fn count(&self) -> usize {
        self.leads.len()
    }
}
