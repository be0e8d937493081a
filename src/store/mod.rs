//! Local lead store
//!
//! Append-only record of successfully submitted leads. The count doubles as
//! the waitlist position shown after a submission.

mod json_file;
mod memory;

pub use json_file::JsonLeadStore;
pub use memory::MemoryLeadStore;

use crate::state::LeadRecord;
use async_trait::async_trait;
use thiserror::Error;

/// Errors raised by a store backend
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("store serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Append-only store of captured leads
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeadStore: Send + Sync {
    /// Append one record, preserving insertion order
    async fn append(&mut self, record: LeadRecord) -> Result<(), StoreError>;

    /// Number of stored records
    fn count(&self) -> usize;
}
