//! In-memory lead store

use super::{LeadStore, StoreError};
use crate::state::LeadRecord;
use async_trait::async_trait;

/// Process-local store backed by a Vec; leads live only for the
/// session. Also the store used by the controller tests.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct MemoryLeadStore {
    leads: Vec<LeadRecord>,
}

#[allow(dead_code)]
impl MemoryLeadStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn leads(&self) -> &[LeadRecord] {
        &self.leads
    }
}

#[async_trait]
impl LeadStore for MemoryLeadStore {
    async fn append(&mut self, record: LeadRecord) -> Result<(), StoreError> {
        self.leads.push(record);
        Ok(())
    }

    fn count(&self) -> usize {
        self.leads.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Industry, LeadDraft};

    fn record(name: &str) -> LeadRecord {
        LeadRecord::from_draft(&LeadDraft {
            name: name.to_string(),
            email: format!("{name}@example.com"),
            industry: Some(Industry::Technology),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_append_increments_count() {
        let mut store = MemoryLeadStore::new();
        assert_eq!(store.count(), 0);
        store.append(record("jane")).await.unwrap();
        assert_eq!(store.count(), 1);
    }

    #[tokio::test]
    async fn test_append_preserves_insertion_order() {
        let mut store = MemoryLeadStore::new();
        store.append(record("first")).await.unwrap();
        store.append(record("second")).await.unwrap();
        assert_eq!(store.leads()[0].name, "first");
        assert_eq!(store.leads()[1].name, "second");
    }
}
