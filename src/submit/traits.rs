//! Trait abstraction for the submit client to enable mocking in tests

use crate::state::LeadDraft;
use async_trait::async_trait;
use thiserror::Error;

/// Errors from the outbound submission call
///
/// Non-2xx statuses and transport failures are distinct variants for
/// logging, but the state machine treats them uniformly.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("endpoint returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// One-shot submission of a validated lead to the remote endpoint
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmitClient: Send + Sync {
    /// POST one lead; Ok only for a success-range HTTP status
    async fn submit_lead(&self, lead: &LeadDraft) -> Result<(), SubmitError>;
}
