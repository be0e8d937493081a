//! HTTP client for the lead capture endpoint
//!
//! Sends one JSON POST per validated form, authenticated with a Bearer
//! token. Any non-2xx response or transport failure is reported as a
//! submission error; the caller does not retry.

use super::traits::{SubmitClient, SubmitError};
use crate::config::WaitlistConfig;
use crate::state::LeadDraft;
use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, warn};

/// Default capture endpoint
const DEFAULT_ENDPOINT: &str = "https://ytyopyznqpnylebzibby.supabase.co/functions/v1/clever-task";

/// Wire payload for the capture endpoint
#[derive(Serialize)]
struct LeadPayload<'a> {
    name: &'a str,
    email: &'a str,
    industry: &'a str,
}

impl<'a> LeadPayload<'a> {
    fn from_draft(draft: &'a LeadDraft) -> Self {
        Self {
            name: &draft.name,
            email: &draft.email,
            industry: draft.industry.map(|i| i.as_str()).unwrap_or(""),
        }
    }
}

/// Client for submitting leads over HTTPS
pub struct HttpSubmitClient {
    client: reqwest::Client,
    endpoint: String,
    api_token: String,
}

impl HttpSubmitClient {
    pub fn new(endpoint: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            api_token: api_token.into(),
        }
    }

    /// Build a client from config, with environment overrides
    pub fn from_config(config: &WaitlistConfig) -> Self {
        let endpoint = std::env::var("WAITLIST_ENDPOINT")
            .ok()
            .or_else(|| config.endpoint.clone())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let api_token = std::env::var("WAITLIST_API_TOKEN")
            .ok()
            .or_else(|| config.api_token.clone())
            .unwrap_or_default();
        Self::new(endpoint, api_token)
    }
}

#[async_trait]
impl SubmitClient for HttpSubmitClient {
    async fn submit_lead(&self, lead: &LeadDraft) -> Result<(), SubmitError> {
        let payload = LeadPayload::from_draft(lead);

        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_token))
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            warn!(status = %response.status(), "capture endpoint rejected lead");
            return Err(SubmitError::Status(response.status()));
        }

        debug!("lead accepted by capture endpoint");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Industry;

    #[test]
    fn test_payload_shape() {
        let draft = LeadDraft {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            industry: Some(Industry::Technology),
        };
        let value = serde_json::to_value(LeadPayload::from_draft(&draft)).unwrap();
        assert_eq!(value["name"], "Jane Doe");
        assert_eq!(value["email"], "jane@example.com");
        assert_eq!(value["industry"], "technology");
    }

    #[test]
    fn test_payload_industry_lowercase() {
        let draft = LeadDraft {
            name: "J".to_string(),
            email: "j@example.com".to_string(),
            industry: Some(Industry::Manufacturing),
        };
        let value = serde_json::to_value(LeadPayload::from_draft(&draft)).unwrap();
        assert_eq!(value["industry"], "manufacturing");
    }

    #[test]
    fn test_from_config_prefers_configured_endpoint() {
        let config = WaitlistConfig {
            endpoint: Some("https://example.com/leads".to_string()),
            api_token: Some("token".to_string()),
            ..Default::default()
        };
        let client = HttpSubmitClient::from_config(&config);
        // Env overrides are absent in tests, so config values win
        if std::env::var("WAITLIST_ENDPOINT").is_err() {
            assert_eq!(client.endpoint, "https://example.com/leads");
        }
        if std::env::var("WAITLIST_API_TOKEN").is_err() {
            assert_eq!(client.api_token, "token");
        }
    }
}
