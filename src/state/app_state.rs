//! Core domain state definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle of a form submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    /// Form is editable, nothing in flight
    #[default]
    Idle,
    /// The outbound call is in flight
    Submitting,
    /// Last submission was accepted and recorded
    Success,
    /// Last submission failed; form values are preserved
    Error,
}

/// Industry choices offered by the form selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Industry {
    Technology,
    Healthcare,
    Finance,
    Education,
    Retail,
    Manufacturing,
    Consulting,
    Other,
}

impl Industry {
    /// All choices, in selector order
    pub const ALL: [Industry; 8] = [
        Industry::Technology,
        Industry::Healthcare,
        Industry::Finance,
        Industry::Education,
        Industry::Retail,
        Industry::Manufacturing,
        Industry::Consulting,
        Industry::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Technology => "Technology",
            Self::Healthcare => "Healthcare",
            Self::Finance => "Finance",
            Self::Education => "Education",
            Self::Retail => "Retail",
            Self::Manufacturing => "Manufacturing",
            Self::Consulting => "Consulting",
            Self::Other => "Other",
        }
    }

    /// Lowercase form used on the wire and in the store
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Technology => "technology",
            Self::Healthcare => "healthcare",
            Self::Finance => "finance",
            Self::Education => "education",
            Self::Retail => "retail",
            Self::Manufacturing => "manufacturing",
            Self::Consulting => "consulting",
            Self::Other => "other",
        }
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|i| *i == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|i| *i == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Raw form input prior to validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadDraft {
    pub name: String,
    pub email: String,
    pub industry: Option<Industry>,
}

/// A captured lead as recorded in the local store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub industry: Industry,
    pub submitted_at: DateTime<Utc>,
}

impl LeadRecord {
    /// Build a record from a draft; None if no industry was selected
    pub fn from_draft(draft: &LeadDraft) -> Option<Self> {
        let industry = draft.industry?;
        Some(Self {
            id: Uuid::new_v4(),
            name: draft.name.clone(),
            email: draft.email.clone(),
            industry,
            submitted_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_status_is_idle() {
        assert_eq!(SubmissionStatus::default(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_industry_next_cycles() {
        assert_eq!(Industry::Technology.next(), Industry::Healthcare);
        assert_eq!(Industry::Other.next(), Industry::Technology);
    }

    #[test]
    fn test_industry_prev_cycles() {
        assert_eq!(Industry::Technology.prev(), Industry::Other);
        assert_eq!(Industry::Healthcare.prev(), Industry::Technology);
    }

    #[test]
    fn test_industry_serializes_lowercase() {
        let json = serde_json::to_string(&Industry::Healthcare).unwrap();
        assert_eq!(json, "\"healthcare\"");
    }

    #[test]
    fn test_industry_roundtrip_all() {
        for industry in Industry::ALL {
            let json = serde_json::to_string(&industry).unwrap();
            assert_eq!(json, format!("\"{}\"", industry.as_str()));
            let parsed: Industry = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, industry);
        }
    }

    #[test]
    fn test_record_from_draft_requires_industry() {
        let draft = LeadDraft {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            industry: None,
        };
        assert!(LeadRecord::from_draft(&draft).is_none());
    }

    #[test]
    fn test_record_from_draft_copies_values() {
        let draft = LeadDraft {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            industry: Some(Industry::Technology),
        };
        let record = LeadRecord::from_draft(&draft).unwrap();
        assert_eq!(record.name, "Jane Doe");
        assert_eq!(record.email, "jane@example.com");
        assert_eq!(record.industry, Industry::Technology);
    }
}
