//! Pure validation of the lead form
//!
//! Stateless and deterministic: one pass over a draft yields at most one
//! error per field, in field declaration order.

use crate::state::LeadDraft;
use std::fmt;

/// Form fields, in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Industry,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Industry => "industry",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a field failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationKind {
    Required,
    InvalidFormat,
}

/// A field-scoped validation error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub kind: ValidationKind,
}

impl FieldError {
    fn required(field: Field) -> Self {
        Self {
            field,
            kind: ValidationKind::Required,
        }
    }

    fn invalid_format(field: Field) -> Self {
        Self {
            field,
            kind: ValidationKind::InvalidFormat,
        }
    }

    /// Human-readable message shown next to the field
    pub fn message(&self) -> &'static str {
        match self.kind {
            ValidationKind::Required => "Required",
            ValidationKind::InvalidFormat => "Invalid email format",
        }
    }
}

/// Validate a draft, returning every field error found
pub fn validate(draft: &LeadDraft) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if draft.name.trim().is_empty() {
        errors.push(FieldError::required(Field::Name));
    }

    if draft.email.is_empty() {
        errors.push(FieldError::required(Field::Email));
    } else if !is_valid_email(&draft.email) {
        errors.push(FieldError::invalid_format(Field::Email));
    }

    if draft.industry.is_none() {
        errors.push(FieldError::required(Field::Industry));
    }

    errors
}

/// Standard address shape: non-empty local part, "@", domain with a dot
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && domain.split('.').all(|part| !part.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Industry;
    use pretty_assertions::assert_eq;

    fn valid_draft() -> LeadDraft {
        LeadDraft {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            industry: Some(Industry::Technology),
        }
    }

    #[test]
    fn test_valid_draft_has_no_errors() {
        assert_eq!(validate(&valid_draft()), vec![]);
    }

    #[test]
    fn test_empty_name_is_required() {
        let draft = LeadDraft {
            name: String::new(),
            ..valid_draft()
        };
        assert_eq!(
            validate(&draft),
            vec![FieldError {
                field: Field::Name,
                kind: ValidationKind::Required,
            }]
        );
    }

    #[test]
    fn test_whitespace_only_name_is_required() {
        let draft = LeadDraft {
            name: "   ".to_string(),
            ..valid_draft()
        };
        let errors = validate(&draft);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, Field::Name);
        assert_eq!(errors[0].kind, ValidationKind::Required);
    }

    #[test]
    fn test_empty_email_is_required() {
        let draft = LeadDraft {
            email: String::new(),
            ..valid_draft()
        };
        let errors = validate(&draft);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, Field::Email);
        assert_eq!(errors[0].kind, ValidationKind::Required);
    }

    #[test]
    fn test_email_without_at_is_invalid() {
        let draft = LeadDraft {
            email: "janeexample.com".to_string(),
            ..valid_draft()
        };
        let errors = validate(&draft);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationKind::InvalidFormat);
    }

    #[test]
    fn test_email_without_domain_dot_is_invalid() {
        let draft = LeadDraft {
            email: "jane@example".to_string(),
            ..valid_draft()
        };
        let errors = validate(&draft);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, Field::Email);
        assert_eq!(errors[0].kind, ValidationKind::InvalidFormat);
    }

    #[test]
    fn test_email_edge_shapes() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@b@c.com"));
    }

    #[test]
    fn test_missing_industry_is_required() {
        let draft = LeadDraft {
            industry: None,
            ..valid_draft()
        };
        let errors = validate(&draft);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, Field::Industry);
        assert_eq!(errors[0].kind, ValidationKind::Required);
    }

    #[test]
    fn test_errors_follow_field_declaration_order() {
        let draft = LeadDraft::default();
        let fields: Vec<Field> = validate(&draft).iter().map(|e| e.field).collect();
        assert_eq!(fields, vec![Field::Name, Field::Email, Field::Industry]);
    }

    #[test]
    fn test_at_most_one_error_per_field() {
        let draft = LeadDraft::default();
        let errors = validate(&draft);
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_required_message() {
        let errors = validate(&LeadDraft {
            name: String::new(),
            ..valid_draft()
        });
        assert_eq!(errors[0].message(), "Required");
    }

    #[test]
    fn test_validation_is_deterministic() {
        let draft = LeadDraft {
            email: "bad-email".to_string(),
            ..valid_draft()
        };
        assert_eq!(validate(&draft), validate(&draft));
    }
}
