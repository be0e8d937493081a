//! Form state management and the lead capture form

use super::field::FormField;
use crate::state::LeadDraft;
use crate::validation::Field;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> &mut FormField;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// The lead capture form: name, email, and industry
#[derive(Debug, Clone)]
pub struct LeadForm {
    pub name: FormField,
    pub email: FormField,
    pub industry: FormField,
    pub active_field_index: usize,
}

impl LeadForm {
    pub fn new() -> Self {
        Self {
            name: FormField::text("name", "Name"),
            email: FormField::text("email", "Email"),
            industry: FormField::select("industry", "Industry"),
            active_field_index: 0,
        }
    }

    /// Which logical field is currently active
    pub fn active_field_kind(&self) -> Field {
        match self.active_field_index {
            0 => Field::Name,
            1 => Field::Email,
            _ => Field::Industry,
        }
    }

    pub fn field_mut(&mut self, field: Field) -> &mut FormField {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Industry => &mut self.industry,
        }
    }

    /// Capture the current input as an immutable draft
    pub fn draft(&self) -> LeadDraft {
        LeadDraft {
            name: self.name.as_text().to_string(),
            email: self.email.as_text().to_string(),
            industry: self.industry.as_industry(),
        }
    }

    /// Reset every field to empty; keeps the active field position
    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.industry.clear();
    }
}

impl Default for LeadForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for LeadForm {
    fn field_count(&self) -> usize {
        3
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(2);
    }
    fn get_active_field_mut(&mut self) -> &mut FormField {
        match self.active_field_index {
            0 => &mut self.name,
            1 => &mut self.email,
            _ => &mut self.industry,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.name),
            1 => Some(&self.email),
            2 => Some(&self.industry),
            _ => None,
        }
    }
}
