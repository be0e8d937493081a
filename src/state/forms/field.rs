//! Form field value objects

use crate::state::Industry;

/// Type-safe field values
#[derive(Debug, Clone)]
pub enum FieldValue {
    Text(String),
    Select(Option<Industry>),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: FieldValue,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Text(String::new()),
        }
    }

    /// Create a new industry selector field
    pub fn select(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Select(None),
        }
    }

    /// Get the text value (returns empty string for selector fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Select(_) => "",
        }
    }

    /// Get the selected industry (returns None for text fields)
    pub fn as_industry(&self) -> Option<Industry> {
        match &self.value {
            FieldValue::Select(i) => *i,
            FieldValue::Text(_) => None,
        }
    }

    /// Set the text value
    pub fn set_text(&mut self, value: String) {
        self.value = FieldValue::Text(value);
    }

    /// Set the selected industry
    pub fn set_selection(&mut self, industry: Industry) {
        self.value = FieldValue::Select(Some(industry));
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) => s.push(c),
            FieldValue::Select(_) => {
                // Selector fields don't take typed input
            }
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => {
                s.pop();
            }
            FieldValue::Select(_) => {}
        }
    }

    /// Move the selector to the next choice (starts at the first one)
    pub fn select_next(&mut self) {
        if let FieldValue::Select(current) = &mut self.value {
            *current = Some(match current {
                Some(i) => i.next(),
                None => Industry::ALL[0],
            });
        }
    }

    /// Move the selector to the previous choice
    pub fn select_prev(&mut self) {
        if let FieldValue::Select(current) = &mut self.value {
            *current = Some(match current {
                Some(i) => i.prev(),
                None => Industry::ALL[Industry::ALL.len() - 1],
            });
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Select(i) => *i = None,
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Select(i) => match i {
                Some(industry) => industry.label().to_string(),
                None => "Select industry".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_pop_char() {
        let mut field = FormField::text("name", "Name");
        field.push_char('J');
        field.push_char('o');
        assert_eq!(field.as_text(), "Jo");
        field.pop_char();
        assert_eq!(field.as_text(), "J");
    }

    #[test]
    fn test_typed_input_ignored_on_selector() {
        let mut field = FormField::select("industry", "Industry");
        field.push_char('x');
        assert!(field.as_industry().is_none());
    }

    #[test]
    fn test_select_next_starts_at_first_choice() {
        let mut field = FormField::select("industry", "Industry");
        field.select_next();
        assert_eq!(field.as_industry(), Some(Industry::Technology));
        field.select_next();
        assert_eq!(field.as_industry(), Some(Industry::Healthcare));
    }

    #[test]
    fn test_select_prev_starts_at_last_choice() {
        let mut field = FormField::select("industry", "Industry");
        field.select_prev();
        assert_eq!(field.as_industry(), Some(Industry::Other));
    }

    #[test]
    fn test_clear_resets_selection() {
        let mut field = FormField::select("industry", "Industry");
        field.set_selection(Industry::Finance);
        field.clear();
        assert!(field.as_industry().is_none());
    }

    #[test]
    fn test_display_value_placeholder() {
        let field = FormField::select("industry", "Industry");
        assert_eq!(field.display_value(), "Select industry");
    }

    #[test]
    fn test_display_value_shows_label() {
        let mut field = FormField::select("industry", "Industry");
        field.set_selection(Industry::Healthcare);
        assert_eq!(field.display_value(), "Healthcare");
    }
}
