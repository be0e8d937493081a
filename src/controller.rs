//! Form validation and submission state machine
//!
//! Owns the form, its validation errors, and the submission status, and
//! orchestrates the submit sequence: validate, send, record, transition.
//! The submit client and lead store are injected so tests can substitute
//! mocks and in-memory fakes.

use crate::state::{Form, Industry, LeadForm, LeadRecord, SubmissionStatus};
use crate::store::LeadStore;
use crate::submit::SubmitClient;
use crate::validation::{self, Field, FieldError};
use tracing::{info, warn};

/// Read-only projection of controller state for rendering
pub struct ControllerSnapshot<'a> {
    pub form: &'a LeadForm,
    pub errors: &'a [FieldError],
    pub status: SubmissionStatus,
    pub lead_count: usize,
}

/// The lead capture controller
pub struct FormController<C, S> {
    form: LeadForm,
    errors: Vec<FieldError>,
    status: SubmissionStatus,
    client: C,
    store: S,
}

impl<C: SubmitClient, S: LeadStore> FormController<C, S> {
    pub fn new(client: C, store: S) -> Self {
        Self {
            form: LeadForm::new(),
            errors: Vec::new(),
            status: SubmissionStatus::Idle,
            client,
            store,
        }
    }

    pub fn form(&self) -> &LeadForm {
        &self.form
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    #[allow(dead_code)]
    pub fn lead_count(&self) -> usize {
        self.store.count()
    }

    pub fn snapshot(&self) -> ControllerSnapshot<'_> {
        ControllerSnapshot {
            form: &self.form,
            errors: &self.errors,
            status: self.status,
            lead_count: self.store.count(),
        }
    }

    #[allow(dead_code)]
    pub fn error_for(&self, field: Field) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }

    /// Move focus to the next field; focus changes are not value changes
    /// and leave errors alone
    pub fn next_field(&mut self) {
        self.form.next_field();
    }

    pub fn prev_field(&mut self) {
        self.form.prev_field();
    }

    /// Type one character into the active field
    pub fn push_char(&mut self, c: char) {
        let field = self.form.active_field_kind();
        self.form.get_active_field_mut().push_char(c);
        self.clear_field_errors(field);
    }

    /// Delete the last character of the active field
    pub fn backspace(&mut self) {
        let field = self.form.active_field_kind();
        self.form.get_active_field_mut().pop_char();
        self.clear_field_errors(field);
    }

    pub fn select_next_industry(&mut self) {
        self.form.industry.select_next();
        self.clear_field_errors(Field::Industry);
    }

    pub fn select_prev_industry(&mut self) {
        self.form.industry.select_prev();
        self.clear_field_errors(Field::Industry);
    }

    /// Replace a text field's value wholesale
    #[allow(dead_code)]
    pub fn set_text(&mut self, field: Field, value: impl Into<String>) {
        self.form.field_mut(field).set_text(value.into());
        self.clear_field_errors(field);
    }

    #[allow(dead_code)]
    pub fn set_industry(&mut self, industry: Industry) {
        self.form.industry.set_selection(industry);
        self.clear_field_errors(Field::Industry);
    }

    /// Run one validation pass and, if clean, submit the captured draft.
    ///
    /// A no-op while a submission is already in flight, so at most one
    /// call is ever outstanding per controller.
    pub async fn submit(&mut self) {
        if self.status == SubmissionStatus::Submitting {
            return;
        }

        // The draft is a snapshot: edits delivered while the call below
        // is suspended cannot change the submitted payload.
        let draft = self.form.draft();
        let errors = validation::validate(&draft);
        if !errors.is_empty() {
            self.errors = errors;
            return;
        }
        self.errors.clear();
        self.status = SubmissionStatus::Submitting;

        match self.client.submit_lead(&draft).await {
            Ok(()) => {
                let Some(record) = LeadRecord::from_draft(&draft) else {
                    // Unreachable after a clean validation pass
                    self.status = SubmissionStatus::Error;
                    return;
                };
                if let Err(e) = self.store.append(record).await {
                    // Never claim success for a lead that was not recorded
                    warn!(error = %e, "failed to record lead locally");
                    self.status = SubmissionStatus::Error;
                    return;
                }
                self.form.clear();
                self.status = SubmissionStatus::Success;
                info!(count = self.store.count(), "lead submitted");
            }
            Err(e) => {
                warn!(error = %e, "lead submission failed");
                self.status = SubmissionStatus::Error;
            }
        }
    }

    /// Return to an editable form after the success screen
    pub fn reset(&mut self) {
        if self.status == SubmissionStatus::Success {
            self.status = SubmissionStatus::Idle;
        }
    }

    fn clear_field_errors(&mut self, field: Field) {
        self.errors.retain(|e| e.field != field);
    }

    #[cfg(test)]
    fn force_status(&mut self, status: SubmissionStatus) {
        self.status = status;
    }
}
