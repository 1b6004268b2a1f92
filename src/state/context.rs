//! Wizard draft state
//!
//! A [`FormDraft`] is what a create or edit screen holds while the user walks
//! through a wizard: the field values (canonical camelCase keys), the current
//! step, per-field errors and which image fields are being uploaded.

use std::collections::BTreeSet;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;
use crate::models::UploadedFile;
use crate::normalize::FromDraft;
use crate::utils::errors::{EventDeskError, Result, ValidationErrors};
use super::scenarios::{Wizard, WizardStep};

/// Whether the draft creates a new record or edits an existing one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftMode {
    Create,
    Edit { id: String },
}

/// In-progress form data for one wizard
#[derive(Debug, Clone)]
pub struct FormDraft {
    /// Wizard this draft belongs to
    pub wizard_id: String,
    pub mode: DraftMode,
    /// Index of the current step
    pub step: usize,
    pub values: Map<String, Value>,
    errors: ValidationErrors,
    uploading: BTreeSet<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FormDraft {
    /// Draft for a create wizard, holding the wizard's initial values
    pub fn new(wizard: &Wizard) -> Self {
        let now = Utc::now();
        Self {
            wizard_id: wizard.id.clone(),
            mode: DraftMode::Create,
            step: 0,
            values: wizard.initial_values.clone(),
            errors: ValidationErrors::new(),
            uploading: BTreeSet::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Draft for an edit wizard, seeded from the record's request shape
    pub fn edit<S: Serialize>(wizard: &Wizard, id: &str, seed: &S) -> Result<Self> {
        let mut draft = Self::new(wizard);
        draft.mode = DraftMode::Edit { id: id.to_string() };
        match serde_json::to_value(seed)? {
            Value::Object(mut values) => {
                values.remove("id");
                draft.values = values;
            }
            other => {
                return Err(EventDeskError::InvalidInput(format!(
                    "Cannot seed a draft from a non-object value: {}",
                    other
                )))
            }
        }
        Ok(draft)
    }

    /// Start values, such as default choices
    pub fn with_values(mut self, values: Value) -> Self {
        if let Value::Object(values) = values {
            self.values.extend(values);
        }
        self
    }

    pub fn edit_id(&self) -> Option<&str> {
        match &self.mode {
            DraftMode::Edit { id } => Some(id),
            DraftMode::Create => None,
        }
    }

    /// Set a field; clears any error recorded for it
    pub fn set(&mut self, field: &str, value: impl Into<Value>) {
        self.values.insert(field.to_string(), value.into());
        self.errors.fields.remove(field);
        self.updated_at = Utc::now();
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    pub fn text(&self, field: &str) -> String {
        match self.values.get(field) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        }
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn current_step<'w>(&self, wizard: &'w Wizard) -> Option<&'w WizardStep> {
        wizard.step(self.step)
    }

    pub fn is_last_step(&self, wizard: &Wizard) -> bool {
        self.step + 1 >= wizard.len()
    }

    /// Validate the current step only and advance when it passes
    pub fn next_step(&mut self, wizard: &Wizard) -> Result<usize> {
        self.check_wizard(wizard)?;
        let step = wizard.step(self.step).ok_or_else(|| self.transition_error(wizard, "end"))?;
        if self.is_last_step(wizard) {
            return Err(self.transition_error(wizard, "end"));
        }

        let errors = step.validate(&self.values)?;
        if !errors.is_empty() {
            debug!(wizard = %wizard.id, step = %step.id, invalid = errors.fields.len(), "Step validation failed");
            self.errors = errors.clone();
            return Err(EventDeskError::Validation(errors));
        }

        self.errors = ValidationErrors::new();
        self.step += 1;
        Ok(self.step)
    }

    /// Go back one step; never validates
    pub fn previous_step(&mut self, wizard: &Wizard) -> Result<usize> {
        self.check_wizard(wizard)?;
        if self.step == 0 {
            return Err(self.transition_error(wizard, "start"));
        }
        self.step -= 1;
        Ok(self.step)
    }

    /// Validate every step, recording the errors on the draft
    pub fn validate_all(&mut self, wizard: &Wizard) -> Result<()> {
        self.check_wizard(wizard)?;
        let errors = wizard.validate_all(&self.values)?;
        self.errors = errors.clone();
        errors.into_result().map_err(EventDeskError::Validation)
    }

    /// Validate the whole draft and flatten it into a request body
    pub fn submit<T: FromDraft>(&mut self, wizard: &Wizard) -> Result<T> {
        if let Some(field) = self.uploading.iter().next() {
            return Err(EventDeskError::InvalidInput(format!("Upload still in progress for {}", field)));
        }
        self.validate_all(wizard)?;
        Ok(T::from_draft(&Value::Object(self.values.clone())))
    }

    /// Mark an image field as uploading
    pub fn begin_upload(&mut self, field: &str) {
        self.uploading.insert(field.to_string());
    }

    /// Clear the uploading flag; a successful upload stores the file URL
    pub fn finish_upload(&mut self, field: &str, uploaded: Option<&UploadedFile>) {
        self.uploading.remove(field);
        if let Some(file) = uploaded {
            self.set(field, file.url.clone());
        }
    }

    pub fn is_uploading(&self, field: &str) -> bool {
        self.uploading.contains(field)
    }

    fn check_wizard(&self, wizard: &Wizard) -> Result<()> {
        if wizard.id != self.wizard_id {
            return Err(EventDeskError::InvalidInput(format!(
                "Draft belongs to wizard {}, not {}",
                self.wizard_id, wizard.id
            )));
        }
        Ok(())
    }

    fn transition_error(&self, wizard: &Wizard, to: &str) -> EventDeskError {
        let from = wizard
            .step(self.step)
            .map(|step| step.id.clone())
            .unwrap_or_else(|| self.step.to_string());
        EventDeskError::InvalidStepTransition { from, to: to.to_string() }
    }
}
