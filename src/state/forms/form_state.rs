//! Form state machine
//!
//! [`FormState`] is the single aggregate holding field values, touched flags,
//! per-field errors and the last submitted snapshot. Every transition consumes
//! the current state and returns the next one.

use super::field::{FieldMap, FieldName};
use super::validator::{validate, ValidationContext, ValidationError};

/// Raw user input for every field
pub type FormValues = FieldMap<String>;

/// Current error of every field; `None` means no error
pub type ErrorMap = FieldMap<Option<ValidationError>>;

/// Whether each field has been blurred or a submit was attempted
pub type TouchedSet = FieldMap<bool>;

/// Display status of a field, derived from its error and touched flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    /// Not yet touched, nothing to show
    Neutral,
    Valid,
    Invalid,
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field validated; the values were stored as the submitted snapshot
    Accepted,
    /// At least one field has an error, listed in display order
    Rejected { invalid: Vec<FieldName> },
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    values: FormValues,
    errors: ErrorMap,
    touched: TouchedSet,
    submitted: Option<FormValues>,
}

impl FormState {
    /// Create an empty form: blank values, nothing touched, no errors
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, name: FieldName) -> &str {
        &self.values[name]
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn error(&self, name: FieldName) -> Option<ValidationError> {
        self.errors[name]
    }

    pub fn is_touched(&self, name: FieldName) -> bool {
        self.touched[name]
    }

    /// Values captured by the last successful submission
    pub fn submitted(&self) -> Option<&FormValues> {
        self.submitted.as_ref()
    }

    /// Whether no field currently holds an error
    pub fn is_valid(&self) -> bool {
        self.errors.iter().all(|(_, error)| error.is_none())
    }

    /// Display status of a field
    pub fn status(&self, name: FieldName) -> FieldStatus {
        match (self.touched[name], self.errors[name]) {
            (false, _) => FieldStatus::Neutral,
            (true, None) => FieldStatus::Valid,
            (true, Some(_)) => FieldStatus::Invalid,
        }
    }

    /// Store a new value. The error is only recomputed once the field has been
    /// touched.
    pub fn on_change(mut self, name: FieldName, value: impl Into<String>) -> Self {
        self.values.set(name, value.into());
        if self.touched[name] {
            let error = self.check(name, &self.values[name]);
            tracing::debug!(field = %name, invalid = error.is_some(), "revalidated on change");
            self.errors.set(name, error);
        }
        self
    }

    /// Mark a field as touched and validate the given value
    pub fn on_blur(mut self, name: FieldName, value: &str) -> Self {
        self.touched.set(name, true);
        let error = self.check(name, value);
        tracing::debug!(field = %name, invalid = error.is_some(), "validated on blur");
        self.errors.set(name, error);
        self
    }

    /// Revalidate every field, touch them all and, when nothing is invalid,
    /// keep a copy of the values as the submitted snapshot.
    pub fn on_submit(mut self) -> (Self, SubmitOutcome) {
        let errors = ErrorMap::from_fn(|name| self.check(name, &self.values[name]));
        self.errors = errors;
        self.touched = TouchedSet::from_fn(|_| true);

        let invalid: Vec<FieldName> = self
            .errors
            .iter()
            .filter(|(_, error)| error.is_some())
            .map(|(name, _)| name)
            .collect();

        if invalid.is_empty() {
            tracing::info!("Form submitted successfully");
            self.submitted = Some(self.values.clone());
            (self, SubmitOutcome::Accepted)
        } else {
            tracing::info!(
                invalid = invalid.len(),
                "Please correct the errors before submitting"
            );
            (self, SubmitOutcome::Rejected { invalid })
        }
    }

    fn check(&self, name: FieldName, value: &str) -> Option<ValidationError> {
        let context = ValidationContext::new(&self.values[FieldName::Password]);
        validate(name, value, &context).err()
    }
}
