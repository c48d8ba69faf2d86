//! Application state definitions

use super::forms::{FieldName, FormState, SubmitOutcome};
use chrono::{DateTime, Local};
use std::collections::VecDeque;

/// Which element of the form has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(FieldName),
    Submit,
}

impl Default for Focus {
    fn default() -> Self {
        Focus::Field(FieldName::FirstName)
    }
}

impl Focus {
    /// Number of focusable rows (every field plus the submit button)
    pub const COUNT: usize = FieldName::COUNT + 1;

    pub fn index(self) -> usize {
        match self {
            Focus::Field(name) => name.index(),
            Focus::Submit => FieldName::COUNT,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        match FieldName::from_index(index) {
            Some(name) => Some(Focus::Field(name)),
            None if index == FieldName::COUNT => Some(Focus::Submit),
            None => None,
        }
    }

    pub fn field(self) -> Option<FieldName> {
        match self {
            Focus::Field(name) => Some(name),
            Focus::Submit => None,
        }
    }

    /// Next focus target, wrapping around after the submit button
    pub fn next(self) -> Self {
        let index = (self.index() + 1) % Self::COUNT;
        Self::from_index(index).unwrap_or_default()
    }

    /// Previous focus target, wrapping around to the submit button
    pub fn prev(self) -> Self {
        let index = (self.index() + Self::COUNT - 1) % Self::COUNT;
        Self::from_index(index).unwrap_or_default()
    }
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub form: FormState,
    pub focus: Focus,
    /// Local time of the last accepted submission
    pub submitted_at: Option<DateTime<Local>>,
    /// Runtime errors waiting to be shown in the error dialog
    error_queue: VecDeque<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Focus::default())
    }
}

impl AppState {
    pub fn new(focus: Focus) -> Self {
        Self {
            form: FormState::new(),
            focus,
            submitted_at: None,
            error_queue: VecDeque::new(),
        }
    }

    /// Replace the form with the result of a transition
    fn update(&mut self, transition: impl FnOnce(FormState) -> FormState) {
        let form = std::mem::take(&mut self.form);
        self.form = transition(form);
    }

    /// Move focus, blurring the field being left
    pub fn focus_on(&mut self, target: Focus) {
        if target == self.focus {
            return;
        }
        if let Some(name) = self.focus.field() {
            self.update(|form| {
                let value = form.value(name).to_string();
                form.on_blur(name, &value)
            });
        }
        self.focus = target;
    }

    pub fn next_focus(&mut self) {
        self.focus_on(self.focus.next());
    }

    pub fn prev_focus(&mut self) {
        self.focus_on(self.focus.prev());
    }

    /// Type a character into the focused field
    pub fn input_char(&mut self, c: char) {
        let Some(name) = self.focus.field() else {
            return;
        };
        if !name.kind().accepts(c) {
            return;
        }
        self.update(|form| {
            let mut value = form.value(name).to_string();
            value.push(c);
            form.on_change(name, value)
        });
    }

    /// Delete the last character of the focused field
    pub fn backspace(&mut self) {
        let Some(name) = self.focus.field() else {
            return;
        };
        if self.form.value(name).is_empty() {
            return;
        }
        self.update(|form| {
            let mut value = form.value(name).to_string();
            value.pop();
            form.on_change(name, value)
        });
    }

    /// Clear the focused field
    pub fn clear_field(&mut self) {
        if let Some(name) = self.focus.field() {
            self.update(|form| form.on_change(name, String::new()));
        }
    }

    /// Submit the form, recording when a submission was accepted
    pub fn submit(&mut self) -> SubmitOutcome {
        let (form, outcome) = std::mem::take(&mut self.form).on_submit();
        self.form = form;
        if outcome.is_accepted() {
            self.submitted_at = Some(Local::now());
        }
        outcome
    }

    /// Queue a runtime error for display
    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    /// The error currently shown in the dialog
    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }
}
