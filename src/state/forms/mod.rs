//! Form domain layer
//!
//! - `field`: the closed set of field names and total per-field storage
//! - `validator`: pure per-field validation rules
//! - `form_state`: the change/blur/submit state machine

mod field;
mod form_state;
mod validator;

pub use field::FieldName;
pub use form_state::{FieldStatus, FormState, SubmitOutcome};
