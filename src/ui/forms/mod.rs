//! Form rendering module
//!
//! This module contains UI components for rendering the form:
//! - `field_renderer`: Field rendering utilities
//! - `validation_form`: The form panel with all fields and the submit button

mod field_renderer;
mod validation_form;

pub use field_renderer::display_value;
pub use validation_form::draw_form;
