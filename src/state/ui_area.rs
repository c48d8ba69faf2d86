//! UI area positioning for mouse event handling
//!
//! The draw code and the mouse handler share these constants so a click can be
//! mapped back to the focusable row under it.
//!
//! # Layout
//!
//! ```text
//! Row 0:    Form panel top border          | Submitted data panel
//! Row 1:    Margin                         | (SUBMITTED_PANEL_WIDTH cols)
//! Row 2+:   Fields, FIELD_HEIGHT rows each |
//!           Submit button                  |
//!           Help line                      |
//! Bottom:   Status bar (1 row)
//! ```

use super::app_state::Focus;

/// Height of one field box (top border + value + bottom border with error)
pub const FIELD_HEIGHT: u16 = 3;

/// Width of the submitted data panel on the right
pub const SUBMITTED_PANEL_WIDTH: u16 = 40;

/// Border plus margin around the form fields
pub const FORM_INSET: u16 = 2;

/// Widest the submit button is drawn
pub const SUBMIT_BUTTON_WIDTH: u16 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiArea {
    /// Field boxes and the submit button
    FormContent,
    /// Submitted data listing on the right
    SubmittedPanel,
}

impl UiArea {
    /// Get the starting Y row for this UI area (absolute screen position)
    #[inline]
    pub const fn start_y(self) -> u16 {
        match self {
            UiArea::FormContent => FORM_INSET,
            UiArea::SubmittedPanel => 0,
        }
    }

    /// Convert absolute mouse row to row relative to this UI area
    #[inline]
    pub fn relative_row(self, mouse_row: u16) -> u16 {
        mouse_row.saturating_sub(self.start_y())
    }

    /// Check if a mouse row is within this UI area (at or after start)
    #[inline]
    pub fn contains_row(self, mouse_row: u16) -> bool {
        mouse_row >= self.start_y()
    }

    /// Check if a mouse column falls in this area for a given terminal width
    pub fn contains_col(self, mouse_col: u16, terminal_width: u16) -> bool {
        let split = terminal_width.saturating_sub(SUBMITTED_PANEL_WIDTH);
        match self {
            UiArea::FormContent => {
                mouse_col >= FORM_INSET && mouse_col < split.saturating_sub(FORM_INSET)
            }
            UiArea::SubmittedPanel => mouse_col >= split,
        }
    }
}

/// Focus target under a mouse position, if any
pub fn focus_at(mouse_col: u16, mouse_row: u16, terminal_width: u16) -> Option<Focus> {
    let area = UiArea::FormContent;
    if !area.contains_row(mouse_row) || !area.contains_col(mouse_col, terminal_width) {
        return None;
    }
    match Focus::from_index((area.relative_row(mouse_row) / FIELD_HEIGHT) as usize) {
        // The button row is blank past the button itself
        Some(Focus::Submit) if mouse_col >= FORM_INSET + SUBMIT_BUTTON_WIDTH => None,
        focus => focus,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FieldName;

    #[test]
    fn test_start_y_values() {
        assert_eq!(UiArea::FormContent.start_y(), 2);
        assert_eq!(UiArea::SubmittedPanel.start_y(), 0);
    }

    #[test]
    fn test_relative_row_saturates() {
        assert_eq!(UiArea::FormContent.relative_row(0), 0);
        assert_eq!(UiArea::FormContent.relative_row(5), 3);
    }

    #[test]
    fn test_contains_col_splits_panels() {
        assert!(UiArea::FormContent.contains_col(10, 120));
        assert!(!UiArea::FormContent.contains_col(0, 120));
        assert!(!UiArea::FormContent.contains_col(90, 120));
        assert!(UiArea::SubmittedPanel.contains_col(80, 120));
        assert!(!UiArea::SubmittedPanel.contains_col(79, 120));
    }

    #[test]
    fn test_focus_at_maps_rows_to_fields() {
        assert_eq!(
            focus_at(10, 2, 120),
            Some(Focus::Field(FieldName::FirstName))
        );
        assert_eq!(
            focus_at(10, 4, 120),
            Some(Focus::Field(FieldName::FirstName))
        );
        assert_eq!(
            focus_at(10, 5, 120),
            Some(Focus::Field(FieldName::LastName))
        );
        assert_eq!(
            focus_at(10, 2 + 6 * FIELD_HEIGHT, 120),
            Some(Focus::Field(FieldName::ConfirmPassword))
        );
        assert_eq!(focus_at(10, 2 + 7 * FIELD_HEIGHT, 120), Some(Focus::Submit));
    }

    #[test]
    fn test_focus_at_outside_form_is_none() {
        assert_eq!(focus_at(10, 1, 120), None);
        assert_eq!(focus_at(100, 5, 120), None);
        assert_eq!(focus_at(10, 2 + 8 * FIELD_HEIGHT, 120), None);
    }

    #[test]
    fn test_focus_at_submit_row_only_covers_the_button() {
        let row = 2 + 7 * FIELD_HEIGHT;
        assert_eq!(focus_at(FORM_INSET, row, 120), Some(Focus::Submit));
        let last = FORM_INSET + SUBMIT_BUTTON_WIDTH - 1;
        assert_eq!(focus_at(last, row, 120), Some(Focus::Submit));
        assert_eq!(focus_at(last + 1, row, 120), None);
        assert_eq!(focus_at(40, row, 120), None);
        // Field rows still span the whole form width
        assert_eq!(
            focus_at(40, 2, 120),
            Some(Focus::Field(FieldName::FirstName))
        );
    }
}
