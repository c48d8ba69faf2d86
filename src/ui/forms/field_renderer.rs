//! Field rendering utilities for forms

use crate::state::{FieldName, FieldStatus, FormState};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const MASK_CHAR: char = '•';

/// Border colour for a field's display status
pub fn status_color(status: FieldStatus, is_active: bool) -> Color {
    match status {
        FieldStatus::Invalid => Color::Red,
        FieldStatus::Valid => Color::Green,
        FieldStatus::Neutral if is_active => Color::Cyan,
        FieldStatus::Neutral => Color::DarkGray,
    }
}

/// Value as it should appear on screen
pub fn display_value(name: FieldName, value: &str, mask_passwords: bool) -> String {
    if mask_passwords && name.kind().is_masked() {
        value.chars().map(|_| MASK_CHAR).collect()
    } else {
        value.to_string()
    }
}

/// Draw a form field with its validation status.
///
/// The error message goes in the bottom border and is only shown once the
/// field is touched.
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    form: &FormState,
    name: FieldName,
    is_active: bool,
    mask_passwords: bool,
) {
    let status = form.status(name);
    let color = status_color(status, is_active);

    let value = display_value(name, form.value(name), mask_passwords);
    let content = if value.is_empty() && !is_active {
        Line::from(Span::styled(
            name.label(),
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        let cursor = if is_active { "▌" } else { "" };
        Line::from(vec![
            Span::raw(value),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ])
    };

    let title_style = if is_active {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(color)
    };
    let border_style = if is_active {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(color)
    };

    let mut block = Block::default()
        .title(Span::styled(format!(" {} ", name.label()), title_style))
        .borders(Borders::ALL)
        .border_style(border_style);

    if form.is_touched(name) {
        if let Some(error) = form.error(name) {
            block = block.title_bottom(Span::styled(
                format!(" {error} "),
                Style::default().fg(Color::Red),
            ));
        }
    }

    frame.render_widget(Paragraph::new(content).block(block), area);
}
