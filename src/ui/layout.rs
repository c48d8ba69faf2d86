//! Layout components (form panel, submitted panel, status bar)

use crate::app::App;
use crate::state::SUBMITTED_PANEL_WIDTH;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Areas of the main screen
pub struct ScreenLayout {
    pub form: Rect,
    pub submitted: Rect,
    pub status_bar: Rect,
}

/// Create the main layout: form on the left, submitted data on the right
pub fn create_layout(area: Rect) -> ScreenLayout {
    // Reserve bottom line for status bar
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),                        // Form
            Constraint::Length(SUBMITTED_PANEL_WIDTH), // Submitted data
        ])
        .split(rows[0]);

    ScreenLayout {
        form: columns[0],
        submitted: columns[1],
        status_bar: rows[1],
    }
}

/// Draw the status bar with the last status message and form validity
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let summary = if form.is_valid() {
        Span::styled(
            " no errors ",
            Style::default().fg(Color::Black).bg(Color::Green),
        )
    } else {
        let invalid = form.errors().iter().filter(|(_, e)| e.is_some()).count();
        Span::styled(
            format!(" {invalid} error(s) "),
            Style::default().fg(Color::White).bg(Color::Red),
        )
    };

    let mut spans = vec![summary, Span::raw(" ")];
    if let Some(message) = &app.status_message {
        let style = Style::default().fg(Color::Yellow);
        spans.push(Span::styled(message.as_str(), style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
