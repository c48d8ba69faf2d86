//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod submitted;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let screen = layout::create_layout(frame.area());

    forms::draw_form(frame, screen.form, app);
    submitted::draw(frame, screen.submitted, app);
    layout::draw_status_bar(frame, screen.status_bar, app);

    // Runtime errors are modal and drawn last
    if let Some(message) = app.state.current_error() {
        components::render_error_dialog(frame, message);
    }
}
