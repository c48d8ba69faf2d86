//! The validation form: every field, the submit button and key hints

use super::field_renderer::draw_field;
use crate::app::App;
use crate::platform::{CLEAR_SHORTCUT, COPY_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{FieldName, Focus, FIELD_HEIGHT, SUBMIT_BUTTON_WIDTH};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the form panel
pub fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Form validation ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints: Vec<Constraint> = FieldName::ALL
        .iter()
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .collect();
    constraints.push(Constraint::Length(BUTTON_HEIGHT)); // Submit
    constraints.push(Constraint::Length(1)); // Help text
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(inner);

    let mask = app.config.masks_passwords();
    for name in FieldName::ALL {
        draw_field(
            frame,
            chunks[name.index()],
            &app.state.form,
            name,
            app.state.focus == Focus::Field(name),
            mask,
        );
    }

    let button_area = chunks[FieldName::COUNT];
    let button_area = Rect {
        width: button_area.width.min(SUBMIT_BUTTON_WIDTH),
        ..button_area
    };
    render_button(
        frame,
        button_area,
        "Submit",
        app.state.focus == Focus::Submit,
    );

    if app.config.shows_help() {
        let key_style = Style::default().fg(Color::Cyan);
        let help = Paragraph::new(Line::from(vec![
            Span::styled("Tab", key_style),
            Span::raw(": next  "),
            Span::styled(SUBMIT_SHORTCUT, key_style),
            Span::raw(": submit  "),
            Span::styled(CLEAR_SHORTCUT, key_style),
            Span::raw(": clear  "),
            Span::styled(COPY_SHORTCUT, key_style),
            Span::raw(": copy  "),
            Span::styled("Esc", key_style),
            Span::raw(": quit"),
        ]))
        .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, chunks[FieldName::COUNT + 1]);
    }
}
