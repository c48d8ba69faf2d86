//! Submitted data panel

use super::forms::display_value;
use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the last submitted values, or a hint when nothing was submitted
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Submitted Data ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let Some(submitted) = app.state.form.submitted() else {
        let empty = Paragraph::new("Nothing submitted yet.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    };

    let mask = app.config.masks_passwords();
    let mut lines: Vec<Line> = submitted
        .iter()
        .map(|(name, value)| {
            Line::from(vec![
                Span::styled(
                    format!("{name}: "),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(display_value(name, value, mask)),
            ])
        })
        .collect();

    if let Some(at) = app.state.submitted_at {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Submitted at {}", at.format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(block.border_style(Style::default().fg(Color::Green)));
    frame.render_widget(paragraph, area);
}
