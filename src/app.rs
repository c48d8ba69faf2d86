//! Application state and core logic

use crate::config::FormConfig;
use crate::state::{focus_at, AppState, Focus, SubmitOutcome, UiArea};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// User configuration
    pub config: FormConfig,
    /// Whether the app should quit
    quit: bool,
    /// Status bar message
    pub status_message: Option<String>,
    /// Terminal size for mouse hit testing (height, width)
    pub terminal_size: Option<(u16, u16)>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: FormConfig) -> Self {
        Self {
            state: AppState::new(config.initial_focus()),
            config,
            quit: false,
            status_message: None,
            terminal_size: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.status_message = None;

        let on_submit_button = self.state.focus == Focus::Submit;
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => self.quit = true,
            KeyCode::Char('s') if ctrl => self.submit(),
            KeyCode::Char('u') if ctrl => self.state.clear_field(),
            KeyCode::Char('y') if key.modifiers.contains(crate::platform::COPY_MODIFIER) => {
                self.copy_submitted()
            }
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => self.state.next_focus(),
            KeyCode::BackTab | KeyCode::Up => self.state.prev_focus(),
            KeyCode::Enter => {
                // Enter on the last field submits, like a browser form
                if on_submit_button || self.state.focus.next() == Focus::Submit {
                    self.submit();
                } else {
                    self.state.next_focus();
                }
            }
            KeyCode::Char('q') if on_submit_button => self.quit = true,
            KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                self.state.input_char(c)
            }
            KeyCode::Backspace => self.state.backspace(),
            _ => {}
        }
        Ok(())
    }

    /// Handle a mouse event
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        if self.state.has_errors() {
            return Ok(());
        }
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            let width = self.terminal_size.map(|(_, w)| w).unwrap_or(80);
            if let Some(target) = focus_at(mouse.column, mouse.row, width) {
                self.state.focus_on(target);
                if target == Focus::Submit {
                    self.submit();
                }
            } else if UiArea::SubmittedPanel.contains_col(mouse.column, width) {
                self.copy_submitted();
            }
        }
        Ok(())
    }

    /// Submit the form and report the outcome in the status bar
    fn submit(&mut self) {
        let message = match self.state.submit() {
            SubmitOutcome::Accepted => "Form submitted successfully!".to_string(),
            SubmitOutcome::Rejected { invalid } => format!(
                "Please correct the errors before submitting ({} invalid)",
                invalid.len()
            ),
        };
        self.status_message = Some(message);
    }

    /// Copy the submitted data to the clipboard as JSON
    fn copy_submitted(&mut self) {
        let Some(submitted) = self.state.form.submitted() else {
            self.status_message = Some("Nothing submitted yet".to_string());
            return;
        };
        let result = serde_json::to_string_pretty(submitted)
            .map_err(anyhow::Error::from)
            .and_then(|json| self.copy_to_clipboard(&json));
        match result {
            Ok(()) => self.status_message = Some("Copied submitted data".to_string()),
            Err(err) => {
                tracing::warn!("Clipboard copy failed: {err:#}");
                self.push_error(format!("Failed to copy submitted data: {err}"));
            }
        }
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}
