//! Configuration handling for the TUI

use crate::state::{FieldName, Focus};
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormConfig {
    /// Hide password values behind bullets (default: true)
    pub mask_passwords: Option<bool>,
    /// Show the key hint line under the form (default: true)
    pub show_help: Option<bool>,
    /// Field focused on startup, by key (e.g. "email"), or "submit"
    pub initial_focus: Option<String>,
}

impl FormConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "form-validation", "form-validation-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: FormConfig = serde_json::from_str(&content)?;
                tracing::debug!("Loaded config from {}", path.display());
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    pub fn masks_passwords(&self) -> bool {
        self.mask_passwords.unwrap_or(true)
    }

    pub fn shows_help(&self) -> bool {
        self.show_help.unwrap_or(true)
    }

    /// Resolve the startup focus. Unknown field names fall back to the first
    /// field.
    pub fn initial_focus(&self) -> Focus {
        let default = Focus::default();
        match self.initial_focus.as_deref() {
            None => default,
            Some("submit") => Focus::Submit,
            Some(raw) => match raw.parse::<FieldName>() {
                Ok(name) => Focus::Field(name),
                Err(err) => {
                    tracing::warn!("Ignoring initial_focus: {err}");
                    default
                }
            },
        }
    }
}
