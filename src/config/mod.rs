#[cfg(test)]
mod tests;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::types::{GridWindow, RowUnit};
use crate::errors::{Error, Result};

fn default_credit_ceiling() -> u32 {
    18
}
fn default_start_hour() -> u8 {
    9
}
fn default_end_hour() -> u8 {
    18
}
fn default_row_unit_minutes() -> u16 {
    60
}
fn default_true() -> bool {
    true
}

/// Display-window section of the config file. Raw numbers here; validation
/// happens when the `GridWindow` is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowSection {
    #[serde(default = "default_start_hour")]
    pub start_hour: u8,
    #[serde(default = "default_end_hour")]
    pub end_hour: u8,
    #[serde(default = "default_row_unit_minutes")]
    pub row_unit_minutes: u16,
    #[serde(default)]
    pub include_weekend: bool,
}

impl Default for WindowSection {
    fn default() -> Self {
        Self {
            start_hour: default_start_hour(),
            end_hour: default_end_hour(),
            row_unit_minutes: default_row_unit_minutes(),
            include_weekend: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigFile {
    /// Role/year dependent; supplied per student by the portal.
    #[serde(default = "default_credit_ceiling")]
    pub credit_ceiling: u32,
    #[serde(default)]
    pub window: WindowSection,
    #[serde(default = "default_true")]
    pub file_logging_enabled: bool,
}

#[derive(Debug, Clone)]
pub struct Config {
    path: Option<PathBuf>,
    data: ConfigFile,
    window: GridWindow,
}

impl Config {
    pub fn load_default() -> Result<Self> {
        Self::load_from("config.json")
    }

    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(Error::config(format!(
                "Configuration file '{}' not found.",
                path.display()
            )));
        }
        let text = fs::read_to_string(&path)
            .map_err(|e| Error::config(format!("Failed to read {}: {}", path.display(), e)))?;
        let mut config = Self::from_json_str(&text)
            .map_err(|e| Error::config(format!("Invalid config '{}': {}", path.display(), e)))?;
        config.path = Some(path);
        Ok(config)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let data: ConfigFile = serde_json::from_str(text)?;
        Self::from_data(data)
    }

    pub fn from_data(data: ConfigFile) -> Result<Self> {
        let row_unit = RowUnit::try_from_minutes(data.window.row_unit_minutes)?;
        let window = GridWindow::new(
            data.window.start_hour,
            data.window.end_hour,
            row_unit,
            data.window.include_weekend,
        )?;
        if data.credit_ceiling == 0 {
            return Err(Error::config("Credit ceiling must be positive."));
        }
        Ok(Self {
            path: None,
            data,
            window,
        })
    }

    pub fn credit_ceiling(&self) -> u32 {
        self.data.credit_ceiling
    }

    pub fn window(&self) -> GridWindow {
        self.window
    }

    pub fn file_logging_enabled(&self) -> bool {
        self.data.file_logging_enabled
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl Default for Config {
    /// In-memory defaults: ceiling 18, 09:00-18:00 hourly window, weekdays
    /// only.
    fn default() -> Self {
        Self {
            path: None,
            data: ConfigFile {
                credit_ceiling: default_credit_ceiling(),
                window: WindowSection::default(),
                file_logging_enabled: true,
            },
            window: GridWindow::default(),
        }
    }
}
