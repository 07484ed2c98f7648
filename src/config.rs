//! Persisted viewer settings (lives in the OS config directory).

use std::path::{Path, PathBuf};

use crate::model::DEFAULT_CELL_WIDTH;

const APP_NAME: &str = "BizdashGantt";
const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Pixel width of one day column.
    pub cell_width: f32,
    /// Task file opened last; reopened on start when no path is given.
    pub last_tasks_file: Option<PathBuf>,
    /// Fit the window to the task range after every load.
    pub refit_on_load: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cell_width: DEFAULT_CELL_WIDTH,
            last_tasks_file: None,
            refit_on_load: true,
        }
    }
}

impl Settings {
    /// Location of the settings file, falling back to the working directory.
    pub fn default_path() -> PathBuf {
        match directories::ProjectDirs::from("", "", APP_NAME) {
            Some(dirs) => dirs.config_dir().join(SETTINGS_FILE),
            None => PathBuf::from(".").join(SETTINGS_FILE),
        }
    }

    /// Read settings from `path`. A missing or unreadable file yields defaults.
    pub fn load(path: &Path) -> Self {
        let contents = match std::fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => {
                log::debug!("No settings at {} ({}), using defaults", path.display(), e);
                return Self::default();
            }
        };
        match serde_json::from_str::<Settings>(&contents) {
            Ok(settings) => settings.sanitized(),
            Err(e) => {
                log::warn!("Ignoring malformed settings {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }

    fn sanitized(mut self) -> Self {
        if !(self.cell_width.is_finite() && self.cell_width > 0.0) {
            log::warn!("Invalid cell_width {}, using {}", self.cell_width, DEFAULT_CELL_WIDTH);
            self.cell_width = DEFAULT_CELL_WIDTH;
        }
        self
    }
}
