use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Defaults applied when a canvas is created without explicit values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub default_canvas_width: f64,
    pub default_canvas_height: f64,
    pub default_background_color: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_canvas_width: 1920.0,
            default_canvas_height: 1080.0,
            default_background_color: "#FFFFFF".to_string(),
        }
    }
}

/// Resolve the Easel data directory: `$EASEL_HOME`, else `~/.easel/`.
pub fn easel_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os("EASEL_HOME").filter(|d| !d.is_empty()) {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".easel")
}

pub fn canvases_dir() -> PathBuf {
    easel_dir().join("canvases")
}

fn settings_path() -> PathBuf {
    easel_dir().join("settings.json")
}

pub fn read_settings() -> Settings {
    read_settings_from(&settings_path())
}

/// Missing or unreadable files fall back to defaults; unknown keys are ignored.
pub fn read_settings_from(path: &Path) -> Settings {
    if !path.exists() {
        return Settings::default();
    }
    match fs::read_to_string(path).map(|s| serde_json::from_str(&s)) {
        Ok(Ok(settings)) => settings,
        Ok(Err(e)) => {
            log::warn!("ignoring malformed settings at {}: {}", path.display(), e);
            Settings::default()
        }
        Err(e) => {
            log::warn!("cannot read settings at {}: {}", path.display(), e);
            Settings::default()
        }
    }
}
