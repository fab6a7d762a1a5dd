//! Settings persistence
//!
//! Saves and loads [`Settings`] to/from a JSON file so preferences survive
//! between sessions.
//!
//! # File Location
//!
//! `settings.json` in the platform configuration directory, e.g.
//! `~/.config/xiangqi/settings.json` on Linux. Falls back to the current
//! directory when no configuration directory can be resolved.
//!
//! # Error Handling
//!
//! Load failures fall back to default settings with a warning; save failures are
//! returned to the caller.

use anyhow::Context;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use xiangqi_engine::{Color, SearchConfig};

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// User preferences
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub search: SearchConfig,
    /// Side played by the computer; `None` for two human players
    pub ai_color: Option<Color>,
    /// Chinese glyphs instead of FEN letters
    pub chinese: bool,
    /// ANSI color for Red pieces
    pub colored: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            search: SearchConfig::default(),
            ai_color: Some(Color::Black),
            chinese: true,
            colored: true,
        }
    }
}

/// Path of `settings.json` in the user's configuration directory
pub fn settings_path() -> PathBuf {
    match ProjectDirs::from("com", "xiangqi", "Xiangqi") {
        Some(dirs) => dirs.config_dir().join(SETTINGS_FILENAME),
        None => PathBuf::from(SETTINGS_FILENAME),
    }
}

/// Load settings from the default location
pub fn load_settings() -> Settings {
    load_settings_from(&settings_path())
}

/// Load settings from `path`, using defaults if it is missing or invalid
pub fn load_settings_from(path: &Path) -> Settings {
    if !path.exists() {
        info!(?path, "no settings file, using defaults");
        return Settings::default();
    }
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            warn!(?path, error = %e, "failed to read settings, using defaults");
            return Settings::default();
        }
    };
    match serde_json::from_str(&contents) {
        Ok(settings) => {
            info!(?path, "loaded settings");
            settings
        }
        Err(e) => {
            warn!(?path, error = %e, "failed to parse settings, using defaults");
            Settings::default()
        }
    }
}

/// Save settings to the default location, returning the path written
pub fn save_settings(settings: &Settings) -> anyhow::Result<PathBuf> {
    let path = settings_path();
    save_settings_to(settings, &path)?;
    Ok(path)
}

pub fn save_settings_to(settings: &Settings, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating settings directory {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(settings).context("serializing settings")?;
    fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("xiangqi-settings-{}-{name}", std::process::id()))
            .join(SETTINGS_FILENAME)
    }

    #[test]
    fn test_save_then_load() {
        let path = scratch_path("roundtrip");
        let settings = Settings {
            search: SearchConfig {
                think_time: Duration::from_millis(750),
                max_depth: 3,
                ..SearchConfig::default()
            },
            ai_color: Some(Color::Red),
            chinese: false,
            colored: false,
        };
        save_settings_to(&settings, &path).unwrap();
        assert_eq!(load_settings_from(&path), settings);
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let path = scratch_path("missing");
        assert_eq!(load_settings_from(&path), Settings::default());
    }

    #[test]
    fn test_invalid_file_uses_defaults() {
        let path = scratch_path("invalid");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(load_settings_from(&path), Settings::default());
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"ai_color": null}"#).unwrap();
        assert_eq!(settings.ai_color, None);
        assert!(settings.chinese);
        assert_eq!(settings.search, SearchConfig::default());
    }
}
