// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use hls_grid::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.player_count = Some(4);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::video::{PlaybackSpeed, PlayerCount};
use crate::error::Result;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

const CONFIG_FILE: &str = "settings.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub player_count: Option<u8>,
    #[serde(default)]
    pub default_speed: Option<f64>,
    #[serde(default)]
    pub download_dir: Option<PathBuf>,
    #[serde(default)]
    pub download_filename: Option<String>,
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            player_count: Some(DEFAULT_PLAYER_COUNT),
            default_speed: Some(DEFAULT_PLAYBACK_SPEED),
            download_dir: None,
            download_filename: Some(DEFAULT_DOWNLOAD_FILENAME.to_string()),
            user_agent: None,
        }
    }
}

/// Settings handed to each player, resolved from [`Config`].
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSettings {
    pub default_speed: PlaybackSpeed,
    pub download_dir: PathBuf,
    pub download_filename: String,
    pub user_agent: String,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Config::default().player_settings()
    }
}

impl Config {
    /// Returns the configured grid size, falling back to the default when
    /// the stored value is missing or outside the selector range.
    pub fn player_count(&self) -> PlayerCount {
        self.player_count
            .and_then(|n| PlayerCount::new(n).ok())
            .unwrap_or_default()
    }

    /// Resolves the per-player settings, filling unset fields with defaults.
    pub fn player_settings(&self) -> PlayerSettings {
        PlayerSettings {
            default_speed: self
                .default_speed
                .and_then(PlaybackSpeed::try_new)
                .unwrap_or_default(),
            download_dir: paths::get_download_dir_with_override(self.download_dir.clone()),
            download_filename: self
                .download_filename
                .clone()
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_DOWNLOAD_FILENAME.to_string()),
            user_agent: self
                .user_agent
                .clone()
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    paths::get_app_config_dir().map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "invalid settings file, using defaults");
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
