// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for configuration and downloads.
//!
//! # Path Resolution Order
//!
//! Paths are resolved in the following priority order:
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **Environment variables** (`HLS_GRID_CONFIG_DIR`, `HLS_GRID_DOWNLOAD_DIR`)
//! 3. **Platform default** - via `dirs` crate

use std::path::PathBuf;

/// Application name used for directory naming.
const APP_NAME: &str = "HlsGrid";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "HLS_GRID_CONFIG_DIR";

/// Environment variable to override the download directory.
pub const ENV_DOWNLOAD_DIR: &str = "HLS_GRID_DOWNLOAD_DIR";

fn env_path(name: &str) -> Option<PathBuf> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Some(PathBuf::from(value)),
        _ => None,
    }
}

/// Returns the config directory path (holds `settings.toml`).
///
/// Returns `None` if the config directory cannot be determined (rare edge case).
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the config directory path with an optional override.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = env_path(ENV_CONFIG_DIR) {
        return Some(path);
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the directory downloaded sources are saved into.
///
/// Falls back to the current directory when the platform has no download
/// directory.
pub fn get_download_dir() -> PathBuf {
    get_download_dir_with_override(None)
}

/// Returns the download directory with an optional override.
pub fn get_download_dir_with_override(override_path: Option<PathBuf>) -> PathBuf {
    if let Some(path) = override_path {
        return path;
    }

    if let Some(path) = env_path(ENV_DOWNLOAD_DIR) {
        return path;
    }

    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}
