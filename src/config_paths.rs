//! Centralized configuration paths for search-select
//!
//! All config files live under:
//! - Unix/macOS: `~/.config/search-select/`
//! - Windows: `%APPDATA%\search-select\`

use std::{env, fs, path::PathBuf};

const APP_DIR: &str = "search-select";

/// Base config directory
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/search-select`
///   - Else: `~/.config/search-select`
///
/// Windows:
///   - `%APPDATA%\search-select`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/search-select/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// `~/.config/search-select/registries/`
pub fn registries_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("registries"))
}

/// `~/.config/search-select/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Ensure the logs directory exists, returning its path
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let dir = logs_dir().ok_or_else(|| "Could not determine config directory".to_string())?;
    fs::create_dir_all(&dir)
        .map_err(|e| format!("Failed to create logs directory {}: {}", dir.display(), e))?;
    Ok(dir)
}
