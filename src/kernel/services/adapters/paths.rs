//! Platform data directories.
//!
//! - macOS: ~/Library/Application Support/treepad
//! - Linux and other unix: $XDG_DATA_HOME/treepad or ~/.local/share/treepad
//! - Windows: %APPDATA%\treepad

use std::io;
use std::path::PathBuf;

const APP_NAME: &str = "treepad";
const LOG_DIR: &str = "logs";
const SETTINGS_FILE: &str = "settings.json";
const SNAPSHOT_FILE: &str = "session.json";

fn get_app_data_dir() -> Option<PathBuf> {
    let base = if cfg!(target_os = "windows") {
        PathBuf::from(std::env::var_os("APPDATA")?)
    } else if cfg!(target_os = "macos") {
        PathBuf::from(std::env::var_os("HOME")?).join("Library/Application Support")
    } else {
        match std::env::var_os("XDG_DATA_HOME") {
            Some(xdg) => PathBuf::from(xdg),
            None => PathBuf::from(std::env::var_os("HOME")?).join(".local/share"),
        }
    };
    Some(base.join(APP_NAME))
}

pub fn get_log_dir() -> Option<PathBuf> {
    get_app_data_dir().map(|p| p.join(LOG_DIR))
}

pub fn get_settings_path() -> Option<PathBuf> {
    get_app_data_dir().map(|p| p.join(SETTINGS_FILE))
}

pub fn get_snapshot_path() -> Option<PathBuf> {
    get_app_data_dir().map(|p| p.join(SNAPSHOT_FILE))
}

pub fn ensure_log_dir() -> io::Result<PathBuf> {
    let dir = get_log_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "cannot determine log directory"))?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/paths.rs"]
mod tests;
