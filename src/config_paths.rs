//! Where tabula keeps its user files
//!
//! Everything lives in one directory: `$XDG_CONFIG_HOME/tabula` (falling
//! back to `~/.config/tabula`) on Unix and macOS, `%APPDATA%\tabula` on
//! Windows.

use std::path::PathBuf;

use anyhow::{anyhow, Context};

const APP_DIR: &str = "tabula";

/// Base directory for config, keymap overrides and logs
pub fn config_dir() -> Option<PathBuf> {
    platform_config_root().map(|root| root.join(APP_DIR))
}

#[cfg(target_os = "windows")]
fn platform_config_root() -> Option<PathBuf> {
    std::env::var_os("APPDATA")
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}

#[cfg(not(target_os = "windows"))]
fn platform_config_root() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
}

fn in_config_dir(name: &str) -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(name))
}

pub fn config_file() -> Option<PathBuf> {
    in_config_dir("config.yaml")
}

/// User keymap overrides, merged over the defaults
pub fn keymap_file() -> Option<PathBuf> {
    in_config_dir("keymap.yaml")
}

pub fn logs_dir() -> Option<PathBuf> {
    in_config_dir("logs")
}

/// Create the logs directory (and its parents) if missing
pub fn ensure_logs_dir() -> anyhow::Result<PathBuf> {
    let logs = logs_dir().ok_or_else(|| anyhow!("no home or config directory"))?;
    std::fs::create_dir_all(&logs)
        .with_context(|| format!("creating {}", logs.display()))?;
    Ok(logs)
}
