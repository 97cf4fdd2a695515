//! Command-line argument parsing for the headless driver
//!
//! Supports:
//! - Loading a TSV file (header row = column ids)
//! - Replaying a key script against it
//! - Grid option overrides on top of the user config

use clap::Parser;
use std::path::PathBuf;

use crate::cell::CellCoordinate;
use crate::config::GridConfig;
use crate::keymap::{parse_key_string, KeymapError, Keystroke};
use crate::model::GridOptions;

/// Replay keystrokes against a TSV table
#[derive(Parser, Debug)]
#[command(
    name = "tabula",
    version,
    about = "Replay grid keystrokes against a TSV table"
)]
pub struct CliArgs {
    /// TSV file to load
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Space-separated keys, e.g. "down shift+right cmd+c text:Kimbal enter"
    #[arg(short = 'k', long, value_name = "KEYS")]
    pub keys: Option<String>,

    /// Initial active cell as ROW,COL (0-indexed)
    #[arg(short = 'a', long, value_name = "ROW,COL")]
    pub active: Option<String>,

    /// Enter on the last row appends an empty row
    #[arg(long)]
    pub auto_add_row: bool,

    /// Disallow row insertion and paste auto-grow
    #[arg(long)]
    pub lock_rows: bool,

    /// Commit text edits only when the editor closes
    #[arg(long)]
    pub lazy: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Copy to and paste from the desktop clipboard instead of an in-memory one
    #[arg(long)]
    pub system_clipboard: bool,
}

/// One step of a key script
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyToken {
    Stroke(Keystroke),
    /// Characters typed one by one
    Text(String),
}

/// Configuration derived from CLI arguments and the user config
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub file: PathBuf,
    pub keys: Vec<KeyToken>,
    pub active: Option<CellCoordinate>,
    pub options: GridOptions,
    /// Eager commits for the generated text columns
    pub continuous_updates: bool,
    pub json: bool,
    pub system_clipboard: bool,
}

impl CliArgs {
    /// Merge flags over `defaults`; flags can only switch options on
    pub fn into_config(self, defaults: &GridConfig) -> Result<RunConfig, String> {
        let keys = match &self.keys {
            Some(script) => parse_key_script(script).map_err(|e| e.to_string())?,
            None => Vec::new(),
        };
        let active = self.active.as_deref().map(parse_cell).transpose()?;

        let options = GridOptions {
            auto_add_row: self.auto_add_row || defaults.auto_add_row,
            lock_rows: self.lock_rows || defaults.lock_rows,
        };

        Ok(RunConfig {
            file: self.file,
            keys,
            active,
            options,
            continuous_updates: defaults.continuous_updates && !self.lazy,
            json: self.json,
            system_clipboard: self.system_clipboard,
        })
    }
}

/// Parse a whitespace-separated key script
pub fn parse_key_script(script: &str) -> Result<Vec<KeyToken>, KeymapError> {
    script.split_whitespace().map(parse_key_token).collect()
}

/// Parse one token: `text:...` types literally, anything else is a keystroke
pub fn parse_key_token(token: &str) -> Result<KeyToken, KeymapError> {
    if let Some(text) = token.strip_prefix("text:") {
        return Ok(KeyToken::Text(text.to_string()));
    }
    // Keystroke parsing lowercases, so keep case for single characters
    let mut chars = token.chars();
    if let (Some(ch), None) = (chars.next(), chars.next()) {
        if !ch.is_ascii_lowercase() && !ch.is_ascii_digit() {
            return Ok(KeyToken::Text(ch.to_string()));
        }
    }
    parse_key_string(token).map(KeyToken::Stroke)
}

fn parse_cell(value: &str) -> Result<CellCoordinate, String> {
    let (row, col) = value
        .split_once(',')
        .ok_or_else(|| format!("Expected ROW,COL, got '{}'", value))?;
    let row = row
        .trim()
        .parse()
        .map_err(|_| format!("Invalid row in '{}'", value))?;
    let col = col
        .trim()
        .parse()
        .map_err(|_| format!("Invalid column in '{}'", value))?;
    Ok(CellCoordinate::new(row, col))
}
