//! Logging setup and state snapshots for diagnostics
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=selection=debug` - state diffs only
//! - `RUST_LOG=tabula::dispatch=trace` - every translated input event
//!
//! Logs are also written to `~/.config/tabula/logs/tabula.log` with daily
//! rotation, at debug level.

use std::fmt;

use tracing_subscriber::{fmt as tfmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::cell::{CellCoordinate, Selection};
use crate::model::EngineState;

/// Initialize tracing subscriber with console and file logging
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = tfmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "tabula.log");
            Some(
                tfmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("tabula: file logging disabled: {:#}", e);
            None
        }
    };

    // A second init (tests, embedding hosts) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init();
}

/// Active cell, selection and edit target, for before/after diffs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionSnapshot {
    pub active: Option<CellCoordinate>,
    pub selection: Option<Selection>,
    pub editing: Option<CellCoordinate>,
}

struct Cell(Option<CellCoordinate>);

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(c) => write!(f, "({},{})", c.row, c.col),
            None => write!(f, "none"),
        }
    }
}

struct Range(Option<Selection>);

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(s) => write!(f, "{}-{}", Cell(Some(s.min)), Cell(Some(s.max))),
            None => write!(f, "none"),
        }
    }
}

impl fmt::Display for SelectionSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "active {}, selection {}, editing {}",
            Cell(self.active),
            Range(self.selection),
            Cell(self.editing)
        )
    }
}

impl SelectionSnapshot {
    pub fn from_state(state: &EngineState) -> Self {
        Self {
            active: state.active_cell(),
            selection: state.selection(),
            editing: state.edit.as_ref().map(|e| e.target),
        }
    }

    /// Describe what changed, `None` if nothing did
    pub fn diff(&self, other: &SelectionSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.active != other.active {
            changes.push(format!("active: {} → {}", Cell(self.active), Cell(other.active)));
        }
        if self.selection != other.selection {
            changes.push(format!(
                "selection: {} → {}",
                Range(self.selection),
                Range(other.selection)
            ));
        }
        match (self.editing, other.editing) {
            (None, Some(target)) => changes.push(format!("editing {}", Cell(Some(target)))),
            (Some(_), None) => changes.push("editor closed".to_string()),
            (Some(a), Some(b)) if a != b => {
                changes.push(format!("editing {} → {}", Cell(Some(a)), Cell(Some(b))))
            }
            _ => {}
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
