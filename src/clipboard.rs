//! Clipboard codec
//!
//! Ranges are copied as plain TSV (no quoting) plus an HTML table for rich
//! targets. Pasted text is untrusted: anything unparseable becomes an empty
//! grid and therefore an empty patch.

use crate::cell::{CellCoordinate, Selection};
use crate::column::Column;
use crate::store::{CellUpdate, DataStore, Patch};

/// What a copy places on the clipboard
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClipboardPayload {
    pub text: String,
    pub html: String,
}

fn copy_rows(
    selection: Selection,
    store: &dyn DataStore,
    columns: &[Box<dyn Column>],
) -> Vec<Vec<String>> {
    selection
        .rows()
        .map(|row| {
            selection
                .cols()
                .filter_map(|col| {
                    let column = columns.get(col)?;
                    Some(column.copy_value(&store.get_cell(row, col)))
                })
                .collect()
        })
        .collect()
}

/// Tab-separated values, one line per row. Disabled columns are included.
pub fn serialize(
    selection: Selection,
    store: &dyn DataStore,
    columns: &[Box<dyn Column>],
) -> String {
    copy_rows(selection, store, columns)
        .iter()
        .map(|cells| cells.join("\t"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// `<table>` rendering of the same cells
pub fn serialize_html(
    selection: Selection,
    store: &dyn DataStore,
    columns: &[Box<dyn Column>],
) -> String {
    let mut html = String::from("<table>");
    for cells in copy_rows(selection, store, columns) {
        html.push_str("<tr>");
        for cell in cells {
            html.push_str("<td>");
            html.push_str(&escape_html(&cell));
            html.push_str("</td>");
        }
        html.push_str("</tr>");
    }
    html.push_str("</table>");
    html
}

pub fn copy_payload(
    selection: Selection,
    store: &dyn DataStore,
    columns: &[Box<dyn Column>],
) -> ClipboardPayload {
    ClipboardPayload {
        text: serialize(selection, store, columns),
        html: serialize_html(selection, store, columns),
    }
}

/// Split on line breaks, then tabs. A single trailing line break is
/// ignored; empty input yields an empty grid.
pub fn parse(text: &str) -> Vec<Vec<String>> {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let body = normalized.strip_suffix('\n').unwrap_or(&normalized);
    if body.is_empty() {
        return Vec::new();
    }
    body.split('\n')
        .map(|line| line.split('\t').map(str::to_string).collect())
        .collect()
}

/// Result of planning a paste
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PastePlan {
    pub patch: Patch,
    /// Block the paste covers, for the new selection
    pub range: Option<Selection>,
}

/// Plan writing `parsed` into `target`.
///
/// A single value fills every cell of `target`. Otherwise the block is
/// written from `target.min`, appending rows as needed unless `lock_rows`
/// is set, and dropping columns past the right edge. Disabled columns keep
/// their values.
pub fn apply_paste(
    parsed: &[Vec<String>],
    target: Selection,
    store: &dyn DataStore,
    columns: &[Box<dyn Column>],
    lock_rows: bool,
) -> PastePlan {
    let height = parsed.len();
    let width = parsed.iter().map(Vec::len).max().unwrap_or(0);
    if height == 0 || width == 0 || columns.is_empty() {
        return PastePlan::default();
    }

    if height == 1 && width == 1 && !target.is_single() {
        let updates = target
            .cells()
            .filter_map(|cell| {
                let column = columns.get(cell.col)?;
                if column.disabled() {
                    return None;
                }
                Some(CellUpdate::new(cell, column.paste_value(&parsed[0][0])))
            })
            .collect();
        return PastePlan {
            patch: Patch {
                new_rows: 0,
                updates,
            },
            range: Some(target),
        };
    }

    let top_left = target.min;
    let row_count = store.row_count();
    let needed = top_left.row + height;
    let (height, new_rows) = if needed <= row_count {
        (height, 0)
    } else if lock_rows {
        (row_count.saturating_sub(top_left.row), 0)
    } else {
        (height, needed - row_count)
    };
    let width = width.min(columns.len().saturating_sub(top_left.col));
    if height == 0 || width == 0 {
        return PastePlan::default();
    }

    let mut updates = Vec::new();
    for (dr, values) in parsed.iter().take(height).enumerate() {
        for (dc, text) in values.iter().take(width).enumerate() {
            let cell = CellCoordinate::new(top_left.row + dr, top_left.col + dc);
            let column = &columns[cell.col];
            if column.disabled() {
                continue;
            }
            updates.push(CellUpdate::new(cell, column.paste_value(text)));
        }
    }

    let bottom_right = CellCoordinate::new(top_left.row + height - 1, top_left.col + width - 1);
    PastePlan {
        patch: Patch { new_rows, updates },
        range: Some(Selection::new(top_left, bottom_right)),
    }
}

/// Clear every non-disabled, non-empty cell in the selection
pub fn delete_contents(
    selection: Selection,
    store: &dyn DataStore,
    columns: &[Box<dyn Column>],
) -> Patch {
    let updates = selection
        .cells()
        .filter_map(|cell| {
            let column = columns.get(cell.col)?;
            if column.disabled() {
                return None;
            }
            let current = store.get_cell(cell.row, cell.col);
            if column.is_cell_empty(&current) {
                return None;
            }
            Some(CellUpdate::new(cell, column.delete_value(&current)))
        })
        .collect();
    Patch {
        new_rows: 0,
        updates,
    }
}

// =============================================================================
// Providers
// =============================================================================

/// Platform clipboard access
pub trait ClipboardProvider {
    fn get_text(&mut self) -> Option<String>;

    /// Place a payload; returns whether it was accepted
    fn set_payload(&mut self, payload: &ClipboardPayload) -> bool;

    /// Plain-text write (editor copy)
    fn set_text(&mut self, text: &str) -> bool {
        self.set_payload(&ClipboardPayload {
            text: text.to_string(),
            html: String::new(),
        })
    }
}

/// System clipboard backed by arboard
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardProvider for SystemClipboard {
    fn get_text(&mut self) -> Option<String> {
        let mut clipboard = arboard::Clipboard::new().ok()?;
        clipboard.get_text().ok()
    }

    fn set_payload(&mut self, payload: &ClipboardPayload) -> bool {
        let mut clipboard = match arboard::Clipboard::new() {
            Ok(cb) => cb,
            Err(e) => {
                tracing::warn!("Clipboard unavailable: {}", e);
                return false;
            }
        };
        let result = if payload.html.is_empty() {
            clipboard.set_text(payload.text.clone())
        } else {
            clipboard.set_html(payload.html.clone(), Some(payload.text.clone()))
        };
        if let Err(e) = &result {
            tracing::warn!("Failed to write clipboard: {}", e);
        }
        result.is_ok()
    }
}

/// In-process clipboard for tests and headless use
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryClipboard {
    pub contents: Option<ClipboardPayload>,
}

impl MemoryClipboard {
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            contents: Some(ClipboardPayload {
                text: text.into(),
                html: String::new(),
            }),
        }
    }

    pub fn text(&self) -> Option<&str> {
        self.contents.as_ref().map(|p| p.text.as_str())
    }
}

impl ClipboardProvider for MemoryClipboard {
    fn get_text(&mut self) -> Option<String> {
        self.contents.as_ref().map(|p| p.text.clone())
    }

    fn set_payload(&mut self, payload: &ClipboardPayload) -> bool {
        self.contents = Some(payload.clone());
        true
    }
}
