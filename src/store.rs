//! Data store capability
//!
//! The host owns the records. The engine reads cells through [`DataStore`]
//! and proposes writes as patches; it never holds a reference into the data
//! across an input event.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cell::CellCoordinate;
use crate::column::{CellValue, Column};

/// One record, keyed by column id. A missing key reads as `Empty`.
pub type Record = BTreeMap<String, CellValue>;

/// A single proposed cell write
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellUpdate {
    pub row: usize,
    pub col: usize,
    pub value: CellValue,
}

impl CellUpdate {
    pub fn new(coord: CellCoordinate, value: CellValue) -> Self {
        Self {
            row: coord.row,
            col: coord.col,
            value,
        }
    }

    pub fn coordinate(&self) -> CellCoordinate {
        CellCoordinate::new(self.row, self.col)
    }
}

/// Batch of proposed writes, applied atomically by the host.
///
/// `new_rows` empty records are appended before `updates` are written, so
/// updates may target rows that do not exist yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Patch {
    pub new_rows: usize,
    pub updates: Vec<CellUpdate>,
}

impl Patch {
    pub fn is_empty(&self) -> bool {
        self.new_rows == 0 && self.updates.is_empty()
    }

    /// Append empty rows if needed, then write every update
    pub fn apply_to(&self, store: &mut dyn DataStore) {
        for _ in 0..self.new_rows {
            let at = store.row_count();
            store.insert_row_at(at, Record::new());
        }
        if !self.updates.is_empty() {
            store.apply_patch(&self.updates);
        }
    }
}

/// Row-oriented record storage owned by the host
pub trait DataStore {
    fn row_count(&self) -> usize;

    /// Read a cell, `Empty` when out of range
    fn get_cell(&self, row: usize, col: usize) -> CellValue;

    /// Write all updates; out-of-range targets are ignored
    fn apply_patch(&mut self, updates: &[CellUpdate]);

    /// Insert a record, `index` is clamped to `row_count`
    fn insert_row_at(&mut self, index: usize, record: Record);
}

/// In-memory store of records keyed by column id
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VecStore {
    keys: Vec<String>,
    rows: Vec<Record>,
}

impl VecStore {
    /// `keys[i]` is the record field read for column `i`
    pub fn new(keys: Vec<String>, rows: Vec<Record>) -> Self {
        Self { keys, rows }
    }

    /// Build with keys taken from the column ids
    pub fn for_columns(columns: &[Box<dyn Column>], rows: Vec<Record>) -> Self {
        let keys = columns.iter().map(|c| c.id().to_string()).collect();
        Self { keys, rows }
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Record> {
        self.rows
    }
}

impl DataStore for VecStore {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn get_cell(&self, row: usize, col: usize) -> CellValue {
        let Some(key) = self.keys.get(col) else {
            return CellValue::Empty;
        };
        self.rows
            .get(row)
            .and_then(|record| record.get(key))
            .cloned()
            .unwrap_or_default()
    }

    fn apply_patch(&mut self, updates: &[CellUpdate]) {
        for update in updates {
            let (Some(key), Some(record)) =
                (self.keys.get(update.col), self.rows.get_mut(update.row))
            else {
                tracing::debug!(row = update.row, col = update.col, "dropping out-of-range update");
                continue;
            };
            if update.value.is_empty() {
                record.remove(key);
            } else {
                record.insert(key.clone(), update.value.clone());
            }
        }
    }

    fn insert_row_at(&mut self, index: usize, record: Record) {
        let index = index.min(self.rows.len());
        self.rows.insert(index, record);
    }
}
