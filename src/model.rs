//! Grid model - the complete engine state for one grid instance

use serde::{Deserialize, Serialize};

use crate::cell::{CellCoordinate, GridSize, Selection};
use crate::column::Column;
use crate::config::GridConfig;
use crate::edit::EditState;
use crate::navigation::SelectionState;

/// Behavior switches set by the host
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridOptions {
    /// Enter on the last row appends an empty record
    pub auto_add_row: bool,
    /// No row insertion from the keyboard or paste auto-grow
    pub lock_rows: bool,
}

impl From<&GridConfig> for GridOptions {
    fn from(config: &GridConfig) -> Self {
        Self {
            auto_add_row: config.auto_add_row,
            lock_rows: config.lock_rows,
        }
    }
}

/// Serializable engine state: `{active_cell, selection, edit}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineState {
    #[serde(flatten)]
    pub selection: SelectionState,
    pub edit: Option<EditState>,
}

impl EngineState {
    pub fn active_cell(&self) -> Option<CellCoordinate> {
        self.selection.active_cell
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection.selection
    }

    pub fn is_editing(&self) -> bool {
        self.edit.is_some()
    }
}

/// Column set, options and engine state. Row data lives with the host.
#[derive(Debug)]
pub struct GridModel {
    pub columns: Vec<Box<dyn Column>>,
    pub options: GridOptions,
    pub state: EngineState,
}

impl GridModel {
    pub fn new(columns: Vec<Box<dyn Column>>) -> Self {
        Self {
            columns,
            options: GridOptions::default(),
            state: EngineState::default(),
        }
    }

    pub fn with_options(mut self, options: GridOptions) -> Self {
        self.options = options;
        self
    }

    /// Grid bounds for the current row count
    pub fn size(&self, row_count: usize) -> GridSize {
        GridSize::new(row_count, self.columns.len())
    }

    pub fn column(&self, col: usize) -> Option<&dyn Column> {
        self.columns.get(col).map(|c| c.as_ref())
    }

    pub fn is_editing(&self) -> bool {
        self.state.is_editing()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::TextColumn;

    #[test]
    fn test_size_tracks_columns() {
        let model = GridModel::new(vec![
            Box::new(TextColumn::new("a")),
            Box::new(TextColumn::new("b")),
        ]);
        assert_eq!(model.size(3), GridSize::new(3, 2));
        assert!(model.column(1).is_some());
        assert!(model.column(2).is_none());
    }

    #[test]
    fn test_state_serializes_flat() {
        let state = EngineState {
            selection: SelectionState::at(CellCoordinate::new(1, 0), GridSize::new(2, 2)),
            edit: None,
        };
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["active_cell"]["row"], 1);
        assert_eq!(json["selection"]["min"]["col"], 0);
        assert!(json["edit"].is_null());
    }
}
