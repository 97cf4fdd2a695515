//! Selection and navigation state machine
//!
//! Every transition takes the current state plus grid bounds and returns the
//! next state. Keyboard transitions on a state without an active cell are
//! no-ops; only `move_to`, `set_*` and focus entry can establish one.

use serde::{Deserialize, Serialize};

use crate::cell::{clamp, CellCoordinate, GridSize, Selection};

/// Direction for cell movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit `(row, col)` delta
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// The cell at the grid edge in this direction, staying in `from`'s row/column
    fn edge_of(self, from: CellCoordinate, size: GridSize) -> CellCoordinate {
        match self {
            Direction::Up => CellCoordinate::new(0, from.col),
            Direction::Down => CellCoordinate::new(size.last_row(), from.col),
            Direction::Left => CellCoordinate::new(from.row, 0),
            Direction::Right => CellCoordinate::new(from.row, size.last_col()),
        }
    }
}

/// Row-major traversal direction (Tab / Shift+Tab), also used for focus
/// handoff to the elements before and after the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TabDirection {
    Forward,
    Backward,
}

/// Active cell and selection.
///
/// `extent` is the moving corner of a keyboard extension. It is `None`
/// whenever the selection was not produced by extending, in which case
/// Shift+Arrow extends from the active cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    pub active_cell: Option<CellCoordinate>,
    pub selection: Option<Selection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extent: Option<CellCoordinate>,
}

impl SelectionState {
    /// Nothing active
    pub fn none() -> Self {
        Self::default()
    }

    /// Single active cell (clamped)
    pub fn at(coord: CellCoordinate, size: GridSize) -> Self {
        Self::none().move_to(coord, size)
    }

    pub fn is_active(&self) -> bool {
        self.active_cell.is_some()
    }

    /// True when the selection spans more than one cell
    pub fn has_range(&self) -> bool {
        self.selection.is_some_and(|s| !s.is_single())
    }

    // ------------------------------------------------------------------
    // Plain movement
    // ------------------------------------------------------------------

    /// Activate `coord` with a degenerate selection on it
    pub fn move_to(self, coord: CellCoordinate, size: GridSize) -> Self {
        match clamp(coord, size) {
            Some(cell) => Self {
                active_cell: Some(cell),
                selection: Some(Selection::single(cell)),
                extent: None,
            },
            None => Self::none(),
        }
    }

    /// Arrow-key movement, clamped at the grid edges
    pub fn move_by(self, delta_row: isize, delta_col: isize, size: GridSize) -> Self {
        let Some(active) = self.active_cell else {
            return self;
        };
        self.move_to(active.offset(delta_row, delta_col), size)
    }

    pub fn step(self, direction: Direction, size: GridSize) -> Self {
        let (dr, dc) = direction.delta();
        self.move_by(dr, dc, size)
    }

    /// Cmd/Ctrl+Arrow
    pub fn jump_to_edge(self, direction: Direction, size: GridSize) -> Self {
        let Some(active) = self.active_cell else {
            return self;
        };
        self.move_to(direction.edge_of(active, size), size)
    }

    pub fn row_start(self, size: GridSize) -> Self {
        self.jump_to_edge(Direction::Left, size)
    }

    pub fn row_end(self, size: GridSize) -> Self {
        self.jump_to_edge(Direction::Right, size)
    }

    /// Move by a page of rows; negative `rows` pages up
    pub fn page(self, rows: isize, size: GridSize) -> Self {
        self.move_by(rows, 0, size)
    }

    /// Tab / Shift+Tab: row-major with wraparound at row ends.
    ///
    /// Stepping past the last cell (or before the first) clears the state
    /// and reports the exit so the host can move focus out of the grid.
    pub fn tab(self, direction: TabDirection, size: GridSize) -> (Self, Option<TabDirection>) {
        let Some(active) = self.active_cell else {
            return (self, None);
        };
        if size.is_empty() {
            return (Self::none(), Some(direction));
        }

        let active = clamp(active, size).unwrap_or_default();
        let linear = active.row * size.cols + active.col;
        let next = match direction {
            TabDirection::Forward => linear + 1,
            TabDirection::Backward => match linear.checked_sub(1) {
                Some(prev) => prev,
                None => return (Self::none(), Some(direction)),
            },
        };
        if next >= size.rows * size.cols {
            return (Self::none(), Some(direction));
        }

        let target = CellCoordinate::new(next / size.cols, next % size.cols);
        (self.move_to(target, size), None)
    }

    // ------------------------------------------------------------------
    // Extension
    // ------------------------------------------------------------------

    /// Shift+Click: rectangle between the active cell (pivot) and `coord`,
    /// recomputed from scratch each time
    pub fn extend_to(self, coord: CellCoordinate, size: GridSize) -> Self {
        let Some(pivot) = self.active_cell else {
            return self.move_to(coord, size);
        };
        let (Some(pivot), Some(target)) = (clamp(pivot, size), clamp(coord, size)) else {
            return Self::none();
        };
        Self {
            active_cell: Some(pivot),
            selection: Some(Selection::new(pivot, target)),
            extent: (target != pivot).then_some(target),
        }
    }

    /// The corner Shift+Arrow moves from
    pub fn moving_corner(&self) -> Option<CellCoordinate> {
        self.extent.or(self.active_cell)
    }

    /// Shift+Arrow
    pub fn extend_by(self, delta_row: isize, delta_col: isize, size: GridSize) -> Self {
        let Some(corner) = self.moving_corner() else {
            return self;
        };
        self.extend_to(corner.offset(delta_row, delta_col), size)
    }

    pub fn extend_step(self, direction: Direction, size: GridSize) -> Self {
        let (dr, dc) = direction.delta();
        self.extend_by(dr, dc, size)
    }

    /// Cmd/Ctrl+Shift+Arrow
    pub fn extend_to_edge(self, direction: Direction, size: GridSize) -> Self {
        let Some(corner) = self.moving_corner() else {
            return self;
        };
        let corner = clamp(corner, size).unwrap_or_default();
        self.extend_to(direction.edge_of(corner, size), size)
    }

    /// Cmd/Ctrl+A: pivot at the first cell, extent at the last
    pub fn select_all(self, size: GridSize) -> Self {
        let Some(last) = size.last_cell() else {
            return Self::none();
        };
        Self::none()
            .move_to(CellCoordinate::new(0, 0), size)
            .extend_to(last, size)
    }

    // ------------------------------------------------------------------
    // Imperative entry points
    // ------------------------------------------------------------------

    pub fn set_active_cell(self, coord: Option<CellCoordinate>, size: GridSize) -> Self {
        match coord {
            Some(coord) => self.move_to(coord, size),
            None => Self::none(),
        }
    }

    /// Replace the selection. The normalized `min` corner becomes the
    /// active cell.
    pub fn set_selection(self, range: Option<Selection>, size: GridSize) -> Self {
        let Some(range) = range.and_then(|r| r.clamp(size)) else {
            return Self::none();
        };
        Self {
            active_cell: Some(range.min),
            selection: Some(range),
            extent: None,
        }
    }

    /// Collapse a range to the active cell
    pub fn collapse(self) -> Self {
        match self.active_cell {
            Some(cell) => Self {
                active_cell: Some(cell),
                selection: Some(Selection::single(cell)),
                extent: None,
            },
            None => Self::none(),
        }
    }

    pub fn clear(self) -> Self {
        Self::none()
    }

    /// Focus arriving from outside: Tab in lands on the first cell, Shift+Tab
    /// in lands on the last
    pub fn enter(self, from: TabDirection, size: GridSize) -> Self {
        match from {
            TabDirection::Forward => self.move_to(CellCoordinate::new(0, 0), size),
            TabDirection::Backward => match size.last_cell() {
                Some(last) => self.move_to(last, size),
                None => Self::none(),
            },
        }
    }

    /// Re-clamp after the row or column count changed
    pub fn reclamp(self, size: GridSize) -> Self {
        if size.is_empty() {
            return Self::none();
        }
        let active_cell = self.active_cell.and_then(|c| clamp(c, size));
        let selection = self.selection.and_then(|s| s.clamp(size));
        let extent = self
            .extent
            .and_then(|c| clamp(c, size))
            .filter(|c| Some(*c) != active_cell);
        Self {
            active_cell,
            selection,
            extent,
        }
    }
}
