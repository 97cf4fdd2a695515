//! Cell addressing
//!
//! Pure value types for grid coordinates and rectangular ranges. Nothing in
//! here can fail: coordinates outside the grid are clamped, never rejected.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Position of a cell in the grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellCoordinate {
    pub row: usize,
    pub col: usize,
}

impl CellCoordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Offset by a signed delta, saturating at zero on both axes
    pub fn offset(self, delta_row: isize, delta_col: isize) -> Self {
        Self {
            row: self.row.saturating_add_signed(delta_row),
            col: self.col.saturating_add_signed(delta_col),
        }
    }
}

/// Dimensions of the grid (rows come from the data store, columns from the
/// column configuration)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSize {
    pub rows: usize,
    pub cols: usize,
}

impl GridSize {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// A grid with no rows or no columns has no addressable cell
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    pub fn last_row(&self) -> usize {
        self.rows.saturating_sub(1)
    }

    pub fn last_col(&self) -> usize {
        self.cols.saturating_sub(1)
    }

    /// Bottom-right cell
    pub fn last_cell(&self) -> Option<CellCoordinate> {
        if self.is_empty() {
            return None;
        }
        Some(CellCoordinate::new(self.last_row(), self.last_col()))
    }

    pub fn contains(&self, coord: CellCoordinate) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }
}

/// Clamp a coordinate into `[0, rows) × [0, cols)`.
///
/// Returns `None` only when the grid is empty.
pub fn clamp(coord: CellCoordinate, size: GridSize) -> Option<CellCoordinate> {
    if size.is_empty() {
        return None;
    }
    Some(CellCoordinate {
        row: coord.row.min(size.last_row()),
        col: coord.col.min(size.last_col()),
    })
}

/// Normalized rectangular range of cells.
///
/// Invariant: `min.row <= max.row` and `min.col <= max.col`. A single cell is
/// the degenerate range `min == max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    pub min: CellCoordinate,
    pub max: CellCoordinate,
}

impl Selection {
    /// Build the rectangle spanned by two arbitrary corners
    pub fn new(a: CellCoordinate, b: CellCoordinate) -> Self {
        Self {
            min: CellCoordinate::new(a.row.min(b.row), a.col.min(b.col)),
            max: CellCoordinate::new(a.row.max(b.row), a.col.max(b.col)),
        }
    }

    pub fn single(cell: CellCoordinate) -> Self {
        Self {
            min: cell,
            max: cell,
        }
    }

    /// Whole-grid range, `None` for an empty grid
    pub fn all(size: GridSize) -> Option<Self> {
        size.last_cell()
            .map(|last| Self::new(CellCoordinate::new(0, 0), last))
    }

    pub fn is_single(&self) -> bool {
        self.min == self.max
    }

    pub fn contains(&self, coord: CellCoordinate) -> bool {
        self.rows().contains(&coord.row) && self.cols().contains(&coord.col)
    }

    pub fn rows(&self) -> RangeInclusive<usize> {
        self.min.row..=self.max.row
    }

    pub fn cols(&self) -> RangeInclusive<usize> {
        self.min.col..=self.max.col
    }

    pub fn height(&self) -> usize {
        self.max.row - self.min.row + 1
    }

    pub fn width(&self) -> usize {
        self.max.col - self.min.col + 1
    }

    /// Iterate cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = CellCoordinate> + '_ {
        self.rows()
            .flat_map(move |row| self.cols().map(move |col| CellCoordinate::new(row, col)))
    }

    /// Clamp both corners into the grid and re-normalize
    pub fn clamp(&self, size: GridSize) -> Option<Self> {
        let min = clamp(self.min, size)?;
        let max = clamp(self.max, size)?;
        Some(Self::new(min, max))
    }
}
