//! Viewport coordination
//!
//! Windowing is a host concern. The engine only asks which rows are
//! visible and requests that a row be scrolled into view.

use std::ops::Range;

/// Capability interface for a virtualized row renderer
pub trait Viewport {
    /// Currently materialized rows, `[start, end)`
    fn visible_row_range(&self) -> Range<usize>;

    fn scroll_row_into_view(&mut self, row: usize);

    /// Rows per page for PageUp/PageDown
    fn page_rows(&self) -> usize {
        self.visible_row_range().len().max(1)
    }
}

/// Fixed-height window over the rows, scrolled minimally
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WindowedViewport {
    /// First visible row
    pub top_row: usize,
    /// Number of rows that fit
    pub visible_rows: usize,
}

impl WindowedViewport {
    pub fn new(visible_rows: usize) -> Self {
        Self {
            top_row: 0,
            visible_rows,
        }
    }

    pub fn is_row_visible(&self, row: usize) -> bool {
        self.visible_row_range().contains(&row)
    }
}

impl Viewport for WindowedViewport {
    fn visible_row_range(&self) -> Range<usize> {
        self.top_row..self.top_row + self.visible_rows
    }

    fn scroll_row_into_view(&mut self, row: usize) {
        if self.is_row_visible(row) {
            return;
        }
        if row < self.top_row {
            self.top_row = row;
        } else if self.visible_rows > 0 {
            self.top_row = row + 1 - self.visible_rows;
        }
    }
}
