//! Message types for the Elm-style architecture
//!
//! Input events are translated into an [`Intent`]; the host drives the
//! engine with [`GridMsg`] values.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::cell::{CellCoordinate, Selection};
use crate::edit::{EditSeed, EditorInput};

pub use crate::navigation::{Direction, TabDirection};

/// Target of a move or extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Motion {
    /// One cell in a direction
    Step(Direction),
    /// An explicit cell (pointer)
    To(CellCoordinate),
    /// First/last row or column
    Edge(Direction),
    RowStart,
    RowEnd,
    PageUp,
    PageDown,
}

/// Where the active cell goes after an edit is committed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommitMove {
    /// Enter: one row down, appending a row at the bottom if configured
    Enter,
    /// Arrow keys / Shift+Enter
    Step(Direction),
    /// Tab / Shift+Tab with row wrap
    Tab(TabDirection),
    /// Blur or scroll-away: keep the active cell
    Stay,
}

/// The closed set of things a key or pointer event can mean
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    MoveActive(Motion),
    ExtendSelection(Motion),
    JumpEdge(Direction),
    TabForward,
    TabBackward,
    StartEdit(EditSeed),
    CommitAndExit(CommitMove),
    CancelEdit,
    /// Drop the active cell and selection
    ClearSelection,
    /// Shrink a range to its active cell
    CollapseSelection,
    DeleteSelectionContents,
    SelectAll,
    Copy,
    Cut,
    Paste,
    InsertRowBelow,
    ExitGridForward,
    ExitGridBackward,
    /// Keystroke for the open cell editor
    EditText(EditorInput),
    /// Pointer pressed outside the grid: commit any edit, then clear
    Blur,
}

/// Messages the host sends to the engine
#[derive(Debug, Clone, PartialEq)]
pub enum GridMsg {
    Intent(Intent),
    /// Imperative `setActiveCell`
    SetActiveCell(Option<CellCoordinate>),
    /// Imperative `setSelection`
    SetSelection(Option<Selection>),
    /// Focus arrived from the element before (Forward) or after (Backward)
    FocusEnter(TabDirection),
    /// Focus moved elsewhere in the page
    FocusLeave,
    /// The renderer's window moved
    VisibleRangeChanged(Range<usize>),
    /// The host changed the row set outside the engine
    RowsChanged,
    /// A column editor asked to open on the active cell
    OpenEditor,
}

impl From<Intent> for GridMsg {
    fn from(intent: Intent) -> Self {
        GridMsg::Intent(intent)
    }
}
