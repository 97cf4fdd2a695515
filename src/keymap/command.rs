//! Command enum: every action a key can be bound to
//!
//! Commands are the bridge between keybindings and engine intents.

use std::str::FromStr;

use crate::edit::{EditSeed, EditorInput};
use crate::messages::{CommitMove, Direction, Intent, Motion, TabDirection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    // ========================================================================
    // Navigation
    // ========================================================================
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    JumpUp,
    JumpDown,
    JumpLeft,
    JumpRight,
    RowStart,
    RowEnd,
    PageUp,
    PageDown,
    NextCell,
    PrevCell,

    // ========================================================================
    // Selection
    // ========================================================================
    ExtendUp,
    ExtendDown,
    ExtendLeft,
    ExtendRight,
    ExtendToTop,
    ExtendToBottom,
    ExtendToRowStart,
    ExtendToRowEnd,
    SelectAll,
    /// Escape outside an editor with a single active cell
    ClearSelection,
    /// Escape outside an editor with a range
    CollapseSelection,

    // ========================================================================
    // Editing lifecycle
    // ========================================================================
    StartEditing,
    /// Enter while editing: commit, move down
    ConfirmEdit,
    ConfirmEditUp,
    ConfirmEditDown,
    ConfirmEditLeft,
    ConfirmEditRight,
    ConfirmEditNext,
    ConfirmEditPrev,
    CancelEdit,

    // ========================================================================
    // Cell editor text
    // ========================================================================
    EditCursorLeft,
    EditCursorRight,
    EditCursorHome,
    EditCursorEnd,
    EditSelectLeft,
    EditSelectRight,
    EditSelectHome,
    EditSelectEnd,
    EditSelectAll,
    EditDeleteBackward,
    EditDeleteForward,

    // ========================================================================
    // Data
    // ========================================================================
    DeleteContents,
    InsertRowBelow,
    Copy,
    Cut,
    Paste,

    /// Explicitly unbound - disables a default binding
    Unbound,
}

impl Command {
    /// Intent this command stands for. `Unbound` has none.
    pub fn to_intent(self) -> Option<Intent> {
        use Command::*;

        let intent = match self {
            MoveUp => Intent::MoveActive(Motion::Step(Direction::Up)),
            MoveDown => Intent::MoveActive(Motion::Step(Direction::Down)),
            MoveLeft => Intent::MoveActive(Motion::Step(Direction::Left)),
            MoveRight => Intent::MoveActive(Motion::Step(Direction::Right)),
            JumpUp => Intent::JumpEdge(Direction::Up),
            JumpDown => Intent::JumpEdge(Direction::Down),
            JumpLeft => Intent::JumpEdge(Direction::Left),
            JumpRight => Intent::JumpEdge(Direction::Right),
            RowStart => Intent::MoveActive(Motion::RowStart),
            RowEnd => Intent::MoveActive(Motion::RowEnd),
            PageUp => Intent::MoveActive(Motion::PageUp),
            PageDown => Intent::MoveActive(Motion::PageDown),
            NextCell => Intent::TabForward,
            PrevCell => Intent::TabBackward,

            ExtendUp => Intent::ExtendSelection(Motion::Step(Direction::Up)),
            ExtendDown => Intent::ExtendSelection(Motion::Step(Direction::Down)),
            ExtendLeft => Intent::ExtendSelection(Motion::Step(Direction::Left)),
            ExtendRight => Intent::ExtendSelection(Motion::Step(Direction::Right)),
            ExtendToTop => Intent::ExtendSelection(Motion::Edge(Direction::Up)),
            ExtendToBottom => Intent::ExtendSelection(Motion::Edge(Direction::Down)),
            ExtendToRowStart => Intent::ExtendSelection(Motion::Edge(Direction::Left)),
            ExtendToRowEnd => Intent::ExtendSelection(Motion::Edge(Direction::Right)),
            SelectAll => Intent::SelectAll,
            ClearSelection => Intent::ClearSelection,
            CollapseSelection => Intent::CollapseSelection,

            StartEditing => Intent::StartEdit(EditSeed::Existing),
            ConfirmEdit => Intent::CommitAndExit(CommitMove::Enter),
            ConfirmEditUp => Intent::CommitAndExit(CommitMove::Step(Direction::Up)),
            ConfirmEditDown => Intent::CommitAndExit(CommitMove::Step(Direction::Down)),
            ConfirmEditLeft => Intent::CommitAndExit(CommitMove::Step(Direction::Left)),
            ConfirmEditRight => Intent::CommitAndExit(CommitMove::Step(Direction::Right)),
            ConfirmEditNext => Intent::CommitAndExit(CommitMove::Tab(TabDirection::Forward)),
            ConfirmEditPrev => Intent::CommitAndExit(CommitMove::Tab(TabDirection::Backward)),
            CancelEdit => Intent::CancelEdit,

            EditCursorLeft => Intent::EditText(EditorInput::CursorLeft),
            EditCursorRight => Intent::EditText(EditorInput::CursorRight),
            EditCursorHome => Intent::EditText(EditorInput::CursorHome),
            EditCursorEnd => Intent::EditText(EditorInput::CursorEnd),
            EditSelectLeft => Intent::EditText(EditorInput::SelectLeft),
            EditSelectRight => Intent::EditText(EditorInput::SelectRight),
            EditSelectHome => Intent::EditText(EditorInput::SelectHome),
            EditSelectEnd => Intent::EditText(EditorInput::SelectEnd),
            EditSelectAll => Intent::EditText(EditorInput::SelectAll),
            EditDeleteBackward => Intent::EditText(EditorInput::DeleteBackward),
            EditDeleteForward => Intent::EditText(EditorInput::DeleteForward),

            DeleteContents => Intent::DeleteSelectionContents,
            InsertRowBelow => Intent::InsertRowBelow,
            Copy => Intent::Copy,
            Cut => Intent::Cut,
            Paste => Intent::Paste,

            Unbound => return None,
        };
        Some(intent)
    }

    /// Human-readable name
    pub fn display_name(self) -> &'static str {
        use Command::*;

        match self {
            MoveUp => "Move Up",
            MoveDown => "Move Down",
            MoveLeft => "Move Left",
            MoveRight => "Move Right",
            JumpUp => "Jump to First Row",
            JumpDown => "Jump to Last Row",
            JumpLeft => "Jump to First Column",
            JumpRight => "Jump to Last Column",
            RowStart => "Row Start",
            RowEnd => "Row End",
            PageUp => "Page Up",
            PageDown => "Page Down",
            NextCell => "Next Cell",
            PrevCell => "Previous Cell",
            ExtendUp => "Extend Selection Up",
            ExtendDown => "Extend Selection Down",
            ExtendLeft => "Extend Selection Left",
            ExtendRight => "Extend Selection Right",
            ExtendToTop => "Extend Selection to First Row",
            ExtendToBottom => "Extend Selection to Last Row",
            ExtendToRowStart => "Extend Selection to First Column",
            ExtendToRowEnd => "Extend Selection to Last Column",
            SelectAll => "Select All",
            ClearSelection => "Clear Selection",
            CollapseSelection => "Collapse Selection",
            StartEditing => "Edit Cell",
            ConfirmEdit => "Confirm Edit",
            ConfirmEditUp => "Confirm Edit and Move Up",
            ConfirmEditDown => "Confirm Edit and Move Down",
            ConfirmEditLeft => "Confirm Edit and Move Left",
            ConfirmEditRight => "Confirm Edit and Move Right",
            ConfirmEditNext => "Confirm Edit and Next Cell",
            ConfirmEditPrev => "Confirm Edit and Previous Cell",
            CancelEdit => "Cancel Edit",
            EditCursorLeft => "Cursor Left",
            EditCursorRight => "Cursor Right",
            EditCursorHome => "Cursor to Start",
            EditCursorEnd => "Cursor to End",
            EditSelectLeft => "Select Left",
            EditSelectRight => "Select Right",
            EditSelectHome => "Select to Start",
            EditSelectEnd => "Select to End",
            EditSelectAll => "Select All Text",
            EditDeleteBackward => "Delete Backward",
            EditDeleteForward => "Delete Forward",
            DeleteContents => "Delete Contents",
            InsertRowBelow => "Insert Row Below",
            Copy => "Copy",
            Cut => "Cut",
            Paste => "Paste",
            Unbound => "Unbound",
        }
    }
}

impl FromStr for Command {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use Command::*;

        let command = match s {
            "MoveUp" => MoveUp,
            "MoveDown" => MoveDown,
            "MoveLeft" => MoveLeft,
            "MoveRight" => MoveRight,
            "JumpUp" => JumpUp,
            "JumpDown" => JumpDown,
            "JumpLeft" => JumpLeft,
            "JumpRight" => JumpRight,
            "RowStart" => RowStart,
            "RowEnd" => RowEnd,
            "PageUp" => PageUp,
            "PageDown" => PageDown,
            "NextCell" => NextCell,
            "PrevCell" => PrevCell,

            "ExtendUp" => ExtendUp,
            "ExtendDown" => ExtendDown,
            "ExtendLeft" => ExtendLeft,
            "ExtendRight" => ExtendRight,
            "ExtendToTop" => ExtendToTop,
            "ExtendToBottom" => ExtendToBottom,
            "ExtendToRowStart" => ExtendToRowStart,
            "ExtendToRowEnd" => ExtendToRowEnd,
            "SelectAll" => SelectAll,
            "ClearSelection" => ClearSelection,
            "CollapseSelection" => CollapseSelection,

            "StartEditing" => StartEditing,
            "ConfirmEdit" => ConfirmEdit,
            "ConfirmEditUp" => ConfirmEditUp,
            "ConfirmEditDown" => ConfirmEditDown,
            "ConfirmEditLeft" => ConfirmEditLeft,
            "ConfirmEditRight" => ConfirmEditRight,
            "ConfirmEditNext" => ConfirmEditNext,
            "ConfirmEditPrev" => ConfirmEditPrev,
            "CancelEdit" => CancelEdit,

            "EditCursorLeft" => EditCursorLeft,
            "EditCursorRight" => EditCursorRight,
            "EditCursorHome" => EditCursorHome,
            "EditCursorEnd" => EditCursorEnd,
            "EditSelectLeft" => EditSelectLeft,
            "EditSelectRight" => EditSelectRight,
            "EditSelectHome" => EditSelectHome,
            "EditSelectEnd" => EditSelectEnd,
            "EditSelectAll" => EditSelectAll,
            "EditDeleteBackward" => EditDeleteBackward,
            "EditDeleteForward" => EditDeleteForward,

            "DeleteContents" => DeleteContents,
            "InsertRowBelow" => InsertRowBelow,
            "Copy" => Copy,
            "Cut" => Cut,
            "Paste" => Paste,

            "Unbound" => Unbound,
            _ => return Err(()),
        };
        Ok(command)
    }
}
