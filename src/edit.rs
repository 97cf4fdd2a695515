//! Edit lifecycle controller
//!
//! At most one cell is edited at a time. Eager edits push every draft
//! change to the store and remember the pre-edit value so Escape can put it
//! back. Lazy edits stay local until a commit writes them once.

use serde::{Deserialize, Serialize};

use crate::cell::CellCoordinate;
use crate::column::{CellValue, Column, EditorKind};
use crate::draft::DraftBuffer;
use crate::store::{CellUpdate, DataStore};

/// When draft changes reach the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditMode {
    /// Every change is written immediately
    Eager,
    /// Written once on commit
    Lazy,
}

impl EditMode {
    pub fn for_column(column: &dyn Column) -> Self {
        if column.continuous_updates() {
            EditMode::Eager
        } else {
            EditMode::Lazy
        }
    }
}

/// How the editor's initial draft is seeded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditSeed {
    /// Enter / double-click: current value, fully selected
    Existing,
    /// Typing over the cell: the typed character replaces the value
    Replace(char),
}

/// Keys routed to the open text editor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditorInput {
    InsertChar(char),
    InsertText(String),
    DeleteBackward,
    DeleteForward,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    SelectLeft,
    SelectRight,
    SelectHome,
    SelectEnd,
    SelectAll,
}

/// A cell currently being edited
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditState {
    pub target: CellCoordinate,
    pub mode: EditMode,
    pub draft: DraftBuffer,
    /// Store value captured when editing started
    original: CellValue,
    /// Whether an eager edit has written to the store
    pushed: bool,
}

impl EditState {
    /// Open an editor on `target`.
    ///
    /// Returns `None` for disabled columns and for toggle columns, which
    /// change in place without an editor.
    pub fn begin(
        target: CellCoordinate,
        column: &dyn Column,
        store: &mut dyn DataStore,
        seed: EditSeed,
    ) -> Option<Self> {
        if column.disabled() || column.editor_kind() != EditorKind::Text {
            return None;
        }

        let original = store.get_cell(target.row, target.col);
        let draft = match seed {
            EditSeed::Existing => {
                let mut draft = DraftBuffer::new(column.draft_text(&original));
                draft.select_all();
                draft
            }
            EditSeed::Replace(ch) => DraftBuffer::new(ch.to_string()),
        };

        let mut state = Self {
            target,
            mode: EditMode::for_column(column),
            draft,
            original,
            pushed: false,
        };
        if matches!(seed, EditSeed::Replace(_)) {
            state.changed(column, store);
        }

        tracing::debug!(
            row = target.row,
            col = target.col,
            mode = ?state.mode,
            "editing started"
        );
        Some(state)
    }

    pub fn original(&self) -> &CellValue {
        &self.original
    }

    /// Value the current draft would commit
    pub fn draft_value(&self, column: &dyn Column) -> CellValue {
        column.value_from_draft(self.draft.text())
    }

    pub fn is_modified(&self, column: &dyn Column) -> bool {
        self.draft_value(column) != self.original
    }

    /// Apply one editor keystroke. Returns whether the draft text changed.
    pub fn input(
        &mut self,
        input: &EditorInput,
        column: &dyn Column,
        store: &mut dyn DataStore,
    ) -> bool {
        let draft = &mut self.draft;
        let changed = match input {
            EditorInput::InsertChar(ch) => {
                draft.insert_char(*ch);
                true
            }
            EditorInput::InsertText(text) => {
                draft.insert_text(text);
                true
            }
            EditorInput::DeleteBackward => draft.delete_backward(),
            EditorInput::DeleteForward => draft.delete_forward(),
            EditorInput::CursorLeft => {
                draft.move_left(false);
                false
            }
            EditorInput::CursorRight => {
                draft.move_right(false);
                false
            }
            EditorInput::CursorHome => {
                draft.move_home(false);
                false
            }
            EditorInput::CursorEnd => {
                draft.move_end(false);
                false
            }
            EditorInput::SelectLeft => {
                draft.move_left(true);
                false
            }
            EditorInput::SelectRight => {
                draft.move_right(true);
                false
            }
            EditorInput::SelectHome => {
                draft.move_home(true);
                false
            }
            EditorInput::SelectEnd => {
                draft.move_end(true);
                false
            }
            EditorInput::SelectAll => {
                draft.select_all();
                false
            }
        };
        if changed {
            self.changed(column, store);
        }
        changed
    }

    /// Remove the selected draft text (editor Cut), returning it
    pub fn cut(&mut self, column: &dyn Column, store: &mut dyn DataStore) -> String {
        let taken = self.draft.cut();
        if !taken.is_empty() {
            self.changed(column, store);
        }
        taken
    }

    fn changed(&mut self, column: &dyn Column, store: &mut dyn DataStore) {
        if self.mode == EditMode::Eager {
            self.push(column, store);
        }
    }

    fn push(&mut self, column: &dyn Column, store: &mut dyn DataStore) {
        let value = self.draft_value(column);
        store.apply_patch(&[CellUpdate::new(self.target, value)]);
        self.pushed = true;
    }

    /// Close the editor keeping the draft.
    ///
    /// Lazy edits write the draft once (skipped when unchanged); eager edits
    /// are already in the store. Returns whether this call wrote.
    pub fn commit(mut self, column: &dyn Column, store: &mut dyn DataStore) -> bool {
        let wrote = match self.mode {
            EditMode::Eager => false,
            EditMode::Lazy => {
                if self.is_modified(column) {
                    self.push(column, store);
                    true
                } else {
                    false
                }
            }
        };
        tracing::debug!(row = self.target.row, col = self.target.col, wrote, "edit committed");
        wrote
    }

    /// Close the editor discarding the draft, restoring the pre-edit value
    /// if an eager edit already wrote
    pub fn cancel(self, store: &mut dyn DataStore) {
        if self.mode == EditMode::Eager && self.pushed {
            store.apply_patch(&[CellUpdate::new(self.target, self.original.clone())]);
        }
        tracing::debug!(row = self.target.row, col = self.target.col, "edit cancelled");
    }
}
