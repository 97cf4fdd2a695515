//! Imperative handle over one grid instance
//!
//! `Grid` owns the model, the keymap and the host capabilities, and runs
//! input through dispatch and update. Hosts that keep their own store can
//! call [`crate::update::update`] directly instead.

use std::ops::Range;

use crate::cell::{CellCoordinate, GridSize, Selection};
use crate::clipboard::{ClipboardProvider, MemoryClipboard};
use crate::column::Column;
use crate::commands::Cmd;
use crate::dispatch::{dispatch, InputEvent, PointerEvent};
use crate::edit::EditSeed;
use crate::keymap::{default_bindings, Keymap, Keystroke};
use crate::messages::{GridMsg, Intent, TabDirection};
use crate::model::{EngineState, GridModel, GridOptions};
use crate::store::DataStore;
use crate::update::{update, Host};
use crate::viewport::{Viewport, WindowedViewport};

/// Window height used by [`Grid::headless`]
pub const HEADLESS_ROWS: usize = 20;

pub struct Grid<S, V = WindowedViewport, C = MemoryClipboard> {
    model: GridModel,
    keymap: Keymap,
    store: S,
    viewport: V,
    clipboard: C,
}

impl<S: DataStore> Grid<S> {
    /// Grid with a 20-row window and an in-memory clipboard
    pub fn headless(columns: Vec<Box<dyn Column>>, store: S) -> Self {
        Grid::new(
            columns,
            store,
            WindowedViewport::new(HEADLESS_ROWS),
            MemoryClipboard::default(),
        )
    }
}

impl<S: DataStore, V: Viewport, C: ClipboardProvider> Grid<S, V, C> {
    pub fn new(columns: Vec<Box<dyn Column>>, store: S, viewport: V, clipboard: C) -> Self {
        Self {
            model: GridModel::new(columns),
            keymap: Keymap::with_bindings(default_bindings()),
            store,
            viewport,
            clipboard,
        }
    }

    pub fn with_options(mut self, options: GridOptions) -> Self {
        self.model.options = options;
        self
    }

    pub fn with_keymap(mut self, keymap: Keymap) -> Self {
        self.keymap = keymap;
        self
    }

    // ------------------------------------------------------------------
    // Message entry points
    // ------------------------------------------------------------------

    pub fn send(&mut self, msg: impl Into<GridMsg>) -> Option<Cmd> {
        let mut host = Host {
            store: &mut self.store,
            viewport: &mut self.viewport,
            clipboard: &mut self.clipboard,
        };
        update(&mut self.model, msg.into(), &mut host)
    }

    /// Translate and apply one input event
    pub fn handle_event(&mut self, event: InputEvent) -> Option<Cmd> {
        let intent = dispatch(&event, &self.keymap, &self.model.state, self.size())?;
        let moved = matches!(intent, Intent::MoveActive(_));
        let cmd = self.send(intent);

        // Double-click on another cell: move there, then open the editor
        if moved && matches!(event, InputEvent::Pointer(PointerEvent::DoubleClick { .. })) {
            return merge(cmd, self.send(Intent::StartEdit(EditSeed::Existing)));
        }
        cmd
    }

    pub fn handle_key(&mut self, stroke: Keystroke, text: Option<char>) -> Option<Cmd> {
        self.handle_event(InputEvent::Key { stroke, text })
    }

    pub fn handle_pointer(&mut self, pointer: PointerEvent) -> Option<Cmd> {
        self.handle_event(InputEvent::Pointer(pointer))
    }

    /// Type each character as its own key event
    pub fn type_text(&mut self, text: &str) -> Option<Cmd> {
        text.chars()
            .fold(None, |cmd, ch| merge(cmd, self.handle_event(InputEvent::typed(ch))))
    }

    // ------------------------------------------------------------------
    // Imperative API
    // ------------------------------------------------------------------

    pub fn active_cell(&self) -> Option<CellCoordinate> {
        self.model.state.active_cell()
    }

    pub fn set_active_cell(&mut self, coord: Option<CellCoordinate>) -> Option<Cmd> {
        self.send(GridMsg::SetActiveCell(coord))
    }

    pub fn selection(&self) -> Option<Selection> {
        self.model.state.selection()
    }

    pub fn set_selection(&mut self, range: Option<Selection>) -> Option<Cmd> {
        self.send(GridMsg::SetSelection(range))
    }

    pub fn focus_enter(&mut self, from: TabDirection) -> Option<Cmd> {
        self.send(GridMsg::FocusEnter(from))
    }

    pub fn focus_leave(&mut self) -> Option<Cmd> {
        self.send(GridMsg::FocusLeave)
    }

    /// The column editor asked to open on the active cell
    pub fn open_editor(&mut self) -> Option<Cmd> {
        self.send(GridMsg::OpenEditor)
    }

    pub fn visible_range_changed(&mut self, range: Range<usize>) -> Option<Cmd> {
        self.send(GridMsg::VisibleRangeChanged(range))
    }

    /// Call after changing rows through [`Grid::store_mut`]
    pub fn rows_changed(&mut self) -> Option<Cmd> {
        self.send(GridMsg::RowsChanged)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn size(&self) -> GridSize {
        self.model.size(self.store.row_count())
    }

    pub fn state(&self) -> &EngineState {
        &self.model.state
    }

    pub fn model(&self) -> &GridModel {
        &self.model
    }

    pub fn options(&self) -> GridOptions {
        self.model.options
    }

    pub fn is_editing(&self) -> bool {
        self.model.is_editing()
    }

    /// Draft text of the open editor
    pub fn editor_text(&self) -> Option<&str> {
        self.model.state.edit.as_ref().map(|e| e.draft.text())
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    pub fn clipboard_mut(&mut self) -> &mut C {
        &mut self.clipboard
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

fn merge(a: Option<Cmd>, b: Option<Cmd>) -> Option<Cmd> {
    match (a, b) {
        (None, other) | (other, None) => other,
        (Some(a), Some(b)) => Some(Cmd::batch(vec![a, b])),
    }
}
