//! Update function for the Elm-style architecture
//!
//! Every engine transition flows through [`update`]. One message is applied
//! to completion before the next; the host's data store, viewport and
//! clipboard are borrowed for the duration of the call only.

use crate::cell::{GridSize, Selection};
use crate::clipboard::{self, ClipboardProvider};
use crate::column::{CellValue, EditorKind};
use crate::commands::Cmd;
use crate::edit::{EditSeed, EditState, EditorInput};
use crate::messages::{CommitMove, Direction, GridMsg, Intent, Motion, TabDirection};
use crate::model::GridModel;
use crate::navigation::SelectionState;
use crate::store::{CellUpdate, DataStore, Record};
use crate::viewport::Viewport;

#[cfg(debug_assertions)]
use crate::tracing::SelectionSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

/// Host capabilities borrowed for one update
pub struct Host<'a> {
    pub store: &'a mut dyn DataStore,
    pub viewport: &'a mut dyn Viewport,
    pub clipboard: &'a mut dyn ClipboardProvider,
}

/// Main update function
///
/// In debug builds this wraps each message in a span and logs the state
/// diff. In release builds it's a direct dispatch.
#[inline]
pub fn update(model: &mut GridModel, msg: GridMsg, host: &mut Host<'_>) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg, host)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg, host)
    }
}

#[cfg(debug_assertions)]
fn update_traced(model: &mut GridModel, msg: GridMsg, host: &mut Host<'_>) -> Option<Cmd> {
    let msg_name = format!("{:?}", msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let before = SelectionSnapshot::from_state(&model.state);
    debug!(target: "message", msg = %msg_name, "processing");

    let result = update_inner(model, msg, host);

    let after = SelectionSnapshot::from_state(&model.state);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "selection", %diff, "state changed");
    }
    result
}

fn update_inner(model: &mut GridModel, msg: GridMsg, host: &mut Host<'_>) -> Option<Cmd> {
    match msg {
        GridMsg::Intent(intent) => update_intent(model, intent, host),
        GridMsg::SetActiveCell(coord) => {
            commit_edit(model, host);
            let size = grid_size(model, host);
            let next = model.state.selection.set_active_cell(coord, size);
            set_selection_state(model, host, next)
        }
        GridMsg::SetSelection(range) => {
            commit_edit(model, host);
            let size = grid_size(model, host);
            let next = model.state.selection.set_selection(range, size);
            set_selection_state(model, host, next)
        }
        GridMsg::FocusEnter(from) => {
            let size = grid_size(model, host);
            let next = model.state.selection.enter(from, size);
            set_selection_state(model, host, next)
        }
        GridMsg::FocusLeave => {
            commit_edit(model, host);
            set_selection_state(model, host, SelectionState::none())
        }
        GridMsg::VisibleRangeChanged(range) => {
            let target = model.state.edit.as_ref()?.target;
            if range.contains(&target.row) {
                return None;
            }
            tracing::debug!(row = target.row, "edited row scrolled out of view");
            commit_edit(model, host);
            Some(Cmd::Redraw)
        }
        GridMsg::RowsChanged => {
            let size = grid_size(model, host);
            if let Some(edit) = &model.state.edit {
                if !size.contains(edit.target) {
                    // The record is gone; nothing to commit to
                    model.state.edit = None;
                }
            }
            model.state.selection = model.state.selection.reclamp(size);
            Some(Cmd::Redraw)
        }
        GridMsg::OpenEditor => start_edit(model, EditSeed::Existing, host),
    }
}

fn update_intent(model: &mut GridModel, intent: Intent, host: &mut Host<'_>) -> Option<Cmd> {
    match intent {
        Intent::MoveActive(motion) => {
            commit_edit(model, host);
            let size = grid_size(model, host);
            let page = page_rows(host);
            let state = model.state.selection;
            let next = match motion {
                Motion::Step(direction) => state.step(direction, size),
                Motion::To(coord) => state.move_to(coord, size),
                Motion::Edge(direction) => state.jump_to_edge(direction, size),
                Motion::RowStart => state.row_start(size),
                Motion::RowEnd => state.row_end(size),
                Motion::PageUp => state.page(-page, size),
                Motion::PageDown => state.page(page, size),
            };
            set_selection_state(model, host, next)
        }

        Intent::ExtendSelection(motion) => {
            commit_edit(model, host);
            let size = grid_size(model, host);
            let page = page_rows(host);
            let state = model.state.selection;
            let next = match motion {
                Motion::Step(direction) => state.extend_step(direction, size),
                Motion::To(coord) => state.extend_to(coord, size),
                Motion::Edge(direction) => state.extend_to_edge(direction, size),
                Motion::RowStart => state.extend_to_edge(Direction::Left, size),
                Motion::RowEnd => state.extend_to_edge(Direction::Right, size),
                Motion::PageUp => state.extend_by(-page, 0, size),
                Motion::PageDown => state.extend_by(page, 0, size),
            };
            set_selection_state(model, host, next)
        }

        Intent::JumpEdge(direction) => {
            update_intent(model, Intent::MoveActive(Motion::Edge(direction)), host)
        }

        Intent::TabForward => tab(model, TabDirection::Forward, host),
        Intent::TabBackward => tab(model, TabDirection::Backward, host),

        Intent::ExitGridForward => exit_grid(model, TabDirection::Forward, host),
        Intent::ExitGridBackward => exit_grid(model, TabDirection::Backward, host),

        Intent::StartEdit(seed) => start_edit(model, seed, host),

        Intent::CommitAndExit(movement) => commit_and_exit(model, movement, host),

        Intent::CancelEdit => {
            let edit = model.state.edit.take()?;
            edit.cancel(host.store);
            Some(Cmd::Redraw)
        }

        Intent::ClearSelection => {
            commit_edit(model, host);
            set_selection_state(model, host, SelectionState::none())
        }

        Intent::CollapseSelection => {
            let next = model.state.selection.collapse();
            set_selection_state(model, host, next)
        }

        Intent::DeleteSelectionContents => {
            if model.is_editing() {
                return None;
            }
            let selection = model.state.selection()?;
            let patch = clipboard::delete_contents(selection, &*host.store, &model.columns);
            if patch.is_empty() {
                return None;
            }
            patch.apply_to(host.store);
            Some(Cmd::Redraw)
        }

        Intent::SelectAll => {
            if let Some(edit) = model.state.edit.as_mut() {
                edit.draft.select_all();
                return Some(Cmd::Redraw);
            }
            let size = grid_size(model, host);
            let next = model.state.selection.select_all(size);
            set_selection_state(model, host, next)
        }

        Intent::Copy => {
            copy(model, host);
            None
        }

        Intent::Cut => cut(model, host),

        Intent::Paste => paste(model, host),

        Intent::InsertRowBelow => {
            if model.options.lock_rows || model.is_editing() {
                return None;
            }
            let active = model.state.active_cell()?;
            host.store.insert_row_at(active.row + 1, Record::new());
            tracing::debug!(row = active.row + 1, "row inserted");
            let size = grid_size(model, host);
            let next = model.state.selection.step(Direction::Down, size);
            set_selection_state(model, host, next).or(Some(Cmd::Redraw))
        }

        Intent::EditText(input) => {
            let edit = model.state.edit.as_mut()?;
            let column = model.columns.get(edit.target.col)?.as_ref();
            edit.input(&input, column, host.store);
            Some(Cmd::Redraw)
        }

        Intent::Blur => {
            let had_edit = commit_edit(model, host);
            set_selection_state(model, host, SelectionState::none())
                .or(had_edit.then_some(Cmd::Redraw))
        }
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn grid_size(model: &GridModel, host: &Host<'_>) -> GridSize {
    model.size(host.store.row_count())
}

fn page_rows(host: &Host<'_>) -> isize {
    isize::try_from(host.viewport.page_rows()).unwrap_or(isize::MAX)
}

/// Install a new selection state, scrolling the active row into view
fn set_selection_state(
    model: &mut GridModel,
    host: &mut Host<'_>,
    next: SelectionState,
) -> Option<Cmd> {
    if next == model.state.selection {
        return None;
    }
    model.state.selection = next;
    if let Some(active) = next.active_cell {
        host.viewport.scroll_row_into_view(active.row);
    }
    Some(Cmd::Redraw)
}

/// Close any open editor keeping its draft. Returns whether one was open.
fn commit_edit(model: &mut GridModel, host: &mut Host<'_>) -> bool {
    let Some(edit) = model.state.edit.take() else {
        return false;
    };
    match model.columns.get(edit.target.col) {
        Some(column) => {
            edit.commit(column.as_ref(), host.store);
        }
        None => tracing::warn!(col = edit.target.col, "edited column no longer exists"),
    }
    true
}

fn tab(model: &mut GridModel, direction: TabDirection, host: &mut Host<'_>) -> Option<Cmd> {
    commit_edit(model, host);
    let size = grid_size(model, host);
    let (next, exit) = model.state.selection.tab(direction, size);
    let redraw = set_selection_state(model, host, next);
    match exit {
        Some(dir) => Some(Cmd::batch(vec![Cmd::Redraw, Cmd::FocusOut(dir)])),
        None => redraw,
    }
}

fn exit_grid(model: &mut GridModel, direction: TabDirection, host: &mut Host<'_>) -> Option<Cmd> {
    commit_edit(model, host);
    model.state.selection = SelectionState::none();
    Some(Cmd::batch(vec![Cmd::Redraw, Cmd::FocusOut(direction)]))
}

fn start_edit(model: &mut GridModel, seed: EditSeed, host: &mut Host<'_>) -> Option<Cmd> {
    let active = model.state.active_cell()?;

    if let Some(edit) = &model.state.edit {
        if edit.target == active {
            return None;
        }
        commit_edit(model, host);
    }

    let column = model.columns.get(active.col)?.as_ref();
    if column.disabled() {
        return None;
    }

    let toggle = column.editor_kind() == EditorKind::Toggle;
    if toggle && !matches!(seed, EditSeed::Existing | EditSeed::Replace(' ')) {
        return None;
    }

    let collapsed = model.state.selection.collapse();
    model.state.selection = collapsed;

    if toggle {
        let current = host.store.get_cell(active.row, active.col);
        let toggled = CellValue::Bool(!current.as_bool());
        host.store.apply_patch(&[CellUpdate::new(active, toggled)]);
        tracing::debug!(row = active.row, col = active.col, "toggled");
        return Some(Cmd::Redraw);
    }

    let edit = EditState::begin(active, column, host.store, seed)?;
    model.state.edit = Some(edit);
    host.viewport.scroll_row_into_view(active.row);
    Some(Cmd::Redraw)
}

fn commit_and_exit(
    model: &mut GridModel,
    movement: CommitMove,
    host: &mut Host<'_>,
) -> Option<Cmd> {
    let target = model.state.edit.as_ref()?.target;
    commit_edit(model, host);

    match movement {
        CommitMove::Enter => {
            let last_row = host.store.row_count().saturating_sub(1);
            let options = model.options;
            if options.auto_add_row
                && !options.lock_rows
                && !model.state.selection.has_range()
                && target.row == last_row
            {
                let at = host.store.row_count();
                host.store.insert_row_at(at, Record::new());
                tracing::debug!(row = at, "row appended");
            }
            let size = grid_size(model, host);
            let next = model.state.selection.step(Direction::Down, size);
            set_selection_state(model, host, next).or(Some(Cmd::Redraw))
        }
        CommitMove::Step(direction) => {
            let size = grid_size(model, host);
            let next = model.state.selection.step(direction, size);
            set_selection_state(model, host, next).or(Some(Cmd::Redraw))
        }
        CommitMove::Tab(direction) => tab(model, direction, host).or(Some(Cmd::Redraw)),
        CommitMove::Stay => Some(Cmd::Redraw),
    }
}

fn copy(model: &GridModel, host: &mut Host<'_>) {
    if let Some(edit) = &model.state.edit {
        let selected = edit.draft.selected_text();
        if !selected.is_empty() {
            host.clipboard.set_text(&selected);
        }
        return;
    }
    let Some(selection) = model.state.selection() else {
        return;
    };
    let payload = clipboard::copy_payload(selection, &*host.store, &model.columns);
    host.clipboard.set_payload(&payload);
}

fn cut(model: &mut GridModel, host: &mut Host<'_>) -> Option<Cmd> {
    if let Some(edit) = model.state.edit.as_mut() {
        let column = model.columns.get(edit.target.col)?.as_ref();
        let taken = edit.cut(column, host.store);
        if taken.is_empty() {
            return None;
        }
        host.clipboard.set_text(&taken);
        return Some(Cmd::Redraw);
    }
    copy(model, host);
    update_intent(model, Intent::DeleteSelectionContents, host)
}

fn paste(model: &mut GridModel, host: &mut Host<'_>) -> Option<Cmd> {
    let text = host.clipboard.get_text()?;

    if let Some(edit) = model.state.edit.as_mut() {
        let column = model.columns.get(edit.target.col)?.as_ref();
        let single_line = text.lines().collect::<Vec<_>>().join(" ");
        edit.input(&EditorInput::InsertText(single_line), column, host.store);
        return Some(Cmd::Redraw);
    }

    let target: Selection = model.state.selection()?;
    let parsed = clipboard::parse(&text);
    let plan = clipboard::apply_paste(
        &parsed,
        target,
        &*host.store,
        &model.columns,
        model.options.lock_rows,
    );
    if plan.patch.is_empty() {
        tracing::debug!("nothing to paste");
        return None;
    }
    plan.patch.apply_to(host.store);
    tracing::debug!(
        updates = plan.patch.updates.len(),
        new_rows = plan.patch.new_rows,
        "pasted"
    );

    if plan.range.is_some() && plan.range != model.state.selection() {
        let size = grid_size(model, host);
        let next = model.state.selection.set_selection(plan.range, size);
        set_selection_state(model, host, next);
    }
    Some(Cmd::Redraw)
}
