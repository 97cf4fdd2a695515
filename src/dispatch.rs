//! Command dispatcher: raw input + engine state → intent
//!
//! Pure translation, no state changes. Keys go through the keymap with a
//! context built from the engine state; unbound printable characters start
//! or continue a text edit.

use crate::cell::{CellCoordinate, GridSize};
use crate::edit::{EditSeed, EditorInput};
use crate::keymap::{KeyContext, Keymap, Keystroke};
use crate::messages::Intent;
use crate::model::EngineState;

/// Pointer input already hit-tested to a cell by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Down { cell: CellCoordinate, shift: bool },
    DoubleClick { cell: CellCoordinate },
    /// Press anywhere outside the grid
    Outside,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// `text` is the character the key types, with shift applied, if the
    /// host knows it
    Key {
        stroke: Keystroke,
        text: Option<char>,
    },
    Pointer(PointerEvent),
}

impl InputEvent {
    pub fn key(stroke: Keystroke) -> Self {
        InputEvent::Key { stroke, text: None }
    }

    /// A plain character key, e.g. typing into a cell
    pub fn typed(ch: char) -> Self {
        let stroke = if ch == ' ' {
            Keystroke::key(crate::keymap::KeyCode::Space)
        } else {
            Keystroke::char(ch)
        };
        InputEvent::Key {
            stroke,
            text: Some(ch),
        }
    }
}

/// Binding context for the current engine state
pub fn key_context(state: &EngineState) -> KeyContext {
    let draft = state.edit.as_ref().map(|e| &e.draft);
    KeyContext {
        editing: state.is_editing(),
        range_selected: state.selection.has_range(),
        at_text_start: draft.is_some_and(|d| d.at_start()),
        at_text_end: draft.is_some_and(|d| d.at_end()),
    }
}

/// Translate one event. `None` means the event is not handled by the grid.
pub fn dispatch(
    event: &InputEvent,
    keymap: &Keymap,
    state: &EngineState,
    size: GridSize,
) -> Option<Intent> {
    let intent = match event {
        InputEvent::Key { stroke, text } => dispatch_key(stroke, *text, keymap, state, size),
        InputEvent::Pointer(pointer) => dispatch_pointer(pointer, state),
    };
    tracing::trace!(?event, ?intent, "dispatch");
    intent
}

fn dispatch_key(
    stroke: &Keystroke,
    text: Option<char>,
    keymap: &Keymap,
    state: &EngineState,
    size: GridSize,
) -> Option<Intent> {
    let active = state.active_cell()?;
    let ctx = key_context(state);

    if let Some(command) = keymap.lookup_with_context(stroke, Some(&ctx)) {
        let intent = command.to_intent()?;
        return Some(match intent {
            Intent::TabForward if !ctx.editing && Some(active) == size.last_cell() => {
                Intent::ExitGridForward
            }
            Intent::TabBackward if !ctx.editing && active == CellCoordinate::new(0, 0) => {
                Intent::ExitGridBackward
            }
            other => other,
        });
    }

    if stroke.mods.any_cmd() || stroke.mods.alt() {
        return None;
    }
    let ch = text.or_else(|| {
        let c = stroke.key.typed_char()?;
        Some(if stroke.mods.shift() {
            c.to_ascii_uppercase()
        } else {
            c
        })
    })?;
    if ch.is_control() {
        return None;
    }

    Some(if ctx.editing {
        Intent::EditText(EditorInput::InsertChar(ch))
    } else {
        Intent::StartEdit(EditSeed::Replace(ch))
    })
}

fn dispatch_pointer(pointer: &PointerEvent, state: &EngineState) -> Option<Intent> {
    use crate::messages::Motion;

    let edit_target = state.edit.as_ref().map(|e| e.target);
    match *pointer {
        // Clicks inside the open editor belong to the editor
        PointerEvent::Down { cell, .. } | PointerEvent::DoubleClick { cell }
            if edit_target == Some(cell) =>
        {
            None
        }
        PointerEvent::Down { cell, shift } if shift && state.active_cell().is_some() => {
            Some(Intent::ExtendSelection(Motion::To(cell)))
        }
        PointerEvent::Down { cell, .. } => Some(Intent::MoveActive(Motion::To(cell))),
        PointerEvent::DoubleClick { cell } if state.active_cell() == Some(cell) => {
            Some(Intent::StartEdit(EditSeed::Existing))
        }
        PointerEvent::DoubleClick { cell } => Some(Intent::MoveActive(Motion::To(cell))),
        PointerEvent::Outside if state.active_cell().is_some() || state.is_editing() => {
            Some(Intent::Blur)
        }
        PointerEvent::Outside => None,
    }
}
