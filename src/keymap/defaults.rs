//! Default grid keybindings
//!
//! The embedded keymap.yaml is the source of truth; `default_bindings` is the
//! hardcoded fallback used if it ever fails to parse.

use std::path::{Path, PathBuf};

use super::binding::Keybinding;
use super::command::Command;
use super::config::{load_keymap_file, parse_keymap_yaml};
use super::context::Condition;
use super::types::{KeyCode, Keystroke, Modifiers};

/// Default keymap YAML embedded at compile time
const DEFAULT_KEYMAP_YAML: &str = include_str!("../../keymap.yaml");

pub fn get_default_keymap_yaml() -> &'static str {
    DEFAULT_KEYMAP_YAML
}

/// `~/.config/tabula/keymap.yaml` on Unix
pub fn get_user_config_path() -> Option<PathBuf> {
    crate::config_paths::keymap_file()
}

/// Load and merge keymaps: defaults + overrides
///
/// Loading order (each layer overrides the previous):
/// 1. Embedded default keymap
/// 2. keymap.yaml in the current directory
/// 3. User config at ~/.config/tabula/keymap.yaml
pub fn load_default_keymap() -> Vec<Keybinding> {
    let mut bindings = match parse_keymap_yaml(DEFAULT_KEYMAP_YAML) {
        Ok(b) => {
            tracing::debug!("Loaded embedded default keymap ({} bindings)", b.len());
            b
        }
        Err(e) => {
            tracing::warn!(
                "Failed to parse embedded keymap: {}, using hardcoded defaults",
                e
            );
            default_bindings()
        }
    };

    let local = Path::new("keymap.yaml");
    if local.exists() {
        match load_keymap_file(local) {
            Ok(local_bindings) => {
                tracing::info!(
                    "Merging project keymap.yaml ({} bindings)",
                    local_bindings.len()
                );
                bindings = merge_bindings(bindings, local_bindings);
            }
            Err(e) => tracing::warn!("Ignoring keymap.yaml in current directory: {}", e),
        }
    }

    if let Some(user_path) = get_user_config_path() {
        if user_path.exists() {
            match load_keymap_file(&user_path) {
                Ok(user_bindings) => {
                    tracing::info!(
                        "Merging user keymap from {} ({} bindings)",
                        user_path.display(),
                        user_bindings.len()
                    );
                    bindings = merge_bindings(bindings, user_bindings);
                }
                Err(e) => {
                    tracing::warn!("Failed to load user keymap from {}: {}", user_path.display(), e);
                }
            }
        }
    }

    bindings
}

/// Merge override bindings into base bindings
///
/// - same keystroke + conditions → replaces base
/// - command `Unbound` → removes every base binding on that keystroke
/// - otherwise → added
pub fn merge_bindings(base: Vec<Keybinding>, overrides: Vec<Keybinding>) -> Vec<Keybinding> {
    let mut result = base;

    for binding in overrides {
        if binding.command == Command::Unbound {
            result.retain(|b| b.keystroke != binding.keystroke);
            continue;
        }

        let existing = result
            .iter()
            .position(|b| b.keystroke == binding.keystroke && b.when == binding.when);

        match existing {
            Some(idx) => result[idx] = binding,
            None => result.push(binding),
        }
    }

    result
}

/// Hardcoded copy of keymap.yaml
pub fn default_bindings() -> Vec<Keybinding> {
    use Command::*;
    use Condition::{AtTextEnd, AtTextStart, Editing, NotEditing, RangeSelected};

    let none = Modifiers::NONE;
    let shift = Modifiers::SHIFT;
    let cmd = Modifiers::CTRL;
    let cmd_shift = Modifiers::CTRL | Modifiers::SHIFT;

    vec![
        // Arrows
        bind(KeyCode::Up, none, ConfirmEditUp).when_single(Editing),
        bind(KeyCode::Up, none, MoveUp),
        bind(KeyCode::Down, none, ConfirmEditDown).when_single(Editing),
        bind(KeyCode::Down, none, MoveDown),
        bind(KeyCode::Left, none, EditCursorLeft).when_single(Editing),
        bind(KeyCode::Left, none, MoveLeft),
        bind(KeyCode::Right, none, EditCursorRight).when_single(Editing),
        bind(KeyCode::Right, none, MoveRight),
        bind(KeyCode::Left, shift, EditSelectLeft).when_single(Editing),
        bind(KeyCode::Right, shift, EditSelectRight).when_single(Editing),
        bind(KeyCode::Up, shift, ExtendUp),
        bind(KeyCode::Down, shift, ExtendDown),
        bind(KeyCode::Left, shift, ExtendLeft),
        bind(KeyCode::Right, shift, ExtendRight),
        bind(KeyCode::Left, cmd, ConfirmEditLeft).when(vec![Editing, AtTextStart]),
        bind(KeyCode::Left, cmd, EditCursorHome).when_single(Editing),
        bind(KeyCode::Left, cmd, JumpLeft),
        bind(KeyCode::Right, cmd, ConfirmEditRight).when(vec![Editing, AtTextEnd]),
        bind(KeyCode::Right, cmd, EditCursorEnd).when_single(Editing),
        bind(KeyCode::Right, cmd, JumpRight),
        bind(KeyCode::Up, cmd, JumpUp),
        bind(KeyCode::Down, cmd, JumpDown),
        bind(KeyCode::Up, cmd_shift, ExtendToTop),
        bind(KeyCode::Down, cmd_shift, ExtendToBottom),
        bind(KeyCode::Left, cmd_shift, ExtendToRowStart),
        bind(KeyCode::Right, cmd_shift, ExtendToRowEnd),
        // Home / End / Page
        bind(KeyCode::Home, none, EditCursorHome).when_single(Editing),
        bind(KeyCode::Home, none, RowStart),
        bind(KeyCode::End, none, EditCursorEnd).when_single(Editing),
        bind(KeyCode::End, none, RowEnd),
        bind(KeyCode::Home, shift, EditSelectHome).when_single(Editing),
        bind(KeyCode::Home, shift, ExtendToRowStart),
        bind(KeyCode::End, shift, EditSelectEnd).when_single(Editing),
        bind(KeyCode::End, shift, ExtendToRowEnd),
        bind(KeyCode::PageUp, none, PageUp),
        bind(KeyCode::PageDown, none, PageDown),
        // Tab
        bind(KeyCode::Tab, none, ConfirmEditNext).when_single(Editing),
        bind(KeyCode::Tab, none, NextCell),
        bind(KeyCode::Tab, shift, ConfirmEditPrev).when_single(Editing),
        bind(KeyCode::Tab, shift, PrevCell),
        // Editing lifecycle
        bind(KeyCode::Enter, none, ConfirmEdit).when_single(Editing),
        bind(KeyCode::Enter, none, StartEditing),
        bind(KeyCode::Enter, shift, ConfirmEditUp).when_single(Editing),
        bind(KeyCode::Enter, shift, InsertRowBelow),
        bind(KeyCode::F(2), none, StartEditing).when_single(NotEditing),
        bind(KeyCode::Escape, none, CancelEdit).when_single(Editing),
        bind(KeyCode::Escape, none, CollapseSelection).when_single(RangeSelected),
        bind(KeyCode::Escape, none, ClearSelection),
        // Deleting
        bind(KeyCode::Backspace, none, EditDeleteBackward).when_single(Editing),
        bind(KeyCode::Backspace, none, DeleteContents),
        bind(KeyCode::Delete, none, EditDeleteForward).when_single(Editing),
        bind(KeyCode::Delete, none, DeleteContents),
        // Selection and clipboard
        bind(KeyCode::Char('a'), cmd, EditSelectAll).when_single(Editing),
        bind(KeyCode::Char('a'), cmd, SelectAll),
        bind(KeyCode::Char('c'), cmd, Copy),
        bind(KeyCode::Char('x'), cmd, Cut),
        bind(KeyCode::Char('v'), cmd, Paste),
    ]
}

fn bind(key: KeyCode, mods: Modifiers, command: Command) -> Keybinding {
    Keybinding::new(Keystroke::new(key, mods), command)
}
