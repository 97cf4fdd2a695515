//! Configurable keyboard mapping for the grid
//!
//! Keystrokes resolve to a [`Command`] through a data-driven keymap, with
//! conditional bindings so one key can mean different things while a cell
//! editor is open. Users override the defaults with YAML files.
//!
//! ```text
//! host key event → Keystroke → Keymap::lookup_with_context() → Command → Intent
//! ```

mod binding;
mod command;
mod config;
mod context;
mod defaults;
#[allow(clippy::module_inception)]
mod keymap;
mod types;
#[cfg(feature = "winit")]
mod winit_adapter;

pub use binding::Keybinding;
pub use command::Command;
pub use config::{load_keymap_file, parse_key_string, parse_keymap_yaml, KeymapError};
pub use context::{Condition, KeyContext};
pub use defaults::{
    default_bindings, get_default_keymap_yaml, get_user_config_path, load_default_keymap,
    merge_bindings,
};
pub use keymap::Keymap;
pub use types::{KeyCode, Keystroke, Modifiers};
#[cfg(feature = "winit")]
pub use winit_adapter::{keystroke_from_winit, typed_text_from_winit};
