//! Tabula - interaction engine for a virtualized grid widget
//!
//! This crate provides the state machine behind an editable table: active
//! cell and range selection, keyboard navigation, the cell edit lifecycle and
//! clipboard copy/paste. It follows the Elm Architecture: hosts feed
//! [`messages::GridMsg`] into [`update::update`] and act on the returned
//! [`commands::Cmd`]. Rendering is left to the host.

pub mod cell;
pub mod cli;
pub mod clipboard;
pub mod column;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod dispatch;
pub mod draft;
pub mod edit;
pub mod grid;
pub mod keymap;
pub mod messages;
pub mod model;
pub mod navigation;
pub mod store;
pub mod tracing;
pub mod tsv;
pub mod update;
pub mod viewport;

// Re-export commonly used types
pub use cell::{CellCoordinate, GridSize, Selection};
pub use column::{CellValue, CheckboxColumn, Column, NumberColumn, TextColumn};
pub use commands::Cmd;
pub use config::GridConfig;
pub use dispatch::{dispatch, InputEvent, PointerEvent};
pub use grid::Grid;
pub use messages::{GridMsg, Intent};
pub use model::{EngineState, GridModel, GridOptions};
pub use store::{DataStore, Record, VecStore};
pub use update::{update, Host};
pub use viewport::{Viewport, WindowedViewport};
