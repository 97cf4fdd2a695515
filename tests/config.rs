//! Configuration system tests
//!
//! Tests for config paths, grid config persistence, and keymap loading/merging.

use tabula::config::GridConfig;
use tabula::config_paths;
use tabula::keymap::{
    default_bindings, load_keymap_file, merge_bindings, Command, Condition, KeyCode, Keybinding,
    Keymap, KeymapError, Keystroke, Modifiers,
};
use tabula::model::GridOptions;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_contains_app_name() {
    let Some(dir) = config_paths::config_dir() else {
        return;
    };
    assert!(dir.to_string_lossy().contains("tabula"));
}

#[test]
fn test_keymap_and_config_files_end_with_yaml() {
    if let Some(path) = config_paths::keymap_file() {
        assert!(path.to_string_lossy().ends_with("keymap.yaml"));
    }
    if let Some(path) = config_paths::config_file() {
        assert!(path.to_string_lossy().ends_with("config.yaml"));
    }
}

#[test]
fn test_logs_dir_is_subdir_of_config() {
    if let (Some(config), Some(logs)) = (config_paths::config_dir(), config_paths::logs_dir()) {
        assert!(logs.starts_with(&config));
    }
}

// ========================================================================
// Grid Config Tests
// ========================================================================

#[test]
fn test_grid_config_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");

    let config = GridConfig {
        auto_add_row: true,
        lock_rows: true,
        continuous_updates: false,
    };
    config.save_to(&path).unwrap();
    assert!(path.exists());
    assert_eq!(GridConfig::load_from(&path), config);
}

#[test]
fn test_missing_config_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = GridConfig::load_from(&dir.path().join("absent.yaml"));
    assert_eq!(config, GridConfig::default());
}

#[test]
fn test_malformed_config_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "auto_add_row: [not, a, bool]\n").unwrap();
    assert_eq!(GridConfig::load_from(&path), GridConfig::default());
}

#[test]
fn test_grid_options_from_config() {
    let config = GridConfig {
        auto_add_row: true,
        lock_rows: false,
        continuous_updates: true,
    };
    let options = GridOptions::from(&config);
    assert!(options.auto_add_row);
    assert!(!options.lock_rows);
}

// ========================================================================
// Keymap Loading Tests
// ========================================================================

#[test]
fn test_load_keymap_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("keymap.yaml");
    std::fs::write(
        &path,
        "bindings:\n  - key: \"cmd+d\"\n    command: DeleteContents\n  - key: \"f2\"\n    command: Unbound\n",
    )
    .unwrap();

    let overrides = load_keymap_file(&path).unwrap();
    assert_eq!(overrides.len(), 2);

    let keymap = Keymap::with_bindings(merge_bindings(default_bindings(), overrides));
    let cmd_d = Keystroke::new(KeyCode::Char('d'), Modifiers::CTRL);
    assert_eq!(keymap.lookup(&cmd_d), Some(Command::DeleteContents));
    assert_eq!(keymap.lookup(&Keystroke::key(KeyCode::F(2))), None);
}

#[test]
fn test_load_missing_keymap_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_keymap_file(&dir.path().join("absent.yaml"));
    assert!(matches!(result, Err(KeymapError::IoError(_))));
}

#[test]
fn test_merge_replaces_same_key_and_condition() {
    let escape = Keystroke::key(KeyCode::Escape);
    let overrides = vec![Keybinding::new(escape, Command::ClearSelection)
        .when(vec![Condition::RangeSelected])];
    let merged = merge_bindings(default_bindings(), overrides);

    let before = default_bindings().len();
    assert_eq!(merged.len(), before);
    assert!(merged.iter().any(|b| b.keystroke == escape
        && b.command == Command::ClearSelection
        && b.when == Some(vec![Condition::RangeSelected])));
}

#[test]
fn test_merge_appends_new_bindings() {
    let stroke = Keystroke::new(KeyCode::Char('k'), Modifiers::CTRL);
    let merged = merge_bindings(
        default_bindings(),
        vec![Keybinding::new(stroke, Command::Cut)],
    );
    assert_eq!(merged.len(), default_bindings().len() + 1);
}
