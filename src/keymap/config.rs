//! Keymap files
//!
//! A keymap file is a YAML document with a `bindings` list. Each entry names a
//! key chord, a command, and optionally a platform and a list of conditions.

use std::fmt;
use std::path::Path;

use serde::Deserialize;

use super::binding::Keybinding;
use super::command::Command;
use super::context::Condition;
use super::types::{KeyCode, Keystroke, Modifiers};

#[derive(Debug, Deserialize)]
struct KeymapFile {
    bindings: Vec<BindingEntry>,
}

#[derive(Debug, Deserialize)]
struct BindingEntry {
    key: String,
    command: String,
    #[serde(default)]
    platform: Option<String>,
    #[serde(default)]
    when: Vec<String>,
}

impl BindingEntry {
    fn applies_here(&self) -> bool {
        self.platform
            .as_deref()
            .map_or(true, |p| p.eq_ignore_ascii_case(host_platform()))
    }

    fn into_binding(self) -> Result<Keybinding, KeymapError> {
        let keystroke = parse_key_string(&self.key)?;
        let command: Command = self
            .command
            .parse()
            .map_err(|_| KeymapError::InvalidCommand(self.command.clone()))?;

        let binding = Keybinding::new(keystroke, command);
        if self.when.is_empty() {
            return Ok(binding);
        }
        let conditions = self
            .when
            .iter()
            .map(|name| condition_named(name))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(binding.when(conditions))
    }
}

/// Read and parse a keymap file from disk
pub fn load_keymap_file(path: &Path) -> Result<Vec<Keybinding>, KeymapError> {
    let yaml = std::fs::read_to_string(path)
        .map_err(|e| KeymapError::IoError(format!("{}: {}", path.display(), e)))?;
    parse_keymap_yaml(&yaml)
}

/// Parse keymap YAML. Entries for another platform are skipped.
pub fn parse_keymap_yaml(yaml: &str) -> Result<Vec<Keybinding>, KeymapError> {
    let file: KeymapFile =
        serde_yaml::from_str(yaml).map_err(|e| KeymapError::ParseError(e.to_string()))?;

    file.bindings
        .into_iter()
        .filter(BindingEntry::applies_here)
        .map(BindingEntry::into_binding)
        .collect()
}

/// Parse a chord such as `"shift+tab"` or `"cmd+a"`.
///
/// `cmd` is stored as Ctrl; lookup folds Meta into Ctrl, so a `cmd+c`
/// binding answers both Ctrl+C and Cmd+C.
pub fn parse_key_string(chord: &str) -> Result<Keystroke, KeymapError> {
    let mut mods = Modifiers::NONE;
    let mut key = None;

    for token in chord.split('+').map(|t| t.trim().to_ascii_lowercase()) {
        if let Some(modifier) = modifier_named(&token) {
            mods = mods | modifier;
            continue;
        }
        if key.is_some() {
            return Err(KeymapError::InvalidKey(format!(
                "'{}' names more than one key",
                chord
            )));
        }
        key = Some(key_named(&token)?);
    }

    match key {
        Some(key) => Ok(Keystroke::new(key, mods)),
        None => Err(KeymapError::InvalidKey(format!(
            "'{}' has modifiers but no key",
            chord
        ))),
    }
}

fn modifier_named(token: &str) -> Option<Modifiers> {
    match token {
        "cmd" | "ctrl" | "control" => Some(Modifiers::CTRL),
        "shift" => Some(Modifiers::SHIFT),
        "alt" | "option" | "opt" => Some(Modifiers::ALT),
        "meta" | "super" | "win" => Some(Modifiers::META),
        _ => None,
    }
}

const NAMED_KEYS: &[(&[&str], KeyCode)] = &[
    (&["enter", "return"], KeyCode::Enter),
    (&["escape", "esc"], KeyCode::Escape),
    (&["tab"], KeyCode::Tab),
    (&["backspace", "back"], KeyCode::Backspace),
    (&["delete", "del"], KeyCode::Delete),
    (&["space"], KeyCode::Space),
    (&["up", "arrowup"], KeyCode::Up),
    (&["down", "arrowdown"], KeyCode::Down),
    (&["left", "arrowleft"], KeyCode::Left),
    (&["right", "arrowright"], KeyCode::Right),
    (&["home"], KeyCode::Home),
    (&["end"], KeyCode::End),
    (&["pageup", "pgup"], KeyCode::PageUp),
    (&["pagedown", "pgdown", "pgdn"], KeyCode::PageDown),
];

fn key_named(token: &str) -> Result<KeyCode, KeymapError> {
    let mut chars = token.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCode::Char(c));
    }

    if let Some((_, code)) = NAMED_KEYS.iter().find(|(names, _)| names.contains(&token)) {
        return Ok(*code);
    }

    token
        .strip_prefix('f')
        .and_then(|n| n.parse::<u8>().ok())
        .filter(|n| (1..=12).contains(n))
        .map(KeyCode::F)
        .ok_or_else(|| KeymapError::InvalidKey(format!("unknown key '{}'", token)))
}

fn condition_named(name: &str) -> Result<Condition, KeymapError> {
    let normalized = name.trim().to_ascii_lowercase().replace('_', "");
    let condition = match normalized.as_str() {
        "editing" | "editoropen" => Condition::Editing,
        "notediting" | "navigating" => Condition::NotEditing,
        "rangeselected" | "hasrange" => Condition::RangeSelected,
        "attextstart" => Condition::AtTextStart,
        "attextend" => Condition::AtTextEnd,
        _ => return Err(KeymapError::InvalidCondition(name.to_string())),
    };
    Ok(condition)
}

fn host_platform() -> &'static str {
    match std::env::consts::OS {
        "macos" => "macos",
        "windows" => "windows",
        _ => "linux",
    }
}

/// Failure to load or parse a keymap
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeymapError {
    IoError(String),
    ParseError(String),
    InvalidKey(String),
    InvalidCommand(String),
    InvalidCondition(String),
}

impl fmt::Display for KeymapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeymapError::IoError(e) => write!(f, "cannot read keymap: {}", e),
            KeymapError::ParseError(e) => write!(f, "malformed keymap: {}", e),
            KeymapError::InvalidKey(k) => write!(f, "bad key chord: {}", k),
            KeymapError::InvalidCommand(c) => write!(f, "no command named '{}'", c),
            KeymapError::InvalidCondition(c) => write!(f, "no condition named '{}'", c),
        }
    }
}

impl std::error::Error for KeymapError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_key() {
        let stroke = parse_key_string("a").unwrap();
        assert_eq!(stroke.key, KeyCode::Char('a'));
        assert!(stroke.mods.is_empty());
    }

    #[test]
    fn test_parse_key_with_multiple_modifiers() {
        let stroke = parse_key_string("ctrl+shift+up").unwrap();
        assert_eq!(stroke.key, KeyCode::Up);
        assert!(stroke.mods.ctrl());
        assert!(stroke.mods.shift());
    }

    #[test]
    fn test_cmd_is_stored_as_ctrl() {
        let stroke = parse_key_string("cmd+c").unwrap();
        assert_eq!(stroke, Keystroke::new(KeyCode::Char('c'), Modifiers::CTRL));
    }

    #[test]
    fn test_condition_names_ignore_case_and_underscores() {
        assert_eq!(condition_named("Range_Selected"), Ok(Condition::RangeSelected));
        assert_eq!(condition_named("not_editing"), Ok(Condition::NotEditing));
        assert!(condition_named("modal").is_err());
    }

    #[test]
    fn test_parse_named_and_function_keys() {
        assert_eq!(parse_key_string("esc").unwrap().key, KeyCode::Escape);
        assert_eq!(parse_key_string("pgdn").unwrap().key, KeyCode::PageDown);
        assert_eq!(parse_key_string("f2").unwrap().key, KeyCode::F(2));
        assert!(parse_key_string("f13").is_err());
        assert!(parse_key_string("ctrl+").is_err());
        assert!(parse_key_string("a+b").is_err());
    }

    #[test]
    fn test_parse_yaml_with_conditions() {
        let yaml = r#"
bindings:
  - key: "enter"
    command: ConfirmEdit
    when: ["editing"]
  - key: "enter"
    command: StartEditing
"#;

        let bindings = parse_keymap_yaml(yaml).unwrap();
        assert_eq!(bindings.len(), 2);
        assert_eq!(bindings[0].when, Some(vec![Condition::Editing]));
        assert_eq!(bindings[1].command, Command::StartEditing);
        assert!(bindings[1].when.is_none());
    }

    #[test]
    fn test_parse_yaml_with_platform() {
        let yaml = r#"
bindings:
  - key: "cmd+c"
    command: Copy
  - key: "meta+up"
    command: JumpUp
    platform: macos
"#;

        let bindings = parse_keymap_yaml(yaml).unwrap();

        #[cfg(target_os = "macos")]
        assert_eq!(bindings.len(), 2);

        #[cfg(not(target_os = "macos"))]
        assert_eq!(bindings.len(), 1);
    }

    #[test]
    fn test_parse_yaml_errors() {
        let bad_command = "bindings:\n  - key: up\n    command: Teleport\n";
        assert_eq!(
            parse_keymap_yaml(bad_command),
            Err(KeymapError::InvalidCommand("Teleport".to_string()))
        );

        let bad_condition = "bindings:\n  - key: up\n    command: MoveUp\n    when: [modal]\n";
        assert!(matches!(
            parse_keymap_yaml(bad_condition),
            Err(KeymapError::InvalidCondition(_))
        ));

        assert!(matches!(
            parse_keymap_yaml("bindings: 3"),
            Err(KeymapError::ParseError(_))
        ));
    }
}
