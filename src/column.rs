//! Column descriptors
//!
//! The engine never renders a column. It only needs the data-level
//! operations below: emptiness, delete/copy/paste transforms, how a value
//! becomes draft text and back, and whether edits commit eagerly.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single cell value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    #[default]
    Empty,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl CellValue {
    pub fn text(s: impl Into<String>) -> Self {
        CellValue::Text(s.into())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> bool {
        matches!(self, CellValue::Bool(true))
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Which kind of in-cell editor a column uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditorKind {
    /// Single-line text input holding a draft
    #[default]
    Text,
    /// Boolean toggle: Enter/Space flip the value without opening an editor
    Toggle,
}

/// Capability interface for a grid column
pub trait Column: fmt::Debug {
    /// Stable key (record field name)
    fn id(&self) -> &str;

    fn disabled(&self) -> bool {
        false
    }

    /// Eager (`true`) or lazy (`false`) commit while editing
    fn continuous_updates(&self) -> bool {
        true
    }

    fn editor_kind(&self) -> EditorKind {
        EditorKind::Text
    }

    fn is_cell_empty(&self, value: &CellValue) -> bool {
        value.is_empty()
    }

    /// Value written when the cell is cleared with Delete/Backspace
    fn delete_value(&self, _value: &CellValue) -> CellValue {
        CellValue::Empty
    }

    fn copy_value(&self, value: &CellValue) -> String;

    fn paste_value(&self, text: &str) -> CellValue;

    /// Text shown in the editor when editing starts on an existing value
    fn draft_text(&self, value: &CellValue) -> String {
        self.copy_value(value)
    }

    /// Value produced from the editor's draft text
    fn value_from_draft(&self, draft: &str) -> CellValue {
        self.paste_value(draft)
    }
}

fn collapse_line_breaks(text: &str) -> String {
    text.split(['\n', '\r'])
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Free-text column
#[derive(Debug, Clone)]
pub struct TextColumn {
    id: String,
    disabled: bool,
    continuous_updates: bool,
}

impl TextColumn {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            disabled: false,
            continuous_updates: true,
        }
    }

    /// Buffer edits and commit once on exit
    pub fn lazy(mut self) -> Self {
        self.continuous_updates = false;
        self
    }

    pub fn with_continuous_updates(mut self, continuous: bool) -> Self {
        self.continuous_updates = continuous;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

impl Column for TextColumn {
    fn id(&self) -> &str {
        &self.id
    }

    fn disabled(&self) -> bool {
        self.disabled
    }

    fn continuous_updates(&self) -> bool {
        self.continuous_updates
    }

    fn copy_value(&self, value: &CellValue) -> String {
        value.to_string()
    }

    fn paste_value(&self, text: &str) -> CellValue {
        let collapsed = collapse_line_breaks(text);
        let trimmed = collapsed.trim();
        if trimmed.is_empty() {
            CellValue::Empty
        } else {
            CellValue::text(trimmed)
        }
    }

    fn value_from_draft(&self, draft: &str) -> CellValue {
        let trimmed = draft.trim();
        if trimmed.is_empty() {
            CellValue::Empty
        } else {
            CellValue::text(trimmed)
        }
    }
}

const TRUE_VALUES: &[&str] = &["true", "yes", "on", "1", "x", "checked"];

/// Boolean column toggled in place
#[derive(Debug, Clone)]
pub struct CheckboxColumn {
    id: String,
    disabled: bool,
}

impl CheckboxColumn {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            disabled: false,
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

impl Column for CheckboxColumn {
    fn id(&self) -> &str {
        &self.id
    }

    fn disabled(&self) -> bool {
        self.disabled
    }

    fn editor_kind(&self) -> EditorKind {
        EditorKind::Toggle
    }

    fn is_cell_empty(&self, value: &CellValue) -> bool {
        !value.as_bool()
    }

    fn delete_value(&self, _value: &CellValue) -> CellValue {
        CellValue::Bool(false)
    }

    fn copy_value(&self, value: &CellValue) -> String {
        value.as_bool().to_string()
    }

    fn paste_value(&self, text: &str) -> CellValue {
        let normalized = text.trim().to_lowercase();
        CellValue::Bool(TRUE_VALUES.contains(&normalized.as_str()))
    }
}

/// Numeric column (float, or integer when `integer` is set)
#[derive(Debug, Clone)]
pub struct NumberColumn {
    id: String,
    disabled: bool,
    continuous_updates: bool,
    integer: bool,
}

impl NumberColumn {
    pub fn float(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            disabled: false,
            continuous_updates: true,
            integer: false,
        }
    }

    pub fn integer(id: impl Into<String>) -> Self {
        Self {
            integer: true,
            ..Self::float(id)
        }
    }

    pub fn lazy(mut self) -> Self {
        self.continuous_updates = false;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    fn parse(&self, text: &str) -> CellValue {
        let cleaned: String = text.trim().chars().filter(|c| *c != ',').collect();
        match cleaned.parse::<f64>() {
            Ok(n) if n.is_finite() => {
                CellValue::Number(if self.integer { n.round() } else { n })
            }
            _ => CellValue::Empty,
        }
    }
}

impl Column for NumberColumn {
    fn id(&self) -> &str {
        &self.id
    }

    fn disabled(&self) -> bool {
        self.disabled
    }

    fn continuous_updates(&self) -> bool {
        self.continuous_updates
    }

    fn copy_value(&self, value: &CellValue) -> String {
        match value {
            CellValue::Number(n) => n.to_string(),
            _ => String::new(),
        }
    }

    fn paste_value(&self, text: &str) -> CellValue {
        self.parse(text)
    }
}
