//! Context system for conditional keybindings
//!
//! The same key means different things while a cell editor is open, e.g.
//! Enter opens the editor or commits it.

use serde::Deserialize;

/// Engine state relevant to binding resolution
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyContext {
    /// A cell editor is open
    pub editing: bool,
    /// The selection spans more than one cell
    pub range_selected: bool,
    /// Editor caret at offset 0 with no text selection
    pub at_text_start: bool,
    /// Editor caret after the last char with no text selection
    pub at_text_end: bool,
}

impl KeyContext {
    pub fn navigating() -> Self {
        Self::default()
    }

    pub fn editing() -> Self {
        Self {
            editing: true,
            ..Self::default()
        }
    }
}

/// Conditions attached to keybindings; several on one binding are ANDed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Editing,
    NotEditing,
    RangeSelected,
    AtTextStart,
    AtTextEnd,
}

impl Condition {
    pub fn evaluate(self, ctx: &KeyContext) -> bool {
        match self {
            Condition::Editing => ctx.editing,
            Condition::NotEditing => !ctx.editing,
            Condition::RangeSelected => ctx.range_selected,
            Condition::AtTextStart => ctx.at_text_start,
            Condition::AtTextEnd => ctx.at_text_end,
        }
    }

    pub fn evaluate_all(conditions: &[Condition], ctx: &KeyContext) -> bool {
        conditions.iter().all(|c| c.evaluate(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editing_conditions() {
        let ctx = KeyContext::navigating();
        assert!(Condition::NotEditing.evaluate(&ctx));
        assert!(!Condition::Editing.evaluate(&ctx));

        let ctx = KeyContext::editing();
        assert!(Condition::Editing.evaluate(&ctx));
        assert!(!Condition::NotEditing.evaluate(&ctx));
    }

    #[test]
    fn test_evaluate_all_empty() {
        assert!(Condition::evaluate_all(&[], &KeyContext::default()));
    }

    #[test]
    fn test_evaluate_all_and_logic() {
        let ctx = KeyContext {
            editing: true,
            at_text_start: true,
            ..KeyContext::default()
        };
        assert!(Condition::evaluate_all(
            &[Condition::Editing, Condition::AtTextStart],
            &ctx
        ));
        assert!(!Condition::evaluate_all(
            &[Condition::Editing, Condition::AtTextEnd],
            &ctx
        ));
    }
}
