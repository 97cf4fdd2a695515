//! Keymap: stores bindings and resolves keystrokes against a context

use std::collections::HashMap;

use super::binding::Keybinding;
use super::command::Command;
use super::context::{Condition, KeyContext};
use super::types::Keystroke;

#[derive(Debug, Clone, Default)]
pub struct Keymap {
    bindings: Vec<Keybinding>,
    /// Indices into `bindings`; several bindings may share a keystroke with
    /// different conditions
    lookup: HashMap<Keystroke, Vec<usize>>,
}

impl Keymap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bindings(bindings: Vec<Keybinding>) -> Self {
        let mut keymap = Self::new();
        for binding in bindings {
            keymap.add_binding(binding);
        }
        keymap
    }

    pub fn add_binding(&mut self, binding: Keybinding) {
        let idx = self.bindings.len();
        self.lookup.entry(binding.keystroke).or_default().push(idx);
        self.bindings.push(binding);
    }

    /// First binding whose conditions hold.
    ///
    /// Conditional bindings are tried before unconditional ones, each group
    /// in insertion order. `None` context skips conditional bindings.
    fn find_matching(&self, indices: &[usize], context: Option<&KeyContext>) -> Option<Command> {
        if let Some(ctx) = context {
            let conditional = indices.iter().map(|&i| &self.bindings[i]).find(|b| {
                b.when
                    .as_deref()
                    .is_some_and(|conds| Condition::evaluate_all(conds, ctx))
            });
            if let Some(binding) = conditional {
                return Some(binding.command);
            }
        }

        indices
            .iter()
            .map(|&i| &self.bindings[i])
            .find(|b| b.when.is_none())
            .map(|b| b.command)
    }

    pub fn lookup(&self, keystroke: &Keystroke) -> Option<Command> {
        self.lookup_with_context(keystroke, None)
    }

    /// Resolve a keystroke. A Meta chord with no binding of its own falls
    /// back to the Ctrl binding, so `ctrl+c` also answers Cmd+C.
    pub fn lookup_with_context(
        &self,
        keystroke: &Keystroke,
        context: Option<&KeyContext>,
    ) -> Option<Command> {
        let exact = self
            .lookup
            .get(keystroke)
            .and_then(|indices| self.find_matching(indices, context));
        if exact.is_some() {
            return exact;
        }

        let folded = keystroke.with_cmd_folded();
        if folded == *keystroke {
            return None;
        }
        let indices = self.lookup.get(&folded)?;
        self.find_matching(indices, context)
    }

    pub fn bindings(&self) -> &[Keybinding] {
        &self.bindings
    }

    pub fn binding_for(&self, command: Command) -> Option<&Keybinding> {
        self.bindings.iter().find(|b| b.command == command)
    }

    pub fn display_for(&self, command: Command) -> Option<String> {
        self.binding_for(command).map(|b| b.keystroke.to_string())
    }
}
