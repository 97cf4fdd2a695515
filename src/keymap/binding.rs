//! Keybinding: one keystroke mapped to a command, optionally conditional

use super::command::Command;
use super::context::Condition;
use super::types::Keystroke;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybinding {
    pub keystroke: Keystroke,
    pub command: Command,
    /// All must hold for the binding to fire
    pub when: Option<Vec<Condition>>,
}

impl Keybinding {
    pub fn new(keystroke: Keystroke, command: Command) -> Self {
        Self {
            keystroke,
            command,
            when: None,
        }
    }

    /// Add conditions (builder pattern)
    pub fn when(mut self, conditions: Vec<Condition>) -> Self {
        self.when = Some(conditions);
        self
    }

    pub fn when_single(self, condition: Condition) -> Self {
        self.when(vec![condition])
    }

    pub fn is_conditional(&self) -> bool {
        self.when.is_some()
    }
}
