//! Command types for the Elm-style architecture
//!
//! Commands are side effects the host performs after an update.

use crate::navigation::TabDirection;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// State or data changed; re-render the visible rows
    Redraw,
    /// Move keyboard focus to the element after (Forward) or before
    /// (Backward) the grid
    FocusOut(TabDirection),
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            Cmd::FocusOut(_) => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// Focus handoff carried by this command, if any
    pub fn focus_out(&self) -> Option<TabDirection> {
        match self {
            Cmd::FocusOut(dir) => Some(*dir),
            Cmd::Batch(cmds) => cmds.iter().find_map(Cmd::focus_out),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_needs_redraw() {
        assert!(!Cmd::None.needs_redraw());
        assert!(!Cmd::batch(vec![Cmd::None]).needs_redraw());
        assert!(Cmd::batch(vec![Cmd::None, Cmd::Redraw]).needs_redraw());
    }

    #[test]
    fn test_focus_out_found_in_batch() {
        let cmd = Cmd::batch(vec![Cmd::Redraw, Cmd::FocusOut(TabDirection::Backward)]);
        assert_eq!(cmd.focus_out(), Some(TabDirection::Backward));
        assert_eq!(Cmd::Redraw.focus_out(), None);
    }
}
