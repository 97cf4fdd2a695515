//! Keystrokes as the keymap sees them: a logical key plus held modifiers

use std::fmt;
use std::ops::BitOr;

/// Held modifier keys, packed into a bitset
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const CTRL: Modifiers = Modifiers(1);
    pub const SHIFT: Modifiers = Modifiers(1 << 1);
    pub const ALT: Modifiers = Modifiers(1 << 2);
    /// Cmd on macOS, the logo key elsewhere
    pub const META: Modifiers = Modifiers(1 << 3);

    pub const fn new(ctrl: bool, shift: bool, alt: bool, meta: bool) -> Self {
        Modifiers(
            (ctrl as u8) * Self::CTRL.0
                | (shift as u8) * Self::SHIFT.0
                | (alt as u8) * Self::ALT.0
                | (meta as u8) * Self::META.0,
        )
    }

    #[inline]
    pub const fn contains(self, other: Modifiers) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub const fn ctrl(self) -> bool {
        self.contains(Self::CTRL)
    }

    #[inline]
    pub const fn shift(self) -> bool {
        self.contains(Self::SHIFT)
    }

    #[inline]
    pub const fn alt(self) -> bool {
        self.contains(Self::ALT)
    }

    #[inline]
    pub const fn meta(self) -> bool {
        self.contains(Self::META)
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Ctrl or Meta held. Grid shortcuts treat the two as the same key.
    #[inline]
    pub const fn any_cmd(self) -> bool {
        self.0 & (Self::CTRL.0 | Self::META.0) != 0
    }

    /// The modifier a user presses for shortcuts on this platform
    pub fn cmd() -> Modifiers {
        if cfg!(target_os = "macos") {
            Modifiers::META
        } else {
            Modifiers::CTRL
        }
    }
}

impl BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Self) -> Modifiers {
        Modifiers(self.0 | rhs.0)
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let meta = if cfg!(target_os = "macos") { "Cmd" } else { "Meta" };
        let held = [
            (Self::CTRL, "Ctrl"),
            (Self::SHIFT, "Shift"),
            (Self::ALT, "Alt"),
            (Self::META, meta),
        ];
        let names: Vec<&str> = held
            .iter()
            .filter(|(m, _)| self.contains(*m))
            .map(|(_, name)| *name)
            .collect();
        f.write_str(&names.join("+"))
    }
}

/// Logical key, independent of layout and modifiers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Printable key, lowercase
    Char(char),
    Space,
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    /// Function keys F1 through F12
    F(u8),
}

impl KeyCode {
    /// Text a bare press of this key types, if any
    pub fn typed_char(self) -> Option<char> {
        match self {
            KeyCode::Char(c) => Some(c),
            KeyCode::Space => Some(' '),
            _ => None,
        }
    }

    fn label(self) -> &'static str {
        match self {
            KeyCode::Space => "Space",
            KeyCode::Enter => "Enter",
            KeyCode::Escape => "Escape",
            KeyCode::Tab => "Tab",
            KeyCode::Backspace => "Backspace",
            KeyCode::Delete => "Delete",
            KeyCode::Up => "Up",
            KeyCode::Down => "Down",
            KeyCode::Left => "Left",
            KeyCode::Right => "Right",
            KeyCode::Home => "Home",
            KeyCode::End => "End",
            KeyCode::PageUp => "PageUp",
            KeyCode::PageDown => "PageDown",
            KeyCode::Char(_) | KeyCode::F(_) => "",
        }
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            KeyCode::Char(c) => write!(f, "{}", c.to_uppercase()),
            KeyCode::F(n) => write!(f, "F{}", n),
            other => f.write_str(other.label()),
        }
    }
}

/// One key press with the modifiers held at the time
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Keystroke {
    pub key: KeyCode,
    pub mods: Modifiers,
}

impl Keystroke {
    pub const fn new(key: KeyCode, mods: Modifiers) -> Self {
        Self { key, mods }
    }

    /// Bare key, nothing held
    pub const fn key(key: KeyCode) -> Self {
        Self::new(key, Modifiers::NONE)
    }

    pub const fn shift(key: KeyCode) -> Self {
        Self::new(key, Modifiers::SHIFT)
    }

    /// Character key, lowercased
    pub fn char(c: char) -> Self {
        Self::char_with_mods(c, Modifiers::NONE)
    }

    pub fn char_with_mods(c: char, mods: Modifiers) -> Self {
        Self::new(KeyCode::Char(c.to_ascii_lowercase()), mods)
    }

    /// Same key with Meta folded into Ctrl, so one binding covers both
    pub fn with_cmd_folded(self) -> Self {
        if !self.mods.meta() {
            return self;
        }
        let mods = Modifiers::new(true, self.mods.shift(), self.mods.alt(), false);
        Self::new(self.key, mods)
    }
}

impl fmt::Display for Keystroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.mods.is_empty() {
            write!(f, "{}", self.key)
        } else {
            write!(f, "{}+{}", self.mods, self.key)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifiers_empty() {
        let mods = Modifiers::NONE;
        assert!(mods.is_empty());
        assert!(!mods.ctrl());
        assert!(!mods.any_cmd());
    }

    #[test]
    fn test_modifiers_combined() {
        let mods = Modifiers::CTRL | Modifiers::SHIFT;
        assert!(mods.ctrl());
        assert!(mods.shift());
        assert!(!mods.alt());
        assert!(mods.contains(Modifiers::SHIFT));
    }

    #[test]
    fn test_keystroke_display() {
        let stroke = Keystroke::new(KeyCode::Up, Modifiers::CTRL | Modifiers::SHIFT);
        assert_eq!(stroke.to_string(), "Ctrl+Shift+Up");
    }

    #[test]
    fn test_keystroke_char_lowercase() {
        assert_eq!(Keystroke::char('A'), Keystroke::char('a'));
    }

    #[test]
    fn test_meta_folds_into_ctrl() {
        let stroke = Keystroke::new(KeyCode::Up, Modifiers::META | Modifiers::SHIFT);
        let folded = stroke.with_cmd_folded();
        assert_eq!(folded.mods, Modifiers::CTRL | Modifiers::SHIFT);
        let plain = Keystroke::key(KeyCode::Up);
        assert_eq!(plain.with_cmd_folded(), plain);
    }

    #[test]
    fn test_typed_char() {
        assert_eq!(KeyCode::Char('k').typed_char(), Some('k'));
        assert_eq!(KeyCode::Space.typed_char(), Some(' '));
        assert_eq!(KeyCode::Enter.typed_char(), None);
    }
}
