//! Convert winit key events into engine keystrokes

use winit::keyboard::{Key, NamedKey};

use super::types::{KeyCode, Keystroke, Modifiers};

/// Map a winit logical key plus modifier flags to a [`Keystroke`].
///
/// `logo` is the Cmd key on macOS. Keys the grid has no use for map to
/// `None`.
pub fn keystroke_from_winit(
    logical_key: &Key,
    ctrl: bool,
    shift: bool,
    alt: bool,
    logo: bool,
) -> Option<Keystroke> {
    let mods = Modifiers::new(ctrl, shift, alt, logo);

    let key_code = match logical_key {
        Key::Named(named) => match named {
            NamedKey::Enter => KeyCode::Enter,
            NamedKey::Escape => KeyCode::Escape,
            NamedKey::Tab => KeyCode::Tab,
            NamedKey::Backspace => KeyCode::Backspace,
            NamedKey::Delete => KeyCode::Delete,
            NamedKey::Space => KeyCode::Space,

            NamedKey::ArrowUp => KeyCode::Up,
            NamedKey::ArrowDown => KeyCode::Down,
            NamedKey::ArrowLeft => KeyCode::Left,
            NamedKey::ArrowRight => KeyCode::Right,

            NamedKey::Home => KeyCode::Home,
            NamedKey::End => KeyCode::End,
            NamedKey::PageUp => KeyCode::PageUp,
            NamedKey::PageDown => KeyCode::PageDown,

            NamedKey::F1 => KeyCode::F(1),
            NamedKey::F2 => KeyCode::F(2),
            NamedKey::F3 => KeyCode::F(3),
            NamedKey::F4 => KeyCode::F(4),
            NamedKey::F5 => KeyCode::F(5),
            NamedKey::F6 => KeyCode::F(6),
            NamedKey::F7 => KeyCode::F(7),
            NamedKey::F8 => KeyCode::F(8),
            NamedKey::F9 => KeyCode::F(9),
            NamedKey::F10 => KeyCode::F(10),
            NamedKey::F11 => KeyCode::F(11),
            NamedKey::F12 => KeyCode::F(12),

            _ => return None,
        },

        // winit reports the shifted character; bindings use the base key
        Key::Character(s) => {
            let c = s.chars().next()?;
            KeyCode::Char(c.to_ascii_lowercase())
        }

        _ => return None,
    };

    Some(Keystroke::new(key_code, mods))
}

/// Text a key event types into the grid, if any
pub fn typed_text_from_winit(logical_key: &Key) -> Option<char> {
    match logical_key {
        Key::Character(s) => s.chars().next(),
        Key::Named(NamedKey::Space) => Some(' '),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_key() {
        let stroke = keystroke_from_winit(&Key::Character("c".into()), true, false, false, false)
            .expect("should map");
        assert_eq!(stroke.key, KeyCode::Char('c'));
        assert!(stroke.mods.ctrl());
    }

    #[test]
    fn test_uppercase_normalized_but_typed_text_kept() {
        let key = Key::Character("K".into());
        let stroke = keystroke_from_winit(&key, false, true, false, false).expect("should map");
        assert_eq!(stroke.key, KeyCode::Char('k'));
        assert_eq!(typed_text_from_winit(&key), Some('K'));
    }

    #[test]
    fn test_arrow_with_modifiers() {
        let stroke =
            keystroke_from_winit(&Key::Named(NamedKey::ArrowUp), false, true, false, true)
                .expect("should map");
        assert_eq!(stroke.key, KeyCode::Up);
        assert!(stroke.mods.shift());
        assert!(stroke.mods.meta());
    }

    #[test]
    fn test_unmapped_named_key() {
        assert!(
            keystroke_from_winit(&Key::Named(NamedKey::CapsLock), false, false, false, false)
                .is_none()
        );
    }
}
