//! Key event types and keymaps.
//!
//! A [`KeyCode`] is what a blocking surface read yields: either a printable
//! character (control characters included, so keymaps can bind `'\u{8}'` and
//! friends) or a named symbolic key. A [`Keymap`] is the small set of keys a
//! widget treats as one action; widget configs carry one keymap per action.

use smallvec::SmallVec;
use std::fmt;

/// A key read from the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A regular character key, including literal control characters.
    Char(char),
    /// Enter/Return key.
    Enter,
    /// Backspace key.
    Backspace,
    /// Left arrow key.
    Left,
    /// Right arrow key.
    Right,
    /// Up arrow key.
    Up,
    /// Down arrow key.
    Down,
    /// Escape key.
    Esc,
    /// Tab key.
    Tab,
    /// A key this layer does not model.
    Null,
}

impl KeyCode {
    /// Returns the normalized name for this key code.
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            KeyCode::Char(c) if c.is_control() => format!("ctrl-{:#x}", *c as u32),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Enter => "enter".to_string(),
            KeyCode::Backspace => "backspace".to_string(),
            KeyCode::Left => "left".to_string(),
            KeyCode::Right => "right".to_string(),
            KeyCode::Up => "up".to_string(),
            KeyCode::Down => "down".to_string(),
            KeyCode::Esc => "escape".to_string(),
            KeyCode::Tab => "tab".to_string(),
            KeyCode::Null => "null".to_string(),
        }
    }

    /// Returns true if this key code is an arrow key.
    #[must_use]
    pub fn is_arrow(&self) -> bool {
        matches!(
            self,
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down
        )
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<crossterm::event::KeyCode> for KeyCode {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode as CT;
        match code {
            CT::Char(c) => KeyCode::Char(c),
            CT::Enter => KeyCode::Enter,
            CT::Backspace => KeyCode::Backspace,
            CT::Left => KeyCode::Left,
            CT::Right => KeyCode::Right,
            CT::Up => KeyCode::Up,
            CT::Down => KeyCode::Down,
            CT::Esc => KeyCode::Esc,
            CT::Tab => KeyCode::Tab,
            _ => KeyCode::Null,
        }
    }
}

impl From<crossterm::event::KeyEvent> for KeyCode {
    fn from(event: crossterm::event::KeyEvent) -> Self {
        event.code.into()
    }
}

/// A small set of keys a widget treats as one action.
///
/// # Example
///
/// ```
/// use termprompt_screen::{KeyCode, Keymap};
///
/// let enter = Keymap::new([KeyCode::Enter, KeyCode::Char('\n')]);
/// assert!(enter.contains(KeyCode::Enter));
/// assert!(!enter.contains(KeyCode::Char('q')));
/// ```
#[derive(Debug, Clone)]
pub struct Keymap {
    keys: SmallVec<[KeyCode; 4]>,
}

impl Keymap {
    /// Creates a keymap from the given keys.
    pub fn new(keys: impl IntoIterator<Item = KeyCode>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    /// Returns true if the keymap binds the given key.
    #[inline]
    pub fn contains(&self, key: KeyCode) -> bool {
        self.keys.contains(&key)
    }

    /// Returns true if no keys are bound.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the number of bound keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }
}

impl From<&[KeyCode]> for Keymap {
    fn from(keys: &[KeyCode]) -> Self {
        Self::new(keys.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keycode_name() {
        assert_eq!(KeyCode::Enter.name(), "enter");
        assert_eq!(KeyCode::Char('q').name(), "q");
        assert_eq!(KeyCode::Char('\u{8}').name(), "ctrl-0x8");
    }

    #[test]
    fn test_keycode_is_arrow() {
        assert!(KeyCode::Up.is_arrow());
        assert!(KeyCode::Left.is_arrow());
        assert!(!KeyCode::Enter.is_arrow());
        assert!(!KeyCode::Char('j').is_arrow());
    }

    #[test]
    fn test_keycode_from_crossterm() {
        use crossterm::event::KeyCode as CT;

        assert_eq!(KeyCode::from(CT::Enter), KeyCode::Enter);
        assert_eq!(KeyCode::from(CT::Char('x')), KeyCode::Char('x'));
        assert_eq!(KeyCode::from(CT::Home), KeyCode::Null);
    }

    #[test]
    fn test_keymap_contains() {
        let map = Keymap::new([
            KeyCode::Backspace,
            KeyCode::Char('\u{8}'),
            KeyCode::Char('\u{7f}'),
        ]);
        assert_eq!(map.len(), 3);
        assert!(map.contains(KeyCode::Backspace));
        assert!(map.contains(KeyCode::Char('\u{7f}')));
        assert!(!map.contains(KeyCode::Enter));
    }

    #[test]
    fn test_keymap_empty() {
        let map = Keymap::new([]);
        assert!(map.is_empty());
        assert!(!map.contains(KeyCode::Enter));
    }
}
