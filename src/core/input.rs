use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Discrete, edge-triggered input the screens understand. Everything else the
/// keyboard produces is dropped at this boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Escape,
    /// Number key 1..=9 (top row or numpad), 1-based as printed on the key.
    Digit(u8),
    /// Window close request.
    Quit,
}

impl InputEvent {
    /// Zero-based list slot addressed by a digit key.
    #[inline(always)]
    pub fn digit_index(self) -> Option<usize> {
        match self {
            InputEvent::Digit(n @ 1..=9) => Some(n as usize - 1),
            _ => None,
        }
    }
}

/// Maps a winit key event to an [`InputEvent`]. Releases and auto-repeats are ignored.
pub fn from_key_event(event: &KeyEvent) -> Option<InputEvent> {
    if event.state != ElementState::Pressed || event.repeat {
        return None;
    }
    match event.physical_key {
        PhysicalKey::Code(code) => from_keycode(code),
        PhysicalKey::Unidentified(_) => None,
    }
}

#[inline(always)]
pub fn from_keycode(code: KeyCode) -> Option<InputEvent> {
    let ev = match code {
        KeyCode::ArrowUp => InputEvent::Up,
        KeyCode::ArrowDown => InputEvent::Down,
        KeyCode::ArrowLeft => InputEvent::Left,
        KeyCode::ArrowRight => InputEvent::Right,
        KeyCode::Enter | KeyCode::NumpadEnter => InputEvent::Enter,
        KeyCode::Escape => InputEvent::Escape,
        KeyCode::Digit1 | KeyCode::Numpad1 => InputEvent::Digit(1),
        KeyCode::Digit2 | KeyCode::Numpad2 => InputEvent::Digit(2),
        KeyCode::Digit3 | KeyCode::Numpad3 => InputEvent::Digit(3),
        KeyCode::Digit4 | KeyCode::Numpad4 => InputEvent::Digit(4),
        KeyCode::Digit5 | KeyCode::Numpad5 => InputEvent::Digit(5),
        KeyCode::Digit6 | KeyCode::Numpad6 => InputEvent::Digit(6),
        KeyCode::Digit7 | KeyCode::Numpad7 => InputEvent::Digit(7),
        KeyCode::Digit8 | KeyCode::Numpad8 => InputEvent::Digit(8),
        KeyCode::Digit9 | KeyCode::Numpad9 => InputEvent::Digit(9),
        _ => return None,
    };
    Some(ev)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_row_and_numpad_digits_agree() {
        assert_eq!(from_keycode(KeyCode::Digit2), Some(InputEvent::Digit(2)));
        assert_eq!(from_keycode(KeyCode::Numpad2), Some(InputEvent::Digit(2)));
        assert_eq!(InputEvent::Digit(2).digit_index(), Some(1));
    }

    #[test]
    fn zero_and_letters_are_not_recognised() {
        assert_eq!(from_keycode(KeyCode::Digit0), None);
        assert_eq!(from_keycode(KeyCode::KeyW), None);
        assert_eq!(InputEvent::Digit(0).digit_index(), None);
        assert_eq!(InputEvent::Enter.digit_index(), None);
    }

    #[test]
    fn both_enter_keys_confirm() {
        assert_eq!(from_keycode(KeyCode::Enter), Some(InputEvent::Enter));
        assert_eq!(from_keycode(KeyCode::NumpadEnter), Some(InputEvent::Enter));
    }
}
