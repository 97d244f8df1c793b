//! Key mapping from raw terminal bytes to game input.
//!
//! In raw mode the terminal hands us escape sequences untranslated, so the
//! arrow keys arrive as `ESC [ A..D` and a lone `ESC` is the Escape key.

use crate::types::{Direction, InputEvent};

pub const ESC: u8 = 0x1b;
pub const CTRL_C: u8 = 0x03;

/// Decode one read's worth of bytes.
///
/// Returns None for anything that is not Escape or an arrow key.
pub fn decode(bytes: &[u8]) -> Option<InputEvent> {
    match bytes {
        [ESC] => Some(InputEvent::Esc),
        [ESC, b'[', b'A'] => Some(InputEvent::Move(Direction::Up)),
        [ESC, b'[', b'B'] => Some(InputEvent::Move(Direction::Down)),
        [ESC, b'[', b'C'] => Some(InputEvent::Move(Direction::Right)),
        [ESC, b'[', b'D'] => Some(InputEvent::Move(Direction::Left)),
        _ => None,
    }
}

/// Ctrl-C on its own.
///
/// Raw mode swallows SIGINT, so the reader treats this as Escape.
pub fn is_interrupt(bytes: &[u8]) -> bool {
    bytes == [CTRL_C]
}

/// Check if bytes should quit the game.
pub fn should_quit(bytes: &[u8]) -> bool {
    decode(bytes) == Some(InputEvent::Esc) || is_interrupt(bytes)
}
