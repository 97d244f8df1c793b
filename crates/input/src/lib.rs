//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It decodes
//! raw-mode terminal bytes into [`crate::types::InputEvent`] and runs the
//! blocking device read on its own thread, handing events to the game loop
//! through a channel.

pub mod map;
pub mod reader;

pub use tui_pacman_types as types;

pub use map::{decode, is_interrupt, should_quit};
pub use reader::{spawn_reader, KeySender, KeyStream};
