//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] and tracks the
//! held soft-drop key, including on terminals without key-release events.

pub mod handler;
pub mod map;

pub use blockfall_types as types;

pub use handler::{InputHandler, SoftDropLatch};
pub use map::{handle_key_event, should_quit};
