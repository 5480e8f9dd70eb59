//! Terminal rendering for the falling-block game.
//!
//! Rendering is split in two: [`GameView`] paints a
//! [`GameSnapshot`](crate::core::GameSnapshot) into a plain [`FrameBuffer`]
//! (pure, testable), and [`TerminalRenderer`] diffs consecutive framebuffers
//! and flushes the changes through crossterm.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
