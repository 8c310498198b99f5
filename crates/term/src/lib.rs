//! Terminal presentation for the game.
//!
//! The game draws into a [`PixelCanvas`] through the core `Canvas` trait.
//! [`GameView`] scales that canvas into a [`FrameBuffer`] of half-block
//! cells, and [`TerminalRenderer`] flushes the framebuffer to the terminal,
//! writing only what changed since the previous frame.

pub mod canvas;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use sokoban_core as core;
pub use sokoban_types as types;

pub use canvas::{palette_rgb, PixelCanvas, TextSpan, PALETTE};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Layout, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
