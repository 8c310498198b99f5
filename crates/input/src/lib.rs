//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into game [`Button`]s, tracks which buttons are held
//! (including terminals without key-release events), and edge-detects them
//! into the per-frame [`GameInput`](crate::types::GameInput) the game reads.

pub mod buttons;
pub mod handler;
pub mod map;
pub mod sampler;

pub use sokoban_types as types;

pub use buttons::{Button, Buttons};
pub use handler::ButtonTracker;
pub use map::{map_key, should_quit};
pub use sampler::InputSampler;
