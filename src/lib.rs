//! Sokoban (workspace facade crate).
//!
//! Re-exports the workspace crates as `sokoban::{core,input,term,types}` so the
//! binaries, integration tests and benches share one import path.

pub use sokoban_core as core;
pub use sokoban_input as input;
pub use sokoban_term as term;
pub use sokoban_types as types;
