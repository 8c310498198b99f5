//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the level simulation, the screen state machine, and
//! the per-frame session entry point. It has **zero dependencies** on the
//! terminal, the clock, or any I/O, making it:
//!
//! - **Deterministic**: the same input sequence always produces the same state
//! - **Testable**: every rule is exercised without a terminal
//! - **Portable**: any host that can call [`GameSession::update`] once per frame
//!   and implement [`Canvas`] can run the game
//!
//! # Module Structure
//!
//! - [`grid`]: flat tile map with bounds-checked lookups
//! - [`level`]: immutable level definitions, text parsing and validation
//! - [`catalog`]: the ordered built-in level list
//! - [`runtime`]: one level attempt, movement and push resolution
//! - [`screen`]: Title / Play / Credits state machine
//! - [`session`]: lazy init, frame counter, per-frame entry point
//! - [`draw`]: the drawing contract and its flipped-coordinate helpers
//!
//! # Rules
//!
//! - The player moves one tile per pressed direction, clamped to the grid
//! - Walking into a block pushes it one tile, unless a wall, the grid edge,
//!   or another block is behind it
//! - A level is solved when every target tile holds a block
//! - `Z` restarts the current level, `X` advances once it is solved
//!
//! # Example
//!
//! ```
//! use sokoban_core::{GameSession, LevelCatalog, NullCanvas};
//! use sokoban_types::{GameInput, Pos, Screen};
//!
//! let mut session = GameSession::new(LevelCatalog::builtin().unwrap());
//! let x = GameInput { action_x: true, ..GameInput::default() };
//! let right = GameInput { move_right: true, ..GameInput::default() };
//!
//! session.update(&x, &mut NullCanvas); // Title -> Play, level 1 entered
//! session.update(&right, &mut NullCanvas); // push the only block home
//! session.update(&GameInput::default(), &mut NullCanvas); // solved
//!
//! let runtime = session.runtime().unwrap();
//! assert_eq!(runtime.player(), Pos::new(2, 1));
//! assert_eq!(session.screen(), Screen::Play);
//! ```

pub mod catalog;
pub mod draw;
pub mod grid;
pub mod level;
pub mod runtime;
pub mod screen;
pub mod session;

pub use sokoban_types as types;

// Re-export commonly used types for convenience
pub use catalog::{LevelCatalog, BUILTIN_LEVELS};
pub use draw::{draw_bordered_rect, draw_rect, shadow_text, Canvas, NullCanvas};
pub use grid::Grid;
pub use level::{BlockDef, Level, LevelError};
pub use runtime::{LevelRuntime, StepOutcome};
pub use screen::{CreditsScreenState, PlayScreenState, ScreenMachine, TitleScreenState};
pub use session::GameSession;
