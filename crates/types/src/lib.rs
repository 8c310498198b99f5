//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core simulation, terminal rendering, input sampling).
//!
//! # Screen Geometry
//!
//! The game draws onto a fixed square screen:
//!
//! - **Screen**: 160x160 pixels, origin at the top-left for the drawing contract
//! - **Tiles**: 10x10 pixels, so a level is at most 16x16 tiles
//! - **Grid**: origin at the lower-left, +y points up (`move_up` increments y)
//!
//! # Frame Timing Constants
//!
//! Everything is counted in frames; the host calls the game once per frame.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Host frame interval (~60 FPS) |
//! | `BLINK_PERIOD_FRAMES` | 10 | Prompt shadows toggle every N frames |
//! | `PATROL_INVERSE_SPEED` | 5 | Title patrol box moves every N frames |
//!
//! # Examples
//!
//! ```
//! use sokoban_types::{AttemptState, GameInput, Screen, MAX_BLOCK_COUNT, SCREEN_SIZE, TILE_DIM};
//!
//! let input = GameInput {
//!     move_right: true,
//!     ..GameInput::default()
//! };
//! assert_eq!(input.move_delta(), (1, 0));
//!
//! assert_eq!(Screen::default(), Screen::Title);
//! assert_eq!(AttemptState::default(), AttemptState::Start);
//!
//! assert_eq!(SCREEN_SIZE / TILE_DIM, 16);
//! assert_eq!(MAX_BLOCK_COUNT, 16);
//! ```

/// Side of the square screen in pixels
pub const SCREEN_SIZE: i32 = 160;

/// Side of one grid tile in pixels
pub const TILE_DIM: i32 = 10;

/// Largest level side in tiles that still fits on screen
pub const MAX_GRID_DIM: i32 = SCREEN_SIZE / TILE_DIM;

/// Capacity of the per-level block arrays.
///
/// A level must hold strictly fewer blocks than this.
pub const MAX_BLOCK_COUNT: usize = 16;

/// Host frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Prompt shadows toggle once every this many frames
pub const BLINK_PERIOD_FRAMES: u32 = 10;

/// The title patrol box advances one step every this many frames
pub const PATROL_INVERSE_SPEED: u32 = 5;

/// Patrol rectangle width in tiles
pub const PATROL_WIDTH: i32 = 9;

/// Patrol rectangle height in tiles
pub const PATROL_HEIGHT: i32 = 5;

/// Border thickness of bordered rectangles in pixels
pub const BORDER_SIZE: i32 = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_holds_a_full_grid() {
        assert_eq!(MAX_GRID_DIM * TILE_DIM, SCREEN_SIZE);
        assert_eq!(TICK_MS, 16);
        assert_eq!(BLINK_PERIOD_FRAMES, 10);
        assert_eq!(PATROL_INVERSE_SPEED, 5);
        assert!(BORDER_SIZE * 2 < TILE_DIM);
    }

    #[test]
    fn move_delta_cancels_opposites() {
        let input = GameInput {
            move_left: true,
            move_right: true,
            move_up: true,
            ..GameInput::default()
        };
        assert_eq!(input.move_delta(), (0, 1));
    }

    #[test]
    fn idle_input_has_no_presses() {
        assert!(GameInput::default().is_idle());
        let input = GameInput {
            reset: true,
            ..GameInput::default()
        };
        assert!(!input.is_idle());
    }
}

/// The three screens of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Title,
    Play,
    Credits,
}

impl Screen {
    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::Title => "title",
            Screen::Play => "play",
            Screen::Credits => "credits",
        }
    }
}

/// Per-level attempt progress
///
/// - **Start**: about to (re)seed blocks and player
/// - **InProgress**: playable
/// - **End**: solved, waiting for the player to advance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AttemptState {
    #[default]
    Start,
    InProgress,
    End,
}

impl AttemptState {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttemptState::Start => "start",
            AttemptState::InProgress => "in_progress",
            AttemptState::End => "end",
        }
    }
}

/// Static cell kind of a level map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tile {
    #[default]
    Empty,
    Wall,
}

/// Grid coordinate (lower-left origin, +y up)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Palette slot used by drawing calls (indexed 1-4)
///
/// `One` is the lightest colour and the screen background, `Four` the darkest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DrawColor {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
}

impl DrawColor {
    /// Palette index in 1..=4
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Parse a palette index, `None` outside 1..=4
    ///
    /// # Examples
    ///
    /// ```
    /// use sokoban_types::DrawColor;
    ///
    /// assert_eq!(DrawColor::from_index(3), Some(DrawColor::Three));
    /// assert_eq!(DrawColor::from_index(0), None);
    /// ```
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(DrawColor::One),
            2 => Some(DrawColor::Two),
            3 => Some(DrawColor::Three),
            4 => Some(DrawColor::Four),
            _ => None,
        }
    }
}

/// One frame of edge-triggered input
///
/// Each flag is true only on the frame its button went from released to
/// pressed. Flags are independent; opposite moves may both be set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GameInput {
    pub move_up: bool,
    pub move_down: bool,
    pub move_left: bool,
    pub move_right: bool,
    pub action_x: bool,
    pub action_z: bool,
    /// Reserved, not read by the game.
    pub reset: bool,
    /// Reserved, not read by the game.
    pub cycle_level: bool,
}

impl GameInput {
    /// `(right - left, up - down)`, each component in -1..=1
    pub fn move_delta(&self) -> (i32, i32) {
        (
            self.move_right as i32 - self.move_left as i32,
            self.move_up as i32 - self.move_down as i32,
        )
    }

    /// True when nothing was pressed this frame
    pub fn is_idle(&self) -> bool {
        *self == GameInput::default()
    }
}
