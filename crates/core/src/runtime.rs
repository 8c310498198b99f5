//! Level runtime - one attempt at one level
//!
//! Owns the mutable half of a level: the attempt state, the live block
//! positions, and the player position. The level definition itself stays
//! immutable and is passed in on every call.
//!
//! # Frame order
//!
//! [`LevelRuntime::advance`] runs, in order:
//!
//! 1. **Win check**: every target covered by some block → `End`, nothing moves
//! 2. **Restart**: `action_z` → `Start`, nothing moves (reseed happens on entry)
//! 3. **Movement**: clamp the candidate tile into the grid, then either push the
//!    first block found there or walk onto it unless it is a wall
//!
//! Push destinations outside the grid are rejected like walls.

use arrayvec::ArrayVec;

use crate::level::Level;
use crate::types::{AttemptState, GameInput, Pos, MAX_BLOCK_COUNT};

/// What a call to [`LevelRuntime::advance`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Every target is covered; the attempt is now `End`.
    Solved,
    /// `action_z` was pressed; the attempt is now `Start`.
    RestartRequested,
    /// The player walked onto an empty tile.
    Moved,
    /// The player pushed the block with this index.
    Pushed { block: usize },
    /// A wall or an immovable block stopped the move.
    Blocked,
    /// Nothing to do this frame.
    Idle,
}

/// Mutable state of one level attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelRuntime {
    attempt: AttemptState,
    player: Pos,
    blocks: ArrayVec<Pos, MAX_BLOCK_COUNT>,
}

impl LevelRuntime {
    /// A fresh attempt in `Start`, already seeded so it can be drawn.
    pub fn new(level: &Level) -> Self {
        let mut runtime = Self {
            attempt: AttemptState::Start,
            player: level.start(),
            blocks: ArrayVec::new(),
        };
        runtime.reseed(level);
        runtime
    }

    /// `Start -> InProgress`: put the player and every block back on their
    /// start tiles.
    ///
    /// # Panics
    ///
    /// Panics when the level holds `MAX_BLOCK_COUNT` or more blocks. Validated
    /// levels never do; a violation means the catalog itself is corrupt.
    pub fn enter(&mut self, level: &Level) {
        assert!(
            level.block_count() < MAX_BLOCK_COUNT,
            "level `{}` has {} blocks, capacity is {}",
            level.name(),
            level.block_count(),
            MAX_BLOCK_COUNT
        );
        self.reseed(level);
        self.attempt = AttemptState::InProgress;
    }

    fn reseed(&mut self, level: &Level) {
        self.player = level.start();
        self.blocks.clear();
        self.blocks
            .extend(level.blocks().iter().map(|block| block.start));
    }

    pub fn attempt(&self) -> AttemptState {
        self.attempt
    }

    pub fn player(&self) -> Pos {
        self.player
    }

    /// Live block positions, indexed like `level.blocks()`
    pub fn blocks(&self) -> &[Pos] {
        &self.blocks
    }

    /// Index of the first block on `pos`
    pub fn block_at(&self, pos: Pos) -> Option<usize> {
        self.blocks.iter().position(|&block| block == pos)
    }

    /// True when every target is covered by some block.
    ///
    /// A level without blocks is complete.
    pub fn is_complete(&self, level: &Level) -> bool {
        level
            .blocks()
            .iter()
            .all(|def| self.block_at(def.end).is_some())
    }

    /// Move an in-progress attempt to `End` if it is solved.
    ///
    /// Returns true when the attempt is (now) `End`.
    pub fn check_win(&mut self, level: &Level) -> bool {
        if self.attempt == AttemptState::InProgress && self.is_complete(level) {
            self.attempt = AttemptState::End;
            log::debug!("level `{}` solved", level.name());
        }
        self.attempt == AttemptState::End
    }

    /// Ask for a restart; the caller reseeds via [`LevelRuntime::enter`].
    pub fn restart(&mut self) {
        self.attempt = AttemptState::Start;
    }

    /// Run one frame of an in-progress attempt.
    ///
    /// Attempts in `Start` or `End` are left untouched.
    pub fn advance(&mut self, level: &Level, input: &GameInput) -> StepOutcome {
        if self.attempt != AttemptState::InProgress {
            return StepOutcome::Idle;
        }

        if self.check_win(level) {
            return StepOutcome::Solved;
        }

        if input.action_z {
            log::debug!("level `{}` restart requested", level.name());
            self.restart();
            return StepOutcome::RestartRequested;
        }

        let (move_x, move_y) = input.move_delta();
        if move_x == 0 && move_y == 0 {
            return StepOutcome::Idle;
        }
        self.try_move(level, move_x, move_y)
    }

    fn try_move(&mut self, level: &Level, move_x: i32, move_y: i32) -> StepOutcome {
        let grid = level.grid();
        let target = grid.clamp(self.player.offset(move_x, move_y));
        if target == self.player {
            return StepOutcome::Idle;
        }

        if let Some(index) = self.block_at(target) {
            // Pushes are axis-aligned; horizontal wins when both axes are set.
            let dest = if move_x != 0 {
                target.offset(move_x, 0)
            } else {
                target.offset(0, move_y)
            };
            if grid.is_blocked(dest) || self.block_at(dest).is_some() {
                return StepOutcome::Blocked;
            }
            self.blocks[index] = dest;
            self.player = target;
            return StepOutcome::Pushed { block: index };
        }

        if grid.is_wall(target) {
            return StepOutcome::Blocked;
        }
        self.player = target;
        StepOutcome::Moved
    }
}
