//! Level definitions - immutable geometry, spawn tile, and block start/target pairs
//!
//! Levels are authored as text, one string per row, top row first:
//!
//! - `#` = Wall
//! - ` `, `-`, `_` = Empty floor
//! - `.` = Target cell
//! - `$` = Block
//! - `*` = Block starting on a target
//! - `@` = Player
//! - `+` = Player starting on a target
//!
//! Blocks and targets are paired in reading order, so `blocks()[i].end` is the
//! i-th target found. The win check does not care which block covers which
//! target; the pairing only keeps start and end arrays the same length.

use arrayvec::ArrayVec;
use thiserror::Error;

use crate::grid::Grid;
use crate::types::{Pos, Tile, MAX_BLOCK_COUNT, MAX_GRID_DIM};

/// Start and target cell of one block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockDef {
    pub start: Pos,
    pub end: Pos,
}

/// Reasons a level definition is rejected at load time
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelError {
    #[error("level `{name}` has no rows")]
    Empty { name: String },

    #[error("level `{name}` is {width}x{height}, larger than {max}x{max}")]
    TooLarge {
        name: String,
        width: i32,
        height: i32,
        max: i32,
    },

    #[error("level `{name}` has invalid glyph {glyph:?} at column {column}, row {row}")]
    InvalidGlyph {
        name: String,
        glyph: char,
        column: usize,
        row: usize,
    },

    #[error("level `{name}` has no player start")]
    MissingPlayer { name: String },

    #[error("level `{name}` has more than one player start")]
    MultiplePlayers { name: String },

    #[error("level `{name}` has {count} blocks, must be fewer than {max}")]
    TooManyBlocks {
        name: String,
        count: usize,
        max: usize,
    },

    #[error("level `{name}` has {blocks} blocks but {targets} targets")]
    BlockTargetMismatch {
        name: String,
        blocks: usize,
        targets: usize,
    },

    #[error("level `{name}`: {what} at ({}, {}) is outside the grid", .pos.x, .pos.y)]
    OutOfBounds {
        name: String,
        what: &'static str,
        pos: Pos,
    },

    #[error("level `{name}`: {what} at ({}, {}) is on a wall", .pos.x, .pos.y)]
    OnWall {
        name: String,
        what: &'static str,
        pos: Pos,
    },

    #[error("level `{name}`: two blocks start at ({}, {})", .pos.x, .pos.y)]
    OverlappingBlocks { name: String, pos: Pos },

    #[error("level `{name}`: player starts on a block at ({}, {})", .pos.x, .pos.y)]
    PlayerOnBlock { name: String, pos: Pos },
}

/// Immutable description of one level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    name: String,
    grid: Grid,
    start: Pos,
    blocks: ArrayVec<BlockDef, MAX_BLOCK_COUNT>,
}

impl Level {
    /// Build a level from parts, validating every invariant the runtime relies on.
    pub fn new(
        name: impl Into<String>,
        grid: Grid,
        start: Pos,
        blocks: &[BlockDef],
    ) -> Result<Self, LevelError> {
        let name = name.into();

        if grid.width() == 0 || grid.height() == 0 {
            return Err(LevelError::Empty { name });
        }
        if grid.width() > MAX_GRID_DIM || grid.height() > MAX_GRID_DIM {
            return Err(LevelError::TooLarge {
                width: grid.width(),
                height: grid.height(),
                max: MAX_GRID_DIM,
                name,
            });
        }
        if blocks.len() >= MAX_BLOCK_COUNT {
            return Err(LevelError::TooManyBlocks {
                count: blocks.len(),
                max: MAX_BLOCK_COUNT,
                name,
            });
        }

        check_cell(&name, &grid, "player start", start)?;
        for (i, block) in blocks.iter().enumerate() {
            check_cell(&name, &grid, "block start", block.start)?;
            check_cell(&name, &grid, "block target", block.end)?;
            if block.start == start {
                return Err(LevelError::PlayerOnBlock { name, pos: start });
            }
            if blocks[..i].iter().any(|other| other.start == block.start) {
                return Err(LevelError::OverlappingBlocks {
                    name,
                    pos: block.start,
                });
            }
        }

        let mut defs = ArrayVec::new();
        defs.extend(blocks.iter().copied());

        Ok(Self {
            name,
            grid,
            start,
            blocks: defs,
        })
    }

    /// Parse a level from text rows (top row first).
    ///
    /// Short rows are padded with empty floor up to the widest row.
    ///
    /// # Examples
    ///
    /// ```
    /// use sokoban_core::Level;
    /// use sokoban_types::Pos;
    ///
    /// let level = Level::from_text("tiny", &["#####", "#@$.#", "#####"]).unwrap();
    /// assert_eq!(level.width(), 5);
    /// assert_eq!(level.height(), 3);
    /// assert_eq!(level.start(), Pos::new(1, 1));
    /// assert_eq!(level.blocks()[0].start, Pos::new(2, 1));
    /// assert_eq!(level.blocks()[0].end, Pos::new(3, 1));
    /// ```
    pub fn from_text(name: &str, rows: &[&str]) -> Result<Self, LevelError> {
        if rows.is_empty() {
            return Err(LevelError::Empty {
                name: name.to_string(),
            });
        }

        let height = rows.len() as i32;
        let width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0) as i32;
        if width > MAX_GRID_DIM || height > MAX_GRID_DIM {
            return Err(LevelError::TooLarge {
                name: name.to_string(),
                width,
                height,
                max: MAX_GRID_DIM,
            });
        }

        let mut grid = Grid::new(width, height);
        let mut player = None;
        let mut starts = Vec::new();
        let mut targets = Vec::new();

        for (row, line) in rows.iter().enumerate() {
            // Text rows run top to bottom; the grid's y axis runs bottom to top.
            let y = height - 1 - row as i32;
            for (column, glyph) in line.chars().enumerate() {
                let pos = Pos::new(column as i32, y);
                match glyph {
                    '#' => {
                        grid.set(pos, Tile::Wall);
                    }
                    ' ' | '-' | '_' => {}
                    '.' => targets.push(pos),
                    '$' => starts.push(pos),
                    '*' => {
                        starts.push(pos);
                        targets.push(pos);
                    }
                    '@' | '+' => {
                        if player.is_some() {
                            return Err(LevelError::MultiplePlayers {
                                name: name.to_string(),
                            });
                        }
                        player = Some(pos);
                        if glyph == '+' {
                            targets.push(pos);
                        }
                    }
                    _ => {
                        return Err(LevelError::InvalidGlyph {
                            name: name.to_string(),
                            glyph,
                            column,
                            row,
                        })
                    }
                }
            }
        }

        let Some(start) = player else {
            return Err(LevelError::MissingPlayer {
                name: name.to_string(),
            });
        };
        if starts.len() != targets.len() {
            return Err(LevelError::BlockTargetMismatch {
                name: name.to_string(),
                blocks: starts.len(),
                targets: targets.len(),
            });
        }

        let blocks: Vec<BlockDef> = starts
            .into_iter()
            .zip(targets)
            .map(|(start, end)| BlockDef { start, end })
            .collect();

        Self::new(name, grid, start, &blocks)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> i32 {
        self.grid.width()
    }

    pub fn height(&self) -> i32 {
        self.grid.height()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Player spawn tile
    pub fn start(&self) -> Pos {
        self.start
    }

    pub fn blocks(&self) -> &[BlockDef] {
        &self.blocks
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }
}

fn check_cell(name: &str, grid: &Grid, what: &'static str, pos: Pos) -> Result<(), LevelError> {
    if !grid.contains(pos) {
        return Err(LevelError::OutOfBounds {
            name: name.to_string(),
            what,
            pos,
        });
    }
    if grid.is_wall(pos) {
        return Err(LevelError::OnWall {
            name: name.to_string(),
            what,
            pos,
        });
    }
    Ok(())
}
