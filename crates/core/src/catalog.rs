//! Level catalog - the ordered, built-in list of levels
//!
//! Levels are validated once when the catalog is loaded. A malformed table is
//! an authoring mistake, reported before the first frame is played.

use crate::level::{Level, LevelError};

/// Built-in level tables, in play order: (name, rows top to bottom).
pub const BUILTIN_LEVELS: &[(&str, &[&str])] = &[
    (
        "Level 1",
        &[
            "#####",
            "#@$.#",
            "#####",
        ],
    ),
    (
        "Level 2",
        &[
            "######",
            "#    #",
            "#@$ .#",
            "#    #",
            "######",
        ],
    ),
    (
        "Level 3",
        &[
            "#######",
            "#.   .#",
            "#  $  #",
            "# $@  #",
            "#     #",
            "#######",
        ],
    ),
    (
        "Level 4",
        &[
            "########",
            "#@     #",
            "# $##$ #",
            "#  ##  #",
            "# .  . #",
            "########",
        ],
    ),
    (
        "Level 5",
        &[
            "  ######",
            "  #    #",
            "###$## #",
            "#   .  #",
            "# $  # #",
            "#.   @ #",
            "########",
        ],
    ),
    (
        "Level 6",
        &[
            "########",
            "#  .   #",
            "# $$$  #",
            "#. @ # #",
            "##   .##",
            " #####  ",
        ],
    ),
];

/// Ordered, immutable list of levels
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LevelCatalog {
    levels: Vec<Level>,
}

impl LevelCatalog {
    pub fn new(levels: Vec<Level>) -> Self {
        Self { levels }
    }

    /// Parse and validate the built-in level tables.
    pub fn builtin() -> Result<Self, LevelError> {
        Self::from_tables(BUILTIN_LEVELS)
    }

    /// Parse and validate text tables, stopping at the first bad level.
    pub fn from_tables(tables: &[(&str, &[&str])]) -> Result<Self, LevelError> {
        let levels = tables
            .iter()
            .map(|(name, rows)| Level::from_text(name, rows))
            .collect::<Result<Vec<_>, _>>()?;
        log::info!("loaded {} levels", levels.len());
        Ok(Self::new(levels))
    }

    /// Level at `index`, `None` past the end (including the "finished" sentinel).
    pub fn get(&self, index: usize) -> Option<&Level> {
        self.levels.get(index)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Level> {
        self.levels.iter()
    }
}
