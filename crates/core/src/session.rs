//! Game session - the per-frame entry point
//!
//! The host calls [`GameSession::update`] exactly once per displayed frame with
//! that frame's edge-triggered input. Everything the game does, including its
//! drawing, happens inside that call.

use crate::catalog::LevelCatalog;
use crate::draw::Canvas;
use crate::runtime::LevelRuntime;
use crate::screen::ScreenMachine;
use crate::types::{GameInput, Screen};

/// Complete game state for one run
#[derive(Debug, Clone)]
pub struct GameSession {
    catalog: LevelCatalog,
    initialized: bool,
    frame_count: u32,
    screens: ScreenMachine,
}

impl GameSession {
    /// Create a session over a validated catalog.
    ///
    /// State is set up lazily on the first [`update`](Self::update).
    pub fn new(catalog: LevelCatalog) -> Self {
        Self {
            catalog,
            initialized: false,
            frame_count: 0,
            screens: ScreenMachine::new(),
        }
    }

    /// Run one frame.
    ///
    /// # Example
    ///
    /// ```
    /// use sokoban_core::{GameSession, LevelCatalog, NullCanvas};
    /// use sokoban_types::{GameInput, Screen};
    ///
    /// let mut session = GameSession::new(LevelCatalog::builtin().unwrap());
    /// session.update(&GameInput::default(), &mut NullCanvas);
    /// assert_eq!(session.screen(), Screen::Title);
    ///
    /// let start = GameInput { action_x: true, ..GameInput::default() };
    /// session.update(&start, &mut NullCanvas);
    /// assert_eq!(session.screen(), Screen::Play);
    /// assert_eq!(session.frame_count(), 2);
    /// ```
    pub fn update<C: Canvas + ?Sized>(&mut self, input: &GameInput, canvas: &mut C) {
        if !self.initialized {
            self.initialized = true;
            self.frame_count = 0;
            self.screens = ScreenMachine::new();
            log::info!("session started with {} levels", self.catalog.len());
        }

        self.screens
            .update(&self.catalog, input, self.frame_count, canvas);

        self.frame_count = self.frame_count.wrapping_add(1);
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Frames run so far, wrapping at `u32::MAX`
    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    pub fn screen(&self) -> Screen {
        self.screens.screen()
    }

    pub fn level_index(&self) -> usize {
        self.screens.level_index()
    }

    pub fn runtime(&self) -> Option<&LevelRuntime> {
        self.screens.runtime()
    }

    pub fn screens(&self) -> &ScreenMachine {
        &self.screens
    }

    pub fn catalog(&self) -> &LevelCatalog {
        &self.catalog
    }

    /// Start a session at an arbitrary frame count (wraparound tests).
    #[doc(hidden)]
    pub fn with_frame_count(mut self, frame_count: u32) -> Self {
        self.initialized = true;
        self.frame_count = frame_count;
        self
    }
}
