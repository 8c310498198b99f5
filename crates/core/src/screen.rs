//! Screen state machine - Title, Play, and Credits
//!
//! Screens are evaluated in order within one frame, so a screen entered during
//! a frame also runs (and draws) in that frame. All transitions are driven by
//! edge-triggered buttons:
//!
//! - **Title** → Play on `action_x`, always starting at the first level
//! - **Play** → next level on `action_x` once solved, Credits after the last
//! - **Credits** → Title on `action_z`
//!
//! After the last level the level index is left one past the end of the
//! catalog. Credits never reads the catalog, and Title resets the index.

use crate::catalog::LevelCatalog;
use crate::draw::{draw_bordered_rect, draw_rect, shadow_text, Canvas};
use crate::level::Level;
use crate::runtime::LevelRuntime;
use crate::types::{
    AttemptState, DrawColor, GameInput, Pos, Screen, BLINK_PERIOD_FRAMES, PATROL_HEIGHT,
    PATROL_INVERSE_SPEED, PATROL_WIDTH, SCREEN_SIZE, TILE_DIM,
};

const PATROL_OFFSET_X: i32 = 20;
const PATROL_OFFSET_Y: i32 = 45;

fn toggle_blink(blink: &mut bool, frame: u32) {
    if frame % BLINK_PERIOD_FRAMES == 0 {
        *blink = !*blink;
    }
}

/// Cosmetic state of the title screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TitleScreenState {
    patrol_x: i32,
    patrol_y: i32,
    blink: bool,
}

impl TitleScreenState {
    /// Patrol box position in tiles, walking the rectangle's edge clockwise
    /// from the bottom-left corner.
    pub fn patrol(&self) -> (i32, i32) {
        (self.patrol_x, self.patrol_y)
    }

    pub fn blink(&self) -> bool {
        self.blink
    }

    fn step_patrol(&mut self) {
        if self.patrol_y == 0 && self.patrol_x != PATROL_WIDTH {
            self.patrol_x += 1;
        } else if self.patrol_y == PATROL_HEIGHT && self.patrol_x != 0 {
            self.patrol_x -= 1;
        } else if self.patrol_x == 0 {
            self.patrol_y -= 1;
        } else if self.patrol_x == PATROL_WIDTH {
            self.patrol_y += 1;
        }
    }
}

/// Cosmetic state of the play screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlayScreenState {
    blink: bool,
}

impl PlayScreenState {
    pub fn blink(&self) -> bool {
        self.blink
    }
}

/// Cosmetic state of the credits screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CreditsScreenState {
    blink: bool,
}

impl CreditsScreenState {
    pub fn blink(&self) -> bool {
        self.blink
    }
}

/// Which screen is active, the current level, and per-screen state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScreenMachine {
    screen: Screen,
    level_index: usize,
    runtime: Option<LevelRuntime>,
    title: TitleScreenState,
    play: PlayScreenState,
    credits: CreditsScreenState,
}

impl ScreenMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Index of the current level; equals the catalog length after the last level.
    pub fn level_index(&self) -> usize {
        self.level_index
    }

    /// The attempt in progress, present only while a level is loaded.
    pub fn runtime(&self) -> Option<&LevelRuntime> {
        self.runtime.as_ref()
    }

    pub fn title(&self) -> &TitleScreenState {
        &self.title
    }

    pub fn play(&self) -> &PlayScreenState {
        &self.play
    }

    pub fn credits(&self) -> &CreditsScreenState {
        &self.credits
    }

    /// Run one frame: handle input for the active screen(s) and draw them.
    pub fn update<C: Canvas + ?Sized>(
        &mut self,
        catalog: &LevelCatalog,
        input: &GameInput,
        frame: u32,
        canvas: &mut C,
    ) {
        if self.screen == Screen::Title {
            self.update_title(catalog, input, frame, canvas);
        }
        if self.screen == Screen::Play {
            self.update_play(catalog, input, frame, canvas);
        }
        if self.screen == Screen::Credits {
            self.update_credits(input, frame, canvas);
        }
    }

    fn set_screen(&mut self, screen: Screen) {
        log::info!("screen {} -> {}", self.screen.as_str(), screen.as_str());
        self.screen = screen;
    }

    fn update_title<C: Canvas + ?Sized>(
        &mut self,
        catalog: &LevelCatalog,
        input: &GameInput,
        frame: u32,
        canvas: &mut C,
    ) {
        if input.action_x {
            self.level_index = 0;
            self.runtime = catalog.get(0).map(LevelRuntime::new);
            self.set_screen(Screen::Play);
            return;
        }

        shadow_text(canvas, "Sokoban", 53, 20, false);
        shadow_text(canvas, "Solve", 61, 65, false);
        shadow_text(canvas, "puzzles.", 52, 75, false);

        if frame % PATROL_INVERSE_SPEED == 0 {
            self.title.step_patrol();
        }
        let (x, y) = self.title.patrol();
        draw_bordered_rect(
            canvas,
            x * TILE_DIM + PATROL_OFFSET_X + TILE_DIM,
            SCREEN_SIZE - (y * TILE_DIM + PATROL_OFFSET_Y + TILE_DIM),
            TILE_DIM,
            TILE_DIM,
            DrawColor::Two,
            DrawColor::Three,
        );

        toggle_blink(&mut self.title.blink, frame);
        shadow_text(canvas, "Press X to start!", 14, 120, self.title.blink);
        shadow_text(canvas, "Arrows to move", 26, 140, false);
    }

    fn update_play<C: Canvas + ?Sized>(
        &mut self,
        catalog: &LevelCatalog,
        input: &GameInput,
        frame: u32,
        canvas: &mut C,
    ) {
        let Some(level) = catalog.get(self.level_index) else {
            // Nothing left to play.
            self.runtime = None;
            self.set_screen(Screen::Credits);
            return;
        };
        let runtime = self
            .runtime
            .get_or_insert_with(|| LevelRuntime::new(level));

        if runtime.attempt() == AttemptState::Start {
            runtime.enter(level);
            log::debug!("entered level {} `{}`", self.level_index, level.name());
        }

        runtime.check_win(level);
        let next_level = match runtime.attempt() {
            AttemptState::InProgress => {
                let outcome = runtime.advance(level, input);
                log::trace!("frame {frame}: {outcome:?}");
                false
            }
            AttemptState::End => input.action_x,
            AttemptState::Start => false,
        };

        self.draw_play(level, frame, canvas);

        if next_level {
            self.next_level(catalog);
        }
    }

    fn next_level(&mut self, catalog: &LevelCatalog) {
        self.level_index += 1;
        match catalog.get(self.level_index) {
            Some(level) => {
                log::debug!("advancing to level {} `{}`", self.level_index, level.name());
                self.runtime = Some(LevelRuntime::new(level));
            }
            None => {
                self.runtime = None;
                self.set_screen(Screen::Credits);
            }
        }
    }

    fn draw_play<C: Canvas + ?Sized>(&mut self, level: &Level, frame: u32, canvas: &mut C) {
        let Some(runtime) = self.runtime.as_ref() else {
            return;
        };

        draw_rect(canvas, 0, 0, SCREEN_SIZE, SCREEN_SIZE, DrawColor::One);

        let offset_x = SCREEN_SIZE / 2 - level.width() * TILE_DIM / 2;
        let offset_y = SCREEN_SIZE / 2 - level.height() * TILE_DIM / 2;
        let tile = |canvas: &mut C, x: i32, y: i32, color: DrawColor| {
            draw_rect(
                canvas,
                x * TILE_DIM + offset_x,
                y * TILE_DIM + offset_y,
                TILE_DIM,
                TILE_DIM,
                color,
            );
        };

        let grid = level.grid();
        for y in 0..level.height() {
            for x in 0..level.width() {
                let color = if grid.is_wall(Pos::new(x, y)) {
                    DrawColor::Four
                } else {
                    DrawColor::One
                };
                tile(canvas, x, y, color);
            }
        }

        for def in level.blocks() {
            tile(canvas, def.end.x, def.end.y, DrawColor::Three);
        }
        for block in runtime.blocks() {
            tile(canvas, block.x, block.y, DrawColor::Two);
        }

        let player = runtime.player();
        draw_bordered_rect(
            canvas,
            player.x * TILE_DIM + offset_x,
            player.y * TILE_DIM + offset_y,
            TILE_DIM,
            TILE_DIM,
            DrawColor::Two,
            DrawColor::Three,
        );

        shadow_text(canvas, level.name(), 53, 3, false);
        match runtime.attempt() {
            AttemptState::InProgress => {
                shadow_text(canvas, "Press Z to restart", 10, SCREEN_SIZE - 10, false);
            }
            AttemptState::End => {
                toggle_blink(&mut self.play.blink, frame);
                shadow_text(canvas, "Press X for next", 17, SCREEN_SIZE - 10, self.play.blink);
            }
            AttemptState::Start => {}
        }
    }

    fn update_credits<C: Canvas + ?Sized>(&mut self, input: &GameInput, frame: u32, canvas: &mut C) {
        if input.action_z {
            self.set_screen(Screen::Title);
        }

        shadow_text(canvas, "Sokoban", 53, 20, false);
        shadow_text(canvas, "You finished!!!", 23, 70, false);

        toggle_blink(&mut self.credits.blink, frame);
        shadow_text(canvas, "Press Z to replay!", 11, 120, self.credits.blink);
        shadow_text(canvas, "Arrows to move", 26, 140, false);
    }
}
