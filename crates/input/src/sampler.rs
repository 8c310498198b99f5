//! Edge detection: turns held buttons into one frame of [`GameInput`].

use crate::buttons::{Button, Buttons};
use crate::types::GameInput;

/// Remembers last frame's buttons so each press is reported once.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSampler {
    previous: Buttons,
}

impl InputSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report buttons that are down now and were up on the previous frame.
    ///
    /// # Examples
    ///
    /// ```
    /// use sokoban_input::{Button, Buttons, InputSampler};
    ///
    /// let mut sampler = InputSampler::new();
    /// let held = Buttons::NONE.with(Button::Right);
    ///
    /// assert!(sampler.sample(held).move_right);
    /// assert!(!sampler.sample(held).move_right);
    /// ```
    pub fn sample(&mut self, held: Buttons) -> GameInput {
        let pressed = held.pressed_since(self.previous);
        self.previous = held;
        GameInput {
            move_up: pressed.contains(Button::Up),
            move_down: pressed.contains(Button::Down),
            move_left: pressed.contains(Button::Left),
            move_right: pressed.contains(Button::Right),
            action_x: pressed.contains(Button::X),
            action_z: pressed.contains(Button::Z),
            reset: false,
            cycle_level: false,
        }
    }
}
