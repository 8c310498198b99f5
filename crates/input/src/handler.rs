//! Held-button tracker for terminal environments.
//!
//! Terminals report key presses reliably but many never report releases.
//! The tracker keeps a "held" set and, until it sees a real release event,
//! auto-releases a button once no press for it arrived within a timeout.
//! OS key repeat keeps refreshing a held button, so holding a key still
//! produces a single edge.
//!
//! Presses are also latched until the next [`ButtonTracker::take`], so a press
//! and release that both land between two frames are not lost.

use crate::buttons::{Button, Buttons};

// In terminals without key-release events, a short timeout prevents a single tap
// from turning into a sustained "held" state that swallows the next tap.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Tracks which buttons are down between frames.
#[derive(Debug, Clone)]
pub struct ButtonTracker {
    held: Buttons,
    latched: Buttons,
    idle_ms: [u32; Button::ALL.len()],
    key_release_timeout_ms: u32,
    release_events_seen: bool,
}

impl ButtonTracker {
    pub fn new() -> Self {
        Self {
            held: Buttons::NONE,
            latched: Buttons::NONE,
            idle_ms: [0; Button::ALL.len()],
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
            release_events_seen: false,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    /// Buttons currently considered down
    pub fn held(&self) -> Buttons {
        self.held
    }

    pub fn press(&mut self, button: Button) {
        self.held.insert(button);
        self.latched.insert(button);
        self.idle_ms[button.index()] = 0;
    }

    /// A real release event; from now on timeouts are no longer needed.
    pub fn release(&mut self, button: Button) {
        self.release_events_seen = true;
        self.held.remove(button);
        self.idle_ms[button.index()] = 0;
    }

    /// Advance timers by `elapsed_ms` and auto-release stale buttons.
    pub fn update(&mut self, elapsed_ms: u32) {
        if self.release_events_seen {
            return;
        }
        for button in self.held.iter() {
            let idle = &mut self.idle_ms[button.index()];
            *idle = idle.saturating_add(elapsed_ms);
            if *idle > self.key_release_timeout_ms {
                self.held.remove(button);
                *idle = 0;
            }
        }
    }

    /// Held buttons plus everything pressed since the previous call.
    pub fn take(&mut self) -> Buttons {
        let buttons = self.held.union(self.latched);
        self.latched = Buttons::NONE;
        buttons
    }

    pub fn reset(&mut self) {
        self.held = Buttons::NONE;
        self.latched = Buttons::NONE;
        self.idle_ms = [0; Button::ALL.len()];
    }
}

impl Default for ButtonTracker {
    fn default() -> Self {
        Self::new()
    }
}
