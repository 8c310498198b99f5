//! Key events through the tracker and sampler into per-frame game input.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

use sokoban::input::{map_key, should_quit, ButtonTracker, InputSampler};
use sokoban::types::TICK_MS;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn release(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    }
}

#[test]
fn held_key_fires_once() {
    let mut tracker = ButtonTracker::new();
    let mut sampler = InputSampler::new();

    let right = map_key(key(KeyCode::Right)).unwrap();
    tracker.press(right);

    let first = sampler.sample(tracker.take());
    assert!(first.move_right);
    tracker.update(TICK_MS);

    // OS key repeat keeps refreshing the press.
    for _ in 0..5 {
        tracker.press(right);
        let input = sampler.sample(tracker.take());
        assert!(input.is_idle());
        tracker.update(TICK_MS);
    }
}

#[test]
fn tap_without_release_events_times_out() {
    let mut tracker = ButtonTracker::new().with_key_release_timeout_ms(40);
    let mut sampler = InputSampler::new();
    let x = map_key(key(KeyCode::Char('x'))).unwrap();

    tracker.press(x);
    assert!(sampler.sample(tracker.take()).action_x);

    for _ in 0..4 {
        tracker.update(TICK_MS);
        sampler.sample(tracker.take());
    }
    assert!(tracker.held().is_empty());

    tracker.press(x);
    assert!(sampler.sample(tracker.take()).action_x);
}

#[test]
fn press_and_release_between_frames_is_not_lost() {
    let mut tracker = ButtonTracker::new();
    let mut sampler = InputSampler::new();
    let event = release(KeyCode::Char('z'));
    let z = map_key(event).unwrap();

    tracker.press(z);
    tracker.release(z);
    assert!(sampler.sample(tracker.take()).action_z);
    assert!(!sampler.sample(tracker.take()).action_z);
}

#[test]
fn quit_keys_are_not_game_buttons() {
    for code in [KeyCode::Char('q'), KeyCode::Esc] {
        assert!(should_quit(key(code)));
        assert_eq!(map_key(key(code)), None);
    }
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert!(should_quit(ctrl_c));
}
