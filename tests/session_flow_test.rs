//! Screen flow through a whole session: title, levels, credits and back.

use sokoban::core::{GameSession, Level, LevelCatalog, NullCanvas};
use sokoban::term::PixelCanvas;
use sokoban::types::{AttemptState, GameInput, Pos, Screen};

fn idle() -> GameInput {
    GameInput::default()
}

fn x() -> GameInput {
    GameInput {
        action_x: true,
        ..GameInput::default()
    }
}

fn z() -> GameInput {
    GameInput {
        action_z: true,
        ..GameInput::default()
    }
}

fn right() -> GameInput {
    GameInput {
        move_right: true,
        ..GameInput::default()
    }
}

fn one_level_session() -> GameSession {
    let catalog = LevelCatalog::from_tables(&[("Only", &["@$."])]).unwrap();
    GameSession::new(catalog)
}

fn span_texts(canvas: &PixelCanvas) -> Vec<&str> {
    canvas.spans().iter().map(|s| s.text.as_str()).collect()
}

#[test]
fn title_waits_for_x() {
    let mut session = one_level_session();
    for _ in 0..30 {
        session.update(&right(), &mut NullCanvas);
    }
    assert_eq!(session.screen(), Screen::Title);
    assert!(session.runtime().is_none());
}

#[test]
fn starting_enters_the_first_level_in_the_same_frame() {
    let mut session = one_level_session();
    session.update(&x(), &mut NullCanvas);
    assert_eq!(session.screen(), Screen::Play);
    assert_eq!(session.level_index(), 0);
    let runtime = session.runtime().unwrap();
    assert_eq!(runtime.attempt(), AttemptState::InProgress);
    assert_eq!(runtime.player(), Pos::new(0, 0));
}

#[test]
fn finishing_the_last_level_rolls_credits() {
    let mut session = one_level_session();
    session.update(&x(), &mut NullCanvas);
    session.update(&right(), &mut NullCanvas);
    session.update(&idle(), &mut NullCanvas);
    assert_eq!(
        session.runtime().unwrap().attempt(),
        AttemptState::End
    );

    // Input other than X keeps the solved board on screen.
    session.update(&z(), &mut NullCanvas);
    session.update(&right(), &mut NullCanvas);
    assert_eq!(session.screen(), Screen::Play);

    session.update(&x(), &mut NullCanvas);
    assert_eq!(session.screen(), Screen::Credits);
    assert_eq!(session.level_index(), 1);
    assert!(session.runtime().is_none());
}

#[test]
fn replay_from_credits_starts_over_at_the_first_level() {
    let mut session = one_level_session();
    for input in [x(), right(), idle(), x()] {
        session.update(&input, &mut NullCanvas);
    }
    assert_eq!(session.screen(), Screen::Credits);

    session.update(&x(), &mut NullCanvas);
    assert_eq!(session.screen(), Screen::Credits);

    session.update(&z(), &mut NullCanvas);
    assert_eq!(session.screen(), Screen::Title);
    // The index is only reset when play starts.
    assert_eq!(session.level_index(), 1);

    session.update(&x(), &mut NullCanvas);
    assert_eq!(session.screen(), Screen::Play);
    assert_eq!(session.level_index(), 0);
    let runtime = session.runtime().unwrap();
    assert_eq!(runtime.attempt(), AttemptState::InProgress);
    assert_eq!(runtime.blocks(), &[Pos::new(1, 0)]);
}

#[test]
fn restart_resets_the_board_on_the_next_frame() {
    let catalog = LevelCatalog::new(vec![Level::from_text("Long", &["@$ ."]).unwrap()]);
    let mut session = GameSession::new(catalog);
    session.update(&x(), &mut NullCanvas);
    session.update(&right(), &mut NullCanvas);
    assert_eq!(session.runtime().unwrap().player(), Pos::new(1, 0));

    session.update(&z(), &mut NullCanvas);
    assert_eq!(session.runtime().unwrap().attempt(), AttemptState::Start);

    session.update(&idle(), &mut NullCanvas);
    let runtime = session.runtime().unwrap();
    assert_eq!(runtime.attempt(), AttemptState::InProgress);
    assert_eq!(runtime.player(), Pos::new(0, 0));
    assert_eq!(runtime.blocks(), &[Pos::new(1, 0)]);
}

#[test]
fn empty_catalog_goes_straight_to_credits() {
    let mut session = GameSession::new(LevelCatalog::default());
    session.update(&x(), &mut NullCanvas);
    assert_eq!(session.screen(), Screen::Credits);
    assert!(session.runtime().is_none());
}

#[test]
fn each_screen_draws_its_text() {
    let mut session = one_level_session();
    let mut canvas = PixelCanvas::new();

    session.update(&idle(), &mut canvas);
    let title = span_texts(&canvas);
    assert!(title.contains(&"Sokoban"));
    assert!(title.contains(&"Press X to start!"));
    assert!(title.contains(&"Arrows to move"));

    canvas.clear();
    session.update(&x(), &mut canvas);
    let play = span_texts(&canvas);
    assert!(play.contains(&"Only"));
    assert!(play.contains(&"Press Z to restart"));
    assert!(!play.contains(&"Press X to start!"));

    session.update(&right(), &mut NullCanvas);
    canvas.clear();
    session.update(&idle(), &mut canvas);
    assert!(span_texts(&canvas).contains(&"Press X for next"));

    canvas.clear();
    session.update(&x(), &mut canvas);
    let advancing = span_texts(&canvas);
    // The solved board is still drawn on the frame that leaves it.
    assert!(advancing.contains(&"Only"));
    assert!(advancing.contains(&"You finished!!!"));
    assert!(advancing.contains(&"Press Z to replay!"));
}

#[test]
fn frame_counter_counts_every_update() {
    let mut session = one_level_session();
    assert!(!session.is_initialized());
    for _ in 0..5 {
        session.update(&idle(), &mut NullCanvas);
    }
    assert!(session.is_initialized());
    assert_eq!(session.frame_count(), 5);
}

#[test]
fn title_animates_from_the_frame_counter() {
    let mut session = one_level_session();
    session.update(&idle(), &mut NullCanvas);
    let title = session.screens().title();
    assert!(title.blink());
    assert_eq!(title.patrol(), (1, 0));

    for _ in 1..11 {
        session.update(&idle(), &mut NullCanvas);
    }
    // Frames 0, 5 and 10 stepped the patrol; frame 10 toggled the blink.
    let title = session.screens().title();
    assert!(!title.blink());
    assert_eq!(title.patrol(), (3, 0));
}

#[test]
fn solved_prompt_blinks_on_period_frames() {
    let mut session = one_level_session();
    for input in [x(), right()] {
        session.update(&input, &mut NullCanvas);
    }
    // Frames 2..=9: solved, but no blink boundary yet.
    for _ in 2..10 {
        session.update(&idle(), &mut NullCanvas);
    }
    assert_eq!(session.runtime().unwrap().attempt(), AttemptState::End);
    assert!(!session.screens().play().blink());

    session.update(&idle(), &mut NullCanvas);
    assert!(session.screens().play().blink());
}

#[test]
fn credits_prompt_blinks_on_period_frames() {
    let mut session = GameSession::new(LevelCatalog::default());
    session.update(&x(), &mut NullCanvas);
    assert_eq!(session.screen(), Screen::Credits);
    assert!(session.screens().credits().blink());

    for _ in 1..10 {
        session.update(&idle(), &mut NullCanvas);
    }
    assert!(session.screens().credits().blink());
    session.update(&idle(), &mut NullCanvas);
    assert!(!session.screens().credits().blink());
}
