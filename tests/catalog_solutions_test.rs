//! Every built-in level can be finished with a known move sequence.

use sokoban::core::{GameSession, Level, LevelCatalog, NullCanvas};
use sokoban::types::{AttemptState, GameInput, Pos, Screen};

/// One move per frame: U, D, L or R.
const SOLUTIONS: &[&str] = &[
    "R",
    "RR",
    "UDLDLUURURR",
    "RDDUURRRDD",
    "RUUUULLLDDLDRDLRRU",
    "LLUURDURRDDLUDLRDR",
];

fn step(c: char) -> GameInput {
    let mut input = GameInput::default();
    match c {
        'U' => input.move_up = true,
        'D' => input.move_down = true,
        'L' => input.move_left = true,
        'R' => input.move_right = true,
        other => panic!("bad move {other:?}"),
    }
    input
}

fn press_x() -> GameInput {
    GameInput {
        action_x: true,
        ..GameInput::default()
    }
}

#[test]
fn every_level_has_a_solution() {
    let catalog = LevelCatalog::builtin().unwrap();
    assert_eq!(catalog.len(), SOLUTIONS.len());
}

#[test]
fn whole_game_can_be_played_through() {
    let mut session = GameSession::new(LevelCatalog::builtin().unwrap());
    session.update(&press_x(), &mut NullCanvas);

    for (index, moves) in SOLUTIONS.iter().enumerate() {
        assert_eq!(session.screen(), Screen::Play);
        assert_eq!(session.level_index(), index);

        for c in moves.chars() {
            session.update(&step(c), &mut NullCanvas);
        }
        session.update(&GameInput::default(), &mut NullCanvas);
        assert_eq!(
            session.runtime().unwrap().attempt(),
            AttemptState::End,
            "level {} not solved by {moves}",
            index + 1
        );
        session.update(&press_x(), &mut NullCanvas);
    }

    assert_eq!(session.screen(), Screen::Credits);
    assert_eq!(session.level_index(), SOLUTIONS.len());
}

#[test]
fn solving_is_reported_once_per_level() {
    let catalog = LevelCatalog::builtin().unwrap();
    for (level, moves) in catalog.iter().zip(SOLUTIONS) {
        let mut runtime = sokoban::core::LevelRuntime::new(level);
        runtime.enter(level);
        for c in moves.chars() {
            assert!(!runtime.check_win(level), "{} solved early", level.name());
            runtime.advance(level, &step(c));
        }
        assert!(runtime.check_win(level));
        assert!(runtime.check_win(level));
        assert_eq!(runtime.attempt(), AttemptState::End);
    }
}

/// Every non-wall tile connected to the player's start.
fn reachable_tiles(level: &Level) -> Vec<Pos> {
    let grid = level.grid();
    let mut seen = vec![level.start()];
    let mut queue = vec![level.start()];
    while let Some(pos) = queue.pop() {
        for (dx, dy) in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
            let next = pos.offset(dx, dy);
            if grid.contains(next) && !grid.is_wall(next) && !seen.contains(&next) {
                seen.push(next);
                queue.push(next);
            }
        }
    }
    seen
}

#[test]
fn shipped_levels_are_sealed_by_walls() {
    // Blocks only travel through tiles the player can reach, so a walled-in
    // area means no push in a built-in level can aim off the grid.
    let catalog = LevelCatalog::builtin().unwrap();
    for level in catalog.iter() {
        let reachable = reachable_tiles(level);
        for def in level.blocks() {
            assert!(reachable.contains(&def.start), "{}: block unreachable", level.name());
        }
        for pos in reachable {
            let on_edge = pos.x == 0
                || pos.y == 0
                || pos.x == level.width() - 1
                || pos.y == level.height() - 1;
            assert!(!on_edge, "{}: {pos:?} is open to the grid edge", level.name());
        }
    }
}

#[test]
fn flood_fill_finds_an_open_edge() {
    let level = Level::from_text("open", &["#####", "#@$. ", "#####"]).unwrap();
    assert!(reachable_tiles(&level).contains(&Pos::new(4, 1)));
}
