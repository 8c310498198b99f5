use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sokoban::core::{GameSession, LevelCatalog, LevelRuntime, NullCanvas};
use sokoban::term::{FrameBuffer, GameView, PixelCanvas, Viewport};
use sokoban::types::GameInput;

fn press_x() -> GameInput {
    GameInput {
        action_x: true,
        ..GameInput::default()
    }
}

fn bench_session_frame(c: &mut Criterion) {
    let catalog = LevelCatalog::builtin().unwrap();
    let mut session = GameSession::new(catalog);
    session.update(&press_x(), &mut NullCanvas);
    let idle = GameInput::default();

    c.bench_function("session_frame_play", |b| {
        b.iter(|| {
            session.update(black_box(&idle), &mut NullCanvas);
        })
    });
}

fn bench_runtime_advance(c: &mut Criterion) {
    let catalog = LevelCatalog::builtin().unwrap();
    let level = catalog.get(catalog.len() - 1).unwrap();
    let mut runtime = LevelRuntime::new(level);
    runtime.enter(level);

    let left = GameInput {
        move_left: true,
        ..GameInput::default()
    };
    let right = GameInput {
        move_right: true,
        ..GameInput::default()
    };

    c.bench_function("runtime_advance_walk", |b| {
        b.iter(|| {
            runtime.advance(level, black_box(&left));
            runtime.advance(level, black_box(&right));
        })
    });
}

fn bench_draw_frame(c: &mut Criterion) {
    let catalog = LevelCatalog::builtin().unwrap();
    let mut session = GameSession::new(catalog);
    let mut canvas = PixelCanvas::new();
    session.update(&press_x(), &mut canvas);
    let idle = GameInput::default();

    c.bench_function("session_frame_pixel_canvas", |b| {
        b.iter(|| {
            canvas.clear();
            session.update(black_box(&idle), &mut canvas);
        })
    });
}

fn bench_game_view(c: &mut Criterion) {
    let catalog = LevelCatalog::builtin().unwrap();
    let mut session = GameSession::new(catalog);
    let mut canvas = PixelCanvas::new();
    session.update(&press_x(), &mut canvas);

    let view = GameView::default();
    let viewport = Viewport::new(120, 40);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    c.bench_function("game_view_render_into", |b| {
        b.iter(|| {
            view.render_into(black_box(&canvas), viewport, &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_session_frame,
    bench_runtime_advance,
    bench_draw_frame,
    bench_game_view
);
criterion_main!(benches);
