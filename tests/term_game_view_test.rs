use sokoban::core::{GameSession, LevelCatalog};
use sokoban::term::{FrameBuffer, GameView, PixelCanvas, Viewport, PALETTE};
use sokoban::types::GameInput;

fn rendered_frames(inputs: &[GameInput], viewport: Viewport) -> FrameBuffer {
    let mut session = GameSession::new(LevelCatalog::builtin().unwrap());
    let mut canvas = PixelCanvas::new();
    for input in inputs {
        canvas.clear();
        session.update(input, &mut canvas);
    }
    GameView::default().render(&canvas, viewport)
}

fn all_text(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn term_view_renders_border_corners() {
    let fb = rendered_frames(&[GameInput::default()], Viewport::new(66, 34));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(65, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 33).unwrap().ch, '└');
    assert_eq!(fb.get(65, 33).unwrap().ch, '┘');
}

#[test]
fn title_screen_text_is_visible() {
    let fb = rendered_frames(&[GameInput::default()], Viewport::new(100, 40));
    let text = all_text(&fb);
    assert!(text.contains("Sokoban"));
    assert!(text.contains("Press X to start!"));
    assert!(text.contains("Arrows to move"));
}

#[test]
fn play_screen_shows_walls_in_the_darkest_colour() {
    let start = GameInput {
        action_x: true,
        ..GameInput::default()
    };
    let fb = rendered_frames(&[GameInput::default(), start], Viewport::new(66, 34));
    assert!(all_text(&fb).contains("Level 1"));

    let wall = PALETTE[3];
    let has_wall = (0..fb.height()).any(|y| {
        (0..fb.width()).any(|x| {
            fb.get(x, y)
                .is_some_and(|c| c.ch == '▀' && c.style.fg == wall && c.style.bg == wall)
        })
    });
    assert!(has_wall);
}

#[test]
fn render_into_reuses_the_framebuffer_across_sizes() {
    let mut canvas = PixelCanvas::new();
    let mut session = GameSession::new(LevelCatalog::builtin().unwrap());
    session.update(&GameInput::default(), &mut canvas);

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    view.render_into(&canvas, Viewport::new(80, 24), &mut fb);
    assert_eq!((fb.width(), fb.height()), (80, 24));

    view.render_into(&canvas, Viewport::new(120, 50), &mut fb);
    assert_eq!((fb.width(), fb.height()), (120, 50));
    assert_eq!(fb, view.render(&canvas, Viewport::new(120, 50)));
}

#[test]
fn row_cap_limits_the_screen_on_large_terminals() {
    let view = GameView::new(10);
    let layout = view.layout(Viewport::new(200, 80)).unwrap();
    assert_eq!((layout.cols, layout.rows), (20, 10));
    assert_eq!((layout.x, layout.y), (90, 35));
}
