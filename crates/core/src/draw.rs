//! Drawing contract between the game and its presentation layer.
//!
//! The presentation layer implements [`Canvas`] in top-left-origin screen
//! space. The game thinks in lower-left-origin space; the helpers here do the
//! vertical flip, the bordered tiles, and the shadowed text.

use crate::types::{DrawColor, BORDER_SIZE, SCREEN_SIZE};

/// Raw drawing primitives, top-left origin, `SCREEN_SIZE` square screen.
pub trait Canvas {
    /// Fill a rectangle whose top-left corner is `(x, y)`.
    fn rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: DrawColor);

    /// Draw `text` with its top-left corner at `(x, y)`.
    fn text(&mut self, text: &str, x: i32, y: i32, color: DrawColor);
}

/// A canvas that discards everything (headless runs, benches).
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCanvas;

impl Canvas for NullCanvas {
    fn rect(&mut self, _x: i32, _y: i32, _width: i32, _height: i32, _color: DrawColor) {}

    fn text(&mut self, _text: &str, _x: i32, _y: i32, _color: DrawColor) {}
}

/// Fill a rectangle whose lower-left corner is `(x, y)`.
pub fn draw_rect<C: Canvas + ?Sized>(
    canvas: &mut C,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    color: DrawColor,
) {
    canvas.rect(x, SCREEN_SIZE - y - height, width, height, color);
}

/// A rectangle with a `BORDER_SIZE` frame in `border` around a `color` fill.
pub fn draw_bordered_rect<C: Canvas + ?Sized>(
    canvas: &mut C,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    color: DrawColor,
    border: DrawColor,
) {
    draw_rect(canvas, x, y, width, height, border);
    draw_rect(
        canvas,
        x + BORDER_SIZE,
        y + BORDER_SIZE,
        width - BORDER_SIZE * 2,
        height - BORDER_SIZE * 2,
        color,
    );
}

/// Text with a one-pixel drop shadow; `blink` drops the shadow pass.
///
/// Text keeps the canvas' top-left origin.
pub fn shadow_text<C: Canvas + ?Sized>(canvas: &mut C, text: &str, x: i32, y: i32, blink: bool) {
    if !blink {
        canvas.text(text, x - 1, y - 1, DrawColor::Three);
    }
    canvas.text(text, x, y, DrawColor::Four);
}
