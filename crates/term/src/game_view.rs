//! GameView: maps a [`PixelCanvas`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Each terminal cell shows two vertically stacked pixels using the upper
//! half block: foreground is the top pixel, background the bottom one. The
//! screen is nearest-neighbour scaled to the largest area that fits, keeping
//! twice as many columns as rows so the square screen stays square.

use crate::canvas::{palette_rgb, PixelCanvas, TextSpan};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::SCREEN_SIZE;

/// Glyph height the game lays its text out for, in screen pixels.
const TEXT_HEIGHT: i32 = 8;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Screen area chosen for a viewport, border excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub x: u16,
    pub y: u16,
    pub cols: u16,
    pub rows: u16,
}

pub struct GameView {
    /// Largest number of terminal rows the screen may use.
    max_rows: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self { max_rows: 32 }
    }
}

impl GameView {
    pub fn new(max_rows: u16) -> Self {
        Self { max_rows }
    }

    /// Centered screen area for `viewport`, or `None` if nothing fits.
    pub fn layout(&self, viewport: Viewport) -> Option<Layout> {
        let rows = self
            .max_rows
            .min(viewport.height.saturating_sub(2))
            .min(viewport.width.saturating_sub(2) / 2);
        if rows == 0 {
            return None;
        }
        let cols = rows * 2;
        Some(Layout {
            x: (viewport.width - cols - 2) / 2 + 1,
            y: (viewport.height - rows - 2) / 2 + 1,
            cols,
            rows,
        })
    }

    /// Render the canvas into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is only resized
    /// when the viewport changes.
    pub fn render_into(&self, canvas: &PixelCanvas, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let Some(layout) = self.layout(viewport) else {
            fb.put_str(0, 0, "terminal too small", CellStyle::default());
            return;
        };

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        draw_border(
            fb,
            layout.x - 1,
            layout.y - 1,
            layout.cols + 2,
            layout.rows + 2,
            border,
        );

        self.draw_pixels(canvas, layout, fb);
        for span in canvas.spans() {
            self.draw_span(span, layout, fb);
        }
    }

    pub fn render(&self, canvas: &PixelCanvas, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(canvas, viewport, &mut fb);
        fb
    }

    fn draw_pixels(&self, canvas: &PixelCanvas, layout: Layout, fb: &mut FrameBuffer) {
        let cols = layout.cols as i32;
        let half_rows = layout.rows as i32 * 2;
        for row in 0..layout.rows {
            let top_y = ((4 * row as i32 + 1) * SCREEN_SIZE) / (2 * half_rows);
            let bottom_y = ((4 * row as i32 + 3) * SCREEN_SIZE) / (2 * half_rows);
            for col in 0..layout.cols {
                let px = ((2 * col as i32 + 1) * SCREEN_SIZE) / (2 * cols);
                let top = canvas.pixel(px, top_y).map(palette_rgb).unwrap_or_default();
                let bottom = canvas
                    .pixel(px, bottom_y)
                    .map(palette_rgb)
                    .unwrap_or_default();
                fb.put_char(
                    layout.x + col,
                    layout.y + row,
                    '▀',
                    CellStyle::new(top, bottom),
                );
            }
        }
    }

    fn draw_span(&self, span: &TextSpan, layout: Layout, fb: &mut FrameBuffer) {
        if span.x < 0 || span.y < 0 || span.x >= SCREEN_SIZE || span.y >= SCREEN_SIZE {
            return;
        }
        let col = (span.x * layout.cols as i32 / SCREEN_SIZE) as u16;
        let row = ((span.y + TEXT_HEIGHT / 2) * layout.rows as i32 / SCREEN_SIZE) as u16;
        let y = layout.y + row.min(layout.rows - 1);
        let right = layout.x + layout.cols;

        let fg = palette_rgb(span.color);
        for (x, ch) in (layout.x + col..right).zip(span.text.chars()) {
            // Keep the scenery colour behind each glyph.
            let bg = fb.get(x, y).map(|c| c.style.bg).unwrap_or_default();
            let mut style = CellStyle::new(fg, bg);
            if span.shadowed {
                style = style.bold();
            }
            fb.put_char(x, y, ch, style);
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}
