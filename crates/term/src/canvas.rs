//! PixelCanvas: the game's drawing target, a 4-colour pixel screen.
//!
//! Rectangles are rasterised into a `SCREEN_SIZE` square of palette indices.
//! Text is not rasterised; it is kept as spans and overlaid as terminal
//! characters by the game view.

use crate::core::Canvas;
use crate::fb::Rgb;
use crate::types::{DrawColor, SCREEN_SIZE};

/// Default four-colour palette, lightest first.
pub const PALETTE: [Rgb; 4] = [
    Rgb::from_hex(0xe0f8cf),
    Rgb::from_hex(0x86c06c),
    Rgb::from_hex(0x306850),
    Rgb::from_hex(0x071821),
];

pub fn palette_rgb(color: DrawColor) -> Rgb {
    PALETTE[(color.index() - 1) as usize]
}

/// A piece of text drawn this frame, top-left origin in screen pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    pub text: String,
    pub x: i32,
    pub y: i32,
    pub color: DrawColor,
    /// Drawn over a one-pixel colour-3 shadow.
    pub shadowed: bool,
}

/// Pixel screen plus the text drawn on it this frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelCanvas {
    pixels: Vec<DrawColor>,
    spans: Vec<TextSpan>,
}

impl PixelCanvas {
    pub fn new() -> Self {
        let side = SCREEN_SIZE as usize;
        Self {
            pixels: vec![DrawColor::One; side * side],
            spans: Vec::new(),
        }
    }

    /// Start a new frame: background colour 1, no text.
    pub fn clear(&mut self) {
        self.pixels.fill(DrawColor::One);
        self.spans.clear();
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<DrawColor> {
        if x < 0 || y < 0 || x >= SCREEN_SIZE || y >= SCREEN_SIZE {
            return None;
        }
        Some(self.pixels[(y * SCREEN_SIZE + x) as usize])
    }

    pub fn spans(&self) -> &[TextSpan] {
        &self.spans
    }
}

impl Default for PixelCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas for PixelCanvas {
    fn rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: DrawColor) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = x.saturating_add(width).min(SCREEN_SIZE);
        let y1 = y.saturating_add(height).min(SCREEN_SIZE);
        if x0 >= x1 || y0 >= y1 {
            return;
        }
        for py in y0..y1 {
            let row = (py * SCREEN_SIZE) as usize;
            self.pixels[row + x0 as usize..row + x1 as usize].fill(color);
        }
    }

    fn text(&mut self, text: &str, x: i32, y: i32, color: DrawColor) {
        let is_shadow_of_this = self.spans.last().is_some_and(|last| {
            last.color == DrawColor::Three
                && !last.shadowed
                && last.x == x - 1
                && last.y == y - 1
                && last.text == text
        });
        if is_shadow_of_this {
            self.spans.pop();
        }
        self.spans.push(TextSpan {
            text: text.to_string(),
            x,
            y,
            color,
            shadowed: is_shadow_of_this,
        });
    }
}
