//=========================================================================
// Canvas
//=========================================================================
//
// Software rasteriser for draw lists.
//
// Architecture:
//   DrawList → render() → logical XRGB pixels → blit_scaled() → surface
//
// All drawing is clipped to the canvas. Fractional coordinates are rounded
// to the nearest pixel.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::font::{glyph, scale_for, text_size, GLYPH_ADVANCE, GLYPH_WIDTH};
use super::{Color, DrawCommand, DrawList, TextAnchor};
use crate::core::geometry::{Rect, Vec2};

//=== Canvas ==============================================================

/// Fixed-size XRGB pixel buffer in logical coordinates.
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Canvas {
    //--- Construction -----------------------------------------------------

    /// Creates a black canvas.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "Canvas size must be positive");
        Self {
            width,
            height,
            pixels: vec![0; (width * height) as usize],
        }
    }

    //--- Accessors --------------------------------------------------------

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Returns the pixel at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x < self.width && y < self.height {
            Some(self.pixels[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    //--- Rendering --------------------------------------------------------

    /// Executes every command of `list` in order.
    pub fn render(&mut self, list: &DrawList) {
        for command in list.commands() {
            match command {
                DrawCommand::Clear(color) => self.pixels.fill(color.to_u32()),
                DrawCommand::FillRect { rect, color } => self.fill_rect(*rect, *color),
                DrawCommand::StrokeRect { rect, color, width } => {
                    self.stroke_rect(*rect, *color, *width)
                }
                DrawCommand::Text { text, anchor, size, color } => {
                    self.draw_text(text, *anchor, *size, *color)
                }
                DrawCommand::Sprite { rect, tint, .. } => {
                    self.fill_rect(*rect, *tint);
                    self.stroke_rect(*rect, tint.shade(0.55), 2.0);
                }
            }
        }
    }

    /// Copies the canvas into `dst` (`dst_w`×`dst_h`) with nearest-neighbour scaling.
    ///
    /// Does nothing if `dst` is smaller than `dst_w * dst_h`.
    pub fn blit_scaled(&self, dst: &mut [u32], dst_w: u32, dst_h: u32) {
        if dst_w == 0 || dst_h == 0 || dst.len() < (dst_w * dst_h) as usize {
            return;
        }

        for dy in 0..dst_h {
            let sy = (dy as u64 * self.height as u64 / dst_h as u64) as u32;
            let src_row = (sy * self.width) as usize;
            let dst_row = (dy * dst_w) as usize;

            for dx in 0..dst_w {
                let sx = (dx as u64 * self.width as u64 / dst_w as u64) as u32;
                dst[dst_row + dx as usize] = self.pixels[src_row + sx as usize];
            }
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let x0 = (rect.left().round() as i64).clamp(0, self.width as i64) as u32;
        let x1 = (rect.right().round() as i64).clamp(0, self.width as i64) as u32;
        let y0 = (rect.top().round() as i64).clamp(0, self.height as i64) as u32;
        let y1 = (rect.bottom().round() as i64).clamp(0, self.height as i64) as u32;

        if x1 <= x0 || y1 <= y0 {
            return;
        }

        let value = color.to_u32();
        for y in y0..y1 {
            let row = (y * self.width) as usize;
            self.pixels[row + x0 as usize..row + x1 as usize].fill(value);
        }
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32) {
        let t = width.max(1.0).min(rect.w / 2.0).min(rect.h / 2.0);
        self.fill_rect(Rect::new(rect.x, rect.y, rect.w, t), color);
        self.fill_rect(Rect::new(rect.x, rect.bottom() - t, rect.w, t), color);
        self.fill_rect(Rect::new(rect.x, rect.y, t, rect.h), color);
        self.fill_rect(Rect::new(rect.right() - t, rect.y, t, rect.h), color);
    }

    fn draw_text(&mut self, text: &str, anchor: TextAnchor, size: f32, color: Color) {
        let origin = match anchor {
            TextAnchor::TopLeft(pos) => pos,
            TextAnchor::Center(center) => {
                let (w, h) = text_size(text, size);
                Vec2::new(center.x - w / 2.0, center.y - h / 2.0)
            }
        };

        let scale = scale_for(size);
        let ox = origin.x.round() as i32;
        let oy = origin.y.round() as i32;

        for (i, ch) in text.chars().enumerate() {
            let gx = ox + i as i32 * GLYPH_ADVANCE * scale;
            for (row, &bits) in glyph(ch).iter().enumerate() {
                for col in 0..GLYPH_WIDTH {
                    if (bits >> (GLYPH_WIDTH - 1 - col)) & 1 == 0 {
                        continue;
                    }
                    let px = gx + col * scale;
                    let py = oy + row as i32 * scale;
                    self.fill_rect(
                        Rect::new(px as f32, py as f32, scale as f32, scale as f32),
                        color,
                    );
                }
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
