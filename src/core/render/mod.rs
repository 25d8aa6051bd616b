//=========================================================================
// Render System
//=========================================================================
//
// Platform-independent drawing for the games.
//
// Architecture:
// ```text
//  Logic Thread                          Main Thread
//  ┌──────────────────────┐             ┌──────────────────────────┐
//  │ Game::draw()         │             │ RedrawRequested          │
//  │   ↓                  │  DrawList   │   ↓                      │
//  │ DrawList (commands) ─┼────────────►│ Canvas::render()         │
//  └──────────────────────┘  (channel)  │   ↓                      │
//                                       │ Canvas::blit_scaled()    │
//                                       │   ↓                      │
//                                       │ softbuffer present       │
//                                       └──────────────────────────┘
// ```
//
// Games never touch pixels. They describe a frame as an ordered list of
// commands in logical coordinates; the platform rasterises the newest
// list it has received.
//
//=========================================================================

//=== Module Declarations =================================================

mod canvas;
mod font;

//=== Public API ==========================================================

pub use canvas::Canvas;
pub use font::text_size;

//=== Internal Dependencies ===============================================

use crate::core::geometry::{Rect, Vec2};

//=== Color ===============================================================

/// Opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const GRAY: Self = Self::rgb(128, 128, 128);
    pub const LIGHT_BLUE: Self = Self::rgb(173, 216, 230);
    pub const NAVY: Self = Self::rgb(0, 0, 128);
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Packs into `0x00RRGGBB` (softbuffer pixel format).
    #[inline]
    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Scales every channel by `factor` (clamped to 0..=1).
    pub fn shade(self, factor: f32) -> Self {
        let f = factor.clamp(0.0, 1.0);
        Self::rgb(
            (self.r as f32 * f) as u8,
            (self.g as f32 * f) as u8,
            (self.b as f32 * f) as u8,
        )
    }
}

//=== TextAnchor ==========================================================

/// How a text command's position relates to the rendered string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TextAnchor {
    /// Position is the top-left corner of the string.
    TopLeft(Vec2),

    /// Position is the centre of the string's bounding box.
    Center(Vec2),
}

//=== DrawCommand =========================================================

/// A single drawing operation in logical coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fills the whole frame.
    Clear(Color),

    FillRect { rect: Rect, color: Color },

    /// Outline drawn inside `rect`, `width` pixels thick.
    StrokeRect { rect: Rect, color: Color, width: f32 },

    Text {
        text: String,
        anchor: TextAnchor,
        size: f32,
        color: Color,
    },

    /// Named sprite stretched to `rect`.
    ///
    /// Sprite images are not loaded; the rasteriser draws a tinted plate
    /// with a darker border in their place.
    Sprite {
        name: &'static str,
        rect: Rect,
        tint: Color,
    },
}

//=== DrawList ============================================================

/// Ordered draw commands for one frame. Later commands paint over earlier ones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Recording --------------------------------------------------------

    pub fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    pub fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32) {
        self.commands.push(DrawCommand::StrokeRect { rect, color, width });
    }

    /// Draws `text` with its top-left corner at `pos`.
    pub fn text(&mut self, text: impl Into<String>, pos: Vec2, size: f32, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.into(),
            anchor: TextAnchor::TopLeft(pos),
            size,
            color,
        });
    }

    /// Draws `text` centred on `center`.
    pub fn text_centered(&mut self, text: impl Into<String>, center: Vec2, size: f32, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.into(),
            anchor: TextAnchor::Center(center),
            size,
            color,
        });
    }

    pub fn sprite(&mut self, name: &'static str, rect: Rect, tint: Color) {
        self.commands.push(DrawCommand::Sprite { name, rect, tint });
    }

    //--- Query API --------------------------------------------------------

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Iterates over the strings of all text commands, in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Iterates over `(name, rect)` of all sprite commands, in draw order.
    pub fn sprites(&self) -> impl Iterator<Item = (&'static str, Rect)> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Sprite { name, rect, .. } => Some((*name, *rect)),
            _ => None,
        })
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
