use glam::Vec2;
use palette::LinSrgba;
use thiserror::Error;

use crate::Bounds;

pub use glyph_brush::FontId;

/// Pointer state for one frame.
///
/// The snapshot is taken once per frame and shared by every widget updated
/// in that frame.
#[derive(Clone, Copy, PartialEq, Default, Debug)]
pub struct Mouse {
    pub position: Vec2,
    /// Primary button currently held.
    pub down: bool,
    /// Primary button pressed during this frame.
    pub clicked: bool,
}

impl Mouse {
    pub fn new(x: f32, y: f32, down: bool, clicked: bool) -> Self {
        Mouse {
            position: Vec2::new(x, y),
            down,
            clicked,
        }
    }
}

/// A font face and its pixel size.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Font {
    pub id: FontId,
    pub size: f32,
}

impl Font {
    pub const fn new(id: FontId, size: f32) -> Self {
        Font { id, size }
    }
    pub const fn sized(size: f32) -> Self {
        Font {
            id: FontId(0),
            size,
        }
    }
}

impl Default for Font {
    fn default() -> Self {
        Font::sized(14.0)
    }
}

#[derive(Clone, Copy, PartialEq, Default, Debug)]
pub struct TextMetrics {
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("font {0:?} is not loaded")]
    UnknownFont(FontId),
}

/// Drawing surface and input source handed to widgets every frame.
///
/// Colors are linear RGBA with components in `[0, 1]`. Text is positioned by
/// the top left corner of its layout box.
pub trait Canvas {
    fn mouse(&self) -> &Mouse;

    fn set_fill_color(&mut self, color: LinSrgba);
    fn set_stroke_color(&mut self, color: LinSrgba);
    fn set_line_width(&mut self, width: f32);
    fn set_font(&mut self, font: Font);

    fn fill_rect(&mut self, rect: Bounds);
    fn stroke_rect(&mut self, rect: Bounds);
    /// Draws `text` in the current font and fill color.
    fn fill_text(&mut self, text: &str, x: f32, y: f32) -> Result<(), CanvasError>;
    /// Measures `text` in the current font.
    fn measure_text(&mut self, text: &str) -> Result<TextMetrics, CanvasError>;
}
