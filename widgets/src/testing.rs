use palette::LinSrgba;

use crate::{Bounds, Canvas, CanvasError, Font, Mouse, TextMetrics};

#[derive(Clone, PartialEq, Debug)]
pub enum DrawCommand {
    FillRect {
        rect: Bounds,
        color: LinSrgba,
    },
    StrokeRect {
        rect: Bounds,
        color: LinSrgba,
        line_width: f32,
    },
    FillText {
        text: String,
        x: f32,
        y: f32,
        color: LinSrgba,
        font: Font,
    },
}

/// Canvas that records draw calls. Glyphs measure half the font size wide.
pub struct RecordingCanvas {
    pub mouse: Mouse,
    pub commands: Vec<DrawCommand>,
    pub font_count: usize,
    fill: LinSrgba,
    stroke: LinSrgba,
    line_width: f32,
    font: Font,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        RecordingCanvas {
            mouse: Mouse::default(),
            commands: Vec::new(),
            font_count: 1,
            fill: LinSrgba::new(0., 0., 0., 1.),
            stroke: LinSrgba::new(0., 0., 0., 1.),
            line_width: 1.,
            font: Font::default(),
        }
    }
    pub fn at(x: f32, y: f32, down: bool, clicked: bool) -> Self {
        let mut canvas = Self::new();
        canvas.mouse = Mouse::new(x, y, down, clicked);
        canvas
    }
    pub fn set_mouse(&mut self, x: f32, y: f32, down: bool, clicked: bool) {
        self.mouse = Mouse::new(x, y, down, clicked);
    }
    fn check_font(&self) -> Result<(), CanvasError> {
        if self.font.id.0 < self.font_count {
            Ok(())
        } else {
            Err(CanvasError::UnknownFont(self.font.id))
        }
    }
}

impl Canvas for RecordingCanvas {
    fn mouse(&self) -> &Mouse {
        &self.mouse
    }
    fn set_fill_color(&mut self, color: LinSrgba) {
        self.fill = color;
    }
    fn set_stroke_color(&mut self, color: LinSrgba) {
        self.stroke = color;
    }
    fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
    }
    fn set_font(&mut self, font: Font) {
        self.font = font;
    }
    fn fill_rect(&mut self, rect: Bounds) {
        self.commands.push(DrawCommand::FillRect {
            rect,
            color: self.fill,
        });
    }
    fn stroke_rect(&mut self, rect: Bounds) {
        self.commands.push(DrawCommand::StrokeRect {
            rect,
            color: self.stroke,
            line_width: self.line_width,
        });
    }
    fn fill_text(&mut self, text: &str, x: f32, y: f32) -> Result<(), CanvasError> {
        self.check_font()?;
        self.commands.push(DrawCommand::FillText {
            text: text.to_owned(),
            x,
            y,
            color: self.fill,
            font: self.font,
        });
        Ok(())
    }
    fn measure_text(&mut self, text: &str) -> Result<TextMetrics, CanvasError> {
        self.check_font()?;
        Ok(TextMetrics {
            width: text.chars().count() as f32 * self.font.size / 2.,
            height: self.font.size,
        })
    }
}
