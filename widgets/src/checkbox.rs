use menukit::{impl_handler_setters, Handler};

use crate::{
    interaction::intersects_bounds, Bounds, Canvas, CanvasError, Font, Interaction, Interactive,
    MenuColors, Mouse, Widget,
};

pub struct CheckBox {
    interaction: Interaction,
    checked: bool,
    colors: MenuColors,
    handler: Handler<bool>,
}

impl CheckBox {
    pub const SIZE: f32 = 30.0;
    pub const LINE_WIDTH: f32 = 4.0;
    pub const GLYPH_FONT: Font = Font::sized(26.0);
    pub const GLYPH_OFFSET: f32 = 5.0;
    pub const CHECK_GLYPH: &'static str = "\u{2713}";
    pub const CROSS_GLYPH: &'static str = "\u{2715}";

    /// Creates an unchecked box with its top left corner at `(x, y)`.
    pub fn new(x: f32, y: f32) -> Self {
        CheckBox {
            interaction: Interaction::new(Bounds::new(x, y, Self::SIZE, Self::SIZE)),
            checked: false,
            colors: MenuColors::default(),
            handler: Handler::new(),
        }
    }

    pub fn checked(&self) -> bool {
        self.checked
    }
    /// Sets the value without notifying the handler.
    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }
    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }
    pub fn with_colors(mut self, colors: MenuColors) -> Self {
        self.colors = colors;
        self
    }
}

impl_handler_setters!(CheckBox, handler, bool);

impl Interactive for CheckBox {
    fn interaction(&self) -> &Interaction {
        &self.interaction
    }
    fn interaction_mut(&mut self) -> &mut Interaction {
        &mut self.interaction
    }
    fn intersects(&self, mouse: &Mouse) -> bool {
        intersects_bounds(&self.interaction, mouse)
    }
}

impl Widget for CheckBox {
    fn update(&mut self, canvas: &dyn Canvas) {
        let was_not_clicked = !self.interaction.clicked;
        self.update_stats(canvas.mouse());

        if self.interaction.clicked && was_not_clicked {
            self.checked = !self.checked;
            log::debug!("checkbox toggled to {}", self.checked);
            self.handler.call(self.checked);
        }
    }

    fn draw(&self, canvas: &mut dyn Canvas) -> Result<(), CanvasError> {
        let bounds = self.interaction.bounds;
        canvas.set_stroke_color(self.colors.outline);
        canvas.set_line_width(Self::LINE_WIDTH);
        canvas.stroke_rect(bounds);

        canvas.set_font(Self::GLYPH_FONT);
        canvas.set_fill_color(self.colors.mark(self.checked));
        let glyph = if self.checked {
            Self::CHECK_GLYPH
        } else {
            Self::CROSS_GLYPH
        };
        canvas.fill_text(glyph, bounds.x() + Self::GLYPH_OFFSET, bounds.y())
    }
}
