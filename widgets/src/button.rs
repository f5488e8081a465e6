use menukit::{impl_handler_setters, Handler};

use crate::{
    interaction::intersects_bounds, Bounds, Canvas, CanvasError, Font, Interaction, Interactive,
    MenuColors, Mouse, Widget,
};

/// A clickable rectangle with a centred label.
pub struct Button {
    interaction: Interaction,
    label: String,
    font: Font,
    colors: MenuColors,
    handler: Handler<()>,
}

impl Button {
    pub const FONT_SIZE: f32 = 20.0;

    pub fn new(label: &str, x: f32, y: f32, width: f32, height: f32) -> Self {
        Button {
            interaction: Interaction::new(Bounds::new(x, y, width, height)),
            label: label.to_owned(),
            font: Font::sized(Self::FONT_SIZE),
            colors: MenuColors::default(),
            handler: Handler::new(),
        }
    }

    pub fn set_font(&mut self, font: Font) {
        self.font = font;
    }
    pub fn with_colors(mut self, colors: MenuColors) -> Self {
        self.colors = colors;
        self
    }
}

impl_handler_setters!(Button, handler, ());

impl Interactive for Button {
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

impl Widget for Button {
    fn update(&mut self, canvas: &dyn Canvas) {
        let was_not_clicked = !self.interaction.clicked;
        self.update_stats(canvas.mouse());

        if self.interaction.clicked && was_not_clicked {
            log::debug!("button \"{}\" pressed", self.label);
            self.handler.call(());
        }
    }

    fn draw(&self, canvas: &mut dyn Canvas) -> Result<(), CanvasError> {
        let bounds = self.interaction.bounds;
        canvas.set_fill_color(self.colors.background(self.interaction.hovered));
        canvas.fill_rect(bounds);

        canvas.set_fill_color(self.colors.text);
        canvas.set_font(self.font);
        let metrics = canvas.measure_text(&self.label)?;
        let text_x = bounds.x() + (bounds.width() / 2.) - (metrics.width / 2.);
        let text_y = bounds.y() + (bounds.height() / 2.) - (self.font.size / 2.);
        canvas.fill_text(&self.label, text_x, text_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{DrawCommand, RecordingCanvas};
    use std::{cell::Cell, rc::Rc};

    fn counting_button() -> (Button, Rc<Cell<u32>>) {
        let count = Rc::new(Cell::new(0));
        let count1 = count.clone();
        let button = Button::new("Play", 0., 0., 100., 40.)
            .with_handler(move |()| count1.set(count1.get() + 1));
        (button, count)
    }

    #[test]
    fn fires_once_per_press() {
        let (mut button, count) = counting_button();
        let mut canvas = RecordingCanvas::at(50., 20., true, true);
        button.update(&canvas);
        assert_eq!(count.get(), 1);

        canvas.set_mouse(50., 20., true, false);
        button.update(&canvas);
        button.update(&canvas);
        assert_eq!(count.get(), 1);
        assert!(button.clicked());

        canvas.set_mouse(50., 20., false, false);
        button.update(&canvas);
        assert!(!button.clicked());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn second_press_fires_again() {
        let (mut button, count) = counting_button();
        let mut canvas = RecordingCanvas::at(50., 20., true, true);
        button.update(&canvas);
        canvas.set_mouse(50., 20., false, false);
        button.update(&canvas);
        canvas.set_mouse(60., 10., true, true);
        button.update(&canvas);
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn press_outside_does_not_fire() {
        let (mut button, count) = counting_button();
        button.update(&RecordingCanvas::at(150., 20., true, true));
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn missing_handler_is_tolerated() {
        let mut button = Button::new("Play", 0., 0., 100., 40.);
        button.update(&RecordingCanvas::at(50., 20., true, true));
        assert!(button.clicked());
    }

    #[test]
    fn draw_centres_label() {
        let button = Button::new("Play", 0., 0., 100., 40.);
        let mut canvas = RecordingCanvas::new();
        button.draw(&mut canvas).unwrap();
        assert_eq!(
            canvas.commands[0],
            DrawCommand::FillRect {
                rect: Bounds::new(0., 0., 100., 40.),
                color: MenuColors::IDLE,
            }
        );
        // 4 glyphs at 10px each
        match &canvas.commands[1] {
            DrawCommand::FillText {
                text, x, y, color, ..
            } => {
                assert_eq!(text, "Play");
                assert_eq!(*x, 30.);
                assert_eq!(*y, 10.);
                assert_eq!(*color, MenuColors::TEXT);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn draw_uses_hover_color() {
        let mut button = Button::new("Play", 0., 0., 100., 40.);
        let mut canvas = RecordingCanvas::at(10., 10., false, false);
        button.update(&canvas);
        button.draw(&mut canvas).unwrap();
        assert!(matches!(
            canvas.commands[0],
            DrawCommand::FillRect { color, .. } if color == MenuColors::HOVER
        ));
    }

    #[test]
    fn draw_propagates_measure_failure() {
        let mut button = Button::new("Play", 0., 0., 100., 40.);
        button.set_font(Font::new(crate::FontId(3), 20.));
        let mut canvas = RecordingCanvas::new();
        assert!(matches!(
            button.draw(&mut canvas),
            Err(CanvasError::UnknownFont(_))
        ));
    }
}
