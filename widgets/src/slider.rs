use menukit::{impl_handler_setters, Handler};

use crate::{
    interaction::intersects_bounds, Bounds, Canvas, CanvasError, ConfigError, Interaction,
    Interactive, MenuColors, Mouse, Widget,
};

/// Horizontal integer slider over an inclusive range.
///
/// While the slider is held its value follows the pointer every frame, and the
/// handler receives the value on each of those frames.
pub struct Slider {
    interaction: Interaction,
    value: i32,
    min: i32,
    max: i32,
    colors: MenuColors,
    handler: Handler<i32>,
}

impl Slider {
    pub const HEIGHT: f32 = 40.0;
    pub const HANDLE_WIDTH: f32 = 10.0;

    /// Creates a slider starting at `min`.
    pub fn new(x: f32, y: f32, width: f32, min: i32, max: i32) -> Result<Self, ConfigError> {
        if min >= max {
            return Err(ConfigError::EmptyRange { min, max });
        }
        if !(width.is_finite() && width > 0.0) {
            return Err(ConfigError::InvalidWidth(width));
        }
        Ok(Slider {
            interaction: Interaction::new(Bounds::new(x, y, width, Self::HEIGHT)),
            value: min,
            min,
            max,
            colors: MenuColors::default(),
            handler: Handler::new(),
        })
    }

    pub fn value(&self) -> i32 {
        self.value
    }
    /// Sets the value, clamped to the range, without notifying the handler.
    pub fn set_value(&mut self, value: i32) {
        self.value = value.clamp(self.min, self.max);
    }
    pub fn with_value(mut self, value: i32) -> Self {
        self.set_value(value);
        self
    }
    pub fn min(&self) -> i32 {
        self.min
    }
    pub fn max(&self) -> i32 {
        self.max
    }
    pub fn with_colors(mut self, colors: MenuColors) -> Self {
        self.colors = colors;
        self
    }

    /// Maps a pointer x coordinate to a value, rounding halves up.
    pub fn value_at(&self, x: f32) -> i32 {
        let bounds = self.interaction.bounds;
        let pos = bounds.clamp_x(x) as f64;
        let range = (self.max as f64) - (self.min as f64);
        let percent = (pos - bounds.x() as f64) / bounds.width() as f64;
        let value = (self.min as f64 + percent * range + 0.5).floor();
        value as i32
    }

    /// X coordinate of the handle centre for the current value.
    pub fn handle_position(&self) -> f32 {
        let bounds = self.interaction.bounds;
        let range = (self.max as f64) - (self.min as f64);
        let percent = ((self.value as f64) - (self.min as f64)) / range;
        bounds.x() + (bounds.width() as f64 * percent) as f32
    }
}

impl_handler_setters!(Slider, handler, i32);

impl Interactive for Slider {
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

impl Widget for Slider {
    fn update(&mut self, canvas: &dyn Canvas) {
        let was_clicked = self.interaction.clicked;
        let mouse = canvas.mouse();
        self.update_stats(mouse);

        if self.interaction.clicked {
            if !was_clicked {
                log::debug!("slider drag started at x {}", mouse.position.x);
            }
            self.value = self.value_at(mouse.position.x);
            log::trace!("slider value {}", self.value);
            self.handler.call(self.value);
        }
    }

    fn draw(&self, canvas: &mut dyn Canvas) -> Result<(), CanvasError> {
        let bounds = self.interaction.bounds;
        canvas.set_fill_color(self.colors.track);
        canvas.fill_rect(Bounds::new(
            bounds.x(),
            bounds.y() + (bounds.height() / 4.),
            bounds.width(),
            bounds.height() / 2.,
        ));

        canvas.set_fill_color(self.colors.background(self.interaction.hovered));
        let pos = self.handle_position();
        canvas.fill_rect(Bounds::new(
            pos - (Self::HANDLE_WIDTH / 2.),
            bounds.y(),
            Self::HANDLE_WIDTH,
            bounds.height(),
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{DrawCommand, RecordingCanvas};
    use std::{cell::RefCell, rc::Rc};

    fn volume() -> Slider {
        Slider::new(20., 100., 200., 0, 100).unwrap()
    }

    #[test]
    fn rejects_empty_range() {
        assert_eq!(
            Slider::new(0., 0., 200., 5, 5).err(),
            Some(ConfigError::EmptyRange { min: 5, max: 5 })
        );
        assert!(Slider::new(0., 0., 200., 10, 0).is_err());
    }

    #[test]
    fn rejects_degenerate_width() {
        assert_eq!(
            Slider::new(0., 0., 0., 0, 100).err(),
            Some(ConfigError::InvalidWidth(0.))
        );
        assert!(Slider::new(0., 0., f32::NAN, 0, 100).is_err());
    }

    #[test]
    fn starts_at_min() {
        let slider = Slider::new(0., 0., 100., -5, 5).unwrap();
        assert_eq!(slider.value(), -5);
        assert_eq!(slider.bounds().height(), Slider::HEIGHT);
    }

    #[test]
    fn maps_edges_and_midpoint() {
        let slider = volume();
        assert_eq!(slider.value_at(20.), 0);
        assert_eq!(slider.value_at(220.), 100);
        assert_eq!(slider.value_at(120.), 50);
    }

    #[test]
    fn clamps_pointer_outside_track() {
        let slider = volume();
        assert_eq!(slider.value_at(-400.), 0);
        assert_eq!(slider.value_at(1000.), 100);
    }

    #[test]
    fn rounds_halves_up() {
        let slider = Slider::new(0., 0., 4., 0, 1).unwrap();
        assert_eq!(slider.value_at(2.), 1);
        let slider = Slider::new(0., 0., 4., -1, 0).unwrap();
        assert_eq!(slider.value_at(2.), 0);
    }

    #[test]
    fn drag_updates_every_frame() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen1 = seen.clone();
        let mut slider = volume().with_handler(move |value| seen1.borrow_mut().push(value));

        let mut canvas = RecordingCanvas::at(120., 120., true, true);
        slider.update(&canvas);
        canvas.set_mouse(120., 120., true, false);
        slider.update(&canvas);
        canvas.set_mouse(500., 400., true, false);
        slider.update(&canvas);
        assert_eq!(slider.value(), 100);

        canvas.set_mouse(20., 120., false, false);
        slider.update(&canvas);
        assert_eq!(slider.value(), 100);
        assert_eq!(*seen.borrow(), vec![50, 50, 100]);
    }

    #[test]
    fn hover_alone_does_not_change_value() {
        let mut slider = volume();
        slider.update(&RecordingCanvas::at(150., 120., false, false));
        assert!(slider.hovered());
        assert_eq!(slider.value(), 0);
    }

    #[test]
    fn set_value_clamps_silently() {
        let mut slider = volume();
        slider.set_value(250);
        assert_eq!(slider.value(), 100);
        slider.set_value(-3);
        assert_eq!(slider.value(), 0);
    }

    #[test]
    fn draws_track_and_centred_handle() {
        let slider = volume().with_value(50);
        let mut canvas = RecordingCanvas::new();
        slider.draw(&mut canvas).unwrap();
        assert_eq!(
            canvas.commands,
            vec![
                DrawCommand::FillRect {
                    rect: Bounds::new(20., 110., 200., 20.),
                    color: MenuColors::TRACK,
                },
                DrawCommand::FillRect {
                    rect: Bounds::new(115., 100., 10., 40.),
                    color: MenuColors::IDLE,
                },
            ]
        );
    }
}
