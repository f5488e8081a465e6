//! Immediate-mode menu widgets.
//!
//! Widgets poll the pointer snapshot of the [`Canvas`] they are given once per
//! frame in [`Widget::update`] and redraw themselves in [`Widget::draw`].

mod button;
mod canvas;
mod checkbox;
mod colors;
mod error;
mod geometry;
pub mod interaction;
mod menu;
mod slider;

#[cfg(test)]
mod testing;

pub use button::Button;
pub use canvas::*;
pub use checkbox::CheckBox;
pub use colors::MenuColors;
pub use error::ConfigError;
pub use geometry::Bounds;
pub use interaction::{Interaction, Interactive};
pub use menu::Menu;
pub use slider::Slider;

pub use glam::Vec2;
pub use palette::LinSrgba;

/// Per-frame lifecycle shared by all widgets. Call `update` before `draw`.
pub trait Widget: 'static {
    fn update(&mut self, canvas: &dyn Canvas);
    fn draw(&self, canvas: &mut dyn Canvas) -> Result<(), CanvasError>;
}
