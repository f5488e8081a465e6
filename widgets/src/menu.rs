use crate::{Canvas, CanvasError, Widget};

/// An ordered set of widgets driven as one screen.
///
/// `update` runs every widget before `draw` touches any of them, so handler
/// side effects from this frame are visible when the frame is drawn.
#[derive(Default)]
pub struct Menu {
    widgets: Vec<Box<dyn Widget>>,
}

impl Menu {
    pub fn new() -> Self {
        Menu {
            widgets: Vec::new(),
        }
    }

    pub fn add<W: Widget>(&mut self, widget: W) {
        self.widgets.push(Box::new(widget));
    }
    pub fn with<W: Widget>(mut self, widget: W) -> Self {
        self.add(widget);
        self
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    pub fn update(&mut self, canvas: &dyn Canvas) {
        for widget in self.widgets.iter_mut() {
            widget.update(canvas);
        }
    }

    /// Draws widgets in insertion order, stopping at the first canvas error.
    pub fn draw(&self, canvas: &mut dyn Canvas) -> Result<(), CanvasError> {
        for widget in self.widgets.iter() {
            widget.draw(canvas)?;
        }
        Ok(())
    }
}
