use crate::{Bounds, Mouse};

/// Hover and click state shared by every widget.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Interaction {
    pub bounds: Bounds,
    pub hovered: bool,
    pub clicked: bool,
}

impl Interaction {
    pub const fn new(bounds: Bounds) -> Self {
        Interaction {
            bounds,
            hovered: false,
            clicked: false,
        }
    }
}

/// Hit testing and the per-frame hover/click state machine.
///
/// Implementors expose their embedded [`Interaction`] and override
/// [`intersects`](Interactive::intersects) with their shape. The default hit
/// test never hits.
pub trait Interactive {
    fn interaction(&self) -> &Interaction;
    fn interaction_mut(&mut self) -> &mut Interaction;

    fn intersects(&self, _mouse: &Mouse) -> bool {
        false
    }

    /// Refreshes `hovered` and `clicked` from this frame's pointer.
    ///
    /// Leaving the bounds clears `hovered` but keeps `clicked`, so a press
    /// dragged outside stays active until the button is released.
    fn update_stats(&mut self, mouse: &Mouse) {
        let hit = self.intersects(mouse);
        let state = self.interaction_mut();
        if hit {
            state.hovered = true;
            if mouse.clicked {
                state.clicked = true;
            }
        } else {
            state.hovered = false;
        }

        if !mouse.down {
            state.clicked = false;
        }
    }

    fn bounds(&self) -> Bounds {
        self.interaction().bounds
    }
    fn hovered(&self) -> bool {
        self.interaction().hovered
    }
    fn clicked(&self) -> bool {
        self.interaction().clicked
    }
}

/// Axis-aligned rectangle test used by all stock widgets.
pub fn intersects_bounds(interaction: &Interaction, mouse: &Mouse) -> bool {
    interaction.bounds.contains(mouse.position)
}
