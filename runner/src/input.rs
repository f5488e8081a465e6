use glam::Vec2;
use menukit_widgets::Mouse;

pub use miniquad::KeyCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

impl TryFrom<miniquad::MouseButton> for MouseButton {
    type Error = ();
    fn try_from(value: miniquad::MouseButton) -> Result<Self, Self::Error> {
        match value {
            miniquad::MouseButton::Left => Ok(MouseButton::Left),
            miniquad::MouseButton::Middle => Ok(MouseButton::Middle),
            miniquad::MouseButton::Right => Ok(MouseButton::Right),
            miniquad::MouseButton::Unknown => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Key { key: KeyCode, pressed: bool },
    MouseMotion { position: Vec2 },
    MouseButton { button: MouseButton, pressed: bool },
}

/// Folds window events into one [`Mouse`] snapshot per update.
///
/// A press and release that both land between two updates still produce one
/// snapshot with the button held and the click edge set; the release is
/// applied after that update.
#[derive(Default, Debug)]
pub struct PointerTracker {
    position: Vec2,
    held: bool,
    pressed: bool,
    release_pending: bool,
}

impl PointerTracker {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn handle_event(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::MouseMotion { position } => self.position = position,
            InputEvent::MouseButton {
                button: MouseButton::Left,
                pressed: true,
            } => {
                self.held = true;
                self.pressed = true;
                self.release_pending = false;
            }
            InputEvent::MouseButton {
                button: MouseButton::Left,
                pressed: false,
            } => {
                if self.pressed {
                    self.release_pending = true;
                } else {
                    self.held = false;
                }
            }
            _ => {}
        }
    }

    pub fn snapshot(&self) -> Mouse {
        Mouse {
            position: self.position,
            down: self.held,
            clicked: self.pressed,
        }
    }

    pub fn end_frame(&mut self) {
        self.pressed = false;
        if self.release_pending {
            self.held = false;
            self.release_pending = false;
        }
    }
}
