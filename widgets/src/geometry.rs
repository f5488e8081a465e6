use glam::Vec2;

/// Axis-aligned rectangle in canvas pixels, origin at the top left.
#[derive(Copy, Clone, PartialEq, Default, Debug)]
pub struct Bounds {
    pub position: Vec2,
    pub size: Vec2,
}

impl Bounds {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Bounds {
            position: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    pub fn x(&self) -> f32 {
        self.position.x
    }
    pub fn y(&self) -> f32 {
        self.position.y
    }
    pub fn width(&self) -> f32 {
        self.size.x
    }
    pub fn height(&self) -> f32 {
        self.size.y
    }
    pub fn right(&self) -> f32 {
        self.position.x + self.size.x
    }
    pub fn bottom(&self) -> f32 {
        self.position.y + self.size.y
    }
    pub fn center(&self) -> Vec2 {
        self.position + (self.size / 2.0)
    }

    /// Containment test. All four edges count as inside.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.position.x
            && point.x <= self.right()
            && point.y >= self.position.y
            && point.y <= self.bottom()
    }

    /// Clamps `x` to the horizontal extent of the rectangle.
    pub fn clamp_x(&self, x: f32) -> f32 {
        x.max(self.position.x).min(self.right())
    }
}

impl From<[f32; 4]> for Bounds {
    fn from(rect: [f32; 4]) -> Self {
        Bounds::new(rect[0], rect[1], rect[2], rect[3])
    }
}
impl From<Bounds> for [f32; 4] {
    fn from(rect: Bounds) -> Self {
        [rect.position.x, rect.position.y, rect.size.x, rect.size.y]
    }
}
