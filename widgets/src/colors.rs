use palette::LinSrgba;

/// Palette shared by the stock widgets.
#[derive(Clone, Copy, Debug)]
pub struct MenuColors {
    pub idle: LinSrgba,
    pub hover: LinSrgba,
    pub text: LinSrgba,
    pub outline: LinSrgba,
    pub track: LinSrgba,
    pub affirmative: LinSrgba,
    pub negative: LinSrgba,
}

impl MenuColors {
    pub const IDLE: LinSrgba = LinSrgba::new(0.2, 0.6, 0.5, 1.0);
    pub const HOVER: LinSrgba = LinSrgba::new(0.3, 0.7, 0.6, 1.0);
    pub const TEXT: LinSrgba = LinSrgba::new(1.0, 1.0, 1.0, 1.0);
    pub const OUTLINE: LinSrgba = LinSrgba::new(0.0, 0.0, 0.0, 1.0);
    pub const TRACK: LinSrgba = LinSrgba::new(0.0, 0.0, 0.0, 1.0);
    pub const AFFIRMATIVE: LinSrgba = LinSrgba::new(0.2, 0.6, 0.5, 1.0);
    pub const NEGATIVE: LinSrgba = LinSrgba::new(0.6, 0.2, 0.2, 1.0);

    pub fn background(&self, hovered: bool) -> LinSrgba {
        if hovered {
            self.hover
        } else {
            self.idle
        }
    }
    pub fn mark(&self, checked: bool) -> LinSrgba {
        if checked {
            self.affirmative
        } else {
            self.negative
        }
    }
}

impl Default for MenuColors {
    fn default() -> Self {
        Self {
            idle: Self::IDLE,
            hover: Self::HOVER,
            text: Self::TEXT,
            outline: Self::OUTLINE,
            track: Self::TRACK,
            affirmative: Self::AFFIRMATIVE,
            negative: Self::NEGATIVE,
        }
    }
}
