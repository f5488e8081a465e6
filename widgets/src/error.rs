use thiserror::Error;

/// Rejected widget construction parameters.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("slider range is empty: min {min} must be less than max {max}")]
    EmptyRange { min: i32, max: i32 },
    #[error("slider width must be positive and finite, got {0}")]
    InvalidWidth(f32),
}
