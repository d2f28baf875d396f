use thiserror::Error;

/// Reasons a [`crate::Config`] is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} must be a positive finite number, got {value}")]
    InvalidDimension { name: &'static str, value: f32 },

    #[error("court {width}x{height} is too small for the paddles and ball")]
    CourtTooSmall { width: f32, height: f32 },

    #[error("maximum ball speed {max} is below the serve speed {initial}")]
    SpeedCapBelowServe { initial: f32, max: f32 },

    #[error("winning score must be at least 1")]
    ZeroWinScore,
}
