use glam::Vec2;

use crate::{Aabb, ConfigError, Params, Side};

/// Game configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub court_width: f32,
    pub court_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_padding: f32,
    pub paddle_speed: f32,
    pub ball_radius: f32,
    pub ball_speed_initial: f32,
    pub ball_speed_max: f32,
    pub ball_speed_increment: f32,
    pub max_bounce_angle: f32,
    pub serve_angle: f32,
    pub serve_delay: f32,
    pub win_score: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            court_width: Params::COURT_WIDTH,
            court_height: Params::COURT_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_padding: Params::PADDLE_PADDING,
            paddle_speed: Params::PADDLE_SPEED,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_initial: Params::BALL_SPEED_INITIAL,
            ball_speed_max: Params::BALL_SPEED_MAX,
            ball_speed_increment: Params::BALL_SPEED_INCREMENT,
            max_bounce_angle: Params::MAX_BOUNCE_ANGLE,
            serve_angle: Params::SERVE_ANGLE,
            serve_delay: Params::SERVE_DELAY,
            win_score: Params::WIN_SCORE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default rules on a court sized to the render surface.
    pub fn for_court(width: f32, height: f32) -> Result<Self, ConfigError> {
        let config = Self {
            court_width: width,
            court_height: height,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let dimensions = [
            ("court_width", self.court_width),
            ("court_height", self.court_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_radius", self.ball_radius),
            ("ball_speed_initial", self.ball_speed_initial),
            ("ball_speed_max", self.ball_speed_max),
        ];
        for (name, value) in dimensions {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidDimension { name, value });
            }
        }

        let non_negative = [
            ("paddle_padding", self.paddle_padding),
            ("ball_speed_increment", self.ball_speed_increment),
            ("max_bounce_angle", self.max_bounce_angle),
            ("serve_angle", self.serve_angle),
            ("serve_delay", self.serve_delay),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidDimension { name, value });
            }
        }

        let min_width = 2.0 * (self.paddle_padding + self.paddle_width + self.ball_radius);
        let min_height = self.paddle_height.max(2.0 * self.ball_radius);
        if self.court_width <= min_width || self.court_height <= min_height {
            return Err(ConfigError::CourtTooSmall {
                width: self.court_width,
                height: self.court_height,
            });
        }

        if self.ball_speed_max < self.ball_speed_initial {
            return Err(ConfigError::SpeedCapBelowServe {
                initial: self.ball_speed_initial,
                max: self.ball_speed_max,
            });
        }

        if self.win_score == 0 {
            return Err(ConfigError::ZeroWinScore);
        }

        Ok(())
    }

    /// Left edge X of a paddle
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_padding,
            Side::Right => self.court_width - self.paddle_padding - self.paddle_width,
        }
    }

    /// Top edge Y that vertically centers a paddle
    pub fn paddle_rest_y(&self) -> f32 {
        self.court_height / 2.0 - self.paddle_height / 2.0
    }

    /// Clamp paddle top edge to court bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.court_height - self.paddle_height)
    }

    pub fn paddle_rect(&self, side: Side, y: f32) -> Aabb {
        Aabb::from_top_left(
            Vec2::new(self.paddle_x(side), y),
            Vec2::new(self.paddle_width, self.paddle_height),
        )
    }

    pub fn court_center(&self) -> Vec2 {
        Vec2::new(self.court_width / 2.0, self.court_height / 2.0)
    }
}
