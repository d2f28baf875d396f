use std::f32::consts::{FRAC_PI_3, FRAC_PI_4};

/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Court (canvas pixels)
    pub const COURT_WIDTH: f32 = 800.0;
    pub const COURT_HEIGHT: f32 = 500.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 14.0;
    pub const PADDLE_HEIGHT: f32 = 90.0;
    pub const PADDLE_PADDING: f32 = 24.0; // gap between court edge and paddle
    pub const PADDLE_SPEED: f32 = 360.0; // px per second

    // Ball
    pub const BALL_RADIUS: f32 = 9.0;
    pub const BALL_SPEED_INITIAL: f32 = 320.0;
    pub const BALL_SPEED_MAX: f32 = 520.0;
    pub const BALL_SPEED_INCREMENT: f32 = 10.0; // added per paddle hit
    pub const MAX_BOUNCE_ANGLE: f32 = FRAC_PI_3;
    pub const SERVE_ANGLE: f32 = FRAC_PI_4; // serve launches within ±45°

    // Rules
    pub const WIN_SCORE: u8 = 11;
    pub const SERVE_DELAY: f32 = 1.2;

    // Physics
    pub const FIXED_DT: f32 = 1.0 / 120.0;
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps
}
