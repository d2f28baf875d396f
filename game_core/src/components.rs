use std::fmt;

use glam::Vec2;
use rand::Rng;

use crate::{Config, GameRng};

/// Which half of the court a paddle (or player) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Horizontal direction of a ball returned by this side's paddle
    pub fn return_direction(self) -> f32 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "Left Player"),
            Side::Right => write!(f, "Right Player"),
        }
    }
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32, // Top edge, clamped to court
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }
}

/// Movement intent for paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = up, 0 = stop, 1 = down
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Any out-of-range direction collapses to its sign
    pub fn from_dir(dir: i8) -> Self {
        Self { dir: dir.signum() }
    }

    /// Both keys held cancel out
    pub fn from_keys(up: bool, down: bool) -> Self {
        Self {
            dir: i8::from(down) - i8::from(up),
        }
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub speed: f32, // Magnitude of vel, reset on every serve
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            speed: vel.length(),
        }
    }

    /// Re-center the ball and give it a fresh serve velocity.
    ///
    /// Without `randomize_direction` the serve always heads right, which is
    /// what the opening serve of a game uses. The launch angle is random
    /// either way.
    pub fn reset(&mut self, config: &Config, randomize_direction: bool, rng: &mut GameRng) {
        self.pos = config.court_center();

        let direction = if randomize_direction && rng.0.gen_bool(0.5) {
            -1.0
        } else {
            1.0
        };
        let angle = rng.0.gen_range(-config.serve_angle..=config.serve_angle);

        self.launch(config.ball_speed_initial, angle, direction);
    }

    /// Set speed and heading. `direction` is the sign of the horizontal velocity.
    pub fn launch(&mut self, speed: f32, angle: f32, direction: f32) {
        self.speed = speed;
        self.vel = Vec2::new(direction * speed * angle.cos(), speed * angle.sin());
    }
}
