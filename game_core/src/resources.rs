use std::collections::VecDeque;

use crate::Side;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total simulated time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u8,  // Left player score
    pub right: u8, // Right player score
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_left(&mut self) {
        self.left = self.left.saturating_add(1);
    }

    pub fn increment_right(&mut self) {
        self.right = self.right.saturating_add(1);
    }

    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.increment_left(),
            Side::Right => self.increment_right(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Left is checked first; only one side can gain a point per step so
    /// both reaching the threshold at once never happens in play.
    pub fn has_winner(&self, win_score: u8) -> Option<Side> {
        if self.left >= win_score {
            Some(Side::Left)
        } else if self.right >= win_score {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during the last frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
    pub rally_started: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.left_scored = false;
        self.right_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
        self.rally_started = false;
    }

    pub fn record_point(&mut self, side: Side) {
        match side {
            Side::Left => self.left_scored = true,
            Side::Right => self.right_scored = true,
        }
    }
}

/// Messages for the UI layer, drained by the host after each frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    StatusChanged(String),
    ScoreChanged { left: u8, right: u8 },
}

/// Outbox of notices raised since the last drain.
///
/// The host is expected to drain it every frame. If it never does, only the
/// newest `Notices::CAPACITY` notices are kept.
#[derive(Debug, Clone, Default)]
pub struct Notices {
    pending: VecDeque<Notice>,
}

impl Notices {
    pub const CAPACITY: usize = 64;

    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, notice: Notice) {
        if self.pending.len() == Self::CAPACITY {
            self.pending.pop_front();
        }
        self.pending.push_back(notice);
    }

    pub fn status(&mut self, message: impl Into<String>) {
        self.push(Notice::StatusChanged(message.into()));
    }

    pub fn score(&mut self, score: &Score) {
        self.push(Notice::ScoreChanged {
            left: score.left,
            right: score.right,
        });
    }

    /// Most recent status text still waiting to be drained
    pub fn latest_status(&self) -> Option<&str> {
        self.pending.iter().rev().find_map(|notice| match notice {
            Notice::StatusChanged(message) => Some(message.as_str()),
            Notice::ScoreChanged { .. } => None,
        })
    }

    pub fn drain(&mut self) -> Vec<Notice> {
        self.pending.drain(..).collect()
    }
}
