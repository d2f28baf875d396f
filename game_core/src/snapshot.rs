//! Read-only view of a frame, handed to the renderer and UI

use hecs::World;

use crate::{Ball, Config, Events, Paddle, PaddleIntent, Phase, Score, Side};

#[derive(Clone, Debug, PartialEq)]
pub struct PaddleSnapshot {
    pub side: Side,
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub dir: i8,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BallSnapshot {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub vx: f32,
    pub vy: f32,
    pub speed: f32,
}

/// Everything needed to draw one frame
#[derive(Clone, Debug, PartialEq)]
pub struct WorldSnapshot {
    pub court_width: f32,
    pub court_height: f32,
    pub left_paddle: PaddleSnapshot,
    pub right_paddle: PaddleSnapshot,
    pub ball: BallSnapshot,
    pub score: Score,
    pub phase: Phase,
    pub status: String,
    /// What happened during the frame, e.g. for sound cues
    pub events: Events,
}

impl WorldSnapshot {
    pub fn capture(
        world: &World,
        config: &Config,
        score: Score,
        phase: Phase,
        status: &str,
        events: &Events,
    ) -> Self {
        let center = config.court_center();
        let mut left_paddle = Self::resting_paddle(config, Side::Left);
        let mut right_paddle = Self::resting_paddle(config, Side::Right);
        for (_, (paddle, intent)) in world.query::<(&Paddle, &PaddleIntent)>().iter() {
            let slot = match paddle.side {
                Side::Left => &mut left_paddle,
                Side::Right => &mut right_paddle,
            };
            slot.y = paddle.y;
            slot.dir = intent.dir;
        }

        let ball = world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_, ball)| BallSnapshot {
                x: ball.pos.x,
                y: ball.pos.y,
                radius: config.ball_radius,
                vx: ball.vel.x,
                vy: ball.vel.y,
                speed: ball.speed,
            })
            .unwrap_or(BallSnapshot {
                x: center.x,
                y: center.y,
                radius: config.ball_radius,
                vx: 0.0,
                vy: 0.0,
                speed: 0.0,
            });

        Self {
            court_width: config.court_width,
            court_height: config.court_height,
            left_paddle,
            right_paddle,
            ball,
            score,
            phase,
            status: status.to_owned(),
            events: events.clone(),
        }
    }

    fn resting_paddle(config: &Config, side: Side) -> PaddleSnapshot {
        PaddleSnapshot {
            side,
            x: config.paddle_x(side),
            y: config.paddle_rest_y(),
            width: config.paddle_width,
            height: config.paddle_height,
            dir: 0,
        }
    }

    pub fn paddle(&self, side: Side) -> &PaddleSnapshot {
        match side {
            Side::Left => &self.left_paddle,
            Side::Right => &self.right_paddle,
        }
    }
}
