use crate::{Aabb, Ball, Config, Events, Paddle, Side};
use hecs::World;

/// Deflection angle for a ball meeting a paddle whose top edge is at `paddle_y`.
///
/// Zero for a dead-center hit, growing linearly to ±`max_bounce_angle` at the
/// paddle's ends. Hits beyond the ends (the ball overhanging a corner) are
/// clamped to the maximum.
pub fn bounce_angle(ball_y: f32, paddle_y: f32, config: &Config) -> f32 {
    let half_height = config.paddle_height / 2.0;
    let relative = ((ball_y - (paddle_y + half_height)) / half_height).clamp(-1.0, 1.0);
    relative * config.max_bounce_angle
}

/// Check ball collisions with walls and paddles
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    let mut paddles: Vec<(Side, f32)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| (paddle.side, paddle.y))
        .collect();
    paddles.sort_by_key(|(side, _)| *side == Side::Right);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        bounce_off_walls(ball, config, events);

        for &(side, paddle_y) in &paddles {
            bounce_off_paddle(ball, side, paddle_y, config, events);
        }
    }
}

fn bounce_off_walls(ball: &mut Ball, config: &Config, events: &mut Events) {
    let radius = config.ball_radius;

    if ball.pos.y - radius <= 0.0 {
        ball.pos.y = radius;
        ball.vel.y = ball.vel.y.abs();
        events.ball_hit_wall = true;
    }

    if ball.pos.y + radius >= config.court_height {
        ball.pos.y = config.court_height - radius;
        ball.vel.y = -ball.vel.y.abs();
        events.ball_hit_wall = true;
    }
}

fn bounce_off_paddle(
    ball: &mut Ball,
    side: Side,
    paddle_y: f32,
    config: &Config,
    events: &mut Events,
) {
    // Only a ball travelling toward the paddle can hit it, so a ball still
    // inside the box after a bounce is not bounced again.
    let approaching = match side {
        Side::Left => ball.vel.x < 0.0,
        Side::Right => ball.vel.x > 0.0,
    };
    if !approaching {
        return;
    }

    let paddle = config.paddle_rect(side, paddle_y);
    if !Aabb::around_circle(ball.pos, config.ball_radius).overlaps(&paddle) {
        return;
    }

    // Push ball out in front of the paddle face
    ball.pos.x = match side {
        Side::Left => paddle.max.x + config.ball_radius,
        Side::Right => paddle.min.x - config.ball_radius,
    };

    let angle = bounce_angle(ball.pos.y, paddle_y, config);
    let speed = (ball.speed + config.ball_speed_increment).min(config.ball_speed_max);
    ball.launch(speed, angle, side.return_direction());

    log::trace!(
        "{side:?} paddle hit: angle {:.3} rad, speed {:.1}",
        angle,
        speed
    );
    events.ball_hit_paddle = true;
}
