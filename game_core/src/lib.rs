pub mod clock;
pub mod components;
pub mod config;
pub mod error;
pub mod game;
pub mod geometry;
pub mod input;
pub mod params;
pub mod phase;
pub mod resources;
pub mod snapshot;
pub mod status;
pub mod systems;

pub use clock::*;
pub use components::*;
pub use config::*;
pub use error::*;
pub use game::*;
pub use geometry::*;
pub use input::*;
pub use params::*;
pub use phase::*;
pub use resources::*;
pub use snapshot::*;

use hecs::World;
use systems::*;

/// Clamp a host frame delta to `[0, MAX_DT]`; anything non-finite becomes 0
pub fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() {
        dt.clamp(0.0, Params::MAX_DT)
    } else {
        0.0
    }
}

/// Run the Pong simulation for one frame of `time.dt` seconds
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    config: &Config,
    phase: &mut Phase,
    score: &mut Score,
    events: &mut Events,
    notices: &mut Notices,
    rng: &mut GameRng,
) {
    let clamped_dt = sanitize_dt(time.dt);

    // Fixed micro-steps for stable physics
    let mut remaining_dt = clamped_dt;
    while remaining_dt > 0.0 && phase.is_running() {
        let step_dt = remaining_dt.min(Params::FIXED_DT);
        remaining_dt -= step_dt;

        let step_time = Time {
            dt: step_dt,
            now: time.now + (clamped_dt - remaining_dt),
        };

        // 1. Move paddles based on intents (also while serving)
        move_paddles(world, &step_time, config);

        if phase.is_rallying() {
            // 2. Move ball, then resolve walls and paddles
            move_ball(world, &step_time);
            check_collisions(world, config, events);

            // 3. Ball left the court: point and re-serve
            if let Some(scorer) = check_scoring(world, config, score, events, rng) {
                phase.transition(PhaseAction::PointScored);
                notices.score(score);
                notices.status(status::point_for(scorer));
                log::debug!(
                    "point for {scorer}, score {}-{}",
                    score.left,
                    score.right
                );
            }
        } else if tick_serve(phase, &step_time, config) {
            events.rally_started = true;
            notices.status("");
            log::debug!("serve delay over at t={:.2}s", step_time.now);
        }

        // 4. Winning score ends the game right after the point
        if let Some(winner) = check_win(phase, score, config) {
            notices.status(status::winner(winner));
            log::info!("{winner} wins {}-{}", score.left, score.right);
        }
    }

    time.now += clamped_dt - remaining_dt;
}

/// Helper to create a paddle entity, vertically centered
pub fn create_paddle(world: &mut World, config: &Config, side: Side) -> hecs::Entity {
    world.spawn((Paddle::new(side, config.paddle_rest_y()), PaddleIntent::new()))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
