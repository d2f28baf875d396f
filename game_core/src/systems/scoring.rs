use crate::{Ball, Config, Events, GameRng, Score, Side};
use hecs::World;

/// Check if ball left the court. Awards the point, re-serves the ball with a
/// random direction and returns the side that scored.
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) -> Option<Side> {
    let mut scorer = None;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let side = if ball.pos.x + config.ball_radius < 0.0 {
            Side::Right
        } else if ball.pos.x - config.ball_radius > config.court_width {
            Side::Left
        } else {
            continue;
        };

        score.award(side);
        events.record_point(side);
        ball.reset(config, true, rng);
        scorer = Some(side);
    }

    scorer
}
