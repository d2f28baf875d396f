use hecs::World;

use crate::{Paddle, PaddleIntent, Side};

/// Write this frame's intents onto the paddle entities
pub fn apply_intents(world: &mut World, left: PaddleIntent, right: PaddleIntent) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        *intent = match paddle.side {
            Side::Left => left,
            Side::Right => right,
        };
    }
}
