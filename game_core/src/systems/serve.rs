use crate::{Config, Phase, PhaseAction, Time};

/// Advance the serve countdown. Returns true on the step that ends it.
pub fn tick_serve(phase: &mut Phase, time: &Time, config: &Config) -> bool {
    let Phase::Serving { timer } = phase else {
        return false;
    };

    *timer += time.dt;
    if *timer < config.serve_delay {
        return false;
    }

    phase.transition(PhaseAction::ServeElapsed).success
}
