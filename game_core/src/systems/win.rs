use crate::{Config, Phase, PhaseAction, Score, Side};

/// Stop the game once a side reaches the winning score. Returns the winner
/// on the step that ends the game.
pub fn check_win(phase: &mut Phase, score: &Score, config: &Config) -> Option<Side> {
    if !phase.is_running() {
        return None;
    }

    let winner = score.has_winner(config.win_score)?;
    phase
        .transition(PhaseAction::GameWon(winner))
        .success
        .then_some(winner)
}
