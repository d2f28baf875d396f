//! Status line texts shown to the players

use crate::Side;

pub const PRESS_START: &str = "Press Start or Space to begin.";
pub const SERVE_INCOMING: &str = "Serve incoming...";

pub fn point_for(side: Side) -> String {
    format!("Point for {side}!")
}

pub fn winner(side: Side) -> String {
    format!("{side} wins! Press Start or Space to play again.")
}
