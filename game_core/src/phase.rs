//! Game phase state machine
//!
//! Idle → Serving → Rallying ⇄ Serving → Stopped, with Start leading back
//! into Serving from Idle or Stopped.

use std::fmt;

use crate::Side;

/// Which part of the game loop is live
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Phase {
    /// Nothing has been played yet
    #[default]
    Idle,
    /// Ball parked at center; `timer` counts seconds since the serve began
    Serving { timer: f32 },
    /// Ball in play
    Rallying,
    /// A side reached the winning score
    Stopped { winner: Side },
}

/// Actions that trigger phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseAction {
    Start,
    ServeElapsed,
    PointScored,
    GameWon(Side),
}

/// Result of a phase transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionResult {
    pub success: bool,
    pub from: Phase,
    pub to: Phase,
    pub action: PhaseAction,
}

impl Phase {
    /// Next phase for a given action (if valid)
    pub fn next(&self, action: PhaseAction) -> Option<Phase> {
        match (*self, action) {
            (Phase::Idle, PhaseAction::Start) | (Phase::Stopped { .. }, PhaseAction::Start) => {
                Some(Phase::Serving { timer: 0.0 })
            }

            (Phase::Serving { .. }, PhaseAction::ServeElapsed) => Some(Phase::Rallying),

            (Phase::Rallying, PhaseAction::PointScored) => Some(Phase::Serving { timer: 0.0 }),

            (Phase::Serving { .. }, PhaseAction::GameWon(winner))
            | (Phase::Rallying, PhaseAction::GameWon(winner)) => Some(Phase::Stopped { winner }),

            _ => None,
        }
    }

    /// Attempt a transition, leaving the phase untouched when it is invalid
    pub fn transition(&mut self, action: PhaseAction) -> TransitionResult {
        let from = *self;
        match self.next(action) {
            Some(to) => {
                *self = to;
                TransitionResult {
                    success: true,
                    from,
                    to,
                    action,
                }
            }
            None => TransitionResult {
                success: false,
                from,
                to: from,
                action,
            },
        }
    }

    /// Serving or Rallying: paddles move and the frame pipeline runs
    pub fn is_running(&self) -> bool {
        matches!(self, Phase::Serving { .. } | Phase::Rallying)
    }

    pub fn is_rallying(&self) -> bool {
        matches!(self, Phase::Rallying)
    }

    pub fn winner(&self) -> Option<Side> {
        match self {
            Phase::Stopped { winner } => Some(*winner),
            _ => None,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Idle => write!(f, "Idle"),
            Phase::Serving { .. } => write!(f, "Serving"),
            Phase::Rallying => write!(f, "Rallying"),
            Phase::Stopped { .. } => write!(f, "Stopped"),
        }
    }
}
