//! Flap policies: per-step decision rules standing in for a player.
//!
//! Policies only read player state; all mutation goes through the core
//! step operations.

use crate::core::step::StepInput;
use crate::world::types::PlayerState;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A rule deciding, each step, whether the simulated player flaps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FlapPolicy {
    /// Flap every `period` steps, regardless of position.
    Metronome { period: u64 },
    /// Flap whenever the player has sunk below `target` (larger y = lower).
    AltitudeHold { target: f64 },
    /// Flap with probability `flap_chance` each step.
    Skittish { flap_chance: f64 },
}

impl FlapPolicy {
    /// Decide the input for the given step.
    pub fn decide(&self, step: u64, player: &PlayerState, rng: &mut impl Rng) -> StepInput {
        match self {
            Self::Metronome { period } => {
                let period = (*period).max(1);
                if step % period == 0 {
                    StepInput::Flap
                } else {
                    StepInput::Coast
                }
            }
            Self::AltitudeHold { target } => {
                if player.y > *target {
                    StepInput::Flap
                } else {
                    StepInput::Coast
                }
            }
            Self::Skittish { flap_chance } => {
                if rng.gen::<f64>() < *flap_chance {
                    StepInput::Flap
                } else {
                    StepInput::Coast
                }
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Metronome { .. } => "metronome",
            Self::AltitudeHold { .. } => "altitude-hold",
            Self::Skittish { .. } => "skittish",
        }
    }
}
