//! Simulation configuration.

use super::policy::FlapPolicy;
use crate::constants::DEFAULT_STEP_DT;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulation runs to perform
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Maximum steps per run before the run is declared survived
    pub max_steps: u64,

    /// Fixed time delta per step, in seconds
    pub dt: f64,

    /// Steps between reaching one obstacle and the next
    pub steps_per_obstacle: u64,

    /// Obstacles cleared between day/night phase advances
    pub obstacles_per_phase: u32,

    /// Flap policy driving the player
    pub policy: FlapPolicy,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per-run detail)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: None,
            max_steps: 100_000,
            dt: DEFAULT_STEP_DT,
            steps_per_obstacle: 90,
            obstacles_per_phase: 10,
            // Holding just above the start height keeps the opening gaps
            // survivable while the shrinking curve still bites later.
            policy: FlapPolicy::AltitudeHold { target: 280.0 },
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick config for checking that a policy holds up at all.
    pub fn quick_survival_test() -> Self {
        Self {
            num_runs: 100,
            max_steps: 20_000,
            ..Default::default()
        }
    }

    /// Long-haul config for probing the gap curve's late game.
    pub fn endurance_test() -> Self {
        Self {
            num_runs: 200,
            max_steps: 1_000_000,
            ..Default::default()
        }
    }
}
