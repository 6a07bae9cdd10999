//! Meadow Glide - Deterministic Simulation Core
//!
//! A headless step engine for a peaceful, nature-themed flappy-style game:
//! gravity integration, obstacle spawning along a shrinking gap curve,
//! collision testing, score tracking, a day/night cycle, and adaptive
//! ambience labels. No rendering, input, audio, persistence, or threading —
//! this crate is the simulation state and the operations that advance it.

pub mod ambience;
pub mod build_info;
pub mod constants;
pub mod core;
pub mod simulator;
pub mod world;

pub use crate::ambience::types::{AmbienceCue, AmbienceState, TimeOfDay};
pub use crate::constants::DEFAULT_STEP_DT;
pub use crate::core::game_state::MeadowGame;
pub use crate::core::step::{StepInput, StepResult};
pub use crate::world::types::{
    Character, GapCurve, Obstacle, ObstacleStyle, PhysicsConfig, PlayerState, StepError,
};
