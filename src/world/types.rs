//! Core world data records: physics tuning, gap curve, player, obstacles.
//!
//! Everything here is plain data. The update operations that mutate a
//! [`PlayerState`] live in [`super::logic`].

use crate::constants::{
    DEFAULT_FLAP_IMPULSE, DEFAULT_GRAVITY, DEFAULT_MAX_FALL_SPEED, DEFAULT_MIN_GAP,
    DEFAULT_SHRINK_RATE, DEFAULT_START_GAP, START_HEIGHT,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced by the step operations.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum StepError {
    /// Negative time deltas would integrate backwards; reject them outright.
    #[error("invalid time delta {0}: dt must be >= 0")]
    InvalidTimeDelta(f64),
}

/// Immutable physics constants. Created once at startup, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// Downward acceleration in units/s².
    pub gravity: f64,
    /// Velocity assigned by a flap (negative = upward). Overrides, not additive.
    pub flap_impulse: f64,
    /// Terminal downward velocity in units/s.
    pub max_fall_speed: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            flap_impulse: DEFAULT_FLAP_IMPULSE,
            max_fall_speed: DEFAULT_MAX_FALL_SPEED,
        }
    }
}

/// Difficulty curve mapping cumulative score to the gap size obstacles present.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GapCurve {
    pub start_gap: i64,
    pub min_gap: i64,
    pub shrink_rate: f64,
}

impl Default for GapCurve {
    fn default() -> Self {
        Self {
            start_gap: DEFAULT_START_GAP,
            min_gap: DEFAULT_MIN_GAP,
            shrink_rate: DEFAULT_SHRINK_RATE,
        }
    }
}

impl GapCurve {
    /// Gap size for the given score, shrinking as the score grows.
    ///
    /// Clamped to `min_gap`, so the result never collapses below the floor
    /// no matter how large the score gets.
    pub fn gap_for_score(&self, score: i64) -> i64 {
        let shrink = (score as f64 * self.shrink_rate).floor() as i64;
        (self.start_gap - shrink).max(self.min_gap)
    }
}

/// Playable characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Character {
    Butterfly,
    Bee,
    Chickadee,
}

impl Character {
    pub const ALL: [Character; 3] = [Character::Butterfly, Character::Bee, Character::Chickadee];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Butterfly => "butterfly",
            Self::Bee => "bee",
            Self::Chickadee => "chickadee",
        }
    }
}

/// Mutable player state, advanced every simulation step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Vertical position in world units (float for smooth physics).
    pub y: f64,
    /// Vertical velocity in units/s (positive = downward).
    pub velocity: f64,
    /// Flips to false on a settled collision and never back within a session.
    pub alive: bool,
    pub character: Character,
}

impl PlayerState {
    /// New player at the fixed starting height with zero velocity.
    pub fn new(character: Character) -> Self {
        Self {
            y: START_HEIGHT,
            velocity: 0.0,
            alive: true,
            character,
        }
    }
}

/// Visual styles obstacles rotate through, in fixed spawn order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleStyle {
    Vine,
    Branch,
    Stem,
}

impl ObstacleStyle {
    /// Fixed rotation order used by the spawner.
    pub const ALL: [ObstacleStyle; 3] = [
        ObstacleStyle::Vine,
        ObstacleStyle::Branch,
        ObstacleStyle::Stem,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Vine => "vine",
            Self::Branch => "branch",
            Self::Stem => "stem",
        }
    }
}

/// A single obstacle with a vertical gap the player must pass through.
/// Immutable once spawned.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// X position at spawn time.
    pub x: f64,
    /// Vertical center of the gap.
    pub gap_center: f64,
    /// Full height of the gap opening.
    pub gap_size: f64,
    pub style: ObstacleStyle,
}
