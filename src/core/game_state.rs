//! The game container owning all simulation state.

use crate::ambience::logic::update_mix;
use crate::ambience::types::{AmbienceState, TimeOfDay};
use crate::constants::{GAP_CENTER_BASE, GAP_CENTER_SPAN, GAP_CENTER_STEP};
use crate::world::types::{Character, GapCurve, Obstacle, ObstacleStyle, PhysicsConfig, PlayerState};
use serde::{Deserialize, Serialize};

/// Exclusive owner of the player, configs, obstacle list, score, time of
/// day, and ambience. No sharing, no back-references; every update goes
/// through a direct call on this container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeadowGame {
    pub physics: PhysicsConfig,
    pub gaps: GapCurve,
    pub player: PlayerState,
    /// Obstacles in spawn order. Never culled by the core; off-screen
    /// removal is the embedding application's concern.
    pub obstacles: Vec<Obstacle>,
    pub score: i64,
    pub time_of_day: TimeOfDay,
    pub ambience: AmbienceState,
}

impl MeadowGame {
    /// New game at dawn with zero score and an empty obstacle list.
    pub fn new(physics: PhysicsConfig, gaps: GapCurve, character: Character) -> Self {
        Self {
            physics,
            gaps,
            player: PlayerState::new(character),
            obstacles: Vec::new(),
            score: 0,
            time_of_day: TimeOfDay::Dawn,
            ambience: AmbienceState::default(),
        }
    }

    /// Spawn an obstacle at `x`.
    ///
    /// Gap size follows the difficulty curve for the current score. The gap
    /// center walks the fixed band `base + (score * step) mod span`, and the
    /// style rotates vine → branch → stem, so the spawn sequence is fully
    /// determined by the score.
    pub fn spawn_obstacle(&mut self, x: f64) {
        let gap_size = self.gaps.gap_for_score(self.score);
        let gap_center = GAP_CENTER_BASE + (self.score * GAP_CENTER_STEP).rem_euclid(GAP_CENTER_SPAN);
        let style = self.current_style();
        self.obstacles.push(Obstacle {
            x,
            gap_center: gap_center as f64,
            gap_size: gap_size as f64,
            style,
        });
    }

    /// Style the next spawn will use, rotating through the fixed order.
    fn current_style(&self) -> ObstacleStyle {
        let idx = self.score.rem_euclid(ObstacleStyle::ALL.len() as i64) as usize;
        ObstacleStyle::ALL[idx]
    }

    /// Add `passed` to the score.
    ///
    /// Negative deltas are accepted and decrement the score; there is no
    /// floor at zero.
    pub fn update_score(&mut self, passed: i64) {
        self.score += passed;
    }

    /// Move to the next day/night phase and re-derive the ambience cues.
    pub fn advance_time_of_day(&mut self) {
        self.time_of_day = self.time_of_day.next();
        update_mix(&mut self.ambience, self.time_of_day);
    }

    /// Read-only debug triple for inspection and printing.
    pub fn debug_state(&self) -> (i64, Character, TimeOfDay) {
        (self.score, self.player.character, self.time_of_day)
    }
}
