//! Step orchestration: one discrete advancement of the simulation given an
//! elapsed-time delta and an optional input event.
//!
//! The step result communicates what happened to the embedding layer
//! (bins, simulator), keeping simulation logic separate from presentation.
//! Collision consequences stay caller-driven: the predicate in
//! [`crate::world::logic::check_collision`] is pure, and
//! [`MeadowGame::settle_collision`] is the one place `alive` flips.

use super::game_state::MeadowGame;
use crate::world::logic::{apply_gravity, check_collision, flap};
use crate::world::types::StepError;
use serde::{Deserialize, Serialize};

/// Discrete input event for one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepInput {
    /// Flap upward this step.
    Flap,
    /// No input; gravity only.
    Coast,
}

/// What happened during one step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepResult {
    /// A flap was applied this step.
    pub flapped: bool,
    /// Player vertical position after the step.
    pub y: f64,
    /// Player vertical velocity after the step.
    pub velocity: f64,
    /// Player still alive after the step.
    pub alive: bool,
}

impl MeadowGame {
    /// Apply the input, then integrate gravity over `dt`.
    ///
    /// Both sub-operations are no-ops on a dead player, so stepping a
    /// finished game is harmless. Rejects negative `dt`.
    pub fn step(&mut self, dt: f64, input: StepInput) -> Result<StepResult, StepError> {
        let flapped = input == StepInput::Flap && self.player.alive;
        if input == StepInput::Flap {
            flap(&mut self.player, &self.physics);
        }
        apply_gravity(&mut self.player, &self.physics, dt)?;
        Ok(StepResult {
            flapped,
            y: self.player.y,
            velocity: self.player.velocity,
            alive: self.player.alive,
        })
    }

    /// Test the player against the obstacle at `index` and apply the
    /// consequence: on a hit, the player dies. Returns whether a collision
    /// was settled. Out-of-range indices settle nothing.
    pub fn settle_collision(&mut self, index: usize) -> bool {
        let Some(obstacle) = self.obstacles.get(index) else {
            return false;
        };
        if check_collision(self.player.y, obstacle) {
            self.player.alive = false;
            true
        } else {
            false
        }
    }
}
