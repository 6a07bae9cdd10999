//! Pure update operations on player and obstacle state.
//!
//! All functions here are total over their stated domains except
//! [`apply_gravity`], which rejects negative time deltas instead of
//! integrating backwards.

use super::types::{Obstacle, PhysicsConfig, PlayerState, StepError};

/// Flap: override the vertical velocity with the flap impulse.
///
/// No-op on a dead player.
pub fn flap(player: &mut PlayerState, physics: &PhysicsConfig) {
    if player.alive {
        player.velocity = physics.flap_impulse;
    }
}

/// Advance the player by one forward-Euler step of `dt` seconds.
///
/// Velocity is capped at `max_fall_speed` first, then the position
/// integrates the capped velocity. The cap-then-integrate ordering is
/// load-bearing: swapping it changes trajectories near terminal velocity.
///
/// No-op on a dead player. Returns [`StepError::InvalidTimeDelta`] for
/// negative `dt`; `dt == 0` is allowed and leaves the player unchanged.
pub fn apply_gravity(
    player: &mut PlayerState,
    physics: &PhysicsConfig,
    dt: f64,
) -> Result<(), StepError> {
    if dt < 0.0 {
        return Err(StepError::InvalidTimeDelta(dt));
    }
    if !player.alive {
        return Ok(());
    }
    player.velocity = (player.velocity + physics.gravity * dt).min(physics.max_fall_speed);
    player.y += player.velocity * dt;
    Ok(())
}

/// True when `player_y` is outside the obstacle's gap.
///
/// The gap is the closed interval `[gap_center - gap_size/2,
/// gap_center + gap_size/2]`; sitting exactly on either edge is not a
/// collision. Pure predicate: the caller applies the consequence.
pub fn check_collision(player_y: f64, obstacle: &Obstacle) -> bool {
    let half_gap = obstacle.gap_size / 2.0;
    player_y < obstacle.gap_center - half_gap || player_y > obstacle.gap_center + half_gap
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::types::{Character, ObstacleStyle};

    fn test_obstacle(gap_center: f64, gap_size: f64) -> Obstacle {
        Obstacle {
            x: 600.0,
            gap_center,
            gap_size,
            style: ObstacleStyle::Vine,
        }
    }

    #[test]
    fn test_flap_overrides_velocity() {
        let physics = PhysicsConfig::default();
        let mut player = PlayerState::new(Character::Butterfly);
        player.velocity = 400.0;
        flap(&mut player, &physics);
        assert!((player.velocity - physics.flap_impulse).abs() < f64::EPSILON);
    }

    #[test]
    fn test_flap_on_dead_player_is_noop() {
        let physics = PhysicsConfig::default();
        let mut player = PlayerState::new(Character::Bee);
        player.alive = false;
        player.velocity = 123.0;
        flap(&mut player, &physics);
        assert!((player.velocity - 123.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_gravity_accelerates_downward() {
        let physics = PhysicsConfig::default();
        let mut player = PlayerState::new(Character::Butterfly);
        apply_gravity(&mut player, &physics, 0.1).unwrap();
        // min(0 + 900 * 0.1, 650) = 90, then y += 90 * 0.1
        assert!((player.velocity - 90.0).abs() < 1e-9);
        assert!((player.y - 329.0).abs() < 1e-9);
    }

    #[test]
    fn test_gravity_velocity_saturates_at_cap() {
        let physics = PhysicsConfig::default();
        let mut player = PlayerState::new(Character::Butterfly);
        for _ in 0..100 {
            apply_gravity(&mut player, &physics, 0.1).unwrap();
            assert!(player.velocity <= physics.max_fall_speed);
        }
        // After enough steps the cap is reached exactly, not approximately.
        assert!((player.velocity - 650.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_gravity_position_integrates_capped_velocity() {
        // Forward Euler with cap-then-integrate: a velocity already at the
        // cap moves the player by exactly cap * dt.
        let physics = PhysicsConfig::default();
        let mut player = PlayerState::new(Character::Butterfly);
        player.velocity = physics.max_fall_speed;
        let y_before = player.y;
        apply_gravity(&mut player, &physics, 0.5).unwrap();
        assert!((player.y - (y_before + 650.0 * 0.5)).abs() < 1e-9);
    }

    #[test]
    fn test_gravity_on_dead_player_is_noop() {
        let physics = PhysicsConfig::default();
        let mut player = PlayerState::new(Character::Chickadee);
        player.alive = false;
        player.velocity = 50.0;
        let y_before = player.y;
        apply_gravity(&mut player, &physics, 0.1).unwrap();
        assert!((player.y - y_before).abs() < f64::EPSILON);
        assert!((player.velocity - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_gravity_rejects_negative_dt() {
        let physics = PhysicsConfig::default();
        let mut player = PlayerState::new(Character::Butterfly);
        let result = apply_gravity(&mut player, &physics, -0.016);
        assert_eq!(result, Err(StepError::InvalidTimeDelta(-0.016)));
        // State untouched on rejection.
        assert!((player.y - 320.0).abs() < f64::EPSILON);
        assert!((player.velocity - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_gravity_zero_dt_is_identity() {
        let physics = PhysicsConfig::default();
        let mut player = PlayerState::new(Character::Butterfly);
        player.velocity = 10.0;
        let before = player;
        apply_gravity(&mut player, &physics, 0.0).unwrap();
        assert_eq!(player, before);
    }

    #[test]
    fn test_collision_inside_gap() {
        let obstacle = test_obstacle(200.0, 140.0);
        assert!(!check_collision(200.0, &obstacle));
        assert!(!check_collision(150.0, &obstacle));
        assert!(!check_collision(250.0, &obstacle));
    }

    #[test]
    fn test_collision_gap_edges_are_inclusive() {
        let obstacle = test_obstacle(200.0, 140.0);
        assert!(!check_collision(130.0, &obstacle));
        assert!(!check_collision(270.0, &obstacle));
        assert!(check_collision(129.999, &obstacle));
        assert!(check_collision(270.001, &obstacle));
    }

    #[test]
    fn test_collision_outside_gap() {
        let obstacle = test_obstacle(200.0, 140.0);
        assert!(check_collision(0.0, &obstacle));
        assert!(check_collision(500.0, &obstacle));
    }

    #[test]
    fn test_collision_does_not_mutate() {
        let obstacle = test_obstacle(200.0, 140.0);
        let copy = obstacle;
        let _ = check_collision(0.0, &obstacle);
        assert_eq!(obstacle, copy);
    }
}
