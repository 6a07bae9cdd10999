//! Main simulation runner driving the real game core.
//!
//! Each run plays the actual [`MeadowGame`] operations — step, spawn,
//! collision settlement, scoring, time-of-day — under a flap policy, so
//! simulated balance numbers match real engine behavior. Obstacle pacing
//! (when the player "reaches" the next gap) is a harness concern: the core
//! itself never scrolls or culls obstacles.

use super::config::SimConfig;
use super::report::{EndCause, RunStats, SimReport};
use crate::core::game_state::MeadowGame;
use crate::world::types::{Character, GapCurve, PhysicsConfig, StepError};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// X position the harness hands to every spawn. The core records it
/// verbatim; nothing in the harness depends on it.
const SPAWN_X: f64 = 600.0;

/// Run the full simulation and return a report.
///
/// Fails fast on a negative `dt` rather than starting a thousand runs that
/// would each reject it.
pub fn run_simulation(config: &SimConfig) -> Result<SimReport, StepError> {
    if config.dt < 0.0 {
        return Err(StepError::InvalidTimeDelta(config.dt));
    }

    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        // Per-run RNG: base seed offset by run index, as reproducible as
        // the seed the caller provides.
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed + run_idx as u64),
            None => ChaCha8Rng::from_entropy(),
        };

        let run_stats = simulate_single_run(config, &mut rng)?;

        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - Score {}, Steps {}, Cleared {}, Phases {}, {:?}",
                run_idx + 1,
                config.num_runs,
                run_stats.final_score,
                run_stats.steps_survived,
                run_stats.obstacles_cleared,
                run_stats.phases_seen,
                run_stats.end_cause
            );
        }

        all_runs.push(run_stats);
    }

    Ok(SimReport::from_runs(all_runs))
}

/// Simulate a single run until collision or the step limit.
fn simulate_single_run(config: &SimConfig, rng: &mut ChaCha8Rng) -> Result<RunStats, StepError> {
    let mut game = MeadowGame::new(
        PhysicsConfig::default(),
        GapCurve::default(),
        Character::Butterfly,
    );

    let steps_per_obstacle = config.steps_per_obstacle.max(1);
    let obstacles_per_phase = config.obstacles_per_phase.max(1);

    // The first obstacle is waiting before the player starts moving.
    game.spawn_obstacle(SPAWN_X);
    let mut active_obstacle = 0usize;

    let mut obstacles_cleared = 0u32;
    let mut phases_seen = 0u32;
    let mut end_cause = EndCause::StepLimit;
    let mut steps: u64 = 0;

    while steps < config.max_steps {
        let input = config.policy.decide(steps, &game.player, rng);
        game.step(config.dt, input)?;
        steps += 1;

        // The player reaches the active obstacle every pacing interval.
        if steps % steps_per_obstacle != 0 {
            continue;
        }

        if game.settle_collision(active_obstacle) {
            end_cause = EndCause::Collision;
            break;
        }

        game.update_score(1);
        obstacles_cleared += 1;

        if obstacles_cleared % obstacles_per_phase == 0 {
            game.advance_time_of_day();
            phases_seen += 1;
        }

        game.spawn_obstacle(SPAWN_X);
        active_obstacle += 1;
    }

    Ok(RunStats {
        steps_survived: steps,
        final_score: game.score,
        obstacles_cleared,
        final_gap: game.gaps.gap_for_score(game.score),
        phases_seen,
        end_cause,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulator::policy::FlapPolicy;

    #[test]
    fn test_never_flapping_dies_at_first_obstacle() {
        let config = SimConfig {
            num_runs: 1,
            seed: Some(1),
            max_steps: 10_000,
            policy: FlapPolicy::Skittish { flap_chance: 0.0 },
            verbosity: 0,
            ..Default::default()
        };

        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let stats = simulate_single_run(&config, &mut rng).unwrap();

        // Free fall leaves the player far below the first gap.
        assert_eq!(stats.end_cause, EndCause::Collision);
        assert_eq!(stats.final_score, 0);
        assert_eq!(stats.steps_survived, config.steps_per_obstacle);
    }

    #[test]
    fn test_altitude_hold_clears_obstacles() {
        let config = SimConfig {
            num_runs: 1,
            seed: Some(7),
            max_steps: 50_000,
            verbosity: 0,
            ..Default::default()
        };

        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let stats = simulate_single_run(&config, &mut rng).unwrap();

        assert!(stats.final_score > 0, "default policy should clear the opener");
        assert_eq!(stats.obstacles_cleared as i64, stats.final_score);
    }

    #[test]
    fn test_phases_advance_with_clears() {
        let config = SimConfig {
            num_runs: 1,
            seed: Some(7),
            max_steps: 50_000,
            obstacles_per_phase: 2,
            verbosity: 0,
            ..Default::default()
        };

        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let stats = simulate_single_run(&config, &mut rng).unwrap();
        assert_eq!(stats.phases_seen, stats.obstacles_cleared / 2);
    }

    #[test]
    fn test_simulation_is_seed_deterministic() {
        let config = SimConfig {
            num_runs: 5,
            seed: Some(42),
            max_steps: 20_000,
            policy: FlapPolicy::Skittish { flap_chance: 0.12 },
            verbosity: 0,
            ..Default::default()
        };

        let first = run_simulation(&config).unwrap();
        let second = run_simulation(&config).unwrap();

        assert_eq!(first.num_runs, second.num_runs);
        assert!((first.avg_final_score - second.avg_final_score).abs() < f64::EPSILON);
        assert!((first.avg_steps_survived - second.avg_steps_survived).abs() < f64::EPSILON);
        assert_eq!(first.score_distribution, second.score_distribution);
    }

    #[test]
    fn test_negative_dt_rejected_before_any_run() {
        let config = SimConfig {
            dt: -0.016,
            verbosity: 0,
            ..Default::default()
        };
        let result = run_simulation(&config);
        assert!(matches!(result, Err(StepError::InvalidTimeDelta(_))));
    }

    #[test]
    fn test_step_limit_marks_survival() {
        // A tiny step limit ends before the first obstacle is reached.
        let config = SimConfig {
            num_runs: 1,
            seed: Some(3),
            max_steps: 10,
            steps_per_obstacle: 90,
            verbosity: 0,
            ..Default::default()
        };

        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let stats = simulate_single_run(&config, &mut rng).unwrap();
        assert_eq!(stats.end_cause, EndCause::StepLimit);
        assert_eq!(stats.steps_survived, 10);
    }
}
