//! Smoke-test entry point.
//!
//! Constructs default configs, performs one spawn/flap/step/time-advance
//! sequence, and prints the debug triple. Illustrative scaffolding for the
//! simulation core, not a designed CLI — see `bin/simulate.rs` for the
//! balance simulator.

use meadow::{
    Character, GapCurve, MeadowGame, PhysicsConfig, StepError, StepInput, DEFAULT_STEP_DT,
};

fn main() -> Result<(), StepError> {
    let physics = PhysicsConfig::default();
    let gaps = GapCurve::default();
    let mut game = MeadowGame::new(physics, gaps, Character::Butterfly);

    game.spawn_obstacle(600.0);
    let result = game.step(DEFAULT_STEP_DT, StepInput::Flap)?;
    game.advance_time_of_day();

    let (score, character, time_of_day) = game.debug_state();
    println!(
        "score={} character={} time_of_day={}",
        score,
        character.name(),
        time_of_day.name()
    );
    println!(
        "player: y={:.2} velocity={:.2} alive={}",
        result.y, result.velocity, result.alive
    );
    if let Some(obstacle) = game.obstacles.first() {
        println!(
            "obstacle: x={} gap_center={} gap_size={} style={}",
            obstacle.x,
            obstacle.gap_center,
            obstacle.gap_size,
            obstacle.style.name()
        );
    }
    if let Some(birds) = game.ambience.birds {
        println!("birds channel: {}", birds.label());
    }

    Ok(())
}
