//! Core game container and step orchestration.

pub mod game_state;
pub mod step;

pub use game_state::*;
pub use step::*;
