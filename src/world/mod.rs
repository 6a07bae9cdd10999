//! World simulation primitives.
//!
//! Data records for physics tuning, the difficulty gap curve, the player,
//! and obstacles, plus the pure update operations over them. Gravity pulls
//! the player down each step, a flap overrides the velocity upward, and
//! obstacles present a vertical gap the player must stay inside.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
