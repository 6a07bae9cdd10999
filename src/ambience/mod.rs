//! Adaptive ambience: a day/night cycle and the audio cue labels derived
//! from it. A label cache, not an audio system — no synthesis or mixing.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
