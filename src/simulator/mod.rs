//! Balance simulator for Monte Carlo analysis.
//!
//! Run many simulated playthroughs under a flap policy to analyze:
//! - How long policies survive the shrinking gap curve
//! - Score distribution and survival rate
//! - Day/night phase pacing
//!
//! The simulator drives the real engine (src/core), ensuring its numbers
//! match real gameplay behavior.

mod config;
mod policy;
mod report;
mod runner;

pub use config::SimConfig;
pub use policy::FlapPolicy;
pub use report::{EndCause, RunStats, SimReport};
pub use runner::run_simulation;
