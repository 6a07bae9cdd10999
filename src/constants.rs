// Simulation timing constants
pub const DEFAULT_STEP_DT: f64 = 0.016;

// Player constants
pub const START_HEIGHT: f64 = 320.0;

// Default physics tuning (world units and units/second)
pub const DEFAULT_GRAVITY: f64 = 900.0;
pub const DEFAULT_FLAP_IMPULSE: f64 = -320.0;
pub const DEFAULT_MAX_FALL_SPEED: f64 = 650.0;

// Default gap curve tuning
pub const DEFAULT_START_GAP: i64 = 220;
pub const DEFAULT_MIN_GAP: i64 = 140;
pub const DEFAULT_SHRINK_RATE: f64 = 0.15;

// Obstacle placement constants. The gap center walks a fixed band derived
// from the running score instead of a random roll, so spawn sequences are
// deterministic and replayable.
pub const GAP_CENTER_BASE: i64 = 200;
pub const GAP_CENTER_STEP: i64 = 3;
pub const GAP_CENTER_SPAN: i64 = 180;
