//! Time-of-day cycle and ambience data structures.

use serde::{Deserialize, Serialize};

/// Phases of the day/night cycle, advanced explicitly by the game container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeOfDay {
    Dawn,
    Day,
    Dusk,
    Night,
}

impl TimeOfDay {
    /// Fixed cyclic order of the day/night phases.
    pub const ALL: [TimeOfDay; 4] = [
        TimeOfDay::Dawn,
        TimeOfDay::Day,
        TimeOfDay::Dusk,
        TimeOfDay::Night,
    ];

    /// The next phase in the cycle; Night wraps back to Dawn.
    pub fn next(&self) -> TimeOfDay {
        match self {
            Self::Dawn => Self::Day,
            Self::Day => Self::Dusk,
            Self::Dusk => Self::Night,
            Self::Night => Self::Dawn,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Dawn => "dawn",
            Self::Day => "day",
            Self::Dusk => "dusk",
            Self::Night => "night",
        }
    }
}

/// Symbolic audio cues. Labels stand in for sound assets; there is no
/// mixing or synthesis behind them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AmbienceCue {
    Songbirds,
    Crickets,
}

impl AmbienceCue {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Songbirds => "songbirds",
            Self::Crickets => "crickets",
        }
    }
}

/// Ambience channels, one named field per channel.
///
/// The channel set is static, so this is a fixed-shape record rather than a
/// map keyed by channel name. Cues start unset; the mix rule assigns them
/// from the current time of day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmbienceState {
    pub music_volume: f64,
    pub ambient_volume: f64,
    pub music: Option<AmbienceCue>,
    pub wind: Option<AmbienceCue>,
    pub birds: Option<AmbienceCue>,
}

impl Default for AmbienceState {
    fn default() -> Self {
        Self {
            music_volume: 0.4,
            ambient_volume: 0.35,
            music: None,
            wind: None,
            birds: None,
        }
    }
}
