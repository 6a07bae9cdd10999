//! Ambience mix rules.

use super::types::{AmbienceCue, AmbienceState, TimeOfDay};

/// Re-derive the channel cues from the time of day.
///
/// Dusk and night swap the birdsong for crickets; dawn and day bring the
/// songbirds back. Music and wind have no time-of-day rule and are left
/// as they are.
pub fn update_mix(ambience: &mut AmbienceState, time_of_day: TimeOfDay) {
    ambience.birds = Some(match time_of_day {
        TimeOfDay::Dusk | TimeOfDay::Night => AmbienceCue::Crickets,
        TimeOfDay::Dawn | TimeOfDay::Day => AmbienceCue::Songbirds,
    });
}
