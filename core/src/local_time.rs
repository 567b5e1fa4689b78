//! Earth-side clock labels: marker local times, the UTC indicator and
//! the globe's turn angle.
//!
//! Offsets are applied to the hour and wrapped to a time of day.
//! A shift across midnight is not reported: 23:30 UTC at +2 is "01:30",
//! with no note that the calendar day changed.

use crate::{clock::ObservationInstant, types::Degrees};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A wall-clock reading with minute resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockFace {
    pub hour:   u32,
    pub minute: u32,
}

impl fmt::Display for ClockFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Wrap an hour-of-day shifted by a whole-hour offset into [0, 24).
pub fn wrap_hour(hour: i64, offset_hours: i32) -> u32 {
    (((hour + offset_hours as i64) % 24 + 24) % 24) as u32
}

pub fn local_clock(instant: ObservationInstant, offset_hours: i32) -> ClockFace {
    ClockFace {
        hour:   wrap_hour(instant.hour() as i64, offset_hours),
        minute: instant.minute(),
    }
}

/// `HH:MM` at a fixed UTC offset.
pub fn local_time(instant: ObservationInstant, offset_hours: i32) -> String {
    local_clock(instant, offset_hours).to_string()
}

/// `HH:MM:SS` in UTC.
pub fn utc_clock(instant: ObservationInstant) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        instant.hour(),
        instant.minute(),
        instant.second()
    )
}

/// Earth globe turn: a full 360 degrees per UTC day, minute resolution.
pub fn globe_rotation(instant: ObservationInstant) -> Degrees {
    instant.minutes_of_day() as f64 / (24.0 * 60.0) * 360.0
}
