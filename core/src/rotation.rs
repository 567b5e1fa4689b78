//! Planet-card rotation angle and body-local clock.
//!
//! Both map the Earth UTC clock onto another body's day length by simple
//! proportion. This is a display device, not an ephemeris: no body's real
//! rotational phase is modeled.

use crate::{
    catalog::CelestialBody,
    clock::ObservationInstant,
    local_time::ClockFace,
    types::Degrees,
};

/// Texture turn angle in [0, 360).
///
/// `period_days` must be positive.
pub fn rotation_degrees(instant: ObservationInstant, period_days: f64) -> Degrees {
    rotation_with_factor(instant, 1.0 / period_days)
}

/// Rotation for a catalog body. The reference body always turns at
/// factor 1, whatever its recorded period.
pub fn body_rotation_degrees(
    instant:      ObservationInstant,
    body:         &CelestialBody,
    reference_id: &str,
) -> Degrees {
    let factor = if body.id == reference_id {
        1.0
    } else {
        1.0 / body.rotation_period_days
    };
    rotation_with_factor(instant, factor)
}

fn rotation_with_factor(instant: ObservationInstant, factor: f64) -> Degrees {
    let angle = (instant.earth_hours() / 24.0 * 360.0 * factor).rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if angle >= 360.0 { 0.0 } else { angle }
}

/// The body's "local time": Earth hours scaled by 24 / period, wrapped
/// to a day.
pub fn body_clock(instant: ObservationInstant, period_days: f64) -> ClockFace {
    let body_hours = (instant.earth_hours() * 24.0 / period_days).rem_euclid(24.0);
    let hour = body_hours.floor();
    let minute = ((body_hours - hour) * 60.0).floor();
    ClockFace {
        hour:   (hour as u32).min(23),
        minute: (minute as u32).min(59),
    }
}
