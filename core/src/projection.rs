//! Equirectangular projection of map coordinates onto the globe face.

use serde::{Deserialize, Serialize};

/// Position on the display surface, both axes normalized to [0, 1].
/// x grows eastward from the antimeridian, y grows southward from the pole.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    /// Scale to the 0..100 units used for percentage offsets.
    pub fn to_percent(self) -> ScreenPoint {
        ScreenPoint { x: self.x * 100.0, y: self.y * 100.0 }
    }
}

/// Latitude must lie in [-90, 90] and longitude in [-180, 180].
/// Inputs outside those ranges are projected by the same formula and
/// land outside the unit square.
pub fn project(latitude: f64, longitude: f64) -> ScreenPoint {
    ScreenPoint {
        x: (longitude + 180.0) / 360.0,
        y: (90.0 - latitude) / 180.0,
    }
}
