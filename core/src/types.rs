//! Shared primitive types used across the engine.

/// One clock-driver tick. One tick = one refresh interval (1 s by default).
pub type Tick = u64;

/// Stable short key of a celestial body ("earth", "mars", ...).
pub type BodyId = String;

/// Angle in degrees.
pub type Degrees = f64;
