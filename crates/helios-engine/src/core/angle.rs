//! Degree-based angle primitives.
//!
//! All angular motion in the engine derives from one formula:
//! `step = 360 / (period_seconds * TARGET_FRAME_RATE)` degrees per frame.
//! The engine assumes frames arrive at the target rate; there is no
//! elapsed-time measurement, so playback speed tracks wall-clock time
//! only approximately (documented limitation, kept on purpose).

/// Frames per second the step formula is calibrated against.
pub const TARGET_FRAME_RATE: f64 = 60.0;

/// Per-frame angular step in degrees for a full revolution (or rotation)
/// taking `period_seconds`. The period must be positive; a non-positive
/// period is a caller bug, not a runtime-checked condition.
pub fn per_frame_step(period_seconds: f64) -> f64 {
    360.0 / (period_seconds * TARGET_FRAME_RATE)
}

/// An angle in degrees, always normalized to `[0, 360)`.
///
/// Immutable value type: updates produce a new `Angle`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Angle(f64);

impl Angle {
    pub const ZERO: Angle = Angle(0.0);

    /// Create an angle from degrees, normalizing into `[0, 360)`.
    pub fn from_degrees(degrees: f64) -> Self {
        Self(degrees.rem_euclid(360.0))
    }

    /// The angle in degrees, in `[0, 360)`.
    pub fn degrees(self) -> f64 {
        self.0
    }

    /// The angle converted to radians.
    pub fn radians(self) -> f64 {
        self.0.to_radians()
    }

    /// A new angle advanced by `step` degrees, renormalized.
    pub fn advanced_by(self, step: f64) -> Self {
        Self::from_degrees(self.0 + step)
    }

    /// Shortest angular distance to another angle, in degrees (0..=180).
    pub fn distance_to(self, other: Angle) -> f64 {
        let d = (self.0 - other.0).rem_euclid(360.0);
        d.min(360.0 - d)
    }
}
