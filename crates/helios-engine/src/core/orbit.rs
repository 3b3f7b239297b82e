use glam::Vec2;

use super::angle::{per_frame_step, Angle};

/// Circular orbit around a (possibly moving) center.
///
/// The radius is fixed for the orbit's lifetime and the angle only changes
/// through [`Orbit::advance`]. When the center is another body, the owner
/// re-syncs it with [`Orbit::retarget`] right after that body has moved,
/// so a child orbit always revolves around the parent's current position.
#[derive(Debug, Clone)]
pub struct Orbit {
    center: Vec2,
    radius: f32,
    angle: Angle,
    /// Degrees per frame, derived once from the orbital period.
    step: f64,
}

impl Orbit {
    /// New orbit starting at angle 0. `radius` must be non-negative and
    /// `period_seconds` positive (construction contract).
    pub fn new(center: Vec2, radius: f32, period_seconds: f64) -> Self {
        Self {
            center,
            radius,
            angle: Angle::ZERO,
            step: per_frame_step(period_seconds),
        }
    }

    pub fn with_start_angle(mut self, angle: Angle) -> Self {
        self.angle = angle;
        self
    }

    /// Follow a moving barycenter: replace the center with the body's
    /// current position. Read-only access to the parent, never ownership.
    pub fn retarget(&mut self, center: Vec2) {
        self.center = center;
    }

    /// Step the angle by one frame and return the new position.
    pub fn advance(&mut self) -> Vec2 {
        self.angle = self.angle.advanced_by(self.step);
        self.position()
    }

    /// Current position on the circle: `center + radius * (cos θ, sin θ)`.
    pub fn position(&self) -> Vec2 {
        let (sin, cos) = self.angle.radians().sin_cos();
        self.center + self.radius * Vec2::new(cos as f32, sin as f32)
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn angle(&self) -> Angle {
        self.angle
    }
}
