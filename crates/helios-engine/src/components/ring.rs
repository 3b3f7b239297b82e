use glam::Vec2;

use crate::core::angle::{per_frame_step, Angle};
use crate::renderer::canvas::{Canvas, Rgba};

/// Horizontal shear applied when drawing, flattening the annulus into a
/// tilted-disk silhouette.
const RING_SHEAR: f32 = 0.45;

/// A planetary ring: an annulus that spins with its own period and is
/// always drawn centered on the owning planet.
///
/// The ring stores no position of its own; the planet passes its current
/// center at render time, so the ring can never drift from its body.
pub struct Ring {
    spin: Angle,
    step: f64,
    inner_radius: f32,
    outer_radius: f32,
    color: Rgba,
}

impl Ring {
    /// `inner_radius < outer_radius` and a positive period are construction
    /// contracts.
    pub fn new(inner_radius: f32, outer_radius: f32, period_seconds: f64, color: Rgba) -> Self {
        Self {
            spin: Angle::ZERO,
            step: per_frame_step(period_seconds),
            inner_radius,
            outer_radius,
            color,
        }
    }

    pub fn angle(&self) -> Angle {
        self.spin
    }

    pub fn advance(&mut self) {
        self.spin = self.spin.advanced_by(self.step);
    }

    pub fn render(&self, canvas: &mut dyn Canvas, planet_center: Vec2) {
        canvas.fill_ring(
            planet_center,
            self.inner_radius,
            self.outer_radius,
            RING_SHEAR,
            self.spin,
            self.color,
        );
    }
}
