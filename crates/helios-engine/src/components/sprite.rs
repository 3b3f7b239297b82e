use std::rc::Rc;

use glam::Vec2;

use crate::assets::source::SpriteSource;
use crate::core::angle::{per_frame_step, Angle};
use crate::renderer::canvas::Canvas;
use crate::renderer::pixmap::Pixmap;

/// An image with an independent self-rotation angle.
///
/// The spin is decoupled from any orbital motion: a body revolves via its
/// [`Orbit`](crate::core::orbit::Orbit) and rotates via its sprite. The
/// sprite is always drawn rotated about its own midpoint.
pub struct RotatableSprite {
    source: Rc<dyn SpriteSource>,
    /// Rendered size in canvas pixels (longest image side); `None` draws
    /// the image at its native size.
    size: Option<f32>,
    spin: Angle,
    step: f64,
}

/// Uniform scale that fits an image's longest side to a target size.
fn fit_scale(size: Option<f32>, width: u32, height: u32) -> f32 {
    match size {
        Some(target) => target / width.max(height).max(1) as f32,
        None => 1.0,
    }
}

impl RotatableSprite {
    /// `rotation_period_seconds` is the time for one full self-rotation
    /// (positive; construction contract).
    pub fn new(source: Rc<dyn SpriteSource>, rotation_period_seconds: f64) -> Self {
        Self {
            source,
            size: None,
            spin: Angle::ZERO,
            step: per_frame_step(rotation_period_seconds),
        }
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_start_angle(mut self, spin: Angle) -> Self {
        self.spin = spin;
        self
    }

    /// Advance the self-rotation by one frame.
    pub fn advance(&mut self) {
        self.spin = self.spin.advanced_by(self.step);
    }

    pub fn angle(&self) -> Angle {
        self.spin
    }

    pub fn source(&self) -> &Rc<dyn SpriteSource> {
        &self.source
    }

    /// Draw the sprite centered at `center`.
    ///
    /// If the backing image has not finished loading, this registers a
    /// one-shot deferred draw on the source and skips the current frame —
    /// non-blocking, never retried within the frame.
    pub fn render(&self, canvas: &mut dyn Canvas, center: Vec2) {
        match self.source.pixels() {
            Some(pixels) => {
                let scale = fit_scale(self.size, pixels.width(), pixels.height());
                canvas.draw_pixmap(&pixels, center, self.spin, scale);
            }
            None => {
                let spin = self.spin;
                let size = self.size;
                self.source.on_load(Box::new(move |canvas, pixels| {
                    let scale = fit_scale(size, pixels.width(), pixels.height());
                    canvas.draw_pixmap(pixels, center, spin, scale);
                }));
            }
        }
    }

    /// Draw a substituted per-frame image (e.g. the shaded frame produced
    /// by a [`SpriteShader`](crate::systems::lighting::SpriteShader)) with
    /// this sprite's rotation and sizing.
    pub fn render_frame(&self, canvas: &mut dyn Canvas, center: Vec2, frame: &Pixmap) {
        let scale = fit_scale(self.size, frame.width(), frame.height());
        canvas.draw_pixmap(frame, center, self.spin, scale);
    }
}
