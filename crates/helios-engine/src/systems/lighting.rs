//! Image-space sun lighting.
//!
//! Shading is computed per frame in the sprite's local pixel space: an
//! off-screen buffer the size of the sprite gets the base image, then a
//! radial shadow gradient anchored at the sun's apparent position is
//! composited source-atop, so the darkening lands only on the sprite's
//! own silhouette. Transparency is untouched.

use glam::Vec2;

use crate::core::angle::Angle;
use crate::renderer::canvas::Rgba;
use crate::renderer::pixmap::{Composite, GradientStop, Pixmap, RadialGradient};

/// Pose inputs the shader needs for one frame.
#[derive(Debug, Clone, Copy)]
pub struct ShadeContext {
    /// Current angle of the body's orbit around the sun.
    pub orbit_angle: Angle,
    /// Radius of that orbit, in canvas units.
    pub orbit_radius: f32,
    /// Current self-rotation of the sprite.
    pub spin_angle: Angle,
}

/// Per-frame image transformation applied to a sprite before drawing.
pub trait SpriteShader {
    /// Produce the shaded frame for the given pose. The input image is
    /// never mutated.
    fn shade(&self, sprite: &Pixmap, ctx: &ShadeContext) -> Pixmap;
}

/// Shadow stops: fully lit through 30% of the gradient span, easing into
/// an 80%-opacity shadow at the far limb.
const SHADOW_STOPS: [GradientStop; 4] = [
    GradientStop::new(0.0, Rgba::BLACK.with_alpha(0.0)),
    GradientStop::new(0.3, Rgba::BLACK.with_alpha(0.0)),
    GradientStop::new(0.6, Rgba::BLACK.with_alpha(0.6)),
    GradientStop::new(0.9, Rgba::BLACK.with_alpha(0.8)),
];

/// Day/night shading from a sun at the orbit center.
///
/// Stateless: the apparent sun position is recomputed each frame from the
/// pose, counter-rotated by the sprite's spin so the lit limb stays facing
/// the sun while the sprite itself turns.
pub struct Sunlight;

impl Sunlight {
    /// Direction from the sprite toward the sun, in sprite-local space.
    ///
    /// The sun sits opposite the body's orbital position (180° away), and
    /// the sprite's own rotation is subtracted because the gradient is
    /// painted before the sprite is rotated for display.
    fn sun_angle(ctx: &ShadeContext) -> Angle {
        Angle::from_degrees(180.0 + ctx.orbit_angle.degrees() - ctx.spin_angle.degrees())
    }
}

impl SpriteShader for Sunlight {
    fn shade(&self, sprite: &Pixmap, ctx: &ShadeContext) -> Pixmap {
        let mut frame = Pixmap::new(sprite.width(), sprite.height());
        frame.blit(sprite, 0, 0);

        let mid = Vec2::new(sprite.width() as f32 / 2.0, sprite.height() as f32 / 2.0);
        let (sin, cos) = Self::sun_angle(ctx).radians().sin_cos();
        let sun = mid + ctx.orbit_radius * Vec2::new(cos as f32, sin as f32);

        // The gradient brackets the sprite: lit where the sun-facing limb
        // starts, darkest past the far limb.
        let body_radius = sprite.width().max(sprite.height()) as f32 / 2.0;
        let gradient = RadialGradient {
            center: sun,
            inner_radius: ctx.orbit_radius - body_radius,
            outer_radius: ctx.orbit_radius + body_radius,
            stops: SHADOW_STOPS.to_vec(),
        };
        frame.composite_radial_gradient(&gradient, Composite::SourceAtop);
        frame
    }
}
