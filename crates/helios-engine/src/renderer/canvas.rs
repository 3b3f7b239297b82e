//! Drawing-surface contract.
//!
//! The engine is headless: every frame it issues calls against this trait,
//! and the embedder supplies the backend (browser canvas, GPU pass, or the
//! in-tree [`SoftwareCanvas`](super::software::SoftwareCanvas)). The method
//! set is the 2-D immediate-mode subset the scene actually needs.

use glam::Vec2;

use super::pixmap::Pixmap;
use crate::core::angle::Angle;

/// RGBA color with f32 channels in [0, 1] (straight alpha).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const BLACK: Rgba = Rgba::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);
    pub const TRANSPARENT: Rgba = Rgba::new(0.0, 0.0, 0.0, 0.0);

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    pub fn from_array(c: [f32; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }

    /// Linear interpolation between two colors.
    pub fn lerp(a: Rgba, b: Rgba, t: f32) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        Rgba::new(
            a.r + (b.r - a.r) * t,
            a.g + (b.g - a.g) * t,
            a.b + (b.b - a.b) * t,
            a.a + (b.a - a.a) * t,
        )
    }

    /// Quantize to 8-bit RGBA.
    pub fn to_bytes(self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    pub fn from_bytes(px: [u8; 4]) -> Self {
        Self::new(
            px[0] as f32 / 255.0,
            px[1] as f32 / 255.0,
            px[2] as f32 / 255.0,
            px[3] as f32 / 255.0,
        )
    }
}

/// 2-D immediate-mode drawing surface.
///
/// Coordinates are in canvas pixels, origin top-left, angles measured the
/// same way as [`Orbit`](crate::core::orbit::Orbit) positions (0° along +x,
/// increasing toward +y).
pub trait Canvas {
    /// Fill the whole surface with a color.
    fn clear(&mut self, color: Rgba);

    /// Filled circle (stars).
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);

    /// Blit an image centered at `center`, rotated by `rotation` around the
    /// image midpoint, uniformly scaled.
    fn draw_pixmap(&mut self, pixmap: &Pixmap, center: Vec2, rotation: Angle, scale: f32);

    /// Stroke a partial arc trailing behind `head`: the arc spans
    /// `[head - sweep_deg, head]` and fades from `head_color` at the leading
    /// edge to `tail_color` at the tail.
    #[allow(clippy::too_many_arguments)]
    fn stroke_arc(
        &mut self,
        center: Vec2,
        radius: f32,
        head: Angle,
        sweep_deg: f32,
        width: f32,
        head_color: Rgba,
        tail_color: Rgba,
    );

    /// Filled annulus sheared by `shear` (x' = x + shear·y) and rotated by
    /// `rotation`, centered at `center` — a circular ring drawn as a tilted
    /// disk seen off-axis.
    fn fill_ring(
        &mut self,
        center: Vec2,
        inner_radius: f32,
        outer_radius: f32,
        shear: f32,
        rotation: Angle,
        color: Rgba,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints() {
        let a = Rgba::BLACK;
        let b = Rgba::WHITE;
        assert_eq!(Rgba::lerp(a, b, 0.0), a);
        assert_eq!(Rgba::lerp(a, b, 1.0), b);
    }

    #[test]
    fn byte_round_trip() {
        let c = Rgba::new(0.5, 0.25, 1.0, 0.0);
        let back = Rgba::from_bytes(c.to_bytes());
        assert!((back.r - 0.5).abs() < 0.01);
        assert!((back.g - 0.25).abs() < 0.01);
        assert_eq!(back.b, 1.0);
        assert_eq!(back.a, 0.0);
    }

    #[test]
    fn to_bytes_clamps() {
        let c = Rgba::new(2.0, -1.0, 0.5, 1.5);
        let px = c.to_bytes();
        assert_eq!(px[0], 255);
        assert_eq!(px[1], 0);
        assert_eq!(px[3], 255);
    }
}
