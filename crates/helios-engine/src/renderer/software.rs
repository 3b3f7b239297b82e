//! Pure-CPU canvas backend.
//!
//! Rasterizes the full [`Canvas`] contract into a [`Pixmap`]: useful for
//! headless rendering, snapshot tests, and embedders without a native
//! surface. Sampling is nearest-neighbor; coverage tests run per pixel
//! center, no antialiasing.

use glam::Vec2;

use super::canvas::{Canvas, Rgba};
use super::pixmap::Pixmap;
use crate::core::angle::Angle;

pub struct SoftwareCanvas {
    pixmap: Pixmap,
}

impl SoftwareCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixmap: Pixmap::new(width, height),
        }
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    pub fn into_pixmap(self) -> Pixmap {
        self.pixmap
    }

    /// Pixel rows of the bounding box around `center` with half-extent
    /// `reach`, clamped to the buffer.
    fn span(&self, center: Vec2, reach: f32) -> (i32, i32, i32, i32) {
        let x0 = ((center.x - reach).floor() as i32).max(0);
        let y0 = ((center.y - reach).floor() as i32).max(0);
        let x1 = ((center.x + reach).ceil() as i32).min(self.pixmap.width() as i32);
        let y1 = ((center.y + reach).ceil() as i32).min(self.pixmap.height() as i32);
        (x0, y0, x1, y1)
    }
}

fn pixel_center(x: i32, y: i32) -> Vec2 {
    Vec2::new(x as f32 + 0.5, y as f32 + 0.5)
}

/// Rotate a vector by `-angle` (into the shape's local frame).
fn unrotate(v: Vec2, angle: Angle) -> Vec2 {
    let (sin, cos) = angle.radians().sin_cos();
    let (sin, cos) = (sin as f32, cos as f32);
    Vec2::new(v.x * cos + v.y * sin, -v.x * sin + v.y * cos)
}

impl Canvas for SoftwareCanvas {
    fn clear(&mut self, color: Rgba) {
        self.pixmap.fill(color);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        let (x0, y0, x1, y1) = self.span(center, radius + 1.0);
        for y in y0..y1 {
            for x in x0..x1 {
                if pixel_center(x, y).distance_squared(center) <= radius * radius {
                    self.pixmap.blend_pixel(x, y, color);
                }
            }
        }
    }

    fn draw_pixmap(&mut self, pixmap: &Pixmap, center: Vec2, rotation: Angle, scale: f32) {
        if scale <= 0.0 {
            return;
        }
        let size = Vec2::new(pixmap.width() as f32, pixmap.height() as f32);
        let reach = scale * size.length() / 2.0;
        let (x0, y0, x1, y1) = self.span(center, reach);
        for y in y0..y1 {
            for x in x0..x1 {
                // Inverse map: destination pixel → source pixel.
                let local = unrotate(pixel_center(x, y) - center, rotation) / scale + size / 2.0;
                let (sx, sy) = (local.x.floor(), local.y.floor());
                if sx < 0.0 || sy < 0.0 || sx >= size.x || sy >= size.y {
                    continue;
                }
                let px = pixmap.pixel(sx as u32, sy as u32);
                if px[3] == 0 {
                    continue;
                }
                self.pixmap.blend_pixel(x, y, Rgba::from_bytes(px));
            }
        }
    }

    fn stroke_arc(
        &mut self,
        center: Vec2,
        radius: f32,
        head: Angle,
        sweep_deg: f32,
        width: f32,
        head_color: Rgba,
        tail_color: Rgba,
    ) {
        let half = width / 2.0;
        let (x0, y0, x1, y1) = self.span(center, radius + half + 1.0);
        for y in y0..y1 {
            for x in x0..x1 {
                let d = pixel_center(x, y) - center;
                if (d.length() - radius).abs() > half {
                    continue;
                }
                let angle = (d.y as f64).atan2(d.x as f64).to_degrees();
                // Degrees behind the head, measured against orbit direction.
                let behind = (head.degrees() - angle).rem_euclid(360.0) as f32;
                if behind > sweep_deg {
                    continue;
                }
                let color = Rgba::lerp(head_color, tail_color, behind / sweep_deg);
                self.pixmap.blend_pixel(x, y, color);
            }
        }
    }

    fn fill_ring(
        &mut self,
        center: Vec2,
        inner_radius: f32,
        outer_radius: f32,
        shear: f32,
        rotation: Angle,
        color: Rgba,
    ) {
        let reach = outer_radius * (1.0 + shear.abs()) + 1.0;
        let (x0, y0, x1, y1) = self.span(center, reach);
        for y in y0..y1 {
            for x in x0..x1 {
                let local = unrotate(pixel_center(x, y) - center, rotation);
                // Undo the shear x' = x + shear·y applied at draw time.
                let p = Vec2::new(local.x - shear * local.y, local.y);
                let r = p.length();
                if r >= inner_radius && r <= outer_radius {
                    self.pixmap.blend_pixel(x, y, color);
                }
            }
        }
    }
}
