//! CPU-side RGBA8 image buffer.
//!
//! `Pixmap` is both the offscreen buffer of the lighting pass and the pixel
//! store behind sprite sources. It provides the primitive operations the
//! compositor is built from: alpha-over blits, radial gradients with
//! arbitrary stops, and source-atop compositing.

use glam::Vec2;

use super::canvas::Rgba;

/// Porter-Duff composite operator for gradient passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Composite {
    /// Standard alpha blending on top of the destination.
    SourceOver,
    /// Source drawn only where the destination already has alpha; the
    /// destination alpha is kept ("keep destination where source exists").
    SourceAtop,
}

/// One stop of a gradient: `offset` in [0, 1] along the gradient axis.
#[derive(Debug, Clone, Copy)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Rgba,
}

impl GradientStop {
    pub const fn new(offset: f32, color: Rgba) -> Self {
        Self { offset, color }
    }
}

/// Radial gradient between two circles sharing a center, with piecewise
/// linear stops. Distances below `inner_radius` map to offset 0, above
/// `outer_radius` to offset 1.
#[derive(Debug, Clone)]
pub struct RadialGradient {
    pub center: Vec2,
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub stops: Vec<GradientStop>,
}

impl RadialGradient {
    /// Color at a given distance from the gradient center.
    pub fn color_at(&self, distance: f32) -> Rgba {
        let span = self.outer_radius - self.inner_radius;
        let t = if span.abs() < f32::EPSILON {
            if distance < self.inner_radius { 0.0 } else { 1.0 }
        } else {
            ((distance - self.inner_radius) / span).clamp(0.0, 1.0)
        };
        self.sample(t)
    }

    fn sample(&self, t: f32) -> Rgba {
        let Some(first) = self.stops.first() else {
            return Rgba::TRANSPARENT;
        };
        if t <= first.offset {
            return first.color;
        }
        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t <= b.offset {
                let span = b.offset - a.offset;
                let local = if span.abs() < f32::EPSILON {
                    1.0
                } else {
                    (t - a.offset) / span
                };
                return Rgba::lerp(a.color, b.color, local);
            }
        }
        self.stops.last().map(|s| s.color).unwrap_or(Rgba::TRANSPARENT)
    }
}

/// RGBA8 pixel buffer with straight alpha.
#[derive(Debug, Clone, PartialEq)]
pub struct Pixmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Pixmap {
    /// New fully transparent pixmap.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; (width * height * 4) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn index(&self, x: u32, y: u32) -> usize {
        ((y * self.width + x) * 4) as usize
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = self.index(x, y);
        [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]]
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, px: [u8; 4]) {
        let i = self.index(x, y);
        self.data[i..i + 4].copy_from_slice(&px);
    }

    /// Overwrite every pixel with a color (no blending).
    pub fn fill(&mut self, color: Rgba) {
        let px = color.to_bytes();
        for chunk in self.data.chunks_exact_mut(4) {
            chunk.copy_from_slice(&px);
        }
    }

    /// Source-over blend a single pixel. Out-of-bounds coordinates are a
    /// no-op so callers can rasterize unclipped shapes.
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Rgba) {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        let dst = Rgba::from_bytes(self.pixel(x, y));
        self.set_pixel(x, y, over(color, dst).to_bytes());
    }

    /// Alpha-over blit of another pixmap with its top-left at `(dx, dy)`.
    pub fn blit(&mut self, src: &Pixmap, dx: i32, dy: i32) {
        for sy in 0..src.height {
            for sx in 0..src.width {
                let px = src.pixel(sx, sy);
                if px[3] == 0 {
                    continue;
                }
                self.blend_pixel(dx + sx as i32, dy + sy as i32, Rgba::from_bytes(px));
            }
        }
    }

    /// Paint a radial gradient across the whole buffer with the given
    /// composite operator. With [`Composite::SourceAtop`] the gradient only
    /// lands where this pixmap already has alpha.
    pub fn composite_radial_gradient(&mut self, gradient: &RadialGradient, mode: Composite) {
        for y in 0..self.height {
            for x in 0..self.width {
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                let src = gradient.color_at(p.distance(gradient.center));
                let dst = Rgba::from_bytes(self.pixel(x, y));
                let out = match mode {
                    Composite::SourceOver => over(src, dst),
                    Composite::SourceAtop => atop(src, dst),
                };
                self.set_pixel(x, y, out.to_bytes());
            }
        }
    }
}

/// Porter-Duff source-over with straight alpha.
fn over(src: Rgba, dst: Rgba) -> Rgba {
    let out_a = src.a + dst.a * (1.0 - src.a);
    if out_a <= 0.0 {
        return Rgba::TRANSPARENT;
    }
    let blend = |s: f32, d: f32| (s * src.a + d * dst.a * (1.0 - src.a)) / out_a;
    Rgba::new(blend(src.r, dst.r), blend(src.g, dst.g), blend(src.b, dst.b), out_a)
}

/// Porter-Duff source-atop: destination alpha is preserved.
fn atop(src: Rgba, dst: Rgba) -> Rgba {
    let blend = |s: f32, d: f32| s * src.a + d * (1.0 - src.a);
    Rgba::new(
        blend(src.r, dst.r),
        blend(src.g, dst.g),
        blend(src.b, dst.b),
        dst.a,
    )
}
