use glam::Vec2;

use super::ring::Ring;
use super::satellite::Satellite;
use super::sprite::RotatableSprite;
use crate::core::orbit::Orbit;
use crate::error::RenderError;
use crate::renderer::canvas::{Canvas, Rgba};
use crate::systems::lighting::{ShadeContext, SpriteShader};

/// Sweep of the trailing orbit-path arc, in degrees.
const PATH_SWEEP_DEG: f32 = 120.0;
const PATH_WIDTH: f32 = 1.5;

/// A planet: an orbit around the sun, a self-rotating sprite, optional
/// day/night shading, and any number of rings and satellites.
///
/// The planet owns its children. Each frame it moves first, then pushes
/// its new center to rings and satellites before they move, so children
/// revolve around where the planet is this frame, not where it was.
pub struct Planet {
    name: String,
    orbit: Orbit,
    sprite: RotatableSprite,
    shader: Option<Box<dyn SpriteShader>>,
    rings: Vec<Ring>,
    satellites: Vec<Satellite>,
}

impl Planet {
    pub fn new(name: impl Into<String>, orbit: Orbit, sprite: RotatableSprite) -> Self {
        Self {
            name: name.into(),
            orbit,
            sprite,
            shader: None,
            rings: Vec::new(),
            satellites: Vec::new(),
        }
    }

    /// Shade the sprite each frame (day/night terminator and such).
    pub fn with_shader(mut self, shader: Box<dyn SpriteShader>) -> Self {
        self.shader = Some(shader);
        self
    }

    pub fn with_ring(mut self, ring: Ring) -> Self {
        self.rings.push(ring);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn orbit(&self) -> &Orbit {
        &self.orbit
    }

    /// Re-center the orbit, e.g. after the sun moved on a viewport resize.
    pub fn follow(&mut self, sun_center: Vec2) {
        self.orbit.retarget(sun_center);
    }

    pub fn position(&self) -> Vec2 {
        self.orbit.position()
    }

    pub fn satellites(&self) -> &[Satellite] {
        &self.satellites
    }

    /// Attach a satellite on a circular orbit of the given radius and
    /// period around this planet. The orbit is centered on the planet's
    /// current position and re-centered every frame thereafter.
    pub fn attach(&mut self, mut satellite: Satellite, radius: f32, period_seconds: f64) {
        satellite.attach_orbit(Orbit::new(self.position(), radius, period_seconds));
        self.satellites.push(satellite);
    }

    /// One frame: orbit first, then spin, then children against the new
    /// center.
    pub fn advance(&mut self) {
        let center = self.orbit.advance();
        self.sprite.advance();
        for ring in &mut self.rings {
            ring.advance();
        }
        for sat in &mut self.satellites {
            sat.follow(center);
            sat.advance();
        }
    }

    /// Draw the orbit path, the (possibly shaded) sprite, rings, and
    /// satellites. Fails only on invalid body state; the scene decides
    /// whether to skip the body or abort.
    pub fn render(&self, canvas: &mut dyn Canvas) -> Result<(), RenderError> {
        let center = self.position();

        canvas.stroke_arc(
            self.orbit.center(),
            self.orbit.radius(),
            self.orbit.angle(),
            PATH_SWEEP_DEG,
            PATH_WIDTH,
            Rgba::WHITE,
            Rgba::WHITE.with_alpha(0.0),
        );

        self.render_body(canvas, center);

        for ring in &self.rings {
            ring.render(canvas, center);
        }
        for sat in &self.satellites {
            sat.render(canvas)?;
        }
        Ok(())
    }

    fn render_body(&self, canvas: &mut dyn Canvas, center: Vec2) {
        let Some(shader) = &self.shader else {
            self.sprite.render(canvas, center);
            return;
        };
        match self.sprite.source().pixels() {
            Some(pixels) => {
                let ctx = ShadeContext {
                    orbit_angle: self.orbit.angle(),
                    orbit_radius: self.orbit.radius(),
                    spin_angle: self.sprite.angle(),
                };
                let frame = shader.shade(&pixels, &ctx);
                self.sprite.render_frame(canvas, center, &frame);
            }
            // Shading needs pixels; fall back to the sprite's own deferred
            // draw until the source loads.
            None => self.sprite.render(canvas, center),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::assets::source::LoadedSprite;
    use crate::renderer::canvas::Rgba;
    use crate::renderer::pixmap::Pixmap;
    use crate::renderer::testing::{CanvasOp, RecordingCanvas};
    use crate::systems::lighting::Sunlight;

    fn sprite(size: u32) -> RotatableSprite {
        let source = Rc::new(LoadedSprite::new(Pixmap::new(size, size)));
        RotatableSprite::new(source, 4.0)
    }

    fn planet(radius: f32, period: f64) -> Planet {
        Planet::new(
            "earth",
            Orbit::new(Vec2::new(400.0, 300.0), radius, period),
            sprite(16),
        )
    }

    #[test]
    fn advance_moves_orbit_and_spin() {
        let mut p = planet(120.0, 36.5);
        let before = p.position();
        p.advance();
        assert_ne!(p.position(), before);
        assert!(p.sprite.angle().degrees() > 0.0);
    }

    #[test]
    fn satellite_follows_current_frame_center() {
        let mut p = planet(120.0, 36.5);
        let source = Rc::new(LoadedSprite::new(Pixmap::new(4, 4)));
        p.attach(
            Satellite::new("moon", RotatableSprite::new(source, 2.0)),
            30.0,
            3.0,
        );
        p.advance();
        // The moon's orbit must be centered on where the planet is now.
        let moon_orbit = p.satellites()[0].orbit().unwrap();
        assert_eq!(moon_orbit.center(), p.position());
    }

    #[test]
    fn render_draws_trailing_orbit_path() {
        let p = planet(120.0, 36.5);
        let mut canvas = RecordingCanvas::new();
        p.render(&mut canvas).unwrap();

        match &canvas.ops[0] {
            CanvasOp::Arc {
                center,
                radius,
                sweep_deg,
                head_color,
                tail_color,
                ..
            } => {
                assert_eq!(*center, Vec2::new(400.0, 300.0));
                assert_eq!(*radius, 120.0);
                assert_eq!(*sweep_deg, 120.0);
                assert_eq!(*head_color, Rgba::WHITE);
                assert_eq!(tail_color.a, 0.0);
            }
            other => panic!("expected arc first, got {other:?}"),
        }
    }

    #[test]
    fn render_order_is_path_body_rings_satellites() {
        let mut p = planet(120.0, 36.5).with_ring(Ring::new(
            20.0,
            28.0,
            8.0,
            Rgba::WHITE.with_alpha(0.5),
        ));
        let source = Rc::new(LoadedSprite::new(Pixmap::new(4, 4)));
        p.attach(
            Satellite::new("moon", RotatableSprite::new(source, 2.0)),
            30.0,
            3.0,
        );

        let mut canvas = RecordingCanvas::new();
        p.render(&mut canvas).unwrap();
        assert_eq!(canvas.ops.len(), 4);
        assert!(matches!(canvas.ops[0], CanvasOp::Arc { .. }));
        assert!(matches!(canvas.ops[1], CanvasOp::Pixmap { .. }));
        assert!(matches!(canvas.ops[2], CanvasOp::Ring { .. }));
        assert!(matches!(canvas.ops[3], CanvasOp::Pixmap { .. }));
    }

    #[test]
    fn shaded_planet_still_draws_one_pixmap() {
        let p = planet(120.0, 36.5).with_shader(Box::new(Sunlight));
        let mut canvas = RecordingCanvas::new();
        p.render(&mut canvas).unwrap();
        let pixmaps = canvas
            .ops
            .iter()
            .filter(|op| matches!(op, CanvasOp::Pixmap { .. }))
            .count();
        assert_eq!(pixmaps, 1);
    }

    #[test]
    fn detached_satellite_fails_after_own_body_drew() {
        let mut p = planet(120.0, 36.5);
        let source = Rc::new(LoadedSprite::new(Pixmap::new(4, 4)));
        p.satellites
            .push(Satellite::new("stray", RotatableSprite::new(source, 2.0)));

        let mut canvas = RecordingCanvas::new();
        let err = p.render(&mut canvas).unwrap_err();
        assert!(matches!(err, crate::error::RenderError::DetachedSatellite { .. }));
        // The planet's own path and sprite still went out before the failure.
        assert!(matches!(canvas.ops[0], CanvasOp::Arc { .. }));
        assert!(matches!(canvas.ops[1], CanvasOp::Pixmap { .. }));
    }

    #[test]
    fn follow_recenters_orbit() {
        let mut p = planet(120.0, 36.5);
        p.follow(Vec2::new(500.0, 400.0));
        assert_eq!(p.orbit().center(), Vec2::new(500.0, 400.0));
    }
}
