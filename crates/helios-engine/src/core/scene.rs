//! Scene orchestration.
//!
//! A `Scene` owns the whole render state — starfield, sun, planets — and
//! exposes the two calls a frame driver needs: [`Scene::advance`] and
//! [`Scene::render`]. There is no global instance; embedders create as
//! many scenes as they like and drive them explicitly.

use glam::Vec2;

use crate::assets::catalog::BodyCatalog;
use crate::assets::library::SpriteLibrary;
use crate::components::planet::Planet;
use crate::components::ring::Ring;
use crate::components::satellite::Satellite;
use crate::components::sprite::RotatableSprite;
use crate::components::sun::Sun;
use crate::error::BuildError;
use crate::renderer::canvas::{Canvas, Rgba};
use crate::systems::lighting::Sunlight;
use crate::systems::starfield::Starfield;

use super::orbit::Orbit;

/// Drawing-surface dimensions in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Scene construction knobs.
#[derive(Debug, Clone, Copy)]
pub struct SceneConfig {
    pub viewport: Viewport,
    pub star_count: usize,
    pub star_seed: u64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::new(800.0, 600.0),
            star_count: 300,
            star_seed: 0x5eed,
        }
    }
}

/// A complete animated system: background stars, a central sun, and the
/// planets (with their rings and moons) orbiting it.
pub struct Scene {
    viewport: Viewport,
    starfield: Starfield,
    sun: Sun,
    planets: Vec<Planet>,
}

impl std::fmt::Debug for Scene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scene")
            .field("viewport", &self.viewport)
            .finish_non_exhaustive()
    }
}

impl Scene {
    /// New scene around the given sun, with an empty planet list.
    pub fn new(config: SceneConfig, sun: Sun) -> Self {
        Self {
            viewport: config.viewport,
            starfield: Starfield::new(
                config.star_count,
                config.viewport.width,
                config.viewport.height,
                config.star_seed,
            ),
            sun,
            planets: Vec::new(),
        }
    }

    /// Build a scene from a body catalog, resolving sprite names against
    /// the library. Fails on the first sprite the library does not hold.
    pub fn from_catalog(
        catalog: &BodyCatalog,
        library: &SpriteLibrary,
        config: SceneConfig,
    ) -> Result<Self, BuildError> {
        let resolve = |name: &str| {
            library.get(name).ok_or_else(|| BuildError::MissingSprite {
                name: name.to_owned(),
            })
        };

        let sun_center = config.viewport.center();
        let sun_sprite = RotatableSprite::new(resolve(&catalog.sun.sprite)?, catalog.sun.rotation_period)
            .with_size(catalog.sun.size);
        let mut scene = Scene::new(config, Sun::new(sun_center, sun_sprite));

        for entry in &catalog.planets {
            let sprite = RotatableSprite::new(resolve(&entry.sprite)?, entry.rotation_period)
                .with_size(entry.size);
            let orbit = Orbit::new(sun_center, entry.orbit_radius, entry.orbit_period);
            let mut planet = Planet::new(entry.name.clone(), orbit, sprite);
            if entry.lit {
                planet = planet.with_shader(Box::new(Sunlight));
            }
            for ring in &entry.rings {
                planet = planet.with_ring(Ring::new(
                    ring.inner_radius,
                    ring.outer_radius,
                    ring.period,
                    Rgba::from_array(ring.color),
                ));
            }
            for sat in &entry.satellites {
                let moon_sprite = RotatableSprite::new(resolve(&sat.sprite)?, sat.rotation_period)
                    .with_size(sat.size);
                planet.attach(
                    Satellite::new(sat.name.clone(), moon_sprite),
                    sat.orbit_radius,
                    sat.orbit_period,
                );
            }
            scene.add_planet(planet);
        }
        log::debug!(
            "scene built: {} planets, {} stars",
            scene.planets.len(),
            scene.starfield.len()
        );
        Ok(scene)
    }

    pub fn add_planet(&mut self, planet: Planet) {
        self.planets.push(planet);
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    pub fn sun(&self) -> &Sun {
        &self.sun
    }

    /// Adopt a new viewport: recenter the sun, re-center every planet's
    /// orbit on it, and resize the star drift field.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        let center = viewport.center();
        self.sun.set_center(center);
        for planet in &mut self.planets {
            planet.follow(center);
        }
        self.starfield.set_bounds(viewport.width, viewport.height);
    }

    /// One animation frame for every layer.
    pub fn advance(&mut self) {
        self.starfield.advance();
        self.sun.advance();
        for planet in &mut self.planets {
            planet.advance();
        }
    }

    /// Draw the frame back to front: background, stars, sun, planets.
    ///
    /// A planet that fails to draw is logged and skipped; the rest of the
    /// frame still goes out.
    pub fn render(&self, canvas: &mut dyn Canvas) {
        canvas.clear(Rgba::BLACK);
        self.starfield.render(canvas);
        self.sun.render(canvas);
        for planet in &self.planets {
            if let Err(err) = planet.render(canvas) {
                log::warn!("skipping body '{}': {err}", planet.name());
            }
        }
    }
}
