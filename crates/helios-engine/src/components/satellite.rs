use glam::Vec2;

use super::sprite::RotatableSprite;
use crate::core::orbit::Orbit;
use crate::error::RenderError;
use crate::renderer::canvas::Canvas;

/// A moon orbiting a planet.
///
/// A satellite is constructed detached; attaching it to a planet (via
/// [`Planet::attach`](super::planet::Planet::attach)) installs its orbit.
/// Rendering a detached satellite is an invalid-state error, not a silent
/// skip: attachment is part of the type's contract, unlike a sprite that
/// simply has not loaded yet.
pub struct Satellite {
    name: String,
    sprite: RotatableSprite,
    orbit: Option<Orbit>,
}

impl Satellite {
    pub fn new(name: impl Into<String>, sprite: RotatableSprite) -> Self {
        Self {
            name: name.into(),
            sprite,
            orbit: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_attached(&self) -> bool {
        self.orbit.is_some()
    }

    pub fn orbit(&self) -> Option<&Orbit> {
        self.orbit.as_ref()
    }

    /// Install the orbit around the owning planet. Called by the planet at
    /// attach time.
    pub(crate) fn attach_orbit(&mut self, orbit: Orbit) {
        self.orbit = Some(orbit);
    }

    /// Re-center the orbit on the parent's current position. No-op while
    /// detached.
    pub(crate) fn follow(&mut self, parent_center: Vec2) {
        if let Some(orbit) = &mut self.orbit {
            orbit.retarget(parent_center);
        }
    }

    /// One frame: advance the orbit (if attached) and the self-rotation.
    pub fn advance(&mut self) {
        if let Some(orbit) = &mut self.orbit {
            orbit.advance();
        }
        self.sprite.advance();
    }

    pub fn render(&self, canvas: &mut dyn Canvas) -> Result<(), RenderError> {
        let orbit = self.orbit.as_ref().ok_or_else(|| {
            RenderError::DetachedSatellite {
                name: self.name.clone(),
            }
        })?;
        self.sprite.render(canvas, orbit.position());
        Ok(())
    }
}
