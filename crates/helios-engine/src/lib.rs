//! Headless animated solar-system engine.
//!
//! Hierarchical circular orbits (planets around a sun, moons and rings
//! around planets), per-frame day/night shading composited in image space,
//! and a drifting starfield — all behind a [`Canvas`] trait so the drawing
//! surface is the embedder's choice. Drive it one frame at a time:
//! [`Scene::advance`] then [`Scene::render`].

pub mod assets;
pub mod components;
pub mod core;
pub mod error;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use assets::catalog::BodyCatalog;
pub use assets::library::SpriteLibrary;
pub use assets::source::{LoadHook, LoadedSprite, PendingSprite, SpriteSource};
pub use components::planet::Planet;
pub use components::ring::Ring;
pub use components::satellite::Satellite;
pub use components::sprite::RotatableSprite;
pub use components::sun::Sun;
pub use crate::core::angle::{per_frame_step, Angle, TARGET_FRAME_RATE};
pub use crate::core::orbit::Orbit;
pub use crate::core::scene::{Scene, SceneConfig, Viewport};
pub use error::{BuildError, RenderError};
pub use renderer::canvas::{Canvas, Rgba};
pub use renderer::pixmap::{Composite, GradientStop, Pixmap, RadialGradient};
pub use renderer::software::SoftwareCanvas;
pub use systems::lighting::{ShadeContext, SpriteShader, Sunlight};
pub use systems::rng::Rng;
pub use systems::starfield::{StarClass, Starfield};
