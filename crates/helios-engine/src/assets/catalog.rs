//! Declarative scene content.
//!
//! A `BodyCatalog` describes what orbits what, with which sprite, size,
//! and periods — data, not code. Scenes are built from a catalog plus a
//! [`SpriteLibrary`](super::library::SpriteLibrary) resolving the sprite
//! names; catalogs round-trip through JSON so content can live in files.

use serde::{Deserialize, Serialize};

/// Full description of a sun-centered system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyCatalog {
    pub sun: SunEntry,
    pub planets: Vec<PlanetEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SunEntry {
    /// Sprite name, resolved against the sprite library.
    pub sprite: String,
    /// Rendered size in canvas pixels.
    pub size: f32,
    /// Self-rotation period in seconds.
    pub rotation_period: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanetEntry {
    pub name: String,
    pub sprite: String,
    pub size: f32,
    pub orbit_radius: f32,
    /// Orbital period in seconds.
    pub orbit_period: f64,
    pub rotation_period: f64,
    /// Day/night shading toggle; on unless the entry opts out.
    #[serde(default = "default_lit")]
    pub lit: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rings: Vec<RingEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub satellites: Vec<SatelliteEntry>,
}

fn default_lit() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RingEntry {
    pub inner_radius: f32,
    pub outer_radius: f32,
    /// Spin period in seconds.
    pub period: f64,
    /// RGBA in [0, 1].
    pub color: [f32; 4],
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SatelliteEntry {
    pub name: String,
    pub sprite: String,
    pub size: f32,
    pub orbit_radius: f32,
    pub orbit_period: f64,
    pub rotation_period: f64,
}

impl BodyCatalog {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// The classic nine-planet line-up, tuned for an 800×600 viewport.
    pub fn solar_system() -> Self {
        let planet = |name: &str, size: f32, radius: f32, orbit: f64, rotation: f64| PlanetEntry {
            name: name.into(),
            sprite: name.into(),
            size,
            orbit_radius: radius,
            orbit_period: orbit,
            rotation_period: rotation,
            lit: true,
            rings: Vec::new(),
            satellites: Vec::new(),
        };

        let mut earth = planet("earth", 18.0, 120.0, 36.5, 6.0);
        earth.satellites.push(SatelliteEntry {
            name: "moon".into(),
            sprite: "moon".into(),
            size: 6.0,
            orbit_radius: 16.0,
            orbit_period: 3.0,
            rotation_period: 3.0,
        });

        let mut saturn = planet("saturn", 30.0, 240.0, 294.0, 4.5);
        saturn.rings.push(RingEntry {
            inner_radius: 22.0,
            outer_radius: 30.0,
            period: 60.0,
            color: [0.85, 0.78, 0.6, 0.5],
        });

        BodyCatalog {
            sun: SunEntry {
                sprite: "sun".into(),
                size: 70.0,
                rotation_period: 25.0,
            },
            planets: vec![
                planet("mercury", 8.0, 60.0, 8.8, 5.9),
                planet("venus", 14.0, 90.0, 22.5, 24.0),
                earth,
                planet("mars", 12.0, 150.0, 68.7, 6.2),
                planet("jupiter", 40.0, 195.0, 120.0, 2.5),
                saturn,
                planet("uranus", 24.0, 280.0, 840.0, 4.3),
                planet("neptune", 22.0, 320.0, 1650.0, 4.0),
                planet("pluto", 6.0, 350.0, 2480.0, 38.0),
            ],
        }
    }
}
