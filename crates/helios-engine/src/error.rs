//! Engine error types.

use thiserror::Error;

/// A body could not be drawn because its state is invalid.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    /// A satellite was asked to render before being attached to a planet.
    #[error("satellite '{name}' is not attached to a planet")]
    DetachedSatellite { name: String },
}

/// Scene construction from a body catalog failed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    /// The catalog references a sprite the library does not hold.
    #[error("no sprite registered for '{name}'")]
    MissingSprite { name: String },
}
