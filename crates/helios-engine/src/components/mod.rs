pub mod planet;
pub mod ring;
pub mod satellite;
pub mod sprite;
pub mod sun;
