pub mod angle;
pub mod orbit;
pub mod scene;
