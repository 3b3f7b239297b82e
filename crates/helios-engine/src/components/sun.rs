use glam::Vec2;

use super::sprite::RotatableSprite;
use crate::renderer::canvas::Canvas;

/// The central star: fixed at the scene center, self-rotating, unshaded
/// (it is the light source).
pub struct Sun {
    center: Vec2,
    sprite: RotatableSprite,
}

impl Sun {
    pub fn new(center: Vec2, sprite: RotatableSprite) -> Self {
        Self { center, sprite }
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Move the sun, e.g. when the viewport is resized.
    pub fn set_center(&mut self, center: Vec2) {
        self.center = center;
    }

    pub fn advance(&mut self) {
        self.sprite.advance();
    }

    pub fn render(&self, canvas: &mut dyn Canvas) {
        self.sprite.render(canvas, self.center);
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::assets::source::LoadedSprite;
    use crate::renderer::pixmap::Pixmap;
    use crate::renderer::testing::{CanvasOp, RecordingCanvas};

    fn sun() -> Sun {
        let source = Rc::new(LoadedSprite::new(Pixmap::new(8, 8)));
        Sun::new(Vec2::new(400.0, 300.0), RotatableSprite::new(source, 5.0))
    }

    #[test]
    fn renders_at_its_center() {
        let sun = sun();
        let mut canvas = RecordingCanvas::new();
        sun.render(&mut canvas);
        match &canvas.ops[0] {
            CanvasOp::Pixmap { center, .. } => assert_eq!(*center, Vec2::new(400.0, 300.0)),
            other => panic!("expected pixmap draw, got {other:?}"),
        }
    }

    #[test]
    fn advance_spins_without_moving() {
        let mut sun = sun();
        sun.advance();
        assert_eq!(sun.center(), Vec2::new(400.0, 300.0));
        assert!(sun.sprite.angle().degrees() > 0.0);
    }
}
