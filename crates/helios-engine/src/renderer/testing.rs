//! Recording canvas for unit tests: captures the draw-call stream so tests
//! can assert on what a component asked the surface to do.

use glam::Vec2;

use super::canvas::{Canvas, Rgba};
use super::pixmap::Pixmap;
use crate::core::angle::Angle;

#[derive(Debug, Clone, PartialEq)]
pub enum CanvasOp {
    Clear {
        color: Rgba,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    Pixmap {
        center: Vec2,
        rotation: Angle,
        scale: f32,
        width: u32,
        height: u32,
    },
    Arc {
        center: Vec2,
        radius: f32,
        head: Angle,
        sweep_deg: f32,
        width: f32,
        head_color: Rgba,
        tail_color: Rgba,
    },
    Ring {
        center: Vec2,
        inner_radius: f32,
        outer_radius: f32,
        shear: f32,
        rotation: Angle,
        color: Rgba,
    },
}

#[derive(Default)]
pub struct RecordingCanvas {
    pub ops: Vec<CanvasOp>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self, color: Rgba) {
        self.ops.push(CanvasOp::Clear { color });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ops.push(CanvasOp::Circle {
            center,
            radius,
            color,
        });
    }

    fn draw_pixmap(&mut self, pixmap: &Pixmap, center: Vec2, rotation: Angle, scale: f32) {
        self.ops.push(CanvasOp::Pixmap {
            center,
            rotation,
            scale,
            width: pixmap.width(),
            height: pixmap.height(),
        });
    }

    fn stroke_arc(
        &mut self,
        center: Vec2,
        radius: f32,
        head: Angle,
        sweep_deg: f32,
        width: f32,
        head_color: Rgba,
        tail_color: Rgba,
    ) {
        self.ops.push(CanvasOp::Arc {
            center,
            radius,
            head,
            sweep_deg,
            width,
            head_color,
            tail_color,
        });
    }

    fn fill_ring(
        &mut self,
        center: Vec2,
        inner_radius: f32,
        outer_radius: f32,
        shear: f32,
        rotation: Angle,
        color: Rgba,
    ) {
        self.ops.push(CanvasOp::Ring {
            center,
            inner_radius,
            outer_radius,
            shear,
            rotation,
            color,
        });
    }
}
