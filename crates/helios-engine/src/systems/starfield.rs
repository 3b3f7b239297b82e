//! Drifting background starfield.
//!
//! Stars move radially away from the viewport center each frame, giving a
//! slow fly-through feel. A star that has left the viewport respawns at a
//! fresh uniform position, so density stays constant forever.

use glam::Vec2;

use super::rng::Rng;
use crate::renderer::canvas::{Canvas, Rgba};

/// Divisor for the per-frame outward drift: `pos += (pos - center) / 2500`.
const DRIFT_DIVISOR: f32 = 2500.0;

/// Chance for a freshly spawned star to be a bright one.
const BRIGHT_CHANCE: f32 = 0.01;

/// Visual class of a star, fixed at spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarClass {
    Dim,
    Typical,
    /// Rare (about 1 in 100), larger and fully white.
    Bright,
}

impl StarClass {
    fn roll(rng: &mut Rng) -> Self {
        if rng.chance(BRIGHT_CHANCE) {
            StarClass::Bright
        } else if rng.chance(0.5) {
            StarClass::Dim
        } else {
            StarClass::Typical
        }
    }

    fn radius(self) -> f32 {
        match self {
            StarClass::Dim => 0.5,
            StarClass::Typical => 1.0,
            StarClass::Bright => 1.8,
        }
    }

    fn color(self) -> Rgba {
        match self {
            StarClass::Dim => Rgba::WHITE.with_alpha(0.4),
            StarClass::Typical => Rgba::WHITE.with_alpha(0.7),
            StarClass::Bright => Rgba::WHITE,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Star {
    pos: Vec2,
    class: StarClass,
}

/// Fixed-size pool of drifting stars.
pub struct Starfield {
    stars: Vec<Star>,
    bounds: Vec2,
    rng: Rng,
}

impl Starfield {
    pub fn new(count: usize, width: f32, height: f32, seed: u64) -> Self {
        let mut rng = Rng::new(seed);
        let stars = (0..count)
            .map(|_| Star {
                pos: Vec2::new(rng.range(0.0, width), rng.range(0.0, height)),
                class: StarClass::roll(&mut rng),
            })
            .collect();
        Self {
            stars,
            bounds: Vec2::new(width, height),
            rng,
        }
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    /// Resize the drift field, e.g. after a viewport change. Existing stars
    /// keep their positions; out-of-bounds ones respawn on the next advance.
    pub fn set_bounds(&mut self, width: f32, height: f32) {
        self.bounds = Vec2::new(width, height);
    }

    /// One frame of drift. Each star is first bounds-checked: anything
    /// outside the viewport respawns (with a fresh class roll) instead of
    /// moving, so a respawned star stays put until the following frame.
    pub fn advance(&mut self) {
        let center = self.bounds / 2.0;
        for star in &mut self.stars {
            let inside = star.pos.x >= 0.0
                && star.pos.x < self.bounds.x
                && star.pos.y >= 0.0
                && star.pos.y < self.bounds.y;
            if inside {
                star.pos += (star.pos - center) / DRIFT_DIVISOR;
            } else {
                star.pos = Vec2::new(
                    self.rng.range(0.0, self.bounds.x),
                    self.rng.range(0.0, self.bounds.y),
                );
                star.class = StarClass::roll(&mut self.rng);
            }
        }
    }

    pub fn render(&self, canvas: &mut dyn Canvas) {
        for star in &self.stars {
            canvas.fill_circle(star.pos, star.class.radius(), star.class.color());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::testing::{CanvasOp, RecordingCanvas};

    #[test]
    fn spawns_requested_count_inside_bounds() {
        let field = Starfield::new(200, 800.0, 600.0, 7);
        assert_eq!(field.len(), 200);
        for star in &field.stars {
            assert!((0.0..800.0).contains(&star.pos.x));
            assert!((0.0..600.0).contains(&star.pos.y));
        }
    }

    #[test]
    fn stars_drift_away_from_center() {
        let mut field = Starfield::new(50, 800.0, 600.0, 3);
        let center = Vec2::new(400.0, 300.0);
        let before: Vec<f32> = field.stars.iter().map(|s| s.pos.distance(center)).collect();
        field.advance();
        for (star, d0) in field.stars.iter().zip(before) {
            let d1 = star.pos.distance(center);
            assert!(d1 >= d0, "star moved inward: {d1} < {d0}");
        }
    }

    #[test]
    fn out_of_bounds_star_respawns_inside() {
        let mut field = Starfield::new(1, 800.0, 600.0, 11);
        field.stars[0].pos = Vec2::new(900.0, 300.0);
        field.advance();
        let p = field.stars[0].pos;
        assert!((0.0..800.0).contains(&p.x), "x = {}", p.x);
        assert!((0.0..600.0).contains(&p.y), "y = {}", p.y);
    }

    #[test]
    fn star_exactly_on_boundary_respawns() {
        // The in-bounds interval is half-open; sitting on the right edge
        // already counts as outside.
        let mut field = Starfield::new(1, 800.0, 600.0, 13);
        field.stars[0].pos = Vec2::new(800.0, 300.0);
        field.advance();
        let p = field.stars[0].pos;
        assert!((0.0..800.0).contains(&p.x), "x = {}", p.x);
        assert!((0.0..600.0).contains(&p.y), "y = {}", p.y);
    }

    #[test]
    fn star_exactly_at_center_never_moves() {
        let mut field = Starfield::new(1, 800.0, 600.0, 5);
        field.stars[0].pos = Vec2::new(400.0, 300.0);
        for _ in 0..100 {
            field.advance();
        }
        assert_eq!(field.stars[0].pos, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn bright_stars_are_rare() {
        let field = Starfield::new(10_000, 800.0, 600.0, 42);
        let bright = field
            .stars
            .iter()
            .filter(|s| s.class == StarClass::Bright)
            .count();
        // Expected ~100 of 10k; allow generous slack.
        assert!((20..300).contains(&bright), "bright count = {bright}");
    }

    #[test]
    fn render_emits_one_circle_per_star() {
        let field = Starfield::new(25, 800.0, 600.0, 1);
        let mut canvas = RecordingCanvas::new();
        field.render(&mut canvas);
        assert_eq!(canvas.ops.len(), 25);
        assert!(canvas
            .ops
            .iter()
            .all(|op| matches!(op, CanvasOp::Circle { .. })));
    }

    #[test]
    fn deterministic_for_same_seed() {
        let mut a = Starfield::new(30, 800.0, 600.0, 9);
        let mut b = Starfield::new(30, 800.0, 600.0, 9);
        for _ in 0..50 {
            a.advance();
            b.advance();
        }
        for (sa, sb) in a.stars.iter().zip(&b.stars) {
            assert_eq!(sa.pos, sb.pos);
        }
    }
}
