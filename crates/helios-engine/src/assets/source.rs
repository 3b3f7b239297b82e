//! Sprite resources.
//!
//! The engine never loads or decodes images itself; it depends only on the
//! capability set below. Assets arrive asynchronously, so a source may not
//! be ready when a frame is rendered — that is a normal transient state,
//! not an error. A render that finds its source unloaded registers a
//! one-shot hook; the embedder's loader fires the queued hooks (with a
//! canvas in hand) once the pixels arrive.

use std::cell::RefCell;
use std::rc::Rc;

use crate::renderer::canvas::Canvas;
use crate::renderer::pixmap::Pixmap;

/// One-shot deferred-draw callback, fired by the loader when a pending
/// source finishes: receives the canvas and the freshly decoded pixels.
pub type LoadHook = Box<dyn FnOnce(&mut dyn Canvas, &Pixmap)>;

/// Capability contract for an addressable image asset.
pub trait SpriteSource {
    fn is_loaded(&self) -> bool;

    /// Pixel width; 0 while the source is still loading.
    fn width(&self) -> u32;

    /// Pixel height; 0 while the source is still loading.
    fn height(&self) -> u32;

    /// Drawable pixels, once loaded. The `Rc` makes the handle cheap to
    /// capture in deferred-draw hooks.
    fn pixels(&self) -> Option<Rc<Pixmap>>;

    /// Register a one-shot load-completion hook. Fire-and-forget: the hook
    /// runs at most once, when loading completes.
    fn on_load(&self, hook: LoadHook);
}

/// A source whose pixels are available from construction.
pub struct LoadedSprite {
    pixels: Rc<Pixmap>,
}

impl LoadedSprite {
    pub fn new(pixels: Pixmap) -> Self {
        Self {
            pixels: Rc::new(pixels),
        }
    }
}

impl SpriteSource for LoadedSprite {
    fn is_loaded(&self) -> bool {
        true
    }

    fn width(&self) -> u32 {
        self.pixels.width()
    }

    fn height(&self) -> u32 {
        self.pixels.height()
    }

    fn pixels(&self) -> Option<Rc<Pixmap>> {
        Some(Rc::clone(&self.pixels))
    }

    fn on_load(&self, _hook: LoadHook) {
        // Already loaded; nothing will ever re-fire, so the hook is dropped.
        // Callers only register hooks after observing is_loaded() == false.
    }
}

#[derive(Default)]
struct PendingState {
    pixels: Option<Rc<Pixmap>>,
    hooks: Vec<LoadHook>,
}

/// A source that becomes ready later, driven by the embedder's loader.
///
/// Hooks registered while pending are fired, in registration order, by
/// [`PendingSprite::finish`].
#[derive(Default)]
pub struct PendingSprite {
    state: RefCell<PendingState>,
}

impl PendingSprite {
    pub fn new() -> Self {
        Self::default()
    }

    /// Complete the load: store the pixels and fire all queued hooks
    /// against the given canvas.
    pub fn finish(&self, pixels: Pixmap, canvas: &mut dyn Canvas) {
        let pixels = Rc::new(pixels);
        let hooks = {
            let mut state = self.state.borrow_mut();
            state.pixels = Some(Rc::clone(&pixels));
            std::mem::take(&mut state.hooks)
        };
        for hook in hooks {
            hook(canvas, &pixels);
        }
    }
}

impl SpriteSource for PendingSprite {
    fn is_loaded(&self) -> bool {
        self.state.borrow().pixels.is_some()
    }

    fn width(&self) -> u32 {
        self.state.borrow().pixels.as_ref().map_or(0, |p| p.width())
    }

    fn height(&self) -> u32 {
        self.state.borrow().pixels.as_ref().map_or(0, |p| p.height())
    }

    fn pixels(&self) -> Option<Rc<Pixmap>> {
        self.state.borrow().pixels.clone()
    }

    fn on_load(&self, hook: LoadHook) {
        let mut state = self.state.borrow_mut();
        if state.pixels.is_some() {
            // Load already finished; late hooks have nothing to wait for.
            return;
        }
        state.hooks.push(hook);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::testing::RecordingCanvas;

    #[test]
    fn loaded_sprite_reports_dimensions() {
        let s = LoadedSprite::new(Pixmap::new(8, 6));
        assert!(s.is_loaded());
        assert_eq!(s.width(), 8);
        assert_eq!(s.height(), 6);
        assert!(s.pixels().is_some());
    }

    #[test]
    fn pending_sprite_starts_unloaded() {
        let s = PendingSprite::new();
        assert!(!s.is_loaded());
        assert_eq!(s.width(), 0);
        assert!(s.pixels().is_none());
    }

    #[test]
    fn finish_fires_queued_hooks_once() {
        use std::cell::Cell;

        let s = PendingSprite::new();
        let fired = Rc::new(Cell::new(0));
        let counter = Rc::clone(&fired);
        s.on_load(Box::new(move |_, pixels| {
            assert_eq!(pixels.width(), 4);
            counter.set(counter.get() + 1);
        }));

        let mut canvas = RecordingCanvas::new();
        s.finish(Pixmap::new(4, 4), &mut canvas);
        assert_eq!(fired.get(), 1);
        assert!(s.is_loaded());
    }

    #[test]
    fn hooks_after_finish_are_dropped() {
        let s = PendingSprite::new();
        let mut canvas = RecordingCanvas::new();
        s.finish(Pixmap::new(2, 2), &mut canvas);

        s.on_load(Box::new(|_, _| panic!("late hook must not fire")));
        // Nothing to fire it; finishing twice is not part of the contract.
    }
}
