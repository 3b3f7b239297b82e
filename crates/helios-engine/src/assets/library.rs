use std::collections::HashMap;
use std::rc::Rc;

use super::source::SpriteSource;

/// Name-keyed registry of sprite sources.
///
/// Catalogs reference sprites by name; the embedder registers sources here
/// (loaded or still pending) before building the scene.
#[derive(Default)]
pub struct SpriteLibrary {
    sources: HashMap<String, Rc<dyn SpriteSource>>,
}

impl SpriteLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a source, replacing any previous one under the same name.
    pub fn insert(&mut self, name: impl Into<String>, source: Rc<dyn SpriteSource>) {
        self.sources.insert(name.into(), source);
    }

    pub fn get(&self, name: &str) -> Option<Rc<dyn SpriteSource>> {
        self.sources.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.sources.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}
