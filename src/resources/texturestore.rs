use raylib::prelude::Texture2D;
use rustc_hash::FxHashMap;

/// Loaded textures keyed by string IDs.
///
/// Lives as a non-send resource because raylib textures belong to the main
/// thread that owns the GL context.
#[derive(Default)]
pub struct TextureStore {
    map: FxHashMap<String, Texture2D>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, texture: Texture2D) {
        self.map.insert(key.into(), texture);
    }

    pub fn get(&self, key: &str) -> Option<&Texture2D> {
        self.map.get(key)
    }
}
