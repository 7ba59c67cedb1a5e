//! Asynchronously loaded texture assets.
//!
//! Loading happens once at scene setup, outside the tick loop. A loader
//! returns handles immediately and fills them in whenever the content
//! arrives; the tick path reads handles as `Option` and treats a pending
//! load as "no texture yet", never blocking on it.

use std::sync::Arc;

use parking_lot::RwLock;

/// Decoded 2D texture content.
#[derive(Debug, Clone)]
pub struct TextureData {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Decoded cube-map content: six square faces in +x,-x,+y,-y,+z,-z order.
#[derive(Debug, Clone)]
pub struct CubeMapData {
    pub face_size: u32,
    pub faces: [Vec<u8>; 6],
}

/// A shared slot that starts empty and is resolved once by the loader.
#[derive(Debug)]
pub struct Handle<T> {
    label: String,
    slot: Arc<RwLock<Option<Arc<T>>>>,
}

impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        Self {
            label: self.label.clone(),
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<T> Handle<T> {
    /// Create an unresolved handle.
    pub fn pending(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            slot: Arc::new(RwLock::new(None)),
        }
    }

    /// Create an already-resolved handle (tests, procedural content).
    pub fn resolved(label: impl Into<String>, content: T) -> Self {
        let handle = Self::pending(label);
        handle.resolve(content);
        handle
    }

    /// Fill in the content. Called by the loader when the asset arrives;
    /// later resolutions replace earlier ones.
    pub fn resolve(&self, content: T) {
        *self.slot.write() = Some(Arc::new(content));
    }

    /// The content, or `None` while the load is still in flight.
    pub fn get(&self) -> Option<Arc<T>> {
        self.slot.read().clone()
    }

    pub fn is_resolved(&self) -> bool {
        self.slot.read().is_some()
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

pub type TextureHandle = Handle<TextureData>;
pub type CubeMapHandle = Handle<CubeMapData>;

/// Source of textures and cube maps. Implementations kick off the load and
/// return immediately; the handle resolves later.
pub trait AssetLoader {
    fn load_texture(&self, url: &str) -> TextureHandle;
    fn load_cube_map(&self, urls: &[String; 6]) -> CubeMapHandle;
}

/// Loader that never resolves anything. Headless runs use it; every handle
/// stays pending, which the tick path must tolerate.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullLoader;

impl AssetLoader for NullLoader {
    fn load_texture(&self, url: &str) -> TextureHandle {
        TextureHandle::pending(url)
    }

    fn load_cube_map(&self, urls: &[String; 6]) -> CubeMapHandle {
        CubeMapHandle::pending(&urls[0])
    }
}
