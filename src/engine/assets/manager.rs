// Central texture registry

use super::{AssetError, AssetHandle, AssetId, AssetLoader, TextureHandle};
use image::{DynamicImage, GenericImageView};
use log::info;
use std::collections::HashMap;
use std::path::Path;

/// A decoded texture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureInfo {
    pub width: u32,
    pub height: u32,
}

/// Loads textures once at startup and hands out handles to them
pub struct AssetManager {
    loader: AssetLoader,
    textures: Vec<TextureInfo>,
    names: HashMap<String, AssetId>,
}

impl AssetManager {
    /// Create a new asset manager
    pub fn new<P: AsRef<Path>>(asset_path: P) -> Self {
        Self {
            loader: AssetLoader::new(asset_path),
            textures: Vec::new(),
            names: HashMap::new(),
        }
    }

    /// Load and decode a texture by name; already loaded names are reused
    pub fn load_texture(&mut self, name: &str) -> Result<TextureHandle, AssetError> {
        if let Some(&id) = self.names.get(name) {
            return Ok(AssetHandle::new(id));
        }

        let bytes = self.loader.load_texture_bytes(name)?;
        let image = image::load_from_memory(&bytes)
            .map_err(|e| AssetError::Decode(format!("{}: {}", name, e)))?;
        let handle = self.insert_image(name, &image);
        info!("Loaded texture '{}' from {}", name, self.loader.base_path().display());
        Ok(handle)
    }

    /// Register an already decoded image under a name
    ///
    /// A name registered twice keeps its handle and takes the new image.
    pub fn insert_image(&mut self, name: &str, image: &DynamicImage) -> TextureHandle {
        let (width, height) = image.dimensions();
        let info = TextureInfo { width, height };

        if let Some(&id) = self.names.get(name) {
            self.textures[id.index()] = info;
            return AssetHandle::new(id);
        }

        let id = AssetId(self.textures.len() as u32);
        self.textures.push(info);
        self.names.insert(name.to_string(), id);
        AssetHandle::new(id)
    }

    /// Size of a loaded texture
    pub fn texture(&self, handle: TextureHandle) -> Option<&TextureInfo> {
        self.textures.get(handle.id.index())
    }

    /// Number of loaded textures
    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }
}
