// Asset loading functionality

use super::AssetError;
use std::path::{Path, PathBuf};

/// Directory under the asset root holding sprite textures
const TEXTURE_DIR: &str = "textures";

/// Extensions tried, in order, when resolving a texture by name
const TEXTURE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Asset loader responsible for finding and reading asset files
pub struct AssetLoader {
    base_path: PathBuf,
}

impl AssetLoader {
    /// Create a new asset loader with the given base path
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Find the file backing a texture name such as `"rocket"`
    pub fn resolve_texture(&self, name: &str) -> Option<PathBuf> {
        let dir = self.base_path.join(TEXTURE_DIR);
        TEXTURE_EXTENSIONS
            .iter()
            .map(|ext| dir.join(format!("{}.{}", name, ext)))
            .find(|path| path.is_file())
    }

    /// Load texture bytes from disk
    pub fn load_texture_bytes(&self, name: &str) -> Result<Vec<u8>, AssetError> {
        let path = self.resolve_texture(name).ok_or_else(|| {
            AssetError::NotFound(
                self.base_path
                    .join(TEXTURE_DIR)
                    .join(name)
                    .to_string_lossy()
                    .to_string(),
            )
        })?;

        Ok(std::fs::read(&path)?)
    }

    /// Get the base path
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_texture_is_not_found() {
        let loader = AssetLoader::new("/definitely/not/here");
        assert!(loader.resolve_texture("rocket").is_none());

        let err = loader.load_texture_bytes("rocket").unwrap_err();
        assert!(matches!(err, AssetError::NotFound(path) if path.ends_with("rocket")));
    }

    #[test]
    fn test_base_path() {
        let loader = AssetLoader::new("/game/assets");
        assert_eq!(loader.base_path(), Path::new("/game/assets"));
    }
}
