// Asset management system
//
// Textures are decoded once at startup. A texture that cannot be found or
// decoded is an error the caller treats as fatal.

mod handle;
mod loader;
mod manager;

pub use handle::{AssetHandle, AssetId, TextureHandle};
pub use loader::AssetLoader;
pub use manager::AssetManager;

/// Asset loading errors
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Failed to decode asset: {0}")]
    Decode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_error_display() {
        let err = AssetError::NotFound("textures/rocket".to_string());
        assert_eq!(err.to_string(), "Asset not found: textures/rocket");
    }
}
