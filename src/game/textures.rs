// The sprite textures the game needs

use crate::engine::assets::{AssetError, AssetManager, TextureHandle};
use log::debug;

/// Handles to every texture, resolved once at startup
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameTextures {
    pub rocket: TextureHandle,
    pub asteroid: TextureHandle,
    pub mars: TextureHandle,
    pub earth: TextureHandle,
}

impl GameTextures {
    /// Texture names, as found under `textures/`
    pub const NAMES: [&'static str; 4] = ["rocket", "asteroid", "mars", "earth"];

    /// Load all textures; any missing or broken file is an error
    pub fn load(assets: &mut AssetManager) -> Result<Self, AssetError> {
        let textures = Self {
            rocket: assets.load_texture("rocket")?,
            asteroid: assets.load_texture("asteroid")?,
            mars: assets.load_texture("mars")?,
            earth: assets.load_texture("earth")?,
        };

        for (name, handle) in Self::NAMES.iter().zip(textures.handles()) {
            if let Some(info) = assets.texture(handle) {
                debug!("Texture '{}' is {}x{}", name, info.width, info.height);
            }
        }
        Ok(textures)
    }

    fn handles(&self) -> [TextureHandle; 4] {
        [self.rocket, self.asteroid, self.mars, self.earth]
    }
}
