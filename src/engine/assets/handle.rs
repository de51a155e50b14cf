// Typed handles into the asset registry

use std::marker::PhantomData;

/// Slot of an asset in its registry, in load order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetId(pub(crate) u32);

impl AssetId {
    #[cfg(test)]
    pub fn from_index(index: u32) -> Self {
        Self(index)
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// Handle to a loaded asset of kind `T`
///
/// Handles are plain copies of an id; a texture handle can never be passed
/// where another asset kind is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetHandle<T> {
    pub(crate) id: AssetId,
    _kind: PhantomData<T>,
}

impl<T> AssetHandle<T> {
    pub(crate) fn new(id: AssetId) -> Self {
        Self {
            id,
            _kind: PhantomData,
        }
    }
}

/// Marker for texture handles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureAsset;

pub type TextureHandle = AssetHandle<TextureAsset>;
