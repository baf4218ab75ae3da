// Type-safe asset handle system

use std::fmt;
use std::marker::PhantomData;

/// Type-safe handle to an asset owned by an [`AssetRegistry`](super::AssetRegistry)
///
/// Handles are only minted by the registry when an asset is stored, so holding
/// one means the asset was loaded. The `T` parameter keeps texture and sprite
/// handles from being mixed up.
pub struct AssetHandle<T> {
    index: usize,
    _phantom: PhantomData<fn() -> T>,
}

impl<T> AssetHandle<T> {
    pub(crate) fn new(index: usize) -> Self {
        Self {
            index,
            _phantom: PhantomData,
        }
    }

    /// Slot of the asset inside its registry table
    pub fn index(&self) -> usize {
        self.index
    }
}

// Manual impls so `T` itself needs no bounds.
impl<T> Clone for AssetHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for AssetHandle<T> {}

impl<T> PartialEq for AssetHandle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<T> Eq for AssetHandle<T> {}

impl<T> std::hash::Hash for AssetHandle<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.index.hash(state);
    }
}

impl<T> fmt::Debug for AssetHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AssetHandle").field(&self.index).finish()
    }
}

// Marker types for different asset types
pub struct TextureAsset;
pub struct SpriteAsset;

/// Convenience type aliases
pub type TextureHandle = AssetHandle<TextureAsset>;
pub type SpriteHandle = AssetHandle<SpriteAsset>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_handle_equality() {
        let a: TextureHandle = AssetHandle::new(3);
        let b: TextureHandle = AssetHandle::new(3);
        let c: TextureHandle = AssetHandle::new(4);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_handle_is_copy_and_hashable() {
        let handle: SpriteHandle = AssetHandle::new(7);
        let copy = handle;

        let mut set = HashSet::new();
        set.insert(handle);
        assert!(set.contains(&copy));
        assert_eq!(copy.index(), 7);
    }
}
