use std::collections::HashMap;

use crate::image::Addressing;
use crate::image::color::RawTexel;

/// Caller-owned backing storage for one image, addressed by flat index.
///
/// Indices come from [`Addressing::index`] and are always below the
/// addressing capacity. A store sized for a smaller capacity is a bug;
/// implementations panic rather than drop the access.
pub trait TexelStore {
    fn load(&self, index: usize) -> RawTexel;
    fn store(&mut self, index: usize, texel: RawTexel);
}

/// Contiguous store holding every addressable texel.
///
/// # Panics
/// Loads and stores panic on an index at or past [`len`](Self::len).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseTexels {
    texels: Vec<RawTexel>,
}

impl DenseTexels {
    /// Zero-filled store of `capacity` texels.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            texels: vec![[0; 4]; capacity],
        }
    }

    /// Zero-filled store covering every index `image` produces.
    #[must_use]
    pub fn for_image<const N: usize>(image: &Addressing<N>) -> Self {
        Self::new(image.capacity())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.texels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.texels.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[RawTexel] {
        &self.texels
    }

    fn check(&self, index: usize) {
        assert!(
            index < self.texels.len(),
            "texel index {index} out of range for a store of {} texels",
            self.texels.len()
        );
    }
}

impl TexelStore for DenseTexels {
    fn load(&self, index: usize) -> RawTexel {
        self.check(index);
        self.texels[index]
    }

    fn store(&mut self, index: usize, texel: RawTexel) {
        self.check(index);
        self.texels[index] = texel;
    }
}

/// Store that only keeps written texels; unwritten ones read as zero.
///
/// Suits the default capacities, where a dense 2-D store would need
/// `2^26` texels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SparseTexels {
    texels: HashMap<usize, RawTexel>,
}

impl SparseTexels {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of texels written so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.texels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.texels.is_empty()
    }
}

impl TexelStore for SparseTexels {
    fn load(&self, index: usize) -> RawTexel {
        self.texels.get(&index).copied().unwrap_or_default()
    }

    fn store(&mut self, index: usize, texel: RawTexel) {
        self.texels.insert(index, texel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dense_starts_zeroed() {
        let store = DenseTexels::new(4);
        assert_eq!(store.len(), 4);
        assert!(store.as_slice().iter().all(|t| *t == [0; 4]));
    }

    #[test]
    fn test_dense_store_and_load() {
        let mut store = DenseTexels::new(4);
        store.store(2, [1, 2, 3, 4]);
        assert_eq!(store.load(2), [1, 2, 3, 4]);
        assert_eq!(store.load(1), [0; 4]);
    }

    #[test]
    fn test_for_image_matches_capacity() {
        let image = Addressing::new([16, 8]);
        let mut store = DenseTexels::for_image(&image);
        assert_eq!(store.len(), 128);
        store.store(image.index([100i32, 100]), [7; 4]);
        assert_eq!(store.load(127), [7; 4]);
    }

    #[test]
    #[should_panic(expected = "texel index 16 out of range for a store of 16 texels")]
    fn test_dense_load_past_end() {
        let store = DenseTexels::new(16);
        let _ = store.load(16);
    }

    #[test]
    #[should_panic(expected = "out of range for a store of 16 texels")]
    fn test_undersized_store_rejects_write() {
        let image = crate::image::Image2d::image2d(&crate::image::ImageLimits::default());
        let mut store = DenseTexels::new(16);
        image.write(&mut store, [100i32, 100], crate::image::Uint4([7; 4]));
    }

    #[test]
    fn test_sparse_default_zero() {
        let mut store = SparseTexels::new();
        assert!(store.is_empty());
        assert_eq!(store.load(1 << 20), [0; 4]);
        store.store(1 << 20, [9; 4]);
        assert_eq!(store.load(1 << 20), [9; 4]);
        assert_eq!(store.len(), 1);
    }
}
