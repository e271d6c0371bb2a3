//! Layer = height above the leaf row
//!
//! Layer 0 holds the leaves. A node at layer r roots a full subtree
//! of 2^r leaves and 2^(r+1) - 1 nodes.

use super::Index;
use crate::{PosError, Result};
use std::fmt;

/// Maximum number of layers supported (1-indexed count).
pub const MAX_LAYERS: u8 = 58;

/// Highest supported layer (0-indexed).
pub const MAX_LAYER: Layer = Layer(MAX_LAYERS - 1);

/// Layer component of a node, or a height offset from the base of the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub struct Layer(u8);

impl Layer {
    /// The leaf layer.
    pub const ZERO: Layer = Layer(0);

    /// Validate a raw layer.
    pub fn new(layer: u8) -> Result<Self> {
        if layer > MAX_LAYER.0 {
            return Err(PosError::LayerOutOfRange { layer });
        }
        Ok(Self(layer))
    }

    /// Callers guarantee `layer <= MAX_LAYER`.
    #[inline]
    pub(crate) const fn from_raw(layer: u8) -> Self {
        debug_assert!(layer <= MAX_LAYERS - 1);
        Self(layer)
    }

    /// Raw layer value.
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Highest index in a full subtree rooted at (0, r): `2^r - 1`.
    ///
    /// Also the mask of index bits that must be clear at this layer.
    #[inline]
    pub fn max_index(self) -> Index {
        Index::from_raw(self.mask())
    }

    /// Number of nodes in a full subtree rooted at (0, r): `2^(r+1) - 1`.
    #[inline]
    pub fn subtree_count(self) -> u64 {
        self.mask() | self.width()
    }

    /// The layer above, if any.
    #[inline]
    pub fn up(self) -> Option<Layer> {
        (self < MAX_LAYER).then(|| Layer(self.0 + 1))
    }

    /// The layer below, if any.
    #[inline]
    pub fn down(self) -> Option<Layer> {
        self.0.checked_sub(1).map(Layer)
    }

    /// Leaves spanned by one node at this layer: `2^r`.
    #[inline]
    pub(crate) const fn width(self) -> u64 {
        1 << self.0
    }

    #[inline]
    pub(crate) const fn mask(self) -> u64 {
        self.width() - 1
    }
}

impl TryFrom<u8> for Layer {
    type Error = PosError;

    fn try_from(layer: u8) -> Result<Self> {
        Layer::new(layer)
    }
}

impl From<Layer> for u8 {
    fn from(layer: Layer) -> u8 {
        layer.0
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::MAX_INDEX;

    #[test]
    fn test_invalid_layer() {
        assert_eq!(
            Layer::new(MAX_LAYERS),
            Err(PosError::LayerOutOfRange { layer: MAX_LAYERS })
        );
        assert!(Layer::new(u8::MAX).is_err());
        assert_eq!(Layer::new(MAX_LAYERS - 1), Ok(MAX_LAYER));
    }

    #[test]
    fn test_max_index() {
        for (r, i) in [(0u8, 0u64), (1, 1), (2, 3), (3, 7)] {
            assert_eq!(Layer::new(r).unwrap().max_index().get(), i, "layer {}", r);
        }

        // Each layer's span is the node count of the layer below, plus one leaf.
        for r in 4..MAX_LAYER.get() {
            let layer = Layer::new(r).unwrap();
            let above = layer.up().unwrap();
            assert_eq!(above.max_index().get(), layer.subtree_count());
        }

        assert_eq!(MAX_LAYER.max_index(), MAX_INDEX);
    }

    #[test]
    fn test_subtree_count() {
        for (r, n) in [(0u8, 1u64), (1, 3), (2, 7), (3, 15)] {
            assert_eq!(Layer::new(r).unwrap().subtree_count(), n, "layer {}", r);
        }
    }

    #[test]
    fn test_up_down_bounds() {
        assert_eq!(Layer::ZERO.down(), None);
        assert_eq!(MAX_LAYER.up(), None);
        assert_eq!(Layer::ZERO.up(), Some(Layer::new(1).unwrap()));
        assert_eq!(MAX_LAYER.down().and_then(Layer::up), Some(MAX_LAYER));
    }
}
