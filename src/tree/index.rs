//! Index = leaf ordinal or tree version
//!
//! The same integer names a leaf position and the append count at which
//! that leaf was added, so depth helpers double as merge-planning helpers.

use super::{Layer, MAX_LAYER};
use crate::{PosError, Result};
use std::fmt;

/// Highest supported leaf index: `2^MAX_LAYER - 1`.
pub const MAX_INDEX: Index = Index((1 << MAX_LAYER.get()) - 1);

/// Node index or version of the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u64", into = "u64")
)]
pub struct Index(u64);

impl Index {
    /// The first leaf / empty version.
    pub const ZERO: Index = Index(0);

    /// Validate a raw index.
    pub fn new(index: u64) -> Result<Self> {
        if index > MAX_INDEX.0 {
            return Err(PosError::IndexOutOfRange { index });
        }
        Ok(Self(index))
    }

    /// Callers guarantee `index <= MAX_INDEX`.
    #[inline]
    pub(crate) const fn from_raw(index: u64) -> Self {
        debug_assert!(index <= (1 << MAX_LAYER.get()) - 1);
        Self(index)
    }

    /// Raw index value.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Height of the largest full subtree whose rightmost leaf is (i, 0).
    ///
    /// Equal to the number of trailing one bits: appending leaf `i` completes
    /// exactly this many ancestors on top of the leaf itself.
    #[inline]
    pub fn subtree_depth(self) -> Layer {
        // At most MAX_LAYER ones fit below MAX_INDEX.
        Layer::from_raw(self.0.trailing_ones() as u8)
    }

    /// Minimum number of layers above the leaves for a tree containing (i, 0).
    ///
    /// Bit length of `i`; zero for `i = 0`.
    #[inline]
    pub fn tree_depth(self) -> Layer {
        Layer::from_raw((u64::BITS - self.0.leading_zeros()) as u8)
    }
}

impl TryFrom<u64> for Index {
    type Error = PosError;

    fn try_from(index: u64) -> Result<Self> {
        Index::new(index)
    }
}

impl From<Index> for u64 {
    fn from(index: Index) -> u64 {
        index.0
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
