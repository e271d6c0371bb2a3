//! Tree node position
//!
//! Node = (index, layer) with index a multiple of 2^layer
//! Children: (i, r-1) and (i + 2^(r-1), r-1)
//! Parent: (i with the low r+1 bits cleared, r+1)

use super::{Index, Layer, MAX_LAYER, MAX_LAYERS};
use crate::{PosError, Result};
use std::fmt;

/// Maximum number of nodes in a single tree: `2^MAX_LAYERS - 1`.
pub const MAX_NODES: u64 = (1 << MAX_LAYERS) - 1;

/// Location of a node in the tree
///
/// Always valid: the index fits, the layer fits, and the index is aligned
/// to the layer. Every operation returns a fresh value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawPos", into = "RawPos")
)]
pub struct Pos {
    i: Index,
    r: Layer,
}

impl Pos {
    /// Node at index `i` on layer `r`.
    ///
    /// Fails with [`PosError::MisalignedIndex`] if `i` has any bit set
    /// below `r`.
    pub fn node(i: Index, r: Layer) -> Result<Self> {
        if i.get() & r.mask() != 0 {
            return Err(PosError::MisalignedIndex {
                index: i.get(),
                layer: r.get(),
            });
        }
        Ok(Self { i, r })
    }

    /// Node from raw integers, validating all three constraints.
    pub fn try_new(index: u64, layer: u8) -> Result<Self> {
        Self::node(Index::new(index)?, Layer::new(layer)?)
    }

    /// Leaf node at `i`.
    #[inline]
    pub fn leaf(i: Index) -> Self {
        Self { i, r: Layer::ZERO }
    }

    /// Callers guarantee `i` is aligned to `r`.
    #[inline]
    pub(crate) fn from_parts(i: Index, r: Layer) -> Self {
        debug_assert_eq!(i.get() & r.mask(), 0, "misaligned ({},{})", i, r);
        Self { i, r }
    }

    /// Leftmost leaf index spanned by this node.
    #[inline]
    pub fn index(&self) -> Index {
        self.i
    }

    /// Height above the leaves.
    #[inline]
    pub fn layer(&self) -> Layer {
        self.r
    }

    /// Check if leaf (layer 0)
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.r == Layer::ZERO
    }

    /// Whether (i, 0) lies under this node.
    #[inline]
    pub fn covers(&self, i: Index) -> bool {
        i.get() & !self.r.mask() == self.i.get()
    }

    /// Left (0) or right (1) child.
    pub fn child(&self, bit: u8) -> Result<Pos> {
        let r = self
            .r
            .down()
            .ok_or(PosError::LeafHasNoChildren { pos: *self })?;
        if bit > 1 {
            return Err(PosError::ChildIndexOutOfRange { child: bit });
        }
        Ok(Pos::from_parts(
            Index::from_raw(self.i.get() + (u64::from(bit) << r.get())),
            r,
        ))
    }

    /// Both children, left first.
    pub fn children(&self) -> Result<(Pos, Pos)> {
        Ok((self.child(0)?, self.child(1)?))
    }

    /// Parent node.
    ///
    /// Fails with [`PosError::ParentOverflow`] at [`MAX_LAYER`].
    pub fn parent(&self) -> Result<Pos> {
        let r = self.r.up().ok_or(PosError::ParentOverflow { pos: *self })?;
        // clear all the descendant bits
        Ok(Pos::from_parts(Index::from_raw(self.i.get() & !r.mask()), r))
    }

    /// The opposite child under the same parent.
    ///
    /// The root at [`MAX_LAYER`] has no sibling and is returned unchanged.
    pub fn sibling(&self) -> Pos {
        if self.r == MAX_LAYER {
            return *self;
        }
        // flip the bit at this layer
        Pos::from_parts(Index::from_raw(self.i.get() ^ self.r.width()), self.r)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.i, self.r)
    }
}

/// Wire form of [`Pos`]; converted back through [`Pos::try_new`].
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawPos {
    index: u64,
    layer: u8,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPos> for Pos {
    type Error = PosError;

    fn try_from(raw: RawPos) -> Result<Self> {
        Pos::try_new(raw.index, raw.layer)
    }
}

#[cfg(feature = "serde")]
impl From<Pos> for RawPos {
    fn from(pos: Pos) -> Self {
        RawPos {
            index: pos.i.get(),
            layer: pos.r.get(),
        }
    }
}
