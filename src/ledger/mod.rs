//! Frozen-node ledger
//!
//! A node freezes at the version where its last leaf is appended.
//! Frozen labels are written once, in freeze order, to an append-only log;
//! the frozen rank of a node is its slot in that log.
//!
//! Freeze order: versions ascend, and within one version the new leaf
//! freezes first, followed by each ancestor it completes, bottom-up.

use crate::label::LABEL_SIZE;
use crate::tree::{Index, Layer, Pos, MAX_NODES};
use crate::{PosError, Result};
use std::iter::FusedIterator;
use tracing::trace;

// Every label slot must be addressable by a signed 64-bit offset.
const _: () = assert!(MAX_NODES <= (i64::MAX as u64) / LABEL_SIZE as u64);

impl Pos {
    /// Version at which this node freezes: the index of its last leaf.
    pub fn frozen_by(&self) -> Result<Index> {
        self.index()
            .get()
            .checked_add(self.layer().mask())
            .and_then(|v| Index::new(v).ok())
            .ok_or(PosError::FrozenByOverflow { pos: *self })
    }

    /// Number of nodes frozen before this one.
    pub fn frozen_count(&self) -> u64 {
        let r = self.layer();
        // Aligned and in range, so the last leaf is at most MAX_INDEX.
        let mut v = self.index().get() + r.mask();

        // The r descendants on the right edge freeze at the same version,
        // just before this node.
        let mut n = u64::from(r.get());

        // for each bit set in the version, add the full subtree it stands for
        while v != 0 {
            let bit = v.trailing_zeros();
            n += (2 << bit) - 1;
            v &= v - 1;
        }
        n
    }

    /// Byte offset of this node's label in an append-only log.
    pub fn offset(&self) -> i64 {
        // Bounded by the assertion on MAX_NODES above.
        (self.frozen_count() * LABEL_SIZE as u64) as i64
    }

    /// Whether this node's label is final once the tree reaches `version`.
    #[inline]
    pub fn is_frozen_at(&self, version: Index) -> bool {
        version.get() >= self.index().get() + self.layer().mask()
    }
}

/// Nodes that freeze exactly when the tree reaches `version`, in rank order.
///
/// That is (version, 0) and every ancestor it completes, so the iterator
/// yields `version.subtree_depth() + 1` positions with consecutive ranks.
pub fn frozen_at(version: Index) -> FrozenAt {
    let top = version.subtree_depth();
    trace!(%version, %top, "frozen at");
    FrozenAt {
        version,
        next: Some(Layer::ZERO),
        top,
    }
}

/// Iterator returned by [`frozen_at`]
#[derive(Debug, Clone)]
pub struct FrozenAt {
    version: Index,
    next: Option<Layer>,
    top: Layer,
}

impl FrozenAt {
    /// Frozen rank of the first node yielded (the leaf).
    pub fn first_rank(&self) -> u64 {
        Pos::leaf(self.version).frozen_count()
    }
}

impl Iterator for FrozenAt {
    type Item = Pos;

    fn next(&mut self) -> Option<Pos> {
        let r = self.next?;
        self.next = if r < self.top { r.up() } else { None };
        let i = Index::from_raw(self.version.get() & !r.mask());
        Some(Pos::from_parts(i, r))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self
            .next
            .map_or(0, |r| usize::from(self.top.get() - r.get()) + 1);
        (left, Some(left))
    }
}

impl ExactSizeIterator for FrozenAt {}

impl FusedIterator for FrozenAt {}

/// Number of labels in the log once the tree reaches `version`.
///
/// Labels written so far occupy `[0, frozen_len(version) * LABEL_SIZE)`.
pub fn frozen_len(version: Index) -> u64 {
    Pos::leaf(version).frozen_count() + u64::from(version.subtree_depth().get()) + 1
}
