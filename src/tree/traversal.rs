//! Walking toward a leaf
//!
//! A walk only needs the current position and the target index:
//! no path stack is kept, each step is recomputed from bits of the target.
//! The target leaf does not need to exist yet, which lets authentication
//! paths be planned while the tree is still growing.

use super::{Index, Pos};
use crate::{PosError, Result};
use tracing::trace;

impl Pos {
    /// Adjacent node closest to (target, 0).
    ///
    /// If the high bits of `target` do not match this node's index, the
    /// target is outside this subtree and the walk moves to the parent.
    /// Otherwise it descends into the child selected by bit `r - 1` of
    /// `target`, failing with [`PosError::LeafHasNoChildren`] at a leaf.
    pub fn walk(&self, target: Index) -> Result<Pos> {
        let i = self.index().get();
        if target.get() & i != i {
            return self.parent();
        }

        let r = self
            .layer()
            .down()
            .ok_or(PosError::LeafHasNoChildren { pos: *self })?;
        Ok(Pos::from_parts(
            Index::from_raw(i | (r.width() & target.get())),
            r,
        ))
    }

    /// Every node visited going from here to (target, 0), excluding the
    /// start and ending with the target leaf.
    ///
    /// Climbs until the current node covers `target`, then descends one
    /// layer per step. Empty if this node already is the target leaf.
    pub fn walk_path(&self, target: Index) -> Result<Vec<Pos>> {
        let goal = Pos::leaf(target);
        let mut path = Vec::with_capacity(2 * usize::from(self.layer().get()) + 1);
        let mut pos = *self;

        while pos != goal {
            pos = if pos.covers(target) {
                pos.walk(target)?
            } else {
                pos.parent()?
            };
            path.push(pos);
        }

        trace!(start = %self, %target, steps = path.len(), "walk path");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(i: u64, r: u8) -> Pos {
        Pos::try_new(i, r).unwrap()
    }

    fn idx(i: u64) -> Index {
        Index::new(i).unwrap()
    }

    #[test]
    fn test_walk_steps() {
        let rows = [
            ((0, 1), 0, (0, 0)),
            ((0, 1), 1, (1, 0)),
            ((0, 2), 2, (2, 1)),
            ((0, 2), 3, (2, 1)),
            ((0, 3), 3, (0, 2)),
            ((0, 3), 5, (4, 2)),
            ((4, 2), 5, (4, 1)),
            // target outside the subtree: climb
            ((4, 2), 2, (0, 3)),
        ];
        for (start, target, expected) in rows {
            let start = node(start.0, start.1);
            assert_eq!(
                start.walk(idx(target)),
                Ok(node(expected.0, expected.1)),
                "{}.walk({})",
                start,
                target
            );
        }
    }

    #[test]
    fn test_walk_from_leaf_fails() {
        let leaf = node(0, 0);
        assert_eq!(
            leaf.walk(idx(0)),
            Err(PosError::LeafHasNoChildren { pos: leaf })
        );
    }

    #[test]
    fn test_walk_path_descends() {
        let path = node(0, 3).walk_path(idx(5)).unwrap();
        assert_eq!(path, vec![node(4, 2), node(4, 1), node(5, 0)]);
    }

    #[test]
    fn test_walk_path_climbs_then_descends() {
        // 13 shares bit 2 with (4,2) but is not beneath it
        let path = node(4, 2).walk_path(idx(13)).unwrap();
        assert_eq!(
            path,
            vec![node(0, 3), node(0, 4), node(8, 3), node(12, 2), node(12, 1), node(13, 0)]
        );
    }

    #[test]
    fn test_walk_path_to_self_is_empty() {
        assert!(node(6, 0).walk_path(idx(6)).unwrap().is_empty());
    }
}
