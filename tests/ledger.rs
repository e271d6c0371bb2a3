//! Freeze-order ledger tests
//!
//! Replays appends leaf by leaf and checks that the frozen ranks fill the
//! label log densely, with no slot assigned twice.

mod common;

use bitvec::prelude::*;
use common::{idx, node};
use historytree::{frozen_at, frozen_len, Pos, MAX_INDEX, MAX_LAYER};

const VERSIONS: u64 = 1 << 10;

#[test]
fn test_ranks_fill_log_in_append_order() {
    let slots = frozen_len(idx(VERSIONS - 1)) as usize;
    let mut written = bitvec![0; slots];
    let mut next_rank = 0u64;

    for v in 0..VERSIONS {
        for pos in frozen_at(idx(v)) {
            let rank = pos.frozen_count();
            assert_eq!(rank, next_rank, "{} frozen out of order at version {}", pos, v);
            assert!(!written[rank as usize], "slot {} written twice", rank);
            written.set(rank as usize, true);
            next_rank += 1;
        }
        assert_eq!(next_rank, frozen_len(idx(v)), "log length at version {}", v);
    }

    assert!(written.all(), "every slot should be written");
}

#[test]
fn test_every_node_freezes_once() {
    // Each node of the full tree over VERSIONS leaves shows up in exactly
    // one frozen_at set, the one for its frozen_by version.
    let top = VERSIONS.trailing_zeros() as u8;
    let mut seen = bitvec![0; frozen_len(idx(VERSIONS - 1)) as usize];

    for r in 0..=top {
        for i in (0..VERSIONS).step_by(1 << r) {
            let pos = node(i, r);
            let version = pos.frozen_by().expect("inside the replayed range");
            assert!(
                frozen_at(version).any(|p| p == pos),
                "{} missing from frozen_at({})",
                pos,
                version
            );
            seen.set(pos.frozen_count() as usize, true);
        }
    }

    assert!(seen.all(), "full tree covers every slot");
}

#[test]
fn test_is_frozen_matches_replay() {
    let p = node(8, 3);
    for v in 0..32 {
        let frozen = (0..=v).any(|u| frozen_at(idx(u)).any(|q| q == p));
        assert_eq!(p.is_frozen_at(idx(v)), frozen, "version {}", v);
    }
}

#[test]
fn test_top_root_is_last_ever_frozen() {
    let top = node(0, MAX_LAYER.get());
    let last = frozen_at(MAX_INDEX).last();
    assert_eq!(last, Some(top));
    assert_eq!(frozen_len(MAX_INDEX), top.frozen_count() + 1);
    assert!(Pos::leaf(MAX_INDEX).frozen_count() < top.frozen_count());
}
