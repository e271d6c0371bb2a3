//! # History Tree Node Addressing
//!
//! Position arithmetic for an append-only binary Merkle tree ("history
//! tree"). Leaves are appended one at a time; an internal node becomes
//! *frozen* once every leaf beneath it has been appended, and each frozen
//! node owns one fixed-size slot in a sequential, append-only label store.
//!
//! ## Core Algebra
//!
//! 1. **Addressing**: a node is a [`Pos`] = ([`Index`], [`Layer`]) where the
//!    index is aligned to `2^layer`
//! 2. **Navigation**: parent, children, sibling, and [`Pos::walk`] toward a
//!    leaf that may not exist yet
//! 3. **Freezing**: [`Pos::frozen_by`] gives the version at which a node
//!    stops changing
//! 4. **Frozen rank**: [`Pos::frozen_count`] orders every node that will ever
//!    freeze; [`Pos::offset`] turns the rank into a byte offset
//!
//! Hashing labels and persisting them belong to the caller; this crate only
//! defines where a [`Label`] lives.
//!
//! ## Usage Example
//!
//! ```
//! use historytree::{Index, Layer, Pos, LABEL_SIZE};
//!
//! # fn main() -> historytree::Result<()> {
//! let root = Pos::node(Index::new(0)?, Layer::new(2)?)?;
//! let (left, right) = root.children()?;
//! assert_eq!(left.sibling(), right);
//! assert_eq!(right.parent()?, root);
//!
//! // (0,2) freezes once leaf 3 is appended and is the 7th label written.
//! assert_eq!(root.frozen_by()?.get(), 3);
//! assert_eq!(root.frozen_count(), 6);
//! assert_eq!(root.offset(), 6 * LABEL_SIZE as i64);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs, missing_debug_implementations)]

// Core modules
pub mod tree; // Layer, Index, Pos and navigation
pub mod ledger; // Freeze versions and frozen-rank bookkeeping
pub mod label; // Fixed-size node labels

// Re-exports for convenience
pub use label::{Label, LabelHash, LABEL_SIZE};
pub use ledger::{frozen_at, frozen_len, FrozenAt};
pub use tree::{Index, Layer, Pos, MAX_INDEX, MAX_LAYER, MAX_LAYERS, MAX_NODES};

use thiserror::Error;

/// Errors raised when a position, index, or layer violates the tree's
/// addressing rules.
///
/// Every variant is a contract violation by the caller; none are transient.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PosError {
    /// Index exceeds [`MAX_INDEX`]
    #[error("index {index} out of range (max {max})", max = MAX_INDEX.get())]
    IndexOutOfRange {
        /// Rejected index
        index: u64,
    },

    /// Layer exceeds [`MAX_LAYER`]
    #[error("layer {layer} out of range (max {max})", max = MAX_LAYER.get())]
    LayerOutOfRange {
        /// Rejected layer
        layer: u8,
    },

    /// Index has bits set below its layer
    #[error("invalid index {index} for layer {layer}")]
    MisalignedIndex {
        /// Rejected index
        index: u64,
        /// Layer the index was paired with
        layer: u8,
    },

    /// Descent requested from a layer-0 position
    #[error("leaf {pos} has no children")]
    LeafHasNoChildren {
        /// The leaf position
        pos: Pos,
    },

    /// Child selector outside {0, 1}
    #[error("child index {child} out of range")]
    ChildIndexOutOfRange {
        /// Rejected selector
        child: u8,
    },

    /// Parent requested for a position already at [`MAX_LAYER`]
    #[error("parent layer out of range for {pos}")]
    ParentOverflow {
        /// The top-layer position
        pos: Pos,
    },

    /// Freeze version of a position is not a representable index
    #[error("freeze version of {pos} out of range")]
    FrozenByOverflow {
        /// The offending position
        pos: Pos,
    },

    /// Byte slice of the wrong length for a [`Label`]
    #[error("label must be {expected} bytes, got {actual}")]
    LabelLength {
        /// Required length
        expected: usize,
        /// Provided length
        actual: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T, E = PosError> = std::result::Result<T, E>;
