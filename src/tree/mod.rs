//! Tree addressing
//!
//! Implicit representation: no tree is ever stored.
//! A node is an (index, layer) pair and every neighbour is computed
//! on demand with bit arithmetic on the index.
//!
//! Layer r nodes sit at indices that are multiples of 2^r, so the node
//! (i, r) spans leaves [i, i + 2^r).

mod index;
mod layer;
mod node;
mod traversal;

pub use index::{Index, MAX_INDEX};
pub use layer::{Layer, MAX_LAYER, MAX_LAYERS};
pub use node::{Pos, MAX_NODES};
