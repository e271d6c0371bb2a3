//! Node labels
//!
//! A label is the SHA-512/256 digest of a node. Computing it from child
//! labels is the caller's job; this module fixes its size and byte layout
//! so labels can be stored back to back at [`Pos::offset`](crate::Pos::offset).

use crate::{PosError, Result};
use sha2::digest::Output;
use std::fmt;

/// Hash function used to produce labels.
pub type LabelHash = sha2::Sha512_256;

/// Number of bytes in a label.
pub const LABEL_SIZE: usize = 32;

/// Label of a node (a SHA-512/256 hash)
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Label([u8; LABEL_SIZE]);

impl Label {
    /// Wrap raw digest bytes.
    pub const fn new(bytes: [u8; LABEL_SIZE]) -> Self {
        Self(bytes)
    }

    /// Raw bytes, in storage order.
    pub fn as_bytes(&self) -> &[u8; LABEL_SIZE] {
        &self.0
    }

    /// Consume the label and return its bytes.
    pub fn into_bytes(self) -> [u8; LABEL_SIZE] {
        self.0
    }
}

impl From<[u8; LABEL_SIZE]> for Label {
    fn from(bytes: [u8; LABEL_SIZE]) -> Self {
        Self(bytes)
    }
}

impl From<Output<LabelHash>> for Label {
    fn from(digest: Output<LabelHash>) -> Self {
        let mut bytes = [0u8; LABEL_SIZE];
        bytes.copy_from_slice(&digest);
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for Label {
    type Error = PosError;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; LABEL_SIZE] = bytes.try_into().map_err(|_| PosError::LabelLength {
            expected: LABEL_SIZE,
            actual: bytes.len(),
        })?;
        Ok(Self(bytes))
    }
}

impl AsRef<[u8]> for Label {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Label(0x{})", self)
    }
}
