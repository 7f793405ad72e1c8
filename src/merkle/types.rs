//! Shared types for the Merkle commitment layer.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::hash::Hash;

/// Position of a sibling hash relative to the running node while folding an
/// authentication path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SiblingPosition {
    /// The sibling is hashed on the left of the running node.
    Left,
    /// The sibling is hashed on the right of the running node.
    Right,
}

/// One step of an authentication path: a sibling digest and its position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathElement {
    /// Position of the sibling within the parent.
    pub position: SiblingPosition,
    /// Sibling digest.
    pub sibling: Hash,
}

/// Errors emitted by the Merkle layer.
///
/// These indicate construction bugs or corrupted inputs, not expected
/// business outcomes, and are propagated rather than folded into a boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MerkleError {
    /// A proof was requested for a leaf index past the committed leaf count.
    IndexOutOfRange {
        /// Requested leaf index.
        index: usize,
        /// Number of committed leaves.
        leaf_count: usize,
    },
    /// The tree was built from an empty leaf sequence.
    EmptyLeaves,
}

impl fmt::Display for MerkleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MerkleError::IndexOutOfRange { index, leaf_count } => {
                write!(f, "leaf index {index} out of range ({leaf_count} leaves)")
            }
            MerkleError::EmptyLeaves => write!(f, "no leaves supplied"),
        }
    }
}

impl std::error::Error for MerkleError {}
