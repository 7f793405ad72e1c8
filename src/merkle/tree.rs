//! Domain-separated SHA-256 binary Merkle tree over byte leaves.
//!
//! Layout rules:
//!
//! * Leaves hash as `SHA-256(0x00 || payload)`; internal nodes hash as
//!   `SHA-256(0x01 || left || right)`. The prefixes keep leaf and node
//!   digests in disjoint domains across tree levels.
//! * The leaf sequence is padded up to the next power of two with a fixed
//!   all-zero sentinel leaf; the original leaf count is stored separately.
//! * Nodes live in a flat array with binary-heap addressing: root at
//!   index 1, children of `i` at `2i` and `2i + 1`.
//!
//! The tree is built once from a finalized leaf sequence and never mutated;
//! openings are derived views over the node array.

use crate::hash::{Hash, Hasher};

use super::proof::MerkleProof;
use super::types::{MerkleError, PathElement, SiblingPosition};

/// Domain-separation prefix for leaf hashes.
const LEAF_PREFIX: u8 = 0x00;
/// Domain-separation prefix for internal node hashes.
const NODE_PREFIX: u8 = 0x01;
/// Sentinel payload used to pad the leaf sequence to a power of two: one
/// zeroed field element.
const SENTINEL_LEAF: [u8; 4] = [0u8; 4];

/// Immutable Merkle commitment over a sequence of byte leaves.
#[derive(Debug, Clone)]
pub struct CommitmentTree {
    nodes: Vec<Hash>,
    leaf_count: usize,
    padded_size: usize,
}

impl CommitmentTree {
    /// Builds the tree from a finalized leaf sequence.
    pub fn from_leaves<I, B>(leaves: I) -> Result<Self, MerkleError>
    where
        I: IntoIterator<Item = B>,
        B: AsRef<[u8]>,
    {
        #[cfg(feature = "parallel")]
        let mut hashed: Vec<Hash> = {
            use rayon::prelude::*;
            let collected: Vec<Vec<u8>> =
                leaves.into_iter().map(|leaf| leaf.as_ref().to_vec()).collect();
            collected.par_iter().map(|leaf| hash_leaf(leaf)).collect()
        };
        #[cfg(not(feature = "parallel"))]
        let mut hashed: Vec<Hash> = leaves
            .into_iter()
            .map(|leaf| hash_leaf(leaf.as_ref()))
            .collect();

        let leaf_count = hashed.len();
        if leaf_count == 0 {
            return Err(MerkleError::EmptyLeaves);
        }

        let padded_size = leaf_count.next_power_of_two();
        let sentinel = hash_leaf(&SENTINEL_LEAF);
        hashed.resize(padded_size, sentinel);

        // Heap layout: nodes[padded_size + i] is leaf i, root is nodes[1].
        let mut nodes = vec![Hash::default(); 2 * padded_size];
        nodes[padded_size..].copy_from_slice(&hashed);
        for index in (1..padded_size).rev() {
            nodes[index] = hash_nodes(&nodes[2 * index], &nodes[2 * index + 1]);
        }

        Ok(Self {
            nodes,
            leaf_count,
            padded_size,
        })
    }

    /// Root digest of the commitment.
    pub fn root(&self) -> Hash {
        self.nodes[1]
    }

    /// Number of leaves supplied by the caller (before padding).
    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// Size after padding to a power of two.
    pub fn padded_size(&self) -> usize {
        self.padded_size
    }

    /// Opens the leaf at `index`, collecting sibling digests and their
    /// left/right position tags from the leaf up to the root.
    pub fn open(&self, index: usize) -> Result<MerkleProof, MerkleError> {
        if index >= self.leaf_count {
            return Err(MerkleError::IndexOutOfRange {
                index,
                leaf_count: self.leaf_count,
            });
        }

        let mut path = Vec::new();
        let mut position = self.padded_size + index;
        while position > 1 {
            let sibling = position ^ 1;
            path.push(PathElement {
                position: if sibling < position {
                    SiblingPosition::Left
                } else {
                    SiblingPosition::Right
                },
                sibling: self.nodes[sibling],
            });
            position /= 2;
        }

        Ok(MerkleProof {
            index,
            leaf: self.nodes[self.padded_size + index],
            path,
        })
    }
}

/// Hashes a leaf payload under the leaf domain prefix.
pub fn hash_leaf(payload: &[u8]) -> Hash {
    let mut hasher = Hasher::new();
    hasher.update(&[LEAF_PREFIX]);
    hasher.update(payload);
    hasher.finalize()
}

/// Hashes two child digests under the node domain prefix.
pub fn hash_nodes(left: &Hash, right: &Hash) -> Hash {
    let mut hasher = Hasher::new();
    hasher.update(&[NODE_PREFIX]);
    hasher.update(left.as_bytes());
    hasher.update(right.as_bytes());
    hasher.finalize()
}
