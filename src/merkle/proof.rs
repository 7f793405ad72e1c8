//! Merkle authentication paths and their verification.

use serde::{Deserialize, Serialize};

use crate::hash::Hash;

use super::tree::hash_nodes;
use super::types::{PathElement, SiblingPosition};

/// Opening of a single leaf against a committed root.
///
/// The leaf index is carried for the caller's bookkeeping; verification binds
/// the leaf digest to the root purely through the position-tagged path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerkleProof {
    /// Index of the opened leaf within the committed sequence.
    pub index: usize,
    /// Digest of the opened leaf.
    pub leaf: Hash,
    /// Sibling digests from the leaf level up to the root's children.
    pub path: Vec<PathElement>,
}

impl MerkleProof {
    /// Folds the path and checks the result against `root`.
    pub fn verify(&self, root: &Hash) -> bool {
        verify_path(&self.leaf, &self.path, root)
    }
}

/// Folds a position-tagged authentication path from `leaf` and compares the
/// result with `root`.
pub fn verify_path(leaf: &Hash, path: &[PathElement], root: &Hash) -> bool {
    let mut running = *leaf;
    for element in path {
        running = match element.position {
            SiblingPosition::Left => hash_nodes(&element.sibling, &running),
            SiblingPosition::Right => hash_nodes(&running, &element.sibling),
        };
    }
    running == *root
}

#[cfg(test)]
mod tests {
    use super::super::tree::CommitmentTree;
    use super::*;

    #[test]
    fn tampered_sibling_rejected() {
        let leaves: Vec<Vec<u8>> = (0..4u8).map(|i| vec![i; 4]).collect();
        let tree = CommitmentTree::from_leaves(leaves).expect("non-empty");
        let mut proof = tree.open(2).expect("in range");
        assert!(proof.verify(&tree.root()));

        let mut bytes = proof.path[0].sibling.into_bytes();
        bytes[0] ^= 0x80;
        proof.path[0].sibling = Hash::from_bytes(bytes);
        assert!(!proof.verify(&tree.root()));
    }

    #[test]
    fn flipped_position_tag_rejected() {
        let leaves: Vec<Vec<u8>> = (0..4u8).map(|i| vec![i; 4]).collect();
        let tree = CommitmentTree::from_leaves(leaves).expect("non-empty");
        let mut proof = tree.open(0).expect("in range");

        proof.path[0].position = match proof.path[0].position {
            SiblingPosition::Left => SiblingPosition::Right,
            SiblingPosition::Right => SiblingPosition::Left,
        };
        assert!(!proof.verify(&tree.root()));
    }

    #[test]
    fn proof_serde_roundtrip() {
        let leaves: Vec<Vec<u8>> = (0..3u8).map(|i| vec![i; 4]).collect();
        let tree = CommitmentTree::from_leaves(leaves).expect("non-empty");
        let proof = tree.open(1).expect("in range");

        let json = serde_json::to_string(&proof).expect("serialize");
        let decoded: MerkleProof = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(decoded, proof);
        assert!(decoded.verify(&tree.root()));
    }
}
