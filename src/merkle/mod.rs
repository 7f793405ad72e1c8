//! Merkle commitments over serialized trace rows and evaluations.

pub mod proof;
pub mod tree;
pub mod types;

pub use proof::{verify_path, MerkleProof};
pub use tree::{hash_leaf, hash_nodes, CommitmentTree};
pub use types::{MerkleError, PathElement, SiblingPosition};
