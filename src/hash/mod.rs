//! Canonical hashing primitives for the attestation engine.

pub mod sha256;

pub use sha256::{hash, Hash, Hasher, DIGEST_SIZE};
