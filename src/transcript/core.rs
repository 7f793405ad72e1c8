//! SHA-256 Fiat-Shamir transcript.
//!
//! The transcript keeps a 32-byte running state, initially all zeros. Every
//! absorb replaces the state with `SHA-256(state || data)`; every squeeze
//! replaces it with `SHA-256(state || tag)` where the tag byte separates the
//! field-element domain (`0xFF`) from the index domain (`0xFE`). Prover and
//! verifier must perform the same sequence of operations in the same order,
//! or their challenges diverge at the first difference.

use crate::field::{FieldElement, MODULUS};
use crate::hash::{Hasher, DIGEST_SIZE};

use super::types::TranscriptError;

/// Domain tag appended before squeezing a field element.
const FIELD_TAG: u8 = 0xFF;
/// Domain tag appended before squeezing an index.
const INDEX_TAG: u8 = 0xFE;

/// Deterministic challenge generator shared by prover and verifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    state: [u8; DIGEST_SIZE],
}

impl Transcript {
    /// Creates a transcript with the all-zero initial state.
    pub fn new() -> Self {
        Self {
            state: [0u8; DIGEST_SIZE],
        }
    }

    /// Absorbs arbitrary bytes, advancing the state.
    pub fn absorb(&mut self, data: &[u8]) {
        let mut hasher = Hasher::new();
        hasher.update(&self.state);
        hasher.update(data);
        self.state = hasher.finalize().into_bytes();
    }

    /// Absorbs a protocol label; identical to [`absorb`](Self::absorb) over
    /// the label's UTF-8 bytes, named for call-site clarity.
    pub fn absorb_label(&mut self, label: &str) {
        self.absorb(label.as_bytes());
    }

    /// Squeezes a field element challenge.
    pub fn squeeze_field(&mut self) -> FieldElement {
        self.advance(FIELD_TAG);
        FieldElement::new(self.leading_word() % u64::from(MODULUS))
    }

    /// Squeezes an index uniform-ish over `0..bound`.
    pub fn squeeze_index(&mut self, bound: usize) -> Result<usize, TranscriptError> {
        if bound == 0 {
            return Err(TranscriptError::EmptyRange);
        }
        self.advance(INDEX_TAG);
        Ok((self.leading_word() % bound as u64) as usize)
    }

    /// Current state digest, exposed for diagnostics and tests.
    pub fn state(&self) -> &[u8; DIGEST_SIZE] {
        &self.state
    }

    fn advance(&mut self, tag: u8) {
        let mut hasher = Hasher::new();
        hasher.update(&self.state);
        hasher.update(&[tag]);
        self.state = hasher.finalize().into_bytes();
    }

    fn leading_word(&self) -> u64 {
        let mut word = [0u8; 8];
        word.copy_from_slice(&self.state[..8]);
        u64::from_le_bytes(word)
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}
