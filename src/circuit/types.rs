//! Public and private inputs of the single-threshold circuit.

use serde::{Deserialize, Serialize};

use crate::field::FieldElement;
use crate::hash::Hash;

use super::score::Features;

/// Byte length of the fixed public-input encoding.
const PUBLIC_INPUTS_BYTES: usize = 72;

/// Public statement of a single-threshold proof.
///
/// Never carries the private score; the commitment binds the statement to an
/// agent identity without revealing anything about the witness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicInputs {
    /// Minimum score being attested.
    pub threshold: FieldElement,
    /// Hex digest binding the statement to the agent identity.
    pub commitment: String,
    /// Proof creation time, Unix seconds.
    pub timestamp: u64,
    /// Time after which the proof no longer verifies, Unix seconds.
    pub expiry: u64,
}

impl PublicInputs {
    /// Fixed 72-byte encoding absorbed into the transcript: threshold as a
    /// u64 LE word, the 32-byte commitment digest, timestamp and expiry as
    /// u64 LE words, zero-padded tail.
    pub fn to_bytes(&self) -> [u8; PUBLIC_INPUTS_BYTES] {
        let mut out = [0u8; PUBLIC_INPUTS_BYTES];
        out[0..8].copy_from_slice(&self.threshold.as_u64().to_le_bytes());
        if let Some(digest) = Hash::from_hex(&self.commitment) {
            out[8..40].copy_from_slice(digest.as_bytes());
        }
        out[40..48].copy_from_slice(&self.timestamp.to_le_bytes());
        out[48..56].copy_from_slice(&self.expiry.to_le_bytes());
        out
    }
}

/// Private witness of a single-threshold proof.
///
/// Exists only while a proof is being constructed; never serialized into the
/// emitted proof object.
#[derive(Debug, Clone)]
pub struct PrivateWitness {
    /// The private score.
    pub score: FieldElement,
    /// Raw features the score was derived from.
    pub features: Features,
}

impl PrivateWitness {
    pub fn new(score: u32, features: Features) -> Self {
        Self {
            score: FieldElement::new(u64::from(score)),
            features,
        }
    }
}
