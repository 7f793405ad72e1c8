//! Structural verification of single-threshold proofs.
//!
//! Matching the reduced guarantee of the simulated prover, verification
//! checks the proof's shape and validity window only: type and version
//! tags, presence of a well-formed trace commitment, and expiry. The hash
//! chain is not cryptographically re-derived here.

use crate::hash::Hash;

use super::types::{ThresholdProof, VerificationOutcome, PROOF_TYPE, PROOF_VERSION};

/// Verifies a single-threshold proof against wall-clock time `now`.
pub fn verify(proof: &ThresholdProof, now: u64) -> VerificationOutcome {
    if proof.proof_type != PROOF_TYPE {
        return VerificationOutcome::invalid("invalid proof type");
    }
    if proof.version != PROOF_VERSION {
        return VerificationOutcome::invalid(format!(
            "unsupported proof version: {}",
            proof.version
        ));
    }
    if Hash::from_hex(&proof.proof.trace_commitment).is_none() {
        return VerificationOutcome::invalid("missing or malformed trace commitment");
    }
    if now > proof.public_inputs.expiry {
        return VerificationOutcome::invalid("proof expired");
    }

    VerificationOutcome {
        valid: true,
        commitment: Some(proof.commitment.clone()),
        threshold: Some(proof.public_inputs.threshold),
        expiry: Some(proof.public_inputs.expiry),
        error: None,
    }
}
