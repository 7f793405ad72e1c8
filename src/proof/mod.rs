//! Single-threshold proof protocol: simulated prover, structural verifier,
//! and the caller-facing request/response surface.

pub mod api;
pub mod prover;
pub mod types;
pub mod verifier;

pub use api::{
    generate_verification_proof, generate_verification_proof_at, prover_info, would_pass,
    ProofRequest, ProverInfo,
};
pub use prover::{prove, ProverError};
pub use types::{
    ProofBody, ProofMetadata, ProofPublicInputs, ProofResponse, ThresholdProof,
    VerificationOutcome,
};
pub use verifier::verify;
