//! Privacy-preserving threshold attestation engine over the Mersenne-31
//! field.
//!
//! The crate proves that a private numeric score meets a public threshold,
//! and, across many periods, that a threshold held consistently, was
//! sustained for a minimum run length, or that score variance stayed
//! bounded. Individual scores never leave the prover.
//!
//! Two protocols share the vocabulary but differ in strength:
//!
//! * the single-threshold path ([`proof`]) uses a simulated proving
//!   backend with a structural verifier;
//! * the batched path ([`batch`]) is a genuine commit-and-fold protocol
//!   whose verifier replays the full Fiat-Shamir transcript.
//!
//! They are deliberately kept separate; see the module docs for the
//! guarantees each one carries.

pub mod batch;
pub mod circuit;
pub mod field;
pub mod hash;
pub mod merkle;
pub mod proof;
pub mod ser;
pub mod store;
pub mod transcript;

pub use batch::{
    generate_consistency_proof, generate_stability_proof, generate_streak_proof,
    verify_consistency_proof, BatchError, ConsistencyProof, ConsistencyVerification, Period,
    StabilityProof, StreakProof, VerifyError,
};
pub use circuit::{Features, VerificationCircuit};
pub use field::{FieldElement, Polynomial};
pub use hash::Hash;
pub use proof::{
    generate_verification_proof, generate_verification_proof_at, prover_info, verify, would_pass,
    ProofRequest, ProofResponse, ThresholdProof, VerificationOutcome,
};
pub use store::{BehaviorSummary, InMemoryTraceStore, TraceRecord, TraceStore};
pub use transcript::Transcript;

/// Result type used by batch proof generation.
pub type StarkResult<T> = core::result::Result<T, BatchError>;
