//! Batched proof engine: consistency, streak and stability proofs over
//! per-period scores.

pub mod consistency;
pub mod stability;
pub mod streak;
pub mod trace;
pub mod types;
pub mod verifier;

pub use consistency::{
    compute_proof_hash, generate_consistency_proof, FRI_FOLD_LAYERS, MAX_TRACE_QUERIES,
};
pub use stability::{compute_stability_hash, generate_stability_proof, MAX_SCORE_QUERIES};
pub use streak::generate_streak_proof;
pub use trace::{TraceRow, MAX_SCORE, NUM_BITS, TRACE_WIDTH};
pub use types::{
    BatchError, ConsistencyProof, ConsistencyVerification, Period, StabilityProof, StreakProof,
    VerifyError,
};
pub use verifier::verify_consistency_proof;
