//! Shared types of the batched proof engine.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::field::{FieldElement, FieldError};
use crate::hash::Hash;
use crate::merkle::{MerkleError, MerkleProof};
use crate::transcript::TranscriptError;

/// One scored period as reported by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    /// Private per-period score in `[0, 100]`.
    pub score: u32,
    /// Period timestamp, Unix seconds.
    pub timestamp: u64,
}

/// Failure results of batch proof generation.
///
/// Below-threshold periods and short streaks are expected business outcomes;
/// their messages name timestamps and lengths but never a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchError {
    /// At least one period is required.
    EmptyPeriods,
    /// A period's score lies outside `[0, 100]`.
    ScoreOutOfRange { timestamp: u64 },
    /// A period's score does not meet the threshold.
    BelowThreshold { timestamp: u64, threshold: u32 },
    /// The longest qualifying run is shorter than the requested minimum.
    StreakTooShort { required: usize, longest: usize },
    /// A trace row failed its internal constraint revalidation.
    RowInvalid { row: usize },
    /// Field arithmetic fault during interpolation or folding.
    Field(FieldError),
    /// Merkle commitment fault.
    Commitment(MerkleError),
    /// Transcript fault while deriving challenges.
    Transcript(TranscriptError),
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchError::EmptyPeriods => write!(f, "at least one period required"),
            BatchError::ScoreOutOfRange { timestamp } => {
                write!(f, "period at timestamp {timestamp} has a score outside [0, 100]")
            }
            BatchError::BelowThreshold { timestamp, threshold } => {
                write!(f, "period at timestamp {timestamp} below threshold {threshold}")
            }
            BatchError::StreakTooShort { required, longest } => {
                write!(f, "longest streak {longest} shorter than required minimum {required}")
            }
            BatchError::RowInvalid { row } => {
                write!(f, "trace row {row} failed constraint revalidation")
            }
            BatchError::Field(err) => write!(f, "field arithmetic fault: {err}"),
            BatchError::Commitment(err) => write!(f, "commitment fault: {err}"),
            BatchError::Transcript(err) => write!(f, "transcript fault: {err}"),
        }
    }
}

impl std::error::Error for BatchError {}

impl From<FieldError> for BatchError {
    fn from(err: FieldError) -> Self {
        BatchError::Field(err)
    }
}

impl From<MerkleError> for BatchError {
    fn from(err: MerkleError) -> Self {
        BatchError::Commitment(err)
    }
}

impl From<TranscriptError> for BatchError {
    fn from(err: TranscriptError) -> Self {
        BatchError::Transcript(err)
    }
}

/// Named protocol-verification failures.
///
/// Each variant identifies the first verification step that diverged, so
/// callers and tests can tell a tampered commitment from a replayed
/// transcript mismatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyError {
    /// The integrity hash over the bundle does not match.
    ProofHashMismatch,
    /// A re-derived folding challenge differs from the recorded one.
    ChallengeMismatch { layer: usize },
    /// A re-derived query index differs from the recorded one.
    IndexMismatch { query: usize },
    /// A recorded opening does not verify against the trace root.
    MerkleProofInvalid { index: usize },
    /// The bundle is structurally malformed.
    MalformedProof(&'static str),
    /// Transcript fault while replaying challenges.
    Transcript(TranscriptError),
}

impl fmt::Display for VerifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerifyError::ProofHashMismatch => write!(f, "proof hash mismatch"),
            VerifyError::ChallengeMismatch { layer } => {
                write!(f, "folding challenge mismatch at layer {layer}")
            }
            VerifyError::IndexMismatch { query } => {
                write!(f, "query index mismatch at query {query}")
            }
            VerifyError::MerkleProofInvalid { index } => {
                write!(f, "merkle opening invalid at index {index}")
            }
            VerifyError::MalformedProof(reason) => write!(f, "malformed proof: {reason}"),
            VerifyError::Transcript(err) => write!(f, "transcript fault: {err}"),
        }
    }
}

impl std::error::Error for VerifyError {}

impl From<TranscriptError> for VerifyError {
    fn from(err: TranscriptError) -> Self {
        VerifyError::Transcript(err)
    }
}

/// Consistency proof bundle: every recorded commitment, challenge and
/// opening needed to replay the transcript, sealed by an integrity hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsistencyProof {
    pub proof_type: String,
    pub version: String,
    pub agent_id: String,
    pub threshold: u32,
    pub period_count: usize,
    pub padded_size: usize,
    pub trace_root: Hash,
    pub composition_root: Hash,
    pub composition_degree: usize,
    pub fri_roots: Vec<Hash>,
    pub fri_challenges: Vec<FieldElement>,
    pub final_constant: FieldElement,
    pub openings: Vec<MerkleProof>,
    /// Earliest period timestamp covered by the proof.
    pub start_timestamp: u64,
    /// Latest period timestamp covered by the proof.
    pub end_timestamp: u64,
    /// Integrity hash over every field above.
    pub proof_hash: Hash,
}

/// Public summary returned by successful consistency verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsistencyVerification {
    pub period_count: usize,
    pub threshold: u32,
    pub start_timestamp: u64,
    pub end_timestamp: u64,
    pub proof_hash: Hash,
}

/// Streak proof: attests a qualifying run of at least `min_streak` periods
/// exists, via a nested consistency proof over exactly that many periods.
///
/// The true (possibly longer) streak length is deliberately not revealed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakProof {
    pub proof_type: String,
    pub version: String,
    pub agent_id: String,
    pub threshold: u32,
    /// The minimum run length that was requested and proven.
    pub claimed_streak: usize,
    pub consistency: ConsistencyProof,
}

/// Stability proof: commits the score list and attests the quantized
/// population variance stayed within a quantized bound.
///
/// The variance check is a plaintext comparison by the generating party,
/// not a zero-knowledge range proof; see the module documentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StabilityProof {
    pub proof_type: String,
    pub version: String,
    pub agent_id: String,
    pub valid: bool,
    pub period_count: usize,
    pub max_variance: u32,
    pub score_root: Hash,
    pub openings: Vec<MerkleProof>,
    pub proof_hash: Hash,
}
