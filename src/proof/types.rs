//! Wire types of the single-threshold proof protocol.

use serde::{Deserialize, Serialize};

/// Proof-type tag carried by every single-threshold proof.
pub const PROOF_TYPE: &str = "threshold-stark-lite";
/// Protocol version tag.
pub const PROOF_VERSION: &str = "2.0";
/// Number of pseudo-FRI-layer digests in the simulated transcript.
pub const FRI_LAYERS: usize = 4;
/// Number of query-response digests in the simulated transcript.
pub const NUM_QUERIES: usize = 8;

/// Public inputs echoed inside the proof envelope (never the score).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProofPublicInputs {
    pub threshold: u32,
    pub timestamp: u64,
    pub expiry: u64,
}

/// Simulated proving transcript: a commitment hash over the serialized
/// trace plus layer and query digests hash-chained from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProofBody {
    /// Hex digest of the serialized execution trace.
    pub trace_commitment: String,
    /// Pseudo-FRI-layer digests, hex.
    pub fri_layers: Vec<String>,
    /// Query-response digests, hex.
    pub query_responses: Vec<String>,
}

/// Descriptive metadata attached to a proof.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProofMetadata {
    pub prover: String,
    pub field: String,
    pub hash: String,
    pub trace_rows: usize,
    pub fri_layers: usize,
    pub num_queries: usize,
    /// Proof creation time, Unix seconds.
    pub generated_at: u64,
}

/// Complete single-threshold proof envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdProof {
    #[serde(rename = "type")]
    pub proof_type: String,
    pub version: String,
    /// Agent identity commitment, hex.
    pub commitment: String,
    pub public_inputs: ProofPublicInputs,
    pub proof: ProofBody,
    pub metadata: ProofMetadata,
}

/// Response returned to the external API layer for a generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProofResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proof: Option<ThresholdProof>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_inputs: Option<ProofPublicInputs>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commitment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProofResponse {
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            proof: None,
            public_inputs: None,
            commitment: None,
            error: Some(error.into()),
        }
    }
}

/// Result of verifying a single-threshold proof.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationOutcome {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commitment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl VerificationOutcome {
    pub fn invalid(error: impl Into<String>) -> Self {
        Self {
            valid: false,
            commitment: None,
            threshold: None,
            expiry: None,
            error: Some(error.into()),
        }
    }
}
