//! Caller-facing entry points for the single-threshold protocol.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::circuit::{Features, VerificationCircuit};

use super::prover::prove;
use super::types::{ProofResponse, FRI_LAYERS, NUM_QUERIES, PROOF_TYPE};

/// Proof generation request as supplied by the external API layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProofRequest {
    pub agent_id: String,
    /// Private score in `[0, 100]`; never echoed back.
    pub score: u32,
    pub features: Features,
    #[serde(default = "default_threshold")]
    pub threshold: u32,
    #[serde(default = "default_validity_days")]
    pub validity_days: u64,
}

fn default_threshold() -> u32 {
    60
}

fn default_validity_days() -> u64 {
    30
}

/// Quick pre-check whether a score would clear a threshold, without
/// constructing a circuit.
pub fn would_pass(score: u32, threshold: u32) -> bool {
    score <= 100 && score >= threshold
}

/// Generates a single-threshold proof at an explicit wall-clock time.
///
/// Failure responses name the violated constraint but never the score.
pub fn generate_verification_proof_at(request: &ProofRequest, now: u64) -> ProofResponse {
    if request.score > 100 {
        return ProofResponse::failure("score outside the valid range [0, 100]");
    }

    let circuit = VerificationCircuit::from_verification_data(
        &request.agent_id,
        request.score,
        request.features,
        request.threshold,
        request.validity_days,
        now,
    );

    match prove(&circuit, now) {
        Ok(proof) => ProofResponse {
            success: true,
            public_inputs: Some(proof.public_inputs),
            commitment: Some(proof.commitment.clone()),
            proof: Some(proof),
            error: None,
        },
        Err(error) => ProofResponse::failure(format!(
            "agent does not meet verification requirements: {error}"
        )),
    }
}

/// Generates a single-threshold proof at the current wall-clock time.
pub fn generate_verification_proof(request: &ProofRequest) -> ProofResponse {
    generate_verification_proof_at(request, unix_now())
}

/// Static description of the prover and its documented limitations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProverInfo {
    pub name: &'static str,
    pub field: &'static str,
    pub hash_function: &'static str,
    pub fri_layers: usize,
    pub num_queries: usize,
    pub limitations: Vec<&'static str>,
}

/// Reports the protocol parameters and known limitations of the
/// single-threshold prover.
pub fn prover_info() -> ProverInfo {
    ProverInfo {
        name: PROOF_TYPE,
        field: "M31",
        hash_function: "sha256",
        fri_layers: FRI_LAYERS,
        num_queries: NUM_QUERIES,
        limitations: vec![
            "layer and query digests are hash-chained, not bound to trace openings",
            "verification is structural: tags, commitment presence, expiry",
            "demonstration-grade soundness, not a production proving backend",
        ],
    }
}

fn unix_now() -> u64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.as_secs(),
        Err(_) => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(score: u32, features: Features) -> ProofRequest {
        ProofRequest {
            agent_id: "agent-1".to_owned(),
            score,
            features,
            threshold: 60,
            validity_days: 30,
        }
    }

    fn features_scoring_80() -> Features {
        Features {
            has_github: true,
            has_api_endpoint: true,
            capability_count: 5,
            code_lines: 0,
            has_documentation: true,
            test_coverage: 0,
        }
    }

    // api(20) + caps2(10) on top of the base 10.
    fn features_scoring_40() -> Features {
        Features {
            has_github: false,
            has_api_endpoint: true,
            capability_count: 2,
            code_lines: 0,
            has_documentation: false,
            test_coverage: 0,
        }
    }

    #[test]
    fn passing_request_returns_proof() {
        let response =
            generate_verification_proof_at(&request(80, features_scoring_80()), 1_700_000_000);
        assert!(response.success);
        assert!(response.proof.is_some());
        assert_eq!(response.public_inputs.map(|p| p.threshold), Some(60));
        assert!(response.error.is_none());
    }

    #[test]
    fn failing_request_returns_error_without_score() {
        let response =
            generate_verification_proof_at(&request(40, features_scoring_40()), 1_700_000_000);
        assert!(!response.success);
        assert!(response.proof.is_none());
        let error = response.error.expect("failure reason");
        assert!(error.contains("threshold_check"));
        assert!(!error.contains("40"));
    }

    #[test]
    fn out_of_range_score_rejected() {
        let response =
            generate_verification_proof_at(&request(120, features_scoring_80()), 1_700_000_000);
        assert!(!response.success);
    }

    #[test]
    fn request_defaults_apply() {
        let json = r#"{
            "agentId": "agent-1",
            "score": 80,
            "features": {
                "hasGithub": true,
                "hasApiEndpoint": true,
                "capabilityCount": 5,
                "codeLines": 0,
                "hasDocumentation": true,
                "testCoverage": 0
            }
        }"#;
        let decoded: ProofRequest = serde_json::from_str(json).expect("valid request");
        assert_eq!(decoded.threshold, 60);
        assert_eq!(decoded.validity_days, 30);
    }

    #[test]
    fn would_pass_respects_bounds() {
        assert!(would_pass(60, 60));
        assert!(!would_pass(59, 60));
        assert!(!would_pass(120, 60));
    }
}
