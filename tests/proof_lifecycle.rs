//! End-to-end lifecycle of the single-threshold protocol.

use attest_stark::proof::{
    generate_verification_proof_at, verify, ProofRequest, ThresholdProof,
};
use attest_stark::Features;

const NOW: u64 = 1_700_000_000;

// gh(15) + api(20) + caps5(25) + docs(10) on top of the base 10 = 80.
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

// api(20) + caps2(10) on top of the base 10 = 40.
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

fn request(score: u32, features: Features) -> ProofRequest {
    ProofRequest {
        agent_id: "agent-1".to_owned(),
        score,
        features,
        threshold: 60,
        validity_days: 30,
    }
}

#[test]
fn qualifying_agent_gets_verifiable_proof() {
    let response = generate_verification_proof_at(&request(80, features_scoring_80()), NOW);
    assert!(response.success);
    assert_eq!(response.public_inputs.map(|p| p.threshold), Some(60));

    let proof = response.proof.expect("proof emitted");
    let outcome = verify(&proof, NOW);
    assert!(outcome.valid);
    assert_eq!(outcome.threshold, Some(60));
    assert_eq!(outcome.commitment, response.commitment);
}

#[test]
fn unqualified_agent_gets_failure_without_proof() {
    let response = generate_verification_proof_at(&request(40, features_scoring_40()), NOW);
    assert!(!response.success);
    assert!(response.proof.is_none());
    assert!(response.public_inputs.is_none());
    assert!(response.error.is_some());
}

#[test]
fn emitted_output_never_contains_the_score() {
    let response = generate_verification_proof_at(&request(80, features_scoring_80()), NOW);
    let json = serde_json::to_string(&response).expect("serialize");
    assert!(!json.contains("\"score\""));

    let failure = generate_verification_proof_at(&request(40, features_scoring_40()), NOW);
    let json = serde_json::to_string(&failure).expect("serialize");
    assert!(!json.contains("\"score\""));
    assert!(!json.contains("40"));
}

#[test]
fn proof_expires() {
    let response = generate_verification_proof_at(&request(80, features_scoring_80()), NOW);
    let proof = response.proof.expect("proof emitted");
    let expiry = proof.public_inputs.expiry;

    assert!(verify(&proof, expiry).valid);
    let outcome = verify(&proof, expiry + 1);
    assert!(!outcome.valid);
    assert_eq!(outcome.error.as_deref(), Some("proof expired"));
}

#[test]
fn proof_roundtrips_through_json() {
    let response = generate_verification_proof_at(&request(80, features_scoring_80()), NOW);
    let proof = response.proof.expect("proof emitted");

    let json = serde_json::to_string(&proof).expect("serialize");
    let decoded: ThresholdProof = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, proof);
    assert!(verify(&decoded, NOW).valid);
}

#[test]
fn tampered_type_tag_fails_verification() {
    let response = generate_verification_proof_at(&request(80, features_scoring_80()), NOW);
    let mut proof = response.proof.expect("proof emitted");
    proof.proof_type = "consistency".to_owned();
    assert!(!verify(&proof, NOW).valid);
}
