//! Single-threshold proof generation.
//!
//! This prover carries a reduced guarantee: the "FRI layers" and "query
//! responses" it emits are digests hash-chained from the trace commitment,
//! standing in for a full proving backend. The batched consistency protocol
//! is the genuine folding protocol in this crate; the two are deliberately
//! separate.

use core::fmt;

use crate::circuit::{ExecutionTrace, VerificationCircuit};
use crate::hash::{hash, Hash, Hasher};

use super::types::{
    ProofBody, ProofMetadata, ProofPublicInputs, ThresholdProof, FRI_LAYERS, NUM_QUERIES,
    PROOF_TYPE, PROOF_VERSION,
};

/// Errors refusing proof generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProverError {
    /// A circuit constraint is violated; carries the constraint name,
    /// never the private score.
    ConstraintViolated(&'static str),
}

impl fmt::Display for ProverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProverError::ConstraintViolated(name) => {
                write!(f, "circuit constraint violated: {name}")
            }
        }
    }
}

impl std::error::Error for ProverError {}

/// Generates a single-threshold proof at wall-clock time `now`.
///
/// Fails fast with the first violated constraint; a proof is only emitted
/// for a fully satisfied circuit.
pub fn prove(circuit: &VerificationCircuit, now: u64) -> Result<ThresholdProof, ProverError> {
    let evaluation = circuit.evaluate(now);
    if let Some(name) = evaluation.first_violation() {
        return Err(ProverError::ConstraintViolated(name));
    }

    let trace = ExecutionTrace::generate(circuit);
    let trace_commitment = hash(&trace.to_bytes());

    let mut previous = trace_commitment;
    let mut fri_layers = Vec::with_capacity(FRI_LAYERS);
    for layer in 0..FRI_LAYERS {
        previous = chain_digest(&previous, b"fri-layer", layer as u8);
        fri_layers.push(previous.to_hex());
    }
    let mut query_responses = Vec::with_capacity(NUM_QUERIES);
    for query in 0..NUM_QUERIES {
        previous = chain_digest(&previous, b"query", query as u8);
        query_responses.push(previous.to_hex());
    }

    Ok(ThresholdProof {
        proof_type: PROOF_TYPE.to_owned(),
        version: PROOF_VERSION.to_owned(),
        commitment: circuit.public.commitment.clone(),
        public_inputs: ProofPublicInputs {
            threshold: circuit.public.threshold.as_u32(),
            timestamp: circuit.public.timestamp,
            expiry: circuit.public.expiry,
        },
        proof: ProofBody {
            trace_commitment: trace_commitment.to_hex(),
            fri_layers,
            query_responses,
        },
        metadata: ProofMetadata {
            prover: PROOF_TYPE.to_owned(),
            field: "M31".to_owned(),
            hash: "sha256".to_owned(),
            trace_rows: trace.rows().len(),
            fri_layers: FRI_LAYERS,
            num_queries: NUM_QUERIES,
            generated_at: now,
        },
    })
}

fn chain_digest(previous: &Hash, label: &[u8], counter: u8) -> Hash {
    let mut hasher = Hasher::new();
    hasher.update(previous.as_bytes());
    hasher.update(label);
    hasher.update(&[counter]);
    hasher.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::Features;

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

    #[test]
    fn proof_has_expected_shape() {
        let circuit = VerificationCircuit::from_verification_data(
            "agent-1",
            80,
            features_scoring_80(),
            60,
            30,
            1_700_000_000,
        );
        let proof = prove(&circuit, 1_700_000_000).expect("satisfied circuit");
        assert_eq!(proof.proof_type, PROOF_TYPE);
        assert_eq!(proof.version, PROOF_VERSION);
        assert_eq!(proof.proof.fri_layers.len(), FRI_LAYERS);
        assert_eq!(proof.proof.query_responses.len(), NUM_QUERIES);
        assert_eq!(proof.public_inputs.threshold, 60);
    }

    #[test]
    fn proof_generation_is_deterministic() {
        let circuit = VerificationCircuit::from_verification_data(
            "agent-1",
            80,
            features_scoring_80(),
            60,
            30,
            1_700_000_000,
        );
        let a = prove(&circuit, 1_700_000_000).expect("satisfied circuit");
        let b = prove(&circuit, 1_700_000_000).expect("satisfied circuit");
        assert_eq!(a, b);
    }

    #[test]
    fn violated_threshold_refuses_proof() {
        let circuit = VerificationCircuit::from_verification_data(
            "agent-1",
            80,
            features_scoring_80(),
            90,
            30,
            1_700_000_000,
        );
        assert_eq!(
            prove(&circuit, 1_700_000_000),
            Err(ProverError::ConstraintViolated("threshold_check"))
        );
    }
}
