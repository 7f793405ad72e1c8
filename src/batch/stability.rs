//! Stability proofs: bounded score variance across periods.
//!
//! The score list is committed via a Merkle tree and a fixed number of
//! transcript-derived leaves are opened as evidence that the committed list
//! is well-formed. The variance check itself is a quantized plaintext
//! comparison performed by the generating party; it is NOT a zero-knowledge
//! range proof over the variance computation, and a dishonest generator
//! could set `valid` freely. The commitment binds the score list, nothing
//! more. Callers treating `valid` as trustworthy must trust the generator.

use crate::field::FieldElement;
use crate::hash::{hash, Hash};
use crate::merkle::CommitmentTree;
use crate::ser::{push_framed, push_u32};
use crate::transcript::Transcript;
use crate::StarkResult;

use super::types::{BatchError, Period, StabilityProof};

/// Proof-type tag of stability proofs.
pub const PROOF_TYPE: &str = "stability";
/// Protocol version tag.
pub const PROOF_VERSION: &str = "1.0";
/// Upper bound on score openings; the actual count is the minimum of this
/// and the period count.
pub const MAX_SCORE_QUERIES: usize = 4;

/// Protocol label opening the transcript.
const PROTOCOL_LABEL: &str = "stability-proof-v1";

/// Generates a stability proof.
///
/// `valid` is true iff the population variance of the scores, quantized by
/// a factor of 100 and floored, does not exceed the equally quantized
/// `max_variance`. Neither the variance nor any score appears in the proof.
pub fn generate_stability_proof(
    periods: &[Period],
    max_variance: u32,
    agent_id: &str,
) -> StarkResult<StabilityProof> {
    if periods.is_empty() {
        return Err(BatchError::EmptyPeriods);
    }

    let count = periods.len();
    let mean = periods.iter().map(|p| f64::from(p.score)).sum::<f64>() / count as f64;
    let variance = periods
        .iter()
        .map(|p| {
            let deviation = f64::from(p.score) - mean;
            deviation * deviation
        })
        .sum::<f64>()
        / count as f64;

    let quantized_variance = (variance * 100.0).floor() as u64;
    let quantized_bound = u64::from(max_variance) * 100;
    let valid = quantized_variance <= quantized_bound;

    let tree = CommitmentTree::from_leaves(
        periods
            .iter()
            .map(|p| FieldElement::new(u64::from(p.score)).to_bytes()),
    )?;
    let score_root = tree.root();

    let mut transcript = Transcript::new();
    transcript.absorb_label(PROTOCOL_LABEL);
    transcript.absorb(score_root.as_bytes());
    transcript.absorb(agent_id.as_bytes());
    transcript.absorb(&max_variance.to_le_bytes());
    transcript.absorb(&(count as u32).to_le_bytes());

    let open_count = MAX_SCORE_QUERIES.min(count);
    let mut openings = Vec::with_capacity(open_count);
    for _ in 0..open_count {
        let index = transcript.squeeze_index(count)?;
        openings.push(tree.open(index)?);
    }

    let mut proof = StabilityProof {
        proof_type: PROOF_TYPE.to_owned(),
        version: PROOF_VERSION.to_owned(),
        agent_id: agent_id.to_owned(),
        valid,
        period_count: count,
        max_variance,
        score_root,
        openings,
        proof_hash: Hash::default(),
    };
    proof.proof_hash = compute_stability_hash(&proof);
    Ok(proof)
}

/// Integrity hash over the stability bundle.
pub fn compute_stability_hash(proof: &StabilityProof) -> Hash {
    let mut bytes = Vec::new();
    push_framed(&mut bytes, proof.proof_type.as_bytes());
    push_framed(&mut bytes, proof.version.as_bytes());
    push_framed(&mut bytes, proof.agent_id.as_bytes());
    bytes.push(u8::from(proof.valid));
    push_u32(&mut bytes, proof.period_count as u32);
    push_u32(&mut bytes, proof.max_variance);
    bytes.extend_from_slice(proof.score_root.as_bytes());
    for opening in &proof.openings {
        push_u32(&mut bytes, opening.index as u32);
        bytes.extend_from_slice(opening.leaf.as_bytes());
    }
    hash(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn periods(scores: &[u32]) -> Vec<Period> {
        scores
            .iter()
            .enumerate()
            .map(|(i, &score)| Period {
                score,
                timestamp: 100 * (i as u64 + 1),
            })
            .collect()
    }

    #[test]
    fn steady_scores_are_stable() {
        let proof =
            generate_stability_proof(&periods(&[70, 70, 70, 70]), 5, "agent-1").expect("non-empty");
        assert!(proof.valid);
        assert_eq!(proof.period_count, 4);
        assert_eq!(proof.openings.len(), 4);
        assert_eq!(proof.proof_hash, compute_stability_hash(&proof));
    }

    #[test]
    fn volatile_scores_exceed_bound() {
        // Variance of [40, 100] is 900.
        let proof = generate_stability_proof(&periods(&[40, 100]), 100, "agent-1")
            .expect("non-empty");
        assert!(!proof.valid);
        assert_eq!(proof.openings.len(), 2);
    }

    #[test]
    fn quantization_floors_the_variance() {
        // Variance of [70, 70, 71] is 2/9 = 0.2222..; quantized: 22 <= 100.
        let proof =
            generate_stability_proof(&periods(&[70, 70, 71]), 1, "agent-1").expect("non-empty");
        assert!(proof.valid);
    }

    #[test]
    fn proof_never_carries_scores_or_variance() {
        let proof =
            generate_stability_proof(&periods(&[40, 100]), 100, "agent-1").expect("non-empty");
        let json = serde_json::to_string(&proof).expect("serialize");
        assert!(!json.contains("variance\":9"));
        assert!(!json.contains("score\":"));
    }

    #[test]
    fn openings_verify_against_score_root() {
        let proof = generate_stability_proof(&periods(&[60, 65, 70, 75, 80]), 100, "agent-1")
            .expect("non-empty");
        for opening in &proof.openings {
            assert!(opening.verify(&proof.score_root));
        }
    }

    #[test]
    fn empty_periods_rejected() {
        assert_eq!(
            generate_stability_proof(&[], 5, "agent-1"),
            Err(BatchError::EmptyPeriods)
        );
    }
}
