//! Single-threshold verification circuit.
//!
//! Encodes the statement "the witnessed score was computed correctly from
//! the witnessed features, meets the public threshold, and the attestation
//! has not expired". The circuit is evaluated locally before proving; a
//! violated constraint refuses proof generation rather than producing an
//! unsound proof.

pub mod score;
pub mod trace;
pub mod types;

use crate::field::FieldElement;
use crate::hash::{hash, Hash};

pub use score::{compute_score, Features};
pub use trace::ExecutionTrace;
pub use types::{PrivateWitness, PublicInputs};

/// Seconds per validity day.
const SECONDS_PER_DAY: u64 = 86_400;

/// Result of checking one circuit constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstraintCheck {
    /// Stable constraint name used in diagnostics and failure results.
    pub name: &'static str,
    pub satisfied: bool,
}

/// Per-constraint breakdown of a circuit evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircuitEvaluation {
    /// True iff every constraint holds.
    pub satisfied: bool,
    /// Constraints in evaluation order.
    pub constraints: Vec<ConstraintCheck>,
}

impl CircuitEvaluation {
    /// Name of the first violated constraint, if any.
    pub fn first_violation(&self) -> Option<&'static str> {
        self.constraints
            .iter()
            .find(|check| !check.satisfied)
            .map(|check| check.name)
    }
}

/// The single-threshold circuit: a public statement plus a private witness.
#[derive(Debug, Clone)]
pub struct VerificationCircuit {
    pub public: PublicInputs,
    pub witness: PrivateWitness,
}

impl VerificationCircuit {
    /// Derives the identity commitment for an agent.
    pub fn generate_commitment(agent_id: &str) -> Hash {
        let mut input = Vec::with_capacity(6 + agent_id.len());
        input.extend_from_slice(b"agent:");
        input.extend_from_slice(agent_id.as_bytes());
        hash(&input)
    }

    /// Builds a circuit from caller-supplied verification data.
    ///
    /// `now` is the proof creation time in Unix seconds; the expiry is
    /// `now + validity_days` worth of seconds.
    pub fn from_verification_data(
        agent_id: &str,
        score: u32,
        features: Features,
        threshold: u32,
        validity_days: u64,
        now: u64,
    ) -> Self {
        let public = PublicInputs {
            threshold: FieldElement::new(u64::from(threshold)),
            commitment: Self::generate_commitment(agent_id).to_hex(),
            timestamp: now,
            expiry: now + validity_days * SECONDS_PER_DAY,
        };
        let witness = PrivateWitness::new(score, features);
        Self { public, witness }
    }

    /// Checks the three circuit constraints against wall-clock time `now`.
    ///
    /// Order is fixed: formula correctness, threshold, expiry.
    pub fn evaluate(&self, now: u64) -> CircuitEvaluation {
        let recomputed = FieldElement::new(u64::from(compute_score(&self.witness.features)));
        let constraints = vec![
            ConstraintCheck {
                name: "score_formula",
                satisfied: recomputed == self.witness.score,
            },
            ConstraintCheck {
                name: "threshold_check",
                satisfied: self.witness.score.gte(self.public.threshold),
            },
            ConstraintCheck {
                name: "not_expired",
                satisfied: now < self.public.expiry,
            },
        ];
        let satisfied = constraints.iter().all(|check| check.satisfied);
        CircuitEvaluation {
            satisfied,
            constraints,
        }
    }
}
