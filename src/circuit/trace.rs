//! Execution trace of the single-threshold circuit.

use crate::field::FieldElement;
use crate::ser::{felts_to_bytes, push_framed};

use super::VerificationCircuit;

/// Row-oriented execution trace consumed by the prover.
///
/// Row order is fixed: public inputs, witness, features, then two
/// constraint-check rows (threshold difference and recomputed score).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionTrace {
    rows: Vec<Vec<FieldElement>>,
}

impl ExecutionTrace {
    /// Lays out the circuit's values as an ordered row table.
    pub fn generate(circuit: &VerificationCircuit) -> Self {
        let score = circuit.witness.score;
        let threshold = circuit.public.threshold;
        let recomputed =
            FieldElement::new(u64::from(super::score::compute_score(&circuit.witness.features)));

        let rows = vec![
            vec![
                threshold,
                FieldElement::new(circuit.public.timestamp),
                FieldElement::new(circuit.public.expiry),
            ],
            vec![score],
            circuit.witness.features.to_felts().to_vec(),
            vec![score.sub(threshold)],
            vec![recomputed],
        ];
        Self { rows }
    }

    /// Rows in layout order.
    pub fn rows(&self) -> &[Vec<FieldElement>] {
        &self.rows
    }

    /// Length-framed little-endian serialization fed to the commitment hash.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for row in &self.rows {
            push_framed(&mut out, &felts_to_bytes(row));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::super::score::Features;
    use super::*;

    fn features() -> Features {
        Features {
            has_github: true,
            has_api_endpoint: true,
            capability_count: 2,
            code_lines: 1000,
            has_documentation: true,
            test_coverage: 50,
        }
    }

    #[test]
    fn trace_layout_is_stable() {
        let circuit =
            VerificationCircuit::from_verification_data("agent-1", 78, features(), 60, 30, 1_000);
        let trace = ExecutionTrace::generate(&circuit);
        assert_eq!(trace.rows().len(), 5);
        assert_eq!(trace.rows()[0][0], FieldElement::new(60));
        assert_eq!(trace.rows()[1], vec![FieldElement::new(78)]);
        assert_eq!(trace.rows()[2].len(), 6);
        assert_eq!(trace.rows()[3], vec![FieldElement::new(18)]);
    }

    #[test]
    fn serialization_is_deterministic() {
        let circuit =
            VerificationCircuit::from_verification_data("agent-1", 78, features(), 60, 30, 1_000);
        let a = ExecutionTrace::generate(&circuit).to_bytes();
        let b = ExecutionTrace::generate(&circuit).to_bytes();
        assert_eq!(a, b);
        assert!(!a.is_empty());
    }
}
