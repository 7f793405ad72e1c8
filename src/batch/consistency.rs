//! Consistency proof generation.
//!
//! Proves that every period in a list meets a threshold without revealing
//! any period's score. The protocol commits the trace rows, derives six
//! combination coefficients over a Fiat-Shamir transcript, commits the
//! composition polynomial's low-degree extension, folds it twice, and opens
//! the trace commitment at transcript-derived indices. The verifier replays
//! the same transcript from the recorded commitments.

use crate::field::{EvaluationDomain, FieldElement, Polynomial};
use crate::hash::{hash, Hash};
use crate::merkle::{CommitmentTree, SiblingPosition};
use crate::ser::{push_framed, push_u32, push_u64};
use crate::transcript::Transcript;
use crate::StarkResult;

use super::trace::{TraceRow, MAX_SCORE, NUM_BITS, TRACE_WIDTH};
use super::types::{BatchError, ConsistencyProof, Period};

/// Proof-type tag of consistency proofs.
pub const PROOF_TYPE: &str = "consistency";
/// Protocol version tag.
pub const PROOF_VERSION: &str = "1.0";
/// Number of folding layers.
pub const FRI_FOLD_LAYERS: usize = 2;
/// Upper bound on trace openings; the actual count is the minimum of this
/// and the padded trace size.
pub const MAX_TRACE_QUERIES: usize = 8;

/// Protocol label opening the transcript.
pub(super) const PROTOCOL_LABEL: &str = "consistency-proof-v1";
/// Label absorbed before the composition commitment.
pub(super) const COMPOSITION_LABEL: &str = "composition-commitment";
/// Label opening the query phase.
pub(super) const QUERY_LABEL: &str = "trace-queries";
/// Number of combination coefficients.
const NUM_ALPHAS: usize = 6;

/// Generates a consistency proof over `periods`.
///
/// Fails with a plain result when a period is out of range or below the
/// threshold; the failure names the timestamp of the worst offending period
/// (lowest score, earliest on ties), never the score itself.
pub fn generate_consistency_proof(
    periods: &[Period],
    threshold: u32,
    agent_id: &str,
) -> StarkResult<ConsistencyProof> {
    if periods.is_empty() {
        return Err(BatchError::EmptyPeriods);
    }
    for period in periods {
        if period.score > MAX_SCORE {
            return Err(BatchError::ScoreOutOfRange {
                timestamp: period.timestamp,
            });
        }
    }
    if let Some(worst) = periods
        .iter()
        .filter(|period| period.score < threshold)
        .min_by_key(|period| (period.score, period.timestamp))
    {
        return Err(BatchError::BelowThreshold {
            timestamp: worst.timestamp,
            threshold,
        });
    }

    let period_count = periods.len();
    let padded_size = period_count.next_power_of_two().max(2);
    let mut rows: Vec<TraceRow> = periods
        .iter()
        .map(|period| TraceRow::new(period.score, threshold))
        .collect();
    rows.resize(padded_size, TraceRow::padding(threshold));

    for (index, row) in rows.iter().enumerate() {
        if !row.validate() {
            return Err(BatchError::RowInvalid { row: index });
        }
    }

    let trace_tree = CommitmentTree::from_leaves(rows.iter().map(TraceRow::to_bytes))?;
    let trace_root = trace_tree.root();

    let mut transcript = Transcript::new();
    absorb_statement(&mut transcript, &trace_root, agent_id, threshold, period_count);

    let trace_domain = EvaluationDomain::natural(padded_size);
    let columns = interpolate_columns(&rows, &trace_domain)?;
    let alphas = draw_alphas(&mut transcript);
    let composition = compose(&columns, &alphas);

    let extension = EvaluationDomain::extension(padded_size);
    let evaluations = composition.evaluate_multi(extension.points());
    let composition_tree = commit_evaluations(&evaluations)?;
    let composition_root = composition_tree.root();
    transcript.absorb_label(COMPOSITION_LABEL);
    transcript.absorb(composition_root.as_bytes());

    let mut current_evals = evaluations;
    let mut current_domain = extension.points().to_vec();
    let mut fri_roots = Vec::with_capacity(FRI_FOLD_LAYERS);
    let mut fri_challenges = Vec::with_capacity(FRI_FOLD_LAYERS);
    for layer in 0..FRI_FOLD_LAYERS {
        let alpha = transcript.squeeze_field();
        let (folded, folded_domain) = fold_layer(&current_evals, &current_domain, alpha)?;
        let layer_tree = commit_evaluations(&folded)?;
        transcript.absorb_label(&format!("fri-fold-{layer}"));
        transcript.absorb(layer_tree.root().as_bytes());
        fri_roots.push(layer_tree.root());
        fri_challenges.push(alpha);
        current_evals = folded;
        current_domain = folded_domain;
    }
    let final_constant = current_evals.first().copied().unwrap_or(FieldElement::ZERO);

    transcript.absorb_label(QUERY_LABEL);
    transcript.absorb(&final_constant.to_bytes());
    let query_count = MAX_TRACE_QUERIES.min(padded_size);
    let mut openings = Vec::with_capacity(query_count);
    for _ in 0..query_count {
        let index = transcript.squeeze_index(padded_size)?;
        openings.push(trace_tree.open(index)?);
    }

    let start_timestamp = periods.iter().map(|p| p.timestamp).min().unwrap_or(0);
    let end_timestamp = periods.iter().map(|p| p.timestamp).max().unwrap_or(0);

    let mut proof = ConsistencyProof {
        proof_type: PROOF_TYPE.to_owned(),
        version: PROOF_VERSION.to_owned(),
        agent_id: agent_id.to_owned(),
        threshold,
        period_count,
        padded_size,
        trace_root,
        composition_root,
        composition_degree: composition.degree(),
        fri_roots,
        fri_challenges,
        final_constant,
        openings,
        start_timestamp,
        end_timestamp,
        proof_hash: Hash::default(),
    };
    proof.proof_hash = compute_proof_hash(&proof);
    Ok(proof)
}

/// Absorbs the public statement in protocol order.
pub(super) fn absorb_statement(
    transcript: &mut Transcript,
    trace_root: &Hash,
    agent_id: &str,
    threshold: u32,
    period_count: usize,
) {
    transcript.absorb_label(PROTOCOL_LABEL);
    transcript.absorb(trace_root.as_bytes());
    transcript.absorb(agent_id.as_bytes());
    transcript.absorb(&FieldElement::new(u64::from(threshold)).to_bytes());
    transcript.absorb(&(period_count as u32).to_le_bytes());
}

/// Draws the six constraint combination coefficients.
pub(super) fn draw_alphas(transcript: &mut Transcript) -> [FieldElement; NUM_ALPHAS] {
    let mut alphas = [FieldElement::ZERO; NUM_ALPHAS];
    for alpha in alphas.iter_mut() {
        *alpha = transcript.squeeze_field();
    }
    alphas
}

/// Integrity hash over every proof field except the hash itself.
///
/// Covers the openings as well as the commitments and challenges, so any
/// single-byte mutation of the bundle fails the hash check first.
pub fn compute_proof_hash(proof: &ConsistencyProof) -> Hash {
    let mut bytes = Vec::new();
    push_framed(&mut bytes, proof.proof_type.as_bytes());
    push_framed(&mut bytes, proof.version.as_bytes());
    push_framed(&mut bytes, proof.agent_id.as_bytes());
    push_u32(&mut bytes, proof.threshold);
    push_u32(&mut bytes, proof.period_count as u32);
    push_u32(&mut bytes, proof.padded_size as u32);
    push_u32(&mut bytes, proof.composition_degree as u32);
    bytes.extend_from_slice(proof.trace_root.as_bytes());
    bytes.extend_from_slice(proof.composition_root.as_bytes());
    for root in &proof.fri_roots {
        bytes.extend_from_slice(root.as_bytes());
    }
    for challenge in &proof.fri_challenges {
        bytes.extend_from_slice(&challenge.to_bytes());
    }
    bytes.extend_from_slice(&proof.final_constant.to_bytes());
    push_u64(&mut bytes, proof.start_timestamp);
    push_u64(&mut bytes, proof.end_timestamp);
    for opening in &proof.openings {
        push_u32(&mut bytes, opening.index as u32);
        bytes.extend_from_slice(opening.leaf.as_bytes());
        push_u32(&mut bytes, opening.path.len() as u32);
        for element in &opening.path {
            let tag = match element.position {
                SiblingPosition::Left => 0u8,
                SiblingPosition::Right => 1u8,
            };
            bytes.push(tag);
            bytes.extend_from_slice(element.sibling.as_bytes());
        }
    }
    hash(&bytes)
}

fn interpolate_columns(
    rows: &[TraceRow],
    domain: &EvaluationDomain,
) -> Result<Vec<Polynomial>, BatchError> {
    let table: Vec<[FieldElement; TRACE_WIDTH]> = rows.iter().map(TraceRow::to_felts).collect();
    let mut columns = Vec::with_capacity(TRACE_WIDTH);
    for column in 0..TRACE_WIDTH {
        let ys: Vec<FieldElement> = table.iter().map(|row| row[column]).collect();
        columns.push(Polynomial::interpolate(domain.points(), &ys)?);
    }
    Ok(columns)
}

/// Random linear combination of the six constraint families.
///
/// Coefficients are reused within a bit family: every boolean constraint of
/// the lower range check shares one alpha, every boolean constraint of the
/// upper range check shares another.
fn compose(columns: &[Polynomial], alphas: &[FieldElement; NUM_ALPHAS]) -> Polynomial {
    let upper = 3 + NUM_BITS;
    let mut composition = Polynomial::zero();

    // C1: difference - score + threshold
    let c1 = columns[2].sub(&columns[0]).add(&columns[1]);
    composition = composition.add(&c1.scale(alphas[0]));

    // C2: each difference bit is boolean
    for i in 0..NUM_BITS {
        let bit = &columns[3 + i];
        let boolean = bit.sub(&bit.mul(bit));
        composition = composition.add(&boolean.scale(alphas[1]));
    }

    // C3: bits reconstruct the difference
    let mut bit_sum = Polynomial::zero();
    for i in 0..NUM_BITS {
        bit_sum = bit_sum.add(&columns[3 + i].scale(FieldElement::new(1 << i)));
    }
    composition = composition.add(&bit_sum.sub(&columns[2]).scale(alphas[2]));

    // C4: upper difference + score - 100
    let c4 = columns[upper]
        .add(&columns[0])
        .sub(&Polynomial::constant(FieldElement::new(u64::from(MAX_SCORE))));
    composition = composition.add(&c4.scale(alphas[3]));

    // C5: each upper bit is boolean
    for i in 0..NUM_BITS {
        let bit = &columns[upper + 1 + i];
        let boolean = bit.sub(&bit.mul(bit));
        composition = composition.add(&boolean.scale(alphas[4]));
    }

    // C6: upper bits reconstruct the upper difference
    let mut upper_sum = Polynomial::zero();
    for i in 0..NUM_BITS {
        upper_sum = upper_sum.add(&columns[upper + 1 + i].scale(FieldElement::new(1 << i)));
    }
    composition = composition.add(&upper_sum.sub(&columns[upper]).scale(alphas[5]));

    composition
}

/// One folding layer over evaluation pairs.
///
/// For the pair `(x0, f0), (x1, f1)` the line through both points has
/// constant term `(f0*x1 - f1*x0)/(x1 - x0)` and slope `(f1 - f0)/(x1 - x0)`;
/// the folded value is `constant + alpha * slope`. The next layer lives on
/// the natural domain `{1..half}`.
fn fold_layer(
    evaluations: &[FieldElement],
    domain: &[FieldElement],
    alpha: FieldElement,
) -> Result<(Vec<FieldElement>, Vec<FieldElement>), BatchError> {
    let half = evaluations.len() / 2;
    let mut folded = Vec::with_capacity(half);
    let mut next_domain = Vec::with_capacity(half);
    for i in 0..half {
        let x0 = domain[2 * i];
        let x1 = domain[2 * i + 1];
        let f0 = evaluations[2 * i];
        let f1 = evaluations[2 * i + 1];
        let dx_inv = x1.sub(x0).inv()?;
        let f_even = f0.mul(x1).sub(f1.mul(x0)).mul(dx_inv);
        let f_odd = f1.sub(f0).mul(dx_inv);
        folded.push(f_even.add(alpha.mul(f_odd)));
        next_domain.push(FieldElement::new(i as u64 + 1));
    }
    Ok((folded, next_domain))
}

fn commit_evaluations(evaluations: &[FieldElement]) -> Result<CommitmentTree, BatchError> {
    Ok(CommitmentTree::from_leaves(
        evaluations.iter().map(|value| value.to_bytes()),
    )?)
}
