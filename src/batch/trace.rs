//! Per-period trace rows with bit-decomposition range checks.
//!
//! Each row encodes `threshold <= score <= 100` algebraically:
//!
//! ```text
//! [score, threshold, difference, bits(difference), upper, bits(upper)]
//! ```
//!
//! where `difference = score - threshold` and `upper = 100 - score`. Scores
//! are at most 100, so both values fit in 7 bits. A row is valid iff the
//! differences match, every bit column is boolean, and each bit group
//! reconstructs its parent value; validity of every row is exactly the
//! statement "every period meets the threshold".

use crate::field::FieldElement;
use crate::ser::felts_to_bytes;

/// Bits per range check; covers values in `[0, 127]`.
pub const NUM_BITS: usize = 7;
/// Columns per trace row.
pub const TRACE_WIDTH: usize = 3 + NUM_BITS + 1 + NUM_BITS;
/// Upper bound enforced on every score.
pub const MAX_SCORE: u32 = 100;

/// One period's row of the consistency trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceRow {
    score: FieldElement,
    threshold: FieldElement,
    difference: FieldElement,
    bits: [FieldElement; NUM_BITS],
    upper_difference: FieldElement,
    upper_bits: [FieldElement; NUM_BITS],
}

impl TraceRow {
    /// Builds the row for a period.
    ///
    /// Callers validate `threshold <= score <= MAX_SCORE` beforehand; a row
    /// built from out-of-range inputs fails [`validate`](Self::validate)
    /// instead of encoding a wrong statement.
    pub fn new(score: u32, threshold: u32) -> Self {
        let difference = score.saturating_sub(threshold);
        let upper_difference = MAX_SCORE.saturating_sub(score);
        Self {
            score: FieldElement::new(u64::from(score)),
            threshold: FieldElement::new(u64::from(threshold)),
            difference: FieldElement::new(u64::from(difference)),
            bits: decompose(difference),
            upper_difference: FieldElement::new(u64::from(upper_difference)),
            upper_bits: decompose(upper_difference),
        }
    }

    /// Trivially valid padding row (score equal to the threshold).
    pub fn padding(threshold: u32) -> Self {
        Self::new(threshold, threshold)
    }

    /// Re-checks every internal constraint of the row.
    pub fn validate(&self) -> bool {
        // C1: difference = score - threshold
        if self.difference != self.score.sub(self.threshold) {
            return false;
        }
        // C2/C3: boolean bits reconstructing the difference
        if !bits_reconstruct(&self.bits, self.difference) {
            return false;
        }
        // C4: upper = 100 - score
        let hundred = FieldElement::new(u64::from(MAX_SCORE));
        if self.upper_difference != hundred.sub(self.score) {
            return false;
        }
        // C5/C6: boolean upper bits reconstructing the upper difference
        bits_reconstruct(&self.upper_bits, self.upper_difference)
    }

    /// Columns in committed order.
    pub fn to_felts(&self) -> [FieldElement; TRACE_WIDTH] {
        let mut out = [FieldElement::ZERO; TRACE_WIDTH];
        out[0] = self.score;
        out[1] = self.threshold;
        out[2] = self.difference;
        out[3..3 + NUM_BITS].copy_from_slice(&self.bits);
        out[3 + NUM_BITS] = self.upper_difference;
        out[4 + NUM_BITS..].copy_from_slice(&self.upper_bits);
        out
    }

    /// Serialized leaf bytes: 4-byte LE words, columns in order.
    pub fn to_bytes(&self) -> Vec<u8> {
        felts_to_bytes(&self.to_felts())
    }
}

fn decompose(value: u32) -> [FieldElement; NUM_BITS] {
    let mut bits = [FieldElement::ZERO; NUM_BITS];
    for (i, bit) in bits.iter_mut().enumerate() {
        *bit = FieldElement::new(u64::from((value >> i) & 1));
    }
    bits
}

fn bits_reconstruct(bits: &[FieldElement; NUM_BITS], expected: FieldElement) -> bool {
    let mut reconstructed = FieldElement::ZERO;
    for (i, bit) in bits.iter().enumerate() {
        if !bit.mul(FieldElement::ONE.sub(*bit)).is_zero() {
            return false;
        }
        reconstructed = reconstructed.add(bit.mul(FieldElement::new(1 << i)));
    }
    reconstructed == expected
}
