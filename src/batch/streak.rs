//! Streak proofs: a threshold sustained for a minimum run length.

use crate::StarkResult;

use super::consistency::generate_consistency_proof;
use super::types::{BatchError, Period, StreakProof};

/// Proof-type tag of streak proofs.
pub const PROOF_TYPE: &str = "streak";
/// Protocol version tag.
pub const PROOF_VERSION: &str = "1.0";

/// Generates a streak proof.
///
/// Scans for the longest maximal run of periods meeting the threshold. If
/// the longest run is at least `min_streak`, a consistency proof is
/// generated over exactly the first `min_streak` periods of the first such
/// run; the true run length is not revealed. Otherwise the failure names
/// both the requested minimum and the longest run found.
pub fn generate_streak_proof(
    periods: &[Period],
    threshold: u32,
    agent_id: &str,
    min_streak: usize,
) -> StarkResult<StreakProof> {
    if periods.is_empty() {
        return Err(BatchError::EmptyPeriods);
    }
    let min_streak = min_streak.max(1);

    let (longest, longest_start) = longest_run(periods, threshold);
    if longest < min_streak {
        return Err(BatchError::StreakTooShort {
            required: min_streak,
            longest,
        });
    }

    let window = &periods[longest_start..longest_start + min_streak];
    let consistency = generate_consistency_proof(window, threshold, agent_id)?;

    Ok(StreakProof {
        proof_type: PROOF_TYPE.to_owned(),
        version: PROOF_VERSION.to_owned(),
        agent_id: agent_id.to_owned(),
        threshold,
        claimed_streak: min_streak,
        consistency,
    })
}

/// Length and start index of the first longest qualifying run.
fn longest_run(periods: &[Period], threshold: u32) -> (usize, usize) {
    let mut longest = 0;
    let mut longest_start = 0;
    let mut current = 0;
    let mut current_start = 0;
    for (index, period) in periods.iter().enumerate() {
        if period.score >= threshold {
            if current == 0 {
                current_start = index;
            }
            current += 1;
            if current > longest {
                longest = current;
                longest_start = current_start;
            }
        } else {
            current = 0;
        }
    }
    (longest, longest_start)
}
