//! Public score formula over clamped capability features.
//!
//! The formula is supplied by the scoring layer and re-executed inside the
//! circuit to tie the witnessed score to the witnessed features:
//!
//! ```text
//! score = 10 + github*15 + api*20 + min(caps,5)*5
//!       + min(code_lines/100, 50)*3/10 + docs*10 + min(coverage,100)*2/10
//! ```
//!
//! clamped to 100, integer arithmetic throughout.

use serde::{Deserialize, Serialize};

use crate::field::FieldElement;

/// Raw capability features as supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Features {
    pub has_github: bool,
    pub has_api_endpoint: bool,
    pub capability_count: u32,
    pub code_lines: u32,
    pub has_documentation: bool,
    pub test_coverage: u32,
}

impl Features {
    /// Clamped feature vector witnessed by the circuit, in formula order.
    pub fn to_felts(&self) -> [FieldElement; 6] {
        [
            FieldElement::new(u64::from(self.has_github)),
            FieldElement::new(u64::from(self.has_api_endpoint)),
            FieldElement::new(u64::from(self.capability_count.min(5))),
            FieldElement::new(u64::from((self.code_lines / 100).min(50))),
            FieldElement::new(u64::from(self.has_documentation)),
            FieldElement::new(u64::from(self.test_coverage.min(100))),
        ]
    }
}

/// Base score granted to every agent.
const BASE_SCORE: u64 = 10;
/// Weight for a linked repository.
const GITHUB_WEIGHT: u64 = 15;
/// Weight for a reachable API endpoint.
const API_WEIGHT: u64 = 20;
/// Weight per declared capability (capped at 5).
const CAPABILITY_WEIGHT: u64 = 5;
/// Weight for documentation.
const DOCUMENTATION_WEIGHT: u64 = 10;

/// Recomputes the public score from clamped features.
pub fn compute_score(features: &Features) -> u32 {
    let github = u64::from(features.has_github);
    let api = u64::from(features.has_api_endpoint);
    let caps = u64::from(features.capability_count.min(5));
    let code_units = u64::from((features.code_lines / 100).min(50));
    let docs = u64::from(features.has_documentation);
    let coverage = u64::from(features.test_coverage.min(100));

    let score = BASE_SCORE
        + github * GITHUB_WEIGHT
        + api * API_WEIGHT
        + caps * CAPABILITY_WEIGHT
        + code_units * 3 / 10
        + docs * DOCUMENTATION_WEIGHT
        + coverage * 2 / 10;

    score.min(100) as u32
}
