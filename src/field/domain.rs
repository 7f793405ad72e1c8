//! Evaluation domains used for interpolation and low-degree extension.

use super::prime_field::FieldElement;

/// Ordered sequence of distinct field elements used as evaluation points.
///
/// Distinctness is a caller responsibility; Lagrange interpolation over a
/// domain with duplicates fails when the basis denominator is inverted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationDomain {
    points: Vec<FieldElement>,
}

impl EvaluationDomain {
    /// Wraps an explicit point sequence.
    pub fn new(points: Vec<FieldElement>) -> Self {
        Self { points }
    }

    /// The natural trace domain `{1, 2, .., size}`.
    pub fn natural(size: usize) -> Self {
        Self {
            points: (1..=size as u64).map(FieldElement::new).collect(),
        }
    }

    /// The extension domain `{size + 1, .., size + 2 * size}` used for the
    /// low-degree extension of the composition polynomial.
    pub fn extension(size: usize) -> Self {
        let start = size as u64 + 1;
        Self {
            points: (start..start + 2 * size as u64)
                .map(FieldElement::new)
                .collect(),
        }
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the domain has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The ordered points.
    pub fn points(&self) -> &[FieldElement] {
        &self.points
    }
}
