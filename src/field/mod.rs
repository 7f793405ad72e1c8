//! Finite-field and polynomial algebra over the Mersenne-31 prime.

pub mod domain;
pub mod polynomial;
pub mod prime_field;

pub use domain::EvaluationDomain;
pub use polynomial::Polynomial;
pub use prime_field::{FieldElement, FieldError, MODULUS};

#[cfg(test)]
mod tests;
