//! Dense polynomials over the Mersenne-31 field.
//!
//! Coefficients are stored in ascending order of degree and canonicalized by
//! trimming trailing zeros; the zero polynomial keeps a single zero
//! coefficient. All operations return new values.

use super::prime_field::{FieldElement, FieldError};

/// Dense polynomial represented by coefficients in ascending order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polynomial {
    coefficients: Vec<FieldElement>,
}

impl Polynomial {
    /// Constructs a polynomial from raw coefficients, canonicalizing the
    /// representation.
    pub fn new(mut coefficients: Vec<FieldElement>) -> Self {
        while coefficients.len() > 1 && coefficients.last().map(|c| c.is_zero()) == Some(true) {
            coefficients.pop();
        }
        if coefficients.is_empty() {
            coefficients.push(FieldElement::ZERO);
        }
        Self { coefficients }
    }

    /// The zero polynomial.
    pub fn zero() -> Self {
        Self {
            coefficients: vec![FieldElement::ZERO],
        }
    }

    /// A degree-zero polynomial with the given constant term.
    pub fn constant(value: FieldElement) -> Self {
        Self::new(vec![value])
    }

    /// Coefficients in ascending order (canonical, trailing zeros trimmed).
    pub fn coefficients(&self) -> &[FieldElement] {
        &self.coefficients
    }

    /// True for the canonical zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.coefficients.len() == 1 && self.coefficients[0].is_zero()
    }

    /// Degree of the polynomial; 0 for the zero polynomial by convention.
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Evaluates the polynomial at `point` using Horner's method.
    pub fn evaluate(&self, point: FieldElement) -> FieldElement {
        let mut result = FieldElement::ZERO;
        for coeff in self.coefficients.iter().rev() {
            result = result.mul(point).add(*coeff);
        }
        result
    }

    /// Evaluates the polynomial at every point in order.
    pub fn evaluate_multi(&self, points: &[FieldElement]) -> Vec<FieldElement> {
        points.iter().map(|point| self.evaluate(*point)).collect()
    }

    /// Componentwise sum, padding the shorter operand with zeros.
    pub fn add(&self, rhs: &Polynomial) -> Polynomial {
        let len = self.coefficients.len().max(rhs.coefficients.len());
        let mut out = Vec::with_capacity(len);
        for i in 0..len {
            let a = self.coefficients.get(i).copied().unwrap_or(FieldElement::ZERO);
            let b = rhs.coefficients.get(i).copied().unwrap_or(FieldElement::ZERO);
            out.push(a.add(b));
        }
        Polynomial::new(out)
    }

    /// Componentwise difference, padding the shorter operand with zeros.
    pub fn sub(&self, rhs: &Polynomial) -> Polynomial {
        let len = self.coefficients.len().max(rhs.coefficients.len());
        let mut out = Vec::with_capacity(len);
        for i in 0..len {
            let a = self.coefficients.get(i).copied().unwrap_or(FieldElement::ZERO);
            let b = rhs.coefficients.get(i).copied().unwrap_or(FieldElement::ZERO);
            out.push(a.sub(b));
        }
        Polynomial::new(out)
    }

    /// Schoolbook convolution product; a zero operand short-circuits.
    pub fn mul(&self, rhs: &Polynomial) -> Polynomial {
        if self.is_zero() || rhs.is_zero() {
            return Polynomial::zero();
        }
        let mut out = vec![FieldElement::ZERO; self.coefficients.len() + rhs.coefficients.len() - 1];
        for (i, a) in self.coefficients.iter().enumerate() {
            for (j, b) in rhs.coefficients.iter().enumerate() {
                out[i + j] = out[i + j].add(a.mul(*b));
            }
        }
        Polynomial::new(out)
    }

    /// Componentwise scalar multiplication.
    pub fn scale(&self, scalar: FieldElement) -> Polynomial {
        Polynomial::new(
            self.coefficients
                .iter()
                .map(|coeff| coeff.mul(scalar))
                .collect(),
        )
    }

    /// Splits into even- and odd-indexed coefficient halves such that
    /// `p(x) = even(x^2) + x * odd(x^2)`.
    ///
    /// An empty half collapses to the zero polynomial so the representation
    /// stays well-formed.
    pub fn split_even_odd(&self) -> (Polynomial, Polynomial) {
        let mut even = Vec::new();
        let mut odd = Vec::new();
        for (idx, coeff) in self.coefficients.iter().enumerate() {
            if idx % 2 == 0 {
                even.push(*coeff);
            } else {
                odd.push(*coeff);
            }
        }
        let even = if even.is_empty() {
            Polynomial::zero()
        } else {
            Polynomial::new(even)
        };
        let odd = if odd.is_empty() {
            Polynomial::zero()
        } else {
            Polynomial::new(odd)
        };
        (even, odd)
    }

    /// One FRI reduction step: `even + alpha * odd`, halving the effective
    /// degree.
    pub fn fri_fold(&self, alpha: FieldElement) -> Polynomial {
        let (even, odd) = self.split_even_odd();
        even.add(&odd.scale(alpha))
    }

    /// Lagrange interpolation through `(xs[i], ys[i])`.
    ///
    /// Domain points must be distinct; a duplicate point makes a basis
    /// denominator vanish and the inversion reports
    /// [`FieldError::DivisionByZero`]. Empty input yields the zero
    /// polynomial.
    pub fn interpolate(xs: &[FieldElement], ys: &[FieldElement]) -> Result<Polynomial, FieldError> {
        debug_assert_eq!(xs.len(), ys.len());
        if xs.is_empty() {
            return Ok(Polynomial::zero());
        }

        let mut result = Polynomial::zero();
        for (i, (x_i, y_i)) in xs.iter().zip(ys.iter()).enumerate() {
            let mut basis = Polynomial::constant(FieldElement::ONE);
            let mut denominator = FieldElement::ONE;
            for (j, x_j) in xs.iter().enumerate() {
                if i == j {
                    continue;
                }
                // (x - x_j)
                basis = basis.mul(&Polynomial::new(vec![x_j.neg(), FieldElement::ONE]));
                denominator = denominator.mul(x_i.sub(*x_j));
            }
            let scale = y_i.mul(denominator.inv()?);
            result = result.add(&basis.scale(scale));
        }
        Ok(result)
    }
}
