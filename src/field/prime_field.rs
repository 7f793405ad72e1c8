//! Arithmetic over the Mersenne-31 prime field.
//!
//! Elements are stored as canonical `u32` residues in `[0, p)` with
//! `p = 2^31 - 1`. Every operation widens to `u64` before reducing, so no
//! intermediate can wrap. Serialization is 4-byte little-endian and rejects
//! non-canonical encodings.

use core::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// The Mersenne-31 prime `2^31 - 1`.
pub const MODULUS: u32 = 0x7fff_ffff;

/// Error surfaced by field operations that are undefined on some inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Attempted to invert (or divide by) the additive identity.
    DivisionByZero,
    /// A 4-byte encoding decoded to a value outside `[0, p)`.
    NonCanonical,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::DivisionByZero => write!(f, "division by the additive identity"),
            FieldError::NonCanonical => {
                write!(f, "field element encoding is not a canonical residue")
            }
        }
    }
}

impl std::error::Error for FieldError {}

/// Canonical field element modulo `2^31 - 1`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct FieldElement(u32);

impl<'de> Deserialize<'de> for FieldElement {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = u32::deserialize(deserializer)?;
        if value >= MODULUS {
            return Err(D::Error::custom("field element is not a canonical residue"));
        }
        Ok(FieldElement(value))
    }
}

impl fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FieldElement").field(&self.0).finish()
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FieldElement {
    /// Additive identity.
    pub const ZERO: FieldElement = FieldElement(0);
    /// Multiplicative identity.
    pub const ONE: FieldElement = FieldElement(1);

    /// Constructs an element from an unsigned integer, reducing modulo `p`.
    pub const fn new(value: u64) -> Self {
        FieldElement((value % MODULUS as u64) as u32)
    }

    /// Constructs an element from a signed integer using a mathematically
    /// correct reduction (negative inputs land in `[0, p)`).
    pub fn from_i64(value: i64) -> Self {
        let p = MODULUS as i64;
        FieldElement(value.rem_euclid(p) as u32)
    }

    /// Returns the canonical residue.
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Returns the canonical residue widened to `u64`.
    pub const fn as_u64(self) -> u64 {
        self.0 as u64
    }

    /// Field addition.
    pub fn add(self, rhs: FieldElement) -> FieldElement {
        FieldElement::new(self.as_u64() + rhs.as_u64())
    }

    /// Field subtraction.
    pub fn sub(self, rhs: FieldElement) -> FieldElement {
        FieldElement::new(self.as_u64() + MODULUS as u64 - rhs.as_u64())
    }

    /// Field multiplication.
    pub fn mul(self, rhs: FieldElement) -> FieldElement {
        FieldElement::new(self.as_u64() * rhs.as_u64())
    }

    /// Additive inverse.
    pub fn neg(self) -> FieldElement {
        FieldElement::new(MODULUS as u64 - self.as_u64())
    }

    /// Binary exponentiation with a non-negative exponent.
    pub fn pow(self, mut exponent: u64) -> FieldElement {
        let mut base = self;
        let mut result = FieldElement::ONE;
        while exponent > 0 {
            if exponent & 1 == 1 {
                result = result.mul(base);
            }
            base = base.mul(base);
            exponent >>= 1;
        }
        result
    }

    /// Multiplicative inverse via Fermat's little theorem.
    ///
    /// Fails with [`FieldError::DivisionByZero`] for the additive identity.
    pub fn inv(self) -> Result<FieldElement, FieldError> {
        if self.is_zero() {
            return Err(FieldError::DivisionByZero);
        }
        Ok(self.pow(MODULUS as u64 - 2))
    }

    /// True for the additive identity.
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Integer-magnitude comparison of canonical residues.
    ///
    /// This is *not* a field ordering; it is only meaningful for bound-style
    /// checks on residues known to encode small integers (scores,
    /// thresholds, bit values).
    pub fn gte(self, rhs: FieldElement) -> bool {
        self.0 >= rhs.0
    }

    /// Canonical 4-byte little-endian encoding.
    pub fn to_bytes(self) -> [u8; 4] {
        self.0.to_le_bytes()
    }

    /// Decodes a canonical 4-byte little-endian encoding.
    ///
    /// Encodings of values at or above the modulus are rejected so that
    /// committed leaves have exactly one byte representation per element.
    pub fn from_bytes(bytes: &[u8; 4]) -> Result<FieldElement, FieldError> {
        let value = u32::from_le_bytes(*bytes);
        if value >= MODULUS {
            return Err(FieldError::NonCanonical);
        }
        Ok(FieldElement(value))
    }
}

impl From<u32> for FieldElement {
    fn from(value: u32) -> Self {
        FieldElement::new(value as u64)
    }
}

impl From<u64> for FieldElement {
    fn from(value: u64) -> Self {
        FieldElement::new(value)
    }
}
