use super::prime_field::{FieldElement, FieldError, MODULUS};

#[test]
fn add_sub_roundtrip_ok() {
    let a = FieldElement::new(100);
    let b = FieldElement::new(200);
    assert_eq!(a.add(b).sub(b), a);
    assert_eq!(a.add(b), FieldElement::new(300));
}

#[test]
fn sub_wraps_into_canonical_range() {
    let a = FieldElement::new(100);
    let b = FieldElement::new(200);
    assert_eq!(a.sub(b), FieldElement::new(MODULUS as u64 - 100));
}

#[test]
fn mul_inv_gives_one() {
    let a = FieldElement::new(42);
    let inv = a.inv().expect("inverse exists for non-zero element");
    assert_eq!(a.mul(inv), FieldElement::ONE);

    let large = FieldElement::new(MODULUS as u64 - 1);
    let inv = large.inv().expect("inverse of p - 1");
    assert_eq!(large.mul(inv), FieldElement::ONE);
}

#[test]
fn inv_of_zero_fails() {
    assert_eq!(FieldElement::ZERO.inv(), Err(FieldError::DivisionByZero));
}

#[test]
fn pow_zero_is_one() {
    assert_eq!(FieldElement::new(12345).pow(0), FieldElement::ONE);
    assert_eq!(FieldElement::new(2).pow(10), FieldElement::new(1024));
}

#[test]
fn neg_cancels() {
    let a = FieldElement::new(42);
    assert!(a.add(a.neg()).is_zero());
}

#[test]
fn from_i64_reduces_negatives() {
    let neg = FieldElement::from_i64(-1);
    assert_eq!(neg, FieldElement::new(MODULUS as u64 - 1));
    assert_eq!(FieldElement::from_i64(-(MODULUS as i64)), FieldElement::ZERO);
}

#[test]
fn gte_compares_canonical_residues() {
    assert!(FieldElement::new(80).gte(FieldElement::new(60)));
    assert!(FieldElement::new(60).gte(FieldElement::new(60)));
    assert!(!FieldElement::new(40).gte(FieldElement::new(60)));
}

#[test]
fn serde_le_roundtrip_ok() {
    let element = FieldElement::new(1_234_567);
    let decoded = FieldElement::from_bytes(&element.to_bytes()).expect("canonical roundtrip");
    assert_eq!(decoded, element);
}

#[test]
fn reject_noncanonical_bytes_err() {
    let err = FieldElement::from_bytes(&MODULUS.to_le_bytes())
        .expect_err("modulus encoding is non-canonical");
    assert_eq!(err, FieldError::NonCanonical);
}

#[test]
fn deserialization_rejects_noncanonical_residue() {
    // The JSON wire path must enforce the same canonical range as the byte
    // path; a raw u32 at or above the modulus is not a field element.
    assert!(serde_json::from_str::<FieldElement>("4294967295").is_err());
    assert!(serde_json::from_str::<FieldElement>(&MODULUS.to_string()).is_err());
    let element: FieldElement = serde_json::from_str("1234567").expect("canonical residue");
    assert_eq!(element, FieldElement::new(1_234_567));
}
